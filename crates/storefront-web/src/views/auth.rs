//! Login and add-item pages.

use storefront_core::catalog_view::capitalize;

use super::{escape, Layout, Notice};
use crate::forms::{ItemForm, FORM_CATEGORIES};

/// Login form. `email` refills the field after a failed attempt.
pub fn login(email: &str, notice: Option<Notice>) -> String {
    let body = format!(
        r#"<h1>Login</h1><p>Sign in to your account</p>
<form method="post" action="/login">
<label>Email <input type="email" name="email" placeholder="Enter your email" value="{email}" required></label>
<label>Password <input type="password" name="password" placeholder="Enter your password" required></label>
<button type="submit">Login</button>
</form>
<div class="demo"><p><strong>Demo Credentials:</strong></p><p>Email: user@example.com</p><p>Password: password123</p></div>"#,
        email = escape(email)
    );
    Layout {
        title: "Login",
        notice,
        ..Default::default()
    }
    .render(&body)
}

/// Shown after a successful login, navigating to the list shortly after.
pub fn login_success() -> String {
    Layout {
        title: "Login",
        logged_in: true,
        notice: Some(Notice::Success("Login successful! Redirecting...".into())),
        redirect_after: Some((1, "/items")),
    }
    .render(r#"<h1>Login</h1><p><a href="/items">Continue to items</a></p>"#)
}

/// Add-item form prefilled from `form`.
pub fn add_item(form: &ItemForm, notice: Option<Notice>) -> String {
    let mut body = String::from(
        r#"<h1>Add New Item</h1><p>Create a new product in your inventory</p><form method="post" action="/add-item">"#,
    );

    body.push_str(&format!(
        r#"<label>Item Name * <input type="text" name="name" placeholder="Enter item name" value="{}" required></label>"#,
        escape(&form.name)
    ));
    body.push_str(&format!(
        r#"<label>Short Description * <input type="text" name="description" placeholder="Brief description of the item" value="{}" required></label>"#,
        escape(&form.description)
    ));
    body.push_str(&format!(
        r#"<label>Long Description <textarea name="longDescription" placeholder="Detailed description of the item">{}</textarea></label>"#,
        escape(&form.long_description)
    ));
    body.push_str(&format!(
        r#"<label>Price ($) * <input type="number" name="price" placeholder="0.00" step="0.01" min="0" value="{}" required></label>"#,
        escape(&form.price)
    ));
    body.push_str(&format!(
        r#"<label>Stock Quantity * <input type="number" name="stock" placeholder="0" min="0" value="{}" required></label>"#,
        escape(&form.stock)
    ));

    body.push_str(r#"<label>Category <select name="category">"#);
    for category in FORM_CATEGORIES {
        let selected = if form.category == category { " selected" } else { "" };
        body.push_str(&format!(
            r#"<option value="{category}"{selected}>{}</option>"#,
            capitalize(category)
        ));
    }
    body.push_str("</select></label>");

    body.push_str(&format!(
        r#"<label>Image URL <input type="url" name="image" placeholder="https://example.com/image.jpg" value="{}"></label>"#,
        escape(&form.image)
    ));
    body.push_str(
        r#"<button type="submit">Add Item</button> <a href="/items">Cancel</a></form>"#,
    );

    Layout {
        title: "Add Item",
        logged_in: true,
        notice,
        ..Default::default()
    }
    .render(&body)
}

/// Shown after the record is created, navigating to the list shortly after.
pub fn add_item_success(name: &str) -> String {
    let body = format!(
        r#"<h1>Add New Item</h1><p>{} was added to the catalog.</p><a href="/items">View items</a>"#,
        escape(name)
    );
    Layout {
        title: "Add Item",
        logged_in: true,
        notice: Some(Notice::Success("Item created successfully!".into())),
        redirect_after: Some((2, "/items")),
    }
    .render(&body)
}
