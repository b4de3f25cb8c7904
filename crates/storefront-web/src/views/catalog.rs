//! List and detail pages.

use storefront_core::catalog_view::{capitalize, CatalogQuery, SortKey};
use storefront_core::models::Product;

use super::{escape, Layout, Notice};

/// Everything the list page shows.
pub struct ListPage<'a> {
    pub query: &'a CatalogQuery,
    pub categories: &'a [String],
    pub items: &'a [Product],
    pub logged_in: bool,
    pub notice: Option<Notice>,
}

impl ListPage<'_> {
    pub fn render(self) -> String {
        let mut body = String::from(
            "<h1>Products &amp; Items</h1><p>Browse our collection of high-quality products</p>",
        );

        // filters submit back to /items as a query string
        body.push_str(&format!(
            r#"<form method="get" action="/items" class="filters"><label>Search <input type="text" name="search" placeholder="Search items..." value="{}"></label>"#,
            escape(&self.query.search)
        ));

        body.push_str(r#"<label>Category <select name="category">"#);
        let selected_category = self.query.selected_category();
        for category in self.categories {
            let selected = if category == selected_category { " selected" } else { "" };
            body.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape(category),
                escape(&capitalize(category))
            ));
        }
        body.push_str("</select></label>");

        body.push_str(r#"<label>Sort By <select name="sort">"#);
        for key in SortKey::ALL {
            let selected = if key == self.query.sort { " selected" } else { "" };
            body.push_str(&format!(r#"<option value="{key}"{selected}>{}</option>"#, key.label()));
        }
        body.push_str(r#"</select></label><button type="submit">Apply</button></form>"#);

        body.push_str(&format!(
            r#"<p class="count"><strong>{}</strong> product(s) found</p>"#,
            self.items.len()
        ));

        if self.items.is_empty() {
            body.push_str("<p>No items found matching your criteria.</p>");
        } else {
            body.push_str(r#"<div class="grid">"#);
            for item in self.items {
                body.push_str(&item_card(item));
            }
            body.push_str("</div>");
        }

        Layout {
            title: "Items",
            logged_in: self.logged_in,
            notice: self.notice,
            ..Default::default()
        }
        .render(&body)
    }
}

fn item_card(item: &Product) -> String {
    let stock = if item.in_stock() { "In Stock" } else { "Out of Stock" };
    format!(
        r#"<a class="card" href="/items/{id}"><img src="{image}" alt="{name}"><h3>{name}</h3><p>{description}</p><span class="price">${price}</span> <span class="stock">{stock}</span></a>"#,
        id = item.id,
        image = escape(&item.image),
        name = escape(&item.name),
        description = escape(&item.description),
        price = item.display_price(),
    )
}

/// Everything the detail page shows.
pub struct DetailPage<'a> {
    pub item: &'a Product,
    /// Clamped selection, `None` when out of stock.
    pub quantity: Option<u32>,
    pub logged_in: bool,
    pub notice: Option<Notice>,
}

impl DetailPage<'_> {
    pub fn render(self) -> String {
        let item = self.item;
        let mut body = format!(
            r#"<nav class="breadcrumb"><a href="/items">Products</a> / <span>{name}</span></nav>"#,
            name = escape(&item.name)
        );

        if item.image.is_empty() {
            body.push_str("<div>No image available</div>");
        } else {
            body.push_str(&format!(
                r#"<img src="{}" alt="{}">"#,
                escape(&item.image),
                escape(&item.name)
            ));
        }

        if !item.category.is_empty() {
            body.push_str(&format!(r#"<span class="badge">{}</span>"#, escape(&capitalize(&item.category))));
        }
        body.push_str(&format!(
            r#"<h1>{}</h1><p class="price">${}</p>"#,
            escape(&item.name),
            item.display_price()
        ));
        if item.in_stock() {
            body.push_str(&format!(r#"<p class="stock">In Stock ({} available)</p>"#, item.stock));
        } else {
            body.push_str(r#"<p class="stock">Out of Stock</p>"#);
        }

        body.push_str(&format!("<p>{}</p>", escape(&item.description)));
        if !item.long_description.is_empty() {
            body.push_str(&format!(r#"<div class="long">{}</div>"#, escape(&item.long_description)));
        }

        if !item.specs.is_empty() {
            body.push_str("<h3>Specifications</h3><dl>");
            for (key, value) in &item.specs {
                body.push_str(&format!("<dt>{}:</dt><dd>{}</dd>", escape(&capitalize(key)), escape(value)));
            }
            body.push_str("</dl>");
        }

        if let Some(quantity) = self.quantity {
            let lower = quantity.saturating_sub(1).max(1);
            let upper = (quantity + 1).min(item.stock);
            body.push_str(&format!(
                r#"<div class="quantity">Quantity <a href="/items/{id}?quantity={lower}">-</a> <span id="quantity">{quantity}</span> <a href="/items/{id}?quantity={upper}">+</a></div>"#,
                id = item.id,
            ));
        }

        body.push_str(r#"<a href="/items">Back to Items</a>"#);

        Layout {
            title: &item.name,
            logged_in: self.logged_in,
            notice: self.notice,
            ..Default::default()
        }
        .render(&body)
    }
}

/// Shown when the service reports the identifier as unknown.
pub fn not_found(logged_in: bool) -> String {
    Layout {
        title: "Item Not Found",
        logged_in,
        ..Default::default()
    }
    .render(
        r#"<h1>Item Not Found</h1><p>The item you're looking for doesn't exist.</p><a href="/items">Back to Items</a>"#,
    )
}
