//! HTML rendering.
//!
//! Pages are plain server-rendered HTML: data, navigation and forms only.

pub mod auth;
pub mod catalog;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline replacement for a transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn render(&self) -> String {
        let (class, text) = match self {
            Notice::Success(text) => ("notice success", text),
            Notice::Error(text) => ("notice error", text),
        };
        format!(r#"<div class="{class}" role="status">{}</div>"#, escape(text))
    }
}

/// A full HTML document around a page body.
#[derive(Debug, Default)]
pub struct Layout<'a> {
    pub title: &'a str,
    pub logged_in: bool,
    pub notice: Option<Notice>,
    /// Navigate to `url` after `seconds`.
    pub redirect_after: Option<(u32, &'a str)>,
}

impl Layout<'_> {
    pub fn render(&self, body: &str) -> String {
        let mut head = format!(
            "<meta charset=\"utf-8\"><title>{} | MyApp</title>",
            escape(self.title)
        );
        if let Some((seconds, url)) = self.redirect_after {
            head.push_str(&format!(
                r#"<meta http-equiv="refresh" content="{seconds};url={}">"#,
                escape(url)
            ));
        }

        let notice = self.notice.as_ref().map(Notice::render).unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\"><head>{head}</head><body>{nav}{notice}<main>{body}</main></body></html>",
            nav = nav(self.logged_in),
        )
    }
}

fn nav(logged_in: bool) -> String {
    let mut links = String::from(r#"<a href="/">MyApp</a> <a href="/">Home</a> <a href="/items">Items</a>"#);
    if logged_in {
        links.push_str(
            r#" <a href="/add-item">Add Item</a> <form method="post" action="/logout" class="inline"><button type="submit">Logout</button></form>"#,
        );
    } else {
        links.push_str(r#" <a href="/login">Login</a>"#);
    }
    format!("<nav>{links}</nav>")
}

/// Landing page.
pub fn home(logged_in: bool) -> String {
    let body = r#"<h1>Welcome to MyApp</h1>
<p>Browse the catalog, sign in, and add items to the inventory.</p>
<a href="/items">Browse Items</a>"#;
    Layout {
        title: "Home",
        logged_in,
        ..Default::default()
    }
    .render(body)
}
