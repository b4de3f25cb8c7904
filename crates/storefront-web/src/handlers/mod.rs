pub mod auth_handlers;
pub mod page_handlers;

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};

/// An HTML page response.
pub(crate) fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}
