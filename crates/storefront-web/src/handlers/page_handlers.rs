//! Catalog page handlers

use actix_web::{get, http::StatusCode, web, HttpRequest, HttpResponse};
use storefront_core::catalog_view::{categories, CatalogQuery};
use storefront_core::session::SessionMarker;
use tracing::warn;

use super::html;
use crate::errors::WebError;
use crate::fallback::{placeholder_item, placeholder_items};
use crate::forms::{clamp_quantity, QuantityQuery};
use crate::state::AppState;
use crate::views::catalog::{not_found, DetailPage, ListPage};
use crate::views::{home, Notice};

/// Configure home and catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(list_items).service(item_detail);
}

fn logged_in(req: &HttpRequest) -> bool {
    SessionMarker::from_request(req).is_some()
}

#[get("/")]
async fn index(req: HttpRequest) -> HttpResponse {
    html(StatusCode::OK, home(logged_in(&req)))
}

/// Item list, filtered and sorted per the query string
#[get("/items")]
async fn list_items(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<CatalogQuery>,
) -> HttpResponse {
    let (items, notice) = match state.catalog.list_items().await {
        Ok(items) => (items, None),
        Err(err) => {
            warn!(error = %err, "Failed to load items, showing placeholders");
            let err = WebError::List(err);
            (placeholder_items(), Some(Notice::Error(err.to_string())))
        }
    };

    let categories = categories(&items);
    let visible = query.apply(&items);
    let page = ListPage {
        query: &query,
        categories: &categories,
        items: &visible,
        logged_in: logged_in(&req),
        notice,
    };
    html(StatusCode::OK, page.render())
}

/// Item detail with a quantity selector; falls back to a placeholder record
/// when the fetch fails
#[get("/items/{id}")]
async fn item_detail(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<QuantityQuery>,
) -> HttpResponse {
    let id = path.into_inner();
    let logged_in = logged_in(&req);

    let (item, notice) = match state.catalog.get_item(id).await {
        Ok(item) => (item, None),
        // an unknown id is a failed fetch like any other
        Err(err) => {
            warn!(id, error = %err, "Failed to load item, showing placeholder");
            let err = WebError::Detail(err);
            (placeholder_item(id), Some(Notice::Error(err.to_string())))
        }
    };

    let page = DetailPage {
        quantity: clamp_quantity(query.quantity, item.stock),
        item: &item,
        logged_in,
        notice,
    };
    html(StatusCode::OK, page.render())
}

/// A non-numeric item id names no record.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let page = html(StatusCode::NOT_FOUND, not_found(logged_in(req)));
        actix_web::error::InternalError::from_response(err, page).into()
    })
}

/// An unparseable `quantity` is treated as absent.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        let location = req.path().to_string();
        let redirect = HttpResponse::SeeOther()
            .insert_header((actix_web::http::header::LOCATION, location))
            .finish();
        actix_web::error::InternalError::from_response(err, redirect).into()
    })
}
