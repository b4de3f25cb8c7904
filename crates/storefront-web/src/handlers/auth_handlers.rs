//! Login, logout and add-item handlers

use actix_web::{get, http::header, http::StatusCode, post, web, HttpRequest, HttpResponse};
use storefront_core::session::SessionMarker;
use tracing::{info, warn};

use super::html;
use crate::errors::WebError;
use crate::forms::{ItemForm, LoginForm};
use crate::state::AppState;
use crate::views::auth::{add_item, add_item_success, login, login_success};
use crate::views::Notice;

/// Configure session and create-form routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page)
        .service(submit_login)
        .service(logout)
        .service(add_item_page)
        .service(submit_item);
}

#[get("/login")]
async fn login_page() -> HttpResponse {
    html(StatusCode::OK, login("", None))
}

/// Check credentials; on success set the session marker
#[post("/login")]
async fn submit_login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    let form = form.into_inner();
    match state.credentials.verify(&form.email, &form.password).await {
        Ok(true) => {
            info!(email = %form.email, "Login succeeded");
            HttpResponse::Ok()
                .cookie(SessionMarker::issue())
                .content_type(header::ContentType::html())
                .body(login_success())
        }
        Ok(false) => {
            info!(email = %form.email, "Login rejected");
            let notice = Notice::Error("Invalid email or password".into());
            html(StatusCode::OK, login(&form.email, Some(notice)))
        }
        Err(err) => {
            warn!(error = %err, "Credential check failed");
            let notice = Notice::Error(WebError::from(err).to_string());
            html(StatusCode::OK, login(&form.email, Some(notice)))
        }
    }
}

/// Drop the session marker and return home
#[post("/logout")]
async fn logout() -> HttpResponse {
    HttpResponse::SeeOther()
        .cookie(SessionMarker::revoke())
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[get("/add-item")]
async fn add_item_page() -> HttpResponse {
    html(StatusCode::OK, add_item(&ItemForm::default(), None))
}

/// Validate the form and create the record through the catalog service
#[post("/add-item")]
async fn submit_item(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<ItemForm>,
) -> HttpResponse {
    let form = form.into_inner();

    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            let notice = Notice::Error(WebError::from(err).to_string());
            return html(StatusCode::BAD_REQUEST, add_item(&form, Some(notice)));
        }
    };

    let session = SessionMarker::from_request(&req);
    match state.catalog.create_item(&request, session).await {
        Ok(item) => {
            info!(id = item.id, name = %item.name, "Item created");
            html(StatusCode::OK, add_item_success(&item.name))
        }
        Err(err) => {
            warn!(error = %err, "Failed to create item");
            let notice = Notice::Error(WebError::Create(err).to_string());
            html(StatusCode::BAD_GATEWAY, add_item(&form, Some(notice)))
        }
    }
}
