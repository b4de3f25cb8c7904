//! # storefront-web
//!
//! Server-rendered client of the catalog service.
//!
//! | Method | Path | Page |
//! |---|---|---|
//! | GET | `/` | home |
//! | GET | `/items?search=&category=&sort=` | filtered list |
//! | GET | `/items/{id}?quantity=` | detail |
//! | GET, POST | `/login` | login form |
//! | POST | `/logout` | drops the session marker |
//! | GET, POST | `/add-item` | create form, session required |

pub mod client;
pub mod errors;
pub mod fallback;
pub mod forms;
pub mod handlers;
pub mod state;
pub mod views;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use storefront_core::access::{AccessPolicy, ProtectedRoute};
use storefront_core::middleware::{DenyResponse, PanicGuard, RequestLogger, SessionGate};

use handlers::{auth_handlers, page_handlers};
use state::AppState;

/// Path a visitor without a session marker is sent to.
pub const LOGIN_PATH: &str = "/login";

/// Build the page server around injected backends.
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(page_handlers::path_config())
        .app_data(page_handlers::query_config())
        .wrap(SessionGate::new(
            page_policy(),
            DenyResponse::RedirectTo(LOGIN_PATH.to_string()),
        ))
        .wrap(PanicGuard)
        .wrap(RequestLogger)
        .configure(page_handlers::configure)
        .configure(auth_handlers::configure)
}

/// Pages that need a session marker.
pub fn page_policy() -> AccessPolicy {
    AccessPolicy::new().with_route(ProtectedRoute::prefix("/add-item"))
}
