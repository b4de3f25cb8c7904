//! # storefront-api
//!
//! Catalog service: a small CRUD surface over an in-memory product
//! collection.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/health` | `{status, timestamp}` |
//! | GET | `/api/items` | array of records |
//! | GET | `/api/items/{id}` | one record |
//! | POST | `/api/items` | `201` + created record |
//! | PUT | `/api/items/{id}` | updated record |
//! | DELETE | `/api/items/{id}` | `{message, item}` |

pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header, Method},
    web, App,
};
use storefront_core::access::{AccessPolicy, ProtectedRoute};
use storefront_core::config::ApiConfig;
use storefront_core::middleware::{DenyResponse, PanicGuard, RequestLogger, SessionGate};

use errors::ApiError;
use handlers::{health_handlers, item_handlers};
use repository::ProductRepository;

/// Build the service around an injected repository.
pub fn create_app(
    repo: Arc<dyn ProductRepository>,
    config: &ApiConfig,
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
        .app_data(web::Data::from(repo))
        .app_data(json_config())
        .app_data(path_config())
        .wrap(SessionGate::new(write_policy(config), DenyResponse::Unauthorized))
        .wrap(cors(config))
        .wrap(PanicGuard)
        .wrap(RequestLogger)
        .configure(health_handlers::configure)
        .configure(item_handlers::configure)
}

/// Write endpoints that need a session marker. Empty unless `protect_writes`.
pub fn write_policy(config: &ApiConfig) -> AccessPolicy {
    if !config.protect_writes {
        return AccessPolicy::new();
    }
    AccessPolicy::new().with_route(
        ProtectedRoute::prefix("/api/items").methods([Method::POST, Method::PUT, Method::DELETE]),
    )
}

fn cors(config: &ApiConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600);

    for origin in &config.allowed_origins {
        cors = if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        };
    }
    cors
}

/// Malformed JSON bodies become a `400` in the service's error format.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into())
}

/// A path id that does not parse as an integer matches no record.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req| ApiError::ItemNotFound.into())
}
