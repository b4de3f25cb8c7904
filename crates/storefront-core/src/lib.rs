//! # storefront-core
//!
//! Shared foundation for the storefront catalog service and web client:
//! the product record, catalog view logic, the session marker and its gate,
//! credential verification, configuration and tracing setup.

pub mod access;
pub mod auth;
pub mod catalog_view;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod session;
pub mod telemetry;

pub use access::{Access, AccessPolicy, ProtectedRoute};
pub use auth::{AuthError, CredentialVerifier, StaticCredentials};
pub use catalog_view::{CatalogQuery, SortKey};
pub use config::{ConfigError, StorefrontConfig};
pub use models::Product;
pub use session::SessionMarker;
