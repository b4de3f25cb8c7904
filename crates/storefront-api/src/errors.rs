//! Error handling module
//!
//! - `RepositoryError` for the data access layer
//! - `ValidationError` for request bodies that cannot become records
//! - `ApiError` maps both onto HTTP responses

use actix_web::{HttpResponse, ResponseError};
use storefront_core::errors::{ErrorBody, INTERNAL_ERROR, NOT_FOUND, VALIDATION_ERROR};
use thiserror::Error;
use tracing::error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Item not found")]
    ItemNotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ItemNotFound => {
                HttpResponse::NotFound().json(ErrorBody::new(self.to_string(), NOT_FOUND))
            }
            ApiError::Validation(_) | ApiError::MalformedBody(_) => {
                HttpResponse::BadRequest().json(ErrorBody::new(self.to_string(), VALIDATION_ERROR))
            }
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Handler failed");
                HttpResponse::InternalServerError().json(ErrorBody::new(self.to_string(), INTERNAL_ERROR))
            }
        }
    }
}

/// Request-body validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Field {0} must be a number")]
    NotANumber(&'static str),

    #[error("Field {0} must not be negative")]
    Negative(&'static str),
}

/// Repository-level errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Catalog lock poisoned")]
    LockPoisoned,
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::ItemNotFound,
            RepositoryError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

/// Result type alias for application errors
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for repository errors
pub type RepoResult<T> = Result<T, RepositoryError>;
