//! JSON error body shared by every HTTP error response.

use serde::{Deserialize, Serialize};

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const AUTH_REQUIRED: &str = "AUTH_REQUIRED";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// `{"error": "...", "code": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }

    pub fn internal() -> Self {
        Self::new("Internal server error", INTERNAL_ERROR)
    }
}
