use thiserror::Error;

/// Failures talking to the catalog service.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Catalog service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Item not found")]
    NotFound,

    #[error("Catalog service returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Add-item form problems caught before anything is sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Stock must be a non-negative whole number")]
    InvalidStock,
}

/// Failures a page handler turns into an inline error notice.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    Form(#[from] FormError),

    #[error("Failed to create item. Please try again.")]
    Create(#[source] ClientError),

    #[error("Failed to load items. Please try again.")]
    List(#[source] ClientError),

    #[error("Failed to load item details")]
    Detail(#[source] ClientError),

    #[error("An error occurred during login")]
    Login(#[from] storefront_core::auth::AuthError),
}
