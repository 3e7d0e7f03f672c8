// src/error.rs

//! Unified error handling for the product catalog.

use std::fmt;

use thiserror::Error;

use crate::models::ProductKey;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-side or network failure while fetching data
    #[error("An error occurred: {0}")]
    Client(String),

    /// The backend answered with an unsuccessful status code
    #[error("Server returned code: {status}, error message is: {message}")]
    Server { status: u16, message: String },

    /// Route parameter is not a positive integer
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// No product in the loaded collection carries this id
    #[error("Product {0} was not found")]
    ProductNotFound(ProductKey),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a client-side fetch error.
    pub fn client(message: impl fmt::Display) -> Self {
        Self::Client(message.to_string())
    }

    /// Create a server-status fetch error.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error came out of a data fetch.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Client(_) | Self::Server { .. })
    }
}
