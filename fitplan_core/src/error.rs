//! Error types for the fitplan_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitplan_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// User registry error (malformed record, failed append)
    #[error("Registry error: {0}")]
    Registry(String),

    /// Input stream closed while a prompt was waiting for an answer
    #[error("input stream closed before registration completed")]
    InputClosed,

    /// Generic error
    #[error("{0}")]
    Other(String),
}
