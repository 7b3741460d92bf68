//! Error types for GeoServer REST calls.

use thiserror::Error;

/// Errors that can occur talking to GeoServer.
#[derive(Error, Debug)]
pub enum RestError {
    #[error("GeoServer returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request to GeoServer failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse GeoServer response: {0}")]
    Parse(String),
}

/// Result type for GeoServer REST operations.
pub type Result<T> = std::result::Result<T, RestError>;
