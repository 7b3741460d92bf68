//! Error types for the publish workflow.

use geoserver_rest::RestError;
use thiserror::Error;

/// Errors that can occur while publishing an upload batch.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The upload batch is unusable; no remote call was made.
    #[error("{0}")]
    Validation(String),

    #[error("Failed to read staged file: {0}")]
    FileRead(#[from] std::io::Error),

    /// The local shapefile archive could not be assembled.
    #[error("Failed to assemble shapefile archive: {0}")]
    Packaging(String),

    #[error("GeoServer call failed: {0}")]
    Remote(#[from] RestError),

    /// The coverage store exists remotely but its coverage was never
    /// registered. Nothing rolls the store back; the orphan is logged.
    #[error("Coverage store '{store}' created but coverage registration failed: {source}")]
    PartialPublish {
        store: String,
        #[source]
        source: RestError,
    },
}

/// Result type for publish operations.
pub type Result<T> = std::result::Result<T, PublishError>;
