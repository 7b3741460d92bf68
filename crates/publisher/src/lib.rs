//! Publish orchestration for uploaded geospatial datasets.
//!
//! Takes a staged upload batch through classification, optional
//! shapefile packaging, the GeoServer publish sequence, and best-effort
//! metadata resolution, producing the response payload for the client.

pub mod classify;
pub mod error;
pub mod metadata;
pub mod package;
pub mod publish;
pub mod response;
pub mod workflow;

pub use classify::{classify, DatasetKind, StagedFile, UploadBatch};
pub use error::{PublishError, Result};
pub use workflow::PublishWorkflow;
