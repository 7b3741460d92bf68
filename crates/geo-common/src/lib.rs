//! Shared types for the geo-upload-publisher workspace.

pub mod bbox;
pub mod layer;

pub use bbox::BoundingBox;
pub use layer::{LayerKind, PublishedLayer, UploadResponse};
