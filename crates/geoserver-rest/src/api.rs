//! The capability interface the publish workflow depends on.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::types::{CoverageInfo, FeatureTypeInfo};

/// The six GeoServer REST calls the publish workflow needs.
///
/// Implemented by [`crate::GeoServerClient`] against a live server and
/// by fakes in the publisher's tests. Mutating calls treat HTTP 201 and
/// 202 as success and are attempted exactly once; no retry happens at
/// this layer or above.
#[async_trait]
pub trait GeoServerRest: Send + Sync {
    /// Create a coverage store from raw GeoTIFF bytes under `store`,
    /// without auto-configuring a layer (`configure=none`).
    async fn create_coverage_store(&self, store: &str, geotiff: Bytes) -> Result<()>;

    /// Register a coverage (raster layer) under an existing coverage
    /// store. Returns the server-confirmed coverage name.
    async fn register_coverage(&self, store: &str, coverage: &str) -> Result<String>;

    /// Upload a zipped shapefile bundle, creating the data store and
    /// its layer in one step (`configure=all`).
    async fn upload_vector_archive(&self, store: &str, archive: Bytes) -> Result<()>;

    /// Fetch metadata for a published coverage.
    async fn get_coverage_info(&self, coverage: &str) -> Result<CoverageInfo>;

    /// List the feature type names registered under a data store, in
    /// the server's listing order.
    async fn list_feature_types(&self, store: &str) -> Result<Vec<String>>;

    /// Fetch metadata for one feature type in a data store.
    async fn get_feature_type_info(&self, store: &str, feature_type: &str)
        -> Result<FeatureTypeInfo>;
}
