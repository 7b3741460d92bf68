//! End-to-end publish workflow for one staged upload batch.

use bytes::Bytes;
use geo_common::{LayerKind, UploadResponse};
use geoserver_rest::{GeoServerConfig, GeoServerRest};
use std::path::Path;
use tracing::{error, info};

use crate::classify::{classify, DatasetKind, StagedFile, UploadBatch};
use crate::error::PublishError;
use crate::{metadata, package, publish, response};

/// Drives one upload batch through classification, packaging, the
/// remote publish sequence, and metadata resolution.
///
/// Generic over the GeoServer capability trait so tests run against a
/// fake remote. All remote calls happen strictly in sequence; a failed
/// required step stops the workflow before any later call.
pub struct PublishWorkflow<R: GeoServerRest> {
    remote: R,
    config: GeoServerConfig,
}

impl<R: GeoServerRest> PublishWorkflow<R> {
    pub fn new(remote: R, config: GeoServerConfig) -> Self {
        Self { remote, config }
    }

    pub fn config(&self) -> &GeoServerConfig {
        &self.config
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Publish a staged batch and compose the client response.
    ///
    /// Never returns an error: every failure becomes a structured
    /// failure payload.
    pub async fn publish(&self, batch: &UploadBatch) -> UploadResponse {
        match classify(batch) {
            DatasetKind::Invalid { reason } => {
                info!(reason = %reason, "Upload batch rejected before publish");
                UploadResponse::failed(reason)
            }
            DatasetKind::Raster { primary } => self.publish_raster(&primary).await,
            DatasetKind::VectorArchive { archive } => {
                let layer_name = archive.stem().to_string();
                self.publish_vector(&layer_name, &archive.path).await
            }
            DatasetKind::VectorBundle { primary } => {
                let layer_name = primary.stem().to_string();

                let archive_path =
                    match package::package_shapefile_bundle(batch.staging_dir(), &layer_name) {
                        Ok(path) => path,
                        Err(e) => {
                            error!(layer = %layer_name, error = %e, "Bundle packaging failed");
                            return UploadResponse::failed(e.to_string());
                        }
                    };

                self.publish_vector(&layer_name, &archive_path).await
            }
        }
    }

    async fn publish_raster(&self, primary: &StagedFile) -> UploadResponse {
        let layer_name = primary.stem().to_string();

        let geotiff = match read_staged(&primary.path).await {
            Ok(bytes) => bytes,
            Err(e) => return UploadResponse::failed(e.to_string()),
        };

        let outcome = publish::publish_raster(&self.remote, &layer_name, geotiff).await;

        let bounding_box = match &outcome {
            Ok(coverage) => metadata::resolve_raster_bbox(&self.remote, coverage).await,
            Err(e) => {
                error!(layer = %layer_name, error = %e, "Raster publish failed");
                None
            }
        };

        response::compose(LayerKind::Raster, outcome, bounding_box, &self.config)
    }

    async fn publish_vector(&self, layer_name: &str, archive_path: &Path) -> UploadResponse {
        let archive = match read_staged(archive_path).await {
            Ok(bytes) => bytes,
            Err(e) => return UploadResponse::failed(e.to_string()),
        };

        let outcome = publish::publish_vector(&self.remote, layer_name, archive).await;

        let bounding_box = match &outcome {
            Ok(store) => metadata::resolve_vector_bbox(&self.remote, store).await,
            Err(e) => {
                error!(layer = %layer_name, error = %e, "Vector publish failed");
                None
            }
        };

        response::compose(LayerKind::Vector, outcome, bounding_box, &self.config)
    }
}

async fn read_staged(path: &Path) -> Result<Bytes, PublishError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(Bytes::from(bytes))
}
