//! The GeoServer publish sequences for raster and vector datasets.

use bytes::Bytes;
use geoserver_rest::GeoServerRest;
use tracing::{info, warn};

use crate::error::{PublishError, Result};

/// States of the raster publish sequence.
///
/// Raster publishing is two remote calls: create the coverage store
/// from raw GeoTIFF bytes, then register a coverage under it. The
/// sequence is driven through [`raster_step`] so the partial-failure
/// state (store exists remotely, coverage does not) is an explicit
/// outcome rather than a buried branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterStage {
    Init,
    StoreCreated,
    CoverageRegistered { coverage: String },
}

/// Advance the raster publish sequence by one remote call.
///
/// On registration failure after the store was created, the error is
/// [`PublishError::PartialPublish`]: the store is orphaned on the
/// server and nothing here rolls it back.
pub async fn raster_step<R: GeoServerRest + ?Sized>(
    remote: &R,
    stage: RasterStage,
    layer_name: &str,
    geotiff: &Bytes,
) -> Result<RasterStage> {
    match stage {
        RasterStage::Init => {
            remote
                .create_coverage_store(layer_name, geotiff.clone())
                .await?;
            Ok(RasterStage::StoreCreated)
        }
        RasterStage::StoreCreated => match remote.register_coverage(layer_name, layer_name).await
        {
            Ok(coverage) => Ok(RasterStage::CoverageRegistered { coverage }),
            Err(source) => {
                warn!(
                    store = %layer_name,
                    error = %source,
                    "Coverage registration failed; remote store is now orphaned"
                );
                Err(PublishError::PartialPublish {
                    store: layer_name.to_string(),
                    source,
                })
            }
        },
        terminal @ RasterStage::CoverageRegistered { .. } => Ok(terminal),
    }
}

/// Publish a raster dataset, returning the server-confirmed coverage
/// name.
pub async fn publish_raster<R: GeoServerRest + ?Sized>(
    remote: &R,
    layer_name: &str,
    geotiff: Bytes,
) -> Result<String> {
    let mut stage = RasterStage::Init;

    loop {
        stage = raster_step(remote, stage, layer_name, &geotiff).await?;

        if let RasterStage::CoverageRegistered { coverage } = &stage {
            info!(layer = %layer_name, coverage = %coverage, "Raster publish complete");
            return Ok(coverage.clone());
        }
    }
}

/// Publish a vector dataset from a zipped shapefile bundle.
///
/// One remote call with full auto-configuration; success is decided by
/// HTTP status alone, so the server layer name is the input name.
pub async fn publish_vector<R: GeoServerRest + ?Sized>(
    remote: &R,
    layer_name: &str,
    archive: Bytes,
) -> Result<String> {
    remote.upload_vector_archive(layer_name, archive).await?;

    info!(layer = %layer_name, "Vector publish complete");
    Ok(layer_name.to_string())
}
