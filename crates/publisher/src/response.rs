//! Final response composition.

use geo_common::{BoundingBox, LayerKind, PublishedLayer, UploadResponse};
use geoserver_rest::GeoServerConfig;

use crate::error::PublishError;

/// Compose the response payload from a publish outcome.
///
/// Pure: qualifies the layer name with the workspace, attaches the WMS
/// endpoint and best-effort bounding box on success, or surfaces the
/// error message on failure.
pub fn compose(
    kind: LayerKind,
    outcome: Result<String, PublishError>,
    bounding_box: Option<BoundingBox>,
    config: &GeoServerConfig,
) -> UploadResponse {
    match outcome {
        Ok(server_layer_name) => UploadResponse::published(PublishedLayer {
            layer_type: kind,
            layer_name: config.qualified_layer_name(&server_layer_name),
            wms_url: config.wms_url(),
            bounding_box,
        }),
        Err(error) => UploadResponse::failed(error.to_string()),
    }
}
