//! Best-effort bounding box resolution after a successful publish.
//!
//! Nothing in here can fail the request: every lookup error degrades
//! to an absent bounding box.

use geo_common::BoundingBox;
use geoserver_rest::GeoServerRest;
use tracing::debug;

/// Fetch a published coverage's bounding box.
///
/// Prefers the geographic (lat/lon) extent, falling back to the native
/// one when the server did not compute it.
pub async fn resolve_raster_bbox<R: GeoServerRest + ?Sized>(
    remote: &R,
    coverage: &str,
) -> Option<BoundingBox> {
    match remote.get_coverage_info(coverage).await {
        Ok(info) => info
            .lat_lon_bounding_box
            .as_ref()
            .and_then(|e| e.to_bbox())
            .or_else(|| info.native_bounding_box.as_ref().and_then(|e| e.to_bbox())),
        Err(e) => {
            debug!(coverage = %coverage, error = %e, "Coverage metadata lookup failed");
            None
        }
    }
}

/// Fetch the bounding box of the layer a vector upload produced.
///
/// The feature type GeoServer derives from an archive is not assumed
/// to match the store name, so this lists the store's feature types
/// and queries them in listing order until one has a complete extent.
pub async fn resolve_vector_bbox<R: GeoServerRest + ?Sized>(
    remote: &R,
    store: &str,
) -> Option<BoundingBox> {
    let feature_types = match remote.list_feature_types(store).await {
        Ok(names) => names,
        Err(e) => {
            debug!(store = %store, error = %e, "Feature type listing failed");
            return None;
        }
    };

    for feature_type in feature_types {
        match remote.get_feature_type_info(store, &feature_type).await {
            Ok(info) => {
                if let Some(bbox) = info.lat_lon_bounding_box.as_ref().and_then(|e| e.to_bbox())
                {
                    return Some(bbox);
                }
                debug!(
                    store = %store,
                    feature_type = %feature_type,
                    "Feature type has no complete extent, trying next"
                );
            }
            Err(e) => {
                debug!(
                    store = %store,
                    feature_type = %feature_type,
                    error = %e,
                    "Feature type metadata lookup failed, trying next"
                );
            }
        }
    }

    None
}
