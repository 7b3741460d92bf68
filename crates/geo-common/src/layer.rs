//! Published layer identity and the upload response payload.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;

/// The kind of dataset a layer was published from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Raster,
    Vector,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Raster => write!(f, "raster"),
            LayerKind::Vector => write!(f, "vector"),
        }
    }
}

/// A successfully published layer, as reported back to the client.
///
/// `layer_name` is workspace-qualified (`<workspace>:<name>`); `wms_url`
/// is the workspace's WMS endpoint. The bounding box is best-effort and
/// serialized as `null` when metadata lookup came back empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedLayer {
    #[serde(rename = "layerType")]
    pub layer_type: LayerKind,
    #[serde(rename = "layerName")]
    pub layer_name: String,
    #[serde(rename = "wmsUrl")]
    pub wms_url: String,
    #[serde(rename = "boundingBox")]
    pub bounding_box: Option<BoundingBox>,
}

/// JSON body returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Published {
        success: bool,
        #[serde(flatten)]
        layer: PublishedLayer,
    },
    Failed {
        success: bool,
        message: String,
    },
}

impl UploadResponse {
    pub fn published(layer: PublishedLayer) -> Self {
        UploadResponse::Published {
            success: true,
            layer,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        UploadResponse::Failed {
            success: false,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadResponse::Published { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_wire_shape() {
        let response = UploadResponse::published(PublishedLayer {
            layer_type: LayerKind::Vector,
            layer_name: "gobi:parcels".to_string(),
            wms_url: "http://localhost:8001/geoserver/gobi/wms".to_string(),
            bounding_box: Some(BoundingBox::new(10.0, 5.0, 20.0, 15.0)),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["layerType"], "vector");
        assert_eq!(json["layerName"], "gobi:parcels");
        assert_eq!(json["wmsUrl"], "http://localhost:8001/geoserver/gobi/wms");
        assert_eq!(json["boundingBox"]["minx"], 10.0);
    }

    #[test]
    fn test_missing_bbox_serializes_as_null() {
        let response = UploadResponse::published(PublishedLayer {
            layer_type: LayerKind::Raster,
            layer_name: "gobi:elevation".to_string(),
            wms_url: "http://localhost:8001/geoserver/gobi/wms".to_string(),
            bounding_box: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["boundingBox"].is_null());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_failed_wire_shape() {
        let json = serde_json::to_value(UploadResponse::failed("incomplete shapefile bundle"))
            .unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "incomplete shapefile bundle");
        assert!(json.get("layerType").is_none());
    }
}
