//! Typed views of GeoServer's JSON resource representations.

use geo_common::BoundingBox;
use serde::Deserialize;
use serde_json::Value;

/// A spatial extent as GeoServer reports it.
///
/// GeoServer omits corners it does not know, so every field is
/// optional; [`Extent::to_bbox`] only succeeds when all four are
/// present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extent {
    #[serde(default)]
    pub minx: Option<f64>,
    #[serde(default)]
    pub miny: Option<f64>,
    #[serde(default)]
    pub maxx: Option<f64>,
    #[serde(default)]
    pub maxy: Option<f64>,
}

impl Extent {
    /// Convert to a [`BoundingBox`] if all four corners are present.
    pub fn to_bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_corners(self.minx, self.miny, self.maxx, self.maxy)
    }
}

/// Metadata for a published coverage (raster layer).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageInfo {
    #[serde(default)]
    pub name: Option<String>,

    /// Geographic (lat/lon) extent, preferred for display.
    #[serde(rename = "latLonBoundingBox", default)]
    pub lat_lon_bounding_box: Option<Extent>,

    /// Extent in the coverage's native CRS.
    #[serde(rename = "nativeBoundingBox", default)]
    pub native_bounding_box: Option<Extent>,
}

/// Envelope GeoServer wraps a coverage resource in.
#[derive(Debug, Deserialize)]
pub struct CoverageEnvelope {
    pub coverage: CoverageInfo,
}

/// Metadata for one feature type (vector layer) in a data store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureTypeInfo {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "latLonBoundingBox", default)]
    pub lat_lon_bounding_box: Option<Extent>,
}

/// Envelope GeoServer wraps a feature type resource in.
#[derive(Debug, Deserialize)]
pub struct FeatureTypeEnvelope {
    #[serde(rename = "featureType")]
    pub feature_type: FeatureTypeInfo,
}

/// Extract feature type names from a `featuretypes.json` listing.
///
/// The expected shape is
/// `{"featureTypes": {"featureType": [{"name": ...}, ...]}}`, but
/// GeoServer serializes an empty collection as the string `""` instead
/// of an object, so this walks the value defensively and returns an
/// empty list for anything that does not match.
pub fn feature_type_names(listing: &Value) -> Vec<String> {
    listing["featureTypes"]["featureType"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extent_to_bbox_requires_all_corners() {
        let full = Extent {
            minx: Some(10.0),
            miny: Some(5.0),
            maxx: Some(20.0),
            maxy: Some(15.0),
        };
        assert_eq!(full.to_bbox(), Some(BoundingBox::new(10.0, 5.0, 20.0, 15.0)));

        let partial = Extent {
            minx: Some(10.0),
            ..Default::default()
        };
        assert_eq!(partial.to_bbox(), None);
    }

    #[test]
    fn test_coverage_envelope_deserializes() {
        let json = json!({
            "coverage": {
                "name": "elevation",
                "latLonBoundingBox": {"minx": -125.0, "miny": 24.0, "maxx": -66.0, "maxy": 50.0},
                "nativeBoundingBox": {"minx": 0.0, "miny": 0.0, "maxx": 100.0, "maxy": 100.0}
            }
        });

        let envelope: CoverageEnvelope = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.coverage.name.as_deref(), Some("elevation"));
        assert!(envelope.coverage.lat_lon_bounding_box.is_some());
    }

    #[test]
    fn test_feature_type_names_from_listing() {
        let listing = json!({
            "featureTypes": {
                "featureType": [
                    {"name": "parcels", "href": "http://example/parcels.json"},
                    {"name": "roads", "href": "http://example/roads.json"}
                ]
            }
        });
        assert_eq!(feature_type_names(&listing), vec!["parcels", "roads"]);
    }

    #[test]
    fn test_feature_type_names_empty_collection_quirk() {
        // GeoServer renders an empty store as `"featureTypes": ""`.
        assert!(feature_type_names(&json!({"featureTypes": ""})).is_empty());
        assert!(feature_type_names(&json!({})).is_empty());
    }
}
