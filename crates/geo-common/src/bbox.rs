//! Bounding box type shared across the workspace.

use serde::{Deserialize, Serialize};

/// The rectangular spatial extent of a published layer.
///
/// Coordinates are in the layer's declared CRS units (degrees for
/// geographic extents). Serialized with GeoServer-style lowercase
/// corner names so the payload matches what map clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "minx")]
    pub min_x: f64,
    #[serde(rename = "miny")]
    pub min_y: f64,
    #[serde(rename = "maxx")]
    pub max_x: f64,
    #[serde(rename = "maxy")]
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Assemble a bounding box from possibly-missing corners.
    ///
    /// Returns `None` unless all four corners are present. Metadata
    /// responses from the remote server routinely omit extents, so
    /// callers treat a partial extent the same as no extent at all.
    pub fn from_corners(
        min_x: Option<f64>,
        min_y: Option<f64>,
        max_x: Option<f64>,
        max_y: Option<f64>,
    ) -> Option<Self> {
        Some(Self {
            min_x: min_x?,
            min_y: min_y?,
            max_x: max_x?,
            max_y: max_y?,
        })
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
