//! Rectangle shape.

use super::{ShapeGeometry, ShapeId, ShapeTrait};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle filling the bounding box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(super) geometry: ShapeGeometry,
}

impl Rectangle {
    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        self.geometry.bounds()
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.geometry.id
    }

    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn contains(&self, point: Point) -> bool {
        !self.geometry.is_degenerate() && self.as_rect().contains(point)
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}
