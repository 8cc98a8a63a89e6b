//! Right triangle shape.

use super::{ShapeGeometry, ShapeId, ShapeTrait};
use kurbo::{BezPath, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A right triangle with its right angle at the bottom-left of the bounding box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RightTriangle {
    pub(super) geometry: ShapeGeometry,
}

impl RightTriangle {
    /// Vertices: top-left, bottom-left (right angle), bottom-right.
    pub fn vertices(&self) -> [Point; 3] {
        let bounds = self.geometry.bounds();
        [
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x0, bounds.y1),
            Point::new(bounds.x1, bounds.y1),
        ]
    }
}

impl ShapeTrait for RightTriangle {
    fn id(&self) -> ShapeId {
        self.geometry.id
    }

    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn contains(&self, point: Point) -> bool {
        !self.geometry.is_degenerate() && self.to_path().contains(point)
    }

    fn to_path(&self) -> BezPath {
        let [top, corner, right] = self.vertices();
        let mut path = BezPath::new();
        path.move_to(top);
        path.line_to(corner);
        path.line_to(right);
        path.close_path();
        path
    }
}
