//! Oval shape.

use super::{ShapeGeometry, ShapeId, ShapeTrait};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An ellipse inscribed in the bounding box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oval {
    pub(super) geometry: ShapeGeometry,
}

impl Oval {
    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        let (rx, ry) = self.geometry.radii();
        KurboEllipse::new(self.geometry.anchor, (rx, ry), 0.0)
    }
}

impl ShapeTrait for Oval {
    fn id(&self) -> ShapeId {
        self.geometry.id
    }

    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn contains(&self, point: Point) -> bool {
        if self.geometry.is_degenerate() {
            return false;
        }
        let (rx, ry) = self.geometry.radii();
        let dx = (point.x - self.geometry.anchor.x) / rx;
        let dy = (point.y - self.geometry.anchor.y) / ry;
        dx * dx + dy * dy <= 1.0
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}
