//! Diamond shape.

use super::{ShapeGeometry, ShapeId, ShapeTrait};
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// A rhombus through the midpoints of the bounding box edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diamond {
    pub(super) geometry: ShapeGeometry,
}

impl Diamond {
    /// Corner points: top, right, bottom, left.
    pub fn vertices(&self) -> [Point; 4] {
        let bounds = self.geometry.bounds();
        let center = bounds.center();
        [
            Point::new(center.x, bounds.y0),
            Point::new(bounds.x1, center.y),
            Point::new(center.x, bounds.y1),
            Point::new(bounds.x0, center.y),
        ]
    }
}

impl ShapeTrait for Diamond {
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
        let dx = (point.x - self.geometry.anchor.x).abs() / rx;
        let dy = (point.y - self.geometry.anchor.y).abs() / ry;
        dx + dy <= 1.0
    }

    fn to_path(&self) -> BezPath {
        let [top, right, bottom, left] = self.vertices();
        let mut path = BezPath::new();
        path.move_to(top);
        path.line_to(right);
        path.line_to(bottom);
        path.line_to(left);
        path.close_path();
        path
    }
}

#[cfg(test)]
mod tests {
    use crate::shapes::{Shape, ShapeKind};
    use kurbo::Point;
    use peniko::Color;

    fn diamond() -> Shape {
        Shape::new(ShapeKind::Diamond, Point::new(0.0, 0.0), 20.0, 10.0, Color::BLACK, true)
    }

    #[test]
    fn test_contains_center_and_tips() {
        let shape = diamond();
        assert!(shape.contains(Point::new(0.0, 0.0)));
        assert!(shape.contains(Point::new(10.0, 0.0)));
        assert!(shape.contains(Point::new(0.0, -5.0)));
    }

    #[test]
    fn test_corner_of_bounds_is_outside() {
        assert!(!diamond().contains(Point::new(9.0, 4.0)));
    }

    #[test]
    fn test_path_has_four_edges() {
        // move_to + 3 line_to + close
        assert_eq!(diamond().to_path().elements().len(), 5);
    }
}
