//! Shape definitions for the drawing surface.

mod diamond;
mod oval;
mod rectangle;
mod triangle;

pub use diamond::Diamond;
pub use oval::Oval;
pub use rectangle::Rectangle;
pub use triangle::RightTriangle;

use crate::render::DrawSurface;
use kurbo::{BezPath, Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stroke width used when drawing outline-only shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Format as a `#rrggbb` hex string (alpha is dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Attributes shared by every shape variant.
///
/// The anchor is the center of the bounding box. Width and height keep the
/// sign of the drag that produced them; geometry always uses their magnitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeGeometry {
    pub(crate) id: ShapeId,
    /// Center of the bounding box.
    pub anchor: Point,
    pub width: f64,
    pub height: f64,
    pub color: SerializableColor,
    pub filled: bool,
}

impl ShapeGeometry {
    pub fn new(anchor: Point, width: f64, height: f64, color: Color, filled: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            width,
            height,
            color: color.into(),
            filled,
        }
    }

    /// Normalized bounding box centered on the anchor.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.anchor, Size::new(self.width.abs(), self.height.abs()))
    }

    /// Half extents `(rx, ry)` of the bounding box.
    pub fn radii(&self) -> (f64, f64) {
        (self.width.abs() / 2.0, self.height.abs() / 2.0)
    }

    /// True when the shape covers no area and so can never be hit.
    pub fn is_degenerate(&self) -> bool {
        self.width.abs() < f64::EPSILON || self.height.abs() < f64::EPSILON
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Shared geometry and style.
    fn geometry(&self) -> &ShapeGeometry;

    /// Get the bounding box.
    fn bounds(&self) -> Rect {
        self.geometry().bounds()
    }

    /// Check if a point lies inside this shape.
    fn contains(&self, point: Point) -> bool;

    /// Get the outline path for rendering.
    fn to_path(&self) -> BezPath;

    fn is_filled(&self) -> bool {
        self.geometry().filled
    }

    fn color(&self) -> Color {
        self.geometry().color.into()
    }

    /// Draw onto a surface: filled shapes are filled, the rest are outlined.
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let path = self.to_path();
        if self.is_filled() {
            surface.fill_path(&path, self.color());
        } else {
            surface.stroke_path(&path, self.color(), DEFAULT_STROKE_WIDTH);
        }
    }
}

/// The four shape types a tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Oval,
    Rectangle,
    RightTriangle,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Oval,
        ShapeKind::Rectangle,
        ShapeKind::RightTriangle,
        ShapeKind::Diamond,
    ];

    /// Display name for this shape kind.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Oval => "Oval",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RightTriangle => "Triangle",
            ShapeKind::Diamond => "Diamond",
        }
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Oval(Oval),
    Rectangle(Rectangle),
    RightTriangle(RightTriangle),
    Diamond(Diamond),
}

impl Shape {
    /// Build a shape of the given kind.
    pub fn new(
        kind: ShapeKind,
        anchor: Point,
        width: f64,
        height: f64,
        color: Color,
        filled: bool,
    ) -> Self {
        let geometry = ShapeGeometry::new(anchor, width, height, color, filled);
        match kind {
            ShapeKind::Oval => Shape::Oval(Oval { geometry }),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle { geometry }),
            ShapeKind::RightTriangle => Shape::RightTriangle(RightTriangle { geometry }),
            ShapeKind::Diamond => Shape::Diamond(Diamond { geometry }),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Oval(_) => ShapeKind::Oval,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::RightTriangle(_) => ShapeKind::RightTriangle,
            Shape::Diamond(_) => ShapeKind::Diamond,
        }
    }

    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Oval(s) => s,
            Shape::Rectangle(s) => s,
            Shape::RightTriangle(s) => s,
            Shape::Diamond(s) => s,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.as_trait().id()
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        self.as_trait().geometry()
    }

    pub fn anchor(&self) -> Point {
        self.geometry().anchor
    }

    pub fn width(&self) -> f64 {
        self.geometry().width
    }

    pub fn height(&self) -> f64 {
        self.geometry().height
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.as_trait().contains(point)
    }

    pub fn to_path(&self) -> BezPath {
        self.as_trait().to_path()
    }

    pub fn is_filled(&self) -> bool {
        self.as_trait().is_filled()
    }

    pub fn color(&self) -> Color {
        self.as_trait().color()
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.as_trait().draw(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_round_trip_through_peniko() {
        let color = SerializableColor::new(12, 34, 56, 255);
        let peniko: Color = color.into();
        assert_eq!(SerializableColor::from(peniko), color);
    }

    #[test]
    fn test_hex() {
        assert_eq!(SerializableColor::new(255, 0, 16, 255).to_hex(), "#ff0010");
    }

    #[test]
    fn test_new_dispatches_on_kind() {
        for kind in ShapeKind::ALL {
            let shape = Shape::new(kind, Point::new(0.0, 0.0), 10.0, 10.0, Color::WHITE, false);
            assert_eq!(shape.kind(), kind);
        }
    }

    #[test]
    fn test_negative_extent_normalizes_bounds() {
        let shape = Shape::new(
            ShapeKind::Rectangle,
            Point::new(50.0, 50.0),
            -20.0,
            -10.0,
            Color::BLACK,
            true,
        );
        let bounds = shape.bounds();
        assert!((bounds.x0 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 45.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 55.0).abs() < f64::EPSILON);
        // Raw extents are kept as dragged.
        assert!((shape.width() + 20.0).abs() < f64::EPSILON);
        assert!(shape.contains(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_degenerate_contains_nothing() {
        for kind in ShapeKind::ALL {
            let shape = Shape::new(kind, Point::new(5.0, 5.0), 0.0, 10.0, Color::BLACK, true);
            assert!(!shape.contains(Point::new(5.0, 5.0)), "{:?}", kind);
        }
    }

    #[test]
    fn test_style_accessors() {
        let shape = Shape::new(
            ShapeKind::Diamond,
            Point::ZERO,
            4.0,
            4.0,
            Color::from_rgba8(1, 2, 3, 255),
            true,
        );
        assert!(shape.is_filled());
        assert_eq!(
            SerializableColor::from(shape.color()),
            SerializableColor::new(1, 2, 3, 255)
        );
    }

    #[test]
    fn test_shape_serializes() {
        let shape = Shape::new(ShapeKind::Oval, Point::new(1.0, 2.0), 3.0, 4.0, Color::BLACK, false);
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), shape.id());
        assert_eq!(back.kind(), ShapeKind::Oval);
    }
}
