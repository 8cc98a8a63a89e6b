//! SVG export of a painted canvas.

use kurbo::BezPath;
use peniko::Color;
use sketchpad_core::{DrawSurface, SerializableColor};
use svg::{
    Document,
    node::element::{Path, Rectangle},
};

/// Collects painted paths into an SVG document.
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: SerializableColor,
    paths: Vec<Path>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32, background: SerializableColor) -> Self {
        Self {
            width,
            height,
            background,
            paths: Vec::new(),
        }
    }

    /// Build the document: background first, then paths in paint order.
    pub fn finish(self) -> Document {
        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", self.background.to_hex());

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("width", self.width)
            .set("height", self.height)
            .add(background);
        for path in self.paths {
            doc = doc.add(path);
        }
        doc
    }
}

fn opacity(color: SerializableColor) -> f32 {
    color.a as f32 / 255.0
}

impl DrawSurface for SvgSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        let color = SerializableColor::from(color);
        self.paths.push(
            Path::new()
                .set("d", path.to_svg())
                .set("fill", color.to_hex())
                .set("fill-opacity", opacity(color)),
        );
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let color = SerializableColor::from(color);
        self.paths.push(
            Path::new()
                .set("d", path.to_svg())
                .set("fill", "none")
                .set("stroke", color.to_hex())
                .set("stroke-opacity", opacity(color))
                .set("stroke-width", width),
        );
    }
}
