//! Rendering seams between the core and the host's 2D drawing API.

use kurbo::BezPath;
use peniko::Color;

/// Receives redraw requests. Requests are fire-and-forget.
pub trait RenderSurface {
    fn request_redraw(&mut self);
}

/// Minimal 2D drawing API a host exposes for painting shapes.
pub trait DrawSurface {
    /// Fill a closed path with a solid color.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke a path outline.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);
}

/// A render surface that only counts redraw requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RedrawCounter {
    pub requests: usize,
}

impl RedrawCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return whether any redraw was requested since the last call, and reset.
    pub fn take(&mut self) -> bool {
        let requested = self.requests > 0;
        self.requests = 0;
        requested
    }
}

impl RenderSurface for RedrawCounter {
    fn request_redraw(&mut self) {
        self.requests += 1;
    }
}

#[cfg(test)]
/// One recorded drawing command, for asserting paint order in tests.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Fill { path: BezPath, color: Color },
    Stroke { path: BezPath, color: Color, width: f64 },
}

#[cfg(test)]
/// A draw surface that records commands in paint order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Shape, ShapeKind};
    use kurbo::Point;

    #[test]
    fn test_redraw_counter_take() {
        let mut counter = RedrawCounter::new();
        assert!(!counter.take());
        counter.request_redraw();
        counter.request_redraw();
        assert_eq!(counter.requests, 2);
        assert!(counter.take());
        assert_eq!(counter.requests, 0);
    }

    #[test]
    fn test_filled_shape_is_filled_outline_is_stroked() {
        let mut surface = RecordingSurface::new();
        Shape::new(ShapeKind::Rectangle, Point::ZERO, 4.0, 4.0, Color::BLACK, true)
            .draw(&mut surface);
        Shape::new(ShapeKind::Oval, Point::ZERO, 4.0, 4.0, Color::BLACK, false)
            .draw(&mut surface);

        assert!(matches!(surface.commands[0], DrawCommand::Fill { .. }));
        assert!(matches!(
            surface.commands[1],
            DrawCommand::Stroke { width, .. } if (width - 1.0).abs() < f64::EPSILON
        ));
    }
}
