//! Ordered storage of placed shapes.

use crate::error::{CanvasError, CanvasResult};
use crate::shapes::Shape;
use kurbo::Point;

/// The ordered list of placed shapes.
///
/// Insertion order is paint order: index 0 is painted first, so later shapes
/// cover earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of all others.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove and return the shape at `index`, shifting later shapes back.
    pub fn remove_at(&mut self, index: usize) -> CanvasResult<Shape> {
        if index >= self.shapes.len() {
            return Err(CanvasError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            });
        }
        Ok(self.shapes.remove(index))
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Shapes in paint order.
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    /// Swap in a whole new list. `None` leaves the store untouched and
    /// returns false.
    pub fn replace(&mut self, shapes: Option<Vec<Shape>>) -> bool {
        match shapes {
            Some(shapes) => {
                self.shapes = shapes;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Index of the first shape, scanning from index 0, that contains `point`.
    ///
    /// This is the bottom-most hit, not the visually topmost one.
    pub fn first_hit(&self, point: Point) -> Option<usize> {
        self.shapes.iter().position(|s| s.contains(point))
    }
}
