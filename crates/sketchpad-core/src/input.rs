//! Pointer events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer event in canvas coordinates.
///
/// `Dragged` is only delivered while the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    Pressed(Point),
    Dragged(Point),
    Released(Point),
}

impl PointerEvent {
    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Pressed(p) | PointerEvent::Dragged(p) | PointerEvent::Released(p) => *p,
        }
    }
}
