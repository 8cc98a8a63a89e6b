//! Tool configuration: drawing mode, active shape type and style.

use crate::shapes::{SerializableColor, ShapeKind};
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// What a pointer press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Press/drag/release creates a new shape.
    #[default]
    Drawing,
    /// A press selects a shape and pushes its style back to the tools.
    Editing,
    /// A press offers to delete a shape.
    Deleting,
}

/// Source of the current tool state, owned by the host's toolbar.
///
/// The controller reads it fresh on every event and writes back the style of
/// a shape selected in edit mode.
pub trait ToolConfig {
    fn mode(&self) -> DrawMode;

    /// The active shape type, or `None` when no shape tool is selected.
    fn shape_kind(&self) -> Option<ShapeKind>;

    fn color(&self) -> Color;

    fn filled(&self) -> bool;

    /// Center point given to newly created shapes.
    fn anchor(&self) -> Point;

    fn set_filled(&mut self, filled: bool);

    fn set_color(&mut self, color: Color);
}

/// Plain tool settings, usable directly as a [`ToolConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub mode: DrawMode,
    pub shape_kind: Option<ShapeKind>,
    pub color: SerializableColor,
    pub filled: bool,
    pub anchor: Point,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            mode: DrawMode::default(),
            shape_kind: Some(ShapeKind::Oval),
            color: SerializableColor::black(),
            filled: false,
            anchor: Point::new(200.0, 200.0),
        }
    }
}

impl ToolSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the mode.
    pub fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set the shape tool.
    pub fn with_shape(mut self, kind: Option<ShapeKind>) -> Self {
        self.shape_kind = kind;
        self
    }

    /// Builder: set the anchor for new shapes.
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    /// Builder: set the fill color and flag.
    pub fn with_style(mut self, color: Color, filled: bool) -> Self {
        self.color = color.into();
        self.filled = filled;
        self
    }
}

impl ToolConfig for ToolSettings {
    fn mode(&self) -> DrawMode {
        self.mode
    }

    fn shape_kind(&self) -> Option<ShapeKind> {
        self.shape_kind
    }

    fn color(&self) -> Color {
        self.color.into()
    }

    fn filled(&self) -> bool {
        self.filled
    }

    fn anchor(&self) -> Point {
        self.anchor
    }

    fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color.into();
    }
}
