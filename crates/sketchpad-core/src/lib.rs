//! Sketchpad Core Library
//!
//! Shape list management and the pointer interaction state machine behind the
//! Sketchpad drawing surface. Windowing, toolbars and dialogs belong to the
//! host, which plugs in through [`ToolConfig`], [`ConfirmationProvider`],
//! [`RenderSurface`] and [`DrawSurface`].

pub mod canvas;
pub mod error;
pub mod input;
pub mod interaction;
pub mod render;
pub mod shapes;
pub mod store;
pub mod tools;

pub use canvas::Canvas;
pub use error::{CanvasError, CanvasResult};
pub use input::PointerEvent;
pub use interaction::{
    Collaborators, Confirmation, ConfirmationProvider, InteractionController,
    InteractionOutcome, DELETE_PROMPT,
};
pub use render::{DrawSurface, RedrawCounter, RenderSurface};
pub use shapes::{SerializableColor, Shape, ShapeId, ShapeKind, ShapeTrait};
pub use store::ShapeStore;
pub use tools::{DrawMode, ToolConfig, ToolSettings};
