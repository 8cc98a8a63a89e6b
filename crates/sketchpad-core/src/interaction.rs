//! Pointer interaction state machine.
//!
//! Turns press/drag/release events into shape creation, selection and
//! deletion against a [`ShapeStore`]. The drawing mode is read from the
//! [`ToolConfig`] on every press rather than stored here.

use crate::error::CanvasError;
use crate::input::PointerEvent;
use crate::render::RenderSurface;
use crate::shapes::Shape;
use crate::store::ShapeStore;
use crate::tools::{DrawMode, ToolConfig};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Prompt shown before deleting a shape.
pub const DELETE_PROMPT: &str = "Delete chosen shape?";

/// Answer from a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Confirmed,
    Declined,
    /// The prompt was closed without an answer.
    Dismissed,
}

/// Asks the user a blocking yes/no question.
pub trait ConfirmationProvider {
    fn confirm(&mut self, prompt: &str) -> Confirmation;
}

impl<F> ConfirmationProvider for F
where
    F: FnMut(&str) -> Confirmation,
{
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        self(prompt)
    }
}

/// The host collaborators needed to handle one pointer event.
pub struct Collaborators<'a> {
    pub tools: &'a mut dyn ToolConfig,
    pub confirm: &'a mut dyn ConfirmationProvider,
    pub surface: &'a mut dyn RenderSurface,
}

impl<'a> Collaborators<'a> {
    pub fn new(
        tools: &'a mut dyn ToolConfig,
        confirm: &'a mut dyn ConfirmationProvider,
        surface: &'a mut dyn RenderSurface,
    ) -> Self {
        Self {
            tools,
            confirm,
            surface,
        }
    }
}

/// What a pointer event did.
#[derive(Debug, Clone)]
pub enum InteractionOutcome {
    /// Edit mode: the shape at this index was selected.
    Selected(usize),
    /// Delete mode: the shape at this index was removed.
    Deleted { index: usize, shape: Shape },
    /// Delete mode: a shape was hit but the prompt was not confirmed.
    DeleteDeclined(Confirmation),
    /// Delete mode: confirmed, but the recorded selection could not be removed.
    DeleteFailed(CanvasError),
    /// Edit or delete mode: no shape under the pointer.
    Missed,
    /// Drawing mode: a gesture started.
    DrawingStarted,
    /// The pending shape was rebuilt (`false` when no shape tool is active).
    Previewed(bool),
    /// The gesture finished and the shape was appended at this index.
    Committed(usize),
    /// The gesture finished without a shape tool, nothing was appended.
    NothingCommitted,
    /// Drag or release outside a drawing gesture.
    Ignored,
}

/// Pointer interaction state for one drawing surface.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    /// A drawing gesture is in progress.
    drawing: bool,
    /// Last press position.
    start: Point,
    /// Last drag or release position.
    current: Point,
    /// Shape previewed during a drag. Never part of the store.
    pending: Option<Shape>,
    /// Index recorded by the last edit-mode hit, 0 until then. Not updated
    /// by deletion.
    selected: usize,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn pending_shape(&self) -> Option<&Shape> {
        self.pending.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Route a pointer event to the matching handler.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        store: &mut ShapeStore,
        env: &mut Collaborators<'_>,
    ) -> InteractionOutcome {
        match event {
            PointerEvent::Pressed(point) => self.press(point, store, env),
            PointerEvent::Dragged(point) => self.drag(point, env),
            PointerEvent::Released(point) => self.release(point, store, env),
        }
    }

    /// Handle a button-down event according to the current mode.
    pub fn press(
        &mut self,
        point: Point,
        store: &mut ShapeStore,
        env: &mut Collaborators<'_>,
    ) -> InteractionOutcome {
        self.start = point;

        match env.tools.mode() {
            DrawMode::Editing => self.select_at(point, store, env.tools),
            DrawMode::Deleting => self.delete_at(point, store, env),
            DrawMode::Drawing => {
                self.drawing = true;
                log::debug!("Drawing started at ({}, {})", point.x, point.y);
                InteractionOutcome::DrawingStarted
            }
        }
    }

    /// Handle pointer movement with the button held.
    pub fn drag(&mut self, point: Point, env: &mut Collaborators<'_>) -> InteractionOutcome {
        if !self.drawing {
            return InteractionOutcome::Ignored;
        }
        self.current = point;
        self.pending = self.build_shape(env.tools);
        env.surface.request_redraw();
        InteractionOutcome::Previewed(self.pending.is_some())
    }

    /// Handle a button-up event, committing the drawn shape.
    pub fn release(
        &mut self,
        point: Point,
        store: &mut ShapeStore,
        env: &mut Collaborators<'_>,
    ) -> InteractionOutcome {
        if !self.drawing {
            return InteractionOutcome::Ignored;
        }
        self.current = point;
        self.drawing = false;
        self.pending = None;

        let outcome = match self.build_shape(env.tools) {
            Some(shape) => {
                log::debug!(
                    "Committed {} {}x{} at ({}, {})",
                    shape.kind().name(),
                    shape.width(),
                    shape.height(),
                    shape.anchor().x,
                    shape.anchor().y
                );
                store.append(shape);
                InteractionOutcome::Committed(store.len() - 1)
            }
            None => {
                log::debug!("Released with no shape tool selected");
                InteractionOutcome::NothingCommitted
            }
        };
        env.surface.request_redraw();
        outcome
    }

    /// Abort a drawing gesture, discarding the pending shape.
    pub fn cancel(&mut self) {
        self.drawing = false;
        self.pending = None;
    }

    fn select_at(
        &mut self,
        point: Point,
        store: &ShapeStore,
        tools: &mut dyn ToolConfig,
    ) -> InteractionOutcome {
        let Some(index) = store.first_hit(point) else {
            return InteractionOutcome::Missed;
        };
        let Some(shape) = store.get(index) else {
            return InteractionOutcome::Missed;
        };

        self.selected = index;
        tools.set_filled(shape.is_filled());
        tools.set_color(shape.color());
        log::debug!("Selected shape {} at index {}", shape.id(), index);
        InteractionOutcome::Selected(index)
    }

    fn delete_at(
        &mut self,
        point: Point,
        store: &mut ShapeStore,
        env: &mut Collaborators<'_>,
    ) -> InteractionOutcome {
        if store.first_hit(point).is_none() {
            return InteractionOutcome::Missed;
        }

        let answer = env.confirm.confirm(DELETE_PROMPT);
        if answer != Confirmation::Confirmed {
            return InteractionOutcome::DeleteDeclined(answer);
        }

        // Removal targets the index recorded by the last edit-mode selection,
        // which can differ from the shape just hit.
        let index = self.selected;
        match store.remove_at(index) {
            Ok(shape) => {
                log::info!("Deleted shape {} at index {}", shape.id(), index);
                env.surface.request_redraw();
                InteractionOutcome::Deleted { index, shape }
            }
            Err(e) => {
                log::warn!("Delete aborted: {}", e);
                InteractionOutcome::DeleteFailed(e)
            }
        }
    }

    /// Build a shape spanning twice the drag displacement, centered on the
    /// tool anchor.
    fn build_shape(&self, tools: &dyn ToolConfig) -> Option<Shape> {
        let kind = tools.shape_kind()?;
        let width = 2.0 * (self.current.x - self.start.x);
        let height = 2.0 * (self.current.y - self.start.y);
        Some(Shape::new(
            kind,
            tools.anchor(),
            width,
            height,
            tools.color(),
            tools.filled(),
        ))
    }
}
