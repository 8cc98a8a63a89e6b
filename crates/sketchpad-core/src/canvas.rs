//! Drawing surface state: placed shapes plus the pointer interaction.

use crate::error::CanvasResult;
use crate::input::PointerEvent;
use crate::interaction::{Collaborators, InteractionController, InteractionOutcome};
use crate::render::{DrawSurface, RenderSurface};
use crate::shapes::Shape;
use crate::store::ShapeStore;

/// The drawing panel: owns the shape list and routes pointer events to the
/// interaction controller.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    store: ShapeStore,
    interaction: InteractionController,
}

impl Canvas {
    /// Create a canvas with no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas holding an existing shape list.
    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        let mut canvas = Self::new();
        canvas.store.replace(Some(shapes));
        canvas
    }

    /// Process one pointer event.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        env: &mut Collaborators<'_>,
    ) -> InteractionOutcome {
        self.interaction.handle(event, &mut self.store, env)
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        self.store.all()
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Mutable access to the interaction, e.g. to `cancel` a drag when the
    /// host loses focus.
    pub fn interaction_mut(&mut self) -> &mut InteractionController {
        &mut self.interaction
    }

    /// Shape being dragged out, if any.
    pub fn pending_shape(&self) -> Option<&Shape> {
        self.interaction.pending_shape()
    }

    /// Index of the shape last selected in edit mode (0 before any selection).
    pub fn selected_index(&self) -> usize {
        self.interaction.selected_index()
    }

    /// Append a shape supplied by the host.
    pub fn add_shape(&mut self, shape: Shape) {
        self.store.append(shape);
    }

    /// Remove the shape at `index` and request a redraw.
    pub fn remove_shape(
        &mut self,
        index: usize,
        surface: &mut dyn RenderSurface,
    ) -> CanvasResult<Shape> {
        let shape = self.store.remove_at(index)?;
        surface.request_redraw();
        Ok(shape)
    }

    /// Remove every shape and request a redraw.
    pub fn clear(&mut self, surface: &mut dyn RenderSurface) {
        log::info!("Clearing {} shapes", self.store.len());
        self.store.clear();
        surface.request_redraw();
    }

    /// Replace the shape list, e.g. after the host loads a drawing.
    ///
    /// `None` is ignored. Returns whether the list was replaced.
    pub fn set_shapes(
        &mut self,
        shapes: Option<Vec<Shape>>,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        let replaced = self.store.replace(shapes);
        if replaced {
            log::info!("Loaded {} shapes", self.store.len());
            surface.request_redraw();
        }
        replaced
    }

    /// Paint every shape in order, then the pending shape on top.
    pub fn paint(&self, surface: &mut dyn DrawSurface) {
        for shape in self.store.iter() {
            shape.draw(surface);
        }
        if let Some(pending) = self.interaction.pending_shape() {
            pending.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanvasError;
    use crate::interaction::Confirmation;
    use crate::render::{DrawCommand, RecordingSurface, RedrawCounter};
    use crate::shapes::ShapeKind;
    use crate::tools::{DrawMode, ToolSettings};
    use kurbo::Point;
    use peniko::Color;

    fn shape(kind: ShapeKind, x: f64, filled: bool) -> Shape {
        Shape::new(kind, Point::new(x, 0.0), 10.0, 10.0, Color::BLACK, filled)
    }

    fn send(
        canvas: &mut Canvas,
        tools: &mut ToolSettings,
        redraws: &mut RedrawCounter,
        event: PointerEvent,
    ) -> InteractionOutcome {
        let mut confirm = |_: &str| Confirmation::Confirmed;
        let mut env = Collaborators::new(tools, &mut confirm, redraws);
        canvas.handle_pointer_event(event, &mut env)
    }

    #[test]
    fn test_paint_order_with_pending_on_top() {
        let mut canvas = Canvas::with_shapes(vec![
            shape(ShapeKind::Rectangle, 0.0, true),
            shape(ShapeKind::Oval, 20.0, false),
        ]);
        let mut tools = ToolSettings::new().with_shape(Some(ShapeKind::Diamond));
        let mut redraws = RedrawCounter::new();

        let mut surface = RecordingSurface::new();
        canvas.paint(&mut surface);
        assert_eq!(surface.commands.len(), 2);
        assert!(matches!(surface.commands[0], DrawCommand::Fill { .. }));
        assert!(matches!(surface.commands[1], DrawCommand::Stroke { .. }));

        send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Pressed(Point::ZERO));
        send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Dragged(Point::new(3.0, 3.0)));

        let pending_path = canvas.pending_shape().map(|p| p.to_path());
        assert!(pending_path.is_some());

        let mut surface = RecordingSurface::new();
        canvas.paint(&mut surface);
        assert_eq!(surface.commands.len(), 3);
        assert!(matches!(surface.commands[0], DrawCommand::Fill { .. }));
        // The outline preview goes last, after every stored shape.
        assert!(matches!(
            &surface.commands[2],
            DrawCommand::Stroke { path, .. } if Some(path) == pending_path.as_ref()
        ));
        assert!(!matches!(
            &surface.commands[1],
            DrawCommand::Stroke { path, .. } if Some(path) == pending_path.as_ref()
        ));
    }

    #[test]
    fn test_cancel_through_canvas_drops_preview() {
        let mut canvas = Canvas::new();
        let mut tools = ToolSettings::new().with_shape(Some(ShapeKind::Oval));
        let mut redraws = RedrawCounter::new();

        send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Pressed(Point::ZERO));
        send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Dragged(Point::new(5.0, 5.0)));
        assert!(canvas.pending_shape().is_some());

        canvas.interaction_mut().cancel();
        assert!(canvas.pending_shape().is_none());
        assert!(!canvas.interaction().is_drawing());

        let outcome = send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Released(Point::new(5.0, 5.0)));
        assert!(matches!(outcome, InteractionOutcome::Ignored));
        assert!(canvas.shapes().is_empty());

        let mut surface = RecordingSurface::new();
        canvas.paint(&mut surface);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_paint_without_pending() {
        let canvas = Canvas::new();
        let mut surface = RecordingSurface::new();
        canvas.paint(&mut surface);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_full_edit_then_delete_flow() {
        let mut canvas = Canvas::new();
        let mut tools = ToolSettings::new()
            .with_shape(Some(ShapeKind::Rectangle))
            .with_anchor(Point::new(50.0, 50.0));
        let mut redraws = RedrawCounter::new();

        send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Pressed(Point::new(0.0, 0.0)));
        send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Released(Point::new(10.0, 10.0)));
        assert_eq!(canvas.shapes().len(), 1);

        tools.mode = DrawMode::Editing;
        send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Pressed(Point::new(50.0, 50.0)));
        assert_eq!(canvas.selected_index(), 0);

        tools.mode = DrawMode::Deleting;
        let outcome = send(&mut canvas, &mut tools, &mut redraws, PointerEvent::Pressed(Point::new(50.0, 50.0)));
        assert!(matches!(outcome, InteractionOutcome::Deleted { index: 0, .. }));
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_host_list_operations_request_redraw() {
        let mut canvas = Canvas::new();
        let mut redraws = RedrawCounter::new();

        canvas.add_shape(shape(ShapeKind::Oval, 0.0, false));
        canvas.add_shape(shape(ShapeKind::Oval, 20.0, false));
        assert_eq!(canvas.shapes().len(), 2);

        assert!(canvas.remove_shape(0, &mut redraws).is_ok());
        assert!(redraws.take());
        assert_eq!(
            canvas.remove_shape(5, &mut redraws).unwrap_err(),
            CanvasError::IndexOutOfRange { index: 5, len: 1 }
        );
        assert!(!redraws.take());

        assert!(!canvas.set_shapes(None, &mut redraws));
        assert!(!redraws.take());
        assert_eq!(canvas.shapes().len(), 1);

        assert!(canvas.set_shapes(Some(vec![shape(ShapeKind::Diamond, 0.0, true)]), &mut redraws));
        assert!(redraws.take());
        assert_eq!(canvas.shapes()[0].kind(), ShapeKind::Diamond);

        canvas.clear(&mut redraws);
        assert!(redraws.take());
        assert!(canvas.shapes().is_empty());
    }
}
