use lantern_gfx::coords::Viewport;

use crate::element::ElementRef;
use crate::event::UiEvent;
use crate::painter::Painter;

/// The ordered set of top-level element trees.
///
/// Render and event calls fan out to every registered root in registration
/// order; events are never consumed, so every root always sees every event.
/// Removal is by identity, not name — two structurally identical trees stay
/// distinguishable.
#[derive(Default)]
pub struct System {
    elements: Vec<ElementRef>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: ElementRef) {
        self.elements.push(element);
    }

    /// Removes every handle to the same node as `element`; a no-op when the
    /// tree was never registered.
    pub fn remove(&mut self, element: &ElementRef) {
        self.elements.retain(|e| !e.ptr_eq(element));
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn roots(&self) -> &[ElementRef] {
        &self.elements
    }

    /// Draws all roots in registration order.
    pub fn render(&self, painter: &mut Painter) {
        for element in &self.elements {
            element.render(painter);
        }
    }

    /// Dispatches one event to every root.
    pub fn handle_event(&self, event: &UiEvent, viewport: Viewport) {
        for element in &self.elements {
            element.handle_event(event, viewport);
        }
    }

    /// True if any root's active subtree contains the pixel point. Used by
    /// the application to suppress world-space input while the cursor is
    /// over UI chrome.
    pub fn is_mouse_over_ui(&self, x: f32, y: f32, viewport: Viewport) -> bool {
        self.elements.iter().any(|e| e.is_mouse_over(x, y, viewport))
    }
}
