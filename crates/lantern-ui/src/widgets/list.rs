use lantern_gfx::coords::Bounds;
use lantern_gfx::paint::Color;
use lantern_gfx::resources::{MeshId, ShaderId};
use lantern_gfx::text::FontId;

use crate::element::ElementRef;
use crate::event::UiEvent;
use crate::painter::Painter;

/// Scroll distance per wheel-delta unit, normalized.
const SCROLL_SENSITIVITY: f32 = 0.02;

/// A scrollable vertical container.
///
/// Children are stacked into equal slices at least `min_item_height` tall;
/// when they overflow the visible box, wheel events (while hovered) scroll
/// them. Rendering clips children to the list's pixel rectangle, but hit
/// testing deliberately does not consult the clip — a scrolled-out item whose
/// geometry contains the query point still reports a hit (see
/// [`ElementRef::is_mouse_over`]).
///
/// Layout is recomputed after every event the list handles; after mutating
/// children outside the event path, call
/// [`ElementRef::update_child_dimensions`].
pub struct List {
    shader: ShaderId,
    mesh: MeshId,
    pub font: FontId,
    /// Gap between adjacent items, normalized units.
    pub gap: f32,
    /// Lower bound on an item's height, normalized units.
    pub min_item_height: f32,
    pub background: Color,
    scroll_offset: f32,
}

impl List {
    pub fn new(shader: ShaderId, font: FontId, mesh: MeshId) -> Self {
        Self {
            shader,
            mesh,
            font,
            gap: 0.0,
            min_item_height: 0.1,
            background: Color::rgb(1.0, 1.0, 0.0),
            scroll_offset: 0.0,
        }
    }

    /// Current scroll offset in normalized units, clamped to
    /// `[0, total_list_height − visible_height]`.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub(crate) fn draw_background(&self, abs: Bounds, painter: &mut Painter) {
        painter.fill_bounds(self.shader, self.mesh, abs, self.background);
    }

    pub(crate) fn handle(&mut self, event: &UiEvent, hovered: bool, abs: Bounds, child_count: usize) {
        if let UiEvent::Wheel { delta_y } = event {
            if !hovered {
                return;
            }
            let max = (self.total_list_height(abs, child_count) - self.visible_height(abs)).max(0.0);
            self.scroll_offset = (self.scroll_offset - delta_y * SCROLL_SENSITIVITY).clamp(0.0, max);
        }
    }

    /// Assigns each child a vertical slice of the scrolled content, expressed
    /// in the list's own normalized space. Slices above the visible box get
    /// negative coordinates; the scissor clip hides them at render time.
    pub(crate) fn layout_children(&self, children: &[ElementRef], abs: Bounds) {
        let count = children.len();
        if count == 0 {
            return;
        }

        let visible = self.visible_height(abs);
        if visible <= 0.0 {
            return;
        }

        let item = self.item_height(abs, count);
        let mut y = abs.min_y - self.scroll_offset;

        for child in children {
            let min_y = (y - abs.min_y) / visible;
            let max_y = (y + item - abs.min_y) / visible;
            child.set_bounds(Bounds::new(0.0, min_y, 1.0, max_y));
            y += item + self.gap;
        }
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Height of the visible box, normalized.
    fn visible_height(&self, abs: Bounds) -> f32 {
        abs.height()
    }

    fn total_gap(&self, count: usize) -> f32 {
        if count > 1 { self.gap * (count - 1) as f32 } else { 0.0 }
    }

    /// Per-item height: an equal split of the visible space, floored at
    /// `min_item_height`.
    fn item_height(&self, abs: Bounds, count: usize) -> f32 {
        let available = self.visible_height(abs) - self.total_gap(count);
        (available / count as f32).max(self.min_item_height)
    }

    /// Height of the rolled-out list including the scrolled-away part.
    fn total_list_height(&self, abs: Bounds, count: usize) -> f32 {
        self.item_height(abs, count) * count as f32 + self.total_gap(count)
    }
}

#[cfg(test)]
mod tests {
    use lantern_gfx::coords::Bounds;

    use crate::element::ElementRef;
    use crate::event::UiEvent;
    use crate::widgets::WidgetKind;

    use super::*;

    fn list() -> List {
        List::new(ShaderId(0), FontId(0), MeshId(0))
    }

    fn nodes(n: usize) -> Vec<ElementRef> {
        (0..n)
            .map(|i| ElementRef::new(format!("item{i}"), Bounds::zero(), WidgetKind::Group))
            .collect()
    }

    #[test]
    fn layout_no_children_is_a_noop() {
        list().layout_children(&[], Bounds::unit());
    }

    #[test]
    fn items_fill_visible_box_when_few() {
        // 2 items in a full-height box: each takes half, min height not hit.
        let l = list();
        let children = nodes(2);
        l.layout_children(&children, Bounds::unit());

        assert_eq!(children[0].bounds(), Bounds::new(0.0, 0.0, 1.0, 0.5));
        assert_eq!(children[1].bounds(), Bounds::new(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn min_item_height_floors_the_slice() {
        // 20 items would be 0.05 tall each; the floor keeps them at 0.1.
        let l = list();
        let children = nodes(20);
        l.layout_children(&children, Bounds::unit());

        let b = children[0].bounds();
        assert!((b.max_y - b.min_y - 0.1).abs() < 1e-6);
        // Content overflows: the last item starts past the visible box.
        assert!(children[19].bounds().min_y > 1.0 - 1e-6);
    }

    #[test]
    fn wheel_scroll_moves_children_up() {
        let mut l = list();
        let children = nodes(20);
        let abs = Bounds::unit();

        // Scroll down by one wheel notch.
        l.handle(&UiEvent::Wheel { delta_y: -1.0 }, true, abs, children.len());
        assert!((l.scroll_offset() - SCROLL_SENSITIVITY).abs() < 1e-6);

        l.layout_children(&children, abs);
        assert!((children[0].bounds().min_y + SCROLL_SENSITIVITY).abs() < 1e-6);
    }

    #[test]
    fn wheel_without_hover_is_ignored() {
        let mut l = list();
        l.handle(&UiEvent::Wheel { delta_y: -1.0 }, false, Bounds::unit(), 20);
        assert_eq!(l.scroll_offset(), 0.0);
    }

    #[test]
    fn scroll_clamps_at_both_ends() {
        let mut l = list();
        let abs = Bounds::unit();

        // Scrolling up from the top stays at zero.
        l.handle(&UiEvent::Wheel { delta_y: 10.0 }, true, abs, 20);
        assert_eq!(l.scroll_offset(), 0.0);

        // 20 items × 0.1 = 2.0 total; max offset is 1.0.
        for _ in 0..200 {
            l.handle(&UiEvent::Wheel { delta_y: -1.0 }, true, abs, 20);
        }
        assert!((l.scroll_offset() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn content_that_fits_cannot_scroll() {
        let mut l = list();
        l.handle(&UiEvent::Wheel { delta_y: -5.0 }, true, Bounds::unit(), 3);
        assert_eq!(l.scroll_offset(), 0.0);
    }
}
