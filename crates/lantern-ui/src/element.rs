use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lantern_gfx::coords::{Bounds, Viewport};

use crate::action::Action;
use crate::error::UiError;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widgets::layout::{distribute, Axis};
use crate::widgets::{WidgetCast, WidgetKind};

/// One node of the UI tree.
///
/// Carries the structural state every widget shares — name, local bounds,
/// active and hover flags, children, parent back-reference — plus the
/// [`WidgetKind`] payload. Not used directly: all access goes through
/// [`ElementRef`].
pub struct Element {
    name: String,
    /// Local bounds in [0,1], relative to the parent's absolute rectangle.
    bounds: Bounds,
    active: bool,
    hovered: bool,
    parent: Weak<RefCell<Element>>,
    children: Vec<ElementRef>,
    kind: WidgetKind,
}

/// Shared handle to an element.
///
/// Parents own their children through these handles; the child's parent link
/// is a [`Weak`] back-reference used only for bounds composition, never for
/// lifetime. Dropping a subtree's last handle drops the subtree.
#[derive(Clone)]
pub struct ElementRef(Rc<RefCell<Element>>);

impl std::fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let el = self.0.borrow();
        f.debug_struct("ElementRef")
            .field("name", &el.name)
            .field("kind", &el.kind.name())
            .finish()
    }
}

impl ElementRef {
    pub fn new(name: impl Into<String>, bounds: Bounds, kind: impl Into<WidgetKind>) -> Self {
        Self(Rc::new(RefCell::new(Element {
            name: name.into(),
            bounds,
            active: true,
            hovered: false,
            parent: Weak::new(),
            children: Vec::new(),
            kind: kind.into(),
        })))
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn bounds(&self) -> Bounds {
        self.0.borrow().bounds
    }

    pub fn set_bounds(&self, bounds: Bounds) {
        self.0.borrow_mut().bounds = bounds;
    }

    /// Whether this node (and thereby its whole subtree) participates in
    /// render, event, and hit-test traversal.
    pub fn is_active(&self) -> bool {
        self.0.borrow().active
    }

    pub fn set_active(&self, active: bool) {
        self.0.borrow_mut().active = active;
    }

    /// Hover flag derived from the most recent pointer-move event.
    pub fn is_hovered(&self) -> bool {
        self.0.borrow().hovered
    }

    pub fn widget_name(&self) -> &'static str {
        self.0.borrow().kind.name()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// Snapshot of the child handles in insertion order.
    pub fn children(&self) -> Vec<ElementRef> {
        self.0.borrow().children.clone()
    }

    /// Identity comparison — two handles to the same node.
    pub fn ptr_eq(&self, other: &ElementRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // ── tree mutation ─────────────────────────────────────────────────────

    /// Inserts `child` at the end of the child list and points its parent
    /// back-reference at this node.
    ///
    /// Fails with [`UiError::DuplicateName`] if a sibling of the same name
    /// already exists; the existing child is left untouched.
    pub fn attach_child(&self, child: &ElementRef) -> Result<(), UiError> {
        let name = child.name();
        {
            let el = self.0.borrow();
            if el.children.iter().any(|c| c.0.borrow().name == name) {
                return Err(UiError::DuplicateName { name });
            }
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    /// Removes and returns the child named `name`, destroying the subtree
    /// once the returned handle is dropped. `None` if absent.
    pub fn detach_child(&self, name: &str) -> Option<ElementRef> {
        let mut el = self.0.borrow_mut();
        let idx = el.children.iter().position(|c| c.0.borrow().name == name)?;
        let child = el.children.remove(idx);
        child.0.borrow_mut().parent = Weak::new();
        Some(child)
    }

    // ── lookup ────────────────────────────────────────────────────────────

    /// Child handle by name, or [`UiError::NotFound`].
    pub fn get_child(&self, name: &str) -> Result<ElementRef, UiError> {
        self.find_child(name)
            .ok_or_else(|| UiError::NotFound { name: name.to_string() })
    }

    /// Non-failing lookup variant.
    pub fn find_child(&self, name: &str) -> Option<ElementRef> {
        self.0
            .borrow()
            .children
            .iter()
            .find(|c| c.0.borrow().name == name)
            .cloned()
    }

    /// Looks up the child named `name` and passes its widget, downcast to
    /// `W`, to `f`.
    ///
    /// Fails with [`UiError::NotFound`] if the child is absent and
    /// [`UiError::TypeMismatch`] if it is a different widget kind.
    pub fn with_child<W: WidgetCast, R>(
        &self,
        name: &str,
        f: impl FnOnce(&mut W) -> R,
    ) -> Result<R, UiError> {
        self.get_child(name)?.with_widget(f)
    }

    /// Passes this element's widget, downcast to `W`, to `f`.
    pub fn with_widget<W: WidgetCast, R>(&self, f: impl FnOnce(&mut W) -> R) -> Result<R, UiError> {
        let mut el = self.0.borrow_mut();
        let name = el.name.clone();
        match W::from_kind_mut(&mut el.kind) {
            Some(w) => Ok(f(w)),
            None => Err(UiError::TypeMismatch { name, expected: W::NAME }),
        }
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Absolute bounds in viewport space, composed by mapping this node's
    /// local rectangle through every ancestor. A root's absolute bounds are
    /// its local bounds.
    ///
    /// Recomputed on demand, O(depth) per call; callers that need it every
    /// frame pay the recomputation.
    pub fn absolute_bounds(&self) -> Bounds {
        let (bounds, parent) = {
            let el = self.0.borrow();
            (el.bounds, el.parent.upgrade())
        };
        match parent {
            Some(p) => bounds.map_into(ElementRef(p).absolute_bounds()),
            None => bounds,
        }
    }

    fn parent_absolute_bounds(&self) -> Bounds {
        let parent = self.0.borrow().parent.upgrade();
        match parent {
            Some(p) => ElementRef(p).absolute_bounds(),
            None => Bounds::unit(),
        }
    }

    /// Recomputes the children's local bounds for layout containers and
    /// lists; a no-op for every other widget kind.
    ///
    /// Never triggered automatically by attach/detach — the caller mutating
    /// the child list is responsible for invoking this afterwards.
    pub fn update_child_dimensions(&self) {
        let abs = self.absolute_bounds();
        let el = self.0.borrow();
        match &el.kind {
            WidgetKind::HorizontalLayout(l) => distribute(&el.children, l.gap, Axis::Horizontal),
            WidgetKind::VerticalLayout(l) => distribute(&el.children, l.gap, Axis::Vertical),
            WidgetKind::List(l) => l.layout_children(&el.children, abs),
            _ => {}
        }
    }

    // ── traversal ─────────────────────────────────────────────────────────

    /// Draws this subtree into `painter`. Inactive nodes prune their whole
    /// subtree; children render after their parent, in insertion order.
    pub fn render(&self, painter: &mut Painter) {
        let parent_abs = self.parent_absolute_bounds();
        self.render_within(painter, parent_abs);
    }

    fn render_within(&self, painter: &mut Painter, parent_abs: Bounds) {
        let el = self.0.borrow();
        if !el.active {
            return;
        }
        let abs = el.bounds.map_into(parent_abs);

        match &el.kind {
            WidgetKind::Group => {}
            WidgetKind::Canvas(c) => c.draw(abs, painter),
            WidgetKind::Button(b) => b.draw(abs, el.hovered, painter),
            WidgetKind::Text(t) => t.draw(abs, painter),
            WidgetKind::TextLines(t) => t.draw(abs, painter),
            WidgetKind::TextField(t) => t.draw(abs, painter),
            WidgetKind::HorizontalLayout(_) | WidgetKind::VerticalLayout(_) => {}
            WidgetKind::List(l) => {
                // Background, then children inside the scissor region so
                // scrolled-out items never bleed outside the box.
                l.draw_background(abs, painter);
                painter.push_clip(abs);
                for child in &el.children {
                    child.render_within(painter, abs);
                }
                painter.pop_clip();
                return;
            }
        }

        for child in &el.children {
            child.render_within(painter, abs);
        }
    }

    /// Routes one event through this subtree.
    ///
    /// Pointer motion refreshes every active node's hover flag before the
    /// widget-specific handling runs; all events then propagate to all active
    /// children — no consumption, no short-circuit.
    pub fn handle_event(&self, event: &UiEvent, viewport: Viewport) {
        let parent_abs = self.parent_absolute_bounds();
        self.handle_event_within(event, viewport, parent_abs);
    }

    fn handle_event_within(&self, event: &UiEvent, viewport: Viewport, parent_abs: Bounds) {
        let mut fired: Option<Action> = None;

        let (abs, children) = {
            let mut el_ref = self.0.borrow_mut();
            let el = &mut *el_ref;
            if !el.active {
                return;
            }
            let abs = el.bounds.map_into(parent_abs);

            if let UiEvent::PointerMove { x, y } = *event {
                let (nx, ny) = viewport.normalize(x, y);
                el.hovered = abs.contains(nx, ny);
            }

            match &mut el.kind {
                WidgetKind::Button(b) => fired = b.handle(event, el.hovered),
                WidgetKind::TextLines(t) => t.handle(event, abs, viewport),
                WidgetKind::TextField(t) => t.handle(event, abs, viewport),
                WidgetKind::List(l) => {
                    l.handle(event, el.hovered, abs, el.children.len());
                    l.layout_children(&el.children, abs);
                }
                _ => {}
            }

            (abs, el.children.clone())
        };

        // The tree is not borrowed here, so a button action may freely
        // mutate any element, including this one.
        if let Some(action) = fired {
            action();
        }

        for child in children {
            child.handle_event_within(event, viewport, abs);
        }
    }

    /// True if any active node in this subtree — itself included — contains
    /// the pixel point. An inactive node excludes its whole subtree even
    /// when it would contain the point geometrically.
    ///
    /// Scissor clipping is a render-time concern only: a List item scrolled
    /// out of view still reports a hit here.
    pub fn is_mouse_over(&self, x: f32, y: f32, viewport: Viewport) -> bool {
        let parent_abs = self.parent_absolute_bounds();
        self.is_mouse_over_within(x, y, viewport, parent_abs)
    }

    fn is_mouse_over_within(&self, x: f32, y: f32, viewport: Viewport, parent_abs: Bounds) -> bool {
        let el = self.0.borrow();
        if !el.active {
            return false;
        }
        let abs = el.bounds.map_into(parent_abs);
        let (nx, ny) = viewport.normalize(x, y);
        if abs.contains(nx, ny) {
            return true;
        }
        el.children
            .iter()
            .any(|c| c.is_mouse_over_within(x, y, viewport, abs))
    }
}
