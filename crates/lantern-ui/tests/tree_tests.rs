use lantern_gfx::scene::DrawCmd;
use lantern_ui::prelude::*;

const VIEW: Viewport = Viewport::new(100.0, 100.0);

fn group(name: &str, bounds: Bounds) -> ElementRef {
    ElementRef::new(name, bounds, WidgetKind::Group)
}

fn canvas(name: &str, bounds: Bounds) -> ElementRef {
    ElementRef::new(name, bounds, Canvas::new(ShaderId(0), MeshId(0), Color::white()))
}

fn render(roots: &[ElementRef]) -> DrawList {
    let fonts = FontSystem::new();
    let mut list = DrawList::new();
    let mut painter = Painter::new(&mut list, &fonts, VIEW);
    for root in roots {
        root.render(&mut painter);
    }
    list
}

fn rect_count(list: &DrawList) -> usize {
    list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Rect(_))).count()
}

// ── render traversal ──────────────────────────────────────────────────────

#[test]
fn parent_draws_before_children_in_insertion_order() {
    let root = canvas("root", Bounds::unit());
    let a = canvas("a", Bounds::new(0.0, 0.0, 0.5, 0.5));
    let b = canvas("b", Bounds::new(0.5, 0.5, 1.0, 1.0));
    root.attach_child(&a).unwrap();
    root.attach_child(&b).unwrap();

    let list = render(&[root]);
    let rects: Vec<Rect> = list
        .items()
        .iter()
        .filter_map(|i| match &i.cmd {
            DrawCmd::Rect(r) => Some(r.rect),
            _ => None,
        })
        .collect();

    assert_eq!(rects.len(), 3);
    assert_eq!(rects[0], Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(rects[1], Rect::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(rects[2], Rect::new(50.0, 50.0, 50.0, 50.0));
}

#[test]
fn inactive_subtree_renders_nothing() {
    let root = canvas("root", Bounds::unit());
    let child = canvas("a", Bounds::new(0.0, 0.0, 0.5, 0.5));
    root.attach_child(&child).unwrap();

    child.set_active(false);
    assert_eq!(rect_count(&render(&[root.clone()])), 1);

    root.set_active(false);
    assert_eq!(rect_count(&render(&[root])), 0);
}

// ── list clipping vs. hit testing ─────────────────────────────────────────

fn overflowing_list() -> (ElementRef, ElementRef) {
    // List occupies the top half; ten rows at the 0.1 minimum item height
    // roll out to a full viewport of content, half of it below the fold.
    let list = ElementRef::new(
        "log",
        Bounds::new(0.0, 0.0, 1.0, 0.5),
        List::new(ShaderId(0), FontId(0), MeshId(0)),
    );
    let root = group("root", Bounds::unit());
    root.attach_child(&list).unwrap();
    for i in 0..10 {
        list.attach_child(&canvas(&format!("row{i}"), Bounds::zero())).unwrap();
    }
    list.update_child_dimensions();
    (root, list)
}

#[test]
fn list_children_render_inside_the_scissor_region() {
    let (root, list) = overflowing_list();
    let drawn = render(&[root]);

    // One unclipped background rect plus ten clipped rows.
    assert_eq!(rect_count(&drawn), 11);
    let list_px = list.absolute_bounds().to_rect(VIEW);

    let clips: Vec<Option<Rect>> = drawn.items().iter().map(|i| i.clip).collect();
    assert_eq!(clips[0], None);
    for clip in &clips[1..] {
        assert_eq!(*clip, Some(list_px));
    }
}

#[test]
fn scrolled_out_item_is_clipped_but_still_hit_testable() {
    let (root, list) = overflowing_list();

    // Row 9 sits at absolute y [0.9, 1.0] — well below the list's box,
    // which ends at y = 0.5.
    let row9 = list.get_child("row9").unwrap();
    let abs = row9.absolute_bounds();
    assert!(abs.min_y >= 0.5);

    // Clipping affects rendering only: the geometric hit test still sees it.
    assert!(root.is_mouse_over(50.0, 95.0, VIEW));
    assert!(row9.is_mouse_over(50.0, 95.0, VIEW));
}

#[test]
fn wheel_scroll_shifts_rows_through_the_event_path() {
    let (root, list) = overflowing_list();

    // Hover the list, then scroll down one notch; relayout happens inside
    // the event dispatch itself.
    root.handle_event(&UiEvent::PointerMove { x: 50.0, y: 25.0 }, VIEW);
    root.handle_event(&UiEvent::Wheel { delta_y: -1.0 }, VIEW);

    let row0 = list.get_child("row0").unwrap().absolute_bounds();
    assert!(row0.min_y < 0.0);
}

#[test]
fn wheel_outside_the_list_does_not_scroll() {
    let (root, list) = overflowing_list();

    root.handle_event(&UiEvent::PointerMove { x: 50.0, y: 90.0 }, VIEW);
    root.handle_event(&UiEvent::Wheel { delta_y: -1.0 }, VIEW);

    let row0 = list.get_child("row0").unwrap().absolute_bounds();
    assert_eq!(row0.min_y, 0.0);
}

// ── action re-entrancy ────────────────────────────────────────────────────

#[test]
fn click_action_may_mutate_the_tree_it_lives_in() {
    let context = Context::new(ShaderId(0), FontId(0), MeshId(0));
    let root = group("root", Bounds::unit());

    // The action hides the whole tree — including the button that fired it.
    let root_handle = root.clone();
    let button = ElementRef::new(
        "hide",
        Bounds::new(0.25, 0.25, 0.75, 0.75),
        Button::new("Hide", &context)
            .on_click(std::rc::Rc::new(move || root_handle.set_active(false))),
    );
    root.attach_child(&button).unwrap();

    root.handle_event(&UiEvent::PointerMove { x: 50.0, y: 50.0 }, VIEW);
    root.handle_event(&UiEvent::PointerDown { button: MouseButton::Left, x: 50.0, y: 50.0 }, VIEW);

    assert!(!root.is_active());
}

// ── text widgets through the event path ───────────────────────────────────

#[test]
fn text_field_focus_and_editing() {
    let context = Context::new(ShaderId(0), FontId(0), MeshId(0));
    let field = ElementRef::new(
        "name",
        Bounds::new(0.0, 0.0, 0.5, 0.5),
        TextField::new(&context),
    );

    // Click inside to focus, type, backspace.
    field.handle_event(&UiEvent::PointerDown { button: MouseButton::Left, x: 20.0, y: 20.0 }, VIEW);
    field.handle_event(&UiEvent::TextInput { text: "hi!".into() }, VIEW);
    field.handle_event(&UiEvent::KeyDown { key: Key::Backspace }, VIEW);

    field
        .with_widget::<TextField, _>(|f| {
            assert!(f.is_focused());
            assert_eq!(f.text(), "hi");
        })
        .unwrap();

    // Click outside to blur; further input is ignored.
    field.handle_event(&UiEvent::PointerDown { button: MouseButton::Left, x: 90.0, y: 90.0 }, VIEW);
    field.handle_event(&UiEvent::TextInput { text: "x".into() }, VIEW);

    field
        .with_widget::<TextField, _>(|f| {
            assert!(!f.is_focused());
            assert_eq!(f.text(), "hi");
        })
        .unwrap();
}

#[test]
fn text_lines_append_to_the_last_line() {
    let lines = ElementRef::new(
        "console",
        Bounds::unit(),
        TextLines::new(FontId(0), Color::white()),
    );
    lines
        .with_widget::<TextLines, _>(|t| t.push_multiline("first\nsecond"))
        .unwrap();

    lines.handle_event(&UiEvent::PointerDown { button: MouseButton::Left, x: 50.0, y: 50.0 }, VIEW);
    lines.handle_event(&UiEvent::TextInput { text: "!".into() }, VIEW);

    lines
        .with_widget::<TextLines, _>(|t| {
            assert_eq!(t.lines, vec!["first".to_string(), "second!".to_string()]);
        })
        .unwrap();
}

#[test]
fn backspace_on_empty_text_lines_is_harmless() {
    let lines = ElementRef::new("console", Bounds::unit(), TextLines::new(FontId(0), Color::white()));
    lines.handle_event(&UiEvent::PointerDown { button: MouseButton::Left, x: 50.0, y: 50.0 }, VIEW);
    lines.handle_event(&UiEvent::KeyDown { key: Key::Backspace }, VIEW);
}
