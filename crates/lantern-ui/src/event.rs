/// Pointer button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Named keys the widgets react to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Key {
    Backspace,
    Enter,
    Escape,
}

/// Input events routed through the widget tree.
///
/// Positions are in pixels; the viewport passed alongside every
/// `handle_event` call converts them into normalized space. Every event is
/// fanned out to every active element — there are no consumption or
/// short-circuit semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Cursor moved to `(x, y)`. Drives the per-element hover flag.
    PointerMove { x: f32, y: f32 },
    /// Mouse button pressed at `(x, y)`.
    PointerDown { button: MouseButton, x: f32, y: f32 },
    /// Mouse wheel / trackpad scroll. Positive `delta_y` scrolls up.
    Wheel { delta_y: f32 },
    /// Named key pressed.
    KeyDown { key: Key },
    /// Committed text input (one or more characters).
    TextInput { text: String },
}
