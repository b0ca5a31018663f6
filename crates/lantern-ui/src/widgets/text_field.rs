use lantern_gfx::coords::{Bounds, Rect, Vec2, Viewport};
use lantern_gfx::paint::Color;
use lantern_gfx::resources::{MeshId, ShaderId};
use lantern_gfx::text::FontId;

use crate::context::Context;
use crate::event::{Key, UiEvent};
use crate::painter::Painter;

/// Caret width in pixels.
const CARET_WIDTH: f32 = 2.0;

/// A single-line text input box.
///
/// Clicking inside the bounds focuses the field (clicking elsewhere blurs
/// it); while focused, committed text appends and Backspace deletes, and a
/// caret quad is drawn after the text.
pub struct TextField {
    text: String,
    pub color: Color,
    pub text_color: Color,
    shader: ShaderId,
    mesh: MeshId,
    font: FontId,
    focused: bool,
}

impl TextField {
    pub fn new(context: &Context) -> Self {
        Self {
            text: String::new(),
            color: Color::black(),
            text_color: Color::white(),
            shader: context.shader,
            mesh: context.mesh,
            font: context.font,
            focused: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn draw(&self, abs: Bounds, painter: &mut Painter) {
        painter.fill_bounds(self.shader, self.mesh, abs, self.color);

        let viewport = painter.viewport();
        let size = painter.measure_text(self.font, &self.text);
        let (cx, cy) = abs.center();
        let origin = Vec2::new(
            cx * viewport.width - size.x / 2.0,
            cy * viewport.height - size.y / 2.0,
        );
        painter.text(self.font, origin, self.text.clone(), self.text_color);

        if self.focused {
            let caret_h = if self.text.is_empty() { painter.font_size(self.font) } else { size.y };
            let caret = Rect::new(origin.x + size.x, origin.y, CARET_WIDTH, caret_h);
            painter.fill_rect(self.shader, self.mesh, caret, self.text_color);
        }
    }

    pub(crate) fn handle(&mut self, event: &UiEvent, abs: Bounds, viewport: Viewport) {
        match event {
            UiEvent::PointerDown { x, y, .. } => {
                let (nx, ny) = viewport.normalize(*x, *y);
                self.focused = abs.contains(nx, ny);
            }
            UiEvent::TextInput { text } if self.focused => {
                self.text.push_str(text);
            }
            UiEvent::KeyDown { key: Key::Backspace } if self.focused => {
                self.text.pop();
            }
            _ => {}
        }
    }
}
