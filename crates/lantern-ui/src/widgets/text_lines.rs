use lantern_gfx::coords::{Bounds, Vec2, Viewport};
use lantern_gfx::paint::Color;
use lantern_gfx::text::FontId;

use crate::event::{Key, UiEvent};
use crate::painter::Painter;

/// A stack of text lines with rudimentary editing.
///
/// Clicking inside the bounds focuses the widget; while focused, committed
/// text appends to the last line and Backspace deletes one character from it.
/// Lines render top-down from the upper-left corner, each advanced by its
/// measured height times `line_spacing`.
pub struct TextLines {
    pub lines: Vec<String>,
    pub color: Color,
    pub line_spacing: f32,
    font: FontId,
    focused: bool,
}

impl TextLines {
    pub fn new(font: FontId, color: Color) -> Self {
        Self {
            lines: Vec::new(),
            color,
            line_spacing: 1.2,
            font,
            focused: false,
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends one entry per line of `text`.
    pub fn push_multiline(&mut self, text: &str) {
        for line in text.lines() {
            self.lines.push(line.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn draw(&self, abs: Bounds, painter: &mut Painter) {
        let viewport = painter.viewport();
        let x = abs.min_x * viewport.width;
        let mut y = abs.min_y * viewport.height;

        for line in &self.lines {
            let size = painter.measure_text(self.font, line);
            painter.text(self.font, Vec2::new(x, y), line.clone(), self.color);
            y += size.y.max(painter.font_size(self.font)) * self.line_spacing;
        }
    }

    pub(crate) fn handle(&mut self, event: &UiEvent, abs: Bounds, viewport: Viewport) {
        match event {
            UiEvent::PointerDown { x, y, .. } => {
                let (nx, ny) = viewport.normalize(*x, *y);
                self.focused = abs.contains(nx, ny);
            }
            UiEvent::TextInput { text } if self.focused => {
                match self.lines.last_mut() {
                    Some(last) => last.push_str(text),
                    None => self.lines.push(text.clone()),
                }
            }
            UiEvent::KeyDown { key: Key::Backspace } if self.focused => {
                if let Some(last) = self.lines.last_mut() {
                    last.pop();
                }
            }
            _ => {}
        }
    }
}
