use lantern_gfx::coords::{Bounds, Vec2};
use lantern_gfx::paint::Color;
use lantern_gfx::text::FontId;

use crate::painter::Painter;

/// Placement of a [`Text`] label inside its bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextAlign {
    Center,
    Left,
    Right,
}

/// A static text label.
pub struct Text {
    pub text: String,
    pub align: TextAlign,
    /// Pixel offset applied after alignment.
    pub padding: Vec2,
    pub color: Color,
    font: FontId,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, color: Color) -> Self {
        Self {
            text: text.into(),
            align: TextAlign::Center,
            padding: Vec2::zero(),
            color,
            font,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn padding(mut self, padding: Vec2) -> Self {
        self.padding = padding;
        self
    }

    pub(crate) fn draw(&self, abs: Bounds, painter: &mut Painter) {
        let viewport = painter.viewport();
        let size = painter.measure_text(self.font, &self.text);
        let (cx, cy) = abs.center();
        let y = cy * viewport.height - size.y / 2.0;

        let origin = match self.align {
            TextAlign::Center => Vec2::new(cx * viewport.width - size.x / 2.0, y),
            TextAlign::Left => Vec2::new(abs.min_x * viewport.width, y),
            TextAlign::Right => Vec2::new(abs.max_x * viewport.width - size.x, y),
        };

        painter.text(self.font, origin + self.padding, self.text.clone(), self.color);
    }
}
