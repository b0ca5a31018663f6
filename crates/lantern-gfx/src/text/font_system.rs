use std::fmt;

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font slot.
///
/// Slots allocated by [`FontSystem::load_font`] measure with real metrics;
/// a handle the system has never seen falls back to a coarse estimate so
/// headless tools can run without a font file on disk.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub usize);

/// Owns the loaded fonts and answers measurement queries.
///
/// Each font is bound to a pixel size at load time, matching a renderer that
/// bakes one glyph atlas per font. Rasterization and drawing stay on the
/// renderer side of the seam; the UI layer only ever measures.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<(fontdue::Font, f32)>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses a TrueType/OpenType font from raw bytes and binds it to `px_size`.
    pub fn load_font(&mut self, bytes: &[u8], px_size: f32) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push((font, px_size));
        Ok(id)
    }

    /// Pixel size bound to `id`, or a 16 px fallback for unknown handles.
    pub fn size_of(&self, id: FontId) -> f32 {
        self.fonts.get(id.0).map(|(_, s)| *s).unwrap_or(16.0)
    }

    /// Computes the bounding box of a laid-out string in pixels.
    #[must_use]
    pub fn measure_text(&self, id: FontId, text: &str) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some((font, size)) = self.fonts.get(id.0) else {
            // Unknown slot: estimate from the fallback size so layout code
            // still produces finite positions.
            let size = self.size_of(id);
            return Vec2::new(text.chars().count() as f32 * size * 0.5, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(std::slice::from_ref(font), &TextStyle::new(text, *size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, *size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(*size, f32::max);
        Vec2::new(w, h)
    }
}
