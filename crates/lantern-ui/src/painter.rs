use lantern_gfx::coords::{Bounds, Rect, Vec2, Viewport};
use lantern_gfx::paint::Color;
use lantern_gfx::resources::{MeshId, ShaderId};
use lantern_gfx::scene::{DrawCmd, DrawList, RectCmd, TextCmd};
use lantern_gfx::text::{FontId, FontSystem};

/// Drawing surface handed to the widget tree for one frame.
///
/// Borrows the frame's [`DrawList`] and the application's [`FontSystem`] and
/// carries the current viewport, so widgets can convert their normalized
/// bounds to pixels without holding any rendering state themselves.
pub struct Painter<'a> {
    list: &'a mut DrawList,
    fonts: &'a FontSystem,
    viewport: Viewport,
}

impl<'a> Painter<'a> {
    pub fn new(list: &'a mut DrawList, fonts: &'a FontSystem, viewport: Viewport) -> Self {
        Self { list, fonts, viewport }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` in pixels with the font's bound size.
    #[inline]
    pub fn measure_text(&self, font: FontId, text: &str) -> Vec2 {
        self.fonts.measure_text(font, text)
    }

    /// Pixel size the font was loaded at (caret height for empty fields).
    #[inline]
    pub fn font_size(&self, font: FontId) -> f32 {
        self.fonts.size_of(font)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Flat-colored rectangle from absolute normalized bounds.
    pub fn fill_bounds(&mut self, shader: ShaderId, mesh: MeshId, bounds: Bounds, color: Color) {
        self.fill_rect(shader, mesh, bounds.to_rect(self.viewport), color);
    }

    /// Flat-colored rectangle in pixel space.
    pub fn fill_rect(&mut self, shader: ShaderId, mesh: MeshId, rect: Rect, color: Color) {
        self.list.push(DrawCmd::Rect(RectCmd { shader, mesh, rect, color }));
    }

    /// Text run with `origin` at the top-left of the measured box, pixels.
    pub fn text(&mut self, font: FontId, origin: Vec2, text: impl Into<String>, color: Color) {
        self.list.push(DrawCmd::Text(TextCmd { font, origin, text: text.into(), color }));
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begins a scissor region over `bounds`. Must be paired with
    /// [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, bounds: Bounds) {
        self.list.push_clip(bounds.to_rect(self.viewport));
    }

    /// Ends the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.list.pop_clip();
    }
}
