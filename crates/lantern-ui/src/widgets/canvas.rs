use lantern_gfx::coords::Bounds;
use lantern_gfx::paint::Color;
use lantern_gfx::resources::{MeshId, ShaderId};

use crate::painter::Painter;

/// A flat-colored rectangle; the basic container and backdrop widget.
pub struct Canvas {
    shader: ShaderId,
    mesh: MeshId,
    pub color: Color,
}

impl Canvas {
    pub fn new(shader: ShaderId, mesh: MeshId, color: Color) -> Self {
        Self { shader, mesh, color }
    }

    pub(crate) fn draw(&self, abs: Bounds, painter: &mut Painter) {
        painter.fill_bounds(self.shader, self.mesh, abs, self.color);
    }
}
