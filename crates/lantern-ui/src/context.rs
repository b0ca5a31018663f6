use lantern_gfx::resources::{MeshId, ShaderId};
use lantern_gfx::text::FontId;

/// The default drawing resources injected into widgets that paint.
///
/// Immutable after construction; the handles point at application-owned
/// resources, so copying the bundle around is free.
#[derive(Debug, Copy, Clone)]
pub struct Context {
    pub shader: ShaderId,
    pub font: FontId,
    pub mesh: MeshId,
}

impl Context {
    pub fn new(shader: ShaderId, font: FontId, mesh: MeshId) -> Self {
        Self { shader, font, mesh }
    }
}
