use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::resources::{MeshId, ShaderId};
use crate::text::FontId;

/// Flat-colored rectangle drawn with an application shader and mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub shader: ShaderId,
    pub mesh: MeshId,
    /// Pixel-space rectangle.
    pub rect: Rect,
    pub color: Color,
}

/// Single text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub font: FontId,
    /// Top-left corner of the measured text box, pixels.
    pub origin: Vec2,
    pub text: String,
    pub color: Color,
}

/// One recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Text(TextCmd),
}
