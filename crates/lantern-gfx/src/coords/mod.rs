//! Coordinate and geometry types shared between the UI layer and renderers.
//!
//! Two spaces exist side by side:
//! - Normalized: [`Bounds`], the unit square [0,1]×[0,1], origin top-left.
//!   UI elements store their rectangles here, relative to their parent.
//! - Pixels: [`Vec2`] / [`Rect`], origin top-left, +X right, +Y down.
//!   Draw commands and scissor rects use this space.
//!
//! [`Viewport`] carries the pixel size used to convert between the two.

mod bounds;
mod rect;
mod vec2;
mod viewport;

pub use bounds::Bounds;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
