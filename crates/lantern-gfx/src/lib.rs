//! Lantern drawing seam — geometry, colors, resource handles, and the
//! renderer-agnostic draw list consumed by an application renderer.
//!
//! This crate deliberately contains no GPU or windowing code. The UI layer
//! (`lantern-ui`) records [`scene::DrawCmd`]s into a [`scene::DrawList`]; the
//! embedding application walks the list once per frame and translates each
//! command into its own API calls:
//!
//! - `Rect` — bind the shader and mesh named by the handles, set the color and
//!   transform uniforms from the pixel rect, draw.
//! - `Text` — draw the string with the font slot named by [`text::FontId`],
//!   top-left anchored at `origin`.
//! - `clip` — scissor region in pixels, already intersected with any parent.
//!
//! Text *measurement* lives here (fontdue-backed [`text::FontSystem`]) because
//! layout needs it; rasterization stays on the renderer side.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod resources;
pub mod scene;
pub mod text;
