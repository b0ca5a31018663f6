//! Renderer-agnostic draw command stream.
//!
//! Widgets record commands here during render; the application replays them
//! against its graphics API afterwards. Insertion order is paint order.

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd, TextCmd};
pub use list::{DrawItem, DrawList};
