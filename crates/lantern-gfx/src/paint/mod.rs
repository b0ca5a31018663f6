//! Color values pushed into draw commands.

mod color;

pub use color::Color;
