//! Terminal drawing for linebox.
//!
//! Rasterises the current node's layout onto the frame using half-block
//! characters, so every cell carries two vertically stacked pixels.

mod color;
mod scene;

pub use scene::{Pixel, Scene};
