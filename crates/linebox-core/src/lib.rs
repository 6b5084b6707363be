//! Core animation types for linebox.
//!
//! Everything here is independent of the terminal: the per-node scale
//! state, the chain of nodes it walks back and forth over, the tick timer
//! that drives it and the layout of a node at a given scale.

mod animator;
mod chain;
mod geometry;
mod renderer;
pub mod scale;
mod settings;
mod state;

pub use animator::Animator;
pub use chain::{LineInABox, Node};
pub use geometry::{NodeGeometry, Segment};
pub use renderer::Renderer;
pub use settings::Settings;
pub use state::State;
