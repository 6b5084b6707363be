//! Glue between user input, the tick timer and the node chain.

use std::time::Instant;

use tracing::debug;

use crate::animator::Animator;
use crate::chain::LineInABox;
use crate::geometry::NodeGeometry;
use crate::settings::Settings;

/// Owns the chain and its timer and answers what to draw.
#[derive(Debug, Clone)]
pub struct Renderer {
    chain: LineInABox,
    animator: Animator,
    settings: Settings,
}

impl Renderer {
    /// Create a renderer with a fresh chain sized from `settings`.
    pub fn new(settings: Settings) -> Self {
        Self {
            chain: LineInABox::new(settings.nodes),
            animator: Animator::new(settings.tick),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn chain(&self) -> &LineInABox {
        &self.chain
    }

    /// Is a step currently running?
    pub fn is_animating(&self) -> bool {
        self.animator.is_animated()
    }

    /// React to a click: start the current node and arm the timer.
    ///
    /// Returns `false` if a step is already running.
    pub fn handle_tap(&mut self, now: Instant) -> bool {
        if !self.chain.start_updating() {
            return false;
        }
        debug!(node = self.chain.current().index, "tap started node");
        self.animator.start(now);
        true
    }

    /// Apply every tick due by `now`. Returns whether the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let ticks = self.animator.take_ticks(now);
        let gap = self.settings.scale_gap();
        for _ in 0..ticks {
            if self.chain.update(gap) {
                self.animator.stop();
                break;
            }
        }
        ticks > 0
    }

    /// How long the caller may wait for input before calling [`Renderer::tick`].
    pub fn poll_timeout(&self, now: Instant) -> std::time::Duration {
        self.animator.poll_timeout(now)
    }

    /// Layout of the current node on a `width` x `height` surface.
    pub fn geometry(&self, width: f32, height: f32) -> NodeGeometry {
        let node = self.chain.current();
        NodeGeometry::compute(node.index, node.state.scale, width, height, &self.settings)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
