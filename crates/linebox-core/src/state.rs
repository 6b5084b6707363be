//! Scale state of a single node.

/// Animation progress of one node.
///
/// A node rests at either 0 or 1. Starting it moves the scale towards the
/// opposite end; the step completes once it has travelled a full unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// Current progress.
    pub scale: f32,
    /// Direction of travel: 1 forward, -1 backward, 0 idle.
    pub dir: f32,
    /// Resting value the current step started from.
    pub prev_scale: f32,
}

impl State {
    /// Create an idle state at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of `gap`. Returns `true` when the step completes.
    pub fn update(&mut self, gap: f32) -> bool {
        self.scale += self.dir * gap;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return true;
        }
        false
    }

    /// Begin a step away from the current resting value.
    ///
    /// Ignored while a step is already running; returns whether it started.
    pub fn start_updating(&mut self) -> bool {
        if self.dir == 0.0 {
            self.dir = 1.0 - 2.0 * self.prev_scale;
            return true;
        }
        false
    }
}
