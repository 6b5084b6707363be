//! Tunable animation parameters.

use std::time::Duration;

/// Parameters shared by the state machine and the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Interval between animation ticks.
    pub tick: Duration,
    /// Number of lines drawn inside each box.
    pub lines: usize,
    /// Number of nodes in the chain (one per palette color).
    pub nodes: usize,
    /// Box edge is the shorter surface side divided by this.
    pub size_factor: f32,
    /// Line length relative to the box edge.
    pub line_size_factor: f32,
    /// Vertical position of the box as a fraction of the surface height.
    pub box_y_factor: f32,
    /// Stroke width is the shorter surface side divided by this.
    pub stroke_factor: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(20),
            lines: 4,
            nodes: 5,
            size_factor: 3.4,
            line_size_factor: 0.7,
            box_y_factor: 0.2,
            stroke_factor: 90.0,
        }
    }
}

impl Settings {
    /// Number of easing phases: box rise, box slide, then one per line.
    pub fn parts(&self) -> usize {
        2 + self.lines
    }

    /// Scale increment applied on every tick.
    pub fn scale_gap(&self) -> f32 {
        0.02 / self.parts() as f32
    }
}
