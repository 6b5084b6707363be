//! Easing helpers that split one scale value into sequential phases.

use std::f32::consts::PI;

/// Portion of `scale` left after the first `i` of `n` phases.
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Progress (0.0-1.0) of phase `i` out of `n` equal phases.
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let n_f = n as f32;
    (1.0 / n_f).min(max_scale(scale, i, n)) * n_f
}

/// Map 0..1 onto a half sine wave: 0 at both ends, 1 in the middle.
pub fn sinify(scale: f32) -> f32 {
    (scale * PI).sin()
}
