//! Color helpers for the scene.

use ratatui::style::Color;

/// Convert an RGB triple to a terminal color.
pub(crate) fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Relative luminance (0.0-1.0) of an RGB triple.
pub(crate) fn luminance((r, g, b): (u8, u8, u8)) -> f32 {
    (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
}

/// Readable text color on top of `background`.
pub(crate) fn text_color_for(background: (u8, u8, u8)) -> Color {
    if luminance(background) > 0.5 {
        Color::Rgb(90, 90, 90)
    } else {
        Color::Rgb(200, 200, 200)
    }
}
