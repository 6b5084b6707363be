//! Scene rendering: background, the current node's box and its lines.

use linebox_core::{NodeGeometry, Renderer};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::color::{rgb, text_color_for};

/// Half-block glyph: foreground paints the upper pixel, background the lower.
const UPPER_HALF: &str = "▀";

/// How far (in column widths) from a stroke a pixel center may lie and
/// still be painted.
const STROKE_TOLERANCE: f32 = 0.5;

/// What a single pixel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Background,
    Fill,
    Stroke,
}

/// Colors and cell metrics used to draw the animation.
#[derive(Debug, Clone)]
pub struct Scene {
    palette: Vec<Color>,
    background: Color,
    text: Color,
    /// Height of a terminal cell relative to its width.
    cell_aspect: f32,
}

impl Scene {
    pub fn new(palette: &[(u8, u8, u8)], background: (u8, u8, u8), cell_aspect: f32) -> Self {
        Self {
            palette: palette.iter().copied().map(rgb).collect(),
            background: rgb(background),
            text: text_color_for(background),
            cell_aspect,
        }
    }

    /// Surface size in column widths for a cell area of `width` x `height`.
    pub fn surface_size(&self, width: u16, height: u16) -> (f32, f32) {
        (width as f32, height as f32 * self.cell_aspect)
    }

    /// Classify pixel `(x, py)`, where `py` counts half-cells from the top.
    pub fn sample(&self, geo: &NodeGeometry, x: u16, py: u16) -> Pixel {
        let sx = x as f32 + 0.5;
        let sy = (py as f32 + 0.5) * self.cell_aspect / 2.0;
        if geo.on_line(sx, sy, STROKE_TOLERANCE) {
            Pixel::Stroke
        } else if geo.in_fill(sx, sy) {
            Pixel::Fill
        } else {
            Pixel::Background
        }
    }

    /// Palette color of `node`.
    pub fn node_color(&self, node: usize) -> Color {
        if self.palette.is_empty() {
            return self.background;
        }
        self.palette[node % self.palette.len()]
    }

    fn pixel_color(&self, pixel: Pixel, node: usize) -> Color {
        match pixel {
            // Lines are stroked in the background color
            Pixel::Background | Pixel::Stroke => self.background,
            Pixel::Fill => self.node_color(node),
        }
    }

    /// Rasterise `geo` into `height` lines of `width` half-block cells.
    pub fn lines(&self, geo: &NodeGeometry, width: u16, height: u16) -> Vec<Line<'static>> {
        (0..height)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let top = self.sample(geo, x, y * 2);
                        let bottom = self.sample(geo, x, y * 2 + 1);
                        Span::styled(
                            UPPER_HALF,
                            Style::new()
                                .fg(self.pixel_color(top, geo.node))
                                .bg(self.pixel_color(bottom, geo.node)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Draw the animation and the help footer into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, renderer: &Renderer) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Animation
            Constraint::Length(1), // Help text
        ])
        .split(area);
        let canvas = chunks[0];

        let (width, height) = self.surface_size(canvas.width, canvas.height);
        let geo = renderer.geometry(width, height);
        let lines = self.lines(&geo, canvas.width, canvas.height);
        frame.render_widget(Paragraph::new(lines), canvas);

        let chain = renderer.chain();
        let accent = self.node_color(chain.current().index);
        let help = Line::from(vec![
            "click/space".bold().fg(accent),
            " advance  ".fg(self.text),
            "q".bold().fg(accent),
            " quit  ".fg(self.text),
            format!("box {}/{}", chain.current().index + 1, chain.len()).fg(self.text),
        ])
        .centered()
        .style(Style::new().bg(self.background));
        frame.render_widget(help, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use linebox_core::Settings;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    const BACK: (u8, u8, u8) = (0xec, 0xf0, 0xf1);
    const PALETTE: [(u8, u8, u8); 2] = [(0x1a, 0xbc, 0x9c), (0xc0, 0x39, 0x2b)];

    fn scene() -> Scene {
        Scene::new(&PALETTE, BACK, 2.0)
    }

    /// Renderer whose first node has been animated to the midpoint.
    fn renderer_at_midpoint() -> Renderer {
        let settings = Settings {
            nodes: PALETTE.len(),
            ..Settings::default()
        };
        let tick = settings.tick;
        let mut renderer = Renderer::new(settings);
        let start = Instant::now();
        renderer.handle_tap(start);
        // 150 ticks of 0.02 / 6 reaches scale 0.5
        for i in 1..=150 {
            renderer.tick(start + tick * i);
        }
        renderer
    }

    #[test]
    fn test_idle_scene_is_plain_background() {
        let scene = scene();
        let geo = NodeGeometry::compute(0, 0.0, 40.0, 40.0, &Settings::default());
        for py in 0..40 {
            for x in 0..40 {
                assert_eq!(scene.sample(&geo, x, py), Pixel::Background);
            }
        }
    }

    #[test]
    fn test_midpoint_has_fill_and_strokes() {
        let scene = scene();
        let geo = NodeGeometry::compute(0, 0.5, 100.0, 80.0, &Settings::default());
        let pixels: Vec<Pixel> = (0..80)
            .flat_map(|py| (0..100).map(move |x| (x, py)))
            .map(|(x, py)| scene.sample(&geo, x, py))
            .collect();
        assert!(pixels.contains(&Pixel::Fill));
        assert!(pixels.contains(&Pixel::Stroke));

        // Box sits against the right edge at the midpoint
        let row = (geo.box_y + geo.box_size - 1.0) as u16;
        assert_eq!(scene.sample(&geo, 99, row), Pixel::Fill);
        assert_eq!(scene.sample(&geo, 0, row), Pixel::Background);
    }

    #[test]
    fn test_node_color_wraps_palette() {
        let scene = scene();
        assert_eq!(scene.node_color(0), Color::Rgb(0x1a, 0xbc, 0x9c));
        assert_eq!(scene.node_color(3), Color::Rgb(0xc0, 0x39, 0x2b));
    }

    #[test]
    fn test_render_to_test_backend() {
        let scene = scene();
        let renderer = renderer_at_midpoint();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| scene.render(frame, frame.area(), &renderer))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let fill = Color::Rgb(0x1a, 0xbc, 0x9c);
        let filled = (0..19u16)
            .flat_map(|y| (0..60u16).map(move |x| (x, y)))
            .filter(|&(x, y)| buffer[(x, y)].bg == fill || buffer[(x, y)].fg == fill)
            .count();
        assert!(filled > 0);
        assert_eq!(buffer[(0u16, 0u16)].bg, Color::Rgb(BACK.0, BACK.1, BACK.2));

        let footer: String = (0..60u16).map(|x| buffer[(x, 19u16)].symbol()).collect();
        assert!(footer.contains("box 1/2"));
    }
}
