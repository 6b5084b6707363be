//! Layout of a single node on a drawing surface.
//!
//! Coordinates are in abstract surface units with the origin at the top
//! left. The terminal renderer maps them onto character cells.

use crate::scale::{divide_scale, sinify};
use crate::settings::Settings;

/// Segments shorter than this on both axes are skipped.
const MIN_SEGMENT: f32 = 0.1;

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    /// Whether the segment is long enough to be drawn.
    pub fn is_visible(&self) -> bool {
        (self.x1 - self.x2).abs() >= MIN_SEGMENT || (self.y1 - self.y2).abs() >= MIN_SEGMENT
    }

    /// Distance from `(x, y)` to the closest point on the segment.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((x - self.x1) * dx + (y - self.y1) * dy) / len_sq).clamp(0.0, 1.0)
        };
        let px = self.x1 + t * dx;
        let py = self.y1 + t * dy;
        ((x - px).powi(2) + (y - py).powi(2)).sqrt()
    }
}

/// Everything needed to draw one node at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGeometry {
    /// Index of the node (selects the palette color).
    pub node: usize,
    /// Left edge of the box.
    pub box_x: f32,
    /// Top edge of the box.
    pub box_y: f32,
    /// Edge length of the (square) box.
    pub box_size: f32,
    /// Top of the filled part of the box, in surface coordinates.
    pub fill_top: f32,
    /// Height of the filled part; it grows upward from the bottom edge.
    pub fill_height: f32,
    /// Visible line strokes in surface coordinates.
    pub lines: Vec<Segment>,
    /// Stroke width of the lines. Caps are round.
    pub stroke_width: f32,
}

impl NodeGeometry {
    /// Lay out node `node` at `scale` on a `width` x `height` surface.
    pub fn compute(node: usize, scale: f32, width: f32, height: f32, settings: &Settings) -> Self {
        let parts = settings.parts();
        let min_side = width.min(height);
        let box_size = min_side / settings.size_factor;
        let line_size = box_size * settings.line_size_factor;

        let sf = sinify(scale);
        let sf1 = divide_scale(sf, 0, parts);
        let sf2 = divide_scale(sf, 1, parts);

        let offset = (box_size - line_size) / 2.0;
        let line_gap = box_size / (2 * settings.lines + 1) as f32;

        let box_x = (width - box_size) * sf2;
        let box_y = height * settings.box_y_factor;

        let lines = (0..settings.lines)
            .map(|j| {
                let sfj = divide_scale(sf, 2 + j, parts);
                let x1 = box_x + offset;
                let y = box_y + (2 * j + 1) as f32 * line_gap;
                Segment {
                    x1,
                    y1: y,
                    x2: x1 + line_size * sfj,
                    y2: y,
                }
            })
            .filter(Segment::is_visible)
            .collect();

        Self {
            node,
            box_x,
            box_y,
            box_size,
            fill_top: box_y + box_size * (1.0 - sf1),
            fill_height: box_size * sf1,
            lines,
            stroke_width: min_side / settings.stroke_factor,
        }
    }

    /// Whether `(x, y)` lies inside the filled part of the box.
    pub fn in_fill(&self, x: f32, y: f32) -> bool {
        self.fill_height > 0.0
            && x >= self.box_x
            && x < self.box_x + self.box_size
            && y >= self.fill_top
            && y < self.fill_top + self.fill_height
    }

    /// Whether `(x, y)` is covered by one of the line strokes.
    pub fn on_line(&self, x: f32, y: f32, tolerance: f32) -> bool {
        let reach = (self.stroke_width / 2.0).max(tolerance);
        self.lines.iter().any(|seg| seg.distance_to(x, y) <= reach)
    }
}
