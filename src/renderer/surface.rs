//! Drawing surface abstraction

use glam::DVec2;

use super::frame::{Color, DrawCommand, TextAlign, TextBaseline};

/// Something a [`Frame`](super::Frame) can be drawn onto.
///
/// Coordinates are logical field units (origin top-left, y down); the surface
/// owns any device pixel scaling.
pub trait Surface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);

    fn fill_text(
        &mut self,
        text: &str,
        pos: DVec2,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    );
}

/// In-memory surface that records every call
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text runs drawn so far
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of circles drawn in `color`
    pub fn circle_count(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { color: fill, .. } if *fill == color))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: DVec2,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            align,
            baseline,
            color,
        });
    }
}
