//! Surface that records draw calls instead of painting

use glam::Vec2;

use super::surface::{ShapeStyle, Surface, TextAlign};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Line {
        from: Vec2,
        to: Vec2,
        stroke: String,
    },
    Rect {
        rect: Rect,
        fill: Option<String>,
        stroke: Option<String>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<String>,
        stroke: Option<String>,
    },
    Text {
        text: String,
        pos: Vec2,
        align: TextAlign,
        font: String,
        fill: String,
    },
}

/// Headless surface for tests and the native runner
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Text of every text command, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, region: Rect) {
        // Earlier commands inside a full clear can no longer be seen
        if region == self.bounds() {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear(region));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &str) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.to_string(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, style: ShapeStyle<'_>) {
        if style.is_invisible() {
            return;
        }
        self.commands.push(DrawCommand::Rect {
            rect,
            fill: style.fill.map(str::to_string),
            stroke: style.stroke.map(str::to_string),
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle<'_>) {
        if style.is_invisible() {
            return;
        }
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: style.fill.map(str::to_string),
            stroke: style.stroke.map(str::to_string),
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, font: &str, fill: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            align,
            font: font.to_string(),
            fill: fill.to_string(),
        });
    }
}
