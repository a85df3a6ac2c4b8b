//! Drawing surface abstraction
//!
//! The operations a 2D canvas offers, in playfield coordinates (origin
//! top-left, y down).

use glam::Vec2;

use crate::sim::Rect;

/// Fill and stroke for a shape. A missing style is not painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeStyle<'a> {
    pub fill: Option<&'a str>,
    pub stroke: Option<&'a str>,
}

impl<'a> ShapeStyle<'a> {
    pub fn filled(fill: &'a str) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
        }
    }

    pub fn stroked(stroke: &'a str) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    /// Neither fill nor stroke
    pub fn is_invisible(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}

/// Horizontal anchoring of text at its draw position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// CSS `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Something the scene can be painted onto
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase a region
    fn clear(&mut self, region: Rect);
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &str);
    fn draw_rect(&mut self, rect: Rect, style: ShapeStyle<'_>);
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle<'_>);
    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, font: &str, fill: &str);

    /// The whole surface as a rectangle
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}
