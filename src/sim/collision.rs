//! Collision tests for the rectangular playfield
//!
//! Everything here is an axis-aligned comparison. The brick test in
//! particular checks each axis separately rather than doing true
//! circle-box intersection, so a ball approaching a corner diagonally can
//! slip past or register on either face.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive horizontal span test
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }

    /// Inclusive vertical span test
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.y && y <= self.bottom()
    }
}

/// Which playfield edges the ball's next position would touch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    /// Left or right wall
    pub side: bool,
    pub top: bool,
    /// Bottom edge (paddle line). Never set together with `top`.
    pub bottom: bool,
}

/// Test the ball's next position `pos + vel` against the playfield walls
///
/// The top wall wins over the bottom edge when a playfield is too short for
/// both to be distinct.
pub fn wall_hits(pos: Vec2, vel: Vec2, radius: f32, playfield: Vec2) -> WallHits {
    let next = pos + vel;
    let side = next.x > playfield.x - radius || next.x < radius;
    let top = next.y < radius;
    let bottom = !top && next.y > playfield.y - radius;
    WallHits { side, top, bottom }
}

/// Whether a ball reaching the bottom edge at `ball_x` lands on the paddle
#[inline]
pub fn paddle_catches(ball_x: f32, paddle: &Rect) -> bool {
    paddle.spans_x(ball_x)
}

/// Face of a brick the ball is touching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickContact {
    /// Top or bottom face - reflects vertical velocity
    Vertical,
    /// Left or right face - reflects horizontal velocity
    Horizontal,
}

/// Axis-separated ball/brick overlap test
///
/// A vertical contact needs the ball center inside the brick's horizontal
/// span with its top or bottom extreme inside the brick's height. A
/// horizontal contact is the same with the axes swapped. When both hold the
/// vertical contact is reported.
pub fn brick_contact(pos: Vec2, radius: f32, brick: &Rect) -> Option<BrickContact> {
    let lower = pos.y + radius;
    let upper = pos.y - radius;
    let from_top = lower >= brick.y && lower < brick.bottom();
    let from_bottom = upper > brick.y && upper <= brick.bottom();
    if brick.spans_x(pos.x) && (from_top || from_bottom) {
        return Some(BrickContact::Vertical);
    }

    let leading = pos.x + radius;
    let trailing = pos.x - radius;
    let from_left = leading >= brick.x && leading < brick.right();
    let from_right = trailing > brick.x && trailing <= brick.right();
    if brick.spans_y(pos.y) && (from_left || from_right) {
        return Some(BrickContact::Horizontal);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Vec2 = Vec2::new(480.0, 320.0);

    #[test]
    fn test_no_wall_hits_mid_field() {
        let hits = wall_hits(Vec2::new(240.0, 160.0), Vec2::new(2.0, -2.0), 10.0, FIELD);
        assert_eq!(hits, WallHits::default());
    }

    #[test]
    fn test_side_walls() {
        let right = wall_hits(Vec2::new(469.0, 160.0), Vec2::new(2.0, 2.0), 10.0, FIELD);
        assert!(right.side);
        let left = wall_hits(Vec2::new(11.0, 160.0), Vec2::new(-2.0, 2.0), 10.0, FIELD);
        assert!(left.side);
        // Exactly touching is not yet a hit
        let edge = wall_hits(Vec2::new(468.0, 160.0), Vec2::new(2.0, 2.0), 10.0, FIELD);
        assert!(!edge.side);
    }

    #[test]
    fn test_top_and_bottom_exclusive() {
        let top = wall_hits(Vec2::new(100.0, 11.0), Vec2::new(2.0, -2.0), 10.0, FIELD);
        assert!(top.top && !top.bottom);

        let bottom = wall_hits(Vec2::new(100.0, 309.0), Vec2::new(2.0, 2.0), 10.0, FIELD);
        assert!(bottom.bottom && !bottom.top);

        // A playfield shorter than the ball: only the top registers
        let squashed = wall_hits(Vec2::new(100.0, 5.0), Vec2::ZERO, 10.0, Vec2::new(480.0, 12.0));
        assert!(squashed.top && !squashed.bottom);
    }

    #[test]
    fn test_corner_hits_both_axes() {
        let hits = wall_hits(Vec2::new(469.0, 11.0), Vec2::new(2.0, -2.0), 10.0, FIELD);
        assert!(hits.side && hits.top);
    }

    #[test]
    fn test_paddle_span_inclusive() {
        let paddle = Rect::new(50.0, 315.0, 75.0, 5.0);
        assert!(paddle_catches(50.0, &paddle));
        assert!(paddle_catches(125.0, &paddle));
        assert!(paddle_catches(100.0, &paddle));
        assert!(!paddle_catches(49.9, &paddle));
        assert!(!paddle_catches(125.1, &paddle));
    }

    #[test]
    fn test_brick_hit_from_above() {
        let brick = Rect::new(30.0, 30.0, 75.0, 20.0);
        let contact = brick_contact(Vec2::new(60.0, 20.0), 10.0, &brick);
        assert_eq!(contact, Some(BrickContact::Vertical));
    }

    #[test]
    fn test_brick_hit_from_below() {
        let brick = Rect::new(30.0, 30.0, 75.0, 20.0);
        let contact = brick_contact(Vec2::new(60.0, 59.0), 10.0, &brick);
        assert_eq!(contact, Some(BrickContact::Vertical));
        // Bottom face is inclusive, top of the brick exclusive
        assert_eq!(
            brick_contact(Vec2::new(60.0, 60.0), 10.0, &brick),
            Some(BrickContact::Vertical)
        );
        assert_eq!(brick_contact(Vec2::new(60.0, 60.5), 10.0, &brick), None);
    }

    #[test]
    fn test_brick_hit_from_side() {
        let brick = Rect::new(30.0, 30.0, 75.0, 20.0);
        let left = brick_contact(Vec2::new(21.0, 40.0), 10.0, &brick);
        assert_eq!(left, Some(BrickContact::Horizontal));
        let right = brick_contact(Vec2::new(114.0, 40.0), 10.0, &brick);
        assert_eq!(right, Some(BrickContact::Horizontal));
    }

    #[test]
    fn test_vertical_wins_tie() {
        // Center inside the brick satisfies both axis tests
        let brick = Rect::new(30.0, 30.0, 75.0, 20.0);
        let contact = brick_contact(Vec2::new(35.0, 35.0), 10.0, &brick);
        assert_eq!(contact, Some(BrickContact::Vertical));
    }

    #[test]
    fn test_diagonal_corner_miss() {
        // Ball overlaps the corner region but neither center coordinate is
        // inside the brick's span, so the axis-separated test misses it
        let brick = Rect::new(30.0, 30.0, 75.0, 20.0);
        assert_eq!(brick_contact(Vec2::new(25.0, 25.0), 10.0, &brick), None);
    }
}
