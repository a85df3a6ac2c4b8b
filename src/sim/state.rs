//! Game state and core simulation types
//!
//! One `GameState` is the whole world of a session. It is built from
//! `Settings`, mutated in place every tick and rebuilt wholesale on restart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::{BallSettings, BrickSettings, PaddleSettings, Settings};

/// Current phase of the session. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Every brick has been hit
    Won,
    /// Lives exhausted
    Lost,
}

impl GamePhase {
    /// Won or lost: the simulation no longer advances
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its serve position for a playfield
    pub fn serve(settings: &BallSettings, playfield: Vec2) -> Self {
        Self {
            pos: Vec2::new(playfield.x / 2.0, playfield.y - settings.start_lift),
            vel: settings.start_velocity,
            radius: settings.radius,
        }
    }
}

/// The player's paddle, pinned to the bottom edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered on the bottom edge
    pub fn centered(settings: &PaddleSettings, playfield: Vec2) -> Self {
        Self {
            x: (playfield.x - settings.width) / 2.0,
            y: playfield.y - settings.height,
            width: settings.width,
            height: settings.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Largest allowed x for a playfield of the given width
    #[inline]
    pub fn max_x(&self, playfield_width: f32) -> f32 {
        (playfield_width - self.width).max(0.0)
    }

    /// Move to `x`, kept inside `[0, playfield_width - width]`
    pub fn set_x_clamped(&mut self, x: f32, playfield_width: f32) {
        self.x = x.clamp(0.0, self.max_x(playfield_width));
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Hit bricks are neither drawn nor collided with again
    pub hit: bool,
}

/// Fixed rows x columns layout of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a full grid of unhit bricks
    pub fn build(settings: &BrickSettings) -> Self {
        let mut bricks = Vec::with_capacity(settings.rows * settings.columns);
        for row in 0..settings.rows {
            for col in 0..settings.columns {
                let x = settings.wall_gap_left + col as f32 * (settings.width + settings.gap);
                let y = settings.wall_gap_top + row as f32 * (settings.height + settings.gap);
                bricks.push(Brick {
                    rect: Rect::new(x, y, settings.width, settings.height),
                    hit: false,
                });
            }
        }
        Self {
            rows: settings.rows,
            columns: settings.columns,
            bricks,
        }
    }

    /// Grid from explicit bricks, laid out as a single row
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self {
            rows: usize::from(!bricks.is_empty()),
            columns: bricks.len(),
            bricks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of bricks
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.bricks.get(row * self.columns + col)
    }

    /// Grid position of a row-major index
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.columns.max(1), index % self.columns.max(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub(crate) fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    /// Bricks still in play
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.hit).count()
    }

    pub fn all_hit(&self) -> bool {
        self.bricks.iter().all(|b| b.hit)
    }

    /// Mark every brick unhit again
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.hit = false;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Bricks hit so far
    pub score: u32,
    pub lives: u32,
    /// Lives at session start
    pub starting_lives: u32,
    /// Ticks simulated since the session (re)started
    pub ticks: u64,
    pub playfield: Vec2,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Distance the paddle moves per tick while a key is held
    pub paddle_nudge: f32,
    ball_settings: BallSettings,
    paddle_settings: PaddleSettings,
}

impl GameState {
    /// Fresh session from (already validated) settings
    pub fn new(settings: &Settings) -> Self {
        let playfield = settings.playfield();
        Self {
            phase: GamePhase::Playing,
            score: 0,
            lives: settings.starting_lives,
            starting_lives: settings.starting_lives,
            ticks: 0,
            playfield,
            ball: Ball::serve(&settings.ball, playfield),
            paddle: Paddle::centered(&settings.paddle, playfield),
            bricks: BrickGrid::build(&settings.bricks),
            paddle_nudge: settings.paddle.nudge,
            ball_settings: settings.ball.clone(),
            paddle_settings: settings.paddle.clone(),
        }
    }

    /// Ball back to its serve position and velocity, paddle centered
    pub fn reset_ball_and_paddle(&mut self) {
        self.ball = Ball::serve(&self.ball_settings, self.playfield);
        self.paddle = Paddle::centered(&self.paddle_settings, self.playfield);
    }

    /// Start the session over: full lives, zero score, every brick back
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = self.starting_lives;
        self.ticks = 0;
        self.bricks.reset();
        self.reset_ball_and_paddle();
        log::info!("Session restarted ({} bricks, {} lives)", self.bricks.len(), self.lives);
    }

    /// Center the paddle on a pointer position
    ///
    /// Out-of-range positions are clamped; non-finite ones are ignored.
    pub fn track_pointer(&mut self, pointer_x: f32) {
        if self.phase.is_terminal() || !pointer_x.is_finite() {
            return;
        }
        let x = pointer_x - self.paddle.width / 2.0;
        self.paddle.set_x_clamped(x, self.playfield.x);
    }

    /// Total bricks in the grid
    pub fn brick_count(&self) -> u32 {
        self.bricks.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Settings::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 202.5);
        assert_eq!(state.paddle.y, 315.0);
        assert_eq!(state.brick_count(), 15);
    }

    #[test]
    fn test_grid_layout() {
        let grid = BrickGrid::build(&BrickSettings::default());
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 5);

        let first = grid.get(0, 0).expect("brick");
        assert_eq!(first.rect, Rect::new(30.0, 30.0, 75.0, 20.0));

        let last = grid.get(2, 4).expect("brick");
        assert_eq!(last.rect, Rect::new(370.0, 90.0, 75.0, 20.0));

        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 5).is_none());
        assert_eq!(grid.position_of(7), (1, 2));
    }

    #[test]
    fn test_grid_reset() {
        let mut grid = BrickGrid::build(&BrickSettings::default());
        for brick in grid.bricks_mut() {
            brick.hit = true;
        }
        assert!(grid.all_hit());
        assert_eq!(grid.remaining(), 0);

        grid.reset();
        assert_eq!(grid.remaining(), 15);
        assert!(!grid.all_hit());
    }

    #[test]
    fn test_track_pointer_clamps() {
        let mut state = GameState::new(&Settings::default());

        state.track_pointer(100.0);
        assert_eq!(state.paddle.x, 62.5);

        state.track_pointer(-50.0);
        assert_eq!(state.paddle.x, 0.0);

        state.track_pointer(10_000.0);
        assert_eq!(state.paddle.x, 405.0);

        state.track_pointer(f32::NAN);
        assert_eq!(state.paddle.x, 405.0);
    }

    #[test]
    fn test_track_pointer_ignored_when_terminal() {
        let mut state = GameState::new(&Settings::default());
        state.phase = GamePhase::Lost;
        let before = state.paddle.x;
        state.track_pointer(0.0);
        assert_eq!(state.paddle.x, before);
    }

    #[test]
    fn test_restart() {
        let mut state = GameState::new(&Settings::default());
        state.score = 7;
        state.lives = 0;
        state.phase = GamePhase::Lost;
        state.ticks = 900;
        state.ball.pos = Vec2::new(5.0, 5.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);
        state.paddle.x = 0.0;
        for brick in state.bricks.bricks_mut().iter_mut().take(7) {
            brick.hit = true;
        }

        state.restart();
        assert_eq!(state, GameState::new(&Settings::default()));
    }
}
