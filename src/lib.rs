//! Canvas Breakout - a paddle-and-ball brick breaker
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (ball, paddle, bricks, lives)
//! - `input`: Key mapping and held-direction controls
//! - `clock`: Tick scheduling abstraction
//! - `session`: The owned game world and its event handlers
//! - `renderer`: Drawing-surface trait and scene painter
//! - `platform`: Browser front-end
//! - `settings`: Data-driven game configuration

pub mod clock;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use clock::{Clock, ManualClock};
pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration defaults
pub mod consts {
    /// Tick period of the simulation clock (milliseconds)
    pub const TICK_PERIOD_MS: u32 = 10;
    /// Pause before play resumes after a lost life (milliseconds)
    pub const LIFE_LOST_DELAY_MS: u32 = 1000;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve position is this far above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;
    pub const BALL_START_VX: f32 = 2.0;
    pub const BALL_START_VY: f32 = -2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 5.0;
    /// Distance moved per tick while a direction key is held
    pub const PADDLE_NUDGE: f32 = 7.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 10.0;
    pub const BRICK_WALL_GAP_TOP: f32 = 30.0;
    pub const BRICK_WALL_GAP_LEFT: f32 = 30.0;

    pub const STARTING_LIVES: u32 = 3;
}
