//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no wall-clock time
//! - No rendering, scheduling or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BrickContact, Rect, WallHits, brick_contact, paddle_catches, wall_hits};
pub use state::{Ball, Brick, BrickGrid, GamePhase, GameState, Paddle};
pub use tick::{GameEvent, TickInput, TickReport, tick};
