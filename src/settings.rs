//! Game settings
//!
//! Everything tunable about a session: playfield, ball, paddle, brick grid,
//! lives, timing and colors. Loaded from JSON, validated before use.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a set of settings was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("paddle width {paddle} does not fit a playfield {playfield} wide")]
    PaddleTooWide { paddle: f32, playfield: f32 },
    #[error("brick grid needs at least one row and one column")]
    EmptyBrickGrid,
    #[error("brick grid spans {extent:?} but the playfield is {playfield:?}")]
    BrickGridOverflow { extent: Vec2, playfield: Vec2 },
    #[error("serve position lies outside the playfield")]
    ServeOutsidePlayfield,
    #[error("a session needs at least one life")]
    NoLives,
    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,
}

/// Ball size and serve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    /// Serve height above the bottom edge
    pub start_lift: f32,
    /// Velocity at serve (pixels per tick)
    pub start_velocity: Vec2,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            start_lift: BALL_START_LIFT,
            start_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    /// Distance moved per tick while a direction key is held
    pub nudge: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            nudge: PADDLE_NUDGE,
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickSettings {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    /// Gap between neighbouring bricks
    pub gap: f32,
    pub wall_gap_top: f32,
    pub wall_gap_left: f32,
}

impl Default for BrickSettings {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            gap: BRICK_GAP,
            wall_gap_top: BRICK_WALL_GAP_TOP,
            wall_gap_left: BRICK_WALL_GAP_LEFT,
        }
    }
}

impl BrickSettings {
    /// Bottom-right corner of the whole grid
    pub fn extent(&self) -> Vec2 {
        let cols = self.columns as f32;
        let rows = self.rows as f32;
        Vec2::new(
            self.wall_gap_left + cols * self.width + (cols - 1.0).max(0.0) * self.gap,
            self.wall_gap_top + rows * self.height + (rows - 1.0).max(0.0) * self.gap,
        )
    }
}

/// Fill styles and fonts handed to the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub ball_fill: String,
    pub paddle_fill: String,
    pub brick_fill: String,
    pub hud_fill: String,
    pub hud_font: String,
    pub banner_fill: String,
    pub banner_font: String,
    pub prompt_font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            ball_fill: "#959500".to_string(),
            paddle_fill: "#808080".to_string(),
            brick_fill: "#AA2222".to_string(),
            hud_fill: "black".to_string(),
            hud_font: "16px Helvetica".to_string(),
            banner_fill: "red".to_string(),
            banner_font: "40px Helvetica".to_string(),
            prompt_font: "12pt Helvetica".to_string(),
        }
    }
}

/// Complete session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub bricks: BrickSettings,
    pub starting_lives: u32,
    /// Clock period between ticks
    pub tick_period_ms: u32,
    /// Clock pause after a lost life (0 = resume immediately)
    pub life_lost_delay_ms: u32,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ball: BallSettings::default(),
            paddle: PaddleSettings::default(),
            bricks: BrickSettings::default(),
            starting_lives: STARTING_LIVES,
            tick_period_ms: TICK_PERIOD_MS,
            life_lost_delay_ms: LIFE_LOST_DELAY_MS,
            theme: Theme::default(),
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NonPositive { field, value })
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Same settings on a playfield of a different size
    pub fn with_playfield(mut self, width: f32, height: f32) -> Self {
        self.playfield_width = width;
        self.playfield_height = height;
        self
    }

    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.playfield_width, self.playfield_height)
    }

    /// Check that a session built from these settings keeps its invariants
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("ball.radius", self.ball.radius)?;
        positive("paddle.width", self.paddle.width)?;
        positive("paddle.height", self.paddle.height)?;
        positive("bricks.width", self.bricks.width)?;
        positive("bricks.height", self.bricks.height)?;
        if !(self.paddle.nudge.is_finite() && self.paddle.nudge >= 0.0) {
            return Err(SettingsError::NonPositive {
                field: "paddle.nudge",
                value: self.paddle.nudge,
            });
        }

        if self.paddle.width > self.playfield_width {
            return Err(SettingsError::PaddleTooWide {
                paddle: self.paddle.width,
                playfield: self.playfield_width,
            });
        }

        if self.bricks.rows == 0 || self.bricks.columns == 0 {
            return Err(SettingsError::EmptyBrickGrid);
        }
        let extent = self.bricks.extent();
        let playfield = self.playfield();
        if extent.x > playfield.x || extent.y > playfield.y {
            return Err(SettingsError::BrickGridOverflow { extent, playfield });
        }

        let radius = self.ball.radius;
        let serve_x = self.playfield_width / 2.0;
        let serve_y = self.playfield_height - self.ball.start_lift;
        let fits_x = serve_x >= radius && serve_x <= self.playfield_width - radius;
        let fits_y = serve_y >= radius && serve_y <= self.playfield_height - radius;
        if !(fits_x && fits_y && self.ball.start_velocity.is_finite()) {
            return Err(SettingsError::ServeOutsidePlayfield);
        }

        if self.starting_lives == 0 {
            return Err(SettingsError::NoLives);
        }
        if self.tick_period_ms == 0 {
            return Err(SettingsError::ZeroTickPeriod);
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_breakout_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_default_grid_fits() {
        let extent = BrickSettings::default().extent();
        // 30 + 5 * 75 + 4 * 10, 30 + 3 * 20 + 2 * 10
        assert_eq!(extent, Vec2::new(445.0, 110.0));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let settings = Settings::from_json(r#"{ "starting_lives": 5, "paddle": { "nudge": 3.0 } }"#)
            .expect("valid settings");
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.paddle.nudge, 3.0);
        assert_eq!(settings.paddle.width, PADDLE_WIDTH);
        assert_eq!(settings.bricks, BrickSettings::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_wide_paddle() {
        let mut settings = Settings::default();
        settings.paddle.width = 600.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_grid() {
        let mut settings = Settings::default();
        settings.bricks.columns = 6;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::BrickGridOverflow { .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let mut settings = Settings::default();
        settings.ball.radius = f32::NAN;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositive { field: "ball.radius", .. })
        ));

        let mut settings = Settings::default();
        settings.bricks.rows = 0;
        assert!(matches!(settings.validate(), Err(SettingsError::EmptyBrickGrid)));

        let mut settings = Settings::default();
        settings.starting_lives = 0;
        assert!(matches!(settings.validate(), Err(SettingsError::NoLives)));

        let mut settings = Settings::default();
        settings.tick_period_ms = 0;
        assert!(matches!(settings.validate(), Err(SettingsError::ZeroTickPeriod)));
    }

    #[test]
    fn test_with_playfield() {
        let settings = Settings::default().with_playfield(800.0, 600.0);
        assert_eq!(settings.playfield(), Vec2::new(800.0, 600.0));
        assert!(settings.validate().is_ok());

        let tiny = Settings::default().with_playfield(50.0, 50.0);
        assert!(tiny.validate().is_err());
    }
}
