//! A running game session
//!
//! `Session` is the single owner of everything that changes while the game
//! runs: the game state, the held-key flags and the clock. Front-ends feed it
//! input events and clock ticks; all mutation happens through it.

use crate::clock::{Clock, ManualClock};
use crate::input::{Controls, Key};
use crate::renderer::{Surface, draw_scene};
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameState, TickReport, autopilot, tick};

pub struct Session<C: Clock> {
    settings: Settings,
    state: GameState,
    controls: Controls,
    clock: C,
}

impl<C: Clock> Session<C> {
    /// Validate the settings and build a fresh session. The clock is not
    /// started until `start`.
    pub fn new(settings: Settings, clock: C) -> Result<Self, SettingsError> {
        settings.validate()?;
        let state = GameState::new(&settings);
        log::info!(
            "Session created: {}x{} playfield, {} bricks, {} lives",
            settings.playfield_width,
            settings.playfield_height,
            state.brick_count(),
            state.lives
        );
        Ok(Self {
            settings,
            state,
            controls: Controls::default(),
            clock,
        })
    }

    /// Start ticking at the configured period
    pub fn start(&mut self) {
        self.clock.start(self.settings.tick_period_ms);
    }

    pub fn key_down(&mut self, key: Key) {
        self.controls.press(key);
    }

    /// Key releases; Enter restarts a finished game
    pub fn key_up(&mut self, key: Key) {
        self.controls.release(key);
        if key == Key::Restart && self.state.phase.is_terminal() {
            self.state.restart();
            self.clock.start(self.settings.tick_period_ms);
        }
    }

    /// Pointer moved to `x` in surface coordinates
    pub fn pointer_moved(&mut self, x: f32) {
        self.state.track_pointer(x);
    }

    /// Run one simulation step and adjust the clock to its outcome
    pub fn tick(&mut self) -> TickReport {
        if self.controls.demo {
            let target = autopilot::pointer_target(&self.state);
            self.state.track_pointer(target);
        }

        let report = tick(&mut self.state, &self.controls.tick_input());

        if report.is_terminal() {
            self.clock.stop();
        } else if report.life_lost() {
            self.clock.stop();
            self.clock
                .start_after(self.settings.life_lost_delay_ms, self.settings.tick_period_ms);
        }
        report
    }

    /// Paint the current frame
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_scene(surface, &self.state, &self.settings.theme);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl Session<ManualClock> {
    /// Let `elapsed_ms` pass and run the ticks that fall due
    ///
    /// Stops early when a tick changes the clock (life lost, game over).
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<TickReport> {
        let due = self.clock.advance(elapsed_ms);
        let mut reports = Vec::with_capacity(due as usize);
        for _ in 0..due {
            let report = self.tick();
            let rescheduled = report.is_terminal() || report.life_lost();
            reports.push(report);
            if rescheduled {
                break;
            }
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::renderer::scene::{LOST_BANNER, RESTART_PROMPT};
    use crate::sim::{GameEvent, GamePhase};
    use glam::Vec2;

    fn session() -> Session<ManualClock> {
        let mut session = Session::new(Settings::default(), ManualClock::new())
            .expect("default settings are valid");
        session.start();
        session
    }

    /// Put the ball one step above the bottom edge, away from the paddle
    fn drop_ball(session: &mut Session<ManualClock>) {
        session.pointer_moved(400.0);
        session.state.ball.pos = Vec2::new(100.0, 309.0);
        session.state.ball.vel = Vec2::new(2.0, 2.0);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.starting_lives = 0;
        let result = Session::new(settings, ManualClock::new());
        assert!(matches!(result, Err(SettingsError::NoLives)));
    }

    #[test]
    fn test_start_runs_clock() {
        let mut session = session();
        assert!(session.clock().is_running());
        assert_eq!(session.clock().period_ms(), 10);

        let reports = session.advance(30);
        assert_eq!(reports.len(), 3);
        assert_eq!(session.state().ticks, 3);
    }

    #[test]
    fn test_keys_move_paddle() {
        let mut session = session();
        let start = session.state().paddle.x;

        session.key_down(Key::Right);
        session.advance(20);
        assert_eq!(session.state().paddle.x, start + 14.0);

        session.key_up(Key::Right);
        session.advance(20);
        assert_eq!(session.state().paddle.x, start + 14.0);
    }

    #[test]
    fn test_pointer_moves_paddle_immediately() {
        let mut session = session();
        session.pointer_moved(100.0);
        assert_eq!(session.state().paddle.x, 62.5);
    }

    #[test]
    fn test_life_lost_delays_clock() {
        let mut session = session();
        drop_ball(&mut session);

        let reports = session.advance(50);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains(&GameEvent::LifeLost { lives_left: 2 }));
        assert!(session.clock().is_running());
        assert_eq!(session.clock().pending_delay_ms(), 1000);

        // Nothing moves while the delay runs
        let ticks = session.state().ticks;
        assert!(session.advance(990).is_empty());
        assert_eq!(session.state().ticks, ticks);

        assert_eq!(session.advance(20).len(), 1);
    }

    #[test]
    fn test_game_over_stops_clock_and_enter_restarts() {
        let mut session = session();
        for _ in 0..3 {
            drop_ball(&mut session);
            session.tick();
        }
        assert_eq!(session.state().phase, GamePhase::Lost);
        assert!(!session.clock().is_running());
        assert!(session.advance(1000).is_empty());

        let mut surface = RecordingSurface::new(480.0, 320.0);
        session.render(&mut surface);
        assert!(surface.texts().contains(&LOST_BANNER));
        assert!(surface.texts().contains(&RESTART_PROMPT));

        session.key_down(Key::Restart);
        assert_eq!(session.state().phase, GamePhase::Lost);
        session.key_up(Key::Restart);

        assert_eq!(*session.state(), GameState::new(&Settings::default()));
        assert!(session.clock().is_running());
        assert_eq!(session.clock().pending_delay_ms(), 0);
    }

    #[test]
    fn test_enter_ignored_mid_game() {
        let mut session = session();
        session.advance(100);
        let before = session.state().clone();
        session.key_up(Key::Restart);
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_demo_mode_steers() {
        let mut session = session();
        session.key_up(Key::Demo);
        assert!(session.controls().demo);

        for _ in 0..200 {
            session.advance(100);
        }
        assert_eq!(session.state().lives, 3);
        let paddle = session.state().paddle.rect();
        assert!(paddle.spans_x(session.state().ball.pos.x) || session.state().phase.is_terminal());
    }
}
