//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one step.

use serde::{Deserialize, Serialize};

use super::collision::{BrickContact, brick_contact, paddle_catches, wall_hits};
use super::state::{GamePhase, GameState};

/// Held-direction state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_held: bool,
    pub right_held: bool,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side wall or the top wall
    WallBounce,
    PaddleBounce,
    BrickHit { row: usize, col: usize },
    /// Ball got past the paddle but lives remain
    LifeLost { lives_left: u32 },
    GameWon,
    GameLost,
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn contains(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }

    /// Whether this tick ended the session
    pub fn is_terminal(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameWon | GameEvent::GameLost))
    }

    pub fn life_lost(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::LifeLost { .. }))
    }
}

/// Advance the game state by one tick
///
/// A terminal state is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    if state.phase.is_terminal() {
        return report;
    }

    state.ticks += 1;

    if !update_ball(state, &mut report) {
        return report;
    }
    update_paddle(state, input);
    update_bricks(state, &mut report);

    report
}

/// Wall, paddle and bottom-edge handling, then integration.
///
/// Every test reads the position from before this tick. Returns false when
/// the last life was lost, which ends the tick. Any other lost life puts the
/// ball back at its serve and play carries on from there.
fn update_ball(state: &mut GameState, report: &mut TickReport) -> bool {
    let ball = &mut state.ball;
    let hits = wall_hits(ball.pos, ball.vel, ball.radius, state.playfield);

    if hits.side {
        ball.vel.x = -ball.vel.x;
        report.events.push(GameEvent::WallBounce);
        log::trace!("Side wall bounce at x={:.1}", ball.pos.x);
    }

    let mut missed = false;
    if hits.top {
        ball.vel.y = -ball.vel.y;
        report.events.push(GameEvent::WallBounce);
        log::trace!("Top wall bounce at x={:.1}", ball.pos.x);
    } else if hits.bottom {
        if paddle_catches(ball.pos.x, &state.paddle.rect()) {
            ball.vel.y = -ball.vel.y;
            report.events.push(GameEvent::PaddleBounce);
            log::trace!("Paddle bounce at x={:.1}", ball.pos.x);
        } else {
            missed = true;
        }
    }

    if missed {
        lose_life(state, report);
        if state.phase.is_terminal() {
            return false;
        }
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel;
    true
}

fn lose_life(state: &mut GameState, report: &mut TickReport) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::Lost;
        report.events.push(GameEvent::GameLost);
        log::info!("Game over - final score {}", state.score);
    } else {
        state.reset_ball_and_paddle();
        report.events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
        log::info!("Life lost, {} remaining", state.lives);
    }
}

/// Discrete left/right nudge; right takes precedence when both are held
fn update_paddle(state: &mut GameState, input: &TickInput) {
    let width = state.playfield.x;
    let paddle = &mut state.paddle;
    if input.right_held && paddle.x < paddle.max_x(width) {
        paddle.set_x_clamped(paddle.x + state.paddle_nudge, width);
    } else if input.left_held && paddle.x > 0.0 {
        paddle.set_x_clamped(paddle.x - state.paddle_nudge, width);
    }
}

/// Test every unhit brick against the integrated ball position
fn update_bricks(state: &mut GameState, report: &mut TickReport) {
    let ball = &mut state.ball;
    let mut hits = Vec::new();

    for (index, brick) in state.bricks.bricks_mut().iter_mut().enumerate() {
        if brick.hit {
            continue;
        }
        let Some(contact) = brick_contact(ball.pos, ball.radius, &brick.rect) else {
            continue;
        };
        match contact {
            BrickContact::Vertical => ball.vel.y = -ball.vel.y,
            BrickContact::Horizontal => ball.vel.x = -ball.vel.x,
        }
        brick.hit = true;
        hits.push(index);
    }

    for index in hits {
        state.score += 1;
        let (row, col) = state.bricks.position_of(index);
        report.events.push(GameEvent::BrickHit { row, col });
        log::debug!("Brick ({}, {}) hit, score {}", row, col, state.score);
    }

    // A grid with nothing in it has nothing to clear
    if !state.bricks.is_empty() && state.bricks.all_hit() {
        state.phase = GamePhase::Won;
        report.events.push(GameEvent::GameWon);
        log::info!("All {} bricks cleared", state.score);
    }
}
