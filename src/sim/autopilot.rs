//! Idle/demo mode - the game plays itself
//!
//! Steers through the same pointer path a player would use, so demo play
//! goes through exactly the rules a mouse user gets.

use super::state::GameState;

/// Pointer x that keeps the paddle under the ball
///
/// Adds an oscillating offset based on time so the paddle doesn't sit
/// perfectly still under the ball. The offset stays within a third of the
/// paddle's width, so the ball still lands on it.
pub fn pointer_target(state: &GameState) -> f32 {
    let time_factor = state.ticks as f32 * 0.01;
    let wobble = (time_factor.sin() * 0.7 + (time_factor * 0.7).sin() * 0.3) / 3.0;
    state.ball.pos.x + wobble * state.paddle.width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_target_stays_near_ball() {
        let mut state = GameState::new(&Settings::default());
        for t in 0..2000 {
            state.ticks = t;
            let target = pointer_target(&state);
            assert!((target - state.ball.pos.x).abs() <= state.paddle.width / 3.0 + 1e-3);
        }
    }

    #[test]
    fn test_autopilot_never_misses() {
        let mut state = GameState::new(&Settings::default());
        for _ in 0..20_000 {
            let target = pointer_target(&state);
            state.track_pointer(target);
            let report = tick(&mut state, &TickInput::default());
            assert!(!report.life_lost(), "autopilot dropped the ball");
            if state.phase.is_terminal() {
                break;
            }
        }
        assert_eq!(state.lives, 3);
    }
}
