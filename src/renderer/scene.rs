//! Paints a game state onto a surface

use glam::Vec2;

use super::surface::{ShapeStyle, Surface, TextAlign};
use crate::settings::Theme;
use crate::sim::{GamePhase, GameState};

/// HUD text baseline from the top edge
const HUD_BASELINE: f32 = 20.0;
const SCORE_X: f32 = 8.0;
/// Lives counter sits this far left of the right edge
const LIVES_INSET: f32 = 65.0;
/// Gap between a banner and its prompt line
const PROMPT_DROP: f32 = 40.0;

pub const WON_BANNER: &str = "You Won!";
pub const LOST_BANNER: &str = "GAME OVER";
pub const RESTART_PROMPT: &str = "Press the ENTER key to continue";

/// Draw one full frame: bricks, ball, paddle, HUD and any end-of-game banner
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState, theme: &Theme) {
    let width = surface.width();
    let height = surface.height();
    let bounds = surface.bounds();
    surface.clear(bounds);

    for brick in state.bricks.iter().filter(|b| !b.hit) {
        surface.draw_rect(brick.rect, ShapeStyle::filled(&theme.brick_fill));
    }

    surface.draw_circle(
        state.ball.pos,
        state.ball.radius,
        ShapeStyle::filled(&theme.ball_fill),
    );
    surface.draw_rect(state.paddle.rect(), ShapeStyle::filled(&theme.paddle_fill));

    surface.draw_text(
        &format!("Score: {}", state.score),
        Vec2::new(SCORE_X, HUD_BASELINE),
        TextAlign::Left,
        &theme.hud_font,
        &theme.hud_fill,
    );
    surface.draw_text(
        &format!("Lives: {}", state.lives),
        Vec2::new(width - LIVES_INSET, HUD_BASELINE),
        TextAlign::Left,
        &theme.hud_font,
        &theme.hud_fill,
    );

    let banner = match state.phase {
        GamePhase::Playing => return,
        GamePhase::Won => WON_BANNER,
        GamePhase::Lost => LOST_BANNER,
    };
    let center = Vec2::new(width / 2.0, height / 2.0);
    surface.draw_text(
        banner,
        center,
        TextAlign::Center,
        &theme.banner_font,
        &theme.banner_fill,
    );
    surface.draw_text(
        RESTART_PROMPT,
        center + Vec2::new(0.0, PROMPT_DROP),
        TextAlign::Center,
        &theme.prompt_font,
        &theme.banner_fill,
    );
}
