//! Canvas Breakout entry point
//!
//! The web build paints onto the page's canvas. The native build runs the
//! simulation headless in demo mode and logs how the session went.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Canvas Breakout starting...");
    canvas_breakout::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Ticks simulated by the headless runner when no cap is given
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TICK_CAP: u64 = 60_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Breakout (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match canvas_breakout::Settings::from_path(std::path::Path::new(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => canvas_breakout::Settings::load(),
    };
    let tick_cap = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(cap)) => cap,
        Some(Err(e)) => {
            log::error!("Tick cap must be a whole number: {}", e);
            std::process::exit(1);
        }
        None => DEFAULT_TICK_CAP,
    };

    if let Err(e) = run_headless(settings, tick_cap) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless(
    settings: canvas_breakout::Settings,
    tick_cap: u64,
) -> Result<(), canvas_breakout::SettingsError> {
    use canvas_breakout::input::Key;
    use canvas_breakout::renderer::RecordingSurface;
    use canvas_breakout::sim::GamePhase;
    use canvas_breakout::{Clock, ManualClock, Session};

    let period = settings.tick_period_ms;
    let mut session = Session::new(settings, ManualClock::new())?;
    session.key_up(Key::Demo);
    session.start();

    // Feed the clock one period at a time; a lost life pauses it for the
    // configured delay, which still counts as elapsed time
    while session.state().ticks < tick_cap && session.clock().is_running() {
        session.advance(period);
    }

    let state = session.state();
    match state.phase {
        GamePhase::Won => log::info!("Won after {} ticks", state.ticks),
        GamePhase::Lost => log::info!("Lost after {} ticks", state.ticks),
        GamePhase::Playing => log::info!("Still playing after {} ticks", state.ticks),
    }
    log::info!(
        "Score {}/{}, {} lives left",
        state.score,
        state.brick_count(),
        state.lives
    );

    let playfield = session.settings().playfield();
    let mut surface = RecordingSurface::new(playfield.x, playfield.y);
    session.render(&mut surface);
    log::info!("Final frame: {} draw commands", surface.commands.len());
    for text in surface.texts() {
        log::info!("  {}", text);
    }
    Ok(())
}
