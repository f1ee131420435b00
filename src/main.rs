//! Brickout entry point
//!
//! Runs the simulation headless with a simple autopilot on the paddle. Hosts
//! with a real canvas and speakers drive `tick` the same way, one call per
//! animation frame.

use brickout::audio::{AudioManager, LogBackend};
use brickout::renderer;
use brickout::sim::{EntityKind, GameState, LifecycleOutcome, TickInput, tick};
use brickout::GameConfig;

/// Ticks to simulate (about a minute at 60 Hz)
const DEMO_TICKS: u64 = 3600;

/// Steer the paddle under the lowest ball and launch when one is attached
fn autopilot(state: &GameState) -> TickInput {
    let Ok(paddle) = state.paddle_bounds() else {
        return TickInput::default();
    };

    let target = state
        .entities
        .of_kind(EntityKind::Ball)
        .filter_map(|ball| ball.bounds())
        .max_by(|a, b| a.y2().total_cmp(&b.y2()));

    let mut input = TickInput::default();
    if let Some(ball) = target {
        let offset = ball.center_x() - paddle.center_x();
        input.left = offset < -state.config.paddle_speed;
        input.right = offset > state.config.paddle_speed;
    }
    input.launch = state
        .entities
        .of_kind(EntityKind::Ball)
        .any(|ball| ball.is_attached());
    input
}

fn main() {
    env_logger::init();
    log::info!("Brickout (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };

    let mut audio = AudioManager::from_config(LogBackend, &config);
    let mut state = GameState::new(config);

    for _ in 0..DEMO_TICKS {
        let input = autopilot(&state);
        match tick(&mut state, &input) {
            Ok(Some(LifecycleOutcome::SessionReset)) => log::info!("Game over, new session"),
            Ok(_) => {}
            Err(e) => log::error!("Tick {} aborted: {}", state.session.tick, e),
        }
        audio.play_all(state.drain_events());

        if state.session.tick % 600 == 0 {
            let hud = state.hud();
            log::info!(
                "tick {} score {} lives {} ({} entities)",
                hud.tick,
                hud.score,
                hud.lives,
                state.entities.len()
            );
        }
    }

    let hud = state.hud();
    println!(
        "{}: score {} with {} lives left after {} ticks, {} entities on screen",
        state.config.player_name,
        hud.score,
        hud.lives,
        hud.tick,
        renderer::snapshot(&state).len()
    );
}
