//! Per-tick simulation driver
//!
//! Control flow for one tick:
//! input coupling -> movement (with collision resolution) -> paddle
//! attachment -> lifecycle. Rendering and audio happen outside, afterwards.

use super::error::SimError;
use super::lifecycle::{self, LifecycleOutcome};
use super::movement;
use super::state::GameState;

/// Input state sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Launch attached balls
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one tick.
///
/// Returns `None` when the session is paused, otherwise what the lifecycle
/// pass did.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
) -> Result<Option<LifecycleOutcome>, SimError> {
    if input.pause {
        state.set_paused(!state.paused);
    }
    if state.paused {
        return Ok(None);
    }

    state.session.tick += 1;

    let paddle = state.session.paddle.ok_or(SimError::MissingPaddle)?;
    movement::steer_paddle(
        &mut state.entities,
        paddle,
        input.left,
        input.right,
        state.config.paddle_speed,
    )?;

    if input.launch {
        movement::launch_balls(&mut state.entities, state.config.ball_speed);
    }

    movement::move_entities(
        &mut state.entities,
        &mut state.session,
        &mut state.events,
        state.world,
    )?;
    movement::follow_paddle(&mut state.entities, paddle)?;

    lifecycle::update_lifecycle(state).map(Some)
}
