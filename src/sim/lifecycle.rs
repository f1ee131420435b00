//! Ball lifecycle: reaping lost balls, losing lives, resetting the session

use super::entity::EntityKind;
use super::error::SimError;
use super::state::{GameEvent, GameState};

/// What the lifecycle pass did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// At least one ball is still in play
    InPlay,
    /// All balls were lost; a life was spent and a new ball served
    LifeLost,
    /// All balls were lost on the last life; the session was restarted
    SessionReset,
}

/// Remove balls that are fully outside the world, then handle losing the last one.
///
/// Runs once per tick after movement.
pub fn update_lifecycle(state: &mut GameState) -> Result<LifecycleOutcome, SimError> {
    let bounds = state.world.bounds();

    for id in state.entities.ids() {
        let Some(entity) = state.entities.get(id) else {
            continue;
        };
        if entity.kind != EntityKind::Ball {
            continue;
        }
        let Some(aabb) = entity.bounds() else {
            continue;
        };
        if aabb.is_outside(&bounds) {
            state.entities.remove(id);
            log::debug!("Ball {} left the world", id);
        }
    }

    if state.entities.count_kind(EntityKind::Ball) > 0 {
        return Ok(LifecycleOutcome::InPlay);
    }

    state.events.push(GameEvent::LostAllBalls);
    state.session.lives = state.session.lives.saturating_sub(1);

    if state.session.lives == 0 {
        log::info!(
            "Out of lives with score {}, starting over",
            state.session.score
        );
        // new_game() clears pending events; keep the ones raised this tick
        let events = state.drain_events();
        state.new_game();
        state.events = events;
        return Ok(LifecycleOutcome::SessionReset);
    }

    log::info!("All balls lost, {} lives left", state.session.lives);
    state.reset_paddle()?;
    state.spawn_attached_ball()?;
    Ok(LifecycleOutcome::LifeLost)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::entity::BallState;

    fn state() -> GameState {
        GameState::new(GameConfig {
            seed: Some(11),
            ..Default::default()
        })
    }

    fn only_ball(state: &GameState) -> crate::sim::EntityId {
        state.entities.of_kind(EntityKind::Ball).next().unwrap().id
    }

    #[test]
    fn test_ball_in_world_is_kept() {
        let mut state = state();
        let ball = only_ball(&state);
        // Straddling the bottom edge still counts as in the world
        state.entities.get_mut(ball).unwrap().position = Some(Vec2::new(100.0, 715.0));

        assert_eq!(update_lifecycle(&mut state).unwrap(), LifecycleOutcome::InPlay);
        assert!(state.entities.contains(ball));
        assert_eq!(state.session.lives, 3);
    }

    #[test]
    fn test_last_ball_lost_costs_a_life() {
        let mut state = state();
        let ball = only_ball(&state);
        let paddle = state.session.paddle.unwrap();
        {
            let lost = state.entities.get_mut(ball).unwrap();
            lost.position = Some(Vec2::new(100.0, 730.0));
            lost.ball_state = Some(BallState::Launched);
            lost.velocity = Some(Vec2::new(5.0, 5.0));
        }
        state.entities.get_mut(paddle).unwrap().position = Some(Vec2::new(20.0, 700.0));

        assert_eq!(update_lifecycle(&mut state).unwrap(), LifecycleOutcome::LifeLost);

        assert!(!state.entities.contains(ball));
        assert_eq!(state.session.lives, 2);
        assert_eq!(state.events, vec![GameEvent::LostAllBalls]);
        assert_eq!(
            state.entities.get(paddle).unwrap().position,
            Some(Vec2::new(590.0, 700.0))
        );

        let balls: Vec<_> = state.entities.of_kind(EntityKind::Ball).collect();
        assert_eq!(balls.len(), 1);
        assert!(balls[0].is_attached());
        assert_eq!(balls[0].velocity, Some(Vec2::ZERO));
        assert_eq!(balls[0].position, Some(Vec2::new(634.0, 688.0)));
    }

    #[test]
    fn test_extra_ball_keeps_play_going() {
        let mut state = state();
        let ball = only_ball(&state);
        state.entities.get_mut(ball).unwrap().position = Some(Vec2::new(100.0, 800.0));
        state.spawn_attached_ball().unwrap();

        assert_eq!(update_lifecycle(&mut state).unwrap(), LifecycleOutcome::InPlay);
        assert_eq!(state.ball_count(), 1);
        assert_eq!(state.session.lives, 3);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_last_life_resets_session() {
        let mut state = state();
        state.session.lives = 1;
        state.session.score = 1200;
        state.session.tick = 999;
        let brick = state.entities.of_kind(EntityKind::Brick).next().unwrap().id;
        state.entities.remove(brick);

        let ball = only_ball(&state);
        state.entities.get_mut(ball).unwrap().position = Some(Vec2::new(-50.0, 300.0));

        assert_eq!(
            update_lifecycle(&mut state).unwrap(),
            LifecycleOutcome::SessionReset
        );
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.tick, 0);
        assert_eq!(state.entities.count_kind(EntityKind::Brick), 10);
        assert_eq!(state.ball_count(), 1);
        assert_eq!(state.events, vec![GameEvent::LostAllBalls]);
    }
}
