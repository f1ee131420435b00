//! Game state and session counters
//!
//! One `GameState` is created per run. It owns the entity registry and the
//! session counters, and is passed by reference into the systems each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::World;
use super::entity::{BallState, EntityId, EntityKind};
use super::error::SimError;
use super::registry::Registry;
use super::spawn::{self, BallParams, PaddleParams};
use crate::settings::GameConfig;

/// Fire-and-forget effect triggers, consumed by the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    HitPaddle,
    /// Ball struck a brick
    HitBlock,
    /// Ball bounced off a world edge
    HitEdge,
    /// The last ball left the world
    LostAllBalls,
}

/// Session counters and the paddle reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Simulation tick counter
    pub tick: u64,
    pub score: u64,
    pub lives: u8,
    /// Current level (1-based)
    pub level: u32,
    /// The current paddle, kept for repositioning on life loss
    pub paddle: Option<EntityId>,
}

impl Session {
    pub fn new(lives: u8) -> Self {
        Self {
            tick: 0,
            score: 0,
            lives,
            level: 1,
            paddle: None,
        }
    }
}

/// Counters shown by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub tick: u64,
    pub score: u64,
    pub lives: u8,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub world: World,
    pub session: Session,
    pub entities: Registry,
    /// Effects raised since the last drain
    pub events: Vec<GameEvent>,
    /// A paused session does not advance
    pub paused: bool,
}

impl GameState {
    /// Create a state and start a new game on it
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut state = Self {
            world: config.world(),
            session: Session::new(config.lives),
            entities: Registry::new(seed),
            events: Vec::new(),
            paused: false,
            config,
        };
        state.new_game();
        state
    }

    /// Wipe every entity and counter and lay out level 1 again
    pub fn new_game(&mut self) {
        self.entities.clear();
        self.events.clear();
        self.session = Session::new(self.config.lives);
        self.world = self.config.world();

        spawn::build_level(
            &mut self.entities,
            self.session.level,
            self.world,
            self.config.brick_health,
        );

        let width = self.config.paddle_size.width();
        let paddle = spawn::spawn_paddle(
            &mut self.entities,
            PaddleParams {
                position: spawn::paddle_start(self.world, width),
                width,
            },
        );
        self.session.paddle = Some(paddle);

        // A freshly spawned paddle always has position and size
        if let Err(e) = self.spawn_attached_ball() {
            log::error!("Failed to serve the first ball: {}", e);
        }

        log::info!(
            "New game: {}x{} world, {} lives",
            self.world.width,
            self.world.height,
            self.session.lives
        );
    }

    /// Spawn a ball in the attached state, resting on the paddle's center
    pub fn spawn_attached_ball(&mut self) -> Result<EntityId, SimError> {
        let paddle = self.paddle_bounds()?;
        let size = Vec2::splat(self.config.ball_size.size());
        let position = spawn::attached_ball_position(paddle.min, paddle.width(), size);

        Ok(spawn::spawn_ball(
            &mut self.entities,
            BallParams {
                position,
                size: size.x,
                speed: self.config.ball_speed,
                damage: self.config.ball_damage,
                state: BallState::Attached,
            },
        ))
    }

    /// Move the paddle back to its centered start and stop it
    pub fn reset_paddle(&mut self) -> Result<(), SimError> {
        let id = self.session.paddle.ok_or(SimError::MissingPaddle)?;
        let world = self.world;
        let paddle = self.entities.get_mut(id).ok_or(SimError::MissingPaddle)?;
        let size = paddle.size.ok_or(SimError::MissingComponent {
            id,
            kind: paddle.kind,
            component: "size",
        })?;
        paddle.position = Some(spawn::paddle_start(world, size.x));
        paddle.set_velocity(Vec2::ZERO);
        Ok(())
    }

    /// Current paddle bounding box
    pub fn paddle_bounds(&self) -> Result<super::aabb::Aabb, SimError> {
        let id = self.session.paddle.ok_or(SimError::MissingPaddle)?;
        self.entities
            .get(id)
            .ok_or(SimError::MissingPaddle)?
            .require_bounds()
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    pub fn ball_count(&self) -> usize {
        self.entities.count_kind(EntityKind::Ball)
    }

    /// Take the effects raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            tick: self.session.tick,
            score: self.session.score,
            lives: self.session.lives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{BallSize, PaddleSize, Resolution};

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(config());
        assert_eq!(state.entities.count_kind(EntityKind::Brick), 10);
        assert_eq!(state.entities.count_kind(EntityKind::Paddle), 1);
        assert_eq!(state.ball_count(), 1);
        assert_eq!(state.hud(), Hud { tick: 0, score: 0, lives: 3 });

        let paddle = state.paddle_bounds().unwrap();
        assert_eq!(paddle.min, Vec2::new(590.0, 700.0));

        let ball = state.entities.of_kind(EntityKind::Ball).next().unwrap();
        assert!(ball.is_attached());
        assert_eq!(ball.velocity, Some(Vec2::ZERO));
        assert_eq!(ball.position, Some(Vec2::new(634.0, 688.0)));
    }

    #[test]
    fn test_reset_paddle_recenters() {
        let mut state = GameState::new(config());
        let id = state.session.paddle.unwrap();
        {
            let paddle = state.entities.get_mut(id).unwrap();
            paddle.position = Some(Vec2::new(10.0, 700.0));
            paddle.velocity = Some(Vec2::new(-8.0, 0.0));
        }
        state.reset_paddle().unwrap();
        let paddle = state.entities.get(id).unwrap();
        assert_eq!(paddle.position, Some(Vec2::new(590.0, 700.0)));
        assert_eq!(paddle.velocity, Some(Vec2::ZERO));
    }

    #[test]
    fn test_missing_paddle_is_reported() {
        let mut state = GameState::new(config());
        let id = state.session.paddle.unwrap();
        state.entities.remove(id);
        assert_eq!(state.reset_paddle(), Err(SimError::MissingPaddle));
        assert_eq!(state.spawn_attached_ball(), Err(SimError::MissingPaddle));
    }

    #[test]
    fn test_new_game_always_serves_a_ball() {
        let resolutions = [
            Resolution::R480p,
            Resolution::R720p,
            Resolution::R1080p,
            Resolution::R1440p,
            Resolution::R2160p,
        ];
        let paddles = [PaddleSize::Small, PaddleSize::Medium, PaddleSize::Large];
        let balls = [BallSize::Small, BallSize::Medium, BallSize::Large];

        for resolution in resolutions {
            for paddle_size in paddles {
                for ball_size in balls {
                    let mut state = GameState::new(GameConfig {
                        resolution,
                        paddle_size,
                        ball_size,
                        ..config()
                    });
                    // Restarting from a mid-game state serves exactly one ball
                    state.spawn_attached_ball().unwrap();
                    state.new_game();

                    assert_eq!(state.ball_count(), 1, "{}", resolution.as_str());
                    let paddle = state.paddle_bounds().unwrap();
                    let ball = state.entities.of_kind(EntityKind::Ball).next().unwrap();
                    let bounds = ball.bounds().unwrap();
                    assert!(ball.is_attached());
                    assert_eq!(bounds.y2(), paddle.y1());
                    assert_eq!(bounds.center_x(), paddle.center_x());
                }
            }
        }
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(config());
        state.events.push(GameEvent::HitEdge);
        assert_eq!(state.drain_events(), vec![GameEvent::HitEdge]);
        assert!(state.drain_events().is_empty());
    }
}
