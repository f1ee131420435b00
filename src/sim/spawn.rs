//! Typed entity factories
//!
//! Each factory assembles the fixed component set for its kind and inserts
//! the entity into the registry immediately.

use glam::Vec2;

use super::aabb::World;
use super::entity::{BallState, EdgeFlags, Entity, EntityId, EntityKind, SpriteId};
use super::registry::Registry;
use crate::consts::*;

/// Paddle construction parameters
#[derive(Debug, Clone, Copy)]
pub struct PaddleParams {
    pub position: Vec2,
    /// Paddle width; height is derived from it
    pub width: f32,
}

/// Ball construction parameters
#[derive(Debug, Clone, Copy)]
pub struct BallParams {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    pub damage: i32,
    pub state: BallState,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: 12.0,
            speed: BALL_SPEED,
            damage: BALL_DAMAGE,
            state: BallState::Attached,
        }
    }
}

pub fn spawn_paddle(registry: &mut Registry, params: PaddleParams) -> EntityId {
    let id = registry.allocate_id();
    let mut paddle = Entity::new(id, EntityKind::Paddle);
    paddle.position = Some(params.position);
    paddle.size = Some(Vec2::new(params.width, params.width / PADDLE_ASPECT));
    paddle.collides = true;
    paddle.clamp = Some(EdgeFlags::ALL);
    paddle.velocity = Some(Vec2::ZERO);
    paddle.sprite = Some(SpriteId::Paddle);
    registry.insert(paddle);
    id
}

pub fn spawn_ball(registry: &mut Registry, params: BallParams) -> EntityId {
    let id = registry.allocate_id();
    let mut ball = Entity::new(id, EntityKind::Ball);
    ball.position = Some(params.position);
    ball.size = Some(Vec2::splat(params.size));
    ball.collides = true;
    ball.clamp = Some(EdgeFlags::OPEN_BOTTOM);
    ball.bounce = Some(EdgeFlags::OPEN_BOTTOM);
    ball.velocity = Some(match params.state {
        BallState::Attached => Vec2::ZERO,
        BallState::Launched => launch_velocity(params.speed),
    });
    ball.damage = Some(params.damage);
    ball.sprite = Some(SpriteId::Ball);
    ball.ball_state = Some(params.state);
    registry.insert(ball);
    id
}

pub fn spawn_brick(registry: &mut Registry, position: Vec2, health: i32) -> EntityId {
    let id = registry.allocate_id();
    let mut brick = Entity::new(id, EntityKind::Brick);
    brick.position = Some(position);
    brick.size = Some(Vec2::new(BRICK_WIDTH, BRICK_HEIGHT));
    brick.collides = true;
    brick.health = Some(health);
    brick.sprite = Some(SpriteId::Brick);
    registry.insert(brick);
    id
}

pub fn spawn_wall(registry: &mut Registry, position: Vec2, size: Vec2) -> EntityId {
    let id = registry.allocate_id();
    let mut wall = Entity::new(id, EntityKind::Wall);
    wall.position = Some(position);
    wall.size = Some(size);
    wall.collides = true;
    registry.insert(wall);
    id
}

/// Initial velocity of a launched ball: up and to the right
#[inline]
pub fn launch_velocity(speed: f32) -> Vec2 {
    Vec2::new(speed, -speed)
}

/// Paddle start position: horizontally centered, resting on the bottom edge
pub fn paddle_start(world: World, width: f32) -> Vec2 {
    let height = width / PADDLE_ASPECT;
    Vec2::new((world.width - width) / 2.0, world.height - height)
}

/// Where an attached ball sits: centered on and resting on top of the paddle
pub fn attached_ball_position(paddle_position: Vec2, paddle_width: f32, ball_size: Vec2) -> Vec2 {
    Vec2::new(
        paddle_position.x + (paddle_width - ball_size.x) / 2.0,
        paddle_position.y - ball_size.y,
    )
}

/// Lay out the bricks for a level. Returns the spawned brick ids.
pub fn build_level(
    registry: &mut Registry,
    level: u32,
    world: World,
    health: i32,
) -> Vec<EntityId> {
    // Only one layout exists so far; every level uses it
    log::debug!("Building level {}", level);
    (0..LEVEL_ROWS * LEVEL_COLUMNS)
        .map(|i| {
            let row = i / LEVEL_COLUMNS;
            let col = i % LEVEL_COLUMNS;
            let position = Vec2::new(
                world.width / 2.0 + col as f32 * LEVEL_COLUMN_SPACING,
                LEVEL_TOP + row as f32 * LEVEL_ROW_SPACING,
            );
            spawn_brick(registry, position, health)
        })
        .collect()
}
