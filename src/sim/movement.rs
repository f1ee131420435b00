//! Movement system
//!
//! Advances every entity that has position, size and velocity by one tick.
//! Intended moves are first checked against collidable targets; without a hit
//! each axis is integrated independently under the entity's clamp and bounce
//! policies.

use glam::Vec2;

use super::aabb::{Aabb, World};
use super::collision;
use super::entity::{BallState, Entity, EntityId, EntityKind};
use super::error::SimError;
use super::registry::Registry;
use super::spawn;
use super::state::{GameEvent, Session};

/// Move every movable entity one tick, in registry order
pub fn move_entities(
    registry: &mut Registry,
    session: &mut Session,
    events: &mut Vec<GameEvent>,
    world: World,
) -> Result<(), SimError> {
    let region = world.expanded_bounds();

    for id in registry.ids() {
        // Removed earlier this tick
        let Some(entity) = registry.get(id) else {
            continue;
        };
        let (Some(position), Some(size), Some(velocity)) =
            (entity.position, entity.size, entity.velocity)
        else {
            continue;
        };

        let current = Aabb::from_position_size(position, size);
        if current.is_outside(&region) {
            continue;
        }

        let intended = current.translated(velocity);
        if let Some(target) = collision::find_target(registry, id, &intended)? {
            collision::resolve(registry, session, events, id, &target)?;
            continue;
        }

        if let Some(entity) = registry.get_mut(id) {
            if integrate(entity, world) && entity.is_ball() {
                events.push(GameEvent::HitEdge);
            }
        }
    }

    Ok(())
}

/// Result of stepping one axis
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisStep {
    position: f32,
    velocity: f32,
    bounced: bool,
}

/// Step one axis against the `[0, extent]` range.
///
/// `clamp` and `bounce` are the (low edge, high edge) policies.
fn step_axis(
    position: f32,
    velocity: f32,
    size: f32,
    extent: f32,
    clamp: (bool, bool),
    bounce: (bool, bool),
) -> AxisStep {
    let intended = position + velocity;

    let crossing = if intended < 0.0 && clamp.0 {
        Some((0.0, bounce.0))
    } else if intended + size > extent && clamp.1 {
        Some((extent - size, bounce.1))
    } else {
        None
    };

    match crossing {
        Some((edge, bounces)) => AxisStep {
            position: edge,
            velocity: if bounces { -velocity } else { velocity },
            bounced: bounces,
        },
        None => AxisStep {
            position: intended,
            velocity,
            bounced: false,
        },
    }
}

/// Integrate velocity under the entity's edge policies.
///
/// Returns true if either axis bounced off a world edge.
fn integrate(entity: &mut Entity, world: World) -> bool {
    let (Some(position), Some(size), Some(velocity)) =
        (entity.position, entity.size, entity.velocity)
    else {
        return false;
    };
    let clamp = entity.clamp.unwrap_or_default();
    let bounce = entity.bounce.unwrap_or_default();

    let x = step_axis(
        position.x,
        velocity.x,
        size.x,
        world.width,
        (clamp.left, clamp.right),
        (bounce.left, bounce.right),
    );
    let y = step_axis(
        position.y,
        velocity.y,
        size.y,
        world.height,
        (clamp.top, clamp.bottom),
        (bounce.top, bounce.bottom),
    );

    entity.position = Some(Vec2::new(x.position, y.position));
    entity.velocity = Some(Vec2::new(x.velocity, y.velocity));

    if x.bounced || y.bounced {
        log::debug!("{} {} bounced off a world edge", entity.kind, entity.id);
    }
    x.bounced || y.bounced
}

/// Recompute the paddle's horizontal velocity from held input.
///
/// Opposing inputs cancel.
pub fn steer_paddle(
    registry: &mut Registry,
    paddle: EntityId,
    left: bool,
    right: bool,
    speed: f32,
) -> Result<(), SimError> {
    let paddle = registry.get_mut(paddle).ok_or(SimError::MissingPaddle)?;
    let direction = f32::from(u8::from(right)) - f32::from(u8::from(left));
    let velocity = paddle.require_velocity()?;
    paddle.velocity = Some(Vec2::new(direction * speed, velocity.y));
    Ok(())
}

/// Launch every attached ball. Returns how many were launched.
pub fn launch_balls(registry: &mut Registry, speed: f32) -> usize {
    let mut launched = 0;
    for id in registry.ids() {
        let Some(ball) = registry.get_mut(id) else {
            continue;
        };
        if ball.kind != EntityKind::Ball || !ball.is_attached() {
            continue;
        }
        ball.ball_state = Some(BallState::Launched);
        ball.velocity = Some(spawn::launch_velocity(speed));
        launched += 1;
    }
    if launched > 0 {
        log::info!("Launched {} ball(s)", launched);
    }
    launched
}

/// Keep attached balls centered over the paddle.
///
/// Runs after movement and overwrites their x coordinate.
pub fn follow_paddle(registry: &mut Registry, paddle: EntityId) -> Result<(), SimError> {
    let paddle = registry
        .get(paddle)
        .ok_or(SimError::MissingPaddle)?
        .require_bounds()?;

    for id in registry.ids() {
        let Some(ball) = registry.get_mut(id) else {
            continue;
        };
        if !ball.is_attached() {
            continue;
        }
        let size = ball.require_bounds()?;
        if let Some(position) = ball.position.as_mut() {
            position.x = paddle.min.x + (paddle.width() - size.width()) / 2.0;
        }
    }
    Ok(())
}
