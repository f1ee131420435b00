//! Collision detection and response for axis-aligned boxes
//!
//! Detection tests an entity's intended (projected) box against every
//! collidable target in registry order and stops at the first overlap. That is
//! not necessarily the nearest impact along the path.
//!
//! Response classifies where the mover sits relative to the target using the
//! current boxes, reverses the matching velocity components, snaps the mover
//! against the face it hit, then applies gameplay effects for balls.

use glam::Vec2;

use super::aabb::Aabb;
use super::entity::{EntityId, EntityKind};
use super::error::SimError;
use super::registry::Registry;
use super::state::{GameEvent, Session};
use crate::consts::{BRICK_SCORE, COLLISION_INSET};

/// Where the source box sits relative to the target box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Orientation {
    pub fn has_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    pub fn has_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    pub fn has_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    pub fn has_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    /// Reverses the y velocity component
    pub fn is_vertical(self) -> bool {
        self.has_top() || self.has_bottom()
    }

    /// Reverses the x velocity component
    pub fn is_horizontal(self) -> bool {
        self.has_left() || self.has_right()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// Classify `source` relative to `target`.
///
/// Returns `None` when the boxes share no separating axis (already
/// interpenetrating). Above/left use a strict `<`, so a source whose bottom
/// edge sits exactly on the target's top edge is unresolved and passes through.
pub fn orient(source: &Aabb, target: &Aabb) -> Option<Orientation> {
    let bottom = source.y2() < target.y1();
    let top = source.y1() >= target.y2();
    let right = source.x2() < target.x1();
    let left = source.x1() >= target.x2();

    match (top, bottom, left, right) {
        (true, _, true, _) => Some(Orientation::TopLeft),
        (true, _, _, true) => Some(Orientation::TopRight),
        (_, true, true, _) => Some(Orientation::BottomLeft),
        (_, true, _, true) => Some(Orientation::BottomRight),
        (true, ..) => Some(Orientation::Top),
        (_, true, ..) => Some(Orientation::Bottom),
        (_, _, true, _) => Some(Orientation::Left),
        (.., true) => Some(Orientation::Right),
        _ => None,
    }
}

/// A collidable entity hit by an intended move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionTarget {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Target's current box
    pub bounds: Aabb,
}

/// Find the first collidable entity (other than `source`) whose current box
/// overlaps `intended` on both axes.
///
/// A collidable target without position and size is an invariant breach.
pub fn find_target(
    registry: &Registry,
    source: EntityId,
    intended: &Aabb,
) -> Result<Option<CollisionTarget>, SimError> {
    for other in registry.iter() {
        if other.id == source || !other.collides {
            continue;
        }

        let bounds = other.require_bounds()?;
        if intended.overlaps(&bounds) {
            return Ok(Some(CollisionTarget {
                id: other.id,
                kind: other.kind,
                bounds,
            }));
        }
    }

    Ok(None)
}

/// Velocity after bouncing off a face with the given orientation
pub fn reflect(velocity: Vec2, orientation: Orientation) -> Vec2 {
    Vec2::new(
        if orientation.is_horizontal() { -velocity.x } else { velocity.x },
        if orientation.is_vertical() { -velocity.y } else { velocity.y },
    )
}

/// Position of `source` snapped flush against the face of `target` it hit
pub fn snap(source: &Aabb, target: &Aabb, orientation: Orientation) -> Vec2 {
    let mut position = source.min;

    if orientation.has_top() {
        position.y = target.y2();
    } else if orientation.has_bottom() {
        position.y = target.y1() - source.height() - COLLISION_INSET;
    }

    if orientation.has_left() {
        position.x = target.x2();
    } else if orientation.has_right() {
        position.x = target.x1() - source.width() - COLLISION_INSET;
    }

    position
}

/// Resolve a collision between the moving `source` and `target`.
///
/// Bounces and snaps the source, then applies ball effects (sounds, brick
/// damage, destruction and scoring). An unresolvable orientation is logged and
/// the source passes through with its velocity unchanged.
pub fn resolve(
    registry: &mut Registry,
    session: &mut Session,
    events: &mut Vec<GameEvent>,
    source: EntityId,
    target: &CollisionTarget,
) -> Result<(), SimError> {
    let Some(entity) = registry.get_mut(source) else {
        return Ok(());
    };

    let velocity = entity.require_velocity()?;
    let bounds = entity.require_bounds()?;

    let Some(orientation) = orient(&bounds, &target.bounds) else {
        log::warn!(
            "Unresolved collision: {} {} overlaps {} {} with no separating axis",
            entity.kind,
            entity.id,
            target.kind,
            target.id
        );
        entity.position = Some(bounds.min + velocity);
        return Ok(());
    };

    entity.velocity = Some(reflect(velocity, orientation));
    entity.position = Some(snap(&bounds, &target.bounds, orientation));

    if !entity.is_ball() {
        return Ok(());
    }
    let damage = entity.damage.unwrap_or(0);

    match target.kind {
        EntityKind::Paddle => events.push(GameEvent::HitPaddle),
        EntityKind::Brick => {
            events.push(GameEvent::HitBlock);
            damage_brick(registry, session, target.id, damage);
        }
        EntityKind::Wall | EntityKind::Ball => {}
    }

    Ok(())
}

/// Subtract `damage` from a brick's health; destroy and score it at zero.
///
/// Bricks without a health component are indestructible.
fn damage_brick(registry: &mut Registry, session: &mut Session, id: EntityId, damage: i32) {
    let Some(brick) = registry.get_mut(id) else {
        return;
    };
    let Some(health) = brick.health.as_mut() else {
        return;
    };

    *health -= damage;
    if *health <= 0 {
        registry.remove(id);
        session.score += BRICK_SCORE;
        log::debug!("Brick {} destroyed, score {}", id, session.score);
    }
}
