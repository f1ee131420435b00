//! Entity and component model
//!
//! An entity is an identity plus a kind tag and a fixed set of optional
//! component slots. Systems test slots for presence; a missing slot means the
//! capability is absent, not an error, unless an operation requires it.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::error::SimError;

/// Unique entity identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_base36(self.0))
    }
}

/// Entity type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Paddle,
    Ball,
    Brick,
    Wall,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Paddle => "paddle",
            EntityKind::Ball => "ball",
            EntityKind::Brick => "brick",
            EntityKind::Wall => "wall",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-edge policy flags (used for both clamping and bouncing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeFlags {
    pub const ALL: Self = Self {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    /// Every edge except the bottom one (balls fall out through the bottom)
    pub const OPEN_BOTTOM: Self = Self {
        top: true,
        bottom: false,
        left: true,
        right: true,
    };
}

/// Ball coupling to the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Riding on the paddle, waiting for launch input
    Attached,
    /// Free-moving
    Launched,
}

/// Opaque handle to a visual asset, resolved by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Paddle,
    Ball,
    Brick,
}

/// A game object with optional components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left anchor
    pub position: Option<Vec2>,
    /// Width and height
    pub size: Option<Vec2>,
    /// Per-tick displacement
    pub velocity: Option<Vec2>,
    /// Eligible as a collision target
    pub collides: bool,
    /// Edges that reverse velocity when crossed
    pub bounce: Option<EdgeFlags>,
    /// Edges that stop the entity at the world boundary
    pub clamp: Option<EdgeFlags>,
    pub health: Option<i32>,
    pub damage: Option<i32>,
    pub sprite: Option<SpriteId>,
    /// Attachment state (balls only)
    pub ball_state: Option<BallState>,
}

impl Entity {
    /// Bare entity with no components
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            position: None,
            size: None,
            velocity: None,
            collides: false,
            bounce: None,
            clamp: None,
            health: None,
            damage: None,
            sprite: None,
            ball_state: None,
        }
    }

    /// Current bounding box, if the entity has both position and size
    pub fn bounds(&self) -> Option<Aabb> {
        match (self.position, self.size) {
            (Some(position), Some(size)) => Some(Aabb::from_position_size(position, size)),
            _ => None,
        }
    }

    /// Bounding box after moving by `velocity`, without committing the move
    pub fn projected_bounds(&self, velocity: Vec2) -> Option<Aabb> {
        self.bounds().map(|aabb| aabb.translated(velocity))
    }

    /// Bounding box, or an invariant error naming the missing component
    pub fn require_bounds(&self) -> Result<Aabb, SimError> {
        if self.position.is_none() {
            return Err(self.missing("position"));
        }
        self.bounds().ok_or_else(|| self.missing("size"))
    }

    pub fn require_velocity(&self) -> Result<Vec2, SimError> {
        self.velocity.ok_or_else(|| self.missing("velocity"))
    }

    pub fn is_ball(&self) -> bool {
        self.kind == EntityKind::Ball
    }

    pub fn is_attached(&self) -> bool {
        self.ball_state == Some(BallState::Attached)
    }

    /// Add to velocity (no-op without a velocity component)
    pub fn add_velocity(&mut self, delta: Vec2) {
        if let Some(velocity) = self.velocity.as_mut() {
            *velocity += delta;
        }
    }

    /// Subtract from velocity (no-op without a velocity component)
    pub fn subtract_velocity(&mut self, delta: Vec2) {
        if let Some(velocity) = self.velocity.as_mut() {
            *velocity -= delta;
        }
    }

    /// Overwrite velocity (no-op without a velocity component)
    pub fn set_velocity(&mut self, value: Vec2) {
        if let Some(velocity) = self.velocity.as_mut() {
            *velocity = value;
        }
    }

    fn missing(&self, component: &'static str) -> SimError {
        SimError::MissingComponent {
            id: self.id,
            kind: self.kind,
            component,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_require_position_and_size() {
        let mut entity = Entity::new(EntityId(1), EntityKind::Wall);
        assert!(entity.bounds().is_none());

        entity.size = Some(Vec2::new(10.0, 4.0));
        assert!(entity.bounds().is_none());
        assert!(matches!(
            entity.require_bounds(),
            Err(SimError::MissingComponent { component: "position", .. })
        ));

        entity.position = Some(Vec2::new(2.0, 3.0));
        let aabb = entity.require_bounds().unwrap();
        assert_eq!(aabb.max, Vec2::new(12.0, 7.0));
    }

    #[test]
    fn test_projected_bounds_do_not_move_entity() {
        let mut entity = Entity::new(EntityId(7), EntityKind::Ball);
        entity.position = Some(Vec2::new(10.0, 10.0));
        entity.size = Some(Vec2::new(12.0, 12.0));

        let projected = entity.projected_bounds(Vec2::new(5.0, -5.0)).unwrap();
        assert_eq!(projected.min, Vec2::new(15.0, 5.0));
        assert_eq!(entity.position, Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_velocity_helpers() {
        let mut entity = Entity::new(EntityId(3), EntityKind::Ball);
        entity.add_velocity(Vec2::ONE);
        assert!(entity.velocity.is_none());

        entity.velocity = Some(Vec2::ZERO);
        entity.add_velocity(Vec2::new(2.0, 3.0));
        entity.subtract_velocity(Vec2::new(1.0, 1.0));
        assert_eq!(entity.velocity, Some(Vec2::new(1.0, 2.0)));

        entity.set_velocity(Vec2::new(-4.0, 0.0));
        assert_eq!(entity.velocity, Some(Vec2::new(-4.0, 0.0)));
    }

    #[test]
    fn test_id_display_is_base36() {
        assert_eq!(EntityId(36 * 36).to_string(), "100");
    }
}
