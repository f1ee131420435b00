//! Per-tick simulation module
//!
//! All gameplay logic lives here:
//! - One tick per external frame callback, no internal timing
//! - Stable iteration order (registry insertion order)
//! - No rendering or audio dependencies; effects are queued as events

pub mod aabb;
pub mod collision;
pub mod entity;
pub mod error;
pub mod lifecycle;
pub mod movement;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, World};
pub use collision::{CollisionTarget, Orientation, find_target, orient, resolve};
pub use entity::{BallState, EdgeFlags, Entity, EntityId, EntityKind, SpriteId};
pub use error::SimError;
pub use lifecycle::{LifecycleOutcome, update_lifecycle};
pub use movement::{follow_paddle, launch_balls, move_entities, steer_paddle};
pub use registry::Registry;
pub use state::{GameEvent, GameState, Hud, Session};
pub use tick::{TickInput, tick};
