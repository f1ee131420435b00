//! Simulation invariant errors

use thiserror::Error;

use super::entity::{EntityId, EntityKind};

/// A programming-level invariant breach inside a tick.
///
/// These abort the operation that hit them and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("{kind} entity {id} is missing its {component} component")]
    MissingComponent {
        id: EntityId,
        kind: EntityKind,
        component: &'static str,
    },

    #[error("session paddle is not in the registry")]
    MissingPaddle,
}
