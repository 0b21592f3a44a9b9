//! Position integration and the map contract it reports to.

use crate::behavior::PhysicsBehavior;
use crate::error::CollaboratorError;
use crate::state::{ActorState, CollisionBody};

/// The map an actor moves through.
///
/// `resolve_collisions` runs synchronously after every integration step and
/// may rewrite the body's position. What it does beyond that is up to the map.
pub trait World {
    fn resolve_collisions(&mut self, body: &mut CollisionBody<'_>)
        -> Result<(), CollaboratorError>;
}

/// A map with nothing in it. Every move stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMap;

impl World for OpenMap {
    fn resolve_collisions(
        &mut self,
        _body: &mut CollisionBody<'_>,
    ) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Explicit-Euler integration on integer coordinates: one velocity step per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kinematics;

impl Kinematics {
    pub fn new() -> Self {
        Self
    }
}

impl PhysicsBehavior for Kinematics {
    fn update(
        &mut self,
        state: &mut ActorState,
        world: &mut dyn World,
    ) -> Result<(), CollaboratorError> {
        let previous = state.position;
        // Saturates at the edge of the i32 range instead of wrapping.
        state.position = previous.saturating_add(state.velocity);
        log::trace!("integrated position {}", state.position);
        // Always consulted, even at rest.
        world.resolve_collisions(&mut CollisionBody::new(state, previous))
    }
}
