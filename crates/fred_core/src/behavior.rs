//! The three per-tick capabilities an actor is composed of.
//!
//! Each trait has a single `update` and receives exactly the access its stage
//! needs: input may change velocity, physics may move the actor and talk to the
//! map, graphics only reads. None of them may hold on to the state between
//! calls; all cross-tick data lives in [`ActorState`].

use crate::error::CollaboratorError;
use crate::physics::World;
use crate::state::ActorState;

pub trait InputBehavior {
    fn update(&mut self, state: &mut ActorState) -> Result<(), CollaboratorError>;
}

pub trait PhysicsBehavior {
    fn update(
        &mut self,
        state: &mut ActorState,
        world: &mut dyn World,
    ) -> Result<(), CollaboratorError>;
}

pub trait GraphicsBehavior {
    fn update(&mut self, state: &ActorState) -> Result<(), CollaboratorError>;
}
