//! The actor: one state record plus one behavior of each kind, driven in a
//! fixed Input -> Physics -> Graphics order once per tick.

use crate::behavior::{GraphicsBehavior, InputBehavior, PhysicsBehavior};
use crate::error::{ActorError, BehaviorKind, CollaboratorError};
use crate::physics::World;
use crate::state::{ActorState, DEFAULT_ACCELERATION};

pub struct Actor {
    state: ActorState,
    input: Box<dyn InputBehavior>,
    physics: Box<dyn PhysicsBehavior>,
    graphics: Box<dyn GraphicsBehavior>,
}

impl Actor {
    pub fn builder() -> ActorBuilder {
        ActorBuilder::new()
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    /// Run one tick. The first collaborator failure ends the tick and is
    /// returned unchanged; stages after it do not run, stages before it keep
    /// their effects.
    pub fn update(&mut self, world: &mut dyn World) -> Result<(), CollaboratorError> {
        self.input.update(&mut self.state)?;
        self.physics.update(&mut self.state, world)?;
        self.graphics.update(&self.state)
    }
}

/// Collects the behaviors for an [`Actor`] and refuses to build an incomplete one.
pub struct ActorBuilder {
    acceleration: i32,
    input: Option<Box<dyn InputBehavior>>,
    physics: Option<Box<dyn PhysicsBehavior>>,
    graphics: Option<Box<dyn GraphicsBehavior>>,
}

impl ActorBuilder {
    pub fn new() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            input: None,
            physics: None,
            graphics: None,
        }
    }

    pub fn acceleration(mut self, acceleration: i32) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn input(mut self, input: impl InputBehavior + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn physics(mut self, physics: impl PhysicsBehavior + 'static) -> Self {
        self.physics = Some(Box::new(physics));
        self
    }

    pub fn graphics(mut self, graphics: impl GraphicsBehavior + 'static) -> Self {
        self.graphics = Some(Box::new(graphics));
        self
    }

    pub fn build(self) -> Result<Actor, ActorError> {
        if self.acceleration <= 0 {
            return Err(ActorError::InvalidAcceleration(self.acceleration));
        }
        let input = self
            .input
            .ok_or(ActorError::MissingBehavior(BehaviorKind::Input))?;
        let physics = self
            .physics
            .ok_or(ActorError::MissingBehavior(BehaviorKind::Physics))?;
        let graphics = self
            .graphics
            .ok_or(ActorError::MissingBehavior(BehaviorKind::Graphics))?;

        log::debug!("actor built with acceleration {}", self.acceleration);
        Ok(Actor {
            state: ActorState::new(self.acceleration),
            input,
            physics,
            graphics,
        })
    }
}

impl Default for ActorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
