//! Component-composed game actor.
//!
//! An [`Actor`] owns one [`ActorState`] and exactly one input, physics and
//! graphics behavior. Each tick it hands the state to them in that order:
//!
//!   1. input polls an [`InputSource`] and nudges velocity
//!   2. physics integrates velocity and asks the [`World`] to resolve collisions
//!   3. graphics picks a [`Pose`] from horizontal velocity and draws it
//!
//! Behaviors are swappable trait objects and never keep state between ticks.

pub mod actor;
pub mod behavior;
pub mod error;
pub mod graphics;
pub mod input;
pub mod physics;
pub mod state;

pub use actor::{Actor, ActorBuilder};
pub use behavior::{GraphicsBehavior, InputBehavior, PhysicsBehavior};
pub use error::{ActorError, BehaviorKind, Collaborator, CollaboratorError};
pub use graphics::{Drawable, Pose, SpriteGraphics, SpriteSet};
pub use input::{InputSource, Key, KeyInput, KeyboardState, ScriptedInput, Signal};
pub use physics::{Kinematics, OpenMap, World};
pub use state::{ActorState, CollisionBody, DEFAULT_ACCELERATION};
