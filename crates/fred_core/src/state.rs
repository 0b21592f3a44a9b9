//! Per-entity mutable state shared by all behaviors of one actor.
//!
//! Coordinates are integer grid units with (0, 0) at the top left and y
//! growing downward. The actor owns exactly one `ActorState`; behaviors only
//! ever borrow it for the duration of a single `update` call.

use glam::IVec2;

pub const DEFAULT_ACCELERATION: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorState {
    pub position: IVec2,
    pub velocity: IVec2,
    acceleration: i32,
}

impl ActorState {
    /// Fresh state at the origin, at rest. Callers validate `acceleration`
    /// before getting here (see `ActorBuilder::build`).
    pub(crate) fn new(acceleration: i32) -> Self {
        Self {
            position: IVec2::ZERO,
            velocity: IVec2::ZERO,
            acceleration,
        }
    }

    pub fn acceleration(&self) -> i32 {
        self.acceleration
    }
}

impl Default for ActorState {
    fn default() -> Self {
        Self::new(DEFAULT_ACCELERATION)
    }
}

/// The view of an actor a map gets while resolving collisions.
///
/// Position may be rewritten (to clamp or undo a move). Velocity and
/// acceleration are read-only through this handle.
pub struct CollisionBody<'a> {
    state: &'a mut ActorState,
    previous: IVec2,
}

impl<'a> CollisionBody<'a> {
    /// `previous` is where the body stood before this tick's integration step.
    pub fn new(state: &'a mut ActorState, previous: IVec2) -> Self {
        Self { state, previous }
    }

    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.state.position = position;
    }

    pub fn velocity(&self) -> IVec2 {
        self.state.velocity
    }

    pub fn acceleration(&self) -> i32 {
        self.state.acceleration
    }

    /// Where the body stood before this tick's integration step.
    pub fn previous_position(&self) -> IVec2 {
        self.previous
    }
}
