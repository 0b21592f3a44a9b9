//! Sprite selection from horizontal velocity.
//!
//! Only `velocity.x` picks the pose. Moving straight up or down draws the idle
//! sprite.

use glam::IVec2;

use crate::behavior::GraphicsBehavior;
use crate::error::CollaboratorError;
use crate::state::ActorState;

/// A visual the graphics behavior can put on screen at a position.
#[cfg_attr(test, mockall::automock)]
pub trait Drawable {
    fn draw(&mut self, x: i32, y: i32) -> Result<(), CollaboratorError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    Idle,
    MovingLeft,
    MovingRight,
}

impl Pose {
    /// Pose for a velocity. `velocity.y` is ignored.
    pub fn from_velocity(velocity: IVec2) -> Self {
        match velocity.x {
            0 => Self::Idle,
            v if v > 0 => Self::MovingRight,
            _ => Self::MovingLeft,
        }
    }
}

/// The three sprites, built once and reused every tick.
pub struct SpriteSet {
    pub idle: Box<dyn Drawable>,
    pub moving_left: Box<dyn Drawable>,
    pub moving_right: Box<dyn Drawable>,
}

impl SpriteSet {
    pub fn new(
        idle: impl Drawable + 'static,
        moving_left: impl Drawable + 'static,
        moving_right: impl Drawable + 'static,
    ) -> Self {
        Self {
            idle: Box::new(idle),
            moving_left: Box::new(moving_left),
            moving_right: Box::new(moving_right),
        }
    }

    fn for_pose(&mut self, pose: Pose) -> &mut dyn Drawable {
        match pose {
            Pose::Idle => self.idle.as_mut(),
            Pose::MovingLeft => self.moving_left.as_mut(),
            Pose::MovingRight => self.moving_right.as_mut(),
        }
    }
}

pub struct SpriteGraphics {
    sprites: SpriteSet,
}

impl SpriteGraphics {
    pub fn new(sprites: SpriteSet) -> Self {
        Self { sprites }
    }
}

impl GraphicsBehavior for SpriteGraphics {
    fn update(&mut self, state: &ActorState) -> Result<(), CollaboratorError> {
        let pose = Pose::from_velocity(state.velocity);
        log::trace!("pose {:?} at {}", pose, state.position);
        self.sprites
            .for_pose(pose)
            .draw(state.position.x, state.position.y)
    }
}
