use fred_core::{CollaboratorError, Drawable, SpriteSet};

use crate::config::SpriteNames;

/// Headless stand-in for a textured sprite: every draw becomes a log line.
#[derive(Debug, Clone)]
pub struct LogSprite {
    name: String,
    draws: u64,
}

impl LogSprite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            draws: 0,
        }
    }
}

impl Drawable for LogSprite {
    fn draw(&mut self, x: i32, y: i32) -> Result<(), CollaboratorError> {
        self.draws += 1;
        log::info!("draw {} at ({}, {}) [#{}]", self.name, x, y, self.draws);
        Ok(())
    }
}

pub fn frog_sprites(names: &SpriteNames) -> SpriteSet {
    SpriteSet::new(
        LogSprite::new(&names.idle),
        LogSprite::new(&names.left),
        LogSprite::new(&names.right),
    )
}
