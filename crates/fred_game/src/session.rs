use fred_core::{
    Actor, ActorError, CollaboratorError, InputSource, KeyInput, Kinematics, SpriteGraphics,
    World,
};

use crate::config::ActorConfig;
use crate::sprite::frog_sprites;

/// Fred, wired from config: keyboard-style input, integer kinematics, log sprites.
pub fn build_frog(
    config: &ActorConfig,
    input: impl InputSource + 'static,
) -> Result<Actor, ActorError> {
    Actor::builder()
        .acceleration(config.acceleration)
        .input(KeyInput::new(input))
        .physics(Kinematics::new())
        .graphics(SpriteGraphics::new(frog_sprites(&config.sprites)))
        .build()
}

/// Step the actor `ticks` times. Stops at the first failed tick, leaving the
/// actor as that tick left it.
pub fn run_ticks(
    actor: &mut Actor,
    world: &mut dyn World,
    ticks: usize,
) -> Result<(), CollaboratorError> {
    for tick in 0..ticks {
        if let Err(err) = actor.update(world) {
            log::error!("tick {} failed: {}", tick + 1, err);
            return Err(err);
        }
        let state = actor.state();
        log::debug!(
            "tick {}: position {} velocity {}",
            tick + 1,
            state.position,
            state.velocity
        );
    }
    Ok(())
}
