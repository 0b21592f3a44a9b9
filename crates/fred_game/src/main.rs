//! Fred the Frog -- headless replay driver.
//!
//! Builds the frog from an actor config, loads an optional tile map and a
//! replay file, then runs one tick per replayed key:
//!
//!   1. input pops the next replayed signal and nudges velocity
//!   2. physics moves the frog and lets the map push it back out of walls
//!   3. graphics logs which sprite would be drawn, and where
//!
//! Without `--map` the frog moves through an empty, unbounded world.

mod config;
mod grid_map;
mod load;
mod replay;
mod session;
mod sprite;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fred_core::{OpenMap, ScriptedInput, World};

use config::{load_config_from_path, ActorConfig};
use grid_map::load_map_from_path;
use replay::load_replay_from_path;
use session::{build_frog, run_ticks};

#[derive(Debug, Parser)]
#[command(name = "fred_game", about = "Replays key input through Fred the Frog")]
struct Cli {
    /// Actor config JSON (acceleration, sprite names). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Collision map JSON. Without it nothing blocks movement.
    #[arg(long)]
    map: Option<PathBuf>,
    /// Replay JSON with one key per tick.
    #[arg(long)]
    replay: PathBuf,
    /// Log every tick and collision, not just draws.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    // `try_init` only fails when a logger is already installed.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Fred the Frog starting...");

    let config = match &cli.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("loading actor config {}", path.display()))?,
        None => ActorConfig::default(),
    };

    let replay = load_replay_from_path(&cli.replay)
        .with_context(|| format!("loading replay {}", cli.replay.display()))?;
    let signals = replay.expanded_signals();
    let ticks = signals.len();

    let mut world: Box<dyn World> = match &cli.map {
        Some(path) => {
            let map = load_map_from_path(path)
                .with_context(|| format!("loading map {}", path.display()))?;
            log::info!(
                "Map loaded: {} ({}), {}x{}",
                map.map_id,
                map.version,
                map.width,
                map.height
            );
            Box::new(map)
        }
        None => Box::new(OpenMap),
    };

    let mut frog = build_frog(&config, ScriptedInput::new(signals)).context("building Fred")?;
    run_ticks(&mut frog, world.as_mut(), ticks)
        .context("simulation halted")?;

    let state = frog.state();
    log::info!(
        "Finished {} ticks: position {} velocity {}",
        ticks,
        state.position,
        state.velocity
    );
    Ok(())
}
