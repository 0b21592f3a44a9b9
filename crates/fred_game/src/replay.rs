//! Recorded key sequences, played back one signal per tick.

use std::path::Path;

use fred_core::Signal;
use serde::Deserialize;

use crate::load::{read_json, LoadError};

/// Upper bound on a single frame's `repeat`.
pub const MAX_REPEAT: u32 = 100_000;
/// Upper bound on the ticks a whole replay expands to.
pub const MAX_TICKS: u64 = 1_000_000;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayFrame {
    /// Raw key name; anything unrecognized plays back as no input.
    #[serde(default)]
    pub key: Signal,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl ReplaySequence {
    pub fn expanded_signals(&self) -> Vec<Signal> {
        let mut out = Vec::new();
        for frame in &self.frames {
            for _ in 0..frame.repeat.max(1) {
                out.push(frame.key);
            }
        }
        out
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, LoadError> {
    let replay: ReplaySequence = read_json(path)?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplaySequence) -> Result<(), LoadError> {
    if replay.frames.is_empty() {
        return Err(LoadError::invalid("replay", "frames list is empty"));
    }

    let mut ticks: u64 = 0;
    for (index, frame) in replay.frames.iter().enumerate() {
        if frame.repeat > MAX_REPEAT {
            return Err(LoadError::invalid(
                "replay",
                format!(
                    "frame {} repeats {} times, limit is {}",
                    index, frame.repeat, MAX_REPEAT
                ),
            ));
        }
        ticks += u64::from(frame.repeat.max(1));
    }
    if ticks > MAX_TICKS {
        return Err(LoadError::invalid(
            "replay",
            format!("replay expands to {} ticks, limit is {}", ticks, MAX_TICKS),
        ));
    }
    Ok(())
}

const fn default_repeat() -> u32 {
    1
}
