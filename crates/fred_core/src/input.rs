//! Discrete input signals, the sources that produce them, and the input
//! behavior that turns one signal per tick into a velocity change.
//!
//! Only a single signal is read per tick, so at most one velocity axis changes
//! per tick. Holding opposite keys does not cancel out: the first key in
//! priority order (Up, Left, Down, Right) wins.

use std::collections::{HashSet, VecDeque};

use serde::Deserialize;

use crate::behavior::InputBehavior;
use crate::error::CollaboratorError;
use crate::state::ActorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    W,
    A,
    S,
    D,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Signal {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Signal {
    /// Order in which held keys are consulted when several are down.
    pub const PRIORITY: &'static [Signal] =
        &[Signal::Up, Signal::Left, Signal::Down, Signal::Right];

    /// Decode a raw key name. Anything unrecognized is `None`, never an error.
    pub fn from_key_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "w" | "up" => Self::Up,
            "a" | "left" => Self::Left,
            "s" | "down" => Self::Down,
            "d" | "right" => Self::Right,
            _ => Self::None,
        }
    }
}

impl From<Key> for Signal {
    fn from(key: Key) -> Self {
        match key {
            Key::Up | Key::W => Self::Up,
            Key::Left | Key::A => Self::Left,
            Key::Down | Key::S => Self::Down,
            Key::Right | Key::D => Self::Right,
            Key::Space | Key::Escape => Self::None,
        }
    }
}

impl From<String> for Signal {
    fn from(name: String) -> Self {
        Self::from_key_name(&name)
    }
}

/// Something that can be asked, once per tick, which direction is requested.
#[cfg_attr(test, mockall::automock)]
pub trait InputSource {
    fn poll_key(&mut self) -> Result<Signal, CollaboratorError>;
}

/// Held-key tracking fed by platform key events.
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// The single signal the held keys map to this tick.
    pub fn current_signal(&self) -> Signal {
        Signal::PRIORITY
            .iter()
            .copied()
            .find(|signal| self.held.iter().any(|&key| Signal::from(key) == *signal))
            .unwrap_or(Signal::None)
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for KeyboardState {
    fn poll_key(&mut self) -> Result<Signal, CollaboratorError> {
        Ok(self.current_signal())
    }
}

/// Plays back a fixed list of signals, one per poll, then `Signal::None` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<Signal>,
}

impl ScriptedInput {
    pub fn new(signals: impl IntoIterator<Item = Signal>) -> Self {
        Self {
            pending: signals.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Signal, CollaboratorError> {
        Ok(self.pending.pop_front().unwrap_or(Signal::None))
    }
}

/// Applies `acceleration` to one velocity axis according to the polled signal.
pub struct KeyInput<S> {
    source: S,
}

impl<S: InputSource> KeyInput<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: InputSource> InputBehavior for KeyInput<S> {
    fn update(&mut self, state: &mut ActorState) -> Result<(), CollaboratorError> {
        let signal = self.source.poll_key()?;
        let accel = state.acceleration();
        // Saturates at the i32 range instead of wrapping.
        let velocity = &mut state.velocity;
        match signal {
            Signal::Up => velocity.y = velocity.y.saturating_sub(accel),
            Signal::Down => velocity.y = velocity.y.saturating_add(accel),
            Signal::Left => velocity.x = velocity.x.saturating_sub(accel),
            Signal::Right => velocity.x = velocity.x.saturating_add(accel),
            Signal::None => {}
        }
        log::trace!("input {:?} -> velocity {}", signal, state.velocity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Collaborator;
    use glam::IVec2;

    fn step(signal: Signal, state: &mut ActorState) {
        let mut input = KeyInput::new(ScriptedInput::new([signal]));
        input.update(state).expect("scripted input never fails");
    }

    #[test]
    fn each_signal_moves_exactly_one_axis() {
        let cases = [
            (Signal::Up, IVec2::new(0, -1)),
            (Signal::Down, IVec2::new(0, 1)),
            (Signal::Left, IVec2::new(-1, 0)),
            (Signal::Right, IVec2::new(1, 0)),
            (Signal::None, IVec2::ZERO),
        ];
        for (signal, expected) in cases {
            let mut state = ActorState::default();
            step(signal, &mut state);
            assert_eq!(state.velocity, expected, "signal {:?}", signal);
            assert_eq!(state.position, IVec2::ZERO);
        }
    }

    #[test]
    fn right_then_up_accumulates() {
        let mut state = ActorState::default();
        let mut input = KeyInput::new(ScriptedInput::new([Signal::Right, Signal::Up]));
        input.update(&mut state).unwrap();
        assert_eq!(state.velocity, IVec2::new(1, 0));
        input.update(&mut state).unwrap();
        assert_eq!(state.velocity, IVec2::new(1, -1));
    }

    #[test]
    fn delta_scales_with_acceleration() {
        let mut state = ActorState::new(3);
        state.velocity = IVec2::new(4, 4);
        step(Signal::Left, &mut state);
        assert_eq!(state.velocity, IVec2::new(1, 4));
    }

    #[test]
    fn huge_acceleration_saturates_velocity() {
        let mut state = ActorState::new(i32::MAX);
        let mut input = KeyInput::new(ScriptedInput::new([
            Signal::Right,
            Signal::Right,
            Signal::Up,
            Signal::Up,
            Signal::Up,
        ]));
        for _ in 0..5 {
            input.update(&mut state).unwrap();
        }
        assert_eq!(state.velocity, IVec2::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn unknown_key_names_decode_to_none() {
        assert_eq!(Signal::from_key_name("w"), Signal::Up);
        assert_eq!(Signal::from_key_name("A"), Signal::Left);
        assert_eq!(Signal::from_key_name(" down "), Signal::Down);
        assert_eq!(Signal::from_key_name("right"), Signal::Right);
        assert_eq!(Signal::from_key_name("space"), Signal::None);
        assert_eq!(Signal::from_key_name(""), Signal::None);
        assert_eq!(Signal::from_key_name("jump"), Signal::None);
    }

    #[test]
    fn input_polls_source_once_per_update() {
        let mut source = MockInputSource::new();
        source
            .expect_poll_key()
            .times(1)
            .returning(|| Ok(Signal::Down));

        let mut state = ActorState::default();
        let mut input = KeyInput::new(source);
        input.update(&mut state).unwrap();
        assert_eq!(state.velocity, IVec2::new(0, 1));
    }

    #[test]
    fn source_failure_leaves_velocity_untouched() {
        let mut source = MockInputSource::new();
        source
            .expect_poll_key()
            .returning(|| Err(CollaboratorError::new(Collaborator::InputSource, "unplugged")));

        let mut state = ActorState::default();
        let mut input = KeyInput::new(source);
        let err = input.update(&mut state).unwrap_err();
        assert_eq!(err.collaborator, Collaborator::InputSource);
        assert_eq!(state.velocity, IVec2::ZERO);
    }

    #[test]
    fn keyboard_reports_nothing_when_idle() {
        let mut keyboard = KeyboardState::new();
        assert_eq!(keyboard.poll_key().unwrap(), Signal::None);
    }

    #[test]
    fn keyboard_key_up_releases_key() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down(Key::D);
        assert!(keyboard.is_held(Key::D));
        assert_eq!(keyboard.current_signal(), Signal::Right);

        keyboard.key_up(Key::D);
        assert!(!keyboard.is_held(Key::D));
        assert_eq!(keyboard.current_signal(), Signal::None);
    }

    #[test]
    fn keyboard_opposite_keys_do_not_cancel() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down(Key::Right);
        keyboard.key_down(Key::Left);
        // Left outranks Right; the pair never nets out to None.
        assert_eq!(keyboard.current_signal(), Signal::Left);

        keyboard.key_down(Key::W);
        assert_eq!(keyboard.current_signal(), Signal::Up);
    }

    #[test]
    fn keyboard_ignores_non_direction_keys() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down(Key::Space);
        keyboard.key_down(Key::Escape);
        assert_eq!(keyboard.current_signal(), Signal::None);
    }

    #[test]
    fn scripted_input_runs_dry_to_none() {
        let mut script = ScriptedInput::new([Signal::Up]);
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.poll_key().unwrap(), Signal::Up);
        assert_eq!(script.poll_key().unwrap(), Signal::None);
        assert_eq!(script.poll_key().unwrap(), Signal::None);
        assert_eq!(script.remaining(), 0);
    }
}
