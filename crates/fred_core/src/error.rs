use thiserror::Error;

/// The three behavior slots every actor must fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    Input,
    Physics,
    Graphics,
}

impl BehaviorKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Physics => "physics",
            Self::Graphics => "graphics",
        }
    }
}

impl std::fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Invalid actor configuration, rejected before the actor exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    #[error("actor is missing its {0} behavior")]
    MissingBehavior(BehaviorKind),
    #[error("acceleration must be > 0, got {0}")]
    InvalidAcceleration(i32),
}

/// Which external collaborator raised a [`CollaboratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    InputSource,
    Map,
    Drawable,
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InputSource => "input source",
            Self::Map => "map",
            Self::Drawable => "drawable",
        })
    }
}

/// Failure raised by a collaborator mid-tick.
///
/// Behaviors hand it back untouched; `Actor::update` returns it as-is and
/// skips the rest of the tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{collaborator} failed: {detail}")]
pub struct CollaboratorError {
    pub collaborator: Collaborator,
    pub detail: String,
}

impl CollaboratorError {
    pub fn new(collaborator: Collaborator, detail: impl Into<String>) -> Self {
        Self {
            collaborator,
            detail: detail.into(),
        }
    }
}
