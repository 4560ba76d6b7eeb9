use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque player identifier, stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary allegiance of a player.
/// Agents know the secret word, imposters only (at most) its category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary player holding the secret word
    Agent,
    /// Player who does not know the word and wins by reaching parity
    Imposter,
}

/// Optional role layered on top of [`Role`]. Only ever given to a non-imposter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraRole {
    #[default]
    None,
    /// Wins alone by being voted out
    Jester,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Agent => f.write_str("Agent"),
            Role::Imposter => f.write_str("Imposter"),
        }
    }
}

/// A seated player in a session.
///
/// Role and extra role are fixed when the player is created; the only
/// mutable state is the alive flag, which can go from `true` to `false`
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    role: Role,
    extra_role: ExtraRole,
    alive: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role, extra_role: ExtraRole) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            role,
            extra_role,
            alive: true,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn extra_role(&self) -> ExtraRole {
        self.extra_role
    }
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_imposter(&self) -> bool {
        self.role == Role::Imposter
    }

    pub fn is_jester(&self) -> bool {
        self.extra_role == ExtraRole::Jester
    }

    /// Marks the player eliminated. Returns `false` if they already were.
    pub(crate) fn eliminate(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        true
    }
}
