use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::{Player, PlayerId};
use crate::settings::GameSettings;
use crate::topic::Topic;

/// Stage of a session's state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players privately view their roles one after another
    RoleReveal,
    /// Open discussion, ends with a vote
    Round,
    /// Showing what the last vote did
    RoundResult,
    /// A win condition fired; only reset leaves this state
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::RoleReveal => "role reveal",
            Phase::Round => "round",
            Phase::RoundResult => "round result",
            Phase::GameOver => "game over",
        };
        f.write_str(s)
    }
}

/// Who won. The jester's solo win is its own outcome.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Agents,
    Imposters,
    Jester,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Agents => f.write_str("Agents"),
            Winner::Imposters => f.write_str("Imposters"),
            Winner::Jester => f.write_str("Jester"),
        }
    }
}

/// Terminal result of a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Winner,
    /// 1-based round in which the deciding vote happened
    pub round: u32,
    /// Player whose elimination ended the game
    pub decided_by: Option<PlayerId>,
}

/// One resolved vote: who went out in which round, or `None` for a skip.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundEvent {
    pub round: u32,
    pub eliminated: Option<PlayerId>,
}

/// One complete play-through, from role assignment to game over.
///
/// The player set, roles and topic are fixed at construction. Only alive
/// flags, the phase, the reveal cursor, the round counter, the history and
/// the outcome change afterwards, and only through
/// [`crate::engine::SessionEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) players: Vec<Player>,
    pub(crate) topic: Topic,
    pub(crate) settings: GameSettings,
    pub(crate) phase: Phase,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) round: u32,
    pub(crate) reveal_index: usize,
    pub(crate) history: Vec<RoundEvent>,
}

impl Session {
    pub(crate) fn new(players: Vec<Player>, topic: Topic, settings: GameSettings) -> Self {
        Self {
            players,
            topic,
            settings,
            phase: Phase::RoleReveal,
            outcome: None,
            round: 1,
            reveal_index: 0,
            history: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn topic(&self) -> &Topic {
        &self.topic
    }
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn history(&self) -> &[RoundEvent] {
        &self.history
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == *id)
    }

    pub fn live_imposters(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.is_alive() && p.is_imposter())
            .count()
    }

    /// Alive non-imposters, a living jester included.
    pub fn live_agents(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.is_alive() && !p.is_imposter())
            .count()
    }
}
