use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{ExtraRole, Player, PlayerId, Role};
use crate::rules::evaluate_win;
use crate::session::{Outcome, Phase, RoundEvent, Session};
use crate::topic::Topic;

/// What a player learns about the topic when their card is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Knowledge {
    /// Plain agents see the full topic
    Word { category: String, word: String },
    /// Outsiders see the category when hints are on
    Category { category: String },
    /// Outsiders without hints
    Nothing,
}

/// The private screen shown to one player during role reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCard {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub extra_role: ExtraRole,
    pub knowledge: Knowledge,
    /// Names of the other imposters, only filled when teaming is on
    pub allies: Vec<String>,
    /// 1-based position in the reveal sequence
    pub position: usize,
    pub total: usize,
}

/// What the table is told about an eliminated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Disclosure {
    Revealed {
        role: Role,
        extra_role: ExtraRole,
        imposters_left: usize,
        agents_left: usize,
    },
    Undisclosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationReport {
    pub player_id: PlayerId,
    pub name: String,
    pub disclosure: Disclosure,
}

/// Result of one vote, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Skipped,
    Eliminated(EliminationReport),
}

/// Owns a live [`Session`] and exposes the only operations that mutate it.
///
/// Every operation checks the phase first and leaves the session untouched
/// when it fails.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use imposter_engine::builder::SessionBuilder;
/// use imposter_engine::engine::SessionEngine;
/// use imposter_engine::session::{Phase, Winner};
/// use imposter_engine::settings::GameSettings;
/// use imposter_engine::shuffle::FixedShuffler;
/// use imposter_engine::topic::{FixedTopic, Topic};
///
/// # async fn demo() -> Result<(), imposter_engine::errors::GameError> {
/// let provider = Arc::new(FixedTopic(Topic::new("Zoo", "Lion")));
/// // Seat 2 ("Cy") becomes the imposter
/// let mut builder = SessionBuilder::new(provider, Box::new(FixedShuffler::new(vec![2, 0, 1, 3])));
/// let names: Vec<String> = ["Ann", "Bo", "Cy", "Di"].iter().map(|s| s.to_string()).collect();
///
/// let mut engine = SessionEngine::new(builder.build(&names, GameSettings::default()).await?);
/// while engine.phase() == Phase::RoleReveal {
///     engine.acknowledge_reveal()?;
/// }
///
/// let cy = engine.find_player("Cy")?;
/// engine.eliminate(Some(&cy))?;
/// assert_eq!(engine.acknowledge()?, Phase::GameOver);
/// assert_eq!(engine.outcome().map(|o| o.winner), Some(Winner::Agents));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SessionEngine {
    session: Session,
    /// Decided outcome waiting for the result screen to be acknowledged
    pending: Option<Outcome>,
    last_result: Option<RoundResult>,
}

impl SessionEngine {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            pending: None,
            last_result: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn phase(&self) -> Phase {
        self.session.phase
    }
    pub fn players(&self) -> &[Player] {
        &self.session.players
    }
    pub fn topic(&self) -> &Topic {
        &self.session.topic
    }
    pub fn round(&self) -> u32 {
        self.session.round
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.session.outcome
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.session.players.iter().filter(|p| p.is_alive())
    }

    /// Result of the most recent vote, if any.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    fn require(&self, phase: Phase, operation: &'static str) -> Result<(), GameError> {
        if self.session.phase != phase {
            return Err(GameError::InvalidPhase {
                operation,
                phase: self.session.phase,
            });
        }
        Ok(())
    }

    /// Card for the player whose turn it is to look at the device.
    pub fn current_reveal(&self) -> Result<RoleCard, GameError> {
        self.require(Phase::RoleReveal, "show a role card")?;
        let s = &self.session;
        let player = &s.players[s.reveal_index];

        let outsider = player.is_imposter() || player.is_jester();
        let knowledge = if !outsider {
            Knowledge::Word {
                category: s.topic.category.clone(),
                word: s.topic.word.clone(),
            }
        } else if s.settings.outsider_category_hint {
            Knowledge::Category {
                category: s.topic.category.clone(),
            }
        } else {
            Knowledge::Nothing
        };

        let allies = if player.is_imposter() && s.settings.imposter_teaming {
            s.players
                .iter()
                .filter(|p| p.is_imposter() && p.id() != player.id())
                .map(|p| p.name().to_string())
                .collect()
        } else {
            Vec::new()
        };

        Ok(RoleCard {
            player_id: player.id(),
            name: player.name().to_string(),
            role: player.role(),
            extra_role: player.extra_role(),
            knowledge,
            allies,
            position: s.reveal_index + 1,
            total: s.players.len(),
        })
    }

    /// Marks the current card as seen; after the last player the first round starts.
    pub fn acknowledge_reveal(&mut self) -> Result<Phase, GameError> {
        self.require(Phase::RoleReveal, "advance the reveal")?;
        self.session.reveal_index += 1;
        if self.session.reveal_index >= self.session.players.len() {
            self.session.phase = Phase::Round;
            tracing::debug!(round = self.session.round, "all roles revealed, round starts");
        }
        Ok(self.session.phase)
    }

    /// Resolves the vote of the current round. `None` skips the vote.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPhase`] outside [`Phase::Round`]
    /// - [`GameError::UnknownPlayer`] if `target` is not an alive player
    pub fn eliminate(&mut self, target: Option<&PlayerId>) -> Result<RoundResult, GameError> {
        self.require(Phase::Round, "eliminate")?;
        let round = self.session.round;

        let Some(id) = target else {
            self.session.history.push(RoundEvent {
                round,
                eliminated: None,
            });
            self.pending = None;
            self.session.phase = Phase::RoundResult;
            self.last_result = Some(RoundResult::Skipped);
            tracing::info!(round, "vote skipped");
            return Ok(RoundResult::Skipped);
        };

        let idx = self
            .session
            .players
            .iter()
            .position(|p| p.id() == *id && p.is_alive())
            .ok_or_else(|| GameError::UnknownPlayer {
                target: id.to_string(),
            })?;
        self.session.players[idx].eliminate();

        let players = &self.session.players;
        let eliminated = &players[idx];
        let winner = evaluate_win(players, eliminated);
        self.pending = winner.map(|winner| Outcome {
            winner,
            round,
            decided_by: Some(*id),
        });

        let disclosure = if self.session.settings.reveal_role_on_elimination {
            Disclosure::Revealed {
                role: eliminated.role(),
                extra_role: eliminated.extra_role(),
                imposters_left: self.session.live_imposters(),
                agents_left: self.session.live_agents(),
            }
        } else {
            Disclosure::Undisclosed
        };
        let report = EliminationReport {
            player_id: *id,
            name: eliminated.name().to_string(),
            disclosure,
        };

        tracing::info!(
            round,
            player = %report.name,
            decided = winner.is_some(),
            "player eliminated"
        );

        self.session.history.push(RoundEvent {
            round,
            eliminated: Some(*id),
        });
        self.session.phase = Phase::RoundResult;
        let result = RoundResult::Eliminated(report);
        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Leaves the result screen: ends the game if the last vote decided it,
    /// otherwise starts the next round.
    pub fn acknowledge(&mut self) -> Result<Phase, GameError> {
        self.require(Phase::RoundResult, "acknowledge a round result")?;
        match self.pending.take() {
            Some(outcome) => {
                self.session.outcome = Some(outcome);
                self.session.phase = Phase::GameOver;
                tracing::info!(
                    winner = %outcome.winner,
                    round = outcome.round,
                    "game over"
                );
            }
            None => {
                self.session.round += 1;
                self.session.phase = Phase::Round;
                tracing::debug!(round = self.session.round, "next round");
            }
        }
        Ok(self.session.phase)
    }

    /// Resolves a presentation-layer target to an alive player.
    ///
    /// Accepts a 1-based seat number as listed in [`Self::players`] or an
    /// exact name. An alive seat wins over a player whose name is that number.
    pub fn find_player(&self, target: &str) -> Result<PlayerId, GameError> {
        let target = target.trim();
        let players = &self.session.players;
        let by_seat = target
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| players.get(i))
            .filter(|p| p.is_alive());
        by_seat
            .or_else(|| players.iter().find(|p| p.is_alive() && p.name() == target))
            .map(|p| p.id())
            .ok_or_else(|| GameError::UnknownPlayer {
                target: target.to_string(),
            })
    }

    /// Discards the session and hands back the roster names in seat order,
    /// ready to pre-fill the next game.
    pub fn reset(self) -> Vec<String> {
        tracing::debug!(phase = %self.session.phase, "session discarded");
        self.session
            .players
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }
}
