use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::GameError;
use crate::topic::LOCAL_RANDOM;

/// Smallest table the game supports.
pub const MIN_PLAYERS: usize = 3;
/// Largest table the game supports.
pub const MAX_PLAYERS: usize = 15;

/// Per-game configuration chosen before roles are dealt.
///
/// Deserialization fills missing fields from [`GameSettings::default`], so
/// partially written settings files stay loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Number of imposters, `1..=(n-1)/2`
    pub imposter_count: usize,
    /// Reserve one non-imposter seat for the jester
    pub jester_enabled: bool,
    /// Disclose the role of an eliminated player
    pub reveal_role_on_elimination: bool,
    /// Imposters learn who the other imposters are
    pub imposter_teaming: bool,
    /// Imposters and the jester see the topic category
    pub outsider_category_hint: bool,
    /// Topic selector text (see [`crate::topic::TopicSelector::parse`])
    pub category: String,
    /// Discussion budget in seconds, 0 for none
    pub timer_secs: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            imposter_count: 1,
            jester_enabled: false,
            reveal_role_on_elimination: true,
            imposter_teaming: false,
            outsider_category_hint: true,
            category: LOCAL_RANDOM.to_string(),
            timer_secs: 0,
        }
    }
}

/// Largest imposter count a presentation layer should offer for `players` seats.
///
/// Never below one, so a slider stays usable before enough players are seated.
pub fn max_imposters(players: usize) -> usize {
    (players.saturating_sub(1) / 2).max(1)
}

impl GameSettings {
    /// Checks `names` and these settings against the table constraints.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] when:
    /// - the player count is outside `MIN_PLAYERS..=MAX_PLAYERS`
    /// - a name is blank or appears twice (case-sensitive, after trimming)
    /// - `imposter_count` is outside `1..=(n-1)/2`
    /// - the jester is enabled but no plain agent would remain beside it
    ///
    /// # Examples
    ///
    /// ```
    /// use imposter_engine::settings::GameSettings;
    ///
    /// let names: Vec<String> = ["Ann", "Bo", "Cy"].iter().map(|s| s.to_string()).collect();
    /// assert!(GameSettings::default().validate(&names).is_ok());
    ///
    /// let crowded = GameSettings { imposter_count: 2, ..GameSettings::default() };
    /// assert!(crowded.validate(&names).is_err());
    /// ```
    pub fn validate(&self, names: &[String]) -> Result<(), GameError> {
        let n = names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            return Err(GameError::config(format!(
                "need between {} and {} players, got {}",
                MIN_PLAYERS, MAX_PLAYERS, n
            )));
        }

        let mut seen = HashSet::with_capacity(n);
        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(GameError::config("player names must not be blank"));
            }
            if !seen.insert(trimmed) {
                return Err(GameError::config(format!(
                    "duplicate player name '{}'",
                    trimmed
                )));
            }
        }

        let max = (n - 1) / 2;
        if self.imposter_count == 0 || self.imposter_count > max {
            return Err(GameError::config(format!(
                "imposter count must be between 1 and {} for {} players, got {}",
                max, n, self.imposter_count
            )));
        }

        if self.jester_enabled && n - self.imposter_count < 2 {
            return Err(GameError::config(
                "jester needs at least one plain agent beside it",
            ));
        }
        Ok(())
    }
}
