//! The secret topic and the contract for whatever supplies it.
//!
//! The engine never generates words itself. It asks a [`TopicProvider`] once
//! per session and trusts the answer; providers must absorb their own
//! failures and fall back to a locally known topic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector text requesting a random category from the local word bank.
pub const LOCAL_RANDOM: &str = "LOCAL_RANDOM";

/// The secret shared by all plain agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    /// Broad category, shown to outsiders when hints are enabled
    pub category: String,
    /// The secret word itself
    pub word: String,
}

impl Topic {
    pub fn new(category: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            word: word.into(),
        }
    }
}

/// What kind of topic the players asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicSelector {
    /// Provider picks any local category
    LocalRandom,
    /// Provider picks an open-ended topic of its own
    Generated,
    /// A local category name or a free-text custom request
    Named(String),
}

impl TopicSelector {
    /// Interprets selector text the way the settings store it.
    ///
    /// ```
    /// use imposter_engine::topic::TopicSelector;
    ///
    /// assert_eq!(TopicSelector::parse("LOCAL_RANDOM"), TopicSelector::LocalRandom);
    /// assert_eq!(TopicSelector::parse("   "), TopicSelector::Generated);
    /// assert_eq!(
    ///     TopicSelector::parse(" Zoo "),
    ///     TopicSelector::Named("Zoo".to_string())
    /// );
    /// ```
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            TopicSelector::Generated
        } else if trimmed.eq_ignore_ascii_case(LOCAL_RANDOM) {
            TopicSelector::LocalRandom
        } else {
            TopicSelector::Named(trimmed.to_string())
        }
    }
}

impl fmt::Display for TopicSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicSelector::LocalRandom => f.write_str("local random"),
            TopicSelector::Generated => f.write_str("generated"),
            TopicSelector::Named(name) => write!(f, "'{}'", name),
        }
    }
}

/// Source of the secret topic for a new session.
///
/// `fetch_topic` is infallible by contract: an implementation that talks to
/// anything unreliable must substitute a local topic on failure.
#[async_trait]
pub trait TopicProvider: Send + Sync {
    async fn fetch_topic(&self, selector: &TopicSelector) -> Topic;

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}

/// Provider that always answers with the same topic. Useful for tests and demos.
#[derive(Debug, Clone)]
pub struct FixedTopic(pub Topic);

#[async_trait]
impl TopicProvider for FixedTopic {
    async fn fetch_topic(&self, _selector: &TopicSelector) -> Topic {
        self.0.clone()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
