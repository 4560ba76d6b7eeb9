//! # imposter-topics: Secret Topic Providers
//!
//! Implementations of [`TopicProvider`] for the imposter engine.
//!
//! ## Core Components
//!
//! - [`wordbank`] - The built-in categories and their words
//! - [`local`] - Offline provider over the word bank
//! - [`gemini`] - Remote generation with local fallback
//! - [`create_provider`] - Factory selecting a provider by kind
//!
//! ## Quick Start
//!
//! ```rust
//! use imposter_engine::topic::{TopicProvider, TopicSelector};
//! use imposter_topics::{create_provider, ProviderKind};
//!
//! # async fn demo() {
//! let provider = create_provider(ProviderKind::Local, Some(42));
//! let topic = provider.fetch_topic(&TopicSelector::parse("Zoo")).await;
//! assert_eq!(topic.category, "Zoo");
//! # }
//! ```
//!
//! ## Provider Kinds
//!
//! - `"local"` - Word bank only, never touches the network
//! - `"gemini"` - Generated topics for open or custom selectors, reading the
//!   key from `GEMINI_API_KEY`

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use imposter_engine::topic::TopicProvider;

pub mod gemini;
pub mod local;
pub mod wordbank;

use gemini::GeminiProvider;
use local::LocalProvider;

/// Which provider implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Local,
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(ProviderKind::Local),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(format!(
                "unknown topic provider '{}' (expected local or gemini)",
                other
            )),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Local => f.write_str("local"),
            ProviderKind::Gemini => f.write_str("gemini"),
        }
    }
}

/// Factory function to create topic providers by kind.
///
/// `seed` fixes the local word-bank draws (also used as the remote
/// provider's fallback); `None` seeds from entropy.
///
/// # Example
///
/// ```rust
/// use imposter_engine::topic::TopicProvider;
/// use imposter_topics::{create_provider, ProviderKind};
///
/// let provider = create_provider("local".parse().unwrap(), None);
/// assert_eq!(provider.name(), "local");
/// assert_eq!(create_provider(ProviderKind::Gemini, Some(1)).name(), "gemini");
/// ```
pub fn create_provider(kind: ProviderKind, seed: Option<u64>) -> Arc<dyn TopicProvider> {
    let local = match seed {
        Some(s) => LocalProvider::new(s),
        None => LocalProvider::from_entropy(),
    };
    match kind {
        ProviderKind::Local => Arc::new(local),
        ProviderKind::Gemini => Arc::new(GeminiProvider::from_env(local)),
    }
}
