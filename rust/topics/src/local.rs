use std::sync::Mutex;

use async_trait::async_trait;
use imposter_engine::topic::{Topic, TopicProvider, TopicSelector};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::wordbank::{self, WORD_BANK};

/// Offline provider drawing from the built-in word bank.
///
/// Never fails: a selector naming an unknown category gets a random local
/// topic instead.
///
/// # Examples
///
/// ```
/// use imposter_topics::local::LocalProvider;
///
/// let provider = LocalProvider::new(7);
/// let topic = provider.pick(Some("Beach"));
/// assert_eq!(topic.category, "Beach");
/// ```
#[derive(Debug)]
pub struct LocalProvider {
    rng: Mutex<ChaCha20Rng>,
}

impl LocalProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Random word from `category` when it is a local one, otherwise from a
    /// random category.
    pub fn pick(&self, category: Option<&str>) -> Topic {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let known = category
            .and_then(wordbank::is_local_category)
            .and_then(|c| WORD_BANK.iter().find(|(name, _)| *name == c));
        let (name, words) = match known {
            Some(entry) => *entry,
            None => WORD_BANK[rng.random_range(0..WORD_BANK.len())],
        };
        let word = words[rng.random_range(0..words.len())];
        Topic::new(name, word)
    }
}

#[async_trait]
impl TopicProvider for LocalProvider {
    async fn fetch_topic(&self, selector: &TopicSelector) -> Topic {
        match selector {
            TopicSelector::Named(name) => self.pick(Some(name)),
            TopicSelector::LocalRandom | TopicSelector::Generated => self.pick(None),
        }
    }

    fn name(&self) -> &str {
        "local"
    }
}
