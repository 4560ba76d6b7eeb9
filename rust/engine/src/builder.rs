use std::sync::Arc;

use crate::errors::GameError;
use crate::player::{ExtraRole, Player, Role};
use crate::session::Session;
use crate::settings::GameSettings;
use crate::shuffle::RoleShuffler;
use crate::topic::{TopicProvider, TopicSelector};

/// Turns a list of names and settings into a freshly dealt [`Session`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use imposter_engine::builder::SessionBuilder;
/// use imposter_engine::session::Phase;
/// use imposter_engine::settings::GameSettings;
/// use imposter_engine::shuffle::SeededShuffler;
/// use imposter_engine::topic::{FixedTopic, Topic};
///
/// # async fn demo() -> Result<(), imposter_engine::errors::GameError> {
/// let provider = Arc::new(FixedTopic(Topic::new("Zoo", "Lion")));
/// let mut builder = SessionBuilder::new(provider, Box::new(SeededShuffler::new(42)));
///
/// let names: Vec<String> = ["Ann", "Bo", "Cy", "Di"].iter().map(|s| s.to_string()).collect();
/// let session = builder.build(&names, GameSettings::default()).await?;
/// assert_eq!(session.phase(), Phase::RoleReveal);
/// assert_eq!(session.live_imposters(), 1);
/// # Ok(())
/// # }
/// ```
pub struct SessionBuilder {
    provider: Arc<dyn TopicProvider>,
    shuffler: Box<dyn RoleShuffler + Send>,
}

impl SessionBuilder {
    pub fn new(provider: Arc<dyn TopicProvider>, shuffler: Box<dyn RoleShuffler + Send>) -> Self {
        Self { provider, shuffler }
    }

    /// Validates the table, fetches a topic and deals roles.
    ///
    /// Nothing is requested from the topic provider when the configuration is
    /// rejected, and no partially built session is ever returned.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] for any constraint listed on
    /// [`GameSettings::validate`].
    pub async fn build(
        &mut self,
        names: &[String],
        settings: GameSettings,
    ) -> Result<Session, GameError> {
        settings.validate(names)?;

        let selector = TopicSelector::parse(&settings.category);
        tracing::debug!(
            provider = self.provider.name(),
            selector = %selector,
            "requesting topic"
        );
        let topic = self.provider.fetch_topic(&selector).await;

        let order = self.shuffler.permutation(names.len());
        let players = assign_roles(names, &settings, &order)?;

        tracing::info!(
            players = players.len(),
            imposters = settings.imposter_count,
            jester = settings.jester_enabled,
            category = %topic.category,
            "session built"
        );
        Ok(Session::new(players, topic, settings))
    }
}

/// Deals roles along `order`: the first `imposter_count` seats become
/// imposters, the next one the jester (when enabled), the rest plain agents.
/// Players keep the input order of `names`.
fn assign_roles(
    names: &[String],
    settings: &GameSettings,
    order: &[usize],
) -> Result<Vec<Player>, GameError> {
    let n = names.len();
    let invalid = || GameError::config("shuffler returned an invalid permutation");
    if order.len() != n {
        return Err(invalid());
    }
    let mut seen = vec![false; n];
    for &seat in order {
        if seat >= n || seen[seat] {
            return Err(invalid());
        }
        seen[seat] = true;
    }

    let mut roles = vec![(Role::Agent, ExtraRole::None); n];
    for &seat in &order[..settings.imposter_count] {
        roles[seat].0 = Role::Imposter;
    }
    if settings.jester_enabled {
        roles[order[settings.imposter_count]].1 = ExtraRole::Jester;
    }

    Ok(names
        .iter()
        .zip(roles)
        .map(|(name, (role, extra))| Player::new(name.trim(), role, extra))
        .collect())
}
