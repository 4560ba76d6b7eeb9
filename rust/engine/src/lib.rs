//! # imposter-engine: Social Deduction Session Core
//!
//! The game state machine for a pass-the-device party game: players privately
//! learn whether they are an agent holding the secret word, an imposter who
//! does not know it, or the optional jester, then vote suspects out round by
//! round until one side wins.
//!
//! ## Core Modules
//!
//! - [`settings`] - Game configuration and table validation
//! - [`player`] - Player identity, roles and the alive flag
//! - [`topic`] - The secret topic and the [`topic::TopicProvider`] contract
//! - [`shuffle`] - Swappable, seedable role shuffling
//! - [`builder`] - Dealing a new session from names and settings
//! - [`session`] - Session state, phases and outcomes
//! - [`engine`] - The state machine driving reveal, votes and game over
//! - [`rules`] - Win-condition evaluation
//! - [`logger`] - GameRecord serialization and JSONL history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use imposter_engine::builder::SessionBuilder;
//! use imposter_engine::engine::{RoundResult, SessionEngine};
//! use imposter_engine::session::Phase;
//! use imposter_engine::settings::GameSettings;
//! use imposter_engine::shuffle::SeededShuffler;
//! use imposter_engine::topic::{FixedTopic, Topic};
//!
//! # async fn demo() -> Result<(), imposter_engine::errors::GameError> {
//! let provider = Arc::new(FixedTopic(Topic::new("Space", "Rocket")));
//! let mut builder = SessionBuilder::new(provider, Box::new(SeededShuffler::new(7)));
//! let names: Vec<String> = ["Ann", "Bo", "Cy", "Di", "Ed"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let mut engine = SessionEngine::new(builder.build(&names, GameSettings::default()).await?);
//!
//! // Hand the device around until everyone has seen their card
//! while engine.phase() == Phase::RoleReveal {
//!     let card = engine.current_reveal()?;
//!     println!("{} is {:?}", card.name, card.role);
//!     engine.acknowledge_reveal()?;
//! }
//!
//! // The table skips the first vote
//! assert_eq!(engine.eliminate(None)?, RoundResult::Skipped);
//! assert_eq!(engine.acknowledge()?, Phase::Round);
//! # Ok(())
//! # }
//! ```
//!
//! ## Deterministic Dealing
//!
//! Role assignment goes through a [`shuffle::RoleShuffler`]; the seeded
//! implementation makes a deal reproducible:
//!
//! ```rust
//! use imposter_engine::shuffle::{RoleShuffler, SeededShuffler};
//!
//! let a = SeededShuffler::new(42).permutation(10);
//! let b = SeededShuffler::new(42).permutation(10);
//! assert_eq!(a, b);
//! ```

pub mod builder;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod player;
pub mod rules;
pub mod session;
pub mod settings;
pub mod shuffle;
pub mod topic;
