//! Player lists kept between games.
//!
//! The store is a small JSON file holding every name the table has used
//! (`saved`), the names seated for the next game (`active`), and the settings
//! of the last game played.

use std::path::{Path, PathBuf};

use imposter_engine::settings::{GameSettings, MAX_PLAYERS};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;

pub const DEFAULT_ROSTER_FILE: &str = "imposter_roster.json";
pub const ROSTER_ENV: &str = "IMPOSTER_ROSTER";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterStore {
    pub saved: Vec<String>,
    pub active: Vec<String>,
    pub settings: GameSettings,
}

/// `--roster`, then `IMPOSTER_ROSTER`, then the file in the working directory.
pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| {
            std::env::var(ROSTER_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_FILE))
}

impl RosterStore {
    /// Reads the store at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(CliError::Io(e)),
        };
        serde_json::from_str(&text).map_err(|e| {
            CliError::Config(format!("corrupted roster file {}: {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        ensure_parent_dir(path).map_err(CliError::Config)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("cannot serialize roster: {}", e)))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Seats `name` for the next game, remembering it if it is new.
    pub fn add(&mut self, name: &str) -> Result<(), CliError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CliError::InvalidInput("player name must not be blank".into()));
        }
        if self.active.iter().any(|n| n == name) {
            return Err(CliError::InvalidInput(format!(
                "'{}' is already in the game",
                name
            )));
        }
        if self.active.len() >= MAX_PLAYERS {
            return Err(CliError::InvalidInput(format!(
                "the game is full ({} players)",
                MAX_PLAYERS
            )));
        }
        if !self.saved.iter().any(|n| n == name) {
            self.saved.push(name.to_string());
        }
        self.active.push(name.to_string());
        Ok(())
    }

    /// Takes `name` out of the next game but keeps it saved.
    pub fn bench(&mut self, name: &str) -> Result<(), CliError> {
        let name = name.trim();
        let before = self.active.len();
        self.active.retain(|n| n != name);
        if self.active.len() == before {
            return Err(CliError::InvalidInput(format!("'{}' is not in the game", name)));
        }
        Ok(())
    }

    /// Forgets `name` entirely.
    pub fn remove(&mut self, name: &str) -> Result<(), CliError> {
        let name = name.trim();
        let known = self.saved.iter().any(|n| n == name) || self.active.iter().any(|n| n == name);
        if !known {
            return Err(CliError::InvalidInput(format!("unknown player '{}'", name)));
        }
        self.saved.retain(|n| n != name);
        self.active.retain(|n| n != name);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Replaces the seated names after a game, remembering any new ones.
    pub fn set_active(&mut self, names: Vec<String>) {
        for name in &names {
            if !self.saved.contains(name) {
                self.saved.push(name.clone());
            }
        }
        self.active = names;
    }
}
