use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{ExtraRole, Role};
use crate::session::{Phase, Session, Winner};
use crate::settings::GameSettings;
use crate::topic::Topic;

/// A seat as it looked at the end of the game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub extra_role: ExtraRole,
    /// Round in which the player was voted out, `None` for survivors
    #[serde(default)]
    pub eliminated_in_round: Option<u32>,
}

/// One vote, by player name. `None` means the table skipped.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub round: u32,
    pub eliminated: Option<String>,
}

/// Complete record of a finished game.
/// Serialized to JSONL format for game history and statistics.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed used for role shuffling, when known
    pub seed: Option<u64>,
    /// Timestamp when the game ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    pub topic: Topic,
    pub settings: GameSettings,
    pub players: Vec<PlayerRecord>,
    pub votes: Vec<VoteRecord>,
    pub winner: Winner,
    /// Number of rounds played, including the deciding one
    pub rounds: u32,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

impl Session {
    /// Snapshot of a finished game for the history log.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidPhase`] unless the session is in [`Phase::GameOver`].
    pub fn to_record(&self, game_id: String, seed: Option<u64>) -> Result<GameRecord, GameError> {
        let outcome = match (self.phase, self.outcome) {
            (Phase::GameOver, Some(o)) => o,
            _ => {
                return Err(GameError::InvalidPhase {
                    operation: "record the game",
                    phase: self.phase,
                })
            }
        };

        let players = self
            .players
            .iter()
            .map(|p| PlayerRecord {
                name: p.name().to_string(),
                role: p.role(),
                extra_role: p.extra_role(),
                eliminated_in_round: self
                    .history
                    .iter()
                    .find(|e| e.eliminated == Some(p.id()))
                    .map(|e| e.round),
            })
            .collect();
        let votes = self
            .history
            .iter()
            .map(|e| VoteRecord {
                round: e.round,
                eliminated: e
                    .eliminated
                    .and_then(|id| self.player(&id).map(|p| p.name().to_string())),
            })
            .collect();

        Ok(GameRecord {
            game_id,
            seed,
            ts: None,
            topic: self.topic.clone(),
            settings: self.settings.clone(),
            players,
            votes,
            winner: outcome.winner,
            rounds: outcome.round,
        })
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Starts a fresh log at `path`, truncating any previous content.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent(path.as_ref());
        let f = File::create(path)?;
        Ok(Self::with_writer(f))
    }

    /// Opens `path` for appending, creating it when missing.
    /// Game ids continue after today's records already in the file.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        ensure_parent(path);
        let existing = std::fs::read_to_string(path).unwrap_or_default();
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        let mut logger = Self::with_writer(f);
        logger.seq = last_seq_on(&existing, &logger.date);
        Ok(logger)
    }

    fn with_writer(f: File) -> Self {
        Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RecordId {
    game_id: String,
}

/// Highest sequence number among the ids of `date` in JSONL `content`.
fn last_seq_on(content: &str, date: &str) -> u32 {
    content
        .lines()
        .filter_map(|l| serde_json::from_str::<RecordId>(l).ok())
        .filter_map(|r| {
            let (day, seq) = r.game_id.split_once('-')?;
            if day == date { seq.parse().ok() } else { None }
        })
        .max()
        .unwrap_or(0)
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = create_dir_all(parent);
        }
    }
}
