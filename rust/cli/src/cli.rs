//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use imposter_topics::ProviderKind;

#[derive(Parser, Debug)]
#[command(
    name = "imposter",
    version,
    about = "Pass-the-device imposter party game"
)]
pub struct ImposterCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game at this terminal
    Play(PlayArgs),
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// List the built-in topic categories
    Topics {
        /// Show the words of one category instead
        #[arg(long)]
        category: Option<String>,
    },
    /// Manage the saved player list
    Roster {
        #[arg(long)]
        roster: Option<PathBuf>,
        #[command(subcommand)]
        action: RosterAction,
    },
}

/// Each on/off flag pair overrides the other, the last one given wins.
/// Giving neither keeps the saved or configured value.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Comma-separated player names; defaults to the roster's active list
    #[arg(long)]
    pub players: Option<String>,
    #[arg(long)]
    pub imposters: Option<usize>,
    /// Add a jester who wins alone by being voted out
    #[arg(long, overrides_with = "no_jester")]
    pub jester: bool,
    #[arg(long, overrides_with = "jester")]
    pub no_jester: bool,
    /// Announce the role of eliminated players
    #[arg(long, overrides_with = "hide_roles")]
    pub reveal_roles: bool,
    /// Keep the role of eliminated players secret
    #[arg(long, overrides_with = "reveal_roles")]
    pub hide_roles: bool,
    /// Imposters learn who their allies are
    #[arg(long, overrides_with = "no_teaming")]
    pub teaming: bool,
    #[arg(long, overrides_with = "teaming")]
    pub no_teaming: bool,
    /// Imposters and the jester see the category
    #[arg(long, overrides_with = "no_hint")]
    pub hint: bool,
    /// Imposters and the jester do not see the category
    #[arg(long, overrides_with = "hint")]
    pub no_hint: bool,
    /// Category name, free text for a generated topic, or LOCAL_RANDOM
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub provider: Option<ProviderKind>,
    /// Discussion time per round in seconds
    #[arg(long)]
    pub timer: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Append the finished game to this JSONL file
    #[arg(long)]
    pub record: Option<PathBuf>,
    #[arg(long)]
    pub roster: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RosterAction {
    List,
    Add { name: String },
    Remove { name: String },
    Bench { name: String },
    Clear,
}
