//! Command handler modules for the imposter CLI.
//!
//! Each command lives in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed as parameters
//! - All errors propagated via `CliError`; [`crate::run`] turns them into exit codes

mod cfg;
mod play;
mod roster;
mod topics;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use roster::handle_roster_command;
pub use topics::handle_topics_command;
