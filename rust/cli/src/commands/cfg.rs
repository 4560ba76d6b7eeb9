//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! game configuration with the source of every value (default, file, or
//! environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "imposters": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "jester": {
//!     "value": true,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "imposters": { "value": config.imposters, "source": sources.imposters },
        "jester": { "value": config.jester, "source": sources.jester },
        "reveal_role": { "value": config.reveal_role, "source": sources.reveal_role },
        "teaming": { "value": config.teaming, "source": sources.teaming },
        "hint": { "value": config.hint, "source": sources.hint },
        "category": { "value": config.category, "source": sources.category },
        "timer": { "value": config.timer, "source": sources.timer },
        "provider": { "value": config.provider, "source": sources.provider },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
