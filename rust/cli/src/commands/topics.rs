//! Lists the built-in word bank.

use crate::error::CliError;
use imposter_topics::wordbank;
use std::io::Write;

/// Without a category, prints every category with its word count; with one,
/// prints that category's words one per line.
pub fn handle_topics_command(category: Option<&str>, out: &mut dyn Write) -> Result<(), CliError> {
    match category {
        None => {
            for name in wordbank::categories() {
                let count = wordbank::words(name).map_or(0, |w| w.len());
                writeln!(out, "{} ({} words)", name, count)?;
            }
        }
        Some(name) => {
            let canonical = wordbank::is_local_category(name)
                .ok_or_else(|| CliError::InvalidInput(format!("unknown category '{}'", name)))?;
            writeln!(out, "{}:", canonical)?;
            for word in wordbank::words(canonical).unwrap_or_default() {
                writeln!(out, "  {}", word)?;
            }
        }
    }
    Ok(())
}
