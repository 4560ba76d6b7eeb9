//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, and prompts.

use std::io::Write;

/// ANSI sequence clearing the terminal and homing the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Writes `text` without a newline and flushes so the prompt shows before input is read.
pub fn prompt(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Wipes the screen so the next player cannot read the previous role card.
pub fn clear_screen(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "{}", CLEAR_SCREEN)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_and_warning_prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "bad").unwrap();
        display_warning(&mut err, "careful").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad\nWARNING: careful\n");
    }

    #[test]
    fn prompt_has_no_newline() {
        let mut out = Vec::new();
        prompt(&mut out, "> ").unwrap();
        assert_eq!(out, b"> ");
    }
}
