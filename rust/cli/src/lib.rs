//! # Imposter CLI Library
//!
//! Command-line front end for the imposter engine: a pass-the-device party
//! game played at one terminal, plus the tooling around it.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand, reading
//! player input from stdin. [`run_with_input`] takes the input stream
//! explicitly.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//! let args = vec!["imposter", "topics", "--category", "Zoo"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = imposter_cli::run_with_input(args, &mut Cursor::new(""), &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("Zoo:"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game, passing the device between players
//! - `cfg`: Display the resolved configuration
//! - `topics`: Browse the built-in categories and words
//! - `roster`: Manage the saved player list

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod roster;
pub mod timer;
pub mod ui;
pub mod validation;

use cli::{Commands, ImposterCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_roster_command, handle_topics_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "cfg", "topics", "roster"];

/// Main entry point for the CLI application, reading player input from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends mid-game
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["imposter", "topics"];
/// let code = imposter_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ImposterCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(&e, err);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play(args) => handle_play_command(&args, out, err, input),
        Commands::Cfg => handle_cfg_command(out),
        Commands::Topics { category } => handle_topics_command(category.as_deref(), out),
        Commands::Roster { roster, action } => {
            handle_roster_command(&roster::resolve_path(roster), action, out)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Imposter party game CLI")?;
    writeln!(err, "Usage: imposter <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: imposter --help")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str], input: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let code = run_with_input(args.iter().copied(), &mut stdin, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = run_args(&["imposter", "--help"], "");
        assert_eq!(code, 0);
        assert!(out.contains("play"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let (code, out, err) = run_args(&["imposter", "deal"], "");
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Usage: imposter <command> [options]"));
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}\n", c)), "missing {}", c);
        }
    }

    #[test]
    fn test_command_error_is_prefixed() {
        let (code, _, err) = run_args(&["imposter", "topics", "--category", "Volcano"], "");
        assert_eq!(code, 2);
        assert!(err.starts_with("Error: Invalid input: unknown category 'Volcano'"));
    }

    #[test]
    fn test_play_quit_is_clean() {
        let (code, out, _) = run_args(
            &["imposter", "play", "--players", "Ann,Bo,Cy", "--category", "Zoo"],
            "q\n",
        );
        assert_eq!(code, 0);
        assert!(out.contains("Game abandoned."));
    }

    #[test]
    fn test_play_end_of_input_is_interrupted() {
        let (code, _, err) = run_args(
            &["imposter", "play", "--players", "Ann,Bo,Cy", "--category", "Zoo"],
            "\n\n",
        );
        assert_eq!(code, exit_code::INTERRUPTED);
        assert!(err.contains("Interrupted:"));
    }
}
