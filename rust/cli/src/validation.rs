//! Input parsing and validation for interactive commands.
//!
//! This module turns what players type into commands:
//! - Round commands during discussion (vote, skip, roster, time, quit)
//! - Comma-separated player lists given on the command line
//!
//! ## Error Handling
//!
//! Parsing returns [`ParseResult`] so the play loop can re-prompt with a
//! clear message instead of aborting the game.

/// What the table can do while a round is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundCommand {
    /// Eliminate a player, by 1-based seat number or name
    Vote(String),
    /// End the round without eliminating anyone
    Skip,
    /// Show who is still in the game
    Roster,
    /// Show the remaining discussion time
    Time,
}

/// Result type for parsing user input during a round.
///
/// This enum represents the three possible outcomes when parsing user input:
/// - Valid round command
/// - Quit command (the table wants to stop)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid command parsed from input
    Command(RoundCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a round command.
///
/// Accepts the following input formats (keywords are case-insensitive,
/// vote targets keep their case):
/// - "vote X" or "v X" → Vote for seat number or name X
/// - "skip" or "s" → Skip
/// - "roster" or "r" → Roster
/// - "time" or "t" → Time
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use imposter_cli::validation::{parse_round_command, ParseResult, RoundCommand};
///
/// assert_eq!(
///     parse_round_command("vote 3"),
///     ParseResult::Command(RoundCommand::Vote("3".to_string()))
/// );
/// assert_eq!(
///     parse_round_command("V Mary Ann"),
///     ParseResult::Command(RoundCommand::Vote("Mary Ann".to_string()))
/// );
/// assert_eq!(parse_round_command("q"), ParseResult::Quit);
///
/// match parse_round_command("accuse Bo") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_round_command(input: &str) -> ParseResult {
    let input = input.trim();
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (input, ""),
    };

    if keyword.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match keyword.to_lowercase().as_str() {
        "q" | "quit" => ParseResult::Quit,
        "vote" | "v" => {
            if rest.is_empty() {
                ParseResult::Invalid(
                    "Vote requires a seat number or name (e.g., 'vote 2')".to_string(),
                )
            } else {
                ParseResult::Command(RoundCommand::Vote(rest.to_string()))
            }
        }
        "skip" | "s" => ParseResult::Command(RoundCommand::Skip),
        "roster" | "r" => ParseResult::Command(RoundCommand::Roster),
        "time" | "t" => ParseResult::Command(RoundCommand::Time),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: vote <n|name>, skip, roster, time, q",
            other
        )),
    }
}

/// Splits a comma-separated list of names, trimming each and dropping empty
/// entries. Duplicates are kept so the engine can reject them.
///
/// ```rust
/// # use imposter_cli::validation::parse_names;
/// assert_eq!(parse_names(" Ann, Bo ,,Cy,"), vec!["Ann", "Bo", "Cy"]);
/// ```
pub fn parse_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
