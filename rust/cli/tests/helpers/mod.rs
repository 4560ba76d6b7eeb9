//! Shared helpers for the CLI integration tests.
//!
//! Commands run in-process through [`imposter_cli::run_with_input`] with
//! scripted stdin, so no binary has to be built.

use std::io::Cursor;

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
pub fn run_cli(args: &[&str], input: &str) -> CliResult {
    let mut argv = vec!["imposter"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = imposter_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Keystrokes for `players` role reveals (show, then hide) followed by
/// `commands`, one per line.
#[allow(dead_code)]
pub fn script(players: usize, commands: &[&str]) -> String {
    let mut s = "\n\n".repeat(players);
    for c in commands {
        s.push_str(c);
        s.push('\n');
    }
    s
}
