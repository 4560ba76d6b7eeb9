//! Roster command handler: edits the saved player list between games.

use crate::cli::RosterAction;
use crate::error::CliError;
use crate::roster::RosterStore;
use std::io::Write;
use std::path::Path;

/// Applies `action` to the store at `path`. Every action except `list` saves
/// the store and then prints it.
pub fn handle_roster_command(
    path: &Path,
    action: RosterAction,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut store = RosterStore::load(path)?;
    match &action {
        RosterAction::List => {}
        RosterAction::Add { name } => store.add(name)?,
        RosterAction::Remove { name } => store.remove(name)?,
        RosterAction::Bench { name } => store.bench(name)?,
        RosterAction::Clear => store.clear(),
    }
    if action != RosterAction::List {
        store.save(path)?;
    }
    print_store(&store, out)
}

fn print_store(store: &RosterStore, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Next game ({}):", store.active.len())?;
    for (i, name) in store.active.iter().enumerate() {
        writeln!(out, "  {:>2}. {}", i + 1, name)?;
    }
    let benched: Vec<&str> = store
        .saved
        .iter()
        .filter(|n| !store.active.contains(n))
        .map(String::as_str)
        .collect();
    if !benched.is_empty() {
        writeln!(out, "Benched: {}", benched.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn add(path: &Path, name: &str) {
        let mut out = Vec::new();
        handle_roster_command(
            path,
            RosterAction::Add {
                name: name.to_string(),
            },
            &mut out,
        )
        .unwrap();
    }

    #[test]
    fn add_bench_and_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        add(&path, "Ann");
        add(&path, "Bo");

        let mut out = Vec::new();
        handle_roster_command(
            &path,
            RosterAction::Bench { name: "Ann".into() },
            &mut out,
        )
        .unwrap();

        let mut out = Vec::new();
        handle_roster_command(&path, RosterAction::List, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Next game (1):"));
        assert!(text.contains("1. Bo"));
        assert!(text.contains("Benched: Ann"));
    }

    #[test]
    fn list_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        let mut out = Vec::new();
        handle_roster_command(&path, RosterAction::List, &mut out).unwrap();
        assert!(!path.exists());
        assert_eq!(String::from_utf8(out).unwrap(), "Next game (0):\n");
    }

    #[test]
    fn failed_action_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        add(&path, "Ann");
        let before = std::fs::read_to_string(&path).unwrap();

        let mut out = Vec::new();
        let result = handle_roster_command(
            &path,
            RosterAction::Remove { name: "Zed".into() },
            &mut out,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
