//! # Play Command
//!
//! One pass-the-device game at a single terminal.
//!
//! ## Flow
//!
//! - Names come from `--players` or the roster's active list; settings are
//!   layered from the roster, config file and environment, then flags
//! - Every player privately views their role card, with the screen cleared
//!   in between
//! - Rounds of discussion end in a vote or a skip until a side wins
//! - The winner and every role are revealed, the game is optionally appended
//!   to a record file, and the roster is saved for the next game
//!
//! `q` at any prompt abandons the game; input ending mid-game is reported as
//! an interruption.

use crate::cli::PlayArgs;
use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::formatters::{
    format_debrief, format_role_card, format_roster, format_round_result, format_time,
    format_winner,
};
use crate::io_utils::read_stdin_line;
use crate::roster::{self, RosterStore};
use crate::timer::DiscussionTimer;
use crate::ui;
use crate::validation::{ParseResult, RoundCommand, parse_names, parse_round_command};
use imposter_engine::builder::SessionBuilder;
use imposter_engine::engine::SessionEngine;
use imposter_engine::errors::GameError;
use imposter_engine::logger::GameLogger;
use imposter_engine::session::Phase;
use imposter_engine::settings::{GameSettings, max_imposters};
use imposter_engine::shuffle::SeededShuffler;
use imposter_topics::create_provider;
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Handle the play command: one interactive game.
///
/// # Errors
///
/// - `CliError::Config` for an invalid config file, environment, or roster file
/// - `CliError::Engine` when the players or settings cannot form a game
/// - `CliError::Interrupted` when input ends before the game is over
pub fn handle_play_command(
    args: &PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    play_with_config(args, &resolved, out, err, stdin)
}

fn play_with_config(
    args: &PlayArgs,
    resolved: &ConfigResolved,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let roster = if args.players.is_none() || args.roster.is_some() {
        let path = roster::resolve_path(args.roster.clone());
        let store = RosterStore::load(&path)?;
        Some((path, store))
    } else {
        None
    };

    let base = roster
        .as_ref()
        .map(|(_, store)| store.settings.clone())
        .unwrap_or_default();
    let names = match (&args.players, &roster) {
        (Some(list), _) => parse_names(list),
        (None, Some((_, store))) => store.active.clone(),
        (None, None) => Vec::new(),
    };
    let mut settings = apply_flags(resolved.settings_over(base), args);
    if args.imposters.is_none() {
        let max = max_imposters(names.len());
        if settings.imposter_count > max {
            ui::display_warning(
                err,
                &format!(
                    "{} imposters do not fit {} players, playing with {}",
                    settings.imposter_count,
                    names.len(),
                    max
                ),
            )?;
            settings.imposter_count = max;
        }
    }
    let kind = args.provider.unwrap_or_else(|| resolved.provider());
    let seed = args
        .seed
        .or(resolved.config.seed)
        .unwrap_or_else(rand::random);

    let provider = create_provider(kind, Some(seed));
    let provider_name = provider.name().to_string();
    let mut builder = SessionBuilder::new(provider, Box::new(SeededShuffler::new(seed)));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let session = runtime.block_on(builder.build(&names, settings.clone()))?;
    tracing::info!(seed, provider = %provider_name, "game starting");

    writeln!(
        out,
        "play: players={} imposters={} jester={} provider={} seed={}",
        names.len(),
        settings.imposter_count,
        settings.jester_enabled,
        provider_name,
        seed
    )?;

    let mut engine = SessionEngine::new(session);
    if run_game(&mut engine, out, err, stdin)? == Flow::Quit {
        writeln!(out, "Game abandoned.")?;
        return Ok(());
    }

    if let Some(path) = &args.record {
        record_game(&engine, path, seed, out)?;
    }

    let names = engine.reset();
    if let Some((path, mut store)) = roster {
        store.set_active(names);
        store.settings = settings;
        store.save(&path)?;
    }
    Ok(())
}

/// `Some` when either flag of an on/off pair was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Command-line flags win over every other source.
fn apply_flags(mut settings: GameSettings, args: &PlayArgs) -> GameSettings {
    if let Some(n) = args.imposters {
        settings.imposter_count = n;
    }
    if let Some(on) = switch(args.jester, args.no_jester) {
        settings.jester_enabled = on;
    }
    if let Some(on) = switch(args.reveal_roles, args.hide_roles) {
        settings.reveal_role_on_elimination = on;
    }
    if let Some(on) = switch(args.teaming, args.no_teaming) {
        settings.imposter_teaming = on;
    }
    if let Some(on) = switch(args.hint, args.no_hint) {
        settings.outsider_category_hint = on;
    }
    if let Some(category) = &args.category {
        settings.category = category.clone();
    }
    if let Some(secs) = args.timer {
        settings.timer_secs = secs;
    }
    settings
}

fn interrupted() -> CliError {
    CliError::Interrupted("input ended before the game was over".to_string())
}

/// Waits for Enter. `q` quits.
fn pause(out: &mut dyn Write, stdin: &mut dyn BufRead, text: &str) -> Result<Flow, CliError> {
    ui::prompt(out, text)?;
    let line = read_stdin_line(stdin).ok_or_else(interrupted)?;
    if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit") {
        return Ok(Flow::Quit);
    }
    Ok(Flow::Continue)
}

fn run_game(
    engine: &mut SessionEngine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Flow, CliError> {
    if reveal_roles(engine, out, stdin)? == Flow::Quit {
        return Ok(Flow::Quit);
    }
    while engine.phase() == Phase::Round {
        if play_round(engine, out, err, stdin)? == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
    show_game_over(engine, out)?;
    Ok(Flow::Continue)
}

fn reveal_roles(
    engine: &mut SessionEngine,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Flow, CliError> {
    while engine.phase() == Phase::RoleReveal {
        let card = engine.current_reveal()?;
        ui::clear_screen(out)?;
        writeln!(
            out,
            "Pass the device to {} ({}/{}).",
            card.name, card.position, card.total
        )?;
        if pause(out, stdin, "Press Enter to see your role (q to quit): ")? == Flow::Quit {
            return Ok(Flow::Quit);
        }
        writeln!(out, "{}", format_role_card(&card))?;
        if pause(out, stdin, "Press Enter to hide it: ")? == Flow::Quit {
            return Ok(Flow::Quit);
        }
        engine.acknowledge_reveal()?;
    }
    ui::clear_screen(out)?;
    Ok(Flow::Continue)
}

/// One discussion round, its vote, and the result screen.
fn play_round(
    engine: &mut SessionEngine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Flow, CliError> {
    let timer = DiscussionTimer::start(engine.session().settings().timer_secs);
    writeln!(out)?;
    match &timer {
        Some(t) => writeln!(
            out,
            "Round {} (discussion time {})",
            engine.round(),
            format_time(t.budget().as_secs())
        )?,
        None => writeln!(out, "Round {}", engine.round())?,
    }
    writeln!(out, "{}", format_roster(engine.players()))?;

    let result = loop {
        ui::prompt(out, "Command (vote <n|name>, skip, roster, time, q): ")?;
        let line = read_stdin_line(stdin).ok_or_else(interrupted)?;
        match parse_round_command(&line) {
            ParseResult::Quit => return Ok(Flow::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(RoundCommand::Roster) => {
                writeln!(out, "{}", format_roster(engine.players()))?
            }
            ParseResult::Command(RoundCommand::Time) => match &timer {
                Some(t) if t.remaining().is_zero() => writeln!(out, "Time is up. Vote now.")?,
                Some(t) => writeln!(out, "Time left: {}", format_time(t.remaining().as_secs()))?,
                None => writeln!(out, "No timer this game.")?,
            },
            ParseResult::Command(RoundCommand::Skip) => break engine.eliminate(None)?,
            ParseResult::Command(RoundCommand::Vote(target)) => {
                match engine.find_player(&target) {
                    Ok(id) => break engine.eliminate(Some(&id))?,
                    Err(e @ GameError::UnknownPlayer { .. }) => {
                        ui::write_error(err, &e.to_string())?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    };

    writeln!(out, "{}", format_round_result(&result))?;
    if pause(out, stdin, "Press Enter to continue: ")? == Flow::Quit {
        return Ok(Flow::Quit);
    }
    engine.acknowledge()?;
    Ok(Flow::Continue)
}

fn show_game_over(engine: &SessionEngine, out: &mut dyn Write) -> Result<(), CliError> {
    let session = engine.session();
    if let Some(outcome) = session.outcome() {
        let decided = outcome
            .decided_by
            .and_then(|id| session.player(&id))
            .map(|p| p.name());
        writeln!(out)?;
        writeln!(out, "{}", format_winner(outcome.winner, decided))?;
    }
    writeln!(out, "{}", format_debrief(session))?;
    Ok(())
}

fn record_game(
    engine: &SessionEngine,
    path: &Path,
    seed: u64,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut logger = GameLogger::append(path)?;
    let record = engine.session().to_record(logger.next_id(), Some(seed))?;
    logger.write(&record)?;
    writeln!(out, "Recorded game {} to {}", record.game_id, path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::TestLogSubscriber;
    use imposter_engine::logger::GameRecord;
    use imposter_engine::session::Winner;
    use imposter_engine::shuffle::FixedShuffler;
    use imposter_engine::topic::{FixedTopic, Topic};
    use std::io::Cursor;
    use std::sync::Arc;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    const TABLE: [&str; 4] = ["Ann", "Bo", "Cy", "Di"];
    const REVEAL_ALL: &str = "\n\n\n\n\n\n\n\n";

    /// Cy (seat 3) is the imposter unless `order` says otherwise.
    fn engine_with(order: Vec<usize>, settings: GameSettings) -> SessionEngine {
        let provider = Arc::new(FixedTopic(Topic::new("Zoo", "Lion")));
        let mut builder = SessionBuilder::new(provider, Box::new(FixedShuffler::new(order)));
        let names: Vec<String> = TABLE.iter().map(|s| s.to_string()).collect();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        SessionEngine::new(runtime.block_on(builder.build(&names, settings)).unwrap())
    }

    fn play(engine: &mut SessionEngine, input: &str) -> (Result<Flow, CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = run_game(engine, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn agents_win_by_voting_out_the_imposter() {
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (result, out, _) = play(&mut engine, &format!("{}vote Cy\n\n", REVEAL_ALL));

        assert_eq!(result.unwrap(), Flow::Continue);
        assert_eq!(engine.phase(), Phase::GameOver);
        assert!(out.contains("Pass the device to Ann (1/4)."));
        assert!(out.contains("Secret word: Lion"));
        assert!(out.contains("Cy was eliminated. They were IMPOSTER."));
        assert!(out.contains("AGENTS WIN"));
        assert!(out.contains("The word was: Lion (Zoo)"));
    }

    #[test]
    fn screen_is_cleared_between_players() {
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (_, out, _) = play(&mut engine, &format!("{}vote 3\n\n", REVEAL_ALL));
        assert_eq!(out.matches(ui::CLEAR_SCREEN).count(), TABLE.len() + 1);
    }

    #[test]
    fn unknown_target_reprompts() {
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (result, out, err) = play(
            &mut engine,
            &format!("{}vote Zed\nvote 9\nshout\nvote 3\n\n", REVEAL_ALL),
        );
        assert!(result.is_ok());
        assert!(err.contains("Unknown or eliminated player: Zed"));
        assert!(err.contains("Unknown or eliminated player: 9"));
        assert!(err.contains("Unrecognized command 'shout'"));
        assert!(out.contains("AGENTS WIN"));
    }

    #[test]
    fn skip_moves_to_next_round() {
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (result, out, _) = play(&mut engine, &format!("{}skip\n\nvote 1\n\nvote Cy\n\n", REVEAL_ALL));
        assert!(result.is_ok());
        assert!(out.contains("Nobody was eliminated."));
        assert!(out.contains("Round 2"));
        assert!(out.contains("Round 3"));
        assert!(out.contains("   1. Ann (out)"));
        assert_eq!(engine.outcome().map(|o| o.winner), Some(Winner::Agents));
        assert_eq!(engine.outcome().map(|o| o.round), Some(3));
    }

    #[test]
    fn hidden_roles_stay_secret() {
        let settings = GameSettings {
            reveal_role_on_elimination: false,
            ..GameSettings::default()
        };
        let mut engine = engine_with(vec![2, 0, 1, 3], settings);
        let (_, out, _) = play(&mut engine, &format!("{}vote Ann\n\nvote Cy\n\n", REVEAL_ALL));
        assert!(out.contains("Ann was eliminated. Their role stays secret."));
        assert!(!out.contains("They were"));
    }

    #[test]
    fn time_and_roster_commands() {
        let settings = GameSettings {
            timer_secs: 90,
            ..GameSettings::default()
        };
        let mut engine = engine_with(vec![2, 0, 1, 3], settings);
        let (_, out, _) = play(&mut engine, &format!("{}time\nroster\nvote 3\n\n", REVEAL_ALL));
        assert!(out.contains("Round 1 (discussion time 1:30)"));
        assert!(out.contains("Time left: 1:"));

        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (_, out, _) = play(&mut engine, &format!("{}t\nvote 3\n\n", REVEAL_ALL));
        assert!(out.contains("No timer this game."));
    }

    #[test]
    fn quit_during_reveal() {
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (result, out, _) = play(&mut engine, "\n\nq\n");
        assert_eq!(result.unwrap(), Flow::Quit);
        assert_eq!(engine.phase(), Phase::RoleReveal);
        assert!(out.contains("Pass the device to Bo (2/4)."));
    }

    #[test]
    fn quit_during_round() {
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (result, _, _) = play(&mut engine, &format!("{}q\n", REVEAL_ALL));
        assert_eq!(result.unwrap(), Flow::Quit);
        assert_eq!(engine.phase(), Phase::Round);
    }

    #[test]
    fn end_of_input_is_an_interruption() {
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());
        let (result, _, _) = play(&mut engine, REVEAL_ALL);
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn jester_wins_alone() {
        let settings = GameSettings {
            jester_enabled: true,
            ..GameSettings::default()
        };
        // Cy imposter, Di jester
        let mut engine = engine_with(vec![2, 3, 0, 1], settings);
        let (_, out, _) = play(&mut engine, &format!("{}vote Di\n\n", REVEAL_ALL));
        assert!(out.contains("You are: JESTER"));
        assert!(out.contains("JESTER WINS! Di fooled everyone."));
    }

    #[test]
    fn game_over_is_logged() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        let mut engine = engine_with(vec![2, 0, 1, 3], GameSettings::default());

        tracing::subscriber::with_default(registry, || {
            let (result, _, _) = play(&mut engine, &format!("{}vote 1\n\nvote 2\n\n", REVEAL_ALL));
            assert!(result.is_ok());
        });

        let entries = subscriber.entries();
        let over = entries
            .iter()
            .find(|e| e.message == "game over")
            .expect("game over event");
        assert_eq!(over.field("winner"), Some("Imposters"));
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.message == "player eliminated")
                .count(),
            2
        );
    }

    #[test]
    fn flags_override_layers() {
        let args = PlayArgs {
            imposters: Some(2),
            jester: true,
            hide_roles: true,
            no_hint: true,
            category: Some("Kitchen".into()),
            timer: Some(30),
            ..PlayArgs::default()
        };
        let s = apply_flags(GameSettings::default(), &args);
        assert_eq!(s.imposter_count, 2);
        assert!(s.jester_enabled);
        assert!(!s.reveal_role_on_elimination);
        assert!(!s.imposter_teaming);
        assert!(!s.outsider_category_hint);
        assert_eq!(s.category, "Kitchen");
        assert_eq!(s.timer_secs, 30);

        assert_eq!(
            apply_flags(GameSettings::default(), &PlayArgs::default()),
            GameSettings::default()
        );
    }

    #[test]
    fn full_game_is_recorded_and_roster_saved() {
        let dir = tempfile::TempDir::new().unwrap();
        let record = dir.path().join("games.jsonl");
        let roster_path = dir.path().join("roster.json");
        let args = PlayArgs {
            players: Some("Ann, Bo, Cy".into()),
            category: Some("Kitchen".into()),
            seed: Some(7),
            record: Some(record.clone()),
            roster: Some(roster_path.clone()),
            ..PlayArgs::default()
        };
        let resolved = config::load_from(|_| None).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        // Three players, one imposter: the first elimination decides the game
        let mut stdin = Cursor::new(b"\n\n\n\n\n\nvote 1\n\n".to_vec());

        play_with_config(&args, &resolved, &mut out, &mut err, &mut stdin).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("play: players=3 imposters=1 jester=false provider=local seed=7"));
        assert!(out.contains("WIN"));
        assert!(out.contains("Recorded game"));

        let content = std::fs::read_to_string(&record).unwrap();
        let rec: GameRecord = serde_json::from_str(content.trim_end()).unwrap();
        assert_eq!(rec.seed, Some(7));
        assert_eq!(rec.topic.category, "Kitchen");
        assert_eq!(rec.rounds, 1);

        let store = RosterStore::load(&roster_path).unwrap();
        assert_eq!(store.active, vec!["Ann", "Bo", "Cy"]);
        assert_eq!(store.settings.category, "Kitchen");
    }

    #[test]
    fn too_few_players_is_an_engine_error() {
        let args = PlayArgs {
            players: Some("Ann,Bo".into()),
            ..PlayArgs::default()
        };
        let resolved = config::load_from(|_| None).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(Vec::new());
        let result = play_with_config(&args, &resolved, &mut out, &mut err, &mut stdin);
        assert!(matches!(
            result,
            Err(CliError::Engine(GameError::InvalidConfiguration { .. }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn off_flags_undo_saved_settings() {
        let saved = GameSettings {
            jester_enabled: true,
            reveal_role_on_elimination: false,
            imposter_teaming: true,
            outsider_category_hint: false,
            ..GameSettings::default()
        };
        let args = PlayArgs {
            no_jester: true,
            reveal_roles: true,
            no_teaming: true,
            hint: true,
            ..PlayArgs::default()
        };
        assert_eq!(apply_flags(saved.clone(), &args), GameSettings::default());
        assert_eq!(apply_flags(saved.clone(), &PlayArgs::default()), saved);
    }

    fn play_on_roster(args: &PlayArgs) -> String {
        let resolved = config::load_from(|_| None).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        // Three seats with a jester: whoever goes first decides the game
        let mut stdin = Cursor::new(b"\n\n\n\n\n\nvote 1\n\n".to_vec());
        play_with_config(args, &resolved, &mut out, &mut err, &mut stdin).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn roster_settings_can_be_switched_back_off() {
        let dir = tempfile::TempDir::new().unwrap();
        let roster_path = dir.path().join("roster.json");
        let base = PlayArgs {
            category: Some("Beach".into()),
            seed: Some(3),
            roster: Some(roster_path.clone()),
            ..PlayArgs::default()
        };

        let first = PlayArgs {
            players: Some("Ann,Bo,Cy".into()),
            jester: true,
            hide_roles: true,
            ..base.clone()
        };
        let out = play_on_roster(&first);
        assert!(out.contains("jester=true"));
        assert!(out.contains("Their role stays secret."));

        // Saved settings carry over when no flag is given
        let out = play_on_roster(&base);
        assert!(out.contains("play: players=3 imposters=1 jester=true"));
        let store = RosterStore::load(&roster_path).unwrap();
        assert!(store.settings.jester_enabled);
        assert!(!store.settings.reveal_role_on_elimination);

        let last = PlayArgs {
            no_jester: true,
            reveal_roles: true,
            ..base.clone()
        };
        let out = play_on_roster(&last);
        assert!(out.contains("play: players=3 imposters=1 jester=false"));
        assert!(out.contains("They were"));
        let store = RosterStore::load(&roster_path).unwrap();
        assert!(!store.settings.jester_enabled);
        assert!(store.settings.reveal_role_on_elimination);
    }

    #[test]
    fn saved_imposter_count_shrinks_with_the_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let roster_path = dir.path().join("roster.json");
        let mut store = RosterStore::default();
        store.set_active(["Ann", "Bo", "Cy"].iter().map(|s| s.to_string()).collect());
        store.settings.imposter_count = 2;
        store.save(&roster_path).unwrap();

        let args = PlayArgs {
            category: Some("Zoo".into()),
            seed: Some(1),
            roster: Some(roster_path),
            ..PlayArgs::default()
        };
        let resolved = config::load_from(|_| None).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"\n\n\n\n\n\nvote 1\n\n".to_vec());
        play_with_config(&args, &resolved, &mut out, &mut err, &mut stdin).unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(out.contains("play: players=3 imposters=1"));
        assert!(err.contains("2 imposters do not fit 3 players, playing with 1"));

        // An explicit flag is still checked strictly
        let args = PlayArgs {
            players: Some("Ann,Bo,Cy".into()),
            imposters: Some(2),
            ..PlayArgs::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(Vec::new());
        let result = play_with_config(&args, &resolved, &mut out, &mut err, &mut stdin);
        assert!(matches!(
            result,
            Err(CliError::Engine(GameError::InvalidConfiguration { .. }))
        ));
    }
}
