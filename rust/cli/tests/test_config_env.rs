//! Configuration layering through real environment variables.
//!
//! Every test here mutates the process environment, so they run serially and
//! restore what they touched.

mod helpers;

use helpers::{run_cli, script};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const KEYS: &[&str] = &[
    "IMPOSTER_CONFIG",
    "IMPOSTER_SEED",
    "IMPOSTER_IMPOSTERS",
    "IMPOSTER_JESTER",
    "IMPOSTER_REVEAL_ROLE",
    "IMPOSTER_TEAMING",
    "IMPOSTER_HINT",
    "IMPOSTER_CATEGORY",
    "IMPOSTER_TIMER",
    "IMPOSTER_PROVIDER",
];

struct EnvGuard;

impl EnvGuard {
    fn set(pairs: &[(&str, &str)]) -> Self {
        clear();
        for (key, value) in pairs {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear();
    }
}

fn clear() {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn cfg() -> (i32, Value, String) {
    let res = run_cli(&["cfg"], "");
    let json = serde_json::from_str(&res.stdout).unwrap_or(Value::Null);
    (res.exit_code, json, res.stderr)
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let _env = EnvGuard::set(&[]);
    let (code, json, _) = cfg();
    assert_eq!(code, 0);
    assert_eq!(json["imposters"]["value"], 1);
    assert_eq!(json["imposters"]["source"], "default");
    assert_eq!(json["category"]["value"], "LOCAL_RANDOM");
    assert_eq!(json["provider"]["value"], "local");
    assert_eq!(json["seed"]["value"], Value::Null);
}

#[test]
#[serial]
fn env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 5\ntimer = 120\nteaming = true").unwrap();
    let path = file.path().to_string_lossy().to_string();
    let _env = EnvGuard::set(&[("IMPOSTER_CONFIG", path.as_str()), ("IMPOSTER_SEED", "9")]);

    let (code, json, _) = cfg();
    assert_eq!(code, 0);
    assert_eq!(json["seed"]["value"], 9);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["timer"]["value"], 120);
    assert_eq!(json["timer"]["source"], "file");
    assert_eq!(json["teaming"]["source"], "file");
}

#[test]
#[serial]
fn invalid_env_value_fails_cfg_and_play() {
    let _env = EnvGuard::set(&[("IMPOSTER_JESTER", "sometimes")]);
    let (code, _, stderr) = cfg();
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid jester"));

    let res = run_cli(&["play", "--players", "Ann,Bo,Cy"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid jester"));
}

#[test]
#[serial]
fn flags_override_env() {
    let _env = EnvGuard::set(&[
        ("IMPOSTER_CATEGORY", "Cinema"),
        ("IMPOSTER_TIMER", "60"),
        ("IMPOSTER_SEED", "4"),
    ]);
    let res = run_cli(
        &["play", "--players", "Ann,Bo,Cy", "--timer", "30"],
        &script(3, &["vote 1", ""]),
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("seed=4"));
    assert!(res.stdout.contains("Round 1 (discussion time 0:30)"));
    assert!(res.stdout.contains("(Cinema)"));
}

#[test]
#[serial]
fn env_teaming_shows_allies() {
    let _env = EnvGuard::set(&[("IMPOSTER_TEAMING", "yes"), ("IMPOSTER_IMPOSTERS", "2")]);
    let res = run_cli(
        &["play", "--players", "Ann,Bo,Cy,Di,Ed", "--category", "Airport", "--seed", "12"],
        &script(5, &["q"]),
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout.matches("You are: IMPOSTER").count(), 2);
    assert_eq!(res.stdout.matches("Fellow imposters: ").count(), 2);
}
