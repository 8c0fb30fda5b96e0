use std::{fs, process::Command};

use serde_json::Value;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sand-serpent"))
        .args(args)
        .output()
        .expect("failed to launch sand-serpent")
}

fn run_json(args: &[&str]) -> Value {
    let output = run(args);
    assert!(
        output.status.success(),
        "sand-serpent failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is a JSON summary")
}

#[test]
fn json_summary_reports_configuration_and_stats() {
    let summary = run_json(&[
        "--difficulty",
        "casual",
        "--seed",
        "17",
        "--skin",
        "sapphire",
        "--frames",
        "120",
        "--json",
    ]);

    assert_eq!(summary["difficulty"], "casual");
    assert_eq!(summary["seed"], 17);
    assert_eq!(summary["skin"], "sapphire");
    assert_eq!(summary["frames"], 120);
    assert!(summary["stats"]["score"].is_u64());
    assert!(summary["rating"].is_string());
}

#[test]
fn same_seed_prints_same_summary() {
    let args = ["--seed", "23", "--frames", "2000", "--json"];
    assert_eq!(run_json(&args), run_json(&args));
}

#[test]
fn session_file_supplies_settings() {
    let dir = std::env::temp_dir().join(format!("sand-serpent-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("session.toml");
    fs::write(
        &path,
        "version = 1\n[game]\ndifficulty = \"hardcore\"\nseed = 5\n[run]\nframes = 60\nplayer = \"dune\"\n",
    )
    .expect("write session file");

    let path_arg = path.to_string_lossy().into_owned();
    let summary = run_json(&["--config", &path_arg, "--seed", "6", "--json"]);

    assert_eq!(summary["difficulty"], "hardcore");
    assert_eq!(summary["seed"], 6);
    assert_eq!(summary["player"], "dune");
    assert_eq!(summary["frames"], 60);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_session_file_is_an_error() {
    let output = run(&["--config", "/nonexistent/sand-serpent/session.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read session file"));
}

#[test]
fn unknown_difficulty_is_rejected() {
    let output = run(&["--difficulty", "nightmare"]);
    assert!(!output.status.success());
}
