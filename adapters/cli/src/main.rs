#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Sand Serpent headless and reports the outcome.

mod autopilot;
mod session;

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use sand_serpent_core::{Command, Difficulty, GameStats, Phase, SnakeSkin};
use sand_serpent_system_audio_cues::{AudioCues, Cue};
use sand_serpent_system_scoreboard::{rating_for, GameRecord, PlayerProfile, Scoreboard};
use sand_serpent_world::{apply, query, World};
use serde::Serialize;
use tracing::{debug, info, Level};

use crate::{
    autopilot::Autopilot,
    session::{Overrides, RunSettings, SessionFile},
};

#[derive(Debug, Parser)]
#[command(name = "sand-serpent", about = "Plays one Sand Serpent game headless")]
struct CliArgs {
    /// Session file with `[game]` and `[run]` tables.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Difficulty: casual, normal or hardcore.
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Seed for the gameplay random streams.
    #[arg(long)]
    seed: Option<u64>,
    /// Snake skin name.
    #[arg(long)]
    skin: Option<SnakeSkin>,
    /// Maximum number of frames to simulate.
    #[arg(long)]
    frames: Option<usize>,
    /// Simulated milliseconds per frame.
    #[arg(long = "frame-ms")]
    frame_ms: Option<u64>,
    /// Name recorded in the high-score table.
    #[arg(long)]
    player: Option<String>,
    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
    /// Raise log verbosity; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    player: String,
    difficulty: Difficulty,
    seed: u64,
    skin: SnakeSkin,
    frames: usize,
    phase: Phase,
    stats: GameStats,
    rating: &'static str,
    rank: Option<usize>,
    cues: BTreeMap<&'static str, u32>,
}

/// Entry point for the Sand Serpent command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let session = match &args.config {
        Some(path) => SessionFile::load(path)?,
        None => SessionFile::default(),
    };
    let settings = session.resolve(Overrides {
        difficulty: args.difficulty,
        seed: args.seed,
        skin: args.skin,
        frames: args.frames,
        frame_ms: args.frame_ms,
        player: args.player,
    })?;

    let summary = play(&settings);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn play(settings: &RunSettings) -> RunSummary {
    let profile = PlayerProfile::new(settings.player.clone(), settings.config.skin);
    let autopilot = Autopilot;
    let mut world = World::new(settings.config);
    let mut audio = AudioCues::new();
    let mut scoreboard = Scoreboard::default();
    let mut events = Vec::new();
    let mut cues = Vec::new();
    let mut records: Vec<GameRecord> = Vec::new();
    let mut cue_counts: BTreeMap<&'static str, u32> = BTreeMap::new();

    info!(
        difficulty = %settings.config.difficulty,
        seed = settings.config.seed,
        "starting headless run"
    );
    apply(&mut world, Command::StartGame, &mut events);

    let mut frames = 0;
    while frames < settings.frames && !query::is_game_over(&world) {
        if let Some(direction) = autopilot.steer(&world) {
            apply(&mut world, Command::RequestDirection { direction }, &mut events);
        }
        apply(
            &mut world,
            Command::Tick {
                dt: settings.frame,
            },
            &mut events,
        );

        audio.handle(&events, &mut cues);
        for cue in cues.drain(..) {
            *cue_counts.entry(cue.as_str()).or_default() += 1;
        }
        scoreboard.handle(&events, &profile, &mut records);
        events.clear();
        frames += 1;
    }

    let stats = query::stats(&world);
    let record = records.pop().unwrap_or_else(|| GameRecord {
        rating: rating_for(stats.score),
        rank: None,
    });
    debug!(frames, score = stats.score, "headless run finished");

    RunSummary {
        player: settings.player.clone(),
        difficulty: settings.config.difficulty,
        seed: settings.config.seed,
        skin: settings.config.skin,
        frames,
        phase: query::phase(&world),
        stats,
        rating: record.rating.title(),
        rank: record.rank,
        cues: cue_counts,
    }
}

fn print_summary(summary: &RunSummary) {
    let stats = &summary.stats;
    println!(
        "{} ({}, seed {}, {} skin)",
        summary.player, summary.difficulty, summary.seed, summary.skin
    );
    println!("phase after {} frames: {:?}", summary.frames, summary.phase);
    println!("score: {}", stats.score);
    println!(
        "length: {}  food: {} (golden {}, poison {})",
        stats.length, stats.food_eaten, stats.golden_food_eaten, stats.poison_food_eaten
    );
    println!(
        "power-ups: {}  best combo: {}  wave: {}",
        stats.powerups_collected, stats.max_combo, stats.wave_reached
    );
    println!("survived: {:.1}s", stats.time_survived.as_secs_f64());
    match summary.rank {
        Some(rank) => println!("rating: {}  (high score #{})", summary.rating, rank + 1),
        None => println!("rating: {}", summary.rating),
    }
    for (cue, count) in &summary.cues {
        println!("  {cue}: {count}");
    }
}
