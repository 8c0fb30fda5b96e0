use std::time::Duration;

use sand_serpent_core::{Event, GameStats, SnakeSkin};
use sand_serpent_system_scoreboard::{
    HighScoreEntry, HighScoreTable, LifetimeStats, PlayerProfile, Rating, Scoreboard,
    HIGH_SCORE_CAPACITY,
};

fn entry(score: u64) -> HighScoreEntry {
    HighScoreEntry {
        name: format!("player-{score}"),
        score,
        skin: SnakeSkin::Emerald,
        wave: 1,
        length: 4,
    }
}

fn stats(score: u64) -> GameStats {
    GameStats {
        score,
        length: 9,
        food_eaten: 12,
        max_combo: 4,
        wave_reached: 1,
        time_survived: Duration::from_secs(40),
        ..GameStats::default()
    }
}

fn full_table() -> HighScoreTable {
    let mut table = HighScoreTable::new();
    for score in (1..=HIGH_SCORE_CAPACITY as u64).map(|n| n * 100) {
        let _ = table.insert(entry(score));
    }
    table
}

#[test]
fn empty_table_accepts_any_positive_score() {
    let table = HighScoreTable::new();
    assert!(table.qualifies(1));
    assert!(!table.qualifies(0));
}

#[test]
fn full_table_requires_beating_the_last_entry() {
    let table = full_table();
    assert_eq!(table.entries().len(), HIGH_SCORE_CAPACITY);
    assert!(!table.qualifies(100));
    assert!(table.qualifies(101));
}

#[test]
fn insert_keeps_descending_order_and_capacity() {
    let mut table = full_table();

    assert_eq!(table.insert(entry(550)), Some(5));
    assert_eq!(table.entries().len(), HIGH_SCORE_CAPACITY);
    assert_eq!(table.entries()[0].score, 1_000);
    assert_eq!(table.entries()[5].score, 550);
    assert_eq!(table.entries().last().map(|e| e.score), Some(200));
    assert!(table
        .entries()
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn ties_rank_below_existing_scores() {
    let mut table = HighScoreTable::new();
    let _ = table.insert(entry(300));
    let mut late = entry(300);
    late.name = "late".to_owned();

    assert_eq!(table.insert(late), Some(1));
    assert_eq!(table.entries()[1].name, "late");
}

#[test]
fn lowest_score_falls_off_a_full_table() {
    let mut table = full_table();
    assert_eq!(table.insert(entry(50)), None);
    assert_eq!(table.entries().last().map(|e| e.score), Some(100));
}

#[test]
fn lifetime_stats_accumulate() {
    let mut lifetime = LifetimeStats::default();
    lifetime.record(&stats(120));
    let mut second = stats(80);
    second.max_combo = 7;
    lifetime.record(&second);

    assert_eq!(lifetime.total_games, 2);
    assert_eq!(lifetime.total_score, 200);
    assert_eq!(lifetime.total_food_eaten, 24);
    assert_eq!(lifetime.best_combo, 7);
    assert_eq!(lifetime.total_play_time, Duration::from_secs(80));
}

#[test]
fn scoreboard_records_game_over_events() {
    let mut scoreboard = Scoreboard::default();
    let profile = PlayerProfile::new("dune", SnakeSkin::Ruby);
    let mut records = Vec::new();

    scoreboard.handle(
        &[
            Event::WaveStarted { wave: 2 },
            Event::GameOver { stats: stats(640) },
        ],
        &profile,
        &mut records,
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rating, Rating::SandViper);
    assert_eq!(records[0].rank, Some(0));
    assert_eq!(scoreboard.high_scores.entries()[0].name, "dune");
    assert_eq!(scoreboard.high_scores.entries()[0].skin, SnakeSkin::Ruby);
    assert_eq!(scoreboard.lifetime.total_games, 1);
}

#[test]
fn zero_score_game_counts_but_is_not_ranked() {
    let mut scoreboard = Scoreboard::default();
    let record = scoreboard.record(&PlayerProfile::new("egg", SnakeSkin::Emerald), &stats(0));

    assert_eq!(record.rating, Rating::Hatchling);
    assert_eq!(record.rank, None);
    assert!(scoreboard.high_scores.entries().is_empty());
    assert_eq!(scoreboard.lifetime.total_games, 1);
}

#[test]
fn scoreboard_round_trips_through_bincode() {
    let mut scoreboard = Scoreboard::default();
    let _ = scoreboard.record(&PlayerProfile::new("dune", SnakeSkin::Violet), &stats(900));

    let bytes = bincode::serialize(&scoreboard).expect("serialize");
    let restored: Scoreboard = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(restored, scoreboard);
}
