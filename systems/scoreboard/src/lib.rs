#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Score ratings, the top-ten high-score table and lifetime statistics.
//!
//! Records derive `serde` so an outer persistence layer can store them in any
//! format; this crate never touches storage.

use std::{fmt, time::Duration};

use sand_serpent_core::{Event, GameStats, SnakeSkin};
use serde::{Deserialize, Serialize};

/// Number of entries kept in the high-score table.
pub const HIGH_SCORE_CAPACITY: usize = 10;

/// Title awarded for a final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    /// Below 100 points.
    Hatchling,
    /// 100 points or more.
    DesertCrawler,
    /// 500 points or more.
    SandViper,
    /// 1000 points or more.
    GoldenSerpent,
    /// 2500 points or more.
    SandGod,
}

impl Rating {
    const THRESHOLDS: [(u64, Rating); 5] = [
        (2_500, Rating::SandGod),
        (1_000, Rating::GoldenSerpent),
        (500, Rating::SandViper),
        (100, Rating::DesertCrawler),
        (0, Rating::Hatchling),
    ];

    /// Minimum score that earns this rating.
    #[must_use]
    pub fn min_score(self) -> u64 {
        Self::THRESHOLDS
            .iter()
            .find(|(_, rating)| *rating == self)
            .map_or(0, |(min, _)| *min)
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Rating::Hatchling => "Hatchling",
            Rating::DesertCrawler => "Desert Crawler",
            Rating::SandViper => "Sand Viper",
            Rating::GoldenSerpent => "Golden Serpent",
            Rating::SandGod => "Sand God",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Returns the highest rating whose threshold the score reaches.
#[must_use]
pub fn rating_for(score: u64) -> Rating {
    Rating::THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map_or(Rating::Hatchling, |(_, rating)| *rating)
}

/// Player details attached to a recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Name shown in the table.
    pub name: String,
    /// Skin the game was played with.
    pub skin: SnakeSkin,
}

impl PlayerProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(name: impl Into<String>, skin: SnakeSkin) -> Self {
        Self {
            name: name.into(),
            skin,
        }
    }
}

/// One row of the high-score table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player name.
    pub name: String,
    /// Final score.
    pub score: u64,
    /// Skin worn during the game.
    pub skin: SnakeSkin,
    /// Wave reached.
    pub wave: u32,
    /// Final snake length.
    pub length: u32,
}

impl HighScoreEntry {
    /// Builds an entry from a profile and final statistics.
    #[must_use]
    pub fn from_stats(profile: &PlayerProfile, stats: &GameStats) -> Self {
        Self {
            name: profile.name.clone(),
            score: stats.score,
            skin: profile.skin,
            wave: stats.wave_reached,
            length: stats.length,
        }
    }
}

/// Best scores, highest first, capped at [`HIGH_SCORE_CAPACITY`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries ordered from best to worst.
    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Reports whether the score would earn a place in the table.
    #[must_use]
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < HIGH_SCORE_CAPACITY {
            return score > 0;
        }
        self.entries
            .last()
            .map_or(score > 0, |lowest| score > lowest.score)
    }

    /// Inserts an entry and returns its zero-based rank if it was kept.
    ///
    /// Ties rank below entries already in the table.
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self
            .entries
            .partition_point(|existing| existing.score >= entry.score);
        if rank >= HIGH_SCORE_CAPACITY {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(HIGH_SCORE_CAPACITY);
        Some(rank)
    }
}

/// Totals accumulated across every finished game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    /// Games finished.
    pub total_games: u32,
    /// Sum of final scores.
    pub total_score: u64,
    /// Sum of food eaten.
    pub total_food_eaten: u64,
    /// Longest combo ever reached.
    pub best_combo: u32,
    /// Sum of time survived.
    pub total_play_time: Duration,
}

impl LifetimeStats {
    /// Folds one finished game into the totals.
    pub fn record(&mut self, stats: &GameStats) {
        self.total_games += 1;
        self.total_score += stats.score;
        self.total_food_eaten += u64::from(stats.food_eaten);
        self.best_combo = self.best_combo.max(stats.max_combo);
        self.total_play_time += stats.time_survived;
    }
}

/// Outcome of recording a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// Rating earned by the final score.
    pub rating: Rating,
    /// Rank in the high-score table, when the score made it in.
    pub rank: Option<usize>,
}

/// Pure system that folds game-over events into the persistent records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Best scores.
    pub high_scores: HighScoreTable,
    /// Lifetime totals.
    pub lifetime: LifetimeStats,
}

impl Scoreboard {
    /// Records every game-over reported in `events` for the given player.
    pub fn handle(
        &mut self,
        events: &[Event],
        profile: &PlayerProfile,
        out: &mut Vec<GameRecord>,
    ) {
        for event in events {
            if let Event::GameOver { stats } = event {
                out.push(self.record(profile, stats));
            }
        }
    }

    /// Records one finished game.
    pub fn record(&mut self, profile: &PlayerProfile, stats: &GameStats) -> GameRecord {
        self.lifetime.record(stats);
        let rank = if self.high_scores.qualifies(stats.score) {
            self.high_scores
                .insert(HighScoreEntry::from_stats(profile, stats))
        } else {
            None
        };
        GameRecord {
            rating: rating_for(stats.score),
            rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{rating_for, Rating};

    #[test]
    fn ratings_switch_at_thresholds() {
        assert_eq!(rating_for(0), Rating::Hatchling);
        assert_eq!(rating_for(99), Rating::Hatchling);
        assert_eq!(rating_for(100), Rating::DesertCrawler);
        assert_eq!(rating_for(499), Rating::DesertCrawler);
        assert_eq!(rating_for(500), Rating::SandViper);
        assert_eq!(rating_for(1_000), Rating::GoldenSerpent);
        assert_eq!(rating_for(2_499), Rating::GoldenSerpent);
        assert_eq!(rating_for(2_500), Rating::SandGod);
        assert_eq!(rating_for(u64::MAX), Rating::SandGod);
    }

    #[test]
    fn min_score_matches_lookup() {
        for rating in [
            Rating::Hatchling,
            Rating::DesertCrawler,
            Rating::SandViper,
            Rating::GoldenSerpent,
            Rating::SandGod,
        ] {
            assert_eq!(rating_for(rating.min_score()), rating);
        }
    }
}
