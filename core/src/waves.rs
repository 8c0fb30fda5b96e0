//! Difficulty presets and the static wave progression table.

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{grid::GridSize, tuning};

/// Difficulty tier selected before a game starts.
///
/// Difficulty picks the grid size, the base movement interval, and whether
/// shields are ever offered. It never changes wave content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Larger interval, smallest grid.
    Casual,
    /// Default tier.
    #[default]
    Normal,
    /// Fast snake, biggest grid, no shield power-ups.
    Hardcore,
}

impl Difficulty {
    /// Every difficulty tier in ascending order.
    pub const ALL: [Difficulty; 3] = [Self::Casual, Self::Normal, Self::Hardcore];

    /// Side length of the playing field.
    #[must_use]
    pub const fn grid_size(self) -> GridSize {
        match self {
            Self::Casual => GridSize::new(24),
            Self::Normal => GridSize::new(30),
            Self::Hardcore => GridSize::new(36),
        }
    }

    /// Time between snake steps before wave and power-up modifiers.
    #[must_use]
    pub const fn base_move_interval(self) -> Duration {
        match self {
            Self::Casual => Duration::from_millis(150),
            Self::Normal => Duration::from_millis(120),
            Self::Hardcore => Duration::from_millis(90),
        }
    }

    /// Whether the shield power-up belongs to the random spawn pool.
    #[must_use]
    pub const fn offers_shield(self) -> bool {
        !matches!(self, Self::Hardcore)
    }

    /// Lowercase identifier used in configuration files and flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Normal => "normal",
            Self::Hardcore => "hardcore",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a difficulty name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}`, expected casual, normal or hardcore")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseDifficultyError(value.to_owned()))
    }
}

/// Static descriptor of a single wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveInfo {
    /// One-based wave number.
    pub number: u32,
    /// Display name of the tier the wave belongs to.
    pub name: &'static str,
    /// Divisor applied to the base movement interval.
    pub speed_multiplier: f32,
    /// Whether golden food may spawn.
    pub has_golden_food: bool,
    /// Whether poison food may spawn.
    pub has_poison_food: bool,
    /// Whether obstacles are placed when the wave begins.
    pub has_obstacles: bool,
    /// Whether some of those obstacles wander.
    pub has_moving_obstacles: bool,
    /// Whether ambient sand drifts across the field.
    pub sand_particles: bool,
}

impl WaveInfo {
    const fn tier(
        number: u32,
        name: &'static str,
        speed_multiplier: f32,
        flags: [bool; 5],
    ) -> Self {
        Self {
            number,
            name,
            speed_multiplier,
            has_golden_food: flags[0],
            has_poison_food: flags[1],
            has_obstacles: flags[2],
            has_moving_obstacles: flags[3],
            sand_particles: flags[4],
        }
    }

    /// Number of obstacles placed when this wave starts, capped at the maximum.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        if !self.has_obstacles {
            return 0;
        }
        let count = self.number.saturating_sub(9) as usize;
        count.min(tuning::MAX_OBSTACLES)
    }
}

const DUNES: [bool; 5] = [false, false, false, false, false];
const OASIS: [bool; 5] = [true, false, false, false, false];
const STORM: [bool; 5] = [true, true, false, false, true];
const RUINS: [bool; 5] = [true, true, true, false, true];
const LAIR: [bool; 5] = [true, true, true, true, true];

/// Ordered wave table. The last entry persists once it is reached.
pub const WAVES: [WaveInfo; 20] = [
    WaveInfo::tier(1, "Desert Dunes", 1.0, DUNES),
    WaveInfo::tier(2, "Desert Dunes", 1.0, DUNES),
    WaveInfo::tier(3, "Desert Dunes", 1.0, DUNES),
    WaveInfo::tier(4, "Oasis Path", 1.1, OASIS),
    WaveInfo::tier(5, "Oasis Path", 1.1, OASIS),
    WaveInfo::tier(6, "Oasis Path", 1.1, OASIS),
    WaveInfo::tier(7, "Sandstorm", 1.2, STORM),
    WaveInfo::tier(8, "Sandstorm", 1.2, STORM),
    WaveInfo::tier(9, "Sandstorm", 1.2, STORM),
    WaveInfo::tier(10, "Ancient Ruins", 1.3, RUINS),
    WaveInfo::tier(11, "Ancient Ruins", 1.3, RUINS),
    WaveInfo::tier(12, "Ancient Ruins", 1.3, RUINS),
    WaveInfo::tier(13, "Dragon's Lair", 1.5, LAIR),
    WaveInfo::tier(14, "Dragon's Lair", 1.5, LAIR),
    WaveInfo::tier(15, "Dragon's Lair", 1.5, LAIR),
    WaveInfo::tier(16, "Infinite Sands", 1.6, LAIR),
    WaveInfo::tier(17, "Infinite Sands", 1.7, LAIR),
    WaveInfo::tier(18, "Infinite Sands", 1.8, LAIR),
    WaveInfo::tier(19, "Infinite Sands", 1.9, LAIR),
    WaveInfo::tier(20, "Infinite Sands", 2.0, LAIR),
];

/// Looks up the wave reached after eating `total_food_eaten` qualifying foods.
#[must_use]
pub fn wave_for_food_count(total_food_eaten: u32) -> &'static WaveInfo {
    let index = (total_food_eaten / tuning::FOOD_PER_WAVE) as usize;
    &WAVES[index.min(WAVES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_lookup_is_pure() {
        for count in [0, 14, 15, 29, 150, 10_000] {
            assert_eq!(wave_for_food_count(count), wave_for_food_count(count));
        }
    }

    #[test]
    fn wave_boundaries_follow_food_per_wave() {
        assert_eq!(wave_for_food_count(0).number, 1);
        assert_eq!(wave_for_food_count(14).number, 1);
        assert_eq!(wave_for_food_count(15).number, 2);
        assert_eq!(wave_for_food_count(135).number, 10);
    }

    #[test]
    fn last_wave_persists() {
        assert_eq!(wave_for_food_count(19 * 15).number, 20);
        assert_eq!(wave_for_food_count(u32::MAX).number, 20);
    }

    #[test]
    fn obstacle_count_scales_and_caps() {
        assert_eq!(WAVES[8].obstacle_count(), 0);
        assert_eq!(WAVES[9].obstacle_count(), 1);
        assert_eq!(WAVES[12].obstacle_count(), 4);
        assert_eq!(WAVES[19].obstacle_count(), 8);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("HardCore".parse::<Difficulty>(), Ok(Difficulty::Hardcore));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn hardcore_withholds_shields() {
        assert!(Difficulty::Casual.offers_shield());
        assert!(!Difficulty::Hardcore.offers_shield());
    }
}
