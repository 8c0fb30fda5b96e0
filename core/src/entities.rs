//! Plain data describing everything that lives on the field.

use std::{fmt, str::FromStr, time::Duration};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Direction, GridPos};

/// Colour expressed as byte RGB components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Creates a new colour from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the colour.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the colour.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the colour.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Kinds of food that can appear on the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    /// Common food kept replenished.
    Regular,
    /// Rare high-value food.
    Golden,
    /// Shrinks the snake and scores nothing.
    Poison,
}

impl FoodKind {
    /// Points awarded before combo and double-points multipliers.
    #[must_use]
    pub const fn base_score(self) -> u64 {
        match self {
            Self::Regular => 10,
            Self::Golden => 50,
            Self::Poison => 0,
        }
    }

    /// Colour of the burst emitted when this food is eaten.
    #[must_use]
    pub const fn burst_color(self) -> Rgb {
        match self {
            Self::Regular => Rgb::from_rgb(0xef, 0x44, 0x44),
            Self::Golden => Rgb::from_rgb(0xfb, 0xbf, 0x24),
            Self::Poison => Rgb::from_rgb(0x8b, 0x5c, 0xf6),
        }
    }
}

/// Kinds of collectible power-ups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Shortens the move interval.
    Speed,
    /// Absorbs one fatal collision.
    Shield,
    /// Doubles points earned.
    DoublePoints,
    /// Pulls nearby food toward the head.
    Magnet,
    /// Lets the snake pass through itself.
    Fire,
    /// Lengthens the move interval.
    Freeze,
}

impl PowerUpKind {
    /// Every power-up kind in a stable order.
    pub const ALL: [PowerUpKind; 6] = [
        Self::Speed,
        Self::Shield,
        Self::DoublePoints,
        Self::Magnet,
        Self::Fire,
        Self::Freeze,
    ];

    /// How long the effect lasts after pickup.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Speed | Self::Magnet | Self::Fire => Duration::from_millis(10_000),
            Self::Shield => Duration::from_millis(15_000),
            Self::DoublePoints => Duration::from_millis(12_000),
            Self::Freeze => Duration::from_millis(8_000),
        }
    }
}

/// Unique identifier assigned to a food item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodId(u32);

impl FoodId {
    /// Creates a new food identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a power-up lying on the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PowerUpId(u32);

impl PowerUpId {
    /// Creates a new power-up identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Food waiting to be eaten.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Food {
    /// Identifier allocated by the world.
    pub id: FoodId,
    /// Cell occupied by the food.
    pub cell: GridPos,
    /// Kind of food.
    pub kind: FoodKind,
    /// Phase offset of the bobbing animation, in radians.
    pub bob_phase: f32,
    /// Game clock reading when the food appeared.
    pub spawned_at: Duration,
}

/// Power-up waiting to be collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUp {
    /// Identifier allocated by the world.
    pub id: PowerUpId,
    /// Cell occupied by the power-up.
    pub cell: GridPos,
    /// Effect granted on pickup.
    pub kind: PowerUpKind,
    /// Game clock reading when the power-up appeared.
    pub spawned_at: Duration,
}

/// Power-up effect currently applied to the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    /// Effect being applied.
    pub kind: PowerUpKind,
    /// Time left before the effect ends.
    pub remaining: Duration,
    /// Full duration granted at pickup.
    pub total: Duration,
}

impl ActivePowerUp {
    /// Starts a fresh effect of the provided kind.
    #[must_use]
    pub const fn fresh(kind: PowerUpKind) -> Self {
        let total = kind.duration();
        Self {
            kind,
            remaining: total,
            total,
        }
    }

    /// Fraction of the effect still remaining, from 1.0 down to 0.0.
    #[must_use]
    pub fn fraction_remaining(&self) -> f32 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f32() / self.total.as_secs_f32()
    }
}

/// Static or wandering block that kills on contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    /// Cell occupied by the obstacle.
    pub cell: GridPos,
    /// Whether the obstacle wanders.
    pub moving: bool,
    /// Heading of a wandering obstacle.
    pub move_direction: Option<Direction>,
}

/// Consecutive-eating streak.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComboState {
    /// Current streak length; zero once it lapses.
    pub count: u32,
    /// Game clock reading of the last qualifying eat.
    pub last_eat: Option<Duration>,
    /// Longest streak reached this game.
    pub max: u32,
}

impl ComboState {
    /// Multiplier applied to the next score award.
    #[must_use]
    pub fn multiplier(&self) -> u64 {
        u64::from(self.count.max(1))
    }
}

/// Counters accumulated over a single game and reported at game over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStats {
    /// Total points earned.
    pub score: u64,
    /// Current number of snake segments.
    pub length: u32,
    /// Regular and golden food eaten.
    pub food_eaten: u32,
    /// Golden food eaten.
    pub golden_food_eaten: u32,
    /// Poison food eaten.
    pub poison_food_eaten: u32,
    /// Power-ups picked up.
    pub powerups_collected: u32,
    /// Longest combo reached.
    pub max_combo: u32,
    /// Highest wave number reached.
    pub wave_reached: u32,
    /// Simulated time spent in play.
    pub time_survived: Duration,
}

/// Camera shake requested by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenShake {
    /// Peak displacement the renderer should apply.
    pub intensity: f32,
    /// Time left before the shake stops.
    pub remaining: Duration,
}

impl ScreenShake {
    /// A stationary camera.
    pub const NONE: Self = Self {
        intensity: 0.0,
        remaining: Duration::ZERO,
    };
    /// Short jolt emitted when a shield absorbs a collision.
    pub const SHIELD_ABSORB: Self = Self::new(5.0, Duration::from_millis(300));
    /// Heavy jolt emitted on death.
    pub const DEATH: Self = Self::new(10.0, Duration::from_millis(500));
    /// Light jolt emitted when poison is eaten.
    pub const POISON: Self = Self::new(4.0, Duration::from_millis(200));

    /// Creates a new shake descriptor.
    #[must_use]
    pub const fn new(intensity: f32, remaining: Duration) -> Self {
        Self {
            intensity,
            remaining,
        }
    }

    /// Reports whether the renderer should still shake.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }
}

/// Visual role of a particle, which also selects its decay rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Radiating burst from an eat or death event.
    Burst,
    /// Slowly drifting sand.
    Ambient,
}

/// Transient visual effect. Positions are in cell units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Vec2,
    /// Displacement per 60 Hz frame.
    pub velocity: Vec2,
    /// Remaining life, from 1.0 down to 0.0.
    pub life: f32,
    /// Rendered size in cell units.
    pub size: f32,
    /// Tint of the particle.
    pub color: Rgb,
    /// Opacity; bursts fade with life, ambient keeps its own.
    pub alpha: f32,
    /// Visual role.
    pub kind: ParticleKind,
}

/// Colour scheme worn by the snake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakeSkin {
    /// Green.
    #[default]
    Emerald,
    /// Blue.
    Sapphire,
    /// Red.
    Ruby,
    /// Orange-yellow.
    Amber,
    /// Purple.
    Violet,
    /// Teal.
    Cyan,
    /// Pink.
    Rose,
    /// Slate.
    Obsidian,
}

impl SnakeSkin {
    /// Every skin in menu order.
    pub const ALL: [SnakeSkin; 8] = [
        Self::Emerald,
        Self::Sapphire,
        Self::Ruby,
        Self::Amber,
        Self::Violet,
        Self::Cyan,
        Self::Rose,
        Self::Obsidian,
    ];

    /// Primary body colour, also used for death particles.
    #[must_use]
    pub const fn primary(self) -> Rgb {
        match self {
            Self::Emerald => Rgb::from_rgb(0x34, 0xd3, 0x99),
            Self::Sapphire => Rgb::from_rgb(0x60, 0xa5, 0xfa),
            Self::Ruby => Rgb::from_rgb(0xf8, 0x71, 0x71),
            Self::Amber => Rgb::from_rgb(0xfb, 0xbf, 0x24),
            Self::Violet => Rgb::from_rgb(0xa7, 0x8b, 0xfa),
            Self::Cyan => Rgb::from_rgb(0x22, 0xd3, 0xee),
            Self::Rose => Rgb::from_rgb(0xfb, 0x71, 0x85),
            Self::Obsidian => Rgb::from_rgb(0x94, 0xa3, 0xb8),
        }
    }

    /// Lowercase identifier used in configuration files and flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emerald => "emerald",
            Self::Sapphire => "sapphire",
            Self::Ruby => "ruby",
            Self::Amber => "amber",
            Self::Violet => "violet",
            Self::Cyan => "cyan",
            Self::Rose => "rose",
            Self::Obsidian => "obsidian",
        }
    }
}

impl fmt::Display for SnakeSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a skin name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown snake skin `{0}`")]
pub struct ParseSkinError(String);

impl FromStr for SnakeSkin {
    type Err = ParseSkinError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skin| skin.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseSkinError(value.to_owned()))
    }
}
