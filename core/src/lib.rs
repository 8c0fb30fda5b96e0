#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Sand Serpent engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing player intent and elapsed time, the world executes those
//! commands via its `apply` entry point, and then reports [`Event`] values so
//! systems such as audio cue mapping can react deterministically. Everything an
//! event reports is also observable by diffing consecutive world snapshots.

use std::time::Duration;

use serde::{Deserialize, Serialize};

mod entities;
mod grid;
pub mod tuning;
mod waves;

pub use entities::{
    ActivePowerUp, ComboState, Food, FoodId, FoodKind, GameStats, Obstacle, ParseSkinError,
    Particle, ParticleKind, PowerUp, PowerUpId, PowerUpKind, Rgb, ScreenShake, SnakeSkin,
};
pub use grid::{Direction, GridPos, GridSize};
pub use waves::{wave_for_food_count, Difficulty, ParseDifficultyError, WaveInfo, WAVES};

/// Lifecycle phase of a single game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Board laid out, waiting for the first start command.
    #[default]
    Idle,
    /// Simulation advancing normally.
    Running,
    /// Simulation frozen by the player.
    Paused,
    /// Non-interactive wave banner; the snake holds still.
    Transitioning,
    /// Snake has died; lingers so the death animation can play.
    Dead,
    /// Terminal phase; final statistics have been reported.
    GameOver,
}

/// Collisions that end the game unless a shield absorbs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FatalCollision {
    /// Head left the field.
    Wall,
    /// Head entered one of its own body segments.
    SelfBite,
    /// Head entered an obstacle.
    Obstacle,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Discards the current game and starts a new one.
    StartGame,
    /// Buffers a heading change for the next movement step.
    RequestDirection {
        /// Heading requested by the input layer.
        direction: Direction,
    },
    /// Flips between running and paused.
    TogglePause,
    /// Advances the simulation by the provided wall-clock delta.
    Tick {
        /// Time that elapsed since the previous frame.
        dt: Duration,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A new game has been laid out and is running.
    GameStarted {
        /// Difficulty the game runs at.
        difficulty: Difficulty,
    },
    /// Indicates that the game clock advanced.
    TimeAdvanced {
        /// Simulated time consumed by the tick after capping.
        dt: Duration,
    },
    /// Announces that the game entered a new phase.
    PhaseChanged {
        /// Phase that became active.
        phase: Phase,
    },
    /// Confirms that a direction request was accepted.
    DirectionQueued {
        /// Heading that will apply at the next step.
        direction: Direction,
    },
    /// Confirms that the snake took one grid step.
    SnakeAdvanced {
        /// Head cell before the step.
        from: GridPos,
        /// Head cell after the step.
        to: GridPos,
    },
    /// Reports that food was eaten.
    FoodEaten {
        /// Identifier of the eaten food.
        food: FoodId,
        /// Kind of the eaten food.
        kind: FoodKind,
        /// Cell where the food was eaten.
        cell: GridPos,
        /// Points awarded for it.
        points: u64,
        /// Combo count after the eat.
        combo: u32,
    },
    /// Confirms that food appeared on the field.
    FoodSpawned {
        /// Identifier allocated to the food.
        food: FoodId,
        /// Kind of food.
        kind: FoodKind,
        /// Cell it occupies.
        cell: GridPos,
    },
    /// Confirms that a power-up appeared on the field.
    PowerUpSpawned {
        /// Identifier allocated to the power-up.
        power_up: PowerUpId,
        /// Effect it grants.
        kind: PowerUpKind,
        /// Cell it occupies.
        cell: GridPos,
    },
    /// Reports that a power-up was picked up and its effect started.
    PowerUpCollected {
        /// Effect that started.
        kind: PowerUpKind,
    },
    /// Reports that an active effect ran out.
    PowerUpExpired {
        /// Effect that ended.
        kind: PowerUpKind,
    },
    /// Reports that a running combo lapsed.
    ComboBroken {
        /// Streak length at the moment it lapsed.
        count: u32,
    },
    /// Reports that a shield absorbed a fatal collision.
    ShieldAbsorbed {
        /// Collision that was absorbed.
        cause: FatalCollision,
    },
    /// Reports that the snake died.
    SnakeDied {
        /// Collision that killed it.
        cause: FatalCollision,
    },
    /// Announces that a new wave began.
    WaveStarted {
        /// One-based number of the new wave.
        wave: u32,
    },
    /// Final statistics of the finished game.
    GameOver {
        /// Statistics accumulated over the game.
        stats: GameStats,
    },
}
