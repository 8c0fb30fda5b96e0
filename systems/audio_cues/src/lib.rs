#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that maps engine events onto the sound effects an audio layer
//! should trigger. It never synthesizes sound itself.

use std::fmt;

use sand_serpent_core::{tuning, Event, FoodKind};

/// Combo length whose loss is loud enough to deserve a sound.
const AUDIBLE_COMBO_BREAK: u32 = 3;

/// Discrete sound effect requested from the audio layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cue {
    /// Regular food eaten.
    EatFood,
    /// Golden food eaten.
    EatGolden,
    /// Poison food eaten.
    EatPoison,
    /// Power-up collected.
    PowerUpGet,
    /// Power-up effect ran out.
    PowerUpEnd,
    /// Shield absorbed a fatal collision.
    ShieldBreak,
    /// Combo reached the milestone streak.
    ComboMilestone,
    /// A sizeable combo lapsed.
    ComboBreak,
    /// Snake died against something.
    WallHit,
    /// Game over banner.
    GameOver,
    /// A new wave began.
    WaveStart,
    /// Player changed heading.
    SnakeTurn,
}

impl Cue {
    /// Every cue in declaration order.
    pub const ALL: [Cue; 12] = [
        Cue::EatFood,
        Cue::EatGolden,
        Cue::EatPoison,
        Cue::PowerUpGet,
        Cue::PowerUpEnd,
        Cue::ShieldBreak,
        Cue::ComboMilestone,
        Cue::ComboBreak,
        Cue::WallHit,
        Cue::GameOver,
        Cue::WaveStart,
        Cue::SnakeTurn,
    ];

    /// Stable identifier of the sound asset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Cue::EatFood => "eat_food",
            Cue::EatGolden => "eat_golden",
            Cue::EatPoison => "eat_poison",
            Cue::PowerUpGet => "powerup_get",
            Cue::PowerUpEnd => "powerup_end",
            Cue::ShieldBreak => "shield_break",
            Cue::ComboMilestone => "combo_x5",
            Cue::ComboBreak => "combo_break",
            Cue::WallHit => "wall_hit",
            Cue::GameOver => "game_over",
            Cue::WaveStart => "wave_start",
            Cue::SnakeTurn => "snake_turn",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless mapping from world events to cues.
#[derive(Debug, Default)]
pub struct AudioCues;

impl AudioCues {
    /// Creates the cue mapper.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Consumes world events and appends the cues they trigger, in order.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Cue>) {
        for event in events {
            match event {
                Event::FoodEaten { kind, combo, .. } => {
                    out.push(match kind {
                        FoodKind::Regular => Cue::EatFood,
                        FoodKind::Golden => Cue::EatGolden,
                        FoodKind::Poison => Cue::EatPoison,
                    });
                    if *kind != FoodKind::Poison && *combo == tuning::COMBO_MILESTONE {
                        out.push(Cue::ComboMilestone);
                    }
                }
                Event::PowerUpCollected { .. } => out.push(Cue::PowerUpGet),
                Event::PowerUpExpired { .. } => out.push(Cue::PowerUpEnd),
                Event::ShieldAbsorbed { .. } => out.push(Cue::ShieldBreak),
                Event::ComboBroken { count } if *count >= AUDIBLE_COMBO_BREAK => {
                    out.push(Cue::ComboBreak);
                }
                Event::SnakeDied { .. } => out.push(Cue::WallHit),
                Event::GameOver { .. } => out.push(Cue::GameOver),
                Event::WaveStarted { .. } => out.push(Cue::WaveStart),
                Event::DirectionQueued { .. } => out.push(Cue::SnakeTurn),
                _ => {}
            }
        }
    }
}
