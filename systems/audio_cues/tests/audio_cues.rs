use std::time::Duration;

use sand_serpent_core::{
    Direction, Event, FatalCollision, FoodId, FoodKind, GameStats, GridPos, Phase, PowerUpKind,
};
use sand_serpent_system_audio_cues::{AudioCues, Cue};

fn eaten(kind: FoodKind, combo: u32) -> Event {
    Event::FoodEaten {
        food: FoodId::new(7),
        kind,
        cell: GridPos::new(3, 4),
        points: 10,
        combo,
    }
}

fn cues_for(events: &[Event]) -> Vec<Cue> {
    let mut out = Vec::new();
    AudioCues::new().handle(events, &mut out);
    out
}

#[test]
fn each_food_kind_has_its_own_cue() {
    let cues = cues_for(&[
        eaten(FoodKind::Regular, 1),
        eaten(FoodKind::Golden, 2),
        eaten(FoodKind::Poison, 2),
    ]);
    assert_eq!(cues, vec![Cue::EatFood, Cue::EatGolden, Cue::EatPoison]);
}

#[test]
fn milestone_combo_adds_a_fanfare() {
    let cues = cues_for(&[eaten(FoodKind::Regular, 4), eaten(FoodKind::Regular, 5)]);
    assert_eq!(cues, vec![Cue::EatFood, Cue::EatFood, Cue::ComboMilestone]);
}

#[test]
fn short_combo_breaks_stay_silent() {
    assert!(cues_for(&[Event::ComboBroken { count: 2 }]).is_empty());
    assert_eq!(
        cues_for(&[Event::ComboBroken { count: 3 }]),
        vec![Cue::ComboBreak]
    );
}

#[test]
fn death_sequence_maps_in_order() {
    let cues = cues_for(&[
        Event::ShieldAbsorbed {
            cause: FatalCollision::Wall,
        },
        Event::SnakeDied {
            cause: FatalCollision::SelfBite,
        },
        Event::PhaseChanged { phase: Phase::Dead },
        Event::GameOver {
            stats: GameStats::default(),
        },
    ]);
    assert_eq!(cues, vec![Cue::ShieldBreak, Cue::WallHit, Cue::GameOver]);
}

#[test]
fn bookkeeping_events_are_silent() {
    let cues = cues_for(&[
        Event::TimeAdvanced {
            dt: Duration::from_millis(16),
        },
        Event::SnakeAdvanced {
            from: GridPos::new(1, 1),
            to: GridPos::new(2, 1),
        },
        Event::DirectionQueued {
            direction: Direction::Up,
        },
        Event::PowerUpCollected {
            kind: PowerUpKind::Magnet,
        },
        Event::PowerUpExpired {
            kind: PowerUpKind::Magnet,
        },
        Event::WaveStarted { wave: 2 },
    ]);
    assert_eq!(
        cues,
        vec![Cue::SnakeTurn, Cue::PowerUpGet, Cue::PowerUpEnd, Cue::WaveStart]
    );
}
