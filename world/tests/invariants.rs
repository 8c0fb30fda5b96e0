use std::{collections::HashSet, time::Duration};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sand_serpent_core::{tuning, Command, Difficulty, Direction, Event, Phase, SnakeSkin};
use sand_serpent_world::{self as world, query, GameConfig, World};

const FRAMES_PER_RUN: usize = 6_000;

#[test]
fn random_play_upholds_engine_invariants() {
    for (seed, difficulty) in [
        (3, Difficulty::Casual),
        (11, Difficulty::Normal),
        (29, Difficulty::Hardcore),
    ] {
        play_randomly(seed, difficulty);
    }
}

fn play_randomly(seed: u64, difficulty: Difficulty) {
    let mut world = World::new(GameConfig::new(difficulty, seed, SnakeSkin::Cyan));
    let mut input = ChaCha8Rng::seed_from_u64(seed ^ 0xabcd);
    let mut events = Vec::new();
    world::apply(&mut world, Command::StartGame, &mut events);

    let mut previous_direction = query::snake(&world).direction;
    for _ in 0..FRAMES_PER_RUN {
        events.clear();
        if input.gen_bool(0.1) {
            let direction = Direction::ALL[input.gen_range(0..4)];
            world::apply(&mut world, Command::RequestDirection { direction }, &mut events);
        }
        let dt = Duration::from_millis(input.gen_range(5..=140));
        world::apply(&mut world, Command::Tick { dt }, &mut events);

        let snake = query::snake(&world);
        assert!(snake.len() >= tuning::MIN_SNAKE_LENGTH);
        if snake.alive {
            assert!(
                !snake.direction.is_opposite(previous_direction),
                "snake reversed from {previous_direction:?} to {:?}",
                snake.direction
            );
        }
        previous_direction = snake.direction;

        let kinds: HashSet<_> = query::active_power_ups(&world)
            .iter()
            .map(|active| active.kind)
            .collect();
        assert_eq!(kinds.len(), query::active_power_ups(&world).len());
        assert!(query::move_interval(&world) >= tuning::MIN_MOVE_INTERVAL);
        assert!(query::particles(&world).len() <= tuning::MAX_PARTICLES);
        assert!(query::obstacles(&world).len() <= tuning::MAX_OBSTACLES);

        let grid = query::grid(&world);
        assert!(query::foods(&world).iter().all(|food| grid.contains(food.cell)));
        assert_eq!(
            query::stats(&world).length as usize,
            snake.len(),
            "length stat tracks the body"
        );

        if events
            .iter()
            .any(|event| matches!(event, Event::SnakeAdvanced { .. }))
        {
            assert!(
                matches!(query::phase(&world), Phase::Running | Phase::Dead | Phase::Transitioning)
            );
        }

        if query::is_game_over(&world) {
            events.clear();
            world::apply(&mut world, Command::StartGame, &mut events);
            previous_direction = query::snake(&world).direction;
        }
    }
}
