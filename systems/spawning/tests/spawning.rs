use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sand_serpent_core::{
    tuning, Difficulty, Direction, GridPos, GridSize, Obstacle, PowerUpKind, WAVES,
};
use sand_serpent_system_spawning::{
    find_empty_cell, generate_obstacles, initial_snake, move_obstacles, power_up_threshold,
    random_power_up_kind, Occupancy,
};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn full_grid_yields_no_cell() {
    let grid = GridSize::new(4);
    let mut occupancy = Occupancy::new(grid);
    occupancy.extend(grid.cells());

    assert_eq!(find_empty_cell(&occupancy, &mut rng(1)), None);
}

#[test]
fn last_free_cell_is_always_chosen() {
    let grid = GridSize::new(5);
    let mut occupancy = Occupancy::new(grid);
    occupancy.extend(grid.cells().filter(|cell| *cell != GridPos::new(3, 1)));

    for seed in 0..16 {
        assert_eq!(
            find_empty_cell(&occupancy, &mut rng(seed)),
            Some(GridPos::new(3, 1))
        );
    }
}

#[test]
fn empty_cell_search_is_deterministic_per_seed() {
    let grid = GridSize::new(30);
    let mut occupancy = Occupancy::new(grid);
    occupancy.extend([GridPos::new(15, 15), GridPos::new(14, 15)]);

    let first = find_empty_cell(&occupancy, &mut rng(99));
    let second = find_empty_cell(&occupancy, &mut rng(99));
    assert_eq!(first, second);
    let cell = first.expect("plenty of room");
    assert!(occupancy.is_free(cell));
}

#[test]
fn initial_snake_is_centred_and_faces_right() {
    let (segments, direction) = initial_snake(Difficulty::Normal.grid_size());

    assert_eq!(direction, Direction::Right);
    assert_eq!(segments.len(), tuning::INITIAL_SNAKE_LENGTH);
    assert_eq!(
        segments,
        vec![
            GridPos::new(15, 15),
            GridPos::new(14, 15),
            GridPos::new(13, 15),
            GridPos::new(12, 15),
        ]
    );
}

#[test]
fn hardcore_pool_never_offers_shields() {
    let mut source = rng(7);
    for _ in 0..500 {
        assert_ne!(
            random_power_up_kind(Difficulty::Hardcore, &mut source),
            PowerUpKind::Shield
        );
    }
}

#[test]
fn normal_pool_eventually_offers_shields() {
    let mut source = rng(7);
    let offered = (0..500).any(|_| {
        random_power_up_kind(Difficulty::Normal, &mut source) == PowerUpKind::Shield
    });
    assert!(offered);
}

#[test]
fn power_up_threshold_stays_within_bounds() {
    let mut source = rng(3);
    for _ in 0..200 {
        let threshold = power_up_threshold(&mut source);
        assert!(
            (tuning::POWERUP_THRESHOLD_MIN..=tuning::POWERUP_THRESHOLD_MAX).contains(&threshold)
        );
    }
}

#[test]
fn obstacles_respect_margin_and_occupancy() {
    let grid = GridSize::new(30);
    let wave = &WAVES[19];
    let mut occupancy = Occupancy::new(grid);
    let (snake, _) = initial_snake(grid);
    occupancy.extend(snake.iter().copied());

    let obstacles = generate_obstacles(wave, &mut occupancy, &mut rng(11));

    assert_eq!(obstacles.len(), tuning::MAX_OBSTACLES);
    for obstacle in &obstacles {
        let cell = obstacle.cell;
        assert!(cell.x() >= tuning::OBSTACLE_MARGIN && cell.x() < 30 - tuning::OBSTACLE_MARGIN);
        assert!(cell.y() >= tuning::OBSTACLE_MARGIN && cell.y() < 30 - tuning::OBSTACLE_MARGIN);
        assert!(!snake.contains(&cell));
        assert!(!occupancy.is_free(cell), "placement must mark occupancy");
        assert_eq!(obstacle.moving, obstacle.move_direction.is_some());
    }
}

#[test]
fn waves_without_obstacles_place_none() {
    let grid = GridSize::new(24);
    let mut occupancy = Occupancy::new(grid);
    assert!(generate_obstacles(&WAVES[0], &mut occupancy, &mut rng(5)).is_empty());
}

#[test]
fn crowded_interior_gives_up_silently() {
    let grid = GridSize::new(24);
    let mut occupancy = Occupancy::new(grid);
    occupancy.extend(grid.cells());

    assert!(generate_obstacles(&WAVES[15], &mut occupancy, &mut rng(5)).is_empty());
}

#[test]
fn moving_obstacles_bounce_off_the_border() {
    let grid = GridSize::new(10);
    let mut obstacles = [
        Obstacle {
            cell: GridPos::new(1, 5),
            moving: true,
            move_direction: Some(Direction::Left),
        },
        Obstacle {
            cell: GridPos::new(4, 4),
            moving: true,
            move_direction: Some(Direction::Down),
        },
        Obstacle {
            cell: GridPos::new(6, 6),
            moving: false,
            move_direction: None,
        },
    ];

    move_obstacles(&mut obstacles, grid);

    assert_eq!(obstacles[0].cell, GridPos::new(2, 5));
    assert_eq!(obstacles[0].move_direction, Some(Direction::Right));
    assert_eq!(obstacles[1].cell, GridPos::new(4, 5));
    assert_eq!(obstacles[1].move_direction, Some(Direction::Down));
    assert_eq!(obstacles[2].cell, GridPos::new(6, 6));
}

#[test]
fn obstacle_reaching_far_border_turns_back() {
    let grid = GridSize::new(10);
    let mut obstacles = [Obstacle {
        cell: GridPos::new(5, 8),
        moving: true,
        move_direction: Some(Direction::Down),
    }];

    move_obstacles(&mut obstacles, grid);

    assert_eq!(obstacles[0].cell, GridPos::new(5, 7));
    assert_eq!(obstacles[0].move_direction, Some(Direction::Up));
}
