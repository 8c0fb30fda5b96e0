//! Fixed gameplay constants shared by the world and the systems.

use std::time::Duration;

/// Segments in a freshly created snake.
pub const INITIAL_SNAKE_LENGTH: usize = 4;
/// Floor applied whenever the snake shrinks.
pub const MIN_SNAKE_LENGTH: usize = 2;
/// Segments removed by eating poison.
pub const POISON_SEGMENT_LOSS: usize = 3;

/// Regular food kept on the field at all times.
pub const REGULAR_FOOD_TARGET: usize = 3;
/// Qualifying eats between golden food spawns.
pub const GOLDEN_FOOD_INTERVAL: u32 = 15;
/// Chance that a qualifying eat spawns poison food when the wave allows it.
pub const POISON_SPAWN_CHANCE: f64 = 0.15;
/// Qualifying eats per wave.
pub const FOOD_PER_WAVE: u32 = 15;

/// Lower bound of the eats-since-last-power-up threshold.
pub const POWERUP_THRESHOLD_MIN: u32 = 8;
/// Upper bound (inclusive) of the eats-since-last-power-up threshold.
pub const POWERUP_THRESHOLD_MAX: u32 = 12;
/// Fraction removed from the move interval while a speed boost is active.
pub const SPEED_BOOST_FACTOR: f64 = 0.5;
/// Divisor applied to the move interval while freeze is active.
pub const FREEZE_SLOW_FACTOR: f64 = 0.5;
/// Euclidean cell radius within which magnet pulls food.
pub const MAGNET_RADIUS: i32 = 3;

/// Idle time after which a combo lapses.
pub const COMBO_TIMEOUT: Duration = Duration::from_millis(2_500);
/// Combo count that earns the milestone fanfare.
pub const COMBO_MILESTONE: u32 = 5;

/// Largest frame delta the simulation will consume in one tick.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);
/// Fastest permitted move interval.
pub const MIN_MOVE_INTERVAL: Duration = Duration::from_millis(40);
/// Period of the cosmetic tongue flick.
pub const TONGUE_INTERVAL: Duration = Duration::from_millis(1_000);
/// Time spent in the dead phase before the game is over.
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(1_500);
/// Length of the non-interactive wave banner.
pub const WAVE_TRANSITION_DURATION: Duration = Duration::from_millis(2_000);

/// Obstacle cap regardless of wave number.
pub const MAX_OBSTACLES: usize = 8;
/// Cells kept clear along each edge when placing obstacles.
pub const OBSTACLE_MARGIN: i32 = 4;
/// Random placements tried per obstacle before giving up.
pub const OBSTACLE_PLACEMENT_ATTEMPTS: usize = 100;
/// Chance that moving obstacles step on a given snake step.
pub const OBSTACLE_MOVE_CHANCE: f64 = 0.33;

/// Upper bound on live particles.
pub const MAX_PARTICLES: usize = 200;
/// Burst size for regular and poison food.
pub const EAT_PARTICLE_COUNT: usize = 10;
/// Burst size for golden food.
pub const GOLDEN_EAT_PARTICLE_COUNT: usize = 16;
/// Burst size for power-up pickups.
pub const POWERUP_PARTICLE_COUNT: usize = 12;
/// Segments that shed particles on death.
pub const DEATH_PARTICLE_SEGMENTS: usize = 20;
/// Particles shed per dying segment.
pub const DEATH_PARTICLES_PER_SEGMENT: usize = 3;
/// Ambient sand particles kept alive on sandy waves.
pub const AMBIENT_PARTICLE_COUNT: usize = 30;

/// Multiplier applied to the shake intensity every tick.
pub const SHAKE_DECAY: f32 = 0.9;
/// Intensity below which the shake snaps to zero.
pub const SHAKE_THRESHOLD: f32 = 0.1;
