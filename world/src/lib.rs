#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state and tick engine for Sand Serpent.
//!
//! The world owns every piece of mutable game state. Adapters drive it through
//! [`apply`] (or the pure [`advance`] wrapper) and read it back through the
//! [`query`] module between ticks.

use std::{f32::consts::TAU, time::Duration};

use rand::Rng;
use sand_serpent_core::{
    tuning, wave_for_food_count, ActivePowerUp, ComboState, Command, Difficulty, Direction, Event,
    FatalCollision, Food, FoodId, FoodKind, GameStats, GridPos, GridSize, Obstacle, Particle,
    Phase, PowerUp, PowerUpId, PowerUpKind, Rgb, ScreenShake, SnakeSkin, WaveInfo,
};
use sand_serpent_system_collision::{first_fatal, food_at, power_up_at, CollisionRules};
use sand_serpent_system_particles as particles;
use sand_serpent_system_spawning::{
    find_empty_cell, generate_obstacles, move_obstacles, power_up_threshold, random_power_up_kind,
    Occupancy,
};
use tracing::{debug, info};

#[cfg(any(test, feature = "scenario_scaffolding"))]
pub mod scaffolding;
mod snake;
mod streams;

pub use snake::Segment;

use snake::Snake;
use streams::RngStreams;

const DEFAULT_SEED: u64 = 0x5a4d_5e12_7e47_0001;
const POWER_UP_BURST_COLOR: Rgb = Rgb::from_rgb(0xfb, 0xbf, 0x24);

/// Settings chosen before a game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Seed from which every random stream is derived.
    pub seed: u64,
    /// Colour scheme worn by the snake.
    pub skin: SnakeSkin,
}

impl GameConfig {
    /// Creates a new configuration.
    #[must_use]
    pub const fn new(difficulty: Difficulty, seed: u64, skin: SnakeSkin) -> Self {
        Self {
            difficulty,
            seed,
            skin,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Difficulty::Normal, DEFAULT_SEED, SnakeSkin::Emerald)
    }
}

/// Inputs gathered by the adapter during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Heading requested by the player, if any.
    pub requested_direction: Option<Direction>,
    /// Whether the player asked to flip the pause state.
    pub toggle_pause: bool,
}

/// Represents the authoritative Sand Serpent world state.
#[derive(Clone, Debug)]
pub struct World {
    config: GameConfig,
    game_index: u64,
    grid: GridSize,
    phase: Phase,
    phase_elapsed: Duration,
    snake: Snake,
    foods: Vec<Food>,
    power_ups: Vec<PowerUp>,
    active_power_ups: Vec<ActivePowerUp>,
    obstacles: Vec<Obstacle>,
    particles: Vec<Particle>,
    combo: ComboState,
    stats: GameStats,
    wave: &'static WaveInfo,
    shake: ScreenShake,
    clock: Duration,
    move_timer: Duration,
    golden_progress: u32,
    power_up_progress: u32,
    power_up_threshold: u32,
    next_food_id: u32,
    next_power_up_id: u32,
    streams: RngStreams,
}

impl World {
    /// Lays out a fresh game that waits in the idle phase for a start command.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut discarded = Vec::new();
        Self::lay_out(config, 0, &mut discarded)
    }

    fn lay_out(config: GameConfig, game_index: u64, out_events: &mut Vec<Event>) -> Self {
        let grid = config.difficulty.grid_size();
        let mut streams = RngStreams::for_game(config.seed, game_index);
        let power_up_threshold = power_up_threshold(&mut streams.gameplay);
        let snake = Snake::spawn(grid);
        let stats = GameStats {
            length: snake.segments.len() as u32,
            wave_reached: 1,
            ..GameStats::default()
        };

        let mut world = Self {
            config,
            game_index,
            grid,
            phase: Phase::Idle,
            phase_elapsed: Duration::ZERO,
            snake,
            foods: Vec::new(),
            power_ups: Vec::new(),
            active_power_ups: Vec::new(),
            obstacles: Vec::new(),
            particles: Vec::new(),
            combo: ComboState::default(),
            stats,
            wave: wave_for_food_count(0),
            shake: ScreenShake::NONE,
            clock: Duration::ZERO,
            move_timer: Duration::ZERO,
            golden_progress: 0,
            power_up_progress: 0,
            power_up_threshold,
            next_food_id: 0,
            next_power_up_id: 0,
            streams,
        };
        world.replenish_regular_food(out_events);
        world
    }

    fn has_power_up(&self, kind: PowerUpKind) -> bool {
        self.active_power_ups
            .iter()
            .any(|active| active.kind == kind)
    }

    fn current_move_interval(&self) -> Duration {
        move_interval(
            self.config.difficulty,
            self.wave,
            self.has_power_up(PowerUpKind::Speed),
            self.has_power_up(PowerUpKind::Freeze),
        )
    }

    fn set_phase(&mut self, phase: Phase, out_events: &mut Vec<Event>) {
        if self.phase == phase {
            return;
        }
        self.phase = phase;
        self.phase_elapsed = Duration::ZERO;
        out_events.push(Event::PhaseChanged { phase });
    }

    fn occupancy(&self, include_obstacles: bool) -> Occupancy {
        let mut occupancy = Occupancy::new(self.grid);
        occupancy.extend(self.snake.segments.iter().map(|segment| segment.cell));
        occupancy.extend(self.foods.iter().map(|food| food.cell));
        occupancy.extend(self.power_ups.iter().map(|power_up| power_up.cell));
        if include_obstacles {
            occupancy.extend(self.obstacles.iter().map(|obstacle| obstacle.cell));
        }
        occupancy
    }

    fn spawn_food(&mut self, kind: FoodKind, out_events: &mut Vec<Event>) -> bool {
        let occupancy = self.occupancy(true);
        let Some(cell) = find_empty_cell(&occupancy, &mut self.streams.gameplay) else {
            debug!(?kind, "no free cell for food");
            return false;
        };

        let id = FoodId::new(self.next_food_id);
        self.next_food_id = self.next_food_id.wrapping_add(1);
        self.foods.push(Food {
            id,
            cell,
            kind,
            bob_phase: self.streams.cosmetic.gen::<f32>() * TAU,
            spawned_at: self.clock,
        });
        out_events.push(Event::FoodSpawned {
            food: id,
            kind,
            cell,
        });
        true
    }

    fn spawn_power_up(&mut self, out_events: &mut Vec<Event>) {
        let kind = random_power_up_kind(self.config.difficulty, &mut self.streams.gameplay);
        let occupancy = self.occupancy(true);
        let Some(cell) = find_empty_cell(&occupancy, &mut self.streams.gameplay) else {
            debug!(?kind, "no free cell for power-up");
            return;
        };

        let id = PowerUpId::new(self.next_power_up_id);
        self.next_power_up_id = self.next_power_up_id.wrapping_add(1);
        self.power_ups.push(PowerUp {
            id,
            cell,
            kind,
            spawned_at: self.clock,
        });
        out_events.push(Event::PowerUpSpawned {
            power_up: id,
            kind,
            cell,
        });
    }

    fn replenish_regular_food(&mut self, out_events: &mut Vec<Event>) {
        while self
            .foods
            .iter()
            .filter(|food| food.kind == FoodKind::Regular)
            .count()
            < tuning::REGULAR_FOOD_TARGET
        {
            if !self.spawn_food(FoodKind::Regular, out_events) {
                break;
            }
        }
    }

    fn emit_particles(&mut self, fresh: Vec<Particle>) {
        particles::emit(&mut self.particles, fresh);
    }

    fn decay_effects(&mut self, dt: Duration) {
        particles::decay(&mut self.particles, dt);
        if self.shake.is_active() {
            self.shake.intensity *= tuning::SHAKE_DECAY;
            self.shake.remaining = self.shake.remaining.saturating_sub(dt);
            if self.shake.intensity < tuning::SHAKE_THRESHOLD || self.shake.remaining.is_zero() {
                self.shake = ScreenShake::NONE;
            }
        }
    }

    fn expire_power_ups(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        for active in &mut self.active_power_ups {
            active.remaining = active.remaining.saturating_sub(dt);
        }
        for active in &self.active_power_ups {
            if active.remaining.is_zero() {
                out_events.push(Event::PowerUpExpired { kind: active.kind });
            }
        }
        self.active_power_ups
            .retain(|active| !active.remaining.is_zero());
    }

    fn pull_food_toward_head(&mut self) {
        let head = self.snake.head();
        let radius_squared = tuning::MAGNET_RADIUS * tuning::MAGNET_RADIUS;
        for food in &mut self.foods {
            let distance = food.cell.distance_squared(head);
            if distance == 0 || distance > radius_squared {
                continue;
            }
            let pulled = GridPos::new(
                food.cell.x() - (food.cell.x() - head.x()).signum(),
                food.cell.y() - (food.cell.y() - head.y()).signum(),
            );
            food.cell = self.grid.clamp(pulled);
        }
    }

    fn lapse_combo(&mut self, out_events: &mut Vec<Event>) {
        let Some(last_eat) = self.combo.last_eat else {
            return;
        };
        if self.combo.count == 0 || self.clock.saturating_sub(last_eat) <= tuning::COMBO_TIMEOUT {
            return;
        }
        if self.combo.count >= 2 {
            out_events.push(Event::ComboBroken {
                count: self.combo.count,
            });
        }
        self.combo.count = 0;
        self.combo.last_eat = None;
    }

    fn run_tick(&mut self, raw_dt: Duration, dt: Duration, out_events: &mut Vec<Event>) {
        out_events.push(Event::TimeAdvanced { dt });
        self.clock = self.clock.saturating_add(raw_dt);

        self.snake.flick_tongue(dt);
        self.expire_power_ups(dt, out_events);
        if self.has_power_up(PowerUpKind::Magnet) {
            self.pull_food_toward_head();
        }
        self.decay_effects(dt);
        if self.wave.sand_particles {
            particles::replenish_ambient(
                &mut self.particles,
                self.grid,
                &mut self.streams.cosmetic,
            );
        }
        self.lapse_combo(out_events);

        let mut wave_changed = false;
        self.move_timer = self.move_timer.saturating_add(dt);
        if self.move_timer >= self.current_move_interval() {
            self.move_timer = Duration::ZERO;
            wave_changed = self.step(out_events);
        }

        self.stats.time_survived = self.clock;

        if !self.snake.alive {
            self.set_phase(Phase::Dead, out_events);
        } else if wave_changed {
            self.set_phase(Phase::Transitioning, out_events);
        }
    }

    /// Performs one grid step. Returns `true` when the step started a new wave.
    fn step(&mut self, out_events: &mut Vec<Event>) -> bool {
        let (from, to) = self.snake.advance();
        out_events.push(Event::SnakeAdvanced { from, to });

        if self.wave.has_moving_obstacles
            && self
                .streams
                .gameplay
                .gen_bool(tuning::OBSTACLE_MOVE_CHANCE)
        {
            move_obstacles(&mut self.obstacles, self.grid);
        }

        let rules = CollisionRules {
            fire_active: self.has_power_up(PowerUpKind::Fire),
        };
        if let Some(cause) = first_fatal(&self.snake.cells(), self.grid, &self.obstacles, rules) {
            if self.has_power_up(PowerUpKind::Shield) {
                self.absorb(cause, out_events);
            } else {
                self.die(cause, out_events);
                return false;
            }
        }

        let head = self.snake.head();
        let mut wave_changed = false;
        if let Some(food) = food_at(head, &self.foods).copied() {
            wave_changed = self.consume(food, out_events);
        }
        if let Some(power_up) = power_up_at(head, &self.power_ups).copied() {
            self.collect(power_up, out_events);
        }
        wave_changed
    }

    fn absorb(&mut self, cause: FatalCollision, out_events: &mut Vec<Event>) {
        if cause == FatalCollision::Wall {
            let clamped = self.grid.clamp(self.snake.head());
            self.snake.place_head(clamped);
        }
        self.active_power_ups
            .retain(|active| active.kind != PowerUpKind::Shield);
        self.shake = ScreenShake::SHIELD_ABSORB;
        debug!(?cause, "shield absorbed collision");
        out_events.push(Event::ShieldAbsorbed { cause });
    }

    fn die(&mut self, cause: FatalCollision, out_events: &mut Vec<Event>) {
        self.snake.alive = false;
        let burst = particles::death_burst(
            &self.snake.cells(),
            self.config.skin.primary(),
            &mut self.streams.cosmetic,
        );
        self.emit_particles(burst);
        self.shake = ScreenShake::DEATH;
        info!(?cause, score = self.stats.score, "snake died");
        out_events.push(Event::SnakeDied { cause });
    }

    /// Applies the effects of eating `food`. Returns `true` on a wave change.
    fn consume(&mut self, food: Food, out_events: &mut Vec<Event>) -> bool {
        self.foods.retain(|candidate| candidate.id != food.id);

        if food.kind == FoodKind::Poison {
            self.snake.shrink(tuning::POISON_SEGMENT_LOSS);
            self.stats.poison_food_eaten += 1;
            self.stats.length = self.snake.segments.len() as u32;
            self.shake = ScreenShake::POISON;
            let burst = particles::eat_burst(
                food.cell,
                food.kind.burst_color(),
                tuning::EAT_PARTICLE_COUNT,
                &mut self.streams.cosmetic,
            );
            self.emit_particles(burst);
            out_events.push(Event::FoodEaten {
                food: food.id,
                kind: food.kind,
                cell: food.cell,
                points: 0,
                combo: self.combo.count,
            });
            return false;
        }

        self.snake.grow();
        self.combo.count = if self.combo.count > 0 {
            self.combo.count + 1
        } else {
            1
        };
        self.combo.last_eat = Some(self.clock);
        self.combo.max = self.combo.max.max(self.combo.count);

        let doubling = if self.has_power_up(PowerUpKind::DoublePoints) {
            2
        } else {
            1
        };
        let points = food.kind.base_score() * self.combo.multiplier() * doubling;
        self.stats.score += points;
        self.stats.food_eaten += 1;
        if food.kind == FoodKind::Golden {
            self.stats.golden_food_eaten += 1;
        }
        self.stats.length = self.snake.segments.len() as u32;
        self.stats.max_combo = self.combo.max;
        self.golden_progress += 1;
        self.power_up_progress += 1;

        let count = if food.kind == FoodKind::Golden {
            tuning::GOLDEN_EAT_PARTICLE_COUNT
        } else {
            tuning::EAT_PARTICLE_COUNT
        };
        let burst = particles::eat_burst(
            food.cell,
            food.kind.burst_color(),
            count,
            &mut self.streams.cosmetic,
        );
        self.emit_particles(burst);
        out_events.push(Event::FoodEaten {
            food: food.id,
            kind: food.kind,
            cell: food.cell,
            points,
            combo: self.combo.count,
        });

        self.replenish_regular_food(out_events);

        if self.golden_progress >= tuning::GOLDEN_FOOD_INTERVAL && self.wave.has_golden_food {
            let _ = self.spawn_food(FoodKind::Golden, out_events);
            self.golden_progress = 0;
        }

        if self.wave.has_poison_food
            && self
                .streams
                .gameplay
                .gen_bool(tuning::POISON_SPAWN_CHANCE)
        {
            let _ = self.spawn_food(FoodKind::Poison, out_events);
        }

        if self.power_up_progress >= self.power_up_threshold {
            self.spawn_power_up(out_events);
            self.power_up_progress = 0;
            self.power_up_threshold = power_up_threshold(&mut self.streams.gameplay);
        }

        self.enter_wave_for_progress(out_events)
    }

    fn enter_wave_for_progress(&mut self, out_events: &mut Vec<Event>) -> bool {
        let wave = wave_for_food_count(self.stats.food_eaten);
        if wave.number == self.wave.number {
            return false;
        }

        self.wave = wave;
        self.stats.wave_reached = wave.number;
        if wave.has_obstacles {
            let mut occupancy = self.occupancy(false);
            self.obstacles = generate_obstacles(wave, &mut occupancy, &mut self.streams.gameplay);
        }
        info!(
            wave = wave.number,
            name = wave.name,
            obstacles = self.obstacles.len(),
            "wave started"
        );
        out_events.push(Event::WaveStarted { wave: wave.number });
        true
    }

    fn collect(&mut self, power_up: PowerUp, out_events: &mut Vec<Event>) {
        self.power_ups
            .retain(|candidate| candidate.id != power_up.id);
        self.active_power_ups
            .retain(|active| active.kind != power_up.kind);
        self.active_power_ups
            .push(ActivePowerUp::fresh(power_up.kind));
        self.stats.powerups_collected += 1;

        let burst = particles::eat_burst(
            power_up.cell,
            POWER_UP_BURST_COLOR,
            tuning::POWERUP_PARTICLE_COUNT,
            &mut self.streams.cosmetic,
        );
        self.emit_particles(burst);
        out_events.push(Event::PowerUpCollected {
            kind: power_up.kind,
        });
    }

    fn linger(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.decay_effects(dt);
        self.phase_elapsed = self.phase_elapsed.saturating_add(dt);
        match self.phase {
            Phase::Dead if self.phase_elapsed >= tuning::GAME_OVER_DELAY => {
                self.set_phase(Phase::GameOver, out_events);
                info!(
                    score = self.stats.score,
                    wave = self.stats.wave_reached,
                    "game over"
                );
                out_events.push(Event::GameOver { stats: self.stats });
            }
            Phase::Transitioning if self.phase_elapsed >= tuning::WAVE_TRANSITION_DURATION => {
                self.set_phase(Phase::Running, out_events);
            }
            _ => {}
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Lays out a fresh idle game for the provided configuration.
#[must_use]
pub fn create_game(config: GameConfig) -> World {
    World::new(config)
}

/// Computes the time between snake steps.
///
/// The base interval for the difficulty is divided by the wave's speed
/// multiplier, shortened by a speed boost, lengthened by freeze, and never
/// drops below [`tuning::MIN_MOVE_INTERVAL`].
#[must_use]
pub fn move_interval(
    difficulty: Difficulty,
    wave: &WaveInfo,
    speed_boost: bool,
    frozen: bool,
) -> Duration {
    let mut seconds =
        difficulty.base_move_interval().as_secs_f64() / f64::from(wave.speed_multiplier);
    if speed_boost {
        seconds *= 1.0 - tuning::SPEED_BOOST_FACTOR;
    }
    if frozen {
        seconds /= tuning::FREEZE_SLOW_FACTOR;
    }
    Duration::from_secs_f64(seconds).max(tuning::MIN_MOVE_INTERVAL)
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartGame => {
            let game_index = if world.phase == Phase::Idle {
                world.game_index
            } else {
                world.game_index.wrapping_add(1)
            };
            *world = World::lay_out(world.config, game_index, out_events);
            info!(
                difficulty = %world.config.difficulty,
                seed = world.config.seed,
                game = game_index,
                "game started"
            );
            out_events.push(Event::GameStarted {
                difficulty: world.config.difficulty,
            });
            world.set_phase(Phase::Running, out_events);
        }
        Command::RequestDirection { direction } => {
            if world.phase == Phase::Running
                && world.snake.alive
                && world.snake.queue_direction(direction)
            {
                out_events.push(Event::DirectionQueued { direction });
            }
        }
        Command::TogglePause => match world.phase {
            Phase::Running => world.set_phase(Phase::Paused, out_events),
            Phase::Paused => world.set_phase(Phase::Running, out_events),
            _ => {}
        },
        Command::Tick { dt } => {
            let capped = dt.min(tuning::MAX_FRAME_DELTA);
            match world.phase {
                Phase::Running => world.run_tick(dt, capped, out_events),
                Phase::Dead | Phase::Transitioning => world.linger(capped, out_events),
                Phase::Idle | Phase::Paused | Phase::GameOver => {}
            }
        }
    }
}

/// Produces the next world state without touching the current one.
///
/// Frame input is buffered before the tick, so a direction request takes
/// effect at the next movement step rather than one already in progress.
#[must_use]
pub fn advance(
    world: &World,
    elapsed: Duration,
    input: FrameInput,
    out_events: &mut Vec<Event>,
) -> World {
    let mut next = world.clone();
    if let Some(direction) = input.requested_direction {
        apply(&mut next, Command::RequestDirection { direction }, out_events);
    }
    if input.toggle_pause {
        apply(&mut next, Command::TogglePause, out_events);
    }
    apply(&mut next, Command::Tick { dt: elapsed }, out_events);
    next
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::{Segment, World};
    use sand_serpent_core::{
        ActivePowerUp, ComboState, Direction, Food, GameStats, GridSize, Obstacle, Particle,
        Phase, PowerUp, PowerUpKind, ScreenShake, WaveInfo,
    };

    /// Configuration the current game was laid out with.
    #[must_use]
    pub fn config(world: &World) -> super::GameConfig {
        world.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(world: &World) -> Phase {
        world.phase
    }

    /// Side length of the playing field.
    #[must_use]
    pub fn grid(world: &World) -> GridSize {
        world.grid
    }

    /// Captures a read-only view of the snake.
    #[must_use]
    pub fn snake(world: &World) -> SnakeView<'_> {
        SnakeView {
            segments: &world.snake.segments,
            direction: world.snake.direction,
            next_direction: world.snake.next_direction,
            alive: world.snake.alive,
            shield_active: world.has_power_up(PowerUpKind::Shield),
            fire_active: world.has_power_up(PowerUpKind::Fire),
            tongue_timer: world.snake.tongue_timer,
        }
    }

    /// Food waiting on the field, in spawn order.
    #[must_use]
    pub fn foods(world: &World) -> &[Food] {
        &world.foods
    }

    /// Power-ups waiting on the field, in spawn order.
    #[must_use]
    pub fn power_ups(world: &World) -> &[PowerUp] {
        &world.power_ups
    }

    /// Effects currently applied, with their countdowns.
    #[must_use]
    pub fn active_power_ups(world: &World) -> &[ActivePowerUp] {
        &world.active_power_ups
    }

    /// Obstacles placed for the current wave.
    #[must_use]
    pub fn obstacles(world: &World) -> &[Obstacle] {
        &world.obstacles
    }

    /// Live particles, oldest first.
    #[must_use]
    pub fn particles(world: &World) -> &[Particle] {
        &world.particles
    }

    /// Current combo streak.
    #[must_use]
    pub fn combo(world: &World) -> ComboState {
        world.combo
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub fn stats(world: &World) -> GameStats {
        world.stats
    }

    /// Descriptor of the wave being played.
    #[must_use]
    pub fn wave(world: &World) -> &'static WaveInfo {
        world.wave
    }

    /// Camera shake the renderer should apply.
    #[must_use]
    pub fn screen_shake(world: &World) -> ScreenShake {
        world.shake
    }

    /// Time between snake steps under the current modifiers.
    #[must_use]
    pub fn move_interval(world: &World) -> Duration {
        world.current_move_interval()
    }

    /// Game clock: time spent running since the game started.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Qualifying eats counted toward the next golden food.
    #[must_use]
    pub fn golden_progress(world: &World) -> u32 {
        world.golden_progress
    }

    /// Qualifying eats since the last power-up spawn and the current threshold.
    #[must_use]
    pub fn power_up_progress(world: &World) -> (u32, u32) {
        (world.power_up_progress, world.power_up_threshold)
    }

    /// Reports whether the simulation is paused by the player.
    #[must_use]
    pub fn is_paused(world: &World) -> bool {
        world.phase == Phase::Paused
    }

    /// Reports whether the wave banner is showing.
    #[must_use]
    pub fn is_transitioning(world: &World) -> bool {
        world.phase == Phase::Transitioning
    }

    /// Reports whether the game has finished.
    #[must_use]
    pub fn is_game_over(world: &World) -> bool {
        world.phase == Phase::GameOver
    }

    /// Read-only snapshot of the snake.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SnakeView<'a> {
        /// Segments, head first.
        pub segments: &'a [Segment],
        /// Heading of the latest step.
        pub direction: Direction,
        /// Heading that the next step will take.
        pub next_direction: Direction,
        /// Whether the snake is alive.
        pub alive: bool,
        /// Derived from the active shield power-up.
        pub shield_active: bool,
        /// Derived from the active fire power-up.
        pub fire_active: bool,
        /// Position within the cosmetic tongue cycle.
        pub tongue_timer: Duration,
    }

    impl SnakeView<'_> {
        /// Cell of the head segment.
        #[must_use]
        pub fn head(&self) -> Option<sand_serpent_core::GridPos> {
            self.segments.first().map(|segment| segment.cell)
        }

        /// Number of segments.
        #[must_use]
        pub fn len(&self) -> usize {
            self.segments.len()
        }

        /// Reports whether the snake has no segments.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.segments.is_empty()
        }
    }
}
