//! Scenario helpers that place entities directly, for tests and tooling.
//!
//! These bypass the random spawner so a scenario can pin the exact layout it
//! needs before driving the world through [`crate::apply`].

use std::time::Duration;

use sand_serpent_core::{
    wave_for_food_count, ActivePowerUp, Direction, Food, FoodId, FoodKind, GridPos, Obstacle,
    PowerUp, PowerUpId, PowerUpKind,
};

use crate::{snake::Snake, World};

/// Replaces the snake with one occupying `cells`, head first.
pub fn place_snake(world: &mut World, cells: &[GridPos], direction: Direction) {
    world.snake = Snake::from_cells(cells, direction);
    world.stats.length = world.snake.segments.len() as u32;
}

/// Removes every food item from the field.
pub fn clear_foods(world: &mut World) {
    world.foods.clear();
}

/// Puts a food item on `cell` and returns its identifier.
pub fn place_food(world: &mut World, cell: GridPos, kind: FoodKind) -> FoodId {
    let id = FoodId::new(world.next_food_id);
    world.next_food_id = world.next_food_id.wrapping_add(1);
    world.foods.push(Food {
        id,
        cell,
        kind,
        bob_phase: 0.0,
        spawned_at: world.clock,
    });
    id
}

/// Puts a power-up on `cell` and returns its identifier.
pub fn place_power_up(world: &mut World, cell: GridPos, kind: PowerUpKind) -> PowerUpId {
    let id = PowerUpId::new(world.next_power_up_id);
    world.next_power_up_id = world.next_power_up_id.wrapping_add(1);
    world.power_ups.push(PowerUp {
        id,
        cell,
        kind,
        spawned_at: world.clock,
    });
    id
}

/// Starts a fresh effect as if the power-up had just been collected.
pub fn activate_power_up(world: &mut World, kind: PowerUpKind) {
    world.active_power_ups.retain(|active| active.kind != kind);
    world.active_power_ups.push(ActivePowerUp::fresh(kind));
}

/// Places an obstacle on the field.
pub fn place_obstacle(world: &mut World, obstacle: Obstacle) {
    world.obstacles.push(obstacle);
}

/// Rewinds or fast-forwards the food counter and the wave it implies.
pub fn set_food_eaten(world: &mut World, count: u32) {
    world.stats.food_eaten = count;
    world.wave = wave_for_food_count(count);
    world.stats.wave_reached = world.wave.number;
}

/// Sets the qualifying eats counted toward the next golden food.
pub fn set_golden_progress(world: &mut World, count: u32) {
    world.golden_progress = count;
}

/// Sets the eats counted toward the next power-up and the threshold to hit.
pub fn set_power_up_progress(world: &mut World, count: u32, threshold: u32) {
    world.power_up_progress = count;
    world.power_up_threshold = threshold;
}

/// Starts an effect with a custom countdown.
pub fn activate_power_up_for(world: &mut World, kind: PowerUpKind, remaining: Duration) {
    world.active_power_ups.retain(|active| active.kind != kind);
    world.active_power_ups.push(ActivePowerUp {
        kind,
        remaining,
        total: kind.duration(),
    });
}
