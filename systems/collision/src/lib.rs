#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure collision predicates evaluated against the snake's head.
//!
//! The world runs these after every movement step in a fixed order: wall,
//! self, obstacle, then food and power-up lookups. The first fatal hit wins and
//! the remaining fatal checks are skipped for that step.

use sand_serpent_core::{FatalCollision, Food, GridPos, GridSize, Obstacle, PowerUp};

/// Options that change which collisions count as fatal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionRules {
    /// Fire mode lets the head pass through the body.
    pub fire_active: bool,
}

/// Reports whether the head has left the field.
#[must_use]
pub fn hits_wall(head: GridPos, grid: GridSize) -> bool {
    !grid.contains(head)
}

/// Reports whether the head overlaps any non-head segment.
///
/// `segments` is ordered head first; the head itself is skipped.
#[must_use]
pub fn hits_self(segments: &[GridPos]) -> bool {
    let Some((head, body)) = segments.split_first() else {
        return false;
    };
    body.iter().any(|segment| segment == head)
}

/// Reports whether the head overlaps an obstacle.
#[must_use]
pub fn hits_obstacle(head: GridPos, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|obstacle| obstacle.cell == head)
}

/// Returns the first food lying under the head.
#[must_use]
pub fn food_at(head: GridPos, foods: &[Food]) -> Option<&Food> {
    foods.iter().find(|food| food.cell == head)
}

/// Returns the first power-up lying under the head.
#[must_use]
pub fn power_up_at(head: GridPos, power_ups: &[PowerUp]) -> Option<&PowerUp> {
    power_ups.iter().find(|power_up| power_up.cell == head)
}

/// Evaluates the fatal checks in order and returns the first hit.
///
/// Self collisions are ignored entirely while fire mode is active.
#[must_use]
pub fn first_fatal(
    segments: &[GridPos],
    grid: GridSize,
    obstacles: &[Obstacle],
    rules: CollisionRules,
) -> Option<FatalCollision> {
    let head = *segments.first()?;

    if hits_wall(head, grid) {
        return Some(FatalCollision::Wall);
    }

    if !rules.fire_active && hits_self(segments) {
        return Some(FatalCollision::SelfBite);
    }

    if hits_obstacle(head, obstacles) {
        return Some(FatalCollision::Obstacle);
    }

    None
}
