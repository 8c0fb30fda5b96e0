//! Greedy input source that plays the game without a human.

use sand_serpent_core::{Direction, FoodKind, GridPos, Phase};
use sand_serpent_world::{query, World};

/// Steers toward the nearest edible food while refusing immediately fatal
/// cells and cells with no onward exit.
#[derive(Debug, Default)]
pub(crate) struct Autopilot;

impl Autopilot {
    /// Picks a new heading, or `None` when the current one should stand.
    pub(crate) fn steer(&self, world: &World) -> Option<Direction> {
        if query::phase(world) != Phase::Running {
            return None;
        }
        let snake = query::snake(world);
        if !snake.alive {
            return None;
        }
        let head = snake.head()?;
        let body: Vec<GridPos> = snake
            .segments
            .iter()
            .take(snake.len().saturating_sub(1))
            .map(|segment| segment.cell)
            .collect();
        let blocked = |cell: GridPos| {
            !query::grid(world).contains(cell)
                || (!snake.fire_active && body.contains(&cell))
                || query::obstacles(world)
                    .iter()
                    .any(|obstacle| obstacle.cell == cell)
        };

        let target = query::foods(world)
            .iter()
            .filter(|food| food.kind != FoodKind::Poison)
            .map(|food| food.cell)
            .chain(query::power_ups(world).iter().map(|power_up| power_up.cell))
            .min_by_key(|cell| cell.manhattan_distance(head));

        let best = Direction::ALL
            .into_iter()
            .filter(|direction| !direction.is_opposite(snake.direction))
            .filter(|direction| !blocked(head.step(*direction)))
            .min_by_key(|direction| {
                let next = head.step(*direction);
                let exits = Direction::ALL
                    .into_iter()
                    .filter(|onward| !blocked(next.step(*onward)) && next.step(*onward) != head)
                    .count();
                let dead_end = u32::from(exits == 0);
                let distance = target.map_or(0, |cell| next.manhattan_distance(cell));
                let keeps_heading = u32::from(*direction != snake.direction);
                (dead_end, distance, keeps_heading)
            })?;

        (best != snake.next_direction).then_some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sand_serpent_core::Command;
    use sand_serpent_world::{apply, scaffolding};

    fn running_world() -> World {
        let mut world = World::default();
        let mut events = Vec::new();
        apply(&mut world, Command::StartGame, &mut events);
        scaffolding::clear_foods(&mut world);
        world
    }

    #[test]
    fn idle_world_needs_no_input() {
        assert_eq!(Autopilot.steer(&World::default()), None);
    }

    #[test]
    fn turns_toward_food() {
        let mut world = running_world();
        let _ = scaffolding::place_food(&mut world, GridPos::new(15, 8), FoodKind::Regular);
        assert_eq!(Autopilot.steer(&world), Some(Direction::Up));
    }

    #[test]
    fn keeps_heading_when_food_is_ahead() {
        let mut world = running_world();
        let _ = scaffolding::place_food(&mut world, GridPos::new(22, 15), FoodKind::Regular);
        assert_eq!(Autopilot.steer(&world), None);
    }

    #[test]
    fn never_reverses_toward_food_behind() {
        let mut world = running_world();
        let _ = scaffolding::place_food(&mut world, GridPos::new(3, 15), FoodKind::Regular);
        assert_ne!(Autopilot.steer(&world), Some(Direction::Left));
    }

    #[test]
    fn ignores_poison() {
        let mut world = running_world();
        let _ = scaffolding::place_food(&mut world, GridPos::new(15, 13), FoodKind::Poison);
        let _ = scaffolding::place_food(&mut world, GridPos::new(15, 25), FoodKind::Regular);
        assert_eq!(Autopilot.steer(&world), Some(Direction::Down));
    }

    #[test]
    fn turns_away_from_the_wall() {
        let mut world = running_world();
        scaffolding::place_snake(
            &mut world,
            &[
                GridPos::new(29, 5),
                GridPos::new(28, 5),
                GridPos::new(27, 5),
                GridPos::new(26, 5),
            ],
            Direction::Right,
        );
        let choice = Autopilot.steer(&world);
        assert!(matches!(choice, Some(Direction::Up | Direction::Down)));
    }
}
