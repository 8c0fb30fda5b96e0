#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Entity factory that places the snake, food, power-ups, and obstacles.
//!
//! Every random draw goes through the caller's [`Rng`], so a seeded generator
//! replays identical layouts. Spawns that cannot find room return `None` and
//! the caller skips them for this step.

use rand::{seq::SliceRandom, Rng};
use sand_serpent_core::{
    tuning, Difficulty, Direction, GridPos, GridSize, Obstacle, PowerUpKind, WaveInfo,
};

/// Dense record of which cells currently hold something.
#[derive(Clone, Debug)]
pub struct Occupancy {
    size: GridSize,
    cells: Vec<bool>,
}

impl Occupancy {
    /// Creates an empty occupancy record for a field of the provided size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![false; size.cell_count()],
        }
    }

    /// Marks every provided cell as taken. Cells off the field are ignored.
    pub fn extend<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = GridPos>,
    {
        for cell in cells {
            let _ = self.occupy(cell);
        }
    }

    /// Marks a single cell as taken, returning `false` if it already was.
    pub fn occupy(&mut self, cell: GridPos) -> bool {
        match self.index(cell).and_then(|index| self.cells.get_mut(index)) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Reports whether the cell is free. Cells off the field are never free.
    #[must_use]
    pub fn is_free(&self, cell: GridPos) -> bool {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
            .map_or(false, |taken| !taken)
    }

    /// Side length of the field this record covers.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    fn index(&self, cell: GridPos) -> Option<usize> {
        if !self.size.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.y()).ok()?;
        let column = usize::try_from(cell.x()).ok()?;
        let width = usize::try_from(self.size.get()).ok()?;
        Some(row * width + column)
    }
}

/// Picks a uniformly random free cell, or `None` when the field is full.
pub fn find_empty_cell<R>(occupancy: &Occupancy, rng: &mut R) -> Option<GridPos>
where
    R: Rng + ?Sized,
{
    let free: Vec<GridPos> = occupancy
        .size()
        .cells()
        .filter(|cell| occupancy.is_free(*cell))
        .collect();
    free.choose(rng).copied()
}

/// Lays out a new snake head first, horizontally centred and facing right.
#[must_use]
pub fn initial_snake(grid: GridSize) -> (Vec<GridPos>, Direction) {
    let center = grid.center();
    let segments = (0..tuning::INITIAL_SNAKE_LENGTH as i32)
        .map(|offset| GridPos::new(center.x() - offset, center.y()))
        .collect();
    (segments, Direction::Right)
}

/// Draws a power-up kind from the pool allowed at this difficulty.
pub fn random_power_up_kind<R>(difficulty: Difficulty, rng: &mut R) -> PowerUpKind
where
    R: Rng + ?Sized,
{
    let pool: Vec<PowerUpKind> = PowerUpKind::ALL
        .into_iter()
        .filter(|kind| *kind != PowerUpKind::Shield || difficulty.offers_shield())
        .collect();
    pool.choose(rng).copied().unwrap_or(PowerUpKind::Speed)
}

/// Draws how many qualifying eats must pass before the next power-up spawns.
pub fn power_up_threshold<R>(rng: &mut R) -> u32
where
    R: Rng + ?Sized,
{
    rng.gen_range(tuning::POWERUP_THRESHOLD_MIN..=tuning::POWERUP_THRESHOLD_MAX)
}

/// Places the obstacles for a new wave inside the interior margin.
///
/// Every placement marks its cell in `occupancy`. An obstacle that finds no
/// free cell within the attempt budget is dropped.
pub fn generate_obstacles<R>(
    wave: &WaveInfo,
    occupancy: &mut Occupancy,
    rng: &mut R,
) -> Vec<Obstacle>
where
    R: Rng + ?Sized,
{
    let count = wave.obstacle_count();
    let low = tuning::OBSTACLE_MARGIN;
    let high = occupancy.size().bound() - tuning::OBSTACLE_MARGIN;
    if count == 0 || high <= low {
        return Vec::new();
    }

    let mut obstacles = Vec::with_capacity(count);
    for _ in 0..count {
        for _ in 0..tuning::OBSTACLE_PLACEMENT_ATTEMPTS {
            let cell = GridPos::new(rng.gen_range(low..high), rng.gen_range(low..high));
            if !occupancy.occupy(cell) {
                continue;
            }

            let moving = wave.has_moving_obstacles && rng.gen_bool(0.5);
            let move_direction = if moving {
                Direction::ALL.choose(rng).copied()
            } else {
                None
            };
            obstacles.push(Obstacle {
                cell,
                moving,
                move_direction,
            });
            break;
        }
    }
    obstacles
}

/// Steps every wandering obstacle once, bouncing off the one-cell border.
pub fn move_obstacles(obstacles: &mut [Obstacle], grid: GridSize) {
    let limit = grid.bound() - 1;
    for obstacle in obstacles.iter_mut() {
        let Some(direction) = obstacle.move_direction.filter(|_| obstacle.moving) else {
            continue;
        };

        let next = obstacle.cell.step(direction);
        if next.x() < 1 || next.x() >= limit || next.y() < 1 || next.y() >= limit {
            let reversed = direction.opposite();
            obstacle.cell = obstacle.cell.step(reversed);
            obstacle.move_direction = Some(reversed);
        } else {
            obstacle.cell = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_ignores_cells_off_the_field() {
        let mut occupancy = Occupancy::new(GridSize::new(3));
        assert!(!occupancy.occupy(GridPos::new(-1, 0)));
        assert!(!occupancy.occupy(GridPos::new(3, 0)));
        assert!(!occupancy.is_free(GridPos::new(3, 0)));
        assert!(occupancy.occupy(GridPos::new(2, 2)));
        assert!(!occupancy.occupy(GridPos::new(2, 2)));
    }
}
