//! Snake body bookkeeping.

use std::time::Duration;

use sand_serpent_core::{tuning, Direction, GridPos, GridSize};
use sand_serpent_system_spawning::initial_snake;

/// Body segment with the cell it occupied before the latest step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Cell the segment occupies.
    pub cell: GridPos,
    /// Cell the segment occupied before the latest step, for interpolation.
    pub previous: GridPos,
}

impl Segment {
    const fn resting(cell: GridPos) -> Self {
        Self {
            cell,
            previous: cell,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Snake {
    pub(crate) segments: Vec<Segment>,
    pub(crate) direction: Direction,
    pub(crate) next_direction: Direction,
    pub(crate) alive: bool,
    pub(crate) tongue_timer: Duration,
}

impl Snake {
    pub(crate) fn spawn(grid: GridSize) -> Self {
        let (cells, direction) = initial_snake(grid);
        Self::from_cells(&cells, direction)
    }

    pub(crate) fn from_cells(cells: &[GridPos], direction: Direction) -> Self {
        Self {
            segments: cells.iter().copied().map(Segment::resting).collect(),
            direction,
            next_direction: direction,
            alive: true,
            tongue_timer: Duration::ZERO,
        }
    }

    pub(crate) fn head(&self) -> GridPos {
        self.segments
            .first()
            .map_or(GridPos::new(0, 0), |segment| segment.cell)
    }

    pub(crate) fn cells(&self) -> Vec<GridPos> {
        self.segments.iter().map(|segment| segment.cell).collect()
    }

    /// Buffers a heading for the next step. Reversals are ignored.
    ///
    /// Returns `true` when the buffered heading changed.
    pub(crate) fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.segments.len() > 1 && self.direction.is_opposite(direction) {
            return false;
        }
        if self.next_direction == direction {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Applies the buffered heading and shifts every segment one cell.
    ///
    /// Returns the head cell before and after the step.
    pub(crate) fn advance(&mut self) -> (GridPos, GridPos) {
        self.direction = self.next_direction;
        let from = self.head();
        let to = from.step(self.direction);

        let mut leading = to;
        for segment in &mut self.segments {
            segment.previous = segment.cell;
            segment.cell = leading;
            leading = segment.previous;
        }
        (from, to)
    }

    pub(crate) fn grow(&mut self) {
        if let Some(tail) = self.segments.last().copied() {
            self.segments.push(tail);
        }
    }

    pub(crate) fn shrink(&mut self, amount: usize) {
        let length = self
            .segments
            .len()
            .saturating_sub(amount)
            .max(tuning::MIN_SNAKE_LENGTH);
        self.segments.truncate(length);
    }

    pub(crate) fn place_head(&mut self, cell: GridPos) {
        if let Some(head) = self.segments.first_mut() {
            head.cell = cell;
        }
    }

    pub(crate) fn flick_tongue(&mut self, dt: Duration) {
        let period = tuning::TONGUE_INTERVAL.as_nanos();
        let elapsed = (self.tongue_timer + dt).as_nanos() % period;
        self.tongue_timer = Duration::from_nanos(u64::try_from(elapsed).unwrap_or(0));
    }
}
