//! Grid coordinates and the four cardinal directions.

use serde::{Deserialize, Serialize};

/// Cardinal movement directions available to the snake and moving obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in a stable order, used for uniform random draws.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement applied by a single step in this direction.
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Direction pointing the exact other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Reports whether `other` is the exact reversal of `self`.
    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Location of a single grid cell.
///
/// Coordinates are signed because a head that has just crossed the boundary
/// sits at `-1` or `grid_size` until the collision resolver looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    x: i32,
    y: i32,
}

impl GridPos {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Position one step away in the provided direction. Never wraps.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance between two cells.
    #[must_use]
    pub const fn distance_squared(self, other: GridPos) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Computes the Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan_distance(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Side length of the square playing field measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize(u32);

impl GridSize {
    /// Creates a new grid size wrapper.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the side length in cells.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Side length as a signed coordinate bound.
    #[must_use]
    pub const fn bound(&self) -> i32 {
        self.0 as i32
    }

    /// Total number of cells on the field.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Reports whether the position lies within `[0, size)` on both axes.
    #[must_use]
    pub const fn contains(&self, pos: GridPos) -> bool {
        let bound = self.bound();
        pos.x >= 0 && pos.x < bound && pos.y >= 0 && pos.y < bound
    }

    /// Clamps a position back inside the field.
    #[must_use]
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        let max = self.bound().saturating_sub(1).max(0);
        GridPos::new(pos.x.clamp(0, max), pos.y.clamp(0, max))
    }

    /// Cell at the middle of the field, rounding toward the origin.
    #[must_use]
    pub const fn center(&self) -> GridPos {
        let mid = (self.0 / 2) as i32;
        GridPos::new(mid, mid)
    }

    /// Iterates every cell column by column.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        let bound = self.bound();
        (0..bound).flat_map(move |x| (0..bound).map(move |y| GridPos::new(x, y)))
    }
}
