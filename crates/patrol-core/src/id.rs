//! Grid positions, headings, and the [`AgentState`] pair.

use std::fmt;

/// A cell position on the grid.
///
/// `col` grows rightward and `row` grows downward, both 0-indexed.
/// Components are signed so the cell one step past any edge is still
/// representable; such positions are simply out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index.
    pub col: i32,
    /// Row index.
    pub row: i32,
}

impl Position {
    /// Create a position from `(col, row)`.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring position one unit away in `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use patrol_core::{Direction, Position};
    ///
    /// let p = Position::new(4, 6);
    /// assert_eq!(p.offset(Direction::Up), Position::new(4, 5));
    /// assert_eq!(p.offset(Direction::Left), Position::new(3, 6));
    /// ```
    pub fn offset(self, direction: Direction) -> Self {
        let (dc, dr) = direction.offset_2d();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for Position {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

/// Facing direction of the guard.
///
/// A closed four-variant set. Turning is always exactly 90 degrees
/// clockwise via [`turn_right`](Direction::turn_right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Toward row 0.
    Up = 0,
    /// Toward increasing column.
    Right = 1,
    /// Toward increasing row.
    Down = 2,
    /// Toward column 0.
    Left = 3,
}

impl Direction {
    /// All four headings in clockwise order starting from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The heading after a 90-degree clockwise turn.
    pub fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Returns the `(col_offset, row_offset)` for one step in this direction.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Stable index in `0..4`, matching the order of [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Glyph used when drawing the guard: `^`, `>`, `v`, `<`.
    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// Full guard state: where it stands and which way it faces.
///
/// This pair determines all future behaviour on a fixed grid, so it is
/// also the unit of loop detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AgentState {
    /// Current cell.
    pub position: Position,
    /// Current heading.
    pub direction: Direction,
}

impl AgentState {
    /// Create a state from a position and heading.
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// The position directly ahead of the guard.
    pub fn ahead(self) -> Position {
        self.position.offset(self.direction)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.direction)
    }
}
