//! Cell kinds stored in a grid.

/// Contents of a single in-bounds grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Walkable floor (`.`). The guard's start cell is stored as `Open`.
    Open,
    /// A permanent wall (`#`).
    Wall,
    /// A transient obstruction placed for one search candidate (`O`).
    Obstruction,
}

impl Cell {
    /// `true` if the guard turns instead of entering this cell.
    pub fn is_blocking(self) -> bool {
        match self {
            Cell::Open => false,
            Cell::Wall | Cell::Obstruction => true,
        }
    }

    /// Parse a map glyph. The guard marker is not a cell and returns `None`.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Wall),
            _ => None,
        }
    }

    /// Glyph used when rendering.
    pub fn glyph(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => '#',
            Cell::Obstruction => 'O',
        }
    }
}
