//! Read-only cell lookup shared by grids and overlays.

use crate::cell::Cell;
use crate::id::Position;

/// Bounds-checked, read-only access to grid cells.
///
/// Implemented by the base grid and by obstruction overlays, so the
/// step rule and the detectors work against either without caring
/// which one they were handed.
///
/// `Sync` is required because the obstruction search shares the base
/// grid across worker threads by reference.
pub trait CellReader: Sync {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The cell at `position`, or `None` if it lies outside the grid.
    ///
    /// `None` is not an error: it is how the guard learns it has left.
    fn cell_at(&self, position: Position) -> Option<Cell>;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// `true` if `position` lies inside the grid.
    fn contains(&self, position: Position) -> bool {
        position.col >= 0
            && position.row >= 0
            && (position.col as u32) < self.width()
            && (position.row as u32) < self.height()
    }

    /// Row-major index of `position`, or `None` if out of bounds.
    fn rank(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some((position.row as usize) * (self.width() as usize) + position.col as usize)
    }
}
