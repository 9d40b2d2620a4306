//! Single-cell obstruction overlay.
//!
//! The obstruction search tries one extra wall per candidate. Rather
//! than writing that wall into a shared grid and restoring it afterwards,
//! each candidate gets an [`Obstructed`] view: one differing cell checked
//! before falling through to the base grid. The base grid is never
//! mutated, so any number of views can be live at once on different
//! threads.

use patrol_core::{Cell, CellReader, Position};

use crate::grid::Grid;

/// A [`Grid`] seen with one extra [`Cell::Obstruction`].
///
/// Built through [`Grid::obstructed`], which validates the placement.
#[derive(Clone, Copy, Debug)]
pub struct Obstructed<'a> {
    base: &'a Grid,
    at: Position,
}

impl<'a> Obstructed<'a> {
    pub(crate) fn new(base: &'a Grid, at: Position) -> Self {
        Self { base, at }
    }

    /// The obstructed cell.
    pub fn position(&self) -> Position {
        self.at
    }

    /// The underlying grid.
    pub fn base(&self) -> &'a Grid {
        self.base
    }
}

impl CellReader for Obstructed<'_> {
    fn width(&self) -> u32 {
        self.base.width()
    }

    fn height(&self) -> u32 {
        self.base.height()
    }

    fn cell_at(&self, position: Position) -> Option<Cell> {
        if position == self.at {
            return Some(Cell::Obstruction);
        }
        self.base.cell_at(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

    fn snapshot(reader: &impl CellReader) -> Vec<Option<Cell>> {
        let mut out = Vec::new();
        for r in -1..=reader.height() as i32 {
            for c in -1..=reader.width() as i32 {
                out.push(reader.cell_at(Position::new(c, r)));
            }
        }
        out
    }

    #[test]
    fn overlay_reports_obstruction_only_at_its_cell() {
        let g = Grid::parse(SAMPLE).unwrap();
        let at = Position::new(3, 6);
        let view = g.obstructed(at).unwrap();
        assert_eq!(view.position(), at);
        for pos in g.positions() {
            if pos == at {
                assert_eq!(view.cell_at(pos), Some(Cell::Obstruction));
            } else {
                assert_eq!(view.cell_at(pos), g.cell_at(pos));
            }
        }
    }

    #[test]
    fn base_grid_unchanged_after_every_placement() {
        let g = Grid::parse(SAMPLE).unwrap();
        let before = snapshot(&g);
        for pos in g.positions() {
            if let Ok(view) = g.obstructed(pos) {
                assert!(view.cell_at(pos).is_some_and(Cell::is_blocking));
                drop(view);
                assert_eq!(snapshot(&g), before, "placement at {pos} leaked");
            }
        }
    }

    #[test]
    fn overlay_keeps_bounds() {
        let g = Grid::parse(SAMPLE).unwrap();
        let view = g.obstructed(Position::new(0, 0)).unwrap();
        assert_eq!(view.width(), 10);
        assert_eq!(view.height(), 10);
        assert_eq!(view.cell_at(Position::new(-1, 0)), None);
        assert_eq!(view.base().start(), g.start());
    }
}
