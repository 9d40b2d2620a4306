//! The immutable base grid.

use std::fmt;
use std::str::FromStr;

use patrol_core::{AgentState, Cell, CellReader, Direction, GridError, Position};

use crate::overlay::Obstructed;

/// A rectangular map of open and wall cells plus the guard's start.
///
/// Cells are stored row-major. The `^` marker is replaced by
/// [`Cell::Open`] at load time; its coordinates are kept in
/// [`start()`](Grid::start) and never re-derived. The guard always
/// starts facing [`Direction::Up`].
///
/// # Examples
///
/// ```
/// use patrol_grid::{Cell, CellReader, Grid};
/// use patrol_core::Position;
///
/// let grid = Grid::parse("..#\n.^.\n...").unwrap();
/// assert_eq!((grid.width(), grid.height()), (3, 3));
/// assert_eq!(grid.start(), Position::new(1, 1));
/// assert_eq!(grid.cell_at(Position::new(2, 0)), Some(Cell::Wall));
/// assert_eq!(grid.cell_at(Position::new(3, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    start: Position,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Parse map text into a grid.
    ///
    /// Returns an error for empty input, a missing or repeated `^`,
    /// rows of unequal width, or any character outside `.#^`.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let rows = match (first, last) {
            (Some(a), Some(b)) => &lines[a..=b],
            _ => return Err(GridError::Empty),
        };

        let width = rows[0].chars().count();
        let height = rows.len();
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut start: Option<Position> = None;
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, glyph) in line.chars().enumerate() {
                let position = Position::new(c as i32, r as i32);
                if glyph == '^' {
                    if let Some(first) = start {
                        return Err(GridError::MultipleAgents {
                            first,
                            second: position,
                        });
                    }
                    start = Some(position);
                    cells.push(Cell::Open);
                    continue;
                }
                let cell =
                    Cell::from_glyph(glyph).ok_or(GridError::UnrecognizedCell { glyph, position })?;
                cells.push(cell);
            }
        }
        let start = start.ok_or(GridError::MissingAgent)?;

        Ok(Self {
            width: width as u32,
            height: height as u32,
            cells,
            start,
        })
    }

    /// The guard's starting cell.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The guard's starting heading. Always [`Direction::Up`].
    pub fn start_direction(&self) -> Direction {
        Direction::Up
    }

    /// The guard's full starting state.
    pub fn start_state(&self) -> AgentState {
        AgentState::new(self.start, self.start_direction())
    }

    /// Every in-bounds position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |r| (0..width).map(move |c| Position::new(c, r)))
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// View this grid with one extra obstruction at `position`.
    ///
    /// Rejects cells outside the grid, existing walls, and the guard's
    /// start cell. The grid itself is never modified.
    pub fn obstructed(&self, position: Position) -> Result<Obstructed<'_>, GridError> {
        match self.cell_at(position) {
            None => Err(GridError::InvalidObstruction {
                position,
                reason: "outside the grid",
            }),
            Some(Cell::Wall) | Some(Cell::Obstruction) => Err(GridError::InvalidObstruction {
                position,
                reason: "cell is already a wall",
            }),
            Some(Cell::Open) if position == self.start => Err(GridError::InvalidObstruction {
                position,
                reason: "cell is the guard's start",
            }),
            Some(Cell::Open) => Ok(Obstructed::new(self, position)),
        }
    }

    /// Render the grid as text, letting `mark` choose each cell's glyph.
    ///
    /// Rows are separated by `\n` with no trailing newline.
    pub fn render_with<F>(&self, mut mark: F) -> String
    where
        F: FnMut(Position, Cell) -> char,
    {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for r in 0..self.height as i32 {
            if r > 0 {
                out.push('\n');
            }
            for c in 0..self.width as i32 {
                let position = Position::new(c, r);
                let idx = (r as usize) * (self.width as usize) + c as usize;
                out.push(mark(position, self.cells[idx]));
            }
        }
        out
    }
}

impl CellReader for Grid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cell_at(&self, position: Position) -> Option<Cell> {
        self.rank(position).map(|idx| self.cells[idx])
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start;
        let glyph = self.start_direction().glyph();
        let text = self.render_with(|p, cell| if p == start { glyph } else { cell.glyph() });
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

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

    fn p(col: i32, row: i32) -> Position {
        Position::new(col, row)
    }

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_sample_dimensions_and_start() {
        let g = Grid::parse(SAMPLE).unwrap();
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 10);
        assert_eq!(g.start(), p(4, 6));
        assert_eq!(g.start_direction(), Direction::Up);
        assert_eq!(g.count(Cell::Wall), 8);
    }

    #[test]
    fn start_cell_is_open() {
        let g = Grid::parse(SAMPLE).unwrap();
        assert_eq!(g.cell_at(g.start()), Some(Cell::Open));
    }

    #[test]
    fn surrounding_blank_lines_are_ignored() {
        let padded = format!("\n\n{SAMPLE}\n\n");
        assert_eq!(Grid::parse(&padded).unwrap(), Grid::parse(SAMPLE).unwrap());
    }

    #[test]
    fn crlf_line_endings_accepted() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        assert_eq!(Grid::parse(&crlf).unwrap(), Grid::parse(SAMPLE).unwrap());
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let g: Grid = "^".parse().unwrap();
        assert_eq!(g.cell_count(), 1);
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(Grid::parse("\n  \n"), Err(GridError::Empty));
    }

    #[test]
    fn missing_agent_rejected() {
        assert_eq!(Grid::parse("...\n.#."), Err(GridError::MissingAgent));
    }

    #[test]
    fn multiple_agents_rejected() {
        assert_eq!(
            Grid::parse(".^.\n..^"),
            Err(GridError::MultipleAgents {
                first: p(1, 0),
                second: p(2, 1),
            })
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        assert_eq!(
            Grid::parse("...\n.^\n..."),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn interior_blank_line_is_ragged() {
        assert!(matches!(
            Grid::parse("..^\n\n..."),
            Err(GridError::RaggedRow { row: 1, found: 0, .. })
        ));
    }

    #[test]
    fn unrecognized_glyph_rejected() {
        assert_eq!(
            Grid::parse(".^.\n.O."),
            Err(GridError::UnrecognizedCell {
                glyph: 'O',
                position: p(1, 1),
            })
        );
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn out_of_bounds_is_none() {
        let g = Grid::parse(SAMPLE).unwrap();
        assert_eq!(g.cell_at(p(-1, 0)), None);
        assert_eq!(g.cell_at(p(0, -1)), None);
        assert_eq!(g.cell_at(p(10, 0)), None);
        assert_eq!(g.cell_at(p(0, 10)), None);
    }

    #[test]
    fn positions_are_row_major() {
        let g = Grid::parse("^.\n..").unwrap();
        let all: Vec<_> = g.positions().collect();
        assert_eq!(all, vec![p(0, 0), p(1, 0), p(0, 1), p(1, 1)]);
    }

    #[test]
    fn rank_matches_positions_order() {
        let g = Grid::parse(SAMPLE).unwrap();
        for (i, pos) in g.positions().enumerate() {
            assert_eq!(g.rank(pos), Some(i));
        }
    }

    // ── Obstruction placement ───────────────────────────────────

    #[test]
    fn obstructed_rejects_wall_start_and_outside() {
        let g = Grid::parse(SAMPLE).unwrap();
        assert!(matches!(
            g.obstructed(p(4, 0)),
            Err(GridError::InvalidObstruction { .. })
        ));
        assert!(matches!(
            g.obstructed(g.start()),
            Err(GridError::InvalidObstruction { .. })
        ));
        assert!(matches!(
            g.obstructed(p(10, 10)),
            Err(GridError::InvalidObstruction { .. })
        ));
        assert!(g.obstructed(p(3, 6)).is_ok());
    }

    // ── Rendering ───────────────────────────────────────────────

    #[test]
    fn display_reproduces_input() {
        let g = Grid::parse(SAMPLE).unwrap();
        assert_eq!(g.to_string(), SAMPLE);
    }

    #[test]
    fn render_with_custom_marks() {
        let g = Grid::parse("^.#").unwrap();
        let s = g.render_with(|pos, _| if pos.col == 1 { 'X' } else { '-' });
        assert_eq!(s, "-X-");
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_map() -> impl Strategy<Value = (usize, usize, Vec<bool>, usize)> {
        (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                proptest::collection::vec(any::<bool>(), w * h),
                0..w * h,
            )
        })
    }

    proptest! {
        #[test]
        fn rectangular_maps_parse(map in arb_map()) {
            let (w, h, walls, start) = map;
            let mut text = String::new();
            for r in 0..h {
                if r > 0 {
                    text.push('\n');
                }
                for c in 0..w {
                    let i = r * w + c;
                    text.push(if i == start { '^' } else if walls[i] { '#' } else { '.' });
                }
            }
            let g = Grid::parse(&text).unwrap();
            prop_assert_eq!(g.cell_count(), w * h);
            prop_assert_eq!(g.rank(g.start()), Some(start));
            prop_assert_eq!(g.to_string(), text);
        }
    }
}
