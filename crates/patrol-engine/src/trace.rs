//! Path tracing: every cell the guard stands on before leaving.

use std::error::Error;
use std::fmt;

use indexmap::IndexSet;
use patrol_core::{AgentState, CellReader, Position};
use patrol_grid::Grid;

use crate::agent::{Agent, StepOutcome};
use crate::state_set::StateSet;

/// Errors from running the guard on an unobstructed grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulationError {
    /// The guard's starting position is not on the grid.
    StartOutOfBounds {
        /// The rejected start.
        position: Position,
    },
    /// The guard repeated a `(position, direction)` state, so it will
    /// never leave the grid.
    NeverExits {
        /// Distinct cells visited before the cycle closed.
        distinct_cells: usize,
        /// Step calls made before the repeat was seen.
        steps: usize,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { position } => {
                write!(f, "guard start {position} is outside the grid")
            }
            Self::NeverExits {
                distinct_cells,
                steps,
            } => write!(
                f,
                "guard is trapped in a loop after {steps} steps \
                 ({distinct_cells} distinct cells visited)"
            ),
        }
    }
}

impl Error for SimulationError {}

/// The guard's walk from its start until it leaves the grid.
#[derive(Clone, Debug)]
pub struct PathTrace {
    visited: IndexSet<Position>,
    steps: usize,
    last: AgentState,
}

impl PathTrace {
    /// Number of distinct cells the guard stood on, start included.
    ///
    /// Always at least 1.
    pub fn distinct_cells(&self) -> usize {
        self.visited.len()
    }

    /// Distinct cells in first-visit order. The first entry is the start.
    pub fn visited(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.visited.iter().copied()
    }

    /// `true` if the guard stood on `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.visited.contains(&position)
    }

    /// Number of step calls, including the final one that exits.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The last state on the grid, just before walking off.
    pub fn last_state(&self) -> AgentState {
        self.last
    }

    /// Draw the grid with visited cells as `X` and the start as its glyph.
    pub fn render(&self, grid: &Grid) -> String {
        let start = grid.start();
        let start_glyph = grid.start_direction().glyph();
        grid.render_with(|position, cell| {
            if position == start {
                start_glyph
            } else if self.visited.contains(&position) {
                'X'
            } else {
                cell.glyph()
            }
        })
    }
}

/// Walk the guard from `start` until it leaves `grid`.
///
/// Records each position before stepping, so the start is always
/// counted even if the first step exits. A repeated
/// `(position, direction)` state means the guard can never leave and is
/// reported as [`SimulationError::NeverExits`].
pub fn trace_path<G: CellReader + ?Sized>(
    grid: &G,
    start: AgentState,
) -> Result<PathTrace, SimulationError> {
    let Some(mut rank) = grid.rank(start.position) else {
        return Err(SimulationError::StartOutOfBounds {
            position: start.position,
        });
    };

    let mut agent = Agent::new(start);
    let mut seen = StateSet::with_cells(grid.cell_count());
    let mut visited = IndexSet::new();
    let mut steps = 0usize;
    let width = grid.width() as usize;

    loop {
        let state = agent.state();
        if !seen.insert(rank, state.direction) {
            return Err(SimulationError::NeverExits {
                distinct_cells: visited.len(),
                steps,
            });
        }
        visited.insert(state.position);
        steps += 1;
        match agent.step(grid) {
            StepOutcome::Exited => break,
            // A move always lands inside the grid.
            StepOutcome::Moved(p) => rank = p.row as usize * width + p.col as usize,
            StepOutcome::Turned(_) => {}
        }
    }

    Ok(PathTrace {
        visited,
        steps,
        last: agent.state(),
    })
}

/// Number of distinct cells the guard visits on `grid` before leaving.
pub fn distinct_visited(grid: &Grid) -> Result<usize, SimulationError> {
    trace_path(grid, grid.start_state()).map(|t| t.distinct_cells())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::detect_loop;
    use patrol_core::Direction;
    use patrol_test_utils::{CANONICAL, CANONICAL_TRACE};

    #[test]
    fn canonical_visits_41_cells() {
        let g = Grid::parse(CANONICAL).unwrap();
        assert_eq!(distinct_visited(&g), Ok(41));
    }

    #[test]
    fn canonical_trace_details() {
        let g = Grid::parse(CANONICAL).unwrap();
        let t = trace_path(&g, g.start_state()).unwrap();
        assert_eq!(t.visited().next(), Some(g.start()));
        assert_eq!(t.steps(), 55);
        assert_eq!(
            t.last_state(),
            AgentState::new(Position::new(7, 9), Direction::Down)
        );
    }

    #[test]
    fn canonical_render_marks_path() {
        let g = Grid::parse(CANONICAL).unwrap();
        let t = trace_path(&g, g.start_state()).unwrap();
        assert_eq!(t.render(&g), CANONICAL_TRACE);
    }

    #[test]
    fn start_facing_boundary_counts_one() {
        let g = Grid::parse("..^..\n.....").unwrap();
        let t = trace_path(&g, g.start_state()).unwrap();
        assert_eq!(t.distinct_cells(), 1);
        assert_eq!(t.steps(), 1);
    }

    #[test]
    fn straight_corridor() {
        let g = Grid::parse(".\n.\n.\n^").unwrap();
        assert_eq!(distinct_visited(&g), Ok(4));
    }

    #[test]
    fn trapped_guard_reports_never_exits() {
        let g = Grid::parse(".#..\n...#\n#^..\n..#.").unwrap();
        assert!(matches!(
            trace_path(&g, g.start_state()),
            Err(SimulationError::NeverExits { .. })
        ));
    }

    #[test]
    fn start_outside_rejected() {
        let g = Grid::parse("^").unwrap();
        let outside = AgentState::new(Position::new(5, 5), Direction::Up);
        assert_eq!(
            trace_path(&g, outside).unwrap_err(),
            SimulationError::StartOutOfBounds {
                position: Position::new(5, 5)
            }
        );
    }

    #[test]
    fn tracer_agrees_with_detector_on_every_obstruction() {
        // Repeats are keyed by the rank carried through each move, so a
        // wrong rank would split or merge states and disagree here.
        let g = Grid::parse(CANONICAL).unwrap();
        for p in g.positions().filter(|&p| g.obstructed(p).is_ok()) {
            let view = g.obstructed(p).unwrap();
            let verdict = detect_loop(&view, g.start_state());
            match trace_path(&view, g.start_state()) {
                Ok(t) => {
                    assert!(!verdict.is_loop(), "{p}");
                    assert_eq!(t.steps(), verdict.steps, "{p}");
                }
                Err(SimulationError::NeverExits { steps, .. }) => {
                    assert!(verdict.is_loop(), "{p}");
                    assert_eq!(steps, verdict.steps, "{p}");
                }
                Err(e) => panic!("unexpected error at {p}: {e}"),
            }
        }
    }
}
