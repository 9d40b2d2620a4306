//! The guard and its step rule.

use patrol_core::{AgentState, CellReader, Direction, Position};

/// Whether the guard is still on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    /// Still on the grid; `step` may move or turn it.
    Moving,
    /// Walked off the grid. Terminal.
    Exited,
}

/// Result of a single [`Agent::step`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one cell forward to the given position.
    Moved(Position),
    /// Blocked; turned clockwise to the given heading without moving.
    Turned(Direction),
    /// The cell ahead is outside the grid.
    Exited,
}

/// The simulated guard.
///
/// Holds the current [`AgentState`] and whether it has left the grid.
/// After exiting, `state()` keeps the last in-grid state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    state: AgentState,
    status: AgentStatus,
}

impl Agent {
    /// Place a guard at `state`.
    pub fn new(state: AgentState) -> Self {
        Self {
            state,
            status: AgentStatus::Moving,
        }
    }

    /// Current position and heading.
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Current status.
    pub fn status(&self) -> AgentStatus {
        self.status
    }

    /// `true` once the guard has walked off the grid.
    pub fn has_exited(&self) -> bool {
        self.status == AgentStatus::Exited
    }

    /// Advance the guard by one transition.
    ///
    /// Looks at the cell directly ahead:
    ///
    /// 1. outside the grid: the guard exits;
    /// 2. open: the guard moves there, keeping its heading;
    /// 3. wall or obstruction: the guard turns 90 degrees clockwise in place.
    ///
    /// A single call never both turns and moves, so a guard boxed in on
    /// several sides turns once per call until it faces an open cell.
    /// Calling `step` after exiting returns [`StepOutcome::Exited`] again.
    pub fn step<G: CellReader + ?Sized>(&mut self, grid: &G) -> StepOutcome {
        if self.has_exited() {
            return StepOutcome::Exited;
        }
        let ahead = self.state.ahead();
        match grid.cell_at(ahead) {
            None => {
                self.status = AgentStatus::Exited;
                StepOutcome::Exited
            }
            Some(cell) if cell.is_blocking() => {
                self.state.direction = self.state.direction.turn_right();
                StepOutcome::Turned(self.state.direction)
            }
            Some(_) => {
                self.state.position = ahead;
                StepOutcome::Moved(ahead)
            }
        }
    }
}
