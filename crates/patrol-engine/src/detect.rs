//! Exact loop detection by state recurrence.
//!
//! The guard's future is fully determined by its `(position, direction)`
//! pair, and there are only `width * height * 4` such pairs. Seeing one
//! twice is therefore proof of an infinite cycle, and a walk that never
//! repeats must leave the grid within that many steps. There is no
//! iteration cap.

use patrol_core::{AgentState, CellReader};

use crate::agent::{Agent, StepOutcome};
use crate::state_set::StateSet;

/// How a detection run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The guard walked off the grid.
    Exit,
    /// The guard repeated a state and will cycle forever.
    Loop,
}

/// Outcome of a detection run plus the number of step calls it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Exit or loop.
    pub outcome: Outcome,
    /// Step calls made. Never exceeds `width * height * 4`.
    pub steps: usize,
}

impl Verdict {
    /// `true` if the run ended in a loop.
    pub fn is_loop(&self) -> bool {
        self.outcome == Outcome::Loop
    }
}

/// Reusable loop detector.
///
/// Owns its seen-state buffer so that repeated runs (one per search
/// candidate) do not reallocate. Each worker thread keeps its own.
#[derive(Clone, Debug, Default)]
pub struct LoopDetector {
    seen: StateSet,
}

impl LoopDetector {
    /// Create a detector with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the guard from `start` until it exits or repeats a state.
    ///
    /// A start outside the grid counts as already exited.
    pub fn detect<G: CellReader + ?Sized>(&mut self, grid: &G, start: AgentState) -> Verdict {
        self.seen.reset(grid.cell_count());
        let mut agent = Agent::new(start);
        let mut steps = 0usize;

        loop {
            let state = agent.state();
            let Some(rank) = grid.rank(state.position) else {
                return Verdict {
                    outcome: Outcome::Exit,
                    steps,
                };
            };
            if !self.seen.insert(rank, state.direction) {
                return Verdict {
                    outcome: Outcome::Loop,
                    steps,
                };
            }
            steps += 1;
            if agent.step(grid) == StepOutcome::Exited {
                return Verdict {
                    outcome: Outcome::Exit,
                    steps,
                };
            }
        }
    }
}

/// One-shot detection with a fresh [`LoopDetector`].
pub fn detect_loop<G: CellReader + ?Sized>(grid: &G, start: AgentState) -> Verdict {
    LoopDetector::new().detect(grid, start)
}
