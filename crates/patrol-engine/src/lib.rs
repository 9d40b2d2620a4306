//! Simulation engine for Patrol.
//!
//! Drives a guard across a [`Grid`](patrol_grid::Grid) under the
//! move-or-turn-right rule and answers two questions:
//!
//! - how many distinct cells the guard visits before leaving
//!   ([`distinct_visited`], backed by [`trace_path`]);
//! - how many single-cell obstructions trap it in a loop
//!   ([`loop_obstruction_count`], backed by [`ObstructionSearch`]).
//!
//! Loops are detected exactly, by recurrence of the full
//! `(position, direction)` state, never by an iteration cap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod detect;
pub mod metrics;
pub mod search;
pub mod state_set;
pub mod trace;

mod worker;

pub use agent::{Agent, AgentStatus, StepOutcome};
pub use config::{CandidateScope, ConfigError, SearchConfig};
pub use detect::{detect_loop, LoopDetector, Outcome, Verdict};
pub use metrics::SearchMetrics;
pub use search::{candidates, loop_obstruction_count, ObstructionSearch, SearchError, SearchReport};
pub use state_set::StateSet;
pub use trace::{distinct_visited, trace_path, PathTrace, SimulationError};
