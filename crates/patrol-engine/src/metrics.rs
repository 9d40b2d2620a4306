//! Counters collected during an obstruction search.
//!
//! [`SearchMetrics`] is filled per worker and combined with
//! [`merge`](SearchMetrics::merge), a plain sum, so the totals do not
//! depend on how candidates were sharded.

use crate::detect::{Outcome, Verdict};

/// Totals for one obstruction search (or one worker's share of it).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Candidate cells simulated.
    pub candidates: usize,
    /// Candidates whose obstruction trapped the guard.
    pub loops: usize,
    /// Candidates whose obstruction still let the guard leave.
    pub exits: usize,
    /// Step calls across all simulations.
    pub total_steps: u64,
    /// Step calls in the longest single simulation.
    pub longest_run: usize,
    /// Worker threads used. Zero until the search completes.
    pub workers: usize,
    /// Wall-clock time for the whole search, in microseconds.
    pub elapsed_us: u64,
}

impl SearchMetrics {
    /// Account for one candidate's verdict.
    pub fn record(&mut self, verdict: &Verdict) {
        self.candidates += 1;
        match verdict.outcome {
            Outcome::Loop => self.loops += 1,
            Outcome::Exit => self.exits += 1,
        }
        self.total_steps += verdict.steps as u64;
        self.longest_run = self.longest_run.max(verdict.steps);
    }

    /// Fold another worker's counters into these.
    ///
    /// `workers` and `elapsed_us` describe the whole search and are left
    /// for the caller to set.
    pub fn merge(&mut self, other: &SearchMetrics) {
        self.candidates += other.candidates;
        self.loops += other.loops;
        self.exits += other.exits;
        self.total_steps += other.total_steps;
        self.longest_run = self.longest_run.max(other.longest_run);
    }
}
