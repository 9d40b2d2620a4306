//! Obstruction search: which single extra wall traps the guard?
//!
//! Every candidate cell is simulated from scratch against its own
//! [`Obstructed`](patrol_grid::Obstructed) view of the shared grid, so
//! candidates are independent and may run on any thread in any order.
//! The report is sorted afterwards and is identical for every worker
//! count.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use patrol_core::{Cell, CellReader, GridError, Position};
use patrol_grid::Grid;

use crate::config::{CandidateScope, ConfigError, SearchConfig};
use crate::detect::LoopDetector;
use crate::metrics::SearchMetrics;
use crate::trace::trace_path;
use crate::worker;

// ── Error type ──────────────────────────────────────────────────

/// Errors from running an obstruction search.
#[derive(Debug, PartialEq)]
pub enum SearchError {
    /// The search configuration is invalid.
    Config(ConfigError),
    /// A candidate could not be obstructed.
    Grid(GridError),
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
    /// A worker thread panicked.
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::WorkerPanicked { worker } => write!(f, "search worker {worker} panicked"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── Report ──────────────────────────────────────────────────────

/// Result of an obstruction search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Cells whose obstruction traps the guard, in row-major order.
    pub loop_cells: Vec<Position>,
    /// Search counters.
    pub metrics: SearchMetrics,
}

impl SearchReport {
    /// Number of loop-inducing cells.
    pub fn loop_count(&self) -> usize {
        self.loop_cells.len()
    }
}

/// One worker's partial result.
#[derive(Debug, Default)]
pub(crate) struct Shard {
    pub loop_cells: Vec<Position>,
    pub metrics: SearchMetrics,
}

impl Shard {
    pub(crate) fn merge(&mut self, other: Shard) {
        self.loop_cells.extend(other.loop_cells);
        self.metrics.merge(&other.metrics);
    }
}

/// Simulate each candidate with `detector`, accumulating into `shard`.
pub(crate) fn run_candidates(
    grid: &Grid,
    detector: &mut LoopDetector,
    candidates: &[Position],
    shard: &mut Shard,
) -> Result<(), GridError> {
    let start = grid.start_state();
    for &position in candidates {
        let view = grid.obstructed(position)?;
        let verdict = detector.detect(&view, start);
        if verdict.is_loop() {
            tracing::trace!(%position, steps = verdict.steps, "loop found");
            shard.loop_cells.push(position);
        }
        shard.metrics.record(&verdict);
    }
    Ok(())
}

// ── Candidates ──────────────────────────────────────────────────

/// Cells eligible for an obstruction, in row-major order.
///
/// Never includes a wall or the guard's start.
pub fn candidates(grid: &Grid, scope: CandidateScope) -> Vec<Position> {
    let start = grid.start();
    let eligible = |p: &Position| *p != start && grid.cell_at(*p) == Some(Cell::Open);
    match scope {
        CandidateScope::AllOpen => grid.positions().filter(eligible).collect(),
        CandidateScope::TracedPath => match trace_path(grid, grid.start_state()) {
            Ok(trace) => grid
                .positions()
                .filter(|p| trace.contains(*p))
                .filter(eligible)
                .collect(),
            Err(e) => {
                tracing::debug!(error = %e, "unobstructed walk never exits; trying every open cell");
                grid.positions().filter(eligible).collect()
            }
        },
    }
}

// ── ObstructionSearch ───────────────────────────────────────────

/// Tries every candidate obstruction and counts those that trap the guard.
///
/// # Examples
///
/// ```
/// use patrol_engine::{ObstructionSearch, SearchConfig};
/// use patrol_grid::Grid;
///
/// let grid = Grid::parse("\
/// ....#.....
/// .........#
/// ..........
/// ..#.......
/// .......#..
/// ..........
/// .#..^.....
/// ........#.
/// #.........
/// ......#...").unwrap();
/// let report = ObstructionSearch::new(&grid, SearchConfig::default())
///     .unwrap()
///     .run()
///     .unwrap();
/// assert_eq!(report.loop_count(), 6);
/// ```
pub struct ObstructionSearch<'g> {
    grid: &'g Grid,
    config: SearchConfig,
}

impl<'g> ObstructionSearch<'g> {
    /// Create a search over `grid`, validating `config`.
    pub fn new(grid: &'g Grid, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { grid, config })
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search.
    pub fn run(&self) -> Result<SearchReport, SearchError> {
        let started = Instant::now();
        let candidates = candidates(self.grid, self.config.scope);
        let chunk_size = self.config.chunk_size;
        let chunks = candidates.len().div_ceil(chunk_size).max(1);
        let workers = self.config.resolved_worker_count().min(chunks);

        tracing::debug!(
            candidates = candidates.len(),
            workers,
            chunk_size,
            scope = %self.config.scope,
            "starting obstruction search"
        );

        let mut shard = if workers <= 1 {
            let mut shard = Shard::default();
            run_candidates(self.grid, &mut LoopDetector::new(), &candidates, &mut shard)?;
            shard
        } else {
            worker::run_parallel(self.grid, &candidates, workers, chunk_size)?
        };

        shard.loop_cells.sort_by_key(|p| (p.row, p.col));
        let mut metrics = shard.metrics;
        metrics.workers = workers;
        metrics.elapsed_us = started.elapsed().as_micros() as u64;

        tracing::debug!(
            loops = metrics.loops,
            total_steps = metrics.total_steps,
            elapsed_us = metrics.elapsed_us,
            "obstruction search finished"
        );

        Ok(SearchReport {
            loop_cells: shard.loop_cells,
            metrics,
        })
    }
}

/// Number of single-cell obstructions that trap the guard on `grid`.
pub fn loop_obstruction_count(grid: &Grid, config: &SearchConfig) -> Result<usize, SearchError> {
    ObstructionSearch::new(grid, config.clone())?
        .run()
        .map(|r| r.loop_count())
}
