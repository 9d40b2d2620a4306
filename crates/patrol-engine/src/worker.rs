//! Worker pool for the parallel obstruction search.
//!
//! Candidates are split into chunks and fed through a bounded crossbeam
//! channel to scoped worker threads. Each worker owns a private
//! [`LoopDetector`] and borrows the base grid immutably; no locks are
//! taken. A worker sends one partial [`Shard`] when the task channel
//! closes, and the caller sums them.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use patrol_core::{GridError, Position};
use patrol_grid::Grid;

use crate::detect::LoopDetector;
use crate::search::{run_candidates, SearchError, Shard};

/// Run `candidates` across `workers` threads in chunks of `chunk_size`.
pub(crate) fn run_parallel(
    grid: &Grid,
    candidates: &[Position],
    workers: usize,
    chunk_size: usize,
) -> Result<Shard, SearchError> {
    run_parallel_with(grid, candidates, workers, chunk_size, &run_candidates)
}

/// [`run_parallel`] with the per-chunk runner supplied by the caller.
fn run_parallel_with<R>(
    grid: &Grid,
    candidates: &[Position],
    workers: usize,
    chunk_size: usize,
    runner: &R,
) -> Result<Shard, SearchError>
where
    R: Fn(&Grid, &mut LoopDetector, &[Position], &mut Shard) -> Result<(), GridError> + Sync,
{
    thread::scope(|scope| -> Result<Shard, SearchError> {
        // Channels live inside the scope so an early return drops the
        // task sender before the scope joins, letting workers exit.
        let (task_tx, task_rx) = crossbeam_channel::bounded::<&[Position]>(workers * 4);
        let (result_tx, result_rx) = crossbeam_channel::unbounded();

        let mut handles = Vec::with_capacity(workers);
        for index in 0..workers {
            let tasks = task_rx.clone();
            let results = result_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("patrol-search-{index}"))
                .spawn_scoped(scope, move || worker_loop(grid, runner, tasks, results, index))
                .map_err(|e| SearchError::ThreadSpawnFailed {
                    reason: format!("search worker {index}: {e}"),
                })?;
            handles.push(handle);
        }
        drop(task_rx);
        drop(result_tx);

        for chunk in candidates.chunks(chunk_size) {
            // Fails only if every worker has already died.
            if task_tx.send(chunk).is_err() {
                break;
            }
        }
        drop(task_tx);

        // Join every handle so the scope never re-raises a worker panic.
        let mut panicked = None;
        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(index);
            }
        }
        if let Some(worker) = panicked {
            return Err(SearchError::WorkerPanicked { worker });
        }

        let mut total = Shard::default();
        for result in result_rx.iter() {
            total.merge(result?);
        }
        Ok(total)
    })
}

/// Main loop for a search worker. Runs until the task channel closes.
fn worker_loop<R>(
    grid: &Grid,
    runner: &R,
    tasks: Receiver<&[Position]>,
    results: Sender<Result<Shard, GridError>>,
    index: usize,
) where
    R: Fn(&Grid, &mut LoopDetector, &[Position], &mut Shard) -> Result<(), GridError>,
{
    let mut detector = LoopDetector::new();
    let mut shard = Shard::default();
    let mut outcome = Ok(());
    while let Ok(chunk) = tasks.recv() {
        outcome = runner(grid, &mut detector, chunk, &mut shard);
        if outcome.is_err() {
            break;
        }
    }
    tracing::debug!(
        worker = index,
        candidates = shard.metrics.candidates,
        loops = shard.metrics.loops,
        "search worker done"
    );
    // The receiver is held by the caller until every worker is joined.
    let sent = results.send(outcome.map(|()| shard));
    debug_assert!(sent.is_ok(), "result receiver dropped before worker {index}");
}
