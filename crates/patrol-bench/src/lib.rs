//! Benchmark profiles for the Patrol guard simulator.
//!
//! Provides pre-built maps for benchmarking:
//!
//! - [`reference_grid`]: 130x130 map (~17K cells), the usual puzzle size
//! - [`stress_grid`]: 400x400 map (160K cells) for stress testing
//! - [`search_config`]: an [`ObstructionSearch`](patrol_engine::ObstructionSearch)
//!   configuration with a fixed worker count

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use patrol_core::GridError;
use patrol_engine::{CandidateScope, SearchConfig};
use patrol_grid::Grid;
use patrol_test_utils::random_grid_text;

/// Wall density of the generated maps, in permille.
///
/// Close to the density of real puzzle inputs.
pub const WALL_PERMILLE: u64 = 45;

/// Build a reference map: 130x130 cells.
pub fn reference_grid(seed: u64) -> Result<Grid, GridError> {
    Grid::parse(&random_grid_text(130, 130, WALL_PERMILLE, seed))
}

/// Build a stress map: 400x400 cells.
///
/// Same density as [`reference_grid`] at roughly ten times the cells.
pub fn stress_grid(seed: u64) -> Result<Grid, GridError> {
    Grid::parse(&random_grid_text(400, 400, WALL_PERMILLE, seed))
}

/// Search configuration with `workers` threads and the traced-path scope.
pub fn search_config(workers: usize) -> SearchConfig {
    SearchConfig {
        worker_count: Some(workers),
        scope: CandidateScope::TracedPath,
        ..SearchConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_core::CellReader;

    #[test]
    fn reference_grid_parses() {
        let g = reference_grid(42).unwrap();
        assert_eq!((g.width(), g.height()), (130, 130));
        assert!(g.count(patrol_core::Cell::Wall) > 0);
    }

    #[test]
    fn stress_grid_parses() {
        let g = stress_grid(42).unwrap();
        assert_eq!(g.cell_count(), 160_000);
    }

    #[test]
    fn reference_grid_deterministic() {
        assert_eq!(reference_grid(7).unwrap(), reference_grid(7).unwrap());
    }

    #[test]
    fn search_config_validates() {
        assert_eq!(search_config(4).validate(), Ok(()));
        assert_eq!(search_config(4).resolved_worker_count(), 4);
    }
}
