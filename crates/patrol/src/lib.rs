//! Patrol: a grid guard simulator.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Patrol sub-crates. For most users, adding `patrol` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use patrol::prelude::*;
//!
//! let grid = Grid::parse("\
//! ....#.....
//! .........#
//! ..........
//! ..#.......
//! .......#..
//! ..........
//! .#..^.....
//! ........#.
//! #.........
//! ......#...").unwrap();
//!
//! // Cells the guard stands on before walking off the map.
//! assert_eq!(distinct_visited(&grid).unwrap(), 41);
//!
//! // Single extra obstructions that trap the guard in a loop.
//! let report = ObstructionSearch::new(&grid, SearchConfig::default())
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert_eq!(report.loop_count(), 6);
//! assert_eq!(report.loop_cells[0], Position::new(3, 6));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `patrol-core` | Positions, directions, cells, `CellReader` |
//! | [`grid`] | `patrol-grid` | Map parsing and the obstruction overlay |
//! | [`engine`] | `patrol-engine` | Stepping, tracing, loop detection, search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`patrol-core`).
///
/// Contains [`types::Position`], [`types::Direction`], [`types::Cell`],
/// [`types::GridError`] and the [`types::CellReader`] trait.
pub use patrol_core as types;

/// Map parsing and views (`patrol-grid`).
///
/// [`grid::Grid`] owns the parsed map; [`grid::Obstructed`] overlays one
/// extra obstruction without copying it.
pub use patrol_grid as grid;

/// Simulation and search (`patrol-engine`).
///
/// [`engine::trace_path`] walks the unobstructed guard,
/// [`engine::LoopDetector`] classifies a single walk, and
/// [`engine::ObstructionSearch`] runs every candidate across a worker pool.
pub use patrol_engine as engine;

/// Common imports for typical Patrol usage.
///
/// ```rust
/// use patrol::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use patrol_core::{AgentState, Cell, CellReader, Direction, Position};

    // Errors
    pub use patrol_core::GridError;
    pub use patrol_engine::{ConfigError, SearchError, SimulationError};

    // Grid
    pub use patrol_grid::{Grid, Obstructed};

    // Engine
    pub use patrol_engine::{
        detect_loop, distinct_visited, loop_obstruction_count, trace_path, CandidateScope,
        LoopDetector, ObstructionSearch, Outcome, PathTrace, SearchConfig, SearchMetrics,
        SearchReport, Verdict,
    };
}
