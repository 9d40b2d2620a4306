//! Grid model for Patrol simulations.
//!
//! This crate turns map text into an immutable [`Grid`] and provides the
//! [`Obstructed`] overlay through which a single extra wall is tried
//! without touching the base grid.
//!
//! # Input format
//!
//! One line per row, drawn from `.` (open), `#` (wall) and exactly one
//! `^` (the guard, facing up). Leading and trailing blank lines are
//! ignored; every other line must have the same width.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod overlay;

pub use grid::Grid;
pub use overlay::Obstructed;
pub use patrol_core::{Cell, CellReader, GridError};
