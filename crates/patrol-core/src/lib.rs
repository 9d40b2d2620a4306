//! Core types and traits for the Patrol guard-walk simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Patrol workspace:
//! positions and headings, cell kinds, the [`CellReader`] lookup trait,
//! and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::Cell;
pub use error::GridError;
pub use id::{AgentState, Direction, Position};
pub use traits::CellReader;
