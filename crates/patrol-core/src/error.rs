//! Error types for grid construction and obstruction placement.
//!
//! Every malformed-input condition is detected while the grid is built,
//! so simulations never observe a partially valid map.

use crate::id::Position;
use std::error::Error;
use std::fmt;

/// Errors from parsing a grid or placing an obstruction on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows after trimming blank lines.
    Empty,
    /// No `^` guard marker was found.
    MissingAgent,
    /// More than one `^` guard marker was found.
    MultipleAgents {
        /// The first marker encountered (row-major).
        first: Position,
        /// The second marker encountered.
        second: Position,
    },
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character outside `{'.', '#', '^'}`.
    UnrecognizedCell {
        /// The offending character.
        glyph: char,
        /// Where it appeared.
        position: Position,
    },
    /// A dimension does not fit in an `i32` coordinate.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: usize,
    },
    /// An obstruction was requested on a cell that cannot hold one.
    InvalidObstruction {
        /// The requested cell.
        position: Position,
        /// Why the placement was rejected.
        reason: &'static str,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no rows"),
            Self::MissingAgent => write!(f, "grid has no '^' guard marker"),
            Self::MultipleAgents { first, second } => {
                write!(f, "grid has more than one guard marker: {first} and {second}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has width {found}, expected {expected}"),
            Self::UnrecognizedCell { glyph, position } => {
                write!(f, "unrecognized cell {glyph:?} at {position}")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} {value} exceeds i32::MAX")
            }
            Self::InvalidObstruction { position, reason } => {
                write!(f, "cannot place obstruction at {position}: {reason}")
            }
        }
    }
}

impl Error for GridError {}
