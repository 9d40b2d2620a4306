//! Test utilities and fixture maps for Patrol development.
//!
//! Provides the canonical ten-by-ten example map with its known answers,
//! small hand-built maps for edge cases, a seeded map generator for
//! benchmarks, and a proptest strategy producing valid map text.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    arb_grid_text, random_grid_text, BOXED_CYCLE, CANONICAL, CANONICAL_DISTINCT,
    CANONICAL_LOOP_CELLS, CANONICAL_LOOP_COUNT, CANONICAL_TRACE, EDGE_EXIT,
};
