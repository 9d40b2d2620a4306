//! Dense set of guard states for exact loop detection.

use patrol_core::Direction;

/// Set of `(cell, direction)` pairs over a fixed-size grid.
///
/// Backed by one `u32` stamp per pair (`cell_count * 4` slots). A slot
/// is a member iff its stamp equals the current epoch, so
/// [`reset`](StateSet::reset) is O(1): it bumps the epoch instead of
/// clearing the buffer. The buffer is only zeroed when the dimensions
/// change or the epoch counter wraps.
///
/// Cells are addressed by row-major rank (see
/// [`CellReader::rank`](patrol_core::CellReader::rank)).
#[derive(Clone, Debug, Default)]
pub struct StateSet {
    stamps: Vec<u32>,
    epoch: u32,
    len: usize,
}

impl StateSet {
    /// Create an empty set sized for `cell_count` cells.
    pub fn with_cells(cell_count: usize) -> Self {
        let mut set = Self::default();
        set.reset(cell_count);
        set
    }

    /// Empty the set and size it for `cell_count` cells.
    pub fn reset(&mut self, cell_count: usize) {
        let slots = cell_count * 4;
        if self.stamps.len() != slots {
            self.stamps.clear();
            self.stamps.resize(slots, 0);
            self.epoch = 0;
        }
        if self.epoch == u32::MAX {
            self.stamps.fill(0);
            self.epoch = 0;
        }
        self.epoch += 1;
        self.len = 0;
    }

    /// Insert a state. Returns `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is not below the cell count given to `reset`.
    pub fn insert(&mut self, rank: usize, direction: Direction) -> bool {
        let slot = &mut self.stamps[rank * 4 + direction.index()];
        if *slot == self.epoch {
            return false;
        }
        *slot = self.epoch;
        self.len += 1;
        true
    }

    /// `true` if the state is present.
    pub fn contains(&self, rank: usize, direction: Direction) -> bool {
        self.stamps
            .get(rank * 4 + direction.index())
            .is_some_and(|&s| s == self.epoch && self.epoch != 0)
    }

    /// Number of states inserted since the last reset.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if nothing was inserted since the last reset.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of cells this set is sized for.
    pub fn cell_count(&self) -> usize {
        self.stamps.len() / 4
    }
}
