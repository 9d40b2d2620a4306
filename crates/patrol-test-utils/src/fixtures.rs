//! Reusable maps.
//!
//! - [`CANONICAL`]: the standard ten-by-ten example, 41 cells visited and
//!   6 loop-inducing obstructions.
//! - [`BOXED_CYCLE`]: walls arranged so the guard circles its start forever.
//! - [`EDGE_EXIT`]: the guard starts on the top edge facing out.
//! - [`random_grid_text`]: deterministic pseudo-random maps for benches.
//! - [`arb_grid_text`]: proptest strategy over valid maps.

use std::ops::Range;

use patrol_core::Position;
use proptest::prelude::*;

/// The ten-by-ten example map.
pub const CANONICAL: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

/// Distinct cells visited on [`CANONICAL`].
pub const CANONICAL_DISTINCT: usize = 41;

/// Loop-inducing obstruction count on [`CANONICAL`].
pub const CANONICAL_LOOP_COUNT: usize = 6;

/// The loop-inducing cells on [`CANONICAL`], row-major.
pub const CANONICAL_LOOP_CELLS: [Position; 6] = [
    Position::new(3, 6),
    Position::new(6, 7),
    Position::new(7, 7),
    Position::new(1, 8),
    Position::new(3, 8),
    Position::new(7, 9),
];

/// [`CANONICAL`] with the guard's path drawn as `X`.
pub const CANONICAL_TRACE: &str = "\
....#.....
....XXXXX#
....X...X.
..#.X...X.
..XXXXX#X.
..X.X.X.X.
.#XX^XXXX.
.XXXXXXX#.
#XXXXXXX..
......#X..";

/// The guard walks a two-by-two square around its start and never leaves.
pub const BOXED_CYCLE: &str = "\
.#..
...#
#^..
..#.";

/// Guard on the top edge facing out.
pub const EDGE_EXIT: &str = "\
..^..
.....
.....";

/// Deterministic pseudo-random map of `width` by `height` cells.
///
/// Roughly `wall_permille / 1000` of the cells are walls. The guard is
/// placed at the centre, which is always open. Same inputs, same map.
pub fn random_grid_text(width: usize, height: usize, wall_permille: u64, seed: u64) -> String {
    let start = (height / 2) * width + width / 2;
    let mut state = seed;
    let mut text = String::with_capacity((width + 1) * height);
    for r in 0..height {
        if r > 0 {
            text.push('\n');
        }
        for c in 0..width {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let i = r * width + c;
            let glyph = if i == start {
                '^'
            } else if (state >> 33) % 1000 < wall_permille {
                '#'
            } else {
                '.'
            };
            text.push(glyph);
        }
    }
    text
}

/// Strategy over valid map text with the given width and height ranges.
///
/// Each non-start cell is a wall with probability one in four.
pub fn arb_grid_text(widths: Range<usize>, heights: Range<usize>) -> impl Strategy<Value = String> {
    (widths, heights).prop_flat_map(|(w, h)| {
        let cells = proptest::collection::vec(prop::bool::weighted(0.25), w * h);
        (Just(w), cells, 0..w * h).prop_map(|(w, walls, start)| {
            let mut text = String::with_capacity(walls.len() + walls.len() / w);
            for (i, wall) in walls.iter().enumerate() {
                if i > 0 && i % w == 0 {
                    text.push('\n');
                }
                text.push(if i == start {
                    '^'
                } else if *wall {
                    '#'
                } else {
                    '.'
                });
            }
            text
        })
    })
}
