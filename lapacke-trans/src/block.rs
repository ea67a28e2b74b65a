//! Tile size for blocked transposition.

use crate::{BLOCK_MEMORY_SIZE, CACHE_LINE_SIZE};

/// Minimum number of elements before a transpose is split across threads.
#[cfg(feature = "parallel")]
pub(crate) const MINTHREADLENGTH: usize = 1 << 15; // 32768

/// Side of a square tile such that one source tile and one destination
/// tile fit in [`BLOCK_MEMORY_SIZE`] together.
///
/// The side is a power of two and never shorter than one cache line of
/// elements.
pub fn tile_size(elem_size: usize) -> usize {
    let elem_size = elem_size.max(1);
    let per_tile = BLOCK_MEMORY_SIZE / (2 * elem_size);
    let mut side = 1usize;
    while (side * 2) * (side * 2) <= per_tile {
        side *= 2;
    }
    side.max(CACHE_LINE_SIZE / elem_size).max(1)
}
