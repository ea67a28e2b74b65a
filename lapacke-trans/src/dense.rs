//! Dense (general) storage transposition.

use crate::block::tile_size;
use crate::error::Result;
use crate::extent::check_block;
use lapacke_traits::Layout;

#[cfg(feature = "parallel")]
use crate::block::MINTHREADLENGTH;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Copy a `rows x cols` matrix stored in `layout_in` into `dst`, stored in
/// the opposite layout.
///
/// Only the `rows x cols` block is written; padding between leading
/// slices of `dst` is left untouched.
pub fn ge_trans<T: Copy + Send + Sync>(
    layout_in: Layout,
    rows: usize,
    cols: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    check_block("src", layout_in, rows, cols, ld_src, src.len())?;
    check_block("dst", layout_in.transposed(), rows, cols, ld_dst, dst.len())?;

    // Canonical form: src[r + c * ld_src] -> dst[c + r * ld_dst], where `r`
    // walks the contiguous direction of the source.
    let (p, q) = match layout_in {
        Layout::ColMajor => (rows, cols),
        Layout::RowMajor => (cols, rows),
    };
    let dst = &mut dst[..(p - 1) * ld_dst + q];
    let tile = tile_size(std::mem::size_of::<T>());

    #[cfg(feature = "parallel")]
    {
        if p * q >= MINTHREADLENGTH && p > tile {
            dst.par_chunks_mut(ld_dst * tile)
                .enumerate()
                .for_each(|(b, chunk)| {
                    let r_begin = b * tile;
                    let r_count = (p - r_begin).min(tile);
                    transpose_rows(chunk, r_begin, r_count, q, src, ld_src, ld_dst, tile);
                });
            return Ok(());
        }
    }

    transpose_rows(dst, 0, p, q, src, ld_src, ld_dst, tile);
    Ok(())
}

/// Fill destination slices `r_begin..r_begin + r_count` tile by tile.
///
/// `dst_rows` starts at destination slice `r_begin`.
#[allow(clippy::too_many_arguments)]
#[inline]
fn transpose_rows<T: Copy>(
    dst_rows: &mut [T],
    r_begin: usize,
    r_count: usize,
    q: usize,
    src: &[T],
    ld_src: usize,
    ld_dst: usize,
    tile: usize,
) {
    for r0 in (0..r_count).step_by(tile) {
        let r1 = (r0 + tile).min(r_count);
        for c0 in (0..q).step_by(tile) {
            let c1 = (c0 + tile).min(q);
            for rr in r0..r1 {
                let r = r_begin + rr;
                let row = &mut dst_rows[rr * ld_dst + c0..rr * ld_dst + c1];
                for (k, d) in row.iter_mut().enumerate() {
                    *d = src[r + (c0 + k) * ld_src];
                }
            }
        }
    }
}
