//! Packed triangular storage transposition.
//!
//! A packed triangle stores the `n (n + 1) / 2` referenced entries of an
//! `n x n` triangular matrix contiguously, column by column (column-major)
//! or row by row (row-major). Upper row-major packing coincides with lower
//! column-major packing of the transpose, so the two layouts disagree on
//! every offset except the first.

use crate::error::{Result, TransError};
use lapacke_traits::{Diag, Layout, Uplo};

/// Number of stored entries of an `n x n` packed triangle.
#[inline]
pub const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Offset of entry `(i, j)` of the `uplo` triangle in packed storage.
///
/// `(i, j)` must lie in the stored triangle.
#[inline]
pub const fn packed_index(layout: Layout, uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
    match (layout, uplo) {
        (Layout::ColMajor, Uplo::Upper) => i + j * (j + 1) / 2,
        (Layout::ColMajor, Uplo::Lower) => i + j * (2 * n - j - 1) / 2,
        (Layout::RowMajor, Uplo::Upper) => j + i * (2 * n - i - 1) / 2,
        (Layout::RowMajor, Uplo::Lower) => j + i * (i + 1) / 2,
    }
}

/// Copy a packed triangle into the opposite layout.
///
/// With [`Diag::Unit`] the diagonal entries are not copied.
pub fn tp_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    diag: Diag,
    n: usize,
    src: &[T],
    dst: &mut [T],
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    let required = packed_len(n);
    for (operand, len) in [("src", src.len()), ("dst", dst.len())] {
        if len < required {
            return Err(TransError::BufferTooSmall {
                operand,
                len,
                required,
            });
        }
    }

    let layout_out = layout_in.transposed();
    for j in 0..n {
        for i in 0..n {
            if !uplo.contains(i, j) || (diag == Diag::Unit && i == j) {
                continue;
            }
            dst[packed_index(layout_out, uplo, n, i, j)] =
                src[packed_index(layout_in, uplo, n, i, j)];
        }
    }
    Ok(())
}

/// Positive-definite packed storage.
pub fn pp_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    src: &[T],
    dst: &mut [T],
) -> Result<()> {
    tp_trans(layout_in, uplo, Diag::NonUnit, n, src, dst)
}

/// Symmetric packed storage.
pub fn sp_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    src: &[T],
    dst: &mut [T],
) -> Result<()> {
    tp_trans(layout_in, uplo, Diag::NonUnit, n, src, dst)
}

/// Hermitian packed storage.
pub fn hp_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    src: &[T],
    dst: &mut [T],
) -> Result<()> {
    tp_trans(layout_in, uplo, Diag::NonUnit, n, src, dst)
}
