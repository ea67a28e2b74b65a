//! Triangular, symmetric and Hermitian storage transposition.
//!
//! Only the referenced triangle of the `n x n` block is copied. Storage
//! order changes but logical positions do not, so `uplo` means the same
//! triangle on both sides and Hermitian data is not conjugated.

use crate::error::Result;
use crate::extent::check_block;
use lapacke_traits::{Diag, Layout, Uplo};

/// Copy the `uplo` triangle of an `n x n` matrix into the opposite layout.
///
/// With [`Diag::Unit`] the diagonal is implicit and not copied.
#[allow(clippy::too_many_arguments)]
pub fn tr_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    diag: Diag,
    n: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    check_block("src", layout_in, n, n, ld_src, src.len())?;
    let layout_out = layout_in.transposed();
    check_block("dst", layout_out, n, n, ld_dst, dst.len())?;

    let skip_diag = diag == Diag::Unit;
    for j in 0..n {
        let rows = match uplo {
            Uplo::Upper => 0..j + 1,
            Uplo::Lower => j..n,
        };
        for i in rows {
            if skip_diag && i == j {
                continue;
            }
            dst[layout_out.index(i, j, ld_dst)] = src[layout_in.index(i, j, ld_src)];
        }
    }
    Ok(())
}

/// Symmetric storage: [`tr_trans`] with a stored diagonal.
pub fn sy_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    tr_trans(layout_in, uplo, Diag::NonUnit, n, src, ld_src, dst, ld_dst)
}

/// Hermitian storage: [`tr_trans`] with a stored diagonal, no conjugation.
pub fn he_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    tr_trans(layout_in, uplo, Diag::NonUnit, n, src, ld_src, dst, ld_dst)
}

/// Positive-definite storage: [`tr_trans`] with a stored diagonal.
pub fn po_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    tr_trans(layout_in, uplo, Diag::NonUnit, n, src, ld_src, dst, ld_dst)
}
