//! NaN screening of high-level inputs.
//!
//! Each check inspects only the entries its storage format references, in
//! the caller's layout. They return `true` when a NaN is found.

use lapacke_trans::{packed_len, Diag, Layout, Uplo};
use lapacke_traits::Scalar;
use num_traits::Float;

/// Dense `m x n` block.
pub fn ge_nancheck<T: Scalar>(layout: Layout, m: usize, n: usize, a: &[T], lda: usize) -> bool {
    (0..n).any(|j| (0..m).any(|i| a[layout.index(i, j, lda)].is_nan()))
}

/// The `uplo` triangle of an `n x n` matrix; the diagonal is skipped for
/// [`Diag::Unit`].
pub fn tr_nancheck<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
) -> bool {
    (0..n).any(|j| {
        (0..n).any(|i| {
            uplo.contains(i, j)
                && !(diag == Diag::Unit && i == j)
                && a[layout.index(i, j, lda)].is_nan()
        })
    })
}

pub fn sy_nancheck<T: Scalar>(layout: Layout, uplo: Uplo, n: usize, a: &[T], lda: usize) -> bool {
    tr_nancheck(layout, uplo, Diag::NonUnit, n, a, lda)
}

pub fn he_nancheck<T: Scalar>(layout: Layout, uplo: Uplo, n: usize, a: &[T], lda: usize) -> bool {
    tr_nancheck(layout, uplo, Diag::NonUnit, n, a, lda)
}

pub fn po_nancheck<T: Scalar>(layout: Layout, uplo: Uplo, n: usize, a: &[T], lda: usize) -> bool {
    tr_nancheck(layout, uplo, Diag::NonUnit, n, a, lda)
}

/// General band array: only slots that map to entries of the `m x n` matrix.
#[allow(clippy::too_many_arguments)]
pub fn gb_nancheck<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    ab: &[T],
    ldab: usize,
) -> bool {
    let bands = kl + ku + 1;
    (0..n).any(|j| {
        let lo = ku.saturating_sub(j);
        let hi = bands.min((m + ku).saturating_sub(j));
        (lo..hi).any(|r| ab[layout.index(r, j, ldab)].is_nan())
    })
}

/// Positive-definite band array with `kd` off-diagonals.
pub fn pb_nancheck<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    kd: usize,
    ab: &[T],
    ldab: usize,
) -> bool {
    match uplo {
        Uplo::Upper => gb_nancheck(layout, n, n, 0, kd, ab, ldab),
        Uplo::Lower => gb_nancheck(layout, n, n, kd, 0, ab, ldab),
    }
}

/// Packed triangle of order `n`. Packing is layout-specific but the set of
/// stored entries is not, so the whole packed range is inspected.
pub fn pp_nancheck<T: Scalar>(n: usize, ap: &[T]) -> bool {
    ap[..packed_len(n)].iter().any(|x| x.is_nan())
}

/// A real scalar argument such as `anorm`.
pub fn real_nancheck<R: Float>(x: R) -> bool {
    x.is_nan()
}
