//! Band storage transposition.
//!
//! A band matrix with `kl` sub- and `ku` super-diagonals is stored as a
//! `(kl + ku + 1) x n` array whose row `ku + i - j` holds entry `(i, j)`.
//! Transposition works on that compact array, not on the full `m x n`
//! matrix, and copies only the slots that map to real matrix entries.

use crate::error::Result;
use crate::extent::check_block;
use lapacke_traits::{Diag, Layout, Uplo};

/// Copy a general band array into the opposite layout.
///
/// `src` and `dst` are `(kl + ku + 1) x n` arrays; for a row-major array
/// the leading dimension must be at least `n`, for a column-major one at
/// least `kl + ku + 1`.
#[allow(clippy::too_many_arguments)]
pub fn gb_trans<T: Copy>(
    layout_in: Layout,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    band_copy(layout_in, m, n, kl, ku, None, src, ld_src, dst, ld_dst)
}

/// Copy a triangular band array (`kd` off-diagonals) into the opposite layout.
///
/// With [`Diag::Unit`] the diagonal row of the band array is not copied.
#[allow(clippy::too_many_arguments)]
pub fn tb_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    diag: Diag,
    n: usize,
    kd: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    let (kl, ku) = match uplo {
        Uplo::Upper => (0, kd),
        Uplo::Lower => (kd, 0),
    };
    let skip = match diag {
        Diag::NonUnit => None,
        Diag::Unit => Some(ku),
    };
    band_copy(layout_in, n, n, kl, ku, skip, src, ld_src, dst, ld_dst)
}

/// Positive-definite band storage.
#[allow(clippy::too_many_arguments)]
pub fn pb_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    kd: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    tb_trans(layout_in, uplo, Diag::NonUnit, n, kd, src, ld_src, dst, ld_dst)
}

/// Symmetric band storage.
#[allow(clippy::too_many_arguments)]
pub fn sb_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    kd: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    tb_trans(layout_in, uplo, Diag::NonUnit, n, kd, src, ld_src, dst, ld_dst)
}

/// Hermitian band storage.
#[allow(clippy::too_many_arguments)]
pub fn hb_trans<T: Copy>(
    layout_in: Layout,
    uplo: Uplo,
    n: usize,
    kd: usize,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    tb_trans(layout_in, uplo, Diag::NonUnit, n, kd, src, ld_src, dst, ld_dst)
}

#[allow(clippy::too_many_arguments)]
fn band_copy<T: Copy>(
    layout_in: Layout,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    skip_row: Option<usize>,
    src: &[T],
    ld_src: usize,
    dst: &mut [T],
    ld_dst: usize,
) -> Result<()> {
    if m == 0 || n == 0 {
        return Ok(());
    }
    let bands = kl + ku + 1;
    check_block("src", layout_in, bands, n, ld_src, src.len())?;
    let layout_out = layout_in.transposed();
    check_block("dst", layout_out, bands, n, ld_dst, dst.len())?;

    for j in 0..n {
        // band row r holds matrix row i = r + j - ku, which must lie in 0..m
        let lo = ku.saturating_sub(j);
        let hi = bands.min((m + ku).saturating_sub(j));
        for r in lo..hi {
            if skip_row == Some(r) {
                continue;
            }
            dst[layout_out.index(r, j, ld_dst)] = src[layout_in.index(r, j, ld_src)];
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{band_ld, ge_trans, DEFAULT_BAND_PADDING};

    const N: usize = 4;
    const KD: usize = 1;
    const LDAB: usize = 9;

    // Lower band Cholesky input: diagonal in row 0, sub-diagonal in row 1.
    fn lower_band() -> Vec<f64> {
        let mut ab = vec![0.0; LDAB * N];
        ab[0] = 5.49;
        ab[9] = 5.63;
        ab[18] = 2.6;
        ab[27] = 5.17;
        ab[1] = 2.68;
        ab[10] = -2.39;
        ab[19] = -2.22;
        ab[28] = 0.0;
        ab
    }

    #[test]
    fn test_lower_band_to_row_major() {
        let ab = lower_band();
        let ld = band_ld(N, DEFAULT_BAND_PADDING);
        let mut ab_r = vec![f64::NAN; (KD + 1) * ld];
        pb_trans(Layout::ColMajor, Uplo::Lower, N, KD, &ab, LDAB, &mut ab_r, ld).unwrap();
        assert_eq!(&ab_r[..N], &[5.49, 5.63, 2.6, 5.17]);
        assert_eq!(&ab_r[ld..ld + 3], &[2.68, -2.39, -2.22]);
        // (1, 3) would be matrix entry (4, 3): outside the matrix, not copied
        assert!(ab_r[ld + 3].is_nan());
    }

    #[test]
    fn test_matches_dense_block_transpose_on_valid_slots() {
        let ab = lower_band();
        let ld = band_ld(N, DEFAULT_BAND_PADDING);
        let mut via_ge = vec![0.0; (KD + 1) * ld];
        ge_trans(Layout::ColMajor, KD + 1, N, &ab, LDAB, &mut via_ge, ld).unwrap();
        let mut via_pb = vec![0.0; (KD + 1) * ld];
        pb_trans(Layout::ColMajor, Uplo::Lower, N, KD, &ab, LDAB, &mut via_pb, ld).unwrap();
        assert_eq!(via_ge, via_pb);
    }

    #[test]
    fn test_upper_band_round_trip() {
        // upper kd = 2 on n = 5: row 2 is the diagonal
        let (n, kd, ldab) = (5, 2, 3);
        let ab: Vec<f64> = (0..ldab * n).map(|x| x as f64 + 1.0).collect();
        let mut row = vec![0.0; (kd + 1) * n];
        sb_trans(Layout::ColMajor, Uplo::Upper, n, kd, &ab, ldab, &mut row, n).unwrap();
        let mut back = vec![0.0; ldab * n];
        sb_trans(Layout::RowMajor, Uplo::Upper, n, kd, &row, n, &mut back, ldab).unwrap();
        for j in 0..n {
            for r in kd.saturating_sub(j)..=kd {
                assert_eq!(back[r + j * ldab], ab[r + j * ldab]);
            }
        }
        // slots above the first columns are not part of the matrix
        assert_eq!(back[0], 0.0);
        assert_eq!(back[1], 0.0);
        assert_eq!(back[ldab], 0.0);
    }

    #[test]
    fn test_unit_diagonal_skipped() {
        let ab = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = vec![0.0; 6];
        tb_trans(Layout::ColMajor, Uplo::Lower, Diag::Unit, 3, 1, &ab, 2, &mut out, 3).unwrap();
        assert_eq!(out, vec![0.0, 0.0, 0.0, 2.0, 4.0, 0.0]);
    }

    #[test]
    fn test_general_band() {
        // 3x4 with kl = 1, ku = 1: bands = 3
        let (m, n, kl, ku) = (3, 4, 1, 1);
        let ab: Vec<f64> = (0..3 * n).map(|x| x as f64 + 1.0).collect();
        let mut out = vec![0.0; 3 * n];
        gb_trans(Layout::ColMajor, m, n, kl, ku, &ab, 3, &mut out, n).unwrap();
        // column 0: rows 1..3 valid; column 3: only row 0 valid (i = 2)
        assert_eq!(out[0], 0.0);
        assert_eq!(out[n], 2.0);
        assert_eq!(out[2 * n], 3.0);
        assert_eq!(out[3], 10.0);
        assert_eq!(out[n + 3], 0.0);
        assert_eq!(out[2 * n + 3], 0.0);
        let mut hb = vec![0.0; 3 * n];
        hb_trans(Layout::ColMajor, Uplo::Upper, n, 2, &ab, 3, &mut hb, n).unwrap();
        assert_eq!(hb[2 * n], 3.0);
    }
}
