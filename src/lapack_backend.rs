//! Kernels backed by a system LAPACK through the [`lapack`] crate.
//!
//! Linked by `build.rs` against OpenBLAS (override the search path with
//! `LAPACK_LIB_DIR`). The Fortran routines trust their length arguments,
//! so every call first checks that the slices cover what those arguments
//! address and reports a short slice as an illegal value of that argument.

use lapack::{c32, c64};
use lapacke_trans::packed_len;
use lapacke_traits::{HermitianKernel, Info, Kernel, Uplo};

/// The native LAPACK library.
#[derive(Debug, Clone, Copy, Default)]
pub struct LapackBackend;

/// Whether `len` elements cover a column-major `rows x cols` block with
/// leading dimension `ld`. Shapes the routine itself rejects pass, so its
/// own status reports them.
fn spans(len: usize, rows: i32, cols: i32, ld: i32) -> bool {
    if rows <= 0 || cols <= 0 || ld < rows {
        return true;
    }
    len >= (ld as usize) * (cols as usize - 1) + rows as usize
}

fn at_least(len: usize, required: i32) -> bool {
    required <= 0 || len >= required as usize
}

macro_rules! impl_kernel {
    ($t:ty, $real:ty, $potrf:ident, $pptrf:ident, $pbtrf:ident, $getrf:ident, $sytrf:ident,
     |$s_uplo:ident, $s_n:ident, $s_a:ident, $s_lda:ident, $s_ipiv:ident, $s_anorm:ident,
      $s_rcond:ident, $s_work:ident, $s_iwork:ident, $s_info:ident| $sycon:expr) => {
        impl Kernel<$t> for LapackBackend {
            fn potrf(&self, uplo: Uplo, n: i32, a: &mut [$t], lda: i32) -> Info {
                if !spans(a.len(), n, n, lda) {
                    return -3;
                }
                let mut info = 0;
                unsafe { lapack::$potrf(uplo.as_char(), n, a, lda, &mut info) };
                info
            }

            fn pptrf(&self, uplo: Uplo, n: i32, ap: &mut [$t]) -> Info {
                if n > 0 && ap.len() < packed_len(n as usize) {
                    return -3;
                }
                let mut info = 0;
                unsafe { lapack::$pptrf(uplo.as_char(), n, ap, &mut info) };
                info
            }

            fn pbtrf(&self, uplo: Uplo, n: i32, kd: i32, ab: &mut [$t], ldab: i32) -> Info {
                if kd >= 0 && !spans(ab.len(), kd + 1, n, ldab) {
                    return -4;
                }
                let mut info = 0;
                unsafe { lapack::$pbtrf(uplo.as_char(), n, kd, ab, ldab, &mut info) };
                info
            }

            fn getrf(&self, m: i32, n: i32, a: &mut [$t], lda: i32, ipiv: &mut [i32]) -> Info {
                if !spans(a.len(), m, n, lda) {
                    return -3;
                }
                if !at_least(ipiv.len(), m.min(n)) {
                    return -5;
                }
                let mut info = 0;
                unsafe { lapack::$getrf(m, n, a, lda, ipiv, &mut info) };
                info
            }

            fn sytrf(
                &self,
                uplo: Uplo,
                n: i32,
                a: &mut [$t],
                lda: i32,
                ipiv: &mut [i32],
                work: &mut [$t],
                lwork: i32,
            ) -> Info {
                if lwork != -1 && !spans(a.len(), n, n, lda) {
                    return -3;
                }
                if !at_least(ipiv.len(), n) {
                    return -5;
                }
                if !at_least(work.len(), lwork.max(1)) {
                    return -6;
                }
                let mut info = 0;
                unsafe { lapack::$sytrf(uplo.as_char(), n, a, lda, ipiv, work, lwork, &mut info) };
                info
            }

            fn sycon(
                &self,
                $s_uplo: Uplo,
                $s_n: i32,
                $s_a: &[$t],
                $s_lda: i32,
                $s_ipiv: &[i32],
                $s_anorm: $real,
                $s_rcond: &mut $real,
                $s_work: &mut [$t],
                $s_iwork: &mut [i32],
            ) -> Info {
                if !spans($s_a.len(), $s_n, $s_n, $s_lda) {
                    return -3;
                }
                if !at_least($s_ipiv.len(), $s_n) {
                    return -5;
                }
                if !at_least($s_work.len(), 2 * $s_n) {
                    return -8;
                }
                let mut $s_info = 0;
                $sycon;
                $s_info
            }
        }
    };
}

impl_kernel!(f32, f32, spotrf, spptrf, spbtrf, sgetrf, ssytrf,
    |uplo, n, a, lda, ipiv, anorm, rcond, work, iwork, info| {
        if !at_least(iwork.len(), n) {
            return -9;
        }
        unsafe { lapack::ssycon(uplo.as_char(), n, a, lda, ipiv, anorm, rcond, work, iwork, &mut info) }
    });

impl_kernel!(f64, f64, dpotrf, dpptrf, dpbtrf, dgetrf, dsytrf,
    |uplo, n, a, lda, ipiv, anorm, rcond, work, iwork, info| {
        if !at_least(iwork.len(), n) {
            return -9;
        }
        unsafe { lapack::dsycon(uplo.as_char(), n, a, lda, ipiv, anorm, rcond, work, iwork, &mut info) }
    });

impl_kernel!(c32, f32, cpotrf, cpptrf, cpbtrf, cgetrf, csytrf,
    |uplo, n, a, lda, ipiv, anorm, rcond, work, _iwork, info| unsafe {
        lapack::csycon(uplo.as_char(), n, a, lda, ipiv, anorm, rcond, work, &mut info)
    });

impl_kernel!(c64, f64, zpotrf, zpptrf, zpbtrf, zgetrf, zsytrf,
    |uplo, n, a, lda, ipiv, anorm, rcond, work, _iwork, info| unsafe {
        lapack::zsycon(uplo.as_char(), n, a, lda, ipiv, anorm, rcond, work, &mut info)
    });

macro_rules! impl_hermitian_kernel {
    ($t:ty, $real:ty, $hetrf:ident, $hecon:ident) => {
        impl HermitianKernel<$t> for LapackBackend {
            fn hetrf(
                &self,
                uplo: Uplo,
                n: i32,
                a: &mut [$t],
                lda: i32,
                ipiv: &mut [i32],
                work: &mut [$t],
                lwork: i32,
            ) -> Info {
                if lwork != -1 && !spans(a.len(), n, n, lda) {
                    return -3;
                }
                if !at_least(ipiv.len(), n) {
                    return -5;
                }
                if !at_least(work.len(), lwork.max(1)) {
                    return -6;
                }
                let mut info = 0;
                unsafe { lapack::$hetrf(uplo.as_char(), n, a, lda, ipiv, work, lwork, &mut info) };
                info
            }

            fn hecon(
                &self,
                uplo: Uplo,
                n: i32,
                a: &[$t],
                lda: i32,
                ipiv: &[i32],
                anorm: $real,
                rcond: &mut $real,
                work: &mut [$t],
            ) -> Info {
                if !spans(a.len(), n, n, lda) {
                    return -3;
                }
                if !at_least(ipiv.len(), n) {
                    return -5;
                }
                if !at_least(work.len(), 2 * n) {
                    return -8;
                }
                let mut info = 0;
                unsafe { lapack::$hecon(uplo.as_char(), n, a, lda, ipiv, anorm, rcond, work, &mut info) };
                info
            }
        }
    };
}

impl_hermitian_kernel!(c32, f32, chetrf, checon);
impl_hermitian_kernel!(c64, f64, zhetrf, zhecon);
