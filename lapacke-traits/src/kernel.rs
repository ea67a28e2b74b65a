//! The black-box kernel boundary.
//!
//! A kernel provider runs the numerical routine itself. The adapter always
//! hands it column-major storage and reads back a native status code, which
//! it returns to its own caller unchanged.
//!
//! Argument conventions follow the Fortran routines: dimensions and leading
//! dimensions are `i32`, pivot indices are one-based, and a negative status
//! `-k` names the k-th argument of the native routine (`uplo` is argument 1
//! wherever it appears).

use crate::flag::Uplo;
use crate::scalar::{ComplexScalar, Scalar};

/// Native status code: `0` success, `-k` illegal k-th argument, `+k`
/// numerical failure at step `k`.
pub type Info = i32;

/// Column-major kernels available for every element type.
///
/// Implementations are provided by backends (e.g. the `lapack` feature of
/// `lapacke-shim`). Test code can implement this trait with a recording
/// double and hand it to the adapter.
pub trait Kernel<T: Scalar> {
    /// Cholesky factorization of a dense symmetric/Hermitian positive-definite matrix (`?potrf`).
    fn potrf(&self, uplo: Uplo, n: i32, a: &mut [T], lda: i32) -> Info;

    /// Cholesky factorization in packed storage (`?pptrf`).
    fn pptrf(&self, uplo: Uplo, n: i32, ap: &mut [T]) -> Info;

    /// Cholesky factorization of a band matrix with `kd` off-diagonals (`?pbtrf`).
    fn pbtrf(&self, uplo: Uplo, n: i32, kd: i32, ab: &mut [T], ldab: i32) -> Info;

    /// LU factorization with partial pivoting (`?getrf`).
    fn getrf(&self, m: i32, n: i32, a: &mut [T], lda: i32, ipiv: &mut [i32]) -> Info;

    /// Bunch-Kaufman factorization of a symmetric matrix (`?sytrf`).
    ///
    /// With `lwork == -1` the routine performs a workspace query and stores
    /// the optimal length in `work[0]`.
    fn sytrf(
        &self,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [T],
        lwork: i32,
    ) -> Info;

    /// Reciprocal condition number of a symmetric matrix factored by `sytrf` (`?sycon`).
    ///
    /// Real precisions need `work` of length `2n` and `iwork` of length `n`;
    /// complex precisions need `work` of length `2n` and ignore `iwork`.
    fn sycon(
        &self,
        uplo: Uplo,
        n: i32,
        a: &[T],
        lda: i32,
        ipiv: &[i32],
        anorm: T::Real,
        rcond: &mut T::Real,
        work: &mut [T],
        iwork: &mut [i32],
    ) -> Info;
}

/// Kernels that only exist for complex element types.
pub trait HermitianKernel<T: ComplexScalar>: Kernel<T> {
    /// Bunch-Kaufman factorization of a Hermitian matrix (`?hetrf`).
    fn hetrf(
        &self,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [T],
        lwork: i32,
    ) -> Info;

    /// Reciprocal condition number of a Hermitian matrix factored by `hetrf` (`?hecon`).
    fn hecon(
        &self,
        uplo: Uplo,
        n: i32,
        a: &[T],
        lda: i32,
        ipiv: &[i32],
        anorm: T::Real,
        rcond: &mut T::Real,
        work: &mut [T],
    ) -> Info;
}
