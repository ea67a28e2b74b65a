//! Bunch-Kaufman factorization of a symmetric matrix (`?sytrf`).
//!
//! `sytrf` is the query-sized family: the high-level tier asks the kernel
//! for its optimal `lwork` before allocating.

use crate::adapter::{
    as_i32, clean, dim, holds, holds_block, leading_dim, staging_len, staging_ld, status,
    transposed, Lapacke, Tier,
};
use crate::nancheck::sy_nancheck;
use crate::scratch::{self, staging};
use crate::workspace::{optimal_size, Family};
use lapacke_trans::{sy_trans, Layout, Uplo};
use lapacke_traits::{Info, Kernel, Scalar};

const N: Info = 2;
pub(crate) const A: Info = 3;
const LDA: Info = 4;
const IPIV: Info = 5;
const WORK: Info = 6;
const LWORK: Info = 7;

/// `lwork` value that asks for the optimal workspace length.
pub const LWORK_QUERY: i32 = -1;

impl<K> Lapacke<K> {
    /// Factor `a` in place as `U D U^T` or `L D L^T`.
    ///
    /// With `lwork == -1` nothing is factored: the optimal workspace
    /// length is written to `work[0]`.
    #[allow(clippy::too_many_arguments)]
    pub fn sytrf_work<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [T],
        lwork: i32,
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.sytrf_run(layout, uplo, n, a, lda, ipiv, work, lwork));
        self.finish::<T>(Family::Sytrf, Tier::Work, layout, n, info)
    }

    /// [`sytrf_work`](Self::sytrf_work) with a workspace query and an
    /// adapter-owned buffer of the reported size.
    pub fn sytrf<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.sytrf_high(layout, uplo, n, a, lda, ipiv));
        self.finish::<T>(Family::Sytrf, Tier::High, layout, n, info)
    }

    fn sytrf_high<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, ldu) = factor_args(layout, n, a.len(), lda, ipiv.len())?;
        if self.screens_nan() {
            clean(sy_nancheck(layout, uplo, nu, a, ldu), A)?;
        }
        let size = optimal_size::<T, _>(Family::Sytrf, nu, |slot| {
            status(self.sytrf_run(layout, uplo, n, a, lda, ipiv, slot, LWORK_QUERY))
        })?;
        let mut work = scratch::work::<T>(size.work)?;
        self.sytrf_run(layout, uplo, n, a, lda, ipiv, &mut work, as_i32(size.work))
    }

    #[allow(clippy::too_many_arguments)]
    fn sytrf_run<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [T],
        lwork: i32,
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, ldu) = factor_args(layout, n, a.len(), lda, ipiv.len())?;
        lwork_arg(work.len(), lwork)?;
        match layout {
            Layout::ColMajor => Ok(self.kernel().sytrf(uplo, n, a, lda, ipiv, work, lwork)),
            Layout::RowMajor => {
                let ld_t = staging_ld(nu);
                if lwork == LWORK_QUERY {
                    // a query reads no matrix entries
                    return Ok(self
                        .kernel()
                        .sytrf(uplo, n, a, as_i32(ld_t), ipiv, work, lwork));
                }
                let mut a_t = staging::<T>(staging_len(ld_t, nu))?;
                transposed(sy_trans(layout, uplo, nu, a, ldu, &mut a_t, ld_t), A)?;
                let info = self
                    .kernel()
                    .sytrf(uplo, n, &mut a_t, as_i32(ld_t), ipiv, work, lwork);
                transposed(sy_trans(Layout::ColMajor, uplo, nu, &a_t, ld_t, a, ldu), A)?;
                Ok(info)
            }
        }
    }
}

/// Shared checks of the symmetric and Hermitian factorizations.
pub(crate) fn factor_args(
    layout: Layout,
    n: i32,
    len: usize,
    lda: i32,
    ipiv_len: usize,
) -> Result<(usize, usize), Info> {
    let n = dim(n, N)?;
    let lda = leading_dim(layout, n, n, lda, LDA)?;
    holds_block(len, layout, n, n, lda, A)?;
    holds(ipiv_len, n, IPIV)?;
    Ok((n, lda))
}

/// `lwork` is either a query or a positive length that `work` can hold.
pub(crate) fn lwork_arg(work_len: usize, lwork: i32) -> Result<(), Info> {
    if lwork == LWORK_QUERY {
        return holds(work_len, 1, WORK);
    }
    let lwork = usize::try_from(lwork)
        .ok()
        .filter(|&l| l >= 1)
        .ok_or(-LWORK)?;
    holds(work_len, lwork, WORK)
}
