//! Condition estimate for a factored symmetric matrix (`?sycon`).
//!
//! `a` holds the factor from `sytrf` and is read only: a row-major `a` is
//! staged column-major for the kernel and never written back.

use crate::adapter::{
    as_i32, clean, dim, holds, holds_block, leading_dim, staging_len, staging_ld, status,
    transposed, Lapacke, Tier,
};
use crate::nancheck::{real_nancheck, sy_nancheck};
use crate::scratch::{self, staging};
use crate::workspace::{closed_form, Family};
use lapacke_trans::{sy_trans, Layout, Uplo};
use lapacke_traits::{Info, Kernel, Scalar};
use num_traits::Zero;

const N: Info = 2;
pub(crate) const A: Info = 3;
const LDA: Info = 4;
const IPIV: Info = 5;
pub(crate) const ANORM: Info = 6;
pub(crate) const WORK: Info = 8;
const IWORK: Info = 9;

impl<K> Lapacke<K> {
    /// Estimate the reciprocal 1-norm condition number into `rcond`.
    ///
    /// `work` needs `2n` elements; real precisions also need `n` elements
    /// of `iwork`, complex precisions ignore it.
    #[allow(clippy::too_many_arguments)]
    pub fn sycon_work<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &[T],
        lda: i32,
        ipiv: &[i32],
        anorm: T::Real,
        rcond: &mut T::Real,
        work: &mut [T],
        iwork: &mut [i32],
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(
            self.sycon_run(layout, uplo, n, a, lda, ipiv, anorm, rcond, work, iwork),
        );
        self.finish::<T>(Family::Sycon, Tier::Work, layout, n, info)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sycon<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &[T],
        lda: i32,
        ipiv: &[i32],
        anorm: T::Real,
        rcond: &mut T::Real,
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.sycon_high(layout, uplo, n, a, lda, ipiv, anorm, rcond));
        self.finish::<T>(Family::Sycon, Tier::High, layout, n, info)
    }

    #[allow(clippy::too_many_arguments)]
    fn sycon_high<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &[T],
        lda: i32,
        ipiv: &[i32],
        anorm: T::Real,
        rcond: &mut T::Real,
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, ldu) = condition_args::<T>(layout, n, a.len(), lda, ipiv.len(), anorm)?;
        if self.screens_nan() {
            clean(sy_nancheck(layout, uplo, nu, a, ldu), A)?;
            clean(real_nancheck(anorm), ANORM)?;
        }
        let size = closed_form::<T>(Family::Sycon, nu);
        let mut iwork = scratch::work::<i32>(size.iwork)?;
        let mut work = scratch::work::<T>(size.work)?;
        self.sycon_run(layout, uplo, n, a, lda, ipiv, anorm, rcond, &mut work, &mut iwork)
    }

    #[allow(clippy::too_many_arguments)]
    fn sycon_run<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &[T],
        lda: i32,
        ipiv: &[i32],
        anorm: T::Real,
        rcond: &mut T::Real,
        work: &mut [T],
        iwork: &mut [i32],
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, ldu) = condition_args::<T>(layout, n, a.len(), lda, ipiv.len(), anorm)?;
        holds(work.len(), 2 * nu, WORK)?;
        if !T::IS_COMPLEX {
            holds(iwork.len(), nu, IWORK)?;
        }
        match layout {
            Layout::ColMajor => Ok(self
                .kernel()
                .sycon(uplo, n, a, lda, ipiv, anorm, rcond, work, iwork)),
            Layout::RowMajor => {
                let ld_t = staging_ld(nu);
                let mut a_t = staging::<T>(staging_len(ld_t, nu))?;
                transposed(sy_trans(layout, uplo, nu, a, ldu, &mut a_t, ld_t), A)?;
                Ok(self
                    .kernel()
                    .sycon(uplo, n, &a_t, as_i32(ld_t), ipiv, anorm, rcond, work, iwork))
            }
        }
    }
}

/// Shared checks of the symmetric and Hermitian condition estimates.
pub(crate) fn condition_args<T: Scalar>(
    layout: Layout,
    n: i32,
    len: usize,
    lda: i32,
    ipiv_len: usize,
    anorm: T::Real,
) -> Result<(usize, usize), Info> {
    let n = dim(n, N)?;
    let lda = leading_dim(layout, n, n, lda, LDA)?;
    holds_block(len, layout, n, n, lda, A)?;
    holds(ipiv_len, n, IPIV)?;
    if anorm < <T::Real as Zero>::zero() {
        return Err(-ANORM);
    }
    Ok((n, lda))
}
