//! Condition estimate for a factored Hermitian matrix (`?hecon`).

use crate::adapter::{as_i32, clean, holds, staging_len, staging_ld, status, transposed, Lapacke, Tier};
use crate::nancheck::{he_nancheck, real_nancheck};
use crate::scratch::{self, staging};
use crate::sycon::{condition_args, A, ANORM, WORK};
use crate::workspace::{closed_form, Family};
use lapacke_trans::{he_trans, Layout, Uplo};
use lapacke_traits::{ComplexScalar, HermitianKernel, Info};

impl<K> Lapacke<K> {
    /// Estimate the reciprocal 1-norm condition number of a matrix
    /// factored by [`hetrf`](Self::hetrf). `work` needs `2n` elements.
    #[allow(clippy::too_many_arguments)]
    pub fn hecon_work<T: ComplexScalar>(
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
    ) -> Info
    where
        K: HermitianKernel<T>,
    {
        let info = status(self.hecon_run(layout, uplo, n, a, lda, ipiv, anorm, rcond, work));
        self.finish::<T>(Family::Hecon, Tier::Work, layout, n, info)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn hecon<T: ComplexScalar>(
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
        K: HermitianKernel<T>,
    {
        let info = status(self.hecon_high(layout, uplo, n, a, lda, ipiv, anorm, rcond));
        self.finish::<T>(Family::Hecon, Tier::High, layout, n, info)
    }

    #[allow(clippy::too_many_arguments)]
    fn hecon_high<T: ComplexScalar>(
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
        K: HermitianKernel<T>,
    {
        let (nu, ldu) = condition_args::<T>(layout, n, a.len(), lda, ipiv.len(), anorm)?;
        if self.screens_nan() {
            clean(he_nancheck(layout, uplo, nu, a, ldu), A)?;
            clean(real_nancheck(anorm), ANORM)?;
        }
        let size = closed_form::<T>(Family::Hecon, nu);
        let mut work = scratch::work::<T>(size.work)?;
        self.hecon_run(layout, uplo, n, a, lda, ipiv, anorm, rcond, &mut work)
    }

    #[allow(clippy::too_many_arguments)]
    fn hecon_run<T: ComplexScalar>(
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
    ) -> Result<Info, Info>
    where
        K: HermitianKernel<T>,
    {
        let (nu, ldu) = condition_args::<T>(layout, n, a.len(), lda, ipiv.len(), anorm)?;
        holds(work.len(), 2 * nu, WORK)?;
        match layout {
            Layout::ColMajor => Ok(self
                .kernel()
                .hecon(uplo, n, a, lda, ipiv, anorm, rcond, work)),
            Layout::RowMajor => {
                let ld_t = staging_ld(nu);
                let mut a_t = staging::<T>(staging_len(ld_t, nu))?;
                transposed(he_trans(layout, uplo, nu, a, ldu, &mut a_t, ld_t), A)?;
                Ok(self
                    .kernel()
                    .hecon(uplo, n, &a_t, as_i32(ld_t), ipiv, anorm, rcond, work))
            }
        }
    }
}
