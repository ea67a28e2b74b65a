//! Bunch-Kaufman factorization of a Hermitian matrix (`?hetrf`).

use crate::adapter::{as_i32, clean, staging_len, staging_ld, status, transposed, Lapacke, Tier};
use crate::nancheck::he_nancheck;
use crate::scratch::{self, staging};
use crate::sytrf::{factor_args, lwork_arg, A, LWORK_QUERY};
use crate::workspace::{optimal_size, Family};
use lapacke_trans::{he_trans, Layout, Uplo};
use lapacke_traits::{ComplexScalar, HermitianKernel, Info};

impl<K> Lapacke<K> {
    /// Factor `a` in place as `U D U^H` or `L D L^H`; `lwork == -1` queries.
    ///
    /// The stored triangle is copied as is between layouts, not conjugated.
    #[allow(clippy::too_many_arguments)]
    pub fn hetrf_work<T: ComplexScalar>(
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
        K: HermitianKernel<T>,
    {
        let info = status(self.hetrf_run(layout, uplo, n, a, lda, ipiv, work, lwork));
        self.finish::<T>(Family::Hetrf, Tier::Work, layout, n, info)
    }

    pub fn hetrf<T: ComplexScalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Info
    where
        K: HermitianKernel<T>,
    {
        let info = status(self.hetrf_high(layout, uplo, n, a, lda, ipiv));
        self.finish::<T>(Family::Hetrf, Tier::High, layout, n, info)
    }

    fn hetrf_high<T: ComplexScalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Result<Info, Info>
    where
        K: HermitianKernel<T>,
    {
        let (nu, ldu) = factor_args(layout, n, a.len(), lda, ipiv.len())?;
        if self.screens_nan() {
            clean(he_nancheck(layout, uplo, nu, a, ldu), A)?;
        }
        let size = optimal_size::<T, _>(Family::Hetrf, nu, |slot| {
            status(self.hetrf_run(layout, uplo, n, a, lda, ipiv, slot, LWORK_QUERY))
        })?;
        let mut work = scratch::work::<T>(size.work)?;
        self.hetrf_run(layout, uplo, n, a, lda, ipiv, &mut work, as_i32(size.work))
    }

    #[allow(clippy::too_many_arguments)]
    fn hetrf_run<T: ComplexScalar>(
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
        K: HermitianKernel<T>,
    {
        let (nu, ldu) = factor_args(layout, n, a.len(), lda, ipiv.len())?;
        lwork_arg(work.len(), lwork)?;
        match layout {
            Layout::ColMajor => Ok(self.kernel().hetrf(uplo, n, a, lda, ipiv, work, lwork)),
            Layout::RowMajor => {
                let ld_t = staging_ld(nu);
                if lwork == LWORK_QUERY {
                    return Ok(self
                        .kernel()
                        .hetrf(uplo, n, a, as_i32(ld_t), ipiv, work, lwork));
                }
                let mut a_t = staging::<T>(staging_len(ld_t, nu))?;
                transposed(he_trans(layout, uplo, nu, a, ldu, &mut a_t, ld_t), A)?;
                let info = self
                    .kernel()
                    .hetrf(uplo, n, &mut a_t, as_i32(ld_t), ipiv, work, lwork);
                transposed(he_trans(Layout::ColMajor, uplo, nu, &a_t, ld_t, a, ldu), A)?;
                Ok(info)
            }
        }
    }
}
