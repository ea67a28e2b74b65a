//! Cholesky factorization of a dense positive-definite matrix (`?potrf`).

use crate::adapter::{
    as_i32, clean, dim, holds_block, leading_dim, staging_len, staging_ld, status, transposed,
    Lapacke, Tier,
};
use crate::nancheck::po_nancheck;
use crate::scratch::staging;
use crate::workspace::Family;
use lapacke_trans::{po_trans, Layout, Uplo};
use lapacke_traits::{Info, Kernel, Scalar};

// Native argument positions.
const N: Info = 2;
const A: Info = 3;
const LDA: Info = 4;

impl<K> Lapacke<K> {
    /// Factor `a` in place as `U^H U` or `L L^H`.
    ///
    /// A positive status `k` means the leading minor of order `k` is not
    /// positive definite; `a` then holds the partial factor.
    pub fn potrf_work<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.potrf_run(layout, uplo, n, a, lda));
        self.finish::<T>(Family::Potrf, Tier::Work, layout, n, info)
    }

    /// [`potrf_work`](Self::potrf_work) with NaN screening of `a`.
    pub fn potrf<T: Scalar>(&self, layout: Layout, uplo: Uplo, n: i32, a: &mut [T], lda: i32) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.potrf_high(layout, uplo, n, a, lda));
        self.finish::<T>(Family::Potrf, Tier::High, layout, n, info)
    }

    fn potrf_high<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, ldu) = potrf_args(layout, n, a.len(), lda)?;
        if self.screens_nan() {
            clean(po_nancheck(layout, uplo, nu, a, ldu), A)?;
        }
        self.potrf_run(layout, uplo, n, a, lda)
    }

    fn potrf_run<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, ldu) = potrf_args(layout, n, a.len(), lda)?;
        match layout {
            Layout::ColMajor => Ok(self.kernel().potrf(uplo, n, a, lda)),
            Layout::RowMajor => {
                let ld_t = staging_ld(nu);
                let mut a_t = staging::<T>(staging_len(ld_t, nu))?;
                transposed(po_trans(layout, uplo, nu, a, ldu, &mut a_t, ld_t), A)?;
                let info = self.kernel().potrf(uplo, n, &mut a_t, as_i32(ld_t));
                transposed(po_trans(Layout::ColMajor, uplo, nu, &a_t, ld_t, a, ldu), A)?;
                Ok(info)
            }
        }
    }
}

fn potrf_args(layout: Layout, n: i32, len: usize, lda: i32) -> Result<(usize, usize), Info> {
    let n = dim(n, N)?;
    let lda = leading_dim(layout, n, n, lda, LDA)?;
    holds_block(len, layout, n, n, lda, A)?;
    Ok((n, lda))
}
