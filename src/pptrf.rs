//! Cholesky factorization in packed storage (`?pptrf`).

use crate::adapter::{clean, dim, holds, status, transposed, Lapacke, Tier};
use crate::nancheck::pp_nancheck;
use crate::scratch::staging;
use crate::workspace::Family;
use lapacke_trans::{packed_len, pp_trans, Layout, Uplo};
use lapacke_traits::{Info, Kernel, Scalar};

const N: Info = 2;
const AP: Info = 3;

impl<K> Lapacke<K> {
    /// Factor the packed triangle `ap` in place.
    ///
    /// Row-major packing stores the triangle row by row; it is repacked
    /// column by column around the kernel and back afterwards.
    pub fn pptrf_work<T: Scalar>(&self, layout: Layout, uplo: Uplo, n: i32, ap: &mut [T]) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.pptrf_run(layout, uplo, n, ap));
        self.finish::<T>(Family::Pptrf, Tier::Work, layout, n, info)
    }

    pub fn pptrf<T: Scalar>(&self, layout: Layout, uplo: Uplo, n: i32, ap: &mut [T]) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.pptrf_high(layout, uplo, n, ap));
        self.finish::<T>(Family::Pptrf, Tier::High, layout, n, info)
    }

    fn pptrf_high<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        ap: &mut [T],
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let nu = pptrf_args(n, ap.len())?;
        if self.screens_nan() {
            clean(pp_nancheck(nu, ap), AP)?;
        }
        self.pptrf_run(layout, uplo, n, ap)
    }

    fn pptrf_run<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        ap: &mut [T],
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let nu = pptrf_args(n, ap.len())?;
        match layout {
            Layout::ColMajor => Ok(self.kernel().pptrf(uplo, n, ap)),
            Layout::RowMajor => {
                let mut ap_t = staging::<T>(Some(packed_len(nu).max(1)))?;
                transposed(pp_trans(layout, uplo, nu, ap, &mut ap_t), AP)?;
                let info = self.kernel().pptrf(uplo, n, &mut ap_t);
                transposed(pp_trans(Layout::ColMajor, uplo, nu, &ap_t, ap), AP)?;
                Ok(info)
            }
        }
    }
}

fn pptrf_args(n: i32, len: usize) -> Result<usize, Info> {
    let n = dim(n, N)?;
    holds(len, packed_len(n), AP)?;
    Ok(n)
}
