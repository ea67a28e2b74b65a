//! Cholesky factorization of a positive-definite band matrix (`?pbtrf`).
//!
//! Band storage keeps the `kd + 1` diagonals of the referenced triangle in
//! a `(kd + 1) x n` array. Row-major callers pass that array row-major
//! with `ldab >= n`; it is transposed as a `(kd + 1) x n` block, never as
//! the full `n x n` matrix.

use crate::adapter::{
    as_i32, clean, dim, holds_block, leading_dim, staging_len, status, transposed, Lapacke, Tier,
};
use crate::nancheck::pb_nancheck;
use crate::scratch::staging;
use crate::workspace::Family;
use lapacke_trans::{pb_trans, Layout, Uplo};
use lapacke_traits::{Info, Kernel, Scalar};

const N: Info = 2;
const KD: Info = 3;
const AB: Info = 4;
const LDAB: Info = 5;

impl<K> Lapacke<K> {
    #[allow(clippy::too_many_arguments)]
    pub fn pbtrf_work<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        kd: i32,
        ab: &mut [T],
        ldab: i32,
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.pbtrf_run(layout, uplo, n, kd, ab, ldab));
        self.finish::<T>(Family::Pbtrf, Tier::Work, layout, n, info)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pbtrf<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        kd: i32,
        ab: &mut [T],
        ldab: i32,
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.pbtrf_high(layout, uplo, n, kd, ab, ldab));
        self.finish::<T>(Family::Pbtrf, Tier::High, layout, n, info)
    }

    fn pbtrf_high<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        kd: i32,
        ab: &mut [T],
        ldab: i32,
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, kdu, ldu) = pbtrf_args(layout, n, kd, ab.len(), ldab)?;
        if self.screens_nan() {
            clean(pb_nancheck(layout, uplo, nu, kdu, ab, ldu), AB)?;
        }
        self.pbtrf_run(layout, uplo, n, kd, ab, ldab)
    }

    fn pbtrf_run<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        n: i32,
        kd: i32,
        ab: &mut [T],
        ldab: i32,
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (nu, kdu, ldu) = pbtrf_args(layout, n, kd, ab.len(), ldab)?;
        match layout {
            Layout::ColMajor => Ok(self.kernel().pbtrf(uplo, n, kd, ab, ldab)),
            Layout::RowMajor => {
                let ld_t = kdu + 1;
                let mut ab_t = staging::<T>(staging_len(ld_t, nu))?;
                transposed(pb_trans(layout, uplo, nu, kdu, ab, ldu, &mut ab_t, ld_t), AB)?;
                let info = self.kernel().pbtrf(uplo, n, kd, &mut ab_t, as_i32(ld_t));
                transposed(
                    pb_trans(Layout::ColMajor, uplo, nu, kdu, &ab_t, ld_t, ab, ldu),
                    AB,
                )?;
                Ok(info)
            }
        }
    }
}

fn pbtrf_args(
    layout: Layout,
    n: i32,
    kd: i32,
    len: usize,
    ldab: i32,
) -> Result<(usize, usize, usize), Info> {
    let n = dim(n, N)?;
    let kd = dim(kd, KD)?;
    let ldab = leading_dim(layout, kd + 1, n, ldab, LDAB)?;
    holds_block(len, layout, kd + 1, n, ldab, AB)?;
    Ok((n, kd, ldab))
}
