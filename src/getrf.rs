//! LU factorization with partial pivoting (`?getrf`).

use crate::adapter::{
    as_i32, clean, dim, holds, holds_block, leading_dim, staging_len, staging_ld, status,
    transposed, Lapacke, Tier,
};
use crate::nancheck::ge_nancheck;
use crate::scratch::staging;
use crate::workspace::Family;
use lapacke_trans::{ge_trans, Layout};
use lapacke_traits::{Info, Kernel, Scalar};

const M: Info = 1;
const N: Info = 2;
const A: Info = 3;
const LDA: Info = 4;
const IPIV: Info = 5;

impl<K> Lapacke<K> {
    /// Factor the `m x n` matrix `a` in place as `P L U`.
    ///
    /// `ipiv` receives `min(m, n)` one-based row interchanges; it is the
    /// same for either layout.
    pub fn getrf_work<T: Scalar>(
        &self,
        layout: Layout,
        m: i32,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.getrf_run(layout, m, n, a, lda, ipiv));
        self.finish::<T>(Family::Getrf, Tier::Work, layout, n, info)
    }

    pub fn getrf<T: Scalar>(
        &self,
        layout: Layout,
        m: i32,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Info
    where
        K: Kernel<T>,
    {
        let info = status(self.getrf_high(layout, m, n, a, lda, ipiv));
        self.finish::<T>(Family::Getrf, Tier::High, layout, n, info)
    }

    fn getrf_high<T: Scalar>(
        &self,
        layout: Layout,
        m: i32,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (mu, nu, ldu) = getrf_args(layout, m, n, a.len(), lda, ipiv.len())?;
        if self.screens_nan() {
            clean(ge_nancheck(layout, mu, nu, a, ldu), A)?;
        }
        self.getrf_run(layout, m, n, a, lda, ipiv)
    }

    fn getrf_run<T: Scalar>(
        &self,
        layout: Layout,
        m: i32,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
    ) -> Result<Info, Info>
    where
        K: Kernel<T>,
    {
        let (mu, nu, ldu) = getrf_args(layout, m, n, a.len(), lda, ipiv.len())?;
        match layout {
            Layout::ColMajor => Ok(self.kernel().getrf(m, n, a, lda, ipiv)),
            Layout::RowMajor => {
                let ld_t = staging_ld(mu);
                let mut a_t = staging::<T>(staging_len(ld_t, nu))?;
                transposed(ge_trans(layout, mu, nu, a, ldu, &mut a_t, ld_t), A)?;
                let info = self.kernel().getrf(m, n, &mut a_t, as_i32(ld_t), ipiv);
                transposed(ge_trans(Layout::ColMajor, mu, nu, &a_t, ld_t, a, ldu), A)?;
                Ok(info)
            }
        }
    }
}

fn getrf_args(
    layout: Layout,
    m: i32,
    n: i32,
    len: usize,
    lda: i32,
    ipiv_len: usize,
) -> Result<(usize, usize, usize), Info> {
    let m = dim(m, M)?;
    let n = dim(n, N)?;
    let lda = leading_dim(layout, m, n, lda, LDA)?;
    holds_block(len, layout, m, n, lda, A)?;
    holds(ipiv_len, m.min(n), IPIV)?;
    Ok((m, n, lda))
}
