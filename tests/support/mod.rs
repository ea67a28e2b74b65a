#![allow(dead_code)]

use lapacke_shim::{ComplexScalar, HermitianKernel, Info, Kernel, Scalar, Uplo};
use lapacke_trans::{packed_index, packed_len, Layout};
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

/// Deterministic column-major stand-in for a LAPACK library.
///
/// Every routine rewrites exactly the entries its storage format
/// references, with a position-dependent formula, so a layout or
/// addressing mistake in the adapter shows up as a value mismatch. It
/// checks its own arguments the way the native routines do and records
/// how it was called.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: AtomicUsize,
    last_ld: AtomicI32,
    last_lwork: AtomicI32,
    /// Status returned by workspace queries; `0` answers normally.
    pub query_status: Info,
}

/// Optimal `lwork` the recorder reports for `sytrf` per unit of `n`.
pub const SYTRF_BLOCK: i32 = 64;
/// Optimal `lwork` the recorder reports for `hetrf` per unit of `n`.
pub const HETRF_BLOCK: i32 = 32;

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_queries(status: Info) -> Self {
        Self {
            query_status: status,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_ld(&self) -> i32 {
        self.last_ld.load(Ordering::SeqCst)
    }

    pub fn last_lwork(&self) -> i32 {
        self.last_lwork.load(Ordering::SeqCst)
    }

    fn enter(&self, ld: i32) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_ld.store(ld, Ordering::SeqCst);
    }
}

pub fn real<T: Scalar>(x: f64) -> T {
    T::from_real(num_traits::cast(x).unwrap())
}

fn to_f64<T: Scalar>(x: T) -> f64 {
    num_traits::cast(x.re()).unwrap()
}

/// `x * 2 + (i + 10 j)`: the recorder's stand-in for an elimination step.
fn step<T: Scalar>(x: T, i: usize, j: usize) -> T {
    x + x + real::<T>((i + 10 * j) as f64)
}

fn rows_of(uplo: Uplo, n: usize, j: usize) -> std::ops::Range<usize> {
    match uplo {
        Uplo::Upper => 0..j + 1,
        Uplo::Lower => j..n,
    }
}

/// Rewrite the `uplo` triangle column by column, stopping at the first
/// non-positive diagonal (one-based status) as a Cholesky kernel would.
fn factor_triangle<T: Scalar>(uplo: Uplo, n: usize, a: &mut [T], lda: usize) -> Info {
    for j in 0..n {
        if to_f64(a[j + j * lda]) <= 0.0 {
            return j as Info + 1;
        }
        for i in rows_of(uplo, n, j) {
            a[i + j * lda] = step(a[i + j * lda], i, j);
        }
    }
    0
}

/// Rewrite the whole triangle; report the first zero diagonal afterwards,
/// as the Bunch-Kaufman routines do.
fn factor_indefinite<T: Scalar>(
    uplo: Uplo,
    n: usize,
    a: &mut [T],
    lda: usize,
    ipiv: &mut [i32],
) -> Info {
    let mut info = 0;
    for j in 0..n {
        if info == 0 && a[j + j * lda] == T::zero() {
            info = j as Info + 1;
        }
        for i in rows_of(uplo, n, j) {
            a[i + j * lda] = step(a[i + j * lda], i, j);
        }
        ipiv[j] = (n - j) as i32;
    }
    info
}

/// A condition "estimate" that depends on every referenced entry and its
/// position.
fn estimate<T: Scalar>(uplo: Uplo, n: usize, a: &[T], lda: usize, ipiv: &[i32], anorm: f64) -> f64 {
    let mut acc = 1.0;
    for j in 0..n {
        for i in rows_of(uplo, n, j) {
            acc += to_f64(a[i + j * lda]).abs() * ((i + 1) * (2 * j + 1)) as f64;
        }
        acc += ipiv[j].unsigned_abs() as f64 * 0.5;
    }
    anorm / acc
}

fn check_square(n: i32, lda: i32, len: usize) -> Result<(usize, usize), Info> {
    if n < 0 {
        return Err(-2);
    }
    let (n, lda_u) = (n as usize, lda.max(0) as usize);
    if lda < 1 || lda_u < n {
        return Err(-4);
    }
    if n > 0 && len < lda_u * (n - 1) + n {
        return Err(-3);
    }
    Ok((n, lda_u))
}

impl<T: Scalar> Kernel<T> for Recorder {
    fn potrf(&self, uplo: Uplo, n: i32, a: &mut [T], lda: i32) -> Info {
        self.enter(lda);
        match check_square(n, lda, a.len()) {
            Ok((n, lda)) => factor_triangle(uplo, n, a, lda),
            Err(info) => info,
        }
    }

    fn pptrf(&self, uplo: Uplo, n: i32, ap: &mut [T]) -> Info {
        self.enter(0);
        if n < 0 {
            return -2;
        }
        let n = n as usize;
        if ap.len() < packed_len(n) {
            return -3;
        }
        for j in 0..n {
            if to_f64(ap[packed_index(Layout::ColMajor, uplo, n, j, j)]) <= 0.0 {
                return j as Info + 1;
            }
            for i in rows_of(uplo, n, j) {
                let k = packed_index(Layout::ColMajor, uplo, n, i, j);
                ap[k] = step(ap[k], i, j);
            }
        }
        0
    }

    fn pbtrf(&self, uplo: Uplo, n: i32, kd: i32, ab: &mut [T], ldab: i32) -> Info {
        self.enter(ldab);
        if n < 0 {
            return -2;
        }
        if kd < 0 {
            return -3;
        }
        if ldab < kd + 1 {
            return -5;
        }
        let (n, kd, ldab) = (n as usize, kd as usize, ldab as usize);
        if n > 0 && ab.len() < ldab * (n - 1) + kd + 1 {
            return -4;
        }
        let (kl, ku) = match uplo {
            Uplo::Upper => (0, kd),
            Uplo::Lower => (kd, 0),
        };
        for j in 0..n {
            if to_f64(ab[ku + j * ldab]) <= 0.0 {
                return j as Info + 1;
            }
            let lo = ku.saturating_sub(j);
            let hi = (kl + ku + 1).min(n + ku - j);
            for r in lo..hi {
                ab[r + j * ldab] = step(ab[r + j * ldab], r, j);
            }
        }
        0
    }

    fn getrf(&self, m: i32, n: i32, a: &mut [T], lda: i32, ipiv: &mut [i32]) -> Info {
        self.enter(lda);
        if m < 0 {
            return -1;
        }
        if n < 0 {
            return -2;
        }
        let (m, n) = (m as usize, n as usize);
        if lda < 1 || (lda as usize) < m {
            return -4;
        }
        let lda = lda as usize;
        if m > 0 && n > 0 && a.len() < lda * (n - 1) + m {
            return -3;
        }
        let k = m.min(n);
        let mut info = 0;
        for j in 0..n {
            if j < k && info == 0 && a[j + j * lda] == T::zero() {
                info = j as Info + 1;
            }
            for i in 0..m {
                a[i + j * lda] = step(a[i + j * lda], i, j);
            }
        }
        for (p, slot) in ipiv[..k].iter_mut().enumerate() {
            *slot = (k - p) as i32;
        }
        info
    }

    fn sytrf(
        &self,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [T],
        lwork: i32,
    ) -> Info {
        self.enter(lda);
        self.last_lwork.store(lwork, Ordering::SeqCst);
        if lwork == -1 {
            if self.query_status != 0 {
                return self.query_status;
            }
            work[0] = real::<T>((n.max(1) * SYTRF_BLOCK) as f64);
            return 0;
        }
        if lwork < 1 {
            return -7;
        }
        match check_square(n, lda, a.len()) {
            Ok((n, lda)) => factor_indefinite(uplo, n, a, lda, ipiv),
            Err(info) => info,
        }
    }

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
    ) -> Info {
        self.enter(lda);
        let (n, lda) = match check_square(n, lda, a.len()) {
            Ok(dims) => dims,
            Err(info) => return info,
        };
        let anorm: f64 = num_traits::cast(anorm).unwrap();
        if anorm < 0.0 {
            return -6;
        }
        assert!(work.len() >= 2 * n);
        work.iter_mut().for_each(|w| *w = T::one());
        if !T::IS_COMPLEX {
            assert!(iwork.len() >= n);
            iwork.iter_mut().for_each(|w| *w = 7);
        }
        *rcond = num_traits::cast(estimate(uplo, n, a, lda, ipiv, anorm)).unwrap();
        0
    }
}

impl<T: ComplexScalar> HermitianKernel<T> for Recorder {
    fn hetrf(
        &self,
        uplo: Uplo,
        n: i32,
        a: &mut [T],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [T],
        lwork: i32,
    ) -> Info {
        self.enter(lda);
        self.last_lwork.store(lwork, Ordering::SeqCst);
        if lwork == -1 {
            if self.query_status != 0 {
                return self.query_status;
            }
            work[0] = real::<T>((n.max(1) * HETRF_BLOCK) as f64);
            return 0;
        }
        if lwork < 1 {
            return -7;
        }
        match check_square(n, lda, a.len()) {
            Ok((n, lda)) => factor_indefinite(uplo, n, a, lda, ipiv),
            Err(info) => info,
        }
    }

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
    ) -> Info {
        self.enter(lda);
        let (n, lda) = match check_square(n, lda, a.len()) {
            Ok(dims) => dims,
            Err(info) => return info,
        };
        let anorm: f64 = num_traits::cast(anorm).unwrap();
        if anorm < 0.0 {
            return -6;
        }
        assert!(work.len() >= 2 * n);
        work.iter_mut().for_each(|w| *w = w.conj());
        *rcond = num_traits::cast(estimate(uplo, n, a, lda, ipiv, anorm)).unwrap();
        0
    }
}

/// Copy a column-major `rows x cols` block into a fresh row-major buffer
/// with leading dimension `ldr`; slack slots hold `fill`.
pub fn col_to_row<T: Copy>(
    a: &[T],
    rows: usize,
    cols: usize,
    lda: usize,
    ldr: usize,
    fill: T,
) -> Vec<T> {
    let mut out = vec![fill; rows * ldr];
    for i in 0..rows {
        for j in 0..cols {
            out[i * ldr + j] = a[i + j * lda];
        }
    }
    out
}

/// Read a row-major block back into column-major order with leading
/// dimension `lda`; slots outside the block hold `fill`.
pub fn row_to_col<T: Copy>(
    r: &[T],
    rows: usize,
    cols: usize,
    ldr: usize,
    lda: usize,
    fill: T,
) -> Vec<T> {
    let mut out = vec![fill; lda * cols];
    for i in 0..rows {
        for j in 0..cols {
            out[i + j * lda] = r[i * ldr + j];
        }
    }
    out
}
