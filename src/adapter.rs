//! The adapter front end and the argument checks every family shares.

use crate::config::Config;
use crate::error::Info;
use crate::workspace::Family;
use lapacke_trans::{dense_len, leading_extent, Layout};
use lapacke_traits::Scalar;

/// Row-major aware entry points over a column-major kernel `K`.
///
/// Every family comes in two tiers: `<family>_work`, where the caller
/// supplies any scratch, and `<family>`, which screens for NaN, sizes and
/// owns scratch for the duration of the call. Both accept
/// [`Layout::RowMajor`] and [`Layout::ColMajor`] and return the native
/// status code.
///
/// The adapter holds no per-call state, so a shared `&Lapacke<K>` can be
/// used from several threads when `K` allows it.
#[derive(Debug, Clone)]
pub struct Lapacke<K> {
    kernel: K,
    config: Config,
}

impl<K> Lapacke<K> {
    /// Wrap `kernel` with settings read from the environment.
    pub fn new(kernel: K) -> Self {
        Self::with_config(kernel, Config::from_env())
    }

    pub fn with_config(kernel: K, config: Config) -> Self {
        Self { kernel, config }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn into_kernel(self) -> K {
        self.kernel
    }

    /// Whether the high-level tier screens inputs for NaN.
    #[inline]
    pub(crate) fn screens_nan(&self) -> bool {
        self.config.nan_check
    }

    /// Report a finished call and hand its status back.
    pub(crate) fn finish<T: Scalar>(
        &self,
        family: Family,
        tier: Tier,
        layout: Layout,
        n: i32,
        info: Info,
    ) -> Info {
        if self.config.trace {
            eprintln!(
                "lapacke: {}{}{}: layout={:?} n={} info={}",
                T::PREFIX,
                family.name(),
                tier.suffix(),
                layout,
                n,
                info
            );
        }
        info
    }
}

/// Which entry point a call came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    Work,
    High,
}

impl Tier {
    const fn suffix(self) -> &'static str {
        match self {
            Tier::Work => "_work",
            Tier::High => "",
        }
    }
}

/// Collapse an early-exit status and a kernel status into one code.
#[inline]
pub(crate) fn status(result: Result<Info, Info>) -> Info {
    match result {
        Ok(info) | Err(info) => info,
    }
}

/// A non-negative dimension, or `-position`.
#[inline]
pub(crate) fn dim(value: i32, position: Info) -> Result<usize, Info> {
    usize::try_from(value).map_err(|_| -position)
}

/// A leading dimension of at least `max(1, extent)` for a `rows x cols`
/// block in `layout`, or `-position`.
#[inline]
pub(crate) fn leading_dim(
    layout: Layout,
    rows: usize,
    cols: usize,
    ld: i32,
    position: Info,
) -> Result<usize, Info> {
    let min = leading_extent(layout, rows, cols).max(1);
    match usize::try_from(ld) {
        Ok(ld) if ld >= min => Ok(ld),
        _ => Err(-position),
    }
}

/// A slice long enough for the `rows x cols` block it carries, or `-position`.
#[inline]
pub(crate) fn holds_block(
    len: usize,
    layout: Layout,
    rows: usize,
    cols: usize,
    ld: usize,
    position: Info,
) -> Result<(), Info> {
    holds(len, dense_len(layout, rows, cols, ld), position)
}

/// A slice of at least `required` elements, or `-position`.
#[inline]
pub(crate) fn holds(len: usize, required: usize, position: Info) -> Result<(), Info> {
    if len < required {
        Err(-position)
    } else {
        Ok(())
    }
}

/// `-position` if `found` (a NaN was detected).
#[inline]
pub(crate) fn clean(found: bool, position: Info) -> Result<(), Info> {
    if found {
        Err(-position)
    } else {
        Ok(())
    }
}

/// Map a transposer failure to the status of the matrix argument.
///
/// Shapes are validated before any transpose runs, so this only guards
/// against a check here and in the transposer disagreeing.
#[inline]
pub(crate) fn transposed(result: lapacke_trans::Result<()>, position: Info) -> Result<(), Info> {
    result.map_err(|_| -position)
}

/// Column-major leading dimension used for a staging copy.
#[inline]
pub(crate) fn staging_ld(rows: usize) -> usize {
    rows.max(1)
}

/// Element count of a column-major `ld x cols` staging copy, or `None` on overflow.
#[inline]
pub(crate) fn staging_len(ld: usize, cols: usize) -> Option<usize> {
    ld.checked_mul(cols)
}

/// A validated length as the `i32` the kernel boundary takes.
///
/// Only called on values derived from `i32` arguments.
#[inline]
pub(crate) fn as_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
