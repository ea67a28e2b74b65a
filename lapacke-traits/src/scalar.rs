//! Element types accepted by the adapter.
//!
//! LAPACK comes in four precisions: `s` (`f32`), `d` (`f64`), `c`
//! (`Complex32`) and `z` (`Complex64`). [`Scalar`] captures what the adapter
//! needs from each of them, which is little: copying, zeroing, NaN
//! screening and reading a workspace-size answer out of a query slot.

use num_complex::{Complex32, Complex64};
use num_traits::{Float, One, ToPrimitive, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// One of the four LAPACK element types.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Send
    + Sync
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// The matching real type (`f32` for `Complex32`, itself for reals).
    type Real: Scalar<Real = Self::Real> + Float;

    /// Whether the type is complex.
    const IS_COMPLEX: bool;

    /// The LAPACK routine prefix: `'s'`, `'d'`, `'c'` or `'z'`.
    const PREFIX: char;

    /// Real part.
    fn re(self) -> Self::Real;

    fn from_real(re: Self::Real) -> Self;

    /// True if any component is NaN.
    fn is_nan(self) -> bool;

    /// Interpret a workspace-query answer as a length.
    ///
    /// Kernels report the optimal `lwork` in the first slot of the scratch
    /// buffer; for complex scratch only the real part carries the value.
    /// The value is truncated toward zero; NaN or a value outside the `i32`
    /// range reads as 0.
    fn to_lwork(self) -> i32 {
        ToPrimitive::to_i32(&self.re()).unwrap_or(0)
    }
}

/// A complex element type (`Complex32` or `Complex64`).
pub trait ComplexScalar: Scalar {
    fn conj(self) -> Self;
}

macro_rules! impl_scalar_real {
    ($t:ty, $prefix:expr) => {
        impl Scalar for $t {
            type Real = $t;
            const IS_COMPLEX: bool = false;
            const PREFIX: char = $prefix;

            #[inline(always)]
            fn re(self) -> $t {
                self
            }

            #[inline(always)]
            fn from_real(re: $t) -> Self {
                re
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    };
}

macro_rules! impl_scalar_complex {
    ($t:ty, $real:ty, $prefix:expr) => {
        impl Scalar for $t {
            type Real = $real;
            const IS_COMPLEX: bool = true;
            const PREFIX: char = $prefix;

            #[inline(always)]
            fn re(self) -> $real {
                self.re
            }

            #[inline(always)]
            fn from_real(re: $real) -> Self {
                <$t>::new(re, 0.0)
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                self.re.is_nan() || self.im.is_nan()
            }
        }

        impl ComplexScalar for $t {
            #[inline(always)]
            fn conj(self) -> Self {
                <$t>::conj(&self)
            }
        }
    };
}

impl_scalar_real!(f32, 's');
impl_scalar_real!(f64, 'd');
impl_scalar_complex!(Complex32, f32, 'c');
impl_scalar_complex!(Complex64, f64, 'z');
