//! LAPACK entry points that accept row-major or column-major storage.
//!
//! Native LAPACK kernels only understand column-major storage and leave
//! workspace sizing to the caller. [`Lapacke`] wraps any [`Kernel`] and
//! takes care of both:
//!
//! - row-major matrices are staged column-major around the kernel and
//!   written back afterwards, for dense, packed and band storage
//! - the high-level tier sizes scratch (closed form or a `lwork = -1`
//!   query) and owns it for the duration of the call
//! - the kernel's status code reaches the caller unchanged
//!
//! # Tiers
//!
//! Each family exposes `<family>_work` (the caller provides scratch, and
//! `lwork = -1` queries where the native routine supports it) and
//! `<family>` (NaN screening plus managed scratch). Both return an
//! [`Info`]: `0` success, `-k` illegal k-th argument in the native
//! routine's numbering, `+k` numerical failure, or one of
//! [`WORK_MEMORY_ERROR`] / [`TRANSPOSE_MEMORY_ERROR`]. [`check`] turns a
//! status into a [`LapackeError`].
//!
//! # Example
//!
//! ```
//! use lapacke_shim::{Config, Info, Kernel, Lapacke, Layout, Uplo};
//!
//! // A kernel that only knows how to factor diagonal matrices.
//! struct Diagonal;
//!
//! impl Kernel<f64> for Diagonal {
//!     fn potrf(&self, _: Uplo, n: i32, a: &mut [f64], lda: i32) -> Info {
//!         for i in 0..n as usize {
//!             let d = &mut a[i + i * lda as usize];
//!             if *d <= 0.0 {
//!                 return i as Info + 1;
//!             }
//!             *d = d.sqrt();
//!         }
//!         0
//!     }
//!     # fn pptrf(&self, _: Uplo, _: i32, _: &mut [f64]) -> Info { 0 }
//!     # fn pbtrf(&self, _: Uplo, _: i32, _: i32, _: &mut [f64], _: i32) -> Info { 0 }
//!     # fn getrf(&self, _: i32, _: i32, _: &mut [f64], _: i32, _: &mut [i32]) -> Info { 0 }
//!     # fn sytrf(&self, _: Uplo, _: i32, _: &mut [f64], _: i32, _: &mut [i32],
//!     #          _: &mut [f64], _: i32) -> Info { 0 }
//!     # fn sycon(&self, _: Uplo, _: i32, _: &[f64], _: i32, _: &[i32], _: f64,
//!     #          _: &mut f64, _: &mut [f64], _: &mut [i32]) -> Info { 0 }
//! }
//!
//! let lapacke = Lapacke::with_config(Diagonal, Config::default());
//! // 2x2 row-major with a padded leading dimension of 3
//! let mut a = [4.0, 0.0, -1.0, 0.0, 9.0, -1.0];
//! assert_eq!(lapacke.potrf(Layout::RowMajor, Uplo::Lower, 2, &mut a, 3), 0);
//! assert_eq!(a, [2.0, 0.0, -1.0, 0.0, 3.0, -1.0]);
//! ```
//!
//! # Environment
//!
//! - `LAPACKE_NANCHECK=0` disables NaN screening ([`Config::from_env`])
//! - `LAPACKE_TRACE=1` prints one line per call to stderr

mod adapter;
pub mod config;
pub mod error;
mod getrf;
mod hecon;
mod hetrf;
#[cfg(feature = "lapack")]
mod lapack_backend;
pub mod nancheck;
mod pbtrf;
mod potrf;
mod pptrf;
pub mod scratch;
mod sycon;
mod sytrf;
pub mod workspace;

pub use adapter::Lapacke;
pub use config::Config;
pub use error::{check, Info, LapackeError, Result, TRANSPOSE_MEMORY_ERROR, WORK_MEMORY_ERROR};
pub use scratch::Scratch;
pub use sytrf::LWORK_QUERY;
pub use workspace::{closed_form, optimal_size, Family, Sizing, WorkSize};

#[cfg(feature = "lapack")]
pub use lapack_backend::LapackBackend;

pub use lapacke_trans::{band_ld, Diag, Layout, Uplo, DEFAULT_BAND_PADDING};
pub use lapacke_traits::{ComplexScalar, HermitianKernel, Kernel, Scalar};
