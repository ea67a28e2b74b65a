//! Shared traits for the lapacke-shim workspace.
//!
//! This crate holds the pieces every other crate agrees on: the element
//! types the adapter accepts, the closed flag enums that replace LAPACK's
//! character codes, and the traits a column-major kernel provider
//! implements.
//!
//! Kernel providers (the native LAPACK backend, or a test double) depend on
//! `lapacke-traits` only, so they can implement [`Kernel`] without pulling
//! in the adapter.

pub mod flag;
pub mod kernel;
pub mod scalar;

pub use flag::{Diag, Layout, Uplo};
pub use kernel::{HermitianKernel, Info, Kernel};
pub use scalar::{ComplexScalar, Scalar};
