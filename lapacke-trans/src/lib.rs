//! Storage-order conversion for LAPACK matrix formats.
//!
//! Every routine copies a matrix from a source buffer in one [`Layout`] into
//! a distinct destination buffer in the opposite layout, element for
//! element. Only the entries a storage format actually references are
//! touched:
//!
//! - [`ge_trans`]: a dense `rows x cols` block
//! - [`tr_trans`] (and [`sy_trans`], [`he_trans`], [`po_trans`]): one triangle
//! - [`gb_trans`] / [`tb_trans`] (and [`pb_trans`], [`sb_trans`], [`hb_trans`]):
//!   band storage, addressed relative to the diagonal
//! - [`tp_trans`] (and [`pp_trans`], [`sp_trans`], [`hp_trans`]): packed triangles
//!
//! Zero-sized extents are a no-op. Leading dimensions and slice lengths are
//! checked up front and reported as [`TransError`].
//!
//! # Dependency graph
//!
//! ```text
//! lapacke-traits -> lapacke-trans -> lapacke-shim
//! ```
//!
//! # Example
//!
//! ```
//! use lapacke_trans::{ge_trans, Layout};
//!
//! // 2x3 column-major -> row-major
//! let src = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
//! let mut dst = [0.0; 6];
//! ge_trans(Layout::ColMajor, 2, 3, &src, 2, &mut dst, 3).unwrap();
//! assert_eq!(dst, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! ```

pub mod band;
pub mod block;
pub mod dense;
pub mod error;
pub mod extent;
pub mod packed;
pub mod triangular;

pub use band::{gb_trans, hb_trans, pb_trans, sb_trans, tb_trans};
pub use dense::ge_trans;
pub use error::{Result, TransError};
pub use extent::{band_ld, dense_len, leading_extent, DEFAULT_BAND_PADDING};
pub use packed::{hp_trans, packed_index, packed_len, pp_trans, sp_trans, tp_trans};
pub use triangular::{he_trans, po_trans, sy_trans, tr_trans};

pub use lapacke_traits::{Diag, Layout, Uplo};

// Constants
pub const BLOCK_MEMORY_SIZE: usize = 32 * 1024;
pub const CACHE_LINE_SIZE: usize = 64;
