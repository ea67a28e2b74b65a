//! Closed enums for the character-coded LAPACK discriminants.
//!
//! The native interface takes `'U'`/`'L'`, `'N'`/`'U'` and integer layout
//! tags. Here they are enums, so an invalid flag cannot reach the adapter;
//! the byte form is produced only at the kernel boundary.

/// Storage order of a two-dimensional buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Row-major (C-style): consecutive elements of a row are contiguous.
    RowMajor,
    /// Column-major (Fortran-style): consecutive elements of a column are contiguous.
    ColMajor,
}

impl Layout {
    /// The CBLAS/LAPACKE integer tag (`101` row-major, `102` column-major).
    pub const fn as_cblas(self) -> i32 {
        match self {
            Layout::RowMajor => 101,
            Layout::ColMajor => 102,
        }
    }

    pub fn from_cblas(tag: i32) -> Option<Self> {
        match tag {
            101 => Some(Layout::RowMajor),
            102 => Some(Layout::ColMajor),
            _ => None,
        }
    }

    /// The opposite storage order.
    pub const fn transposed(self) -> Self {
        match self {
            Layout::RowMajor => Layout::ColMajor,
            Layout::ColMajor => Layout::RowMajor,
        }
    }

    /// Linear offset of element `(i, j)` in a buffer with leading dimension `ld`.
    #[inline(always)]
    pub const fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => i + j * ld,
        }
    }
}

/// Which triangle of a symmetric, Hermitian or triangular matrix is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uplo {
    Upper,
    Lower,
}

impl Uplo {
    pub const fn as_char(self) -> u8 {
        match self {
            Uplo::Upper => b'U',
            Uplo::Lower => b'L',
        }
    }

    /// Parse a LAPACK flag byte, case-insensitively.
    pub fn from_char(c: u8) -> Option<Self> {
        match c.to_ascii_uppercase() {
            b'U' => Some(Uplo::Upper),
            b'L' => Some(Uplo::Lower),
            _ => None,
        }
    }

    /// Whether `(i, j)` lies in the stored triangle (diagonal included).
    #[inline(always)]
    pub const fn contains(self, i: usize, j: usize) -> bool {
        match self {
            Uplo::Upper => i <= j,
            Uplo::Lower => i >= j,
        }
    }
}

/// Whether a triangular matrix has an implicit unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Diag {
    #[default]
    NonUnit,
    Unit,
}

impl Diag {
    pub const fn as_char(self) -> u8 {
        match self {
            Diag::NonUnit => b'N',
            Diag::Unit => b'U',
        }
    }

    pub fn from_char(c: u8) -> Option<Self> {
        match c.to_ascii_uppercase() {
            b'N' => Some(Diag::NonUnit),
            b'U' => Some(Diag::Unit),
            _ => None,
        }
    }
}
