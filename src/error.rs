//! Status codes and their typed view.

pub use lapacke_traits::Info;

/// Scratch workspace could not be allocated.
pub const WORK_MEMORY_ERROR: Info = -1010;

/// The column-major staging copy of a row-major matrix could not be allocated.
pub const TRANSPOSE_MEMORY_ERROR: Info = -1011;

/// Typed view of a non-zero status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LapackeError {
    /// The argument at this (one-based, native) position had an illegal value.
    #[error("argument {position} had an illegal value")]
    IllegalArgument { position: u32 },

    /// The routine failed numerically at this (one-based) step.
    #[error("numerical failure at step {index}")]
    NumericalFailure { index: u32 },

    #[error("not enough memory to allocate work array")]
    WorkMemory,

    #[error("not enough memory to transpose matrix")]
    TransposeMemory,
}

impl LapackeError {
    /// Classify a status code. Returns `None` for success.
    pub fn from_info(info: Info) -> Option<Self> {
        match info {
            0 => None,
            WORK_MEMORY_ERROR => Some(LapackeError::WorkMemory),
            TRANSPOSE_MEMORY_ERROR => Some(LapackeError::TransposeMemory),
            i if i < 0 => Some(LapackeError::IllegalArgument {
                position: i.unsigned_abs(),
            }),
            i => Some(LapackeError::NumericalFailure {
                index: i.unsigned_abs(),
            }),
        }
    }

    /// The status code this error was read from.
    pub fn info(self) -> Info {
        match self {
            LapackeError::IllegalArgument { position } => -(position as Info),
            LapackeError::NumericalFailure { index } => index as Info,
            LapackeError::WorkMemory => WORK_MEMORY_ERROR,
            LapackeError::TransposeMemory => TRANSPOSE_MEMORY_ERROR,
        }
    }
}

/// Convert a status code into a `Result`.
pub fn check(info: Info) -> Result<()> {
    match LapackeError::from_info(info) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}

/// Result type for callers that prefer typed errors over status codes.
pub type Result<T> = std::result::Result<T, LapackeError>;
