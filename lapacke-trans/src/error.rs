/// Errors reported by the transposition routines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransError {
    /// A leading dimension is smaller than the extent it must span.
    #[error("leading dimension {ld} of {operand} is smaller than required {min}")]
    LeadingDimension {
        operand: &'static str,
        ld: usize,
        min: usize,
    },

    /// A buffer cannot hold the block its shape and stride address.
    #[error("{operand} holds {len} elements but {required} are addressed")]
    BufferTooSmall {
        operand: &'static str,
        len: usize,
        required: usize,
    },
}

/// Result type for transposition routines.
pub type Result<T> = std::result::Result<T, TransError>;
