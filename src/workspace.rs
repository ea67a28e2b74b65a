//! Workspace sizing.
//!
//! A family either needs no scratch, knows its scratch in closed form from
//! the matrix order, or has to ask the kernel (`lwork = -1`). For the
//! query case the kernel writes the optimal length into the first slot of
//! a one-element buffer.

use crate::error::Info;
use lapacke_traits::Scalar;

/// Scratch lengths for one call, in elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkSize {
    /// Elements of the matrix type.
    pub work: usize,
    /// `i32` elements.
    pub iwork: usize,
}

/// Kernel families the adapter dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Potrf,
    Pptrf,
    Pbtrf,
    Getrf,
    Sytrf,
    Hetrf,
    Sycon,
    Hecon,
}

/// How a family's scratch length is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    None,
    ClosedForm,
    Query,
}

impl Family {
    pub const fn name(self) -> &'static str {
        match self {
            Family::Potrf => "potrf",
            Family::Pptrf => "pptrf",
            Family::Pbtrf => "pbtrf",
            Family::Getrf => "getrf",
            Family::Sytrf => "sytrf",
            Family::Hetrf => "hetrf",
            Family::Sycon => "sycon",
            Family::Hecon => "hecon",
        }
    }

    pub const fn sizing(self) -> Sizing {
        match self {
            Family::Potrf | Family::Pptrf | Family::Pbtrf | Family::Getrf => Sizing::None,
            Family::Sytrf | Family::Hetrf => Sizing::Query,
            Family::Sycon | Family::Hecon => Sizing::ClosedForm,
        }
    }
}

/// Closed-form scratch for order `n`. Every length in use is at least 1.
///
/// Query families report zero here; use [`optimal_size`].
pub fn closed_form<T: Scalar>(family: Family, n: usize) -> WorkSize {
    match family {
        Family::Sycon if !T::IS_COMPLEX => WorkSize {
            work: (2 * n).max(1),
            iwork: n.max(1),
        },
        Family::Sycon | Family::Hecon => WorkSize {
            work: (2 * n).max(1),
            iwork: 0,
        },
        _ => WorkSize::default(),
    }
}

/// Scratch for `family` at order `n`.
///
/// For query families `query` runs the kernel in query mode on the
/// provided one-element buffer; a non-zero status is returned as `Err`
/// and nothing should be allocated. Other families never call `query`.
pub fn optimal_size<T, F>(family: Family, n: usize, query: F) -> Result<WorkSize, Info>
where
    T: Scalar,
    F: FnOnce(&mut [T]) -> Info,
{
    match family.sizing() {
        Sizing::Query => {
            let mut slot = [T::default()];
            let info = query(&mut slot);
            if info != 0 {
                return Err(info);
            }
            Ok(WorkSize {
                work: slot[0].to_lwork().max(1) as usize,
                iwork: 0,
            })
        }
        Sizing::ClosedForm | Sizing::None => Ok(closed_form::<T>(family, n)),
    }
}
