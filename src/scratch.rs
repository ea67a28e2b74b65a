//! Buffers owned by the adapter for the duration of one call.

use crate::error::{Info, TRANSPOSE_MEMORY_ERROR, WORK_MEMORY_ERROR};
use std::ops::{Deref, DerefMut};

/// A zero-initialised buffer that lives for exactly one call.
///
/// Memory is released when the value is dropped, on every exit path.
#[derive(Debug)]
pub struct Scratch<T> {
    buf: Vec<T>,
}

impl<T: Copy + Default> Scratch<T> {
    /// Allocate `len` default-valued elements, or `None` if the allocation
    /// cannot be satisfied.
    pub fn try_zeroed(len: usize) -> Option<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).ok()?;
        buf.resize(len, T::default());
        #[cfg(test)]
        probe::record();
        Some(Self { buf })
    }
}

impl<T> Deref for Scratch<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.buf
    }
}

impl<T> DerefMut for Scratch<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

/// Workspace for a kernel, [`WORK_MEMORY_ERROR`] on failure.
pub(crate) fn work<T: Copy + Default>(len: usize) -> Result<Scratch<T>, Info> {
    Scratch::try_zeroed(len).ok_or(WORK_MEMORY_ERROR)
}

/// Column-major staging for a `len`-element matrix, [`TRANSPOSE_MEMORY_ERROR`]
/// on failure (including a length that overflows).
pub(crate) fn staging<T: Copy + Default>(len: Option<usize>) -> Result<Scratch<T>, Info> {
    len.and_then(Scratch::try_zeroed)
        .ok_or(TRANSPOSE_MEMORY_ERROR)
}
