//! Extents and buffer lengths of strided two-dimensional blocks.

use crate::error::{Result, TransError};
use lapacke_traits::Layout;

/// Padding the reference fixtures add to a row-major band leading dimension.
pub const DEFAULT_BAND_PADDING: usize = 2;

/// Row-major leading dimension for a band array over `n` columns.
///
/// Any value `>= n` is valid; `padding` only adds slack for alignment.
#[inline]
pub const fn band_ld(n: usize, padding: usize) -> usize {
    n + padding
}

/// The extent a leading dimension must cover: rows for column-major,
/// columns for row-major.
#[inline]
pub const fn leading_extent(layout: Layout, rows: usize, cols: usize) -> usize {
    match layout {
        Layout::ColMajor => rows,
        Layout::RowMajor => cols,
    }
}

/// Number of elements a `rows x cols` block with leading dimension `ld`
/// spans, from its first to its last addressed element.
#[inline]
pub const fn dense_len(layout: Layout, rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    match layout {
        Layout::ColMajor => ld * (cols - 1) + rows,
        Layout::RowMajor => ld * (rows - 1) + cols,
    }
}

/// Validate that `len` elements with stride `ld` can hold the block.
pub(crate) fn check_block(
    operand: &'static str,
    layout: Layout,
    rows: usize,
    cols: usize,
    ld: usize,
    len: usize,
) -> Result<()> {
    let min = leading_extent(layout, rows, cols).max(1);
    if ld < min {
        return Err(TransError::LeadingDimension { operand, ld, min });
    }
    let required = dense_len(layout, rows, cols, ld);
    if len < required {
        return Err(TransError::BufferTooSmall {
            operand,
            len,
            required,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_len() {
        // 3x4 col-major with lda = 5: last element at 5*3 + 2
        assert_eq!(dense_len(Layout::ColMajor, 3, 4, 5), 18);
        assert_eq!(dense_len(Layout::RowMajor, 3, 4, 6), 16);
        assert_eq!(dense_len(Layout::RowMajor, 0, 4, 6), 0);
    }

    #[test]
    fn test_band_ld_default_padding() {
        assert_eq!(band_ld(4, DEFAULT_BAND_PADDING), 6);
        assert_eq!(band_ld(4, 0), 4);
    }

    #[test]
    fn test_check_block() {
        assert!(check_block("a", Layout::ColMajor, 3, 3, 3, 9).is_ok());
        assert_eq!(
            check_block("a", Layout::ColMajor, 3, 3, 2, 9),
            Err(TransError::LeadingDimension {
                operand: "a",
                ld: 2,
                min: 3
            })
        );
        assert_eq!(
            check_block("b", Layout::RowMajor, 2, 3, 4, 6),
            Err(TransError::BufferTooSmall {
                operand: "b",
                len: 6,
                required: 7
            })
        );
    }
}
