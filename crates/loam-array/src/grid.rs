//! Row-major two-dimensional view over fixed arrays.

use loam_core::ContainerError;

use crate::fixed::FixedArray;

/// A fixed-size two-dimensional array composed of independent rows.
///
/// Each row is its own [`FixedArray`] of length `num_cols`, held in an
/// outer `FixedArray` of length `num_rows`. Composing from independent
/// rows (rather than one flat buffer) keeps the single-dimension
/// contract reusable and isolates row-level invariants, at the cost of
/// one extra indirection per access. The grid exclusively owns its
/// rows; no row is shared or aliased externally.
#[derive(Clone, Debug)]
pub struct FixedArray2D<T> {
    rows: FixedArray<FixedArray<T>>,
}

impl<T: Clone> FixedArray2D<T> {
    /// Create a `row_count` × `col_count` grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidSize`] if either dimension is zero.
    pub fn new(
        row_count: usize,
        col_count: usize,
        fill: T,
    ) -> Result<Self, ContainerError> {
        // Validate the column dimension first so a zero `col_count` is
        // reported even when `row_count` is also zero.
        let row = FixedArray::new(col_count, fill)?;
        Ok(Self {
            rows: FixedArray::new(row_count, row)?,
        })
    }

    /// Number of rows. O(1).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns. O(1).
    ///
    /// All rows have identical length, so the first row is authoritative.
    pub fn num_cols(&self) -> usize {
        self.rows
            .get(0)
            .map(FixedArray::len)
            .expect("a grid always has at least one row")
    }

    /// Get a shared reference to the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] unless both indices
    /// are in bounds. The row bound is checked here; the column access
    /// delegates to the row array's single-dimension contract.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, ContainerError> {
        self.rows.get(row)?.get(col)
    }

    /// Get a mutable reference to the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] unless both indices
    /// are in bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, ContainerError> {
        self.rows.get_mut(row)?.get_mut(col)
    }

    /// Overwrite the cell at `(row, col)` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] unless both indices
    /// are in bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), ContainerError> {
        self.rows.get_mut(row)?.set(col, value)
    }

    /// Overwrite every cell with `value`. O(rows × cols).
    pub fn clear(&mut self, value: T) {
        for row in self.rows.slots_mut() {
            row.clear(value.clone());
        }
    }

    /// Memory usage of all row storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.rows.iter().map(FixedArray::memory_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_requested_dimensions() {
        let grid = FixedArray2D::new(3, 4, 0i64).unwrap();
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.num_cols(), 4);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            FixedArray2D::new(0, 4, 0i64).unwrap_err(),
            ContainerError::InvalidSize { requested: 0 }
        );
        assert_eq!(
            FixedArray2D::new(3, 0, 0i64).unwrap_err(),
            ContainerError::InvalidSize { requested: 0 }
        );
    }

    #[test]
    fn get_after_set_round_trips() {
        let mut grid = FixedArray2D::new(2, 3, 0i64).unwrap();
        grid.set(1, 2, 42).unwrap();
        assert_eq!(*grid.get(1, 2).unwrap(), 42);
        assert_eq!(*grid.get(0, 2).unwrap(), 0);
    }

    #[test]
    fn rows_are_independent() {
        let mut grid = FixedArray2D::new(2, 2, 0i64).unwrap();
        grid.set(0, 0, 1).unwrap();
        assert_eq!(*grid.get(1, 0).unwrap(), 0);
    }

    #[test]
    fn out_of_range_indices_fail() {
        let mut grid = FixedArray2D::new(2, 3, 0i64).unwrap();
        assert_eq!(
            grid.get(2, 0).unwrap_err(),
            ContainerError::IndexOutOfRange { index: 2, bound: 2 }
        );
        assert_eq!(
            grid.get(0, 3).unwrap_err(),
            ContainerError::IndexOutOfRange { index: 3, bound: 3 }
        );
        assert!(grid.set(5, 5, 1).is_err());
        // Failed writes leave every cell unchanged.
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(*grid.get(r, c).unwrap(), 0);
            }
        }
    }

    #[test]
    fn clear_covers_every_cell() {
        let mut grid = FixedArray2D::new(3, 3, 0i64).unwrap();
        grid.set(2, 2, 9).unwrap();
        grid.clear(7);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(*grid.get(r, c).unwrap(), 7);
            }
        }
    }

    #[test]
    fn memory_bytes_covers_all_rows() {
        let grid = FixedArray2D::new(4, 8, 0u32).unwrap();
        assert_eq!(grid.memory_bytes(), 4 * 8 * 4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn set_get_round_trip(
                rows in 1usize..8,
                cols in 1usize..8,
                value in any::<i32>(),
            ) {
                let mut grid = FixedArray2D::new(rows, cols, 0i32).unwrap();
                let (r, c) = (rows - 1, cols - 1);
                grid.set(r, c, value).unwrap();
                prop_assert_eq!(*grid.get(r, c).unwrap(), value);
                prop_assert!(grid.get(rows, 0).is_err());
                prop_assert!(grid.get(0, cols).is_err());
            }
        }
    }
}
