//! Dense row-major grid
//!
//! Boards and orientation masks are stored as a single flat buffer. Signed
//! lookups return `None` off the edge so neighbor checks need no special cases.

use std::ops::{Index, IndexMut};

/// A `rows × cols` grid backed by one `Vec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked lookup with signed coordinates
    ///
    /// # Examples
    /// ```
    /// use crossword_gen::core::Grid;
    ///
    /// let grid = Grid::new(2, 3, 0u8);
    /// assert_eq!(grid.get(1, 2), Some(&0));
    /// assert_eq!(grid.get(-1, 0), None);
    /// assert_eq!(grid.get(0, 3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Option<&T> {
        if row < 0 || col < 0 {
            return None;
        }
        self.offset(row as usize, col as usize)
            .map(|offset| &self.cells[offset])
    }

    /// One row as a slice
    ///
    /// # Panics
    /// Panics if `row >= rows`
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of range");
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero size
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        let offset = self
            .offset(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) out of range"));
        &self.cells[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self
            .offset(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) out of range"));
        &mut self.cells[offset]
    }
}
