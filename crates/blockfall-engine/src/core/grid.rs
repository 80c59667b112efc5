use crate::GridError;

/// The playfield: a fixed-size mask of occupied cells.
///
/// Dimensions are fixed after creation; the only way to change them is
/// [`replace_contents`](Self::replace_contents), which swaps the whole mask
/// at once.
///
/// # Access policy
///
/// Reads are strict ([`get`](Self::get) fails with
/// [`GridError::OutOfBounds`]), writes are lenient ([`set`](Self::set)
/// silently ignores out-of-bounds coordinates). Locking a piece whose cells
/// overhang the boundary must not fail, so the write path drops those cells
/// instead of erroring. Collision logic uses the pure
/// [`cell_at`](Self::cell_at) probe and never touches the strict path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be positive");
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Strict read of a single cell.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(self.cells[row * self.width + col])
    }

    /// Bounds probe for collision logic.
    ///
    /// Returns `None` for coordinates outside the grid, the cell value
    /// otherwise. Takes signed coordinates so callers can probe tentative
    /// piece positions that have drifted past the left or top edge.
    #[must_use]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<bool> {
        let row = usize::try_from(row).ok().filter(|r| *r < self.height)?;
        let col = usize::try_from(col).ok().filter(|c| *c < self.width)?;
        Some(self.cells[row * self.width + col])
    }

    /// Lenient write of a single cell.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, row: i32, col: i32, value: bool) {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return;
        };
        if row >= self.height || col >= self.width {
            return;
        }
        self.cells[row * self.width + col] = value;
    }

    /// Atomically replaces the dimensions and mask.
    ///
    /// Fails with [`GridError::InvalidShape`] unless every row has the same
    /// nonzero length and at least one row is present.
    pub fn replace_contents(&mut self, rows: &[Vec<bool>]) -> Result<(), GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::InvalidShape);
        };
        let width = first.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(GridError::InvalidShape);
        }
        self.height = rows.len();
        self.width = width;
        self.cells = rows.iter().flatten().copied().collect();
        Ok(())
    }

    /// Iterates the rows of the mask, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    fn is_row_filled(&self, row: usize) -> bool {
        self.cells[row * self.width..][..self.width]
            .iter()
            .all(|&cell| cell)
    }

    /// Removes every filled row and inserts that many empty rows at the top.
    ///
    /// The total row count and the relative order of the surviving rows are
    /// preserved. Returns the number of rows cleared.
    pub fn clear_filled_rows(&mut self) -> usize {
        let width = self.width;
        let mut count = 0;
        for row in (0..self.height).rev() {
            if self.is_row_filled(row) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.cells
                    .copy_within(row * width..(row + 1) * width, (row + count) * width);
            }
        }
        self.cells[..count * width].fill(false);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&[bool]]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len());
        let rows: Vec<Vec<bool>> = rows.iter().map(|row| row.to_vec()).collect();
        grid.replace_contents(&rows).unwrap();
        grid
    }

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn get_is_strict() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.get(0, 0), Ok(false));
        assert_eq!(grid.get(3, 2), Ok(false));
        assert_eq!(grid.get(4, 0), Err(GridError::OutOfBounds { row: 4, col: 0 }));
        assert_eq!(grid.get(0, 3), Err(GridError::OutOfBounds { row: 0, col: 3 }));
    }

    #[test]
    fn set_is_lenient() {
        let mut grid = Grid::new(4, 3);
        grid.set(1, 2, true);
        assert_eq!(grid.get(1, 2), Ok(true));

        // Out-of-bounds writes are dropped without touching the grid.
        let before = grid.clone();
        grid.set(-1, 0, true);
        grid.set(0, -1, true);
        grid.set(4, 0, true);
        grid.set(0, 3, true);
        assert_eq!(grid, before);
    }

    #[test]
    fn cell_at_probes_without_error() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 1, true);
        assert_eq!(grid.cell_at(1, 1), Some(true));
        assert_eq!(grid.cell_at(0, 0), Some(false));
        assert_eq!(grid.cell_at(-1, 0), None);
        assert_eq!(grid.cell_at(0, 2), None);
        assert_eq!(grid.cell_at(2, 0), None);
    }

    #[test]
    fn replace_contents_validates_rectangularity() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(grid.replace_contents(&[]), Err(GridError::InvalidShape));
        assert_eq!(
            grid.replace_contents(&[vec![], vec![]]),
            Err(GridError::InvalidShape)
        );
        assert_eq!(
            grid.replace_contents(&[vec![T, F], vec![T]]),
            Err(GridError::InvalidShape)
        );

        grid.replace_contents(&[vec![T, F, T]]).unwrap();
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 0), Ok(true));
        assert_eq!(grid.get(0, 1), Ok(false));
    }

    #[test]
    fn clear_filled_rows_single() {
        let mut grid = grid_from(&[
            &[F, F, F],
            &[T, F, T],
            &[T, T, T],
            &[F, T, F],
        ]);
        assert_eq!(grid.clear_filled_rows(), 1);
        assert_eq!(grid.height(), 4);
        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows[0], &[F, F, F]);
        assert_eq!(rows[1], &[F, F, F]);
        assert_eq!(rows[2], &[T, F, T]);
        assert_eq!(rows[3], &[F, T, F]);
    }

    #[test]
    fn clear_filled_rows_none_leaves_grid_untouched() {
        let mut grid = grid_from(&[&[T, F], &[F, T]]);
        let before = grid.clone();
        assert_eq!(grid.clear_filled_rows(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn clear_filled_rows_non_adjacent() {
        let mut grid = grid_from(&[
            &[T, T],
            &[T, F],
            &[T, T],
            &[F, T],
        ]);
        assert_eq!(grid.clear_filled_rows(), 2);
        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows[0], &[F, F]);
        assert_eq!(rows[1], &[F, F]);
        assert_eq!(rows[2], &[T, F]);
        assert_eq!(rows[3], &[F, T]);
    }

    #[test]
    fn clear_filled_rows_all() {
        let mut grid = grid_from(&[&[T, T], &[T, T]]);
        assert_eq!(grid.clear_filled_rows(), 2);
        assert!(grid.rows().flatten().all(|&cell| !cell));
    }

    #[test]
    fn clone_is_independent() {
        let mut grid = Grid::new(3, 3);
        let copy = grid.clone();
        grid.set(0, 0, true);
        assert_eq!(copy.get(0, 0), Ok(false));
    }
}
