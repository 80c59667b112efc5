use crate::GridError;

/// Rotation direction for shapes and pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// The rotation that undoes this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// A piece's cell mask: a small rectangular grid of occupied cells.
///
/// Unlike the playfield, a shape's bounding box is not fixed — rotating a
/// non-square shape swaps its height and width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Builds a shape from a statically rectangular mask.
    ///
    /// The array type guarantees equal row lengths, so catalog entries are
    /// valid by construction.
    #[must_use]
    pub fn from_mask<const H: usize, const W: usize>(rows: [[bool; W]; H]) -> Self {
        Self {
            height: H,
            width: W,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Builds a shape from runtime rows, validating rectangularity.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::InvalidShape);
        };
        let width = first.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(GridError::InvalidShape);
        }
        Ok(Self {
            height: rows.len(),
            width,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Iterates the `(row, col)` coordinates of every set cell.
    pub fn set_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    /// Returns the shape rotated a quarter turn.
    ///
    /// The new bounding box is the transposed one (new width = old height).
    /// Clockwise sends source `(y, x)` to `(x, height - 1 - y)`;
    /// counter-clockwise sends it to `(width - 1 - x, y)`.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let (new_height, new_width) = (self.width, self.height);
        let mut cells = vec![false; self.cells.len()];
        for (y, x) in self.set_cells() {
            let (ny, nx) = match rotation {
                Rotation::Clockwise => (x, self.height - 1 - y),
                Rotation::CounterClockwise => (self.width - 1 - x, y),
            };
            cells[ny * new_width + nx] = true;
        }
        Self {
            height: new_height,
            width: new_width,
            cells,
        }
    }
}
