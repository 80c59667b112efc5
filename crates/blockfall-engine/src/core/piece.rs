use super::{
    grid::Grid,
    shape::{Rotation, Shape},
};

/// The active falling piece: a [`Shape`] positioned on the [`Grid`].
///
/// The offset locates the shape's top-left cell in grid coordinates. It is
/// signed because a probe may step past the top or left edge before being
/// rolled back; a committed position never leaves the grid.
///
/// Movement and rotation follow a probe-and-rollback protocol: apply the
/// change, test for collision, and undo it entirely on failure. A failed
/// operation leaves the piece bit-for-bit unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    row: i32,
    col: i32,
    pivot_hint: Option<(u8, u8)>,
}

impl Piece {
    /// Creates a piece at the default spawn offset `(0, 0)`.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            row: 0,
            col: 0,
            pivot_hint: None,
        }
    }

    /// Attaches a rotation-center hint.
    ///
    /// Inert metadata reserved for pivot-based rotation; no rotation
    /// algorithm reads it.
    #[must_use]
    pub fn with_pivot_hint(mut self, hint: (u8, u8)) -> Self {
        self.pivot_hint = Some(hint);
        self
    }

    #[must_use]
    pub fn pivot_hint(&self) -> Option<(u8, u8)> {
        self.pivot_hint
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The `(row, col)` offset of the shape's top-left cell.
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Enumerates the grid coordinates covered by the piece.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .set_cells()
            .map(|(r, c)| (self.row + r as i32, self.col + c as i32))
    }

    /// Reports whether the piece overlaps occupied cells or leaves the grid.
    ///
    /// Fail-closed: any occupied cell outside the grid bounds counts as a
    /// collision.
    #[must_use]
    pub fn intersects(&self, grid: &Grid) -> bool {
        self.occupied_cells()
            .any(|(row, col)| grid.cell_at(row, col).unwrap_or(true))
    }

    /// Translates the piece by the given delta.
    ///
    /// When a grid is supplied the move is collision-checked: on collision
    /// the offset is reverted and `false` is returned. Without a grid the
    /// move always commits.
    pub fn move_by(&mut self, delta_row: i32, delta_col: i32, grid: Option<&Grid>) -> bool {
        self.row += delta_row;
        self.col += delta_col;
        if let Some(grid) = grid
            && self.intersects(grid)
        {
            self.row -= delta_row;
            self.col -= delta_col;
            return false;
        }
        true
    }

    pub fn move_down(&mut self, grid: Option<&Grid>) -> bool {
        self.move_by(1, 0, grid)
    }

    pub fn move_left(&mut self, grid: Option<&Grid>) -> bool {
        self.move_by(0, -1, grid)
    }

    pub fn move_right(&mut self, grid: Option<&Grid>) -> bool {
        self.move_by(0, 1, grid)
    }

    pub fn move_up(&mut self, grid: Option<&Grid>) -> bool {
        self.move_by(-1, 0, grid)
    }

    /// Rotates the shape in place without any collision check.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.shape = self.shape.rotated(rotation);
    }

    /// Rotates, then rolls the rotation back if the new placement collides.
    ///
    /// A quarter turn followed by its opposite restores the mask exactly
    /// (including the bounding box of non-square shapes), so a rejected
    /// rotation leaves the piece unchanged. Returns whether the rotation
    /// stuck.
    pub fn safe_rotate(&mut self, rotation: Rotation, grid: &Grid) -> bool {
        self.rotate(rotation);
        if self.intersects(grid) {
            self.rotate(rotation.opposite());
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    fn square_piece() -> Piece {
        Piece::new(Shape::from_mask([[T, T], [T, T]]))
    }

    fn s_piece() -> Piece {
        Piece::new(Shape::from_mask([[F, T, T], [T, T, F]]))
    }

    #[test]
    fn occupied_cells_offset_by_position() {
        let mut piece = s_piece();
        assert!(piece.move_by(2, 3, None));
        let cells: Vec<_> = piece.occupied_cells().collect();
        assert_eq!(cells, vec![(2, 4), (2, 5), (3, 3), (3, 4)]);
    }

    #[test]
    fn in_bounds_non_overlapping_piece_does_not_intersect() {
        let grid = Grid::new(20, 10);
        let piece = square_piece();
        assert!(!piece.intersects(&grid));
    }

    #[test]
    fn out_of_bounds_counts_as_collision() {
        let grid = Grid::new(20, 10);
        let mut piece = square_piece();
        piece.move_by(0, -1, None);
        assert!(piece.intersects(&grid));

        let mut piece = square_piece();
        piece.move_by(19, 0, None);
        assert!(piece.intersects(&grid));
    }

    #[test]
    fn overlapping_stack_counts_as_collision() {
        let mut grid = Grid::new(20, 10);
        grid.set(1, 1, true);
        let piece = square_piece();
        assert!(piece.intersects(&grid));
    }

    #[test]
    fn rejected_move_rolls_back() {
        let grid = Grid::new(20, 10);
        let mut piece = square_piece();
        let before = piece.clone();
        assert!(!piece.move_left(Some(&grid)));
        assert_eq!(piece, before);
    }

    #[test]
    fn committed_move_updates_offset() {
        let grid = Grid::new(20, 10);
        let mut piece = square_piece();
        assert!(piece.move_right(Some(&grid)));
        assert!(piece.move_down(Some(&grid)));
        assert_eq!(piece.position(), (1, 1));
    }

    #[test]
    fn square_piece_descends_to_the_floor() {
        // 2x2 block on a 20-tall grid: 18 drops succeed, the 19th hits the
        // floor with the piece occupying rows 18 and 19.
        let grid = Grid::new(20, 10);
        let mut piece = square_piece();
        for _ in 0..18 {
            assert!(piece.move_down(Some(&grid)));
        }
        assert_eq!(piece.position(), (18, 0));
        assert!(!piece.move_down(Some(&grid)));
        assert_eq!(piece.position(), (18, 0));
    }

    #[test]
    fn safe_rotate_commits_when_room_allows() {
        let grid = Grid::new(20, 10);
        let mut piece = s_piece();
        assert!(piece.safe_rotate(Rotation::Clockwise, &grid));
        assert_eq!((piece.shape().height(), piece.shape().width()), (3, 2));
    }

    #[test]
    fn safe_rotate_rolls_back_on_collision() {
        // A 1x4 bar lying along the top of a 2-row grid cannot stand up.
        let grid = Grid::new(2, 10);
        let mut piece = Piece::new(Shape::from_mask([[T, T, T, T]]));
        let before = piece.clone();
        assert!(!piece.safe_rotate(Rotation::Clockwise, &grid));
        assert_eq!(piece, before);

        assert!(!piece.safe_rotate(Rotation::CounterClockwise, &grid));
        assert_eq!(piece, before);
    }

    #[test]
    fn safe_rotate_respects_stacked_cells() {
        let mut grid = Grid::new(20, 10);
        // Wall of occupied cells directly under the bar's pivot area.
        for row in 1..5 {
            for col in 0..4 {
                grid.set(row, col, true);
            }
        }
        let mut piece = Piece::new(Shape::from_mask([[T, T, T, T]]));
        let before = piece.clone();
        assert!(!piece.safe_rotate(Rotation::Clockwise, &grid));
        assert_eq!(piece, before);
    }

    #[test]
    fn pivot_hint_is_inert_metadata() {
        let mut piece = square_piece().with_pivot_hint((1, 1));
        assert_eq!(piece.pivot_hint(), Some((1, 1)));
        let grid = Grid::new(20, 10);
        piece.safe_rotate(Rotation::Clockwise, &grid);
        assert_eq!(piece.pivot_hint(), Some((1, 1)));
    }
}
