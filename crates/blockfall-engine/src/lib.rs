pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Errors raised by [`Grid`](core::Grid) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A strict read addressed a cell outside the grid extents.
    #[display("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    /// A supplied cell mask has rows of unequal length (or no rows at all).
    #[display("cell mask rows must all have the same nonzero length")]
    InvalidShape,
}
