//! Gameplay orchestration on top of the core data structures.
//!
//! - [`GameConfig`] - session parameters (board size, tick cadence)
//! - [`ShapeKind`] / [`PieceGenerator`] - the fixed shape catalog and the
//!   uniform random piece source
//! - [`GameState`] - one grid, one falling piece, score, and the tick
//!   state machine

pub use self::{catalog::*, config::*, game_state::*};

pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod game_state;
