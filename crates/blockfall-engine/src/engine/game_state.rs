use crate::core::{Grid, Piece, Rotation};

use super::{catalog::PieceGenerator, config::GameConfig};

/// Where the session is in its lifecycle.
///
/// There is no pause state; pausing is a collaborator concern. `GameOver`
/// is entered when a freshly spawned piece already overlaps the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    Falling,
    GameOver,
}

/// What a single simulation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Descended,
    /// The piece locked; `cleared` rows were removed.
    Locked { cleared: usize },
    /// The session is over; nothing happened.
    GameOver,
}

/// One game session: a grid, the active piece, score, and tick bookkeeping.
///
/// The active piece never overlaps the stack and never leaves the grid,
/// except transiently inside a probe before rollback, and except at spawn
/// when the stack has reached the top — which ends the session.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    piece: Piece,
    generator: PieceGenerator,
    score: u64,
    ticks: u64,
    phase: GamePhase,
}

impl GameState {
    /// Creates a session with an OS-seeded piece generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, PieceGenerator::new())
    }

    /// Creates a session drawing pieces from the supplied generator.
    #[must_use]
    pub fn with_generator(config: GameConfig, mut generator: PieceGenerator) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        let piece = generator.generate();
        let phase = if piece.intersects(&grid) {
            GamePhase::GameOver
        } else {
            GamePhase::Falling
        };
        Self {
            config,
            grid,
            piece,
            generator,
            score: 0,
            ticks: 0,
            phase,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Records one clock tick; runs a simulation step every
    /// `ticks_per_update` ticks.
    ///
    /// A zero divisor is treated as one (a step on every tick) rather than
    /// stalling or dividing by zero.
    pub fn advance_clock(&mut self) -> Option<TickOutcome> {
        self.ticks += 1;
        let divisor = u64::from(self.config.ticks_per_update).max(1);
        (self.ticks % divisor == 0).then(|| self.step())
    }

    /// One discrete simulation step.
    ///
    /// Tries to descend; if the piece cannot move down it locks into the
    /// grid, filled rows are cleared into the score, and a replacement
    /// piece spawns. A replacement that already collides ends the session.
    pub fn step(&mut self) -> TickOutcome {
        if self.phase.is_game_over() {
            return TickOutcome::GameOver;
        }
        if self.piece.move_down(Some(&self.grid)) {
            return TickOutcome::Descended;
        }

        for (row, col) in self.piece.occupied_cells() {
            self.grid.set(row, col, true);
        }
        let cleared = self.grid.clear_filled_rows();
        self.score += cleared as u64;

        self.piece = self.generator.generate();
        if self.piece.intersects(&self.grid) {
            self.phase = GamePhase::GameOver;
        }
        TickOutcome::Locked { cleared }
    }

    /// Manual score bump, kept as a debug/test hook.
    pub fn increase_score(&mut self) {
        self.score += 1;
    }

    pub fn try_move_left(&mut self) -> bool {
        self.phase.is_falling() && self.piece.move_left(Some(&self.grid))
    }

    pub fn try_move_right(&mut self) -> bool {
        self.phase.is_falling() && self.piece.move_right(Some(&self.grid))
    }

    /// Player-driven descent; locking still only happens on [`step`](Self::step).
    pub fn try_soft_drop(&mut self) -> bool {
        self.phase.is_falling() && self.piece.move_down(Some(&self.grid))
    }

    pub fn try_rotate(&mut self, rotation: Rotation) -> bool {
        self.phase.is_falling() && self.piece.safe_rotate(rotation, &self.grid)
    }
}
