use blockfall_engine::{GameConfig, GameState, PieceGenerator};

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Grid height in rows
    #[clap(long, default_value_t = GameConfig::default().rows, value_parser = crate::command::positive_usize)]
    rows: usize,
    /// Grid width in columns
    #[clap(long, default_value_t = GameConfig::default().cols, value_parser = crate::command::positive_usize)]
    cols: usize,
    /// Rendered cell width in terminal columns
    #[clap(long, default_value_t = GameConfig::default().cell_size)]
    cell_size: u16,
    /// Clock ticks between gravity steps (smaller falls faster)
    #[clap(long, default_value_t = GameConfig::default().ticks_per_update, value_parser = clap::value_parser!(u32).range(1..))]
    ticks_per_update: u32,
    /// Clock ticks between renders
    #[clap(long, default_value_t = GameConfig::default().ticks_per_frame, value_parser = clap::value_parser!(u32).range(1..))]
    ticks_per_frame: u32,
    /// Seed for the piece generator (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
}

impl Default for PlayArg {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            rows: config.rows,
            cols: config.cols,
            cell_size: config.cell_size,
            ticks_per_update: config.ticks_per_update,
            ticks_per_frame: config.ticks_per_frame,
            seed: None,
        }
    }
}

impl PlayArg {
    fn game_state(&self) -> GameState {
        let config = GameConfig {
            rows: self.rows,
            cols: self.cols,
            cell_size: self.cell_size,
            ticks_per_update: self.ticks_per_update,
            ticks_per_frame: self.ticks_per_frame,
        };
        let generator = match self.seed {
            Some(seed) => PieceGenerator::with_seed(seed),
            None => PieceGenerator::new(),
        };
        GameState::with_generator(config, generator)
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let mut app = PlayApp::new(arg.game_state());
    Tui::new().run(&mut app)
}
