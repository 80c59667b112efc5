use std::io::{self, BufRead as _, Write as _};

use blockfall_engine::{GameConfig, GameState, PieceGenerator, Rotation};

/// Console variant: the grid is dumped as text and the clock is manual —
/// the simulation advances only when the player submits a step.
#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct ConsoleArg {
    /// Grid height in rows
    #[clap(long, default_value_t = GameConfig::default().rows, value_parser = crate::command::positive_usize)]
    rows: usize,
    /// Grid width in columns
    #[clap(long, default_value_t = GameConfig::default().cols, value_parser = crate::command::positive_usize)]
    cols: usize,
    /// Seed for the piece generator (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &ConsoleArg) -> anyhow::Result<()> {
    let config = GameConfig {
        rows: arg.rows,
        cols: arg.cols,
        ..GameConfig::default()
    };
    let generator = match arg.seed {
        Some(seed) => PieceGenerator::with_seed(seed),
        None => PieceGenerator::new(),
    };
    let mut state = GameState::with_generator(config, generator);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("a/d move, w/e rotate, s soft drop, enter step, q quit");

    let mut input = String::new();
    loop {
        dump(&state);
        if state.phase().is_game_over() {
            println!("game over - final score {}", state.score());
            return Ok(());
        }

        print!("> ");
        stdout.flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }
        match input.trim() {
            "" => _ = state.step(),
            "a" => _ = state.try_move_left(),
            "d" => _ = state.try_move_right(),
            "s" => _ = state.try_soft_drop(),
            "w" => _ = state.try_rotate(Rotation::Clockwise),
            "e" => _ = state.try_rotate(Rotation::CounterClockwise),
            "q" => return Ok(()),
            _ => println!("unknown command"),
        }
    }
}

/// Text dump of the grid with the active piece overlaid.
fn dump(state: &GameState) {
    let grid = state.grid();
    let mut canvas: Vec<Vec<char>> = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|&occupied| if occupied { 'x' } else { '.' })
                .collect()
        })
        .collect();
    for (row, col) in state.piece().occupied_cells() {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            continue;
        };
        if row < grid.height() && col < grid.width() {
            canvas[row][col] = 'o';
        }
    }

    for row in canvas {
        println!("{}", row.into_iter().collect::<String>());
    }
    println!("score: {}", state.score());
}
