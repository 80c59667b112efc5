use clap::{Parser, Subcommand};

use crate::command::play::PlayArg;

mod console;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal UI
    Play(#[clap(flatten)] play::PlayArg),
    /// Text-dump rendering with manual stepping
    Console(#[clap(flatten)] console::ConsoleArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Console(arg) => console::run(&arg)?,
    }
    Ok(())
}

/// Parser for dimension flags; the grid rejects zero-sized boards.
pub(crate) fn positive_usize(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("{e}"))?;
    if value == 0 {
        return Err(String::from("value must be at least 1"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn zero_dimensions_are_rejected_at_parse_time() {
        assert!(CommandArgs::try_parse_from(["blockfall", "play", "--rows", "0"]).is_err());
        assert!(CommandArgs::try_parse_from(["blockfall", "play", "--cols", "0"]).is_err());
        assert!(CommandArgs::try_parse_from(["blockfall", "console", "--rows", "0"]).is_err());
        assert!(CommandArgs::try_parse_from(["blockfall", "console", "--cols", "0"]).is_err());
    }

    #[test]
    fn zero_tick_divisors_are_rejected_at_parse_time() {
        assert!(
            CommandArgs::try_parse_from(["blockfall", "play", "--ticks-per-update", "0"]).is_err()
        );
        assert!(
            CommandArgs::try_parse_from(["blockfall", "play", "--ticks-per-frame", "0"]).is_err()
        );
    }

    #[test]
    fn defaults_parse() {
        assert!(CommandArgs::try_parse_from(["blockfall"]).is_ok());
        assert!(CommandArgs::try_parse_from(["blockfall", "play"]).is_ok());
        assert!(CommandArgs::try_parse_from(["blockfall", "console"]).is_ok());
    }
}
