//! Command-line interface for strictly_rounds.

use clap::Parser;
use std::path::PathBuf;
use strictly_rounds::{DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS};

/// Strictly Rounds - two-player tic-tac-toe over several rounds
#[derive(Parser, Debug)]
#[command(name = "strictly_rounds")]
#[command(about = "Two-player tic-tac-toe played over several rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Prefill the name of the player who plays X
    #[arg(long, default_value = "")]
    pub player_x: String,

    /// Prefill the name of the player who plays O
    #[arg(long, default_value = "")]
    pub player_o: String,

    /// Prefill the number of rounds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_ROUNDS,
        value_parser = clap::value_parser!(u32).range(MIN_ROUNDS as i64..=MAX_ROUNDS as i64)
    )]
    pub rounds: u32,

    /// Where to write logs (the terminal is busy drawing the board)
    #[arg(long, default_value = "strictly_rounds.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_rounds"]).unwrap();
        assert_eq!(cli.player_x, "");
        assert_eq!(cli.rounds, DEFAULT_ROUNDS);
        assert_eq!(cli.log_file, PathBuf::from("strictly_rounds.log"));
    }

    #[test]
    fn test_prefill() {
        let cli = Cli::try_parse_from([
            "strictly_rounds",
            "--player-x",
            "Ann",
            "--player-o",
            "Ben",
            "-r",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.player_x, "Ann");
        assert_eq!(cli.player_o, "Ben");
        assert_eq!(cli.rounds, 5);
    }

    #[test]
    fn test_rounds_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["strictly_rounds", "--rounds", "0"]).is_err());
        assert!(Cli::try_parse_from(["strictly_rounds", "--rounds", "11"]).is_err());
    }
}
