use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manual play tracker for four-player Callbreak.
#[derive(Debug, Parser)]
#[command(
    name = "cbtrack",
    author,
    version,
    about = "Record plays, resolve tricks, and keep the game across sessions"
)]
pub struct Cli {
    /// Path to the saved game state (overrides CBTRACK_STATE_FILE).
    #[arg(long, value_name = "FILE", global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record one or more played cards in table order (e.g. `A♠ 10♦ QH`).
    Play {
        #[arg(value_name = "CARD", required = true)]
        cards: Vec<String>,
    },
    /// Remove the most recent play.
    Undo,
    /// Discard the game and its saved state.
    Reset,
    /// Select the trump suit; only allowed before the first play.
    Trump {
        #[arg(value_name = "SUIT")]
        suit: String,
    },
    /// Print the resolved tricks and the remaining cards.
    Show,
    /// Print the one-line game status.
    Status,
}
