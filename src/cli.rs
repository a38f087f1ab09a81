//! Command-line interface for sano.

use clap::{Args, Parser, Subcommand};
use sano_board::GamePiece;
use std::path::PathBuf;

/// Sano - N×N placement game for two players on one terminal
#[derive(Parser, Debug)]
#[command(name = "sano")]
#[command(about = "Two-player N×N placement game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Path to the game config file
    #[arg(short, long, default_value = "sano.toml")]
    pub config: PathBuf,

    /// Side length of the board (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Piece that moves first: solid or donut (overrides the config file)
    #[arg(short, long)]
    pub first_piece: Option<GamePiece>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play with a friend, taking turns at this terminal
    Play {
        /// Board settings
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Apply a list of moves and print the resulting board
    Replay {
        /// Board settings
        #[command(flatten)]
        board: BoardArgs,

        /// Moves as `row,column`, in placing order
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
}
