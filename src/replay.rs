//! Scripted replay of a move list.

use crate::config::GameConfig;
use crate::input::parse_coordinates;
use anyhow::{Context, Result, anyhow};
use sano_board::{GameBoard, GameStatus};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Applies `moves` (each `row,column`) in order to a fresh board, then
/// prints the board and its status.
///
/// # Errors
///
/// Fails on the first move that cannot be parsed or that the board
/// rejects; the partial board is printed before returning.
#[instrument(skip(moves, output), fields(moves = moves.len()))]
pub fn run_replay<W: Write>(config: &GameConfig, moves: &[String], mut output: W) -> Result<GameStatus> {
    let mut board = config.new_board().context("Failed to create board")?;

    for (index, text) in moves.iter().enumerate() {
        let number = index + 1;
        let (row, column) = parse_coordinates(text)
            .ok_or_else(|| anyhow!("Move {number} {text:?} is not `row,column`"))?;

        debug!(number, row, column, "Replaying move");
        if let Err(err) = board.place_next_piece(row, column) {
            print_result(&board, &mut output)?;
            return Err(err).with_context(|| format!("Move {number} at ({row}, {column}) rejected"));
        }
    }

    print_result(&board, &mut output)?;
    info!(status = %board.status(), placed = board.placed_count(), "Replay finished");
    Ok(board.status())
}

fn print_result<W: Write>(board: &GameBoard, output: &mut W) -> Result<()> {
    writeln!(output, "{board}")?;
    writeln!(output, "{}", board.status())?;
    Ok(())
}
