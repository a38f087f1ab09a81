//! Hot-seat game session over a line-oriented terminal.
//!
//! The session owns the current [`GameBoard`], maps typed coordinates to
//! placements, prints the board after every accepted move and announces
//! wins and draws. Starting a new game discards the board and builds a
//! fresh one from the same [`GameConfig`].

use crate::config::GameConfig;
use crate::input::Input;
use anyhow::{Context, Result};
use sano_board::{GameBoard, GameStatus, PlacementError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "Commands: `row column` places the next piece, `new` starts over, `quit` leaves.";

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games that ended with a winner.
    pub wins: usize,
    /// Games that ended in a draw.
    pub draws: usize,
    /// Placements rejected by the board.
    pub rejected: usize,
}

/// A game session reading commands from `input` and writing to `output`.
#[derive(Debug)]
pub struct Session<R, W> {
    config: GameConfig,
    board: GameBoard,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh board.
    #[instrument(skip(input, output))]
    pub fn new(config: GameConfig, input: R, output: W) -> Result<Self> {
        let board = config.new_board().context("Failed to create board")?;
        info!(size = board.size(), first_piece = %board.first_piece(), "Creating new game session");
        Ok(Self {
            config,
            board,
            input,
            output,
            summary: SessionSummary::default(),
        })
    }

    /// The board currently in play.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<SessionSummary> {
        self.print_board()?;
        self.prompt()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line).context("Failed to read input")? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                self.prompt()?;
                continue;
            }

            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(Input::Help) => writeln!(self.output, "{HELP}")?,
                Ok(Input::NewGame) => self.new_game()?,
                Ok(Input::Place { row, column }) => self.place(row, column)?,
                Err(err) => {
                    debug!(error = %err, "Unparsed input");
                    writeln!(self.output, "{err}")?;
                }
            }
            self.prompt()?;
        }

        info!(summary = ?self.summary, "Session finished");
        Ok(self.summary)
    }

    /// Discards the current board and starts over.
    #[instrument(skip(self))]
    fn new_game(&mut self) -> Result<()> {
        self.board = self.config.new_board().context("Failed to create board")?;
        info!("Started new game");
        writeln!(self.output, "New game.")?;
        self.print_board()
    }

    #[instrument(skip(self), fields(piece = %self.board.next_placing_piece()))]
    fn place(&mut self, row: isize, column: isize) -> Result<()> {
        match self.board.place_next_piece(row, column) {
            Ok(()) => {
                self.print_board()?;
                self.announce()
            }
            Err(err) => {
                self.summary.rejected += 1;
                debug!(error = %err, "Placement rejected");
                writeln!(self.output, "{err}")?;
                if matches!(err, PlacementError::Completed) {
                    writeln!(self.output, "Type `new` to play again.")?;
                }
                Ok(())
            }
        }
    }

    fn announce(&mut self) -> Result<()> {
        match self.board.status() {
            GameStatus::InProgress => Ok(()),
            status @ GameStatus::Won(_) => {
                self.summary.wins += 1;
                info!(%status, "Game won");
                writeln!(self.output, "{status}!")?;
                Ok(())
            }
            GameStatus::Draw => {
                self.summary.draws += 1;
                info!("Game drawn");
                writeln!(self.output, "Draw!")?;
                Ok(())
            }
        }
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.board)?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if !self.board.is_completed() {
            let piece = self.board.next_placing_piece();
            write!(self.output, "{} {} > ", piece.glyph(), piece)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
