//! Sano - terminal front end for the N×N placement game.
//!
//! The game rules live in [`sano_board`]; this crate only maps terminal
//! input to placements and prints the results.
//!
//! # Architecture
//!
//! - **Config**: board settings from `sano.toml` plus CLI overrides
//! - **Session**: hot-seat play over any `BufRead`/`Write` pair
//! - **Replay**: apply a scripted move list and report the outcome

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod replay;
mod session;

pub use cli::{BoardArgs, Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use input::{Input, InputError, parse_coordinates};
pub use replay::run_replay;
pub use session::{Session, SessionSummary};
