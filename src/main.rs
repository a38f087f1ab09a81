//! Sano - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use sano::{BoardArgs, Cli, Command, GameConfig, Session, run_replay};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { board } => run_play(&board),
        Command::Replay { board, moves } => {
            let config = load_config(&board)?;
            run_replay(&config, &moves, std::io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run a hot-seat game on this terminal
#[instrument(skip_all)]
fn run_play(args: &BoardArgs) -> Result<()> {
    let config = load_config(args)?;
    info!(size = config.size(), first_piece = %config.first_piece(), "Starting game");

    let session = Session::new(config, std::io::stdin().lock(), std::io::stdout().lock())?;
    let summary = session.run()?;

    println!("Wins: {}  Draws: {}", summary.wins, summary.draws);
    Ok(())
}

#[instrument(skip(args), fields(config_path = %args.config.display()))]
fn load_config(args: &BoardArgs) -> Result<GameConfig> {
    info!("Loading game configuration");
    let config = GameConfig::load_or_default(&args.config)?.with_overrides(args.size, args.first_piece);
    Ok(config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,sano=info,sano_board=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
