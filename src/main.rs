use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rand::thread_rng;

mod engine;
mod error;
mod tui;
mod vim2048;

use engine::board::Board;
use tui::crossterm::{Crossterm, CrosstermEvents};
use vim2048::Vim2048;

/// Slide equal numbers together on a 5x5 grid using the vim navigation keys.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Write diagnostics to this file; nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Draw tiles without colors.
    #[arg(long)]
    no_color: bool,
}

fn setup_logger(cli: &Cli) -> error::Result<()> {
    let path = match &cli.log_file {
        Some(path) => path,
        None => return Ok(()),
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(cli.verbose.log_level_filter())
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(&cli)?;

    let board = Board::new(thread_rng());
    let w = stdout().lock();
    let renderer = Crossterm::new(Box::new(w), !cli.no_color)?;
    let event_source = CrosstermEvents::default();
    log::info!("starting");

    Vim2048::new(board, renderer, event_source).run()?;
    Ok(())
}
