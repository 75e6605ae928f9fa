//! Strictly Games - two-player tic-tac-toe
//!
//! Interactive terminal play plus headless commands that expose the game's
//! render-instruction stream.

#![warn(missing_docs)]

mod cli;
mod config;
mod headless;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            logging::init_file(settings.logging())?;
            tui::run(settings)
        }
        Command::Script { moves, reset } => {
            logging::init_stderr(settings.logging());
            info!(?moves, reset, "Running script");
            headless::run_script(&moves, reset, &mut io::stdout().lock())
        }
        Command::Show { file } => {
            logging::init_stderr(settings.logging());
            let mut out = io::stdout().lock();
            match file {
                Some(path) => {
                    info!(path = %path.display(), "Rendering instruction file");
                    headless::run_show(BufReader::new(File::open(path)?), &settings, &mut out)
                }
                None => headless::run_show(io::stdin().lock(), &settings, &mut out),
            }
        }
    }
}
