//! `ansiout` command-line entry point.

mod commands;
mod telemetry;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ansiout::cli::{Cli, Commands};
use ansiout::{Config, Terminal};
use commands::output::Direction;

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");
    let mut term = Terminal::with_config(io::stdout().lock(), config);

    match cli.command {
        Commands::Reset => commands::output::handle_reset(&mut term)?,
        Commands::Clear => commands::output::handle_clear(&mut term)?,
        Commands::ClearLine => commands::output::handle_clear_line(&mut term)?,
        Commands::MoveTo { x, y } => commands::output::handle_move_to(&mut term, x, y)?,
        Commands::Up { n } => commands::output::handle_move(&mut term, Direction::Up, n)?,
        Commands::Down { n } => commands::output::handle_move(&mut term, Direction::Down, n)?,
        Commands::Right { n } => commands::output::handle_move(&mut term, Direction::Right, n)?,
        Commands::Left { n } => commands::output::handle_move(&mut term, Direction::Left, n)?,
        Commands::Save => commands::output::handle_save(&mut term)?,
        Commands::Restore => commands::output::handle_restore(&mut term)?,
        Commands::Color { fg, bg } => commands::output::handle_color(&mut term, fg, bg)?,
        Commands::Print { fg, bg, text } => {
            commands::output::handle_print(&mut term, fg, bg, &text)?
        }
        Commands::WriteAt { x, y, text } => {
            commands::output::handle_write_at(&mut term, x, y, &text)?
        }
        Commands::Cat { file } => commands::cat::handle(&mut term, &file)?,
        Commands::Wait { cycles } => commands::wait::handle(&mut term, cycles)?,
        Commands::Where { no_raw } => commands::cursor_query::handle(&mut term, no_raw)?,
        Commands::Completions { shell } => commands::completions::handle(shell, &mut io::stdout())?,
    }

    term.flush().context("Failed to flush stdout")
}

fn main() -> ExitCode {
    telemetry::init_tracing("warn");

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ansiout: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
