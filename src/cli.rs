//! Command-line interface definition.
//!
//! Lives in the library so the binary and tests share one definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// ANSI output for interesting CLI apps: cursor, color and screen control.
#[derive(Debug, Parser)]
#[command(name = "ansiout", version, about, long_about = None)]
pub struct Cli {
    /// Load settings from a TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reset text attributes to the terminal default
    Reset,

    /// Clear the entire screen and home the cursor
    Clear,

    /// Clear the line the cursor is on
    ClearLine,

    /// Move the cursor to column X, row Y (1-based)
    MoveTo { x: u16, y: u16 },

    /// Move the cursor up N rows
    Up { n: u16 },

    /// Move the cursor down N rows
    Down { n: u16 },

    /// Move the cursor right N columns
    Right { n: u16 },

    /// Move the cursor left N columns
    Left { n: u16 },

    /// Save the cursor position
    Save,

    /// Restore the saved cursor position
    Restore,

    /// Set foreground (0-15) and background (0-7, 8-15 bright) colors
    Color {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=15))]
        fg: u8,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=15))]
        bg: u8,
    },

    /// Print text in the given colors
    Print {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=15))]
        fg: u8,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=15))]
        bg: u8,
        text: String,
    },

    /// Print text at column X, row Y
    WriteAt { x: u16, y: u16, text: String },

    /// Print a file to the screen line by line
    Cat { file: PathBuf },

    /// Show the spinner for N cycles
    Wait { cycles: u32 },

    /// Report the cursor position as "ROW;COL"
    Where {
        /// Do not switch the terminal to raw mode around the query
        #[arg(long)]
        no_raw: bool,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}
