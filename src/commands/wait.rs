//! `wait` subcommand handler

use std::io::Write;

use anyhow::{Context, Result};

use ansiout::Terminal;

/// Show the spinner for `cycles` rounds.
#[cfg(not(tarpaulin_include))]
pub fn handle<W: Write>(term: &mut Terminal<W>, cycles: u32) -> Result<()> {
    term.wait(cycles).context("Failed to draw spinner")
}
