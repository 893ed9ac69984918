//! `cat` subcommand handler

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use ansiout::Terminal;

/// Print a file to the terminal.
///
/// An unreadable file is reported as an error; nothing is written for it.
pub fn handle<W: Write>(term: &mut Terminal<W>, file: &Path) -> Result<()> {
    term.print_file(file)?;
    Ok(())
}
