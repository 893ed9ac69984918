//! Line-oriented file printing.
//!
//! Lines are copied to the terminal one logical line at a time, each
//! followed by `\n`, with one blank line after the last. Printing is
//! independent of the tracked color and cursor state.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::terminal::Terminal;

/// Errors that can occur while printing a file.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("error opening file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("error reading input after {lines} lines: {source}")]
    Read { lines: usize, source: io::Error },

    #[error("error writing to terminal: {0}")]
    Write(io::Error),
}

/// What a successful print wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintSummary {
    /// Logical lines copied
    pub lines: usize,
    /// Content bytes copied, excluding added line terminators
    pub bytes: usize,
}

/// Strip one trailing `\n`, and a `\r` in front of it.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl<W: Write> Terminal<W> {
    /// Print the file at `path` line by line.
    ///
    /// Nothing is written if the file cannot be opened. A read error stops
    /// printing; lines already written stay written.
    pub fn print_file(&mut self, path: &Path) -> Result<PrintSummary, PrintError> {
        let file = File::open(path).map_err(|source| PrintError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let summary = self.print_lines(BufReader::new(file))?;
        debug!(path = %path.display(), lines = summary.lines, "file printed");
        Ok(summary)
    }

    /// Print every line of `reader`, then one blank line.
    ///
    /// A physical line of any length is emitted as one logical line.
    pub fn print_lines<R: BufRead>(&mut self, mut reader: R) -> Result<PrintSummary, PrintError> {
        let mut summary = PrintSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| PrintError::Read {
                    lines: summary.lines,
                    source,
                })?;
            if read == 0 {
                break;
            }

            let line = trim_line_ending(&buf);
            self.write_bytes(line).map_err(PrintError::Write)?;
            self.write_bytes(b"\n").map_err(PrintError::Write)?;
            summary.lines += 1;
            summary.bytes += line.len();
        }

        self.write_bytes(b"\n").map_err(PrintError::Write)?;
        Ok(summary)
    }
}
