//! `where` subcommand handler

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use ansiout::cursor::ThreadedKeys;
use ansiout::{CancelToken, CursorPosition, KeySource, Terminal};

/// Ctrl-C as it arrives in raw mode.
const ETX: u32 = 0x03;

/// Keeps the terminal in raw mode until dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode (is stdin a terminal?)")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Ignore errors (best effort restore)
        let _ = disable_raw_mode();
    }
}

/// Raw mode swallows SIGINT, so Ctrl-C shows up as a key. Treat it as cancel.
struct InterruptibleKeys<K> {
    inner: K,
    cancel: CancelToken,
}

impl<K: KeySource> KeySource for InterruptibleKeys<K> {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<u32>> {
        let key = self.inner.next_key(timeout)?;
        if key == Some(ETX) {
            self.cancel.cancel();
            return Ok(None);
        }
        Ok(key)
    }
}

/// Ask the terminal for the cursor position and print it as `ROW;COL`.
#[cfg(not(tarpaulin_include))]
pub fn handle<W: Write>(term: &mut Terminal<W>, no_raw: bool) -> Result<()> {
    let cancel = CancelToken::new();
    let on_signal = cancel.clone();
    ctrlc::set_handler(move || on_signal.cancel()).context("Failed to install Ctrl-C handler")?;

    let mut keys = InterruptibleKeys {
        inner: ThreadedKeys::stdin().context("Failed to start key reader")?,
        cancel: cancel.clone(),
    };

    let position = {
        let _raw = if no_raw {
            None
        } else {
            Some(RawModeGuard::enable()?)
        };
        term.query_cursor_position(&mut keys, &cancel)
    }
    .context("Failed to read cursor position")?;

    report(term, position)
}

fn report<W: Write>(term: &mut Terminal<W>, position: CursorPosition) -> Result<()> {
    term.write(&format!("{};{}\n", position.row, position.col))
        .context("Failed to write cursor position")
}
