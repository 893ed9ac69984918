//! The terminal output handle.
//!
//! [`Terminal`] owns the output sink together with the color state that
//! belongs to it, so every write that changes colors goes through one place.
//! [`SharedTerminal`] wraps it for callers that write from several threads.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::color::{ColorPair, ColorTracker};
use crate::config::Config;
use crate::escape::{self, ClearMode};

/// An output sink plus the color state last written to it.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
    colors: ColorTracker,
    config: Config,
}

impl Terminal<io::Stdout> {
    /// Terminal on the process's standard output with default config.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, Config::default())
    }

    pub fn with_config(out: W, config: Config) -> Self {
        Self {
            out,
            colors: ColorTracker::new(config.bright_background),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The color pair the terminal is believed to be showing.
    pub fn current_color(&self) -> ColorPair {
        self.colors.current()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the terminal and hand back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, seq: &str) -> io::Result<()> {
        self.out.write_all(seq.as_bytes())
    }

    /// Write `text` verbatim.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.emit(text)
    }

    /// Write raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    // Screen and line clearing

    /// Reset text attributes to the terminal default.
    ///
    /// The tracked color pair is left alone; see [`Terminal::forget_color`].
    pub fn reset(&mut self) -> io::Result<()> {
        self.emit(escape::RESET)
    }

    pub fn clear(&mut self, mode: ClearMode) -> io::Result<()> {
        self.emit(&escape::clear(mode))
    }

    /// Clear the whole screen, then home the cursor.
    ///
    /// Two sequences because not every emulator homes the cursor on `2J`.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.clear(ClearMode::All)?;
        self.move_to(1, 1)
    }

    /// Clear the line the cursor is on.
    pub fn clear_line(&mut self) -> io::Result<()> {
        self.clear_line_mode(ClearMode::All)
    }

    pub fn clear_line_mode(&mut self, mode: ClearMode) -> io::Result<()> {
        self.emit(&escape::clear_line(mode))
    }

    // Cursor movement

    /// Put the cursor at 1-based column `x`, row `y`.
    pub fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.emit(&escape::move_to(x, y))
    }

    pub fn move_up(&mut self, n: u16) -> io::Result<()> {
        self.emit(&escape::move_up(n))
    }

    pub fn move_down(&mut self, n: u16) -> io::Result<()> {
        self.emit(&escape::move_down(n))
    }

    pub fn move_right(&mut self, n: u16) -> io::Result<()> {
        self.emit(&escape::move_right(n))
    }

    pub fn move_left(&mut self, n: u16) -> io::Result<()> {
        self.emit(&escape::move_left(n))
    }

    /// Save the cursor position. A second save overwrites the first.
    pub fn save_cursor(&mut self) -> io::Result<()> {
        self.emit(escape::SAVE_CURSOR)
    }

    pub fn restore_cursor(&mut self) -> io::Result<()> {
        self.emit(escape::RESTORE_CURSOR)
    }

    /// Move to `(x, y)` and write `text` there. No newline is added.
    pub fn write_at(&mut self, text: &str, x: u16, y: u16) -> io::Result<()> {
        self.move_to(x, y)?;
        self.emit(text)
    }

    // Colors

    /// Select foreground `fg` (0-15) and background `bg` (0-7).
    ///
    /// Nothing is written when the pair is already current. The pair only
    /// becomes current once its sequence has been written, so a failed
    /// write can be retried.
    pub fn set_color(&mut self, fg: u8, bg: u8) -> io::Result<()> {
        let pair = ColorPair::new(fg, bg);
        match self.colors.sequence_for(pair) {
            Some(seq) => {
                self.emit(&seq)?;
                self.colors.commit(pair);
                debug!(fg, bg, "color changed");
                Ok(())
            }
            None => {
                debug!(fg, bg, "color unchanged");
                Ok(())
            }
        }
    }

    /// Select colors, then write `text` verbatim.
    pub fn print_colored(&mut self, fg: u8, bg: u8, text: &str) -> io::Result<()> {
        self.set_color(fg, bg)?;
        self.emit(text)
    }

    /// Mark the default pair as current without writing anything.
    ///
    /// Use after writing color codes that bypassed this terminal.
    pub fn forget_color(&mut self) {
        self.colors.forget();
    }
}

/// A [`Terminal`] behind a mutex, cloneable across threads.
#[derive(Debug)]
pub struct SharedTerminal<W: Write> {
    inner: Arc<Mutex<Terminal<W>>>,
}

impl<W: Write> SharedTerminal<W> {
    pub fn new(terminal: Terminal<W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(terminal)),
        }
    }

    /// Lock the terminal for a run of writes.
    ///
    /// A lock poisoned by a panicking writer is recovered; the color state
    /// may then be stale, which is the same risk as any bypassing write.
    pub fn lock(&self) -> MutexGuard<'_, Terminal<W>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering from poisoned terminal lock");
            poisoned.into_inner()
        })
    }
}

impl<W: Write> Clone for SharedTerminal<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
