//! Whirly-cursor progress indicator.
//!
//! Draws `| / - \` in place, stepping back over the previous glyph with a
//! backspace before drawing the next.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::terminal::Terminal;

/// Glyphs drawn in one cycle.
pub const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

const BACKSPACE: &str = "\x08";

/// Abstracts over `thread::sleep` so tests do not actually wait.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper that uses `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealSleeper;

impl Sleeper for RealSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<W: Write> Terminal<W> {
    /// Spin for `cycles` rounds using the configured frame interval.
    ///
    /// Blocks the calling thread for `4 * cycles` intervals.
    pub fn wait(&mut self, cycles: u32) -> io::Result<()> {
        self.wait_with(cycles, &RealSleeper)
    }

    /// Spin for `cycles` rounds, pausing through `sleeper`.
    pub fn wait_with<S: Sleeper + ?Sized>(&mut self, cycles: u32, sleeper: &S) -> io::Result<()> {
        let interval = self.config().spinner_interval();

        for _ in 0..cycles {
            for (i, glyph) in FRAMES.iter().enumerate() {
                if i > 0 {
                    self.write(BACKSPACE)?;
                }
                self.write(glyph.encode_utf8(&mut [0u8; 4]))?;
                self.flush()?;
                sleeper.sleep(interval);
            }
            self.write(BACKSPACE)?;
        }
        self.flush()
    }
}
