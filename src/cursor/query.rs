//! Cursor position query.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::error::CursorError;
use super::scanner::{CursorPosition, ReplyScanner, Step};
use super::source::{CancelToken, KeySource};
use crate::escape;
use crate::terminal::Terminal;

/// Longest single wait on the key source, so cancellation is noticed.
const POLL_SLICE: Duration = Duration::from_millis(50);

impl<W: Write> Terminal<W> {
    /// Ask the terminal to report the cursor position (`ESC[6n`).
    pub fn request_cursor_position(&mut self) -> io::Result<()> {
        self.write(escape::REQUEST_CURSOR_POSITION)?;
        self.flush()
    }

    /// Query the cursor position and wait for the terminal's reply.
    ///
    /// Key codes are pulled from `keys` until a complete reply is scanned,
    /// the configured cursor timeout passes, or `cancel` is triggered.
    /// The terminal must already be delivering input unbuffered (raw mode).
    pub fn query_cursor_position<K: KeySource>(
        &mut self,
        keys: &mut K,
        cancel: &CancelToken,
    ) -> Result<CursorPosition, CursorError> {
        let timeout = self.config().cursor_timeout();
        self.request_cursor_position()?;
        debug!(?timeout, "cursor position requested");

        let deadline = Instant::now() + timeout;
        let mut scanner = ReplyScanner::new();

        loop {
            if cancel.is_cancelled() {
                debug!("cursor position query cancelled");
                return Err(CursorError::Cancelled);
            }

            let now = Instant::now();
            if now >= deadline {
                warn!(?timeout, "no cursor position reply");
                return Err(CursorError::Timeout { after: timeout });
            }

            let key = match keys.next_key((deadline - now).min(POLL_SLICE)) {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(CursorError::Disconnected);
                }
                Err(e) => return Err(e.into()),
            };

            match scanner.feed(key) {
                Ok(Step::Complete(pos)) => {
                    debug!(row = pos.row, col = pos.col, "cursor position reported");
                    return Ok(pos);
                }
                Ok(Step::Pending) => {}
                Err(e) => {
                    warn!(error = %e, "bad cursor position reply");
                    return Err(e);
                }
            }
        }
    }
}
