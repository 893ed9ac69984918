//! Cursor query errors.

use std::time::Duration;

/// Errors that can occur while asking the terminal for the cursor position.
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    #[error("Malformed cursor position reply: {reply:?}")]
    Malformed { reply: String },

    #[error("No cursor position reply within {after:?}")]
    Timeout { after: Duration },

    #[error("Cursor position query cancelled")]
    Cancelled,

    #[error("Key source closed before the cursor position reply arrived")]
    Disconnected,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
