//! Cursor position queries.
//!
//! - `scanner`: finite-state scanner for the `ESC [ row ; col R` reply
//! - `source`: the `KeySource` trait, scripted keys and cancellation
//! - `reader`: a threaded key source over stdin (or any reader)
//! - `query`: `Terminal::query_cursor_position`

mod error;
mod query;
mod reader;
mod scanner;
mod source;

pub use error::CursorError;
pub use reader::ThreadedKeys;
pub use scanner::{scan_keys, CursorPosition, ReplyScanner, Step};
pub use source::{CancelToken, KeySource, ScriptedKeys};
