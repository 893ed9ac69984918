//! ANSI output library.
//!
//! Emits ANSI escape sequences for cursor movement, screen and line
//! clearing, and colors, and keeps track of the color pair last written so
//! unchanged colors are not sent twice.
//!
//! # Usage
//!
//! ```
//! use ansiout::Terminal;
//!
//! let mut term = Terminal::new(Vec::new());
//! term.clear_screen().unwrap();
//! term.print_colored(14, 1, "warning").unwrap();
//! term.print_colored(14, 1, "!").unwrap(); // colors unchanged, nothing re-sent
//! let out = term.into_inner();
//! assert!(out.ends_with(b"\x1b[0;1;33;44mwarning!"));
//! ```
//!
//! # Modules
//!
//! - `escape`: pure escape sequence formatting
//! - `color`: palette mapping and the color state tracker
//! - `terminal`: the `Terminal` handle that owns sink and color state
//! - `cursor`: cursor position queries over a key source
//! - `printer`: line-oriented file printing
//! - `spinner`: the `wait` progress indicator

pub mod cli;
pub mod color;
pub mod config;
pub mod cursor;
pub mod escape;
pub mod printer;
pub mod spinner;
pub mod terminal;

#[cfg(test)]
mod test_support;

pub use color::{BrightBackground, ColorPair};
pub use config::Config;
pub use cursor::{CancelToken, CursorError, CursorPosition, KeySource};
pub use escape::ClearMode;
pub use printer::{PrintError, PrintSummary};
pub use terminal::{SharedTerminal, Terminal};
