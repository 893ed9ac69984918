//! ANSI escape sequence formatting.
//!
//! Every sequence produced here has the shape `ESC [ <params> <final>`.
//! The functions are pure: they build the sequence and leave writing to
//! [`Terminal`](crate::Terminal).

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Reset all attributes to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Save the cursor position into the terminal's single slot.
pub const SAVE_CURSOR: &str = "\x1b[s";

/// Restore the cursor position from the terminal's single slot.
pub const RESTORE_CURSOR: &str = "\x1b[u";

/// Device Status Report: ask the terminal where the cursor is.
pub const REQUEST_CURSOR_POSITION: &str = "\x1b[6n";

/// Which part of the screen or line an erase sequence clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    /// From the cursor to the end of the screen/line
    ToEnd = 0,
    /// From the beginning of the screen/line to the cursor
    ToStart = 1,
    /// The whole screen/line
    All = 2,
}

impl ClearMode {
    /// Numeric parameter used on the wire.
    pub fn param(self) -> u8 {
        self as u8
    }
}

/// Erase in display (`ESC[<n>J`).
pub fn clear(mode: ClearMode) -> String {
    format!("{}{}J", CSI, mode.param())
}

/// Erase in line (`ESC[<n>K`).
pub fn clear_line(mode: ClearMode) -> String {
    format!("{}{}K", CSI, mode.param())
}

/// Cursor position for 1-based column `x` and row `y`.
///
/// The wire order is row first: `ESC[<y>;<x>H`.
pub fn move_to(x: u16, y: u16) -> String {
    format!("{}{};{}H", CSI, y, x)
}

/// Cursor up by `n` rows.
pub fn move_up(n: u16) -> String {
    format!("{}{}A", CSI, n)
}

/// Cursor down by `n` rows.
pub fn move_down(n: u16) -> String {
    format!("{}{}B", CSI, n)
}

/// Cursor forward by `n` columns.
pub fn move_right(n: u16) -> String {
    format!("{}{}C", CSI, n)
}

/// Cursor back by `n` columns.
pub fn move_left(n: u16) -> String {
    format!("{}{}D", CSI, n)
}

/// Select Graphic Rendition with a list of already-formatted parameters.
pub fn sgr(params: &[u8]) -> String {
    let joined = params
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(";");
    format!("{}{}m", CSI, joined)
}
