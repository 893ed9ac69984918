//! Cursor position report scanner.
//!
//! Scans the terminal's `ESC [ <row> ; <col> R` reply one key code at a
//! time. Key codes that arrive before the escape byte are treated as stray
//! input and skipped.

use super::error::CursorError;

const ESC: u32 = 0x1b;
const BRACKET: u32 = b'[' as u32;
const SEPARATOR: u32 = b';' as u32;
const TERMINATOR: u32 = b'R' as u32;

/// A cursor position as reported by the terminal (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub row: u16,
    pub col: u16,
}

impl CursorPosition {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitEscape,
    AwaitBracket,
    Accumulate,
    Done,
}

/// Outcome of feeding one key code to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// More input is needed
    Pending,
    /// The reply is complete and parsed
    Complete(CursorPosition),
}

/// Finite-state scanner for a single cursor position reply.
#[derive(Debug, Clone)]
pub struct ReplyScanner {
    state: State,
    body: String,
}

impl ReplyScanner {
    pub fn new() -> Self {
        Self {
            state: State::AwaitEscape,
            body: String::new(),
        }
    }

    /// Whether a complete reply has been seen.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Feed the next key code.
    ///
    /// Feeding after completion or after a malformed reply starts over.
    pub fn feed(&mut self, key: u32) -> Result<Step, CursorError> {
        match self.state {
            State::Done => {
                *self = Self::new();
                self.feed(key)
            }
            State::AwaitEscape => {
                if key == ESC {
                    self.state = State::AwaitBracket;
                }
                Ok(Step::Pending)
            }
            State::AwaitBracket => {
                self.state = match key {
                    BRACKET => State::Accumulate,
                    ESC => State::AwaitBracket,
                    _ => State::AwaitEscape,
                };
                Ok(Step::Pending)
            }
            State::Accumulate => match char::from_u32(key) {
                Some(c) if c.is_ascii_digit() || key == SEPARATOR => {
                    self.body.push(c);
                    Ok(Step::Pending)
                }
                _ if key == TERMINATOR => {
                    self.state = State::Done;
                    parse_body(&self.body).map(Step::Complete)
                }
                _ => {
                    let mut reply = std::mem::take(&mut self.body);
                    reply.push(char::from_u32(key).unwrap_or(char::REPLACEMENT_CHARACTER));
                    self.state = State::AwaitEscape;
                    Err(CursorError::Malformed { reply })
                }
            },
        }
    }
}

impl Default for ReplyScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `digits ';' digits`.
fn parse_body(body: &str) -> Result<CursorPosition, CursorError> {
    let malformed = || CursorError::Malformed {
        reply: body.to_string(),
    };

    let (row, col) = body.split_once(';').ok_or_else(malformed)?;
    let row = row.parse::<u16>().map_err(|_| malformed())?;
    let col = col.parse::<u16>().map_err(|_| malformed())?;
    Ok(CursorPosition::new(row, col))
}

/// Scan a complete key sequence, returning the first reply found.
///
/// Returns `Ok(None)` if the keys run out before a reply completes.
pub fn scan_keys<I>(keys: I) -> Result<Option<CursorPosition>, CursorError>
where
    I: IntoIterator<Item = u32>,
{
    let mut scanner = ReplyScanner::new();
    for key in keys {
        if let Step::Complete(pos) = scanner.feed(key)? {
            return Ok(Some(pos));
        }
    }
    Ok(None)
}
