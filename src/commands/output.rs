//! Screen, cursor and color subcommand handlers.
//!
//! Each handler writes its sequence and leaves flushing to the caller.

use std::io::Write;

use anyhow::{Context, Result};

use ansiout::Terminal;

/// Cursor movement directions accepted by `handle_move`.
#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

pub fn handle_reset<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.reset().context("Failed to reset attributes")
}

pub fn handle_clear<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.clear_screen().context("Failed to clear screen")
}

pub fn handle_clear_line<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.clear_line().context("Failed to clear line")
}

pub fn handle_move_to<W: Write>(term: &mut Terminal<W>, x: u16, y: u16) -> Result<()> {
    term.move_to(x, y).context("Failed to move cursor")
}

pub fn handle_move<W: Write>(term: &mut Terminal<W>, direction: Direction, n: u16) -> Result<()> {
    let result = match direction {
        Direction::Up => term.move_up(n),
        Direction::Down => term.move_down(n),
        Direction::Right => term.move_right(n),
        Direction::Left => term.move_left(n),
    };
    result.with_context(|| format!("Failed to move cursor {:?}", direction))
}

pub fn handle_save<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.save_cursor().context("Failed to save cursor")
}

pub fn handle_restore<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.restore_cursor().context("Failed to restore cursor")
}

pub fn handle_color<W: Write>(term: &mut Terminal<W>, fg: u8, bg: u8) -> Result<()> {
    term.set_color(fg, bg).context("Failed to set colors")
}

pub fn handle_print<W: Write>(term: &mut Terminal<W>, fg: u8, bg: u8, text: &str) -> Result<()> {
    term.print_colored(fg, bg, text)
        .context("Failed to print text")
}

pub fn handle_write_at<W: Write>(term: &mut Terminal<W>, x: u16, y: u16, text: &str) -> Result<()> {
    term.write_at(text, x, y).context("Failed to print text")
}
