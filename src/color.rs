//! Color state tracking.
//!
//! Remembers the last foreground/background pair written to the terminal and
//! only produces a new SGR sequence when the requested pair differs.
//!
//! Palette indices use the conventional RGB-bit ordering (1 = blue,
//! 4 = red); the terminal numbers its colors the other way round, so each
//! index goes through [`PALETTE_TO_ANSI`] before the 30/40 offset is added.

use serde::Deserialize;

use crate::escape;

/// Maps a palette index (mod 8) to the terminal's color number.
pub const PALETTE_TO_ANSI: [u8; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

/// SGR "normal" attribute, sent ahead of every color change.
const ATTR_NORMAL: u8 = 0;
/// SGR bold/bright.
const ATTR_BOLD: u8 = 1;
/// SGR blink.
const ATTR_BLINK: u8 = 5;

const FG_BASE: u8 = 30;
const BG_BASE: u8 = 40;
const BG_BRIGHT_BASE: u8 = 100;

/// A foreground/background palette pair.
///
/// Foreground spans 0-15 (8-15 are the bright variants), background 0-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: u8,
    pub bg: u8,
}

impl ColorPair {
    pub fn new(fg: u8, bg: u8) -> Self {
        Self { fg, bg }
    }
}

impl Default for ColorPair {
    /// Light gray on black.
    fn default() -> Self {
        Self { fg: 7, bg: 0 }
    }
}

/// How a background index above 7 is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightBackground {
    /// Legacy terminals: the blink attribute stands in for a bright background.
    #[default]
    Blink,
    /// aixterm bright background range (100-107).
    Aixterm,
}

/// Build the SGR parameter list for a pair.
pub fn sgr_params(pair: ColorPair, bright_bg: BrightBackground) -> Vec<u8> {
    let fg = PALETTE_TO_ANSI[usize::from(pair.fg % 8)] + FG_BASE;
    let bg_index = PALETTE_TO_ANSI[usize::from(pair.bg % 8)];

    let mut params = Vec::with_capacity(4);
    let bg = match bright_bg {
        BrightBackground::Blink if pair.bg > 7 => {
            params.push(ATTR_BLINK);
            bg_index + BG_BASE
        }
        BrightBackground::Aixterm if pair.bg > 7 => {
            params.push(ATTR_NORMAL);
            bg_index + BG_BRIGHT_BASE
        }
        _ => {
            params.push(ATTR_NORMAL);
            bg_index + BG_BASE
        }
    };

    if pair.fg > 7 {
        params.push(ATTR_BOLD);
    }
    params.push(fg);
    params.push(bg);
    params
}

/// The SGR sequence that selects `pair`, ignoring any tracked state.
pub fn color_sequence(pair: ColorPair, bright_bg: BrightBackground) -> String {
    escape::sgr(&sgr_params(pair, bright_bg))
}

/// Tracks the color pair last written to the terminal.
///
/// The tracker never reads anything back from the terminal. Sequences
/// written around it (raw SGR codes, [`escape::RESET`]) leave it out of
/// date until [`ColorTracker::forget`] is called.
#[derive(Debug, Clone)]
pub struct ColorTracker {
    current: ColorPair,
    bright_bg: BrightBackground,
}

impl ColorTracker {
    pub fn new(bright_bg: BrightBackground) -> Self {
        Self {
            current: ColorPair::default(),
            bright_bg,
        }
    }

    /// The pair the terminal is believed to be showing.
    pub fn current(&self) -> ColorPair {
        self.current
    }

    /// The sequence that moves the terminal to `pair`, or `None` when the
    /// pair is already current.
    ///
    /// Nothing is recorded; call [`ColorTracker::commit`] once the sequence
    /// has actually been written.
    pub fn sequence_for(&self, pair: ColorPair) -> Option<String> {
        if pair == self.current {
            return None;
        }
        Some(color_sequence(pair, self.bright_bg))
    }

    /// Record `pair` as written.
    pub fn commit(&mut self, pair: ColorPair) {
        self.current = pair;
    }

    /// Go back to the default pair without emitting anything.
    pub fn forget(&mut self) {
        self.current = ColorPair::default();
    }
}

impl Default for ColorTracker {
    fn default() -> Self {
        Self::new(BrightBackground::default())
    }
}
