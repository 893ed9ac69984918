//! Helpers shared by unit tests: parse emitted bytes back into CSI actions.

use vte::{Params, Parser, Perform};

/// One parsed `ESC [ ... <action>` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsiAction {
    pub params: Vec<u16>,
    pub action: char,
}

impl CsiAction {
    pub fn new(params: Vec<u16>, action: char) -> Self {
        Self { params, action }
    }
}

#[derive(Default)]
struct Collector {
    actions: Vec<CsiAction>,
    text: String,
}

impl Perform for Collector {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        let params = params.iter().flat_map(|p| p.iter().copied()).collect();
        self.actions.push(CsiAction::new(params, action));
    }
}

/// All CSI sequences found in `bytes`, in order.
pub fn csi_actions(bytes: &[u8]) -> Vec<CsiAction> {
    let mut collector = Collector::default();
    Parser::new().advance(&mut collector, bytes);
    collector.actions
}

/// The printable text in `bytes` with every escape sequence removed.
pub fn printable_text(bytes: &[u8]) -> String {
    let mut collector = Collector::default();
    Parser::new().advance(&mut collector, bytes);
    collector.text
}
