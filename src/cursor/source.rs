//! Key input sources and cancellation.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Something that delivers decoded key codes one at a time.
///
/// The cursor reader needs the terminal's reply bytes untouched: the escape
/// byte, `[`, digits, `;` and the final `R`.
pub trait KeySource {
    /// Wait up to `timeout` for the next key code.
    ///
    /// Returns `Ok(None)` when nothing arrived in time. A source that can
    /// never produce another key returns an `UnexpectedEof` error.
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<u32>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<u32>> {
        (**self).next_key(timeout)
    }
}

/// Replays a fixed list of key codes, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<u32>,
}

impl ScriptedKeys {
    pub fn new<I: IntoIterator<Item = u32>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script the bytes of `s` as key codes.
    pub fn from_bytes(s: &[u8]) -> Self {
        Self::new(s.iter().map(|&b| u32::from(b)))
    }

    /// Key codes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self, _timeout: Duration) -> io::Result<Option<u32>> {
        self.keys
            .pop_front()
            .map(Some)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}

/// A shared flag that asks a blocking query to give up.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_keys_replay_in_order_then_end() {
        let mut keys = ScriptedKeys::from_bytes(b"ab");
        assert_eq!(keys.next_key(Duration::ZERO).unwrap(), Some(u32::from(b'a')));
        assert_eq!(keys.next_key(Duration::ZERO).unwrap(), Some(u32::from(b'b')));
        let err = keys.next_key(Duration::ZERO).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }
}
