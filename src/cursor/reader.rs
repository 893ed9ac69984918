//! Background byte reader used as a key source.
//!
//! Reading stdin blocks with no way to time out, so a dedicated thread does
//! the blocking reads and hands each byte over a channel. The channel's
//! `recv_timeout` then gives [`KeySource::next_key`] its deadline.
//!
//! Handles are cheap clones of one channel. Bytes a query does not consume
//! stay queued for the next handle, so typeahead after a reply survives.

use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use super::source::KeySource;

type KeyChannel = Receiver<io::Result<u8>>;

/// The one reader thread on standard input, started on first use.
static STDIN_KEYS: Mutex<Option<ThreadedKeys>> = Mutex::new(None);

/// Key source fed by a reader thread, one byte per key code.
#[derive(Debug, Clone)]
pub struct ThreadedKeys {
    rx: Arc<Mutex<KeyChannel>>,
}

impl ThreadedKeys {
    /// Read keys from the process's standard input.
    ///
    /// Every call returns a handle to the same reader thread, so successive
    /// queries never race each other for input.
    pub fn stdin() -> io::Result<Self> {
        let mut slot = STDIN_KEYS.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(keys) = slot.as_ref() {
            return Ok(keys.clone());
        }
        let keys = Self::from_reader(io::stdin())?;
        *slot = Some(keys.clone());
        Ok(keys)
    }

    /// Read keys from any blocking reader.
    ///
    /// The reader thread exits at end of input, on a read error, or once
    /// every handle is dropped and its next byte has nowhere to go.
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("ansiout-keys".to_string())
            .spawn(move || reader_loop(reader, tx))?;
        Ok(Self {
            rx: Arc::new(Mutex::new(rx)),
        })
    }

    fn channel(&self) -> MutexGuard<'_, KeyChannel> {
        self.rx.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reader_loop<R: Read>(mut reader: R, tx: Sender<io::Result<u8>>) {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                if tx.send(Ok(byte[0])).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                // Ignore send errors (receiver may be gone)
                let _ = tx.send(Err(e));
                break;
            }
        }
    }
}

impl KeySource for ThreadedKeys {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<u32>> {
        match self.channel().recv_timeout(timeout) {
            Ok(Ok(byte)) => Ok(Some(u32::from(byte))),
            Ok(Err(e)) => Err(e),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "key input closed",
            )),
        }
    }
}
