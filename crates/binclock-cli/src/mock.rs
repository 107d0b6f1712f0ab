//! Programmable in-memory channel for testing.
//!
//! [`MockChannel`] lets protocol logic be tested in isolation: queue the
//! bytes the device would send, run the operation, then inspect exactly
//! which bytes were written. A per-call transfer cap exercises the
//! partial-I/O paths the way a real serial device does.

use std::collections::VecDeque;
use std::io;

use crate::channel::Channel;

/// Mock [`Channel`] that records writes and replays queued responses.
#[derive(Debug, Default)]
pub struct MockChannel {
    /// Bytes queued for `recv`.
    responses: VecDeque<u8>,
    /// Every byte accepted by `send`, in order.
    sent: Vec<u8>,
    /// Max bytes moved per call; `None` means whatever the caller asked for.
    chunk_limit: Option<usize>,
    /// When true, an exhausted `recv` times out instead of reporting end of
    /// stream, imitating a device that never answers.
    silent: bool,
}

impl MockChannel {
    /// A channel that transfers whole buffers in one call.
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel that moves at most `limit` bytes per call.
    pub fn with_chunk_limit(limit: usize) -> Self {
        MockChannel {
            chunk_limit: Some(limit),
            ..Self::default()
        }
    }

    /// A channel that never produces data: `recv` returns
    /// [`io::ErrorKind::TimedOut`] once the queue is empty.
    pub fn silent() -> Self {
        MockChannel {
            silent: true,
            ..Self::default()
        }
    }

    /// Queue bytes to be returned by later `recv` calls.
    pub fn push_response(&mut self, bytes: &[u8]) {
        self.responses.extend(bytes);
    }

    /// All bytes written so far, in order.
    pub fn sent(&self) -> &[u8] {
        &self.sent
    }

    fn cap(&self, len: usize) -> usize {
        self.chunk_limit.map_or(len, |limit| limit.min(len))
    }
}

impl Channel for MockChannel {
    fn send(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.cap(buf.len());
        self.sent.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.responses.is_empty() {
            if self.silent {
                return Err(io::ErrorKind::TimedOut.into());
            }
            return Ok(0);
        }
        let n = self.cap(buf.len()).min(self.responses.len());
        for slot in &mut buf[..n] {
            *slot = self.responses.pop_front().unwrap_or(0);
        }
        Ok(n)
    }
}
