//! Blocking byte channel with partial-transfer retry helpers.
//!
//! Real serial devices legally move fewer bytes than requested per call.
//! The helpers here repeat the operation, advancing through the buffer,
//! until the full length is transferred or the deadline expires.

use std::io;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// A blocking duplex byte channel.
///
/// A single call may transfer fewer bytes than requested; callers must
/// never assume atomic full-frame I/O. Implementations with an internal
/// per-call timeout report expiry as [`io::ErrorKind::TimedOut`], which the
/// helpers below count against the overall deadline.
pub trait Channel {
    /// Write up to `buf.len()` bytes, returning how many were accepted.
    fn send(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Read up to `buf.len()` bytes, returning how many arrived. Zero means
    /// end of stream.
    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Write all of `buf`, accumulating partial writes, within `timeout`.
pub fn write_all<C: Channel + ?Sized>(
    channel: &mut C,
    buf: &[u8],
    timeout: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;
    let mut written = 0;
    while written < buf.len() {
        match channel.send(&buf[written..]) {
            Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero).into()),
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                if Instant::now() >= deadline {
                    return Err(Error::Timeout { waited: timeout });
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Read exactly `buf.len()` bytes, accumulating partial reads, within
/// `timeout`. End of stream before the buffer fills is an error.
pub fn read_exact<C: Channel + ?Sized>(
    channel: &mut C,
    buf: &mut [u8],
    timeout: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;
    let mut filled = 0;
    while filled < buf.len() {
        match channel.recv(&mut buf[filled..]) {
            Ok(0) => return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into()),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                if Instant::now() >= deadline {
                    return Err(Error::Timeout { waited: timeout });
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
