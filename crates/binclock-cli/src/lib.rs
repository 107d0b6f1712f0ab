//! Host-side session and transport for the binary clock serial protocol.
//!
//! [`session::ClockSession`] owns a byte channel exclusively and maps each
//! user-facing operation to one or more strictly sequential write-then-read
//! round-trips. [`channel`] provides the partial-I/O retry helpers, and
//! [`serial`] the real serial-port channel. [`mock`] is a programmable
//! in-memory channel for testing against the protocol without hardware.

pub mod channel;
pub mod error;
pub mod mock;
pub mod serial;
pub mod session;

pub use error::{Error, Result};
pub use session::ClockSession;
