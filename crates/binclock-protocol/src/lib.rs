//! Binary Clock Serial Protocol
//!
//! This crate provides types and utilities for talking to a binary clock's
//! microcontroller over its serial interface. The protocol is a set of short
//! fixed-length frames keyed by a leading command-family byte; there are no
//! length prefixes, no delimiters and no checksums.
//!
//! # Protocol Overview
//!
//! - **Commands** (host → clock): 1 to 8 bytes, starting with the family byte
//!   (`a` alarms, `s` clock time, `b` brightness, `t` temperature, `x`
//!   self-test). Numeric fields are zero-padded ASCII decimal, except the
//!   brightness value which is a raw binary byte.
//! - **Responses** (clock → host): a fixed number of raw bytes per command
//!   family. The stream is not self-describing; the reader must know the
//!   expected length before the read starts. Many commands have no response
//!   at all, and there is no error frame - a failed command looks exactly
//!   like a successful one on the wire.
//!
//! # Example
//!
//! ```rust,ignore
//! use binclock_protocol::{AlarmIndex, Command, Response};
//!
//! let index = AlarmIndex::new(3, alarm_count)?;
//! let cmd = Command::ReadAlarm { index };
//! let frame = cmd.encode();              // b"ar3"
//! let want = cmd.response_len();         // 4
//!
//! // ...write frame, read exactly `want` bytes...
//! let response = cmd.decode_response(&received)?;
//! ```

mod commands;
mod constants;
mod error;
mod responses;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use responses::*;
pub use types::*;
