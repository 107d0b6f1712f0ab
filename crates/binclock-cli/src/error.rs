//! Error types for transport and session failures.

use std::time::Duration;

use thiserror::Error;

use binclock_protocol::ProtocolError;

/// Errors raised while talking to the clock.
#[derive(Debug, Error)]
pub enum Error {
    /// Read or write failure on the transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure opening or configuring the serial port.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// Validation or decoding failure in the protocol layer.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A transfer did not complete within the round-trip deadline.
    ///
    /// The wire protocol has no timeout of its own and no error frames;
    /// without this bound a silent device blocks the caller forever.
    #[error("device did not respond within {waited:?}")]
    Timeout {
        /// The deadline that expired.
        waited: Duration,
    },
}

/// Result alias for session and transport operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure was caught client-side before any byte reached
    /// the device. Validation failures are non-fatal to the process.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Protocol(
                ProtocolError::AlarmIndexOutOfRange { .. }
                    | ProtocolError::AlarmIndexNotEncodable { .. }
                    | ProtocolError::InvalidTime { .. }
                    | ProtocolError::InvalidBrightness { .. }
            )
        )
    }
}
