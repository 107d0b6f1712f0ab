//! Protocol error types.

use thiserror::Error;

use crate::constants::{MAX_BRIGHTNESS_PERCENT, MAX_ENCODABLE_ALARM_INDEX};

/// Errors that can occur when validating or decoding protocol data.
///
/// The index, time and brightness variants are raised before any byte is
/// sent to the device; [`ProtocolError::ResponseTooShort`] is raised when a
/// response frame does not match the fixed length for its command family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Response frame shorter than the fixed length for the command family.
    #[error("response too short: expected {expected} bytes, got {actual}")]
    ResponseTooShort {
        /// Length the command family defines.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// Alarm index at or beyond the device-reported alarm count.
    #[error("alarm index {index} out of range: device has {count} alarms")]
    AlarmIndexOutOfRange {
        /// Zero-based index requested.
        index: u8,
        /// Alarm count reported by the device.
        count: u8,
    },

    /// Alarm index cannot be encoded as a single ASCII digit.
    ///
    /// Raised when the device reports more than 10 alarms and an index
    /// beyond [`MAX_ENCODABLE_ALARM_INDEX`] is requested.
    #[error("alarm index {index} exceeds the single-digit wire limit of {}", MAX_ENCODABLE_ALARM_INDEX)]
    AlarmIndexNotEncodable {
        /// Zero-based index requested.
        index: u8,
    },

    /// A time field is outside its valid range.
    #[error("invalid {field}: {value} (max {max})")]
    InvalidTime {
        /// Which field failed ("hour", "minute" or "second").
        field: &'static str,
        /// Value supplied.
        value: u8,
        /// Largest valid value for the field.
        max: u8,
    },

    /// Brightness percentage above 100.
    #[error("invalid brightness: {percent}% (max {})", MAX_BRIGHTNESS_PERCENT)]
    InvalidBrightness {
        /// Percentage supplied.
        percent: u8,
    },
}
