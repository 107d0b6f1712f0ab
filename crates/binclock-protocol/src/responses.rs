//! Responses read back from the clock.

use log::trace;

use crate::commands::Command;
use crate::error::ProtocolError;
use crate::types::*;

/// Decoded response for one command round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Number of alarms the device supports.
    AlarmCount(u8),

    /// One alarm's time and flags.
    Alarm(AlarmState),

    /// Current clock time.
    ClockTime(TimeOfDay),

    /// Current display brightness.
    Brightness(BrightnessLevel),

    /// The command defines no response.
    None,
}

impl Command {
    /// Decode the fixed-length response frame for this command.
    ///
    /// The response length is determined by the command, never by the frame
    /// itself; `frame` must hold at least [`Command::response_len`] bytes.
    /// Fire-and-forget commands decode an empty frame to [`Response::None`].
    pub fn decode_response(&self, frame: &[u8]) -> Result<Response, ProtocolError> {
        let expected = self.response_len();
        if frame.len() < expected {
            return Err(ProtocolError::ResponseTooShort {
                expected,
                actual: frame.len(),
            });
        }
        trace!("decode {:?} response: {:02x?}", self.family() as char, frame);

        match self {
            Command::QueryAlarmCount => Ok(Response::AlarmCount(frame[0])),

            Command::ReadAlarm { .. } => Ok(Response::Alarm(AlarmState::from_device_bytes(
                frame[0], frame[1], frame[2], frame[3],
            ))),

            Command::ReadClock => Ok(Response::ClockTime(TimeOfDay::from_device_bytes(
                frame[0], frame[1], frame[2],
            ))),

            Command::ReadBrightness => {
                Ok(Response::Brightness(BrightnessLevel::from_device_byte(
                    frame[0],
                )))
            }

            Command::EnableAlarm { .. }
            | Command::DisableAlarm { .. }
            | Command::SetAlarm { .. }
            | Command::SetClock { .. }
            | Command::QueryTemperature
            | Command::SetBrightness { .. }
            | Command::SelfTest => Ok(Response::None),
        }
    }
}
