//! Commands that can be sent to the clock firmware.

use crate::constants::*;
use crate::types::*;

/// Commands that can be sent to the clock firmware.
///
/// Each variant knows the byte-exact request frame it encodes to and the
/// fixed length of the response the device sends back, so a command can
/// never be paired with the wrong response size. Variants carry validated
/// types ([`AlarmIndex`], [`TimeOfDay`], [`BrightnessLevel`]), which keeps
/// [`Command::encode`] infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query the number of alarms the device supports. Must run before any
    /// alarm-index command so the index can be range-checked.
    QueryAlarmCount,

    /// Read one alarm's time and flags.
    ReadAlarm {
        /// Which alarm to read.
        index: AlarmIndex,
    },

    /// Enable one alarm. Fire-and-forget.
    EnableAlarm {
        /// Which alarm to enable.
        index: AlarmIndex,
    },

    /// Disable one alarm. Fire-and-forget.
    DisableAlarm {
        /// Which alarm to disable.
        index: AlarmIndex,
    },

    /// Set one alarm's time. Fire-and-forget; the second field is unused.
    SetAlarm {
        /// Which alarm to set.
        index: AlarmIndex,
        /// Hour and minute to fire at.
        time: TimeOfDay,
    },

    /// Set the clock time. Fire-and-forget; pair with [`Command::ReadClock`]
    /// to confirm.
    SetClock {
        /// Time to set.
        time: TimeOfDay,
    },

    /// Read the current clock time.
    ReadClock,

    /// Trigger a temperature report. The host does not consume any response.
    QueryTemperature,

    /// Read the display brightness.
    ReadBrightness,

    /// Set the display brightness. Fire-and-forget.
    SetBrightness {
        /// Brightness to set.
        level: BrightnessLevel,
    },

    /// Trigger the device self-test. Fire-and-forget.
    SelfTest,
}

/// Append a two-digit zero-padded ASCII decimal field.
fn push_two_digits(buf: &mut Vec<u8>, value: u8) {
    buf.push(b'0' + value / 10);
    buf.push(b'0' + value % 10);
}

impl Command {
    /// The leading command-family byte of this command's request frame.
    pub fn family(&self) -> u8 {
        match self {
            Command::QueryAlarmCount
            | Command::ReadAlarm { .. }
            | Command::EnableAlarm { .. }
            | Command::DisableAlarm { .. }
            | Command::SetAlarm { .. } => FAMILY_ALARM,
            Command::SetClock { .. } | Command::ReadClock => FAMILY_CLOCK,
            Command::QueryTemperature => FAMILY_TEMPERATURE,
            Command::ReadBrightness | Command::SetBrightness { .. } => FAMILY_BRIGHTNESS,
            Command::SelfTest => FAMILY_SELF_TEST,
        }
    }

    /// Encode the byte-exact request frame.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Command::QueryAlarmCount => vec![FAMILY_ALARM, OP_ALARM_COUNT],

            Command::ReadAlarm { index } => vec![FAMILY_ALARM, OP_READ, index.digit()],

            Command::EnableAlarm { index } => vec![FAMILY_ALARM, OP_ENABLE, index.digit()],

            Command::DisableAlarm { index } => vec![FAMILY_ALARM, OP_DISABLE, index.digit()],

            Command::SetAlarm { index, time } => {
                let mut buf = vec![FAMILY_ALARM, OP_WRITE, index.digit()];
                push_two_digits(&mut buf, time.hour);
                push_two_digits(&mut buf, time.minute);
                buf
            }

            Command::SetClock { time } => {
                let mut buf = vec![FAMILY_CLOCK, OP_WRITE];
                push_two_digits(&mut buf, time.hour);
                push_two_digits(&mut buf, time.minute);
                push_two_digits(&mut buf, time.second);
                buf
            }

            Command::ReadClock => vec![FAMILY_CLOCK, OP_READ],

            Command::QueryTemperature => vec![FAMILY_TEMPERATURE],

            Command::ReadBrightness => vec![FAMILY_BRIGHTNESS, OP_READ],

            Command::SetBrightness { level } => {
                // The brightness value is a raw binary byte, not ASCII.
                vec![FAMILY_BRIGHTNESS, OP_WRITE, level.to_device_byte()]
            }

            Command::SelfTest => vec![FAMILY_SELF_TEST],
        }
    }

    /// Number of response bytes the device sends for this command.
    ///
    /// The stream is not self-describing, so the reader must know this
    /// length before the read starts. Zero means fire-and-forget: nothing
    /// is read and success is indistinguishable from failure on the wire.
    pub fn response_len(&self) -> usize {
        match self {
            Command::QueryAlarmCount => RESP_LEN_ALARM_COUNT,
            Command::ReadAlarm { .. } => RESP_LEN_READ_ALARM,
            Command::ReadClock => RESP_LEN_READ_CLOCK,
            Command::ReadBrightness => RESP_LEN_READ_BRIGHTNESS,
            Command::EnableAlarm { .. }
            | Command::DisableAlarm { .. }
            | Command::SetAlarm { .. }
            | Command::SetClock { .. }
            | Command::QueryTemperature
            | Command::SetBrightness { .. }
            | Command::SelfTest => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(i: u8) -> AlarmIndex {
        AlarmIndex::new(i, 10).unwrap()
    }

    #[test]
    fn test_encode_alarm_commands() {
        assert_eq!(Command::QueryAlarmCount.encode(), b"an");
        assert_eq!(Command::ReadAlarm { index: index(3) }.encode(), b"ar3");
        assert_eq!(Command::EnableAlarm { index: index(0) }.encode(), b"ae0");
        assert_eq!(Command::DisableAlarm { index: index(9) }.encode(), b"ad9");

        let cmd = Command::SetAlarm {
            index: index(3),
            time: TimeOfDay::new(7, 5, 0).unwrap(),
        };
        assert_eq!(cmd.encode(), b"aw30705");
        assert_eq!(cmd.encode().len(), 7);
    }

    #[test]
    fn test_encode_clock_commands() {
        let cmd = Command::SetClock {
            time: TimeOfDay::new(8, 24, 55).unwrap(),
        };
        assert_eq!(cmd.encode(), b"sw082455");
        assert_eq!(cmd.encode().len(), 8);
        assert_eq!(Command::ReadClock.encode(), b"sr");
    }

    #[test]
    fn test_encode_brightness_commands() {
        assert_eq!(Command::ReadBrightness.encode(), b"br");
        let cmd = Command::SetBrightness {
            level: BrightnessLevel::new(0).unwrap(),
        };
        assert_eq!(cmd.encode(), &[b'b', b'w', 127]);
        let cmd = Command::SetBrightness {
            level: BrightnessLevel::new(100).unwrap(),
        };
        assert_eq!(cmd.encode(), &[b'b', b'w', 0]);
    }

    #[test]
    fn test_encode_single_byte_commands() {
        assert_eq!(Command::QueryTemperature.encode(), b"t");
        assert_eq!(Command::SelfTest.encode(), b"x");
    }

    #[test]
    fn test_response_lengths() {
        assert_eq!(Command::QueryAlarmCount.response_len(), 1);
        assert_eq!(Command::ReadAlarm { index: index(0) }.response_len(), 4);
        assert_eq!(Command::ReadClock.response_len(), 3);
        assert_eq!(Command::ReadBrightness.response_len(), 1);
        assert_eq!(Command::QueryTemperature.response_len(), 0);
        assert_eq!(Command::SelfTest.response_len(), 0);
        assert_eq!(
            Command::SetClock {
                time: TimeOfDay::new(0, 0, 0).unwrap()
            }
            .response_len(),
            0
        );
    }

    #[test]
    fn test_zero_padding() {
        let cmd = Command::SetClock {
            time: TimeOfDay::new(0, 0, 0).unwrap(),
        };
        assert_eq!(cmd.encode(), b"sw000000");
    }
}
