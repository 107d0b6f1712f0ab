//! Domain types shared by commands and responses.

use std::fmt;

use crate::constants::*;
use crate::error::ProtocolError;

/// A time of day, as sent to or reported by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Hour, 0-23 once validated or decoded.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl TimeOfDay {
    /// Create a range-checked time of day.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ProtocolError> {
        if hour > MAX_HOUR {
            return Err(ProtocolError::InvalidTime {
                field: "hour",
                value: hour,
                max: MAX_HOUR,
            });
        }
        if minute > MAX_MINUTE {
            return Err(ProtocolError::InvalidTime {
                field: "minute",
                value: minute,
                max: MAX_MINUTE,
            });
        }
        if second > MAX_SECOND {
            return Err(ProtocolError::InvalidTime {
                field: "second",
                value: second,
                max: MAX_SECOND,
            });
        }
        Ok(TimeOfDay {
            hour,
            minute,
            second,
        })
    }

    /// Build a time from raw device response bytes.
    ///
    /// The device may report an hour beyond 23; it is reduced modulo 24 here.
    /// Minute and second are taken as-is.
    pub fn from_device_bytes(hour: u8, minute: u8, second: u8) -> Self {
        TimeOfDay {
            hour: hour % HOURS_PER_DAY,
            minute,
            second,
        }
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// One alarm slot as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmState {
    /// Alarm hour, reduced modulo 24.
    pub hour: u8,
    /// Alarm minute.
    pub minute: u8,
    /// Whether the alarm will fire.
    pub enabled: bool,
    /// Whether the alarm has fired and not yet been cleared.
    pub acknowledged: bool,
}

impl AlarmState {
    /// Build an alarm state from the four raw response bytes.
    pub fn from_device_bytes(hour: u8, minute: u8, enabled: u8, acknowledged: u8) -> Self {
        AlarmState {
            hour: hour % HOURS_PER_DAY,
            minute,
            enabled: enabled != 0,
            acknowledged: acknowledged != 0,
        }
    }
}

/// Zero-based index of one of the device's alarms.
///
/// Construction goes through [`AlarmIndex::new`], which checks the index
/// against the device-reported alarm count and against the single-digit
/// encoding limit, so an index that reaches the wire is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmIndex(u8);

impl AlarmIndex {
    /// Validate `index` against the device-reported `count`.
    pub fn new(index: u8, count: u8) -> Result<Self, ProtocolError> {
        if index >= count {
            return Err(ProtocolError::AlarmIndexOutOfRange { index, count });
        }
        if index > MAX_ENCODABLE_ALARM_INDEX {
            return Err(ProtocolError::AlarmIndexNotEncodable { index });
        }
        Ok(AlarmIndex(index))
    }

    /// The zero-based index value.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// The single ASCII digit carried on the wire.
    pub(crate) fn digit(&self) -> u8 {
        b'0' + self.0
    }
}

impl fmt::Display for AlarmIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display brightness as a percentage.
///
/// The wire carries an inverted scale: the byte decreases as brightness
/// increases. 0% maps to byte 127, 100% to byte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    /// Create a brightness level from a 0-100 percentage.
    pub fn new(percent: u8) -> Result<Self, ProtocolError> {
        if percent > MAX_BRIGHTNESS_PERCENT {
            return Err(ProtocolError::InvalidBrightness { percent });
        }
        Ok(BrightnessLevel(percent))
    }

    /// The percentage, 0-100.
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Wire byte: `round((100 - percent) * 1.27)`.
    pub fn to_device_byte(&self) -> u8 {
        (f64::from(MAX_BRIGHTNESS_PERCENT - self.0) * BRIGHTNESS_SCALE).round() as u8
    }

    /// Percentage from a wire byte: `round(100 - byte / 1.27)`, clamped to
    /// 0-100. The conversion is lossy by at most one percentage point.
    pub fn from_device_byte(byte: u8) -> Self {
        let percent = f64::from(MAX_BRIGHTNESS_PERCENT) - f64::from(byte) / BRIGHTNESS_SCALE;
        BrightnessLevel(percent.round().clamp(0.0, f64::from(MAX_BRIGHTNESS_PERCENT)) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_validation() {
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
        assert_eq!(
            TimeOfDay::new(24, 0, 0),
            Err(ProtocolError::InvalidTime {
                field: "hour",
                value: 24,
                max: 23
            })
        );
        assert_eq!(
            TimeOfDay::new(0, 60, 0),
            Err(ProtocolError::InvalidTime {
                field: "minute",
                value: 60,
                max: 59
            })
        );
        assert_eq!(
            TimeOfDay::new(0, 0, 60),
            Err(ProtocolError::InvalidTime {
                field: "second",
                value: 60,
                max: 59
            })
        );
    }

    #[test]
    fn test_device_hour_reduced_mod_24() {
        let time = TimeOfDay::from_device_bytes(25, 30, 0);
        assert_eq!(time.hour, 1);
        let alarm = AlarmState::from_device_bytes(26, 15, 1, 0);
        assert_eq!(alarm.hour, 2);
    }

    #[test]
    fn test_seconds_since_midnight() {
        let time = TimeOfDay::new(8, 0, 5).unwrap();
        assert_eq!(time.seconds_since_midnight(), 8 * 3600 + 5);
        assert_eq!(TimeOfDay::new(0, 0, 0).unwrap().seconds_since_midnight(), 0);
        assert_eq!(
            TimeOfDay::new(23, 59, 59).unwrap().seconds_since_midnight(),
            86_399
        );
    }

    #[test]
    fn test_alarm_flags_nonzero_is_true() {
        let alarm = AlarmState::from_device_bytes(7, 30, 2, 0xff);
        assert!(alarm.enabled);
        assert!(alarm.acknowledged);
        let alarm = AlarmState::from_device_bytes(7, 30, 0, 0);
        assert!(!alarm.enabled);
        assert!(!alarm.acknowledged);
    }

    #[test]
    fn test_alarm_index_validation() {
        assert!(AlarmIndex::new(0, 8).is_ok());
        assert!(AlarmIndex::new(7, 8).is_ok());
        assert_eq!(
            AlarmIndex::new(8, 8),
            Err(ProtocolError::AlarmIndexOutOfRange { index: 8, count: 8 })
        );
        // A device reporting 16 alarms still cannot address past index 9.
        assert!(AlarmIndex::new(9, 16).is_ok());
        assert_eq!(
            AlarmIndex::new(10, 16),
            Err(ProtocolError::AlarmIndexNotEncodable { index: 10 })
        );
    }

    #[test]
    fn test_brightness_boundary_values() {
        assert_eq!(BrightnessLevel::new(0).unwrap().to_device_byte(), 127);
        assert_eq!(BrightnessLevel::new(50).unwrap().to_device_byte(), 64);
        assert_eq!(BrightnessLevel::new(100).unwrap().to_device_byte(), 0);

        assert_eq!(BrightnessLevel::from_device_byte(127).percent(), 0);
        assert_eq!(BrightnessLevel::from_device_byte(64).percent(), 50);
        assert_eq!(BrightnessLevel::from_device_byte(0).percent(), 100);
        // Bytes beyond the scale clamp to 0%.
        assert_eq!(BrightnessLevel::from_device_byte(255).percent(), 0);
    }

    #[test]
    fn test_brightness_round_trip_within_one_percent() {
        for percent in 0..=100u8 {
            let level = BrightnessLevel::new(percent).unwrap();
            let recovered = BrightnessLevel::from_device_byte(level.to_device_byte());
            let diff = i16::from(recovered.percent()) - i16::from(percent);
            assert!(
                diff.abs() <= 1,
                "percent {} recovered as {}",
                percent,
                recovered.percent()
            );
        }
    }

    #[test]
    fn test_brightness_rejects_over_100() {
        assert_eq!(
            BrightnessLevel::new(101),
            Err(ProtocolError::InvalidBrightness { percent: 101 })
        );
    }
}
