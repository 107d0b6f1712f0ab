//! Command dispatcher: one exclusively owned session per open device.

use std::time::Duration;

use chrono::{Local, Timelike};
use log::debug;

use binclock_protocol::{
    AlarmIndex, AlarmState, BrightnessLevel, Command, Response, TimeOfDay,
};

use crate::channel::{self, Channel};
use crate::error::Result;

/// Default bound on each write-then-read round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// One connection to the clock.
///
/// The session owns the channel; all operations are strictly sequential
/// write-then-read round-trips, since the device supports no pipelining.
/// The alarm count is queried once and cached, so every alarm index can be
/// range-checked before any byte is written.
pub struct ClockSession<C> {
    channel: C,
    timeout: Duration,
    alarm_count: Option<u8>,
}

impl<C: Channel> ClockSession<C> {
    /// Create a session with the default round-trip timeout.
    pub fn new(channel: C) -> Self {
        Self::with_timeout(channel, DEFAULT_TIMEOUT)
    }

    /// Create a session with an explicit round-trip timeout.
    pub fn with_timeout(channel: C, timeout: Duration) -> Self {
        ClockSession {
            channel,
            timeout,
            alarm_count: None,
        }
    }

    /// Send one command and read its fixed-length response.
    fn round_trip(&mut self, command: &Command) -> Result<Response> {
        let frame = command.encode();
        debug!("write {:02x?}", frame);
        channel::write_all(&mut self.channel, &frame, self.timeout)?;

        let mut response = vec![0u8; command.response_len()];
        if !response.is_empty() {
            channel::read_exact(&mut self.channel, &mut response, self.timeout)?;
            debug!("read {:02x?}", response);
        }
        Ok(command.decode_response(&response)?)
    }

    /// Number of alarms the device supports, queried once per session.
    pub fn alarm_count(&mut self) -> Result<u8> {
        if let Some(count) = self.alarm_count {
            return Ok(count);
        }
        let count = match self.round_trip(&Command::QueryAlarmCount)? {
            Response::AlarmCount(count) => count,
            _ => unreachable!("decode pairs each command with its response kind"),
        };
        self.alarm_count = Some(count);
        Ok(count)
    }

    /// Validate a zero-based index against the device's alarm count.
    fn validated_index(&mut self, index: u8) -> Result<AlarmIndex> {
        let count = self.alarm_count()?;
        Ok(AlarmIndex::new(index, count)?)
    }

    /// Read one alarm's time and flags.
    pub fn read_alarm(&mut self, index: u8) -> Result<AlarmState> {
        let index = self.validated_index(index)?;
        match self.round_trip(&Command::ReadAlarm { index })? {
            Response::Alarm(alarm) => Ok(alarm),
            _ => unreachable!("decode pairs each command with its response kind"),
        }
    }

    /// Enable one alarm.
    pub fn enable_alarm(&mut self, index: u8) -> Result<()> {
        let index = self.validated_index(index)?;
        self.round_trip(&Command::EnableAlarm { index })?;
        Ok(())
    }

    /// Disable one alarm.
    pub fn disable_alarm(&mut self, index: u8) -> Result<()> {
        let index = self.validated_index(index)?;
        self.round_trip(&Command::DisableAlarm { index })?;
        Ok(())
    }

    /// Set one alarm's hour and minute.
    pub fn set_alarm(&mut self, index: u8, hour: u8, minute: u8) -> Result<()> {
        let index = self.validated_index(index)?;
        let time = TimeOfDay::new(hour, minute, 0)?;
        self.round_trip(&Command::SetAlarm { index, time })?;
        Ok(())
    }

    /// Lazy iteration over every alarm, one read round-trip per step.
    /// Calling again restarts from index 0.
    pub fn alarms(&mut self) -> Result<Alarms<'_, C>> {
        let count = self.alarm_count()?;
        Ok(Alarms {
            session: self,
            next: 0,
            count,
        })
    }

    /// Read the current clock time.
    pub fn read_clock(&mut self) -> Result<TimeOfDay> {
        match self.round_trip(&Command::ReadClock)? {
            Response::ClockTime(time) => Ok(time),
            _ => unreachable!("decode pairs each command with its response kind"),
        }
    }

    /// Set the clock, then read back the confirmed time. Fails if the
    /// confirmation read does not complete.
    pub fn set_clock(&mut self, time: TimeOfDay) -> Result<TimeOfDay> {
        self.round_trip(&Command::SetClock { time })?;
        self.read_clock()
    }

    /// Set the clock from the local wall clock. Returns the time that was
    /// sent and the time the device confirmed.
    pub fn init_from_local_time(&mut self) -> Result<(TimeOfDay, TimeOfDay)> {
        let local = local_time_of_day();
        let confirmed = self.set_clock(local)?;
        Ok((local, confirmed))
    }

    /// Measure drift against the local wall clock, captured immediately
    /// before the device read.
    pub fn drift(&mut self) -> Result<DriftReport> {
        let local = local_time_of_day();
        let device = self.read_clock()?;
        Ok(DriftReport {
            drift_seconds: drift_seconds(&device, &local),
            local,
            device,
        })
    }

    /// Read the display brightness.
    pub fn brightness(&mut self) -> Result<BrightnessLevel> {
        match self.round_trip(&Command::ReadBrightness)? {
            Response::Brightness(level) => Ok(level),
            _ => unreachable!("decode pairs each command with its response kind"),
        }
    }

    /// Set the display brightness from a 0-100 percentage.
    pub fn set_brightness(&mut self, percent: u8) -> Result<()> {
        let level = BrightnessLevel::new(percent)?;
        self.round_trip(&Command::SetBrightness { level })?;
        Ok(())
    }

    /// Trigger a temperature report. Fire-and-forget: the device may answer
    /// on its own channel, but this host consumes nothing.
    pub fn temperature(&mut self) -> Result<()> {
        self.round_trip(&Command::QueryTemperature)?;
        Ok(())
    }

    /// Trigger the device self-test. Fire-and-forget.
    pub fn self_test(&mut self) -> Result<()> {
        self.round_trip(&Command::SelfTest)?;
        Ok(())
    }
}

/// Signed `device - local` difference in seconds since midnight.
///
/// Literal subtraction with no midnight wraparound correction: device
/// `00:00:01` against local `23:59:59` reports -86398, not +2.
pub fn drift_seconds(device: &TimeOfDay, local: &TimeOfDay) -> i64 {
    device.seconds_since_midnight() - local.seconds_since_midnight()
}

/// The local wall-clock time of day.
fn local_time_of_day() -> TimeOfDay {
    let now = Local::now();
    TimeOfDay {
        hour: now.hour() as u8,
        minute: now.minute() as u8,
        second: now.second() as u8,
    }
}

/// Result of one drift measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftReport {
    /// Local wall-clock time at the moment of the read.
    pub local: TimeOfDay,
    /// Time the device reported.
    pub device: TimeOfDay,
    /// Signed `device - local` seconds; see [`drift_seconds`].
    pub drift_seconds: i64,
}

/// Lazy, finite alarm listing over a borrowed session.
pub struct Alarms<'a, C> {
    session: &'a mut ClockSession<C>,
    next: u8,
    count: u8,
}

impl<C: Channel> Iterator for Alarms<'_, C> {
    type Item = Result<AlarmState>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.session.read_alarm(index))
    }
}
