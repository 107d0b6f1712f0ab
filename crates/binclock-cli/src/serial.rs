//! Serial port channel for the clock's TTY device.

use std::env;
use std::io;
use std::io::{Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use binclock_protocol::BAUD_RATE;

use crate::channel::Channel;
use crate::error::Result;

/// Environment variable naming the device node.
pub const DEVICE_ENV_VAR: &str = "BC_DEV";
/// Device node used when neither a flag nor `BC_DEV` is set.
pub const DEFAULT_DEVICE: &str = "/dev/ttyACM0";
/// Per-call port timeout. The round-trip deadline in
/// [`crate::channel::read_exact`] retries on top of this.
const PORT_TIMEOUT: Duration = Duration::from_millis(50);

/// Resolve the device path: explicit flag, then `BC_DEV`, then the default.
pub fn device_path(flag: Option<&str>) -> String {
    if let Some(path) = flag {
        return path.to_string();
    }
    env::var(DEVICE_ENV_VAR).unwrap_or_else(|_| DEFAULT_DEVICE.to_string())
}

/// A [`Channel`] over a real serial device.
pub struct SerialChannel {
    port: Box<dyn SerialPort>,
}

impl SerialChannel {
    /// Open and configure the device: 115200 baud, 8 data bits, odd parity,
    /// one stop bit, no flow control.
    pub fn open(path: &str) -> Result<Self> {
        let port = serialport::new(path, BAUD_RATE)
            .data_bits(DataBits::Eight)
            .parity(Parity::Odd)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(PORT_TIMEOUT)
            .open()?;
        Ok(SerialChannel { port })
    }
}

impl Channel for SerialChannel {
    fn send(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.port.write(buf)
    }

    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.port.read(buf)
    }
}
