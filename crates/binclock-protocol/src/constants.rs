//! Protocol constants
//!
//! Command-family bytes, operation bytes, fixed response lengths and field
//! limits for the binary clock serial protocol.

// ============================================================================
// Command family bytes (first byte of every request)
// ============================================================================

/// Alarm operations: count query, read, enable, disable, set.
pub const FAMILY_ALARM: u8 = b'a';
/// Clock time operations: set, read.
pub const FAMILY_CLOCK: u8 = b's';
/// Temperature report trigger.
pub const FAMILY_TEMPERATURE: u8 = b't';
/// Display brightness operations: read, write.
pub const FAMILY_BRIGHTNESS: u8 = b'b';
/// Device self-test trigger.
pub const FAMILY_SELF_TEST: u8 = b'x';

// ============================================================================
// Operation bytes (second byte of families with sub-operations)
// ============================================================================

/// Query the number of alarms the device supports.
pub const OP_ALARM_COUNT: u8 = b'n';
/// Read the current value.
pub const OP_READ: u8 = b'r';
/// Write a new value.
pub const OP_WRITE: u8 = b'w';
/// Enable an alarm.
pub const OP_ENABLE: u8 = b'e';
/// Disable an alarm.
pub const OP_DISABLE: u8 = b'd';

// ============================================================================
// Response lengths (fixed per command, not self-describing on the wire)
// ============================================================================

/// `a` `n` response: one byte holding the alarm count.
pub const RESP_LEN_ALARM_COUNT: usize = 1;
/// `a` `r` response: hour, minute, enabled flag, acknowledged flag.
pub const RESP_LEN_READ_ALARM: usize = 4;
/// `s` `r` response: raw binary hour, minute, second.
pub const RESP_LEN_READ_CLOCK: usize = 3;
/// `b` `r` response: one inverted-scale brightness byte.
pub const RESP_LEN_READ_BRIGHTNESS: usize = 1;

// ============================================================================
// Field limits
// ============================================================================

/// Highest alarm index the wire format can carry.
///
/// The index is encoded as a single ASCII digit (`'0' + index`), so at most
/// 10 alarms are addressable even when the count query reports more. This is
/// a protocol limit, not a client-side choice; it must never be widened
/// silently.
pub const MAX_ENCODABLE_ALARM_INDEX: u8 = 9;

/// Hours in a day; device-reported hours are reduced modulo this.
pub const HOURS_PER_DAY: u8 = 24;
/// Largest valid hour in a client-supplied time.
pub const MAX_HOUR: u8 = 23;
/// Largest valid minute.
pub const MAX_MINUTE: u8 = 59;
/// Largest valid second.
pub const MAX_SECOND: u8 = 59;

/// Largest brightness percentage.
pub const MAX_BRIGHTNESS_PERCENT: u8 = 100;
/// Inverted brightness scale factor: device byte = round((100 - percent) * 1.27).
pub const BRIGHTNESS_SCALE: f64 = 1.27;

// ============================================================================
// Serial link parameters
// ============================================================================

/// Baud rate of the clock's serial link.
pub const BAUD_RATE: u32 = 115_200;
