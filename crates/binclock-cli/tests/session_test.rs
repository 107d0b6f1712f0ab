//! Integration tests driving the public session API against the
//! programmable mock channel.

use std::time::Duration;

use binclock_cli::mock::MockChannel;
use binclock_cli::session::ClockSession;
use binclock_cli::Error;
use binclock_protocol::ProtocolError;

const TIMEOUT: Duration = Duration::from_millis(50);

/// Queue a device image: alarm count plus one 4-byte record per alarm.
fn preload_alarms(channel: &mut MockChannel, alarms: &[[u8; 4]]) {
    channel.push_response(&[alarms.len() as u8]);
    for record in alarms {
        channel.push_response(record);
    }
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_list_all_alarms() {
    let mut channel = MockChannel::new();
    preload_alarms(
        &mut channel,
        &[[6, 30, 1, 0], [7, 0, 0, 0], [22, 45, 1, 1]],
    );
    let mut session = ClockSession::with_timeout(channel, TIMEOUT);

    let alarms: Vec<_> = session
        .alarms()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(alarms.len(), 3);
    assert_eq!((alarms[0].hour, alarms[0].minute), (6, 30));
    assert!(alarms[0].enabled);
    assert!(!alarms[1].enabled);
    assert!(alarms[2].acknowledged);
}

// ============================================================================
// Partial I/O equivalence
// ============================================================================

#[test]
fn test_one_byte_channel_matches_bulk_channel() {
    let mut bulk = MockChannel::new();
    preload_alarms(&mut bulk, &[[6, 30, 1, 0], [23, 59, 0, 1]]);
    let mut trickle = MockChannel::with_chunk_limit(1);
    preload_alarms(&mut trickle, &[[6, 30, 1, 0], [23, 59, 0, 1]]);

    let mut bulk_session = ClockSession::with_timeout(bulk, TIMEOUT);
    let mut trickle_session = ClockSession::with_timeout(trickle, TIMEOUT);

    let from_bulk: Vec<_> = bulk_session
        .alarms()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let from_trickle: Vec<_> = trickle_session
        .alarms()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(from_bulk, from_trickle);
}

#[test]
fn test_set_clock_over_one_byte_channel() {
    let mut channel = MockChannel::with_chunk_limit(1);
    channel.push_response(&[8, 24, 55]);
    let mut session = ClockSession::with_timeout(channel, TIMEOUT);

    let time = binclock_protocol::TimeOfDay::new(8, 24, 55).unwrap();
    let confirmed = session.set_clock(time).unwrap();
    assert_eq!(confirmed, time);
}

// ============================================================================
// Validation and failure paths
// ============================================================================

#[test]
fn test_invalid_index_is_validation_error() {
    let mut channel = MockChannel::new();
    channel.push_response(&[8]);
    let mut session = ClockSession::with_timeout(channel, TIMEOUT);

    let err = session.read_alarm(9).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::AlarmIndexOutOfRange { index: 9, count: 8 })
    ));
}

#[test]
fn test_timeout_is_not_validation_error() {
    let mut session = ClockSession::with_timeout(MockChannel::silent(), TIMEOUT);
    let err = session.read_clock().unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
    assert!(!err.is_validation());
}
