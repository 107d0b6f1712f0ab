//! `binclock` - command line controller for a serial-attached binary clock.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use binclock_cli::channel::Channel;
use binclock_cli::serial::{self, SerialChannel};
use binclock_cli::session::ClockSession;
use binclock_cli::Result;

/// Control a binary clock over its serial link.
///
/// With no subcommand, lists all alarms.
#[derive(Parser)]
#[command(name = "binclock", version)]
struct Cli {
    /// Device node; overrides the BC_DEV environment variable
    /// (default /dev/ttyACM0).
    #[arg(short, long)]
    device: Option<String>,

    /// Deadline for each command round-trip, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Set the clock from the local wall-clock time.
    Init,

    /// Report the difference between device time and local time.
    Drift,

    /// Trigger a temperature report (no response is read).
    Temperature,

    /// Show the display brightness, or set it when a percentage is given.
    Brightness {
        /// Brightness percentage.
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: Option<u8>,
    },

    /// Trigger the device self-test.
    Test,

    /// Read or change one alarm.
    Alarm {
        /// Alarm number as shown in the listing (1-based).
        #[arg(value_parser = clap::value_parser!(u8).range(1..))]
        number: u8,

        #[command(subcommand)]
        action: Option<AlarmAction>,
    },
}

#[derive(Subcommand)]
enum AlarmAction {
    /// Enable the alarm.
    Enable,

    /// Disable the alarm.
    Disable,

    /// Set the alarm time.
    Set {
        /// Hour, 0-23.
        #[arg(value_parser = clap::value_parser!(u8).range(0..=23))]
        hour: u8,

        /// Minute, 0-59.
        #[arg(value_parser = clap::value_parser!(u8).range(0..=59))]
        minute: u8,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let path = serial::device_path(cli.device.as_deref());
    let channel = match SerialChannel::open(&path) {
        Ok(channel) => channel,
        Err(e) => {
            eprintln!("Failed to open device {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    let mut session =
        ClockSession::with_timeout(channel, Duration::from_millis(cli.timeout_ms));

    match run(&mut session, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            if e.is_validation() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run<C: Channel>(session: &mut ClockSession<C>, command: Option<Cmd>) -> Result<()> {
    match command {
        None => list_alarms(session),

        Some(Cmd::Init) => {
            let (local, confirmed) = session.init_from_local_time()?;
            println!("== Setting time: {} ==", local);
            println!("   Time set to: {}", confirmed);
            Ok(())
        }

        Some(Cmd::Drift) => {
            let report = session.drift()?;
            println!("== Drift: {} ==", report.drift_seconds);
            println!("   Local set to: {}", report.local);
            println!("   Clock set to: {}", report.device);
            Ok(())
        }

        Some(Cmd::Temperature) => session.temperature(),

        Some(Cmd::Brightness { percent: Some(percent) }) => session.set_brightness(percent),

        Some(Cmd::Brightness { percent: None }) => {
            let level = session.brightness()?;
            println!("Brightness: {}%", level.percent());
            Ok(())
        }

        Some(Cmd::Test) => session.self_test(),

        Some(Cmd::Alarm { number, action }) => alarm_command(session, number - 1, action),
    }
}

fn list_alarms<C: Channel>(session: &mut ClockSession<C>) -> Result<()> {
    println!("== Alarms ==");
    let alarms = session.alarms()?;
    let mut number = 0;
    for alarm in alarms {
        let alarm = alarm?;
        number += 1;
        println!(
            "{}: {:02}:{:02} ( {:>7} ) ({:>3})",
            number,
            alarm.hour,
            alarm.minute,
            if alarm.enabled { "Enable" } else { "Disable" },
            if alarm.acknowledged { "Ack" } else { "" },
        );
    }
    Ok(())
}

fn alarm_command<C: Channel>(
    session: &mut ClockSession<C>,
    index: u8,
    action: Option<AlarmAction>,
) -> Result<()> {
    match action {
        None => {
            let alarm = session.read_alarm(index)?;
            println!(
                "{:02}:{:02} ({})",
                alarm.hour,
                alarm.minute,
                if alarm.enabled { "Enable" } else { "Disable" },
            );
            Ok(())
        }
        Some(AlarmAction::Enable) => session.enable_alarm(index),
        Some(AlarmAction::Disable) => session.disable_alarm(index),
        Some(AlarmAction::Set { hour, minute }) => session.set_alarm(index, hour, minute),
    }
}
