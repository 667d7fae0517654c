//! kamictl - Kamigami robot control CLI
//!
//! Encodes robot commands into their fixed-layout BLE frames and hands them
//! to the packet sink. Also offers an interactive REPL with the same token
//! commands the original operator console used.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod connection;
mod error;
mod output;
mod repl;

use anyhow::Result;
use ble_kamigami_protocol::{Command, LightColor, encode_raw_hex, encode_raw_numeric};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::connection::ConnectionConfig;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "kamictl")]
#[command(about = "Kamigami robot control CLI - drive motors, lights, and IR over BLE")]
#[command(version)]
struct Cli {
    /// Robot MAC address; scans for the advertised name when omitted
    #[arg(short = 'm', long, global = true, env = "KAMICTL_ADDRESS")]
    address: Option<String>,

    /// Scan timeout in seconds when no address is given
    #[arg(long, global = true, default_value_t = 10.0)]
    scan_secs: f64,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set left and right motor speeds (-63..=63)
    Motors { left: i32, right: i32 },

    /// Set the light color by palette name or explicit channels
    Lights {
        /// Palette color name (red, blue, green, yellow, purple, cyan)
        #[arg(long, conflicts_with = "rgb")]
        color: Option<String>,

        /// Explicit channel values, 0..=255 each
        #[arg(long, num_args = 3, value_names = ["R", "G", "B"], allow_negative_numbers = true)]
        rgb: Option<Vec<i32>>,
    },

    /// Emit an infrared code
    Ir,

    /// Shut the robot down
    Shutdown,

    /// Enter hardware test mode at the given speed
    Testmode { speed: i32 },

    /// Send one unified frame carrying motor and/or light effects
    Unified {
        /// Left and right motor speeds, 0..=63 each
        #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"], allow_negative_numbers = true)]
        motors: Option<Vec<i32>>,

        /// Light channels, 0..=255 each
        #[arg(long, num_args = 3, value_names = ["R", "G", "B"], allow_negative_numbers = true)]
        lights: Option<Vec<i32>>,
    },

    /// Send raw decimal byte values, no identifier prepended
    Rawnum {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Send raw 0x-prefixed hex byte values, no identifier prepended
    Rawhex {
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Interactive token console
    Repl,
}

fn pair(values: &[i32]) -> (i32, i32) {
    let mut it = values.iter().copied();
    (it.next().unwrap_or(0), it.next().unwrap_or(0))
}

fn triple(values: &[i32]) -> (i32, i32, i32) {
    let mut it = values.iter().copied();
    (
        it.next().unwrap_or(0),
        it.next().unwrap_or(0),
        it.next().unwrap_or(0),
    )
}

/// Maps a subcommand onto its frame. The `Command` core never sees the
/// argument strings; the mapping ends here.
fn build_frame(command: &Commands) -> Result<(&'static str, Vec<u8>), CliError> {
    match command {
        Commands::Motors { left, right } => {
            let frame = Command::Motor {
                left: *left,
                right: *right,
            }
            .encode()?;
            Ok(("motor", frame))
        }
        Commands::Lights { color, rgb } => {
            let light = match (color, rgb) {
                (Some(name), None) => LightColor::Named(name.parse()?),
                (None, Some(values)) => {
                    let (r, g, b) = triple(values);
                    LightColor::Channels { r, g, b }
                }
                _ => {
                    return Err(CliError::Usage(
                        "Specify exactly one of --color or --rgb.".to_string(),
                    ));
                }
            };
            Ok(("light", Command::Light(light).encode()?))
        }
        Commands::Ir => Ok(("infrared", Command::Infrared.encode()?)),
        Commands::Shutdown => Ok(("shutdown", Command::Shutdown.encode()?)),
        Commands::Testmode { speed } => {
            Ok(("test mode", Command::TestMode { speed: *speed }.encode()?))
        }
        Commands::Unified { motors, lights } => {
            let frame = Command::Unified {
                motor: motors.as_deref().map(pair),
                lights: lights.as_deref().map(triple),
            }
            .encode()?;
            Ok(("unified", frame))
        }
        Commands::Rawnum { values } => Ok(("raw", encode_raw_numeric(values)?)),
        Commands::Rawhex { tokens } => Ok(("raw", encode_raw_hex(tokens)?)),
        Commands::Repl => Err(CliError::Usage("REPL is handled separately.".to_string())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("kamictl={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ConnectionConfig::new(cli.address.clone(), cli.scan_secs);
    let mut sink = connection::open_sink(&config).await?;

    let result = match &cli.command {
        Commands::Repl => repl::run(sink.as_mut()).await,
        other => match build_frame(other) {
            Ok((label, frame)) => sink
                .send(&frame)
                .await
                .map(|_| output::print_frame_sent(label, &frame))
                .map_err(anyhow::Error::from),
            Err(err) => Err(err.into()),
        },
    };

    if let Err(err) = &result {
        output::print_error(err);
        std::process::exit(1);
    }

    Ok(())
}
