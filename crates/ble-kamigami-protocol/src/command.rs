//! Closed command type for the Kamigami protocol
//!
//! Callers build a [`Command`] and encode it; the string names a CLI might
//! accept never reach this crate. Raw pass-throughs live in [`crate::encode`]
//! only, since they carry no identifier and are not robot commands proper.

use crate::{LightColor, PacketKind, ProtocolResult, encode};
use serde::{Deserialize, Serialize};

/// One robot command, ready to validate and encode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Differential drive speeds, signed `-63..=63` each.
    Motor { left: i32, right: i32 },
    /// Set the shell LEDs.
    Light(LightColor),
    /// Emit an infrared code (chosen at encode time).
    Infrared,
    /// Hardware self-test at the given speed.
    TestMode { speed: i32 },
    /// Power the robot down.
    Shutdown,
    /// Several sub-system effects in one fixed-length frame.
    Unified {
        motor: Option<(i32, i32)>,
        lights: Option<(i32, i32, i32)>,
    },
}

impl Command {
    pub fn kind(&self) -> PacketKind {
        match self {
            Self::Motor { .. } => PacketKind::Motor,
            Self::Light(_) => PacketKind::Light,
            Self::Infrared => PacketKind::Infrared,
            Self::TestMode { .. } => PacketKind::TestMode,
            Self::Shutdown => PacketKind::Shutdown,
            Self::Unified { .. } => PacketKind::Unified,
        }
    }

    /// Validates the command and produces its wire frame.
    ///
    /// # Errors
    ///
    /// Propagates the per-command validation errors documented on the
    /// encoders in [`crate::encode`].
    pub fn encode(&self) -> ProtocolResult<Vec<u8>> {
        match *self {
            Self::Motor { left, right } => encode::encode_motor(left, right),
            Self::Light(color) => encode::encode_light(color),
            Self::Infrared => encode::encode_infrared(),
            Self::TestMode { speed } => encode::encode_test_mode(speed),
            Self::Shutdown => encode::encode_shutdown(),
            Self::Unified { motor, lights } => encode::encode_unified(motor, lights),
        }
    }
}
