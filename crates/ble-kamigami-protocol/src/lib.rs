//! BLE command protocol for the Kamigami robot.
//!
//! The Kamigami is a battery-powered toy robot driven over a low-bandwidth
//! BLE link. Every command is a short fixed-layout frame written to a single
//! GATT characteristic; the robot never negotiates, the host only sends.
//!
//! ## Frame layout
//!
//! The first byte of every frame is the packet identifier, the remainder is
//! the command-specific payload. All fields are single unsigned bytes on the
//! wire; negative logical values (reverse motor speeds) are two's-complement
//! wrapped by the link-layer codec before transmission.
//!
//! | Command | Identifier | Frame length |
//! |---------|-----------|--------------|
//! | Shutdown | `0x01` | 1 |
//! | Light | `0x02` | 4 |
//! | Motor | `0x03` | 3 |
//! | Infrared | `0x05` | 3 |
//! | Sticky packet set | `0x0C` | reserved |
//! | Unified | `0x0F` | 20 |
//! | Test mode | `0x10` | 4 |
//!
//! ## Range asymmetry
//!
//! The firmware documents three different bounds for motor-adjacent fields
//! and this crate preserves them rather than harmonizing:
//!
//! - [`encode_motor`]: signed `-63..=63`, both ends inclusive, ±64 rejected.
//! - [`encode_unified`]: unsigned `0..=63` for the motor sub-fields.
//! - [`encode_test_mode`]: no documented bound; only the codec's one-byte
//!   range applies.
//!
//! ## Unified packets
//!
//! A unified frame is 20 bytes and can carry several sub-system effects at
//! once. Byte 1 is a capability bitmask (`0x01` motor, `0x04` lights);
//! fields for unset capabilities stay zero. An empty unified packet (no
//! capabilities) is legal.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]

pub mod color;
pub mod command;
pub mod device;
pub mod encode;
pub mod ids;

pub use color::*;
pub use command::*;
pub use device::*;
pub use encode::*;
pub use ids::*;

use kamigami_link::LinkError;
use thiserror::Error;

/// Errors returned by Kamigami protocol operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid parameter `{field}`: {value} is outside {bounds}")]
    InvalidParameter {
        field: &'static str,
        value: i32,
        bounds: &'static str,
    },

    #[error("Unknown color name: {0}")]
    UnknownColor(String),

    #[error("Malformed hex token: {0} (expected 0x-prefixed hex digits)")]
    MalformedHex(String),

    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Convenience result alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
