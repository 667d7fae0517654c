//! Link-layer utilities shared by Kamigami protocol implementations
//!
//! This crate provides the byte codec used to serialize command frames for
//! the Kamigami robot, plus the transport-facing [`PacketSink`] trait that
//! decouples frame encoding from the BLE characteristic writer.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod codec;
pub mod sink;

pub use codec::*;
pub use sink::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Value out of range for a single byte: {0} (expected -128..=255)")]
    ValueOutOfRange(i32),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type LinkResult<T> = Result<T, LinkError>;
