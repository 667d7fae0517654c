//! Byte codec for outgoing Kamigami frames
//!
//! Every field of a Kamigami command frame is transmitted as exactly one
//! unsigned byte. Negative logical values (reverse motor speeds) are wrapped
//! into their two's-complement byte before transmission.

use crate::{LinkError, LinkResult};

/// Encodes a single logical value into its one-byte wire representation.
///
/// Values in `0..=255` pass through unchanged; values in `-128..=-1` wrap
/// two's-complement style (`-1` becomes `0xFF`).
///
/// # Errors
///
/// Returns [`LinkError::ValueOutOfRange`] when `value` cannot fit in one
/// byte under either interpretation.
pub fn encode_byte(value: i32) -> LinkResult<u8> {
    if !(-128..=255).contains(&value) {
        return Err(LinkError::ValueOutOfRange(value));
    }
    if value < 0 {
        Ok((256 + value) as u8)
    } else {
        Ok(value as u8)
    }
}

/// Encodes each value in order and concatenates the resulting bytes.
///
/// The output length always equals the input length; on the first
/// out-of-range value the whole sequence fails and nothing is returned.
///
/// # Errors
///
/// Returns [`LinkError::ValueOutOfRange`] for the first offending value.
pub fn encode_sequence(values: &[i32]) -> LinkResult<Vec<u8>> {
    values.iter().map(|&v| encode_byte(v)).collect()
}

/// Incremental frame builder for layouts that mix codec-encoded values with
/// literal payload bytes (the infrared frame carries its device sub-code as
/// raw bytes, not as re-encoded integers).
pub struct FrameBuilder {
    buffer: Vec<u8>,
}

impl FrameBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Appends one value through the byte codec.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::ValueOutOfRange`] when the value does not fit.
    pub fn put_value(&mut self, value: i32) -> LinkResult<&mut Self> {
        self.buffer.push(encode_byte(value)?);
        Ok(self)
    }

    /// Appends literal bytes without re-encoding.
    pub fn put_raw(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_frame(self) -> Vec<u8> {
        self.buffer
    }
}
