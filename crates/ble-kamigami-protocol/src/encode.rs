//! Frame encoders for every Kamigami command
//!
//! All validation happens here, before any byte is produced; a frame is
//! either complete and ready for the sink or the call fails. Encoders are
//! pure and idempotent except [`encode_infrared`], which picks its device
//! sub-code at random per call.

use crate::{
    IR_PACKET, LIGHT_PACKET, LightColor, MOTOR_PACKET, ProtocolError, ProtocolResult,
    SHUTDOWN_PACKET, TEST_MODE_PACKET, UNIFIED_PACKET,
};
use kamigami_link::{FrameBuilder, encode_byte, encode_sequence};
use rand::seq::IndexedRandom;

/// Inclusive motor speed bound for the standalone motor command.
pub const MOTOR_SPEED_MAX: i32 = 63;
/// Inclusive motor speed bound for the unified packet's motor fields.
///
/// The firmware documents the unified motor fields as unsigned `0..=63`
/// while the standalone motor command is signed `-63..=63`. The asymmetry
/// is deliberate and preserved.
pub const UNIFIED_MOTOR_MAX: i32 = 63;

/// Total unified frame length, identifier included.
pub const UNIFIED_FRAME_LEN: usize = 20;
/// Unified flag bit: motor fields present.
pub const UNIFIED_FLAG_MOTOR: u8 = 0x01;
/// Unified flag bit: light fields present.
pub const UNIFIED_FLAG_LIGHTS: u8 = 0x04;

/// The infrared device sub-codes the robot understands. One is chosen
/// uniformly at random per emitted frame and appended as literal bytes.
pub const IR_DEVICE_CODES: [[u8; 2]; 3] = [[0x08, 0x02], [0x07, 0x02], [0x06, 0x02]];

fn check_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
    bounds: &'static str,
) -> ProtocolResult<()> {
    if value < min || value > max {
        return Err(ProtocolError::InvalidParameter {
            field,
            value,
            bounds,
        });
    }
    Ok(())
}

/// Encodes a differential motor speed frame: `[0x03, left, right]`.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidParameter`] when either speed is outside
/// `-63..=63`.
pub fn encode_motor(left: i32, right: i32) -> ProtocolResult<Vec<u8>> {
    check_range("left", left, -MOTOR_SPEED_MAX, MOTOR_SPEED_MAX, "-63..=63")?;
    check_range(
        "right",
        right,
        -MOTOR_SPEED_MAX,
        MOTOR_SPEED_MAX,
        "-63..=63",
    )?;
    Ok(encode_sequence(&[i32::from(MOTOR_PACKET), left, right])?)
}

/// Encodes a light frame: `[0x02, r, g, b]`.
///
/// Named palette entries resolve to their documented triple; explicit
/// channels are validated against `0..=255`.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidParameter`] naming the offending channel.
pub fn encode_light(color: LightColor) -> ProtocolResult<Vec<u8>> {
    let (r, g, b) = match color {
        LightColor::Named(palette) => {
            let (r, g, b) = palette.rgb();
            (i32::from(r), i32::from(g), i32::from(b))
        }
        LightColor::Channels { r, g, b } => {
            check_range("red", r, 0, 255, "0..=255")?;
            check_range("green", g, 0, 255, "0..=255")?;
            check_range("blue", b, 0, 255, "0..=255")?;
            (r, g, b)
        }
    };
    Ok(encode_sequence(&[i32::from(LIGHT_PACKET), r, g, b])?)
}

/// Encodes an infrared emit frame: `[0x05]` plus a randomly chosen 2-byte
/// device sub-code transmitted as literal payload bytes.
///
/// # Errors
///
/// Infallible in practice; the identifier always fits in one byte.
pub fn encode_infrared() -> ProtocolResult<Vec<u8>> {
    let code = IR_DEVICE_CODES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(IR_DEVICE_CODES[0]);
    let mut builder = FrameBuilder::with_capacity(3);
    builder.put_value(i32::from(IR_PACKET))?;
    builder.put_raw(&code);
    Ok(builder.into_frame())
}

/// Encodes the single-byte shutdown frame: `[0x01]`.
///
/// # Errors
///
/// Infallible in practice; the identifier always fits in one byte.
pub fn encode_shutdown() -> ProtocolResult<Vec<u8>> {
    Ok(vec![encode_byte(i32::from(SHUTDOWN_PACKET))?])
}

/// Encodes a test-mode frame: `[0x10, 0x01, speed, speed]`. The literal
/// `0x01` at position 1 is the firmware's enable flag.
///
/// The firmware documents no speed bound for test mode (unlike the motor
/// command); only the codec's one-byte range applies.
///
/// # Errors
///
/// Returns a wrapped [`kamigami_link::LinkError::ValueOutOfRange`] when the
/// speed does not fit in one byte.
pub fn encode_test_mode(speed: i32) -> ProtocolResult<Vec<u8>> {
    Ok(encode_sequence(&[
        i32::from(TEST_MODE_PACKET),
        1,
        speed,
        speed,
    ])?)
}

/// Encodes a 20-byte unified frame carrying any combination of motor and
/// light effects.
///
/// Byte 1 is the capability bitmask; unset capabilities leave their fields
/// zero. Supplying neither capability is legal and yields an identifier
/// followed by 19 zero bytes.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidParameter`] when a motor speed is
/// outside `0..=63` or a light channel is outside `0..=255`.
pub fn encode_unified(
    motor: Option<(i32, i32)>,
    lights: Option<(i32, i32, i32)>,
) -> ProtocolResult<Vec<u8>> {
    let mut fields = [0i32; UNIFIED_FRAME_LEN];
    fields[0] = i32::from(UNIFIED_PACKET);

    if let Some((left, right)) = motor {
        check_range("left", left, 0, UNIFIED_MOTOR_MAX, "0..=63")?;
        check_range("right", right, 0, UNIFIED_MOTOR_MAX, "0..=63")?;
        fields[1] |= i32::from(UNIFIED_FLAG_MOTOR);
        fields[2] = left;
        fields[3] = right;
    }

    if let Some((r, g, b)) = lights {
        check_range("red", r, 0, 255, "0..=255")?;
        check_range("green", g, 0, 255, "0..=255")?;
        check_range("blue", b, 0, 255, "0..=255")?;
        fields[1] |= i32::from(UNIFIED_FLAG_LIGHTS);
        fields[6] = r;
        fields[7] = g;
        fields[8] = b;
    }

    Ok(encode_sequence(&fields)?)
}

/// Pass-through encoder for raw numeric values. No identifier is prepended
/// and no validation applies beyond the codec's one-byte range.
///
/// # Errors
///
/// Returns a wrapped [`kamigami_link::LinkError::ValueOutOfRange`] for the
/// first value that does not fit in one byte.
pub fn encode_raw_numeric(values: &[i32]) -> ProtocolResult<Vec<u8>> {
    Ok(encode_sequence(values)?)
}

/// Pass-through encoder for `0x`-prefixed hex tokens.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedHex`] for any token missing the `0x`
/// prefix or containing non-hex digits; otherwise behaves exactly like
/// [`encode_raw_numeric`].
pub fn encode_raw_hex<S: AsRef<str>>(tokens: &[S]) -> ProtocolResult<Vec<u8>> {
    let values = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let digits = token
                .strip_prefix("0x")
                .ok_or_else(|| ProtocolError::MalformedHex(token.to_string()))?;
            i32::from_str_radix(digits, 16)
                .map_err(|_| ProtocolError::MalformedHex(token.to_string()))
        })
        .collect::<ProtocolResult<Vec<i32>>>()?;
    encode_raw_numeric(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaletteColor;

    #[test]
    fn test_motor_frame_layout() {
        assert_eq!(encode_motor(10, 10).expect("encode"), vec![0x03, 0x0A, 0x0A]);
        assert_eq!(encode_motor(63, -63).expect("encode"), vec![0x03, 0x3F, 0xC1]);
        assert_eq!(encode_motor(-1, 0).expect("encode"), vec![0x03, 0xFF, 0x00]);
    }

    #[test]
    fn test_motor_bounds_rejected() {
        assert!(matches!(
            encode_motor(64, 0),
            Err(ProtocolError::InvalidParameter { field: "left", .. })
        ));
        assert!(matches!(
            encode_motor(0, -64),
            Err(ProtocolError::InvalidParameter { field: "right", .. })
        ));
    }

    #[test]
    fn test_light_named_equals_channels() {
        let named = encode_light(LightColor::Named(PaletteColor::Red)).expect("encode");
        let channels = encode_light(LightColor::Channels { r: 255, g: 0, b: 0 }).expect("encode");
        assert_eq!(named, channels);
        assert_eq!(named, vec![0x02, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_light_channel_out_of_range() {
        assert!(matches!(
            encode_light(LightColor::Channels { r: 256, g: 0, b: 0 }),
            Err(ProtocolError::InvalidParameter { field: "red", .. })
        ));
        assert!(matches!(
            encode_light(LightColor::Channels { r: 0, g: 0, b: -1 }),
            Err(ProtocolError::InvalidParameter { field: "blue", .. })
        ));
    }

    #[test]
    fn test_shutdown_frame() {
        assert_eq!(encode_shutdown().expect("encode"), vec![0x01]);
    }

    #[test]
    fn test_test_mode_frame() {
        assert_eq!(
            encode_test_mode(10).expect("encode"),
            vec![0x10, 0x01, 0x0A, 0x0A]
        );
        // Unlike the motor command, test mode has no documented bound.
        assert_eq!(
            encode_test_mode(100).expect("encode"),
            vec![0x10, 0x01, 0x64, 0x64]
        );
    }

    #[test]
    fn test_test_mode_codec_guard_still_applies() {
        assert!(matches!(encode_test_mode(300), Err(ProtocolError::Link(_))));
    }

    #[test]
    fn test_infrared_frame() {
        for _ in 0..32 {
            let frame = encode_infrared().expect("encode");
            assert_eq!(frame.len(), 3);
            assert_eq!(frame[0], 0x05);
            let payload = [frame[1], frame[2]];
            assert!(IR_DEVICE_CODES.contains(&payload));
        }
    }

    #[test]
    fn test_unified_motor_only() {
        let frame = encode_unified(Some((5, 7)), None).expect("encode");
        assert_eq!(frame.len(), 20);
        assert_eq!(frame[0], 0x0F);
        assert_eq!(frame[1], 0x01);
        assert_eq!(frame[2], 5);
        assert_eq!(frame[3], 7);
        assert!(frame[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_unified_both_capabilities() {
        let frame = encode_unified(Some((5, 7)), Some((1, 2, 3))).expect("encode");
        assert_eq!(frame[1], 0x05);
        assert_eq!(&frame[2..4], &[5, 7]);
        assert_eq!(&frame[6..9], &[1, 2, 3]);
        assert_eq!(&frame[4..6], &[0, 0]);
        assert!(frame[9..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_unified_empty_is_legal() {
        let frame = encode_unified(None, None).expect("encode");
        assert_eq!(frame.len(), 20);
        assert_eq!(frame[0], 0x0F);
        assert!(frame[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_unified_motor_is_unsigned() {
        // The unified path documents 0..=63, not the motor command's signed
        // range. -1 is valid for encode_motor but not here.
        assert!(matches!(
            encode_unified(Some((-1, 0)), None),
            Err(ProtocolError::InvalidParameter { field: "left", .. })
        ));
        assert!(encode_motor(-1, 0).is_ok());
    }

    #[test]
    fn test_unified_light_bounds() {
        assert!(matches!(
            encode_unified(None, Some((0, 256, 0))),
            Err(ProtocolError::InvalidParameter { field: "green", .. })
        ));
    }

    #[test]
    fn test_raw_hex_matches_raw_numeric() {
        let hex = encode_raw_hex(&["0x3f", "0x3f"]).expect("encode");
        let numeric = encode_raw_numeric(&[63, 63]).expect("encode");
        assert_eq!(hex, numeric);
    }

    #[test]
    fn test_raw_hex_uppercase_digits() {
        assert_eq!(encode_raw_hex(&["0xFF", "0x0a"]).expect("encode"), vec![0xFF, 0x0A]);
    }

    #[test]
    fn test_raw_hex_rejects_unprefixed() {
        assert!(matches!(
            encode_raw_hex(&["3f"]),
            Err(ProtocolError::MalformedHex(token)) if token == "3f"
        ));
        assert!(matches!(
            encode_raw_hex(&["0x3f", "0xzz"]),
            Err(ProtocolError::MalformedHex(token)) if token == "0xzz"
        ));
        assert!(encode_raw_hex(&["0x"]).is_err());
    }

    #[test]
    fn test_raw_numeric_empty() {
        assert_eq!(encode_raw_numeric(&[]).expect("encode"), Vec::<u8>::new());
    }
}
