//! Wire-format regression tests against known-good frames.
//!
//! These byte vectors were captured from the reference host implementation;
//! any change here is a wire-format break, not a refactor.

use ble_kamigami_protocol as proto;
use proto::{Command, LightColor, PaletteColor};

#[test]
fn motor_full_forward() {
    let frame = proto::encode_motor(63, 63).expect("encode");
    assert_eq!(frame, vec![0x03, 0x3F, 0x3F]);
}

#[test]
fn motor_reverse_wraps_twos_complement() {
    let frame = proto::encode_motor(-1, -63).expect("encode");
    assert_eq!(frame, vec![0x03, 0xFF, 0xC1]);
}

#[test]
fn motor_rejects_sixty_four_both_signs() {
    assert!(proto::encode_motor(64, 0).is_err());
    assert!(proto::encode_motor(0, -64).is_err());
    assert!(proto::encode_motor(63, -63).is_ok());
}

#[test]
fn light_palette_matches_explicit_channels() {
    for color in [
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Cyan,
    ] {
        let (r, g, b) = color.rgb();
        let named = proto::encode_light(LightColor::Named(color)).expect("encode");
        let explicit = proto::encode_light(LightColor::Channels {
            r: i32::from(r),
            g: i32::from(g),
            b: i32::from(b),
        })
        .expect("encode");
        assert_eq!(named, explicit);
        assert_eq!(named[0], 0x02);
        assert_eq!(named.len(), 4);
    }
}

#[test]
fn light_red_exact_bytes() {
    let frame = proto::encode_light(LightColor::Named(PaletteColor::Red)).expect("encode");
    assert_eq!(frame, vec![0x02, 0xFF, 0x00, 0x00]);
}

#[test]
fn shutdown_single_byte() {
    assert_eq!(proto::encode_shutdown().expect("encode"), vec![0x01]);
}

#[test]
fn test_mode_duplicates_speed() {
    assert_eq!(
        proto::encode_test_mode(10).expect("encode"),
        vec![0x10, 0x01, 0x0A, 0x0A]
    );
}

#[test]
fn unified_motor_only_flag_and_padding() {
    let frame = proto::encode_unified(Some((5, 7)), None).expect("encode");
    let mut expected = vec![0u8; 20];
    expected[0] = 0x0F;
    expected[1] = 0x01;
    expected[2] = 5;
    expected[3] = 7;
    assert_eq!(frame, expected);
}

#[test]
fn unified_both_capabilities_flag_is_or() {
    let frame = proto::encode_unified(Some((5, 7)), Some((1, 2, 3))).expect("encode");
    assert_eq!(frame[1], 0x05);
    assert_eq!((frame[2], frame[3]), (5, 7));
    assert_eq!((frame[6], frame[7], frame[8]), (1, 2, 3));
}

#[test]
fn raw_hex_and_raw_numeric_agree() {
    assert_eq!(
        proto::encode_raw_hex(&["0x3f", "0x3f"]).expect("encode"),
        proto::encode_raw_numeric(&[63, 63]).expect("encode")
    );
}

#[test]
fn raw_hex_requires_prefix() {
    assert!(matches!(
        proto::encode_raw_hex(&["3f"]),
        Err(proto::ProtocolError::MalformedHex(_))
    ));
}

#[test]
fn infrared_payload_from_candidate_set() {
    // Selection is randomized; assert membership, never a fixed value.
    for _ in 0..64 {
        let frame = proto::encode_infrared().expect("encode");
        assert_eq!(frame.len(), 3);
        assert_eq!(frame[0], 0x05);
        assert!(proto::IR_DEVICE_CODES.contains(&[frame[1], frame[2]]));
    }
}

#[test]
fn deterministic_commands_are_idempotent() {
    let commands = [
        Command::Motor { left: 12, right: -12 },
        Command::Light(LightColor::Named(PaletteColor::Purple)),
        Command::TestMode { speed: 20 },
        Command::Shutdown,
        Command::Unified {
            motor: Some((0, 63)),
            lights: Some((255, 0, 127)),
        },
    ];
    for command in commands {
        assert_eq!(
            command.encode().expect("encode"),
            command.encode().expect("encode")
        );
    }
}
