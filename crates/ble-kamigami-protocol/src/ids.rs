//! Packet identifiers for the Kamigami command protocol
//!
//! Identifier values come from the robot firmware and never change at
//! runtime. The first byte of every outgoing frame is one of these.

/// Shutdown command.
pub const SHUTDOWN_PACKET: u8 = 1;
/// RGB light command.
pub const LIGHT_PACKET: u8 = 2;
/// Differential motor speed command.
pub const MOTOR_PACKET: u8 = 3;
/// Infrared emit command.
pub const IR_PACKET: u8 = 5;
/// Sticky packet set. Present in the firmware's identifier table but the
/// host protocol defines no encoder for it; reserved.
pub const STICKY_PACKET_SET: u8 = 12;
/// Unified multi-capability command.
pub const UNIFIED_PACKET: u8 = 15;
/// Hardware test mode command.
pub const TEST_MODE_PACKET: u8 = 16;

/// The kinds of frame the host can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    Shutdown,
    Light,
    Motor,
    Infrared,
    Unified,
    TestMode,
}

impl PacketKind {
    /// The identifier byte placed at position 0 of the frame.
    pub fn id(self) -> u8 {
        match self {
            Self::Shutdown => SHUTDOWN_PACKET,
            Self::Light => LIGHT_PACKET,
            Self::Motor => MOTOR_PACKET,
            Self::Infrared => IR_PACKET,
            Self::Unified => UNIFIED_PACKET,
            Self::TestMode => TEST_MODE_PACKET,
        }
    }

    /// Total encoded frame length in bytes, identifier included.
    pub fn frame_len(self) -> usize {
        match self {
            Self::Shutdown => 1,
            Self::Light => 4,
            Self::Motor => 3,
            Self::Infrared => 3,
            Self::Unified => 20,
            Self::TestMode => 4,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            SHUTDOWN_PACKET => Some(Self::Shutdown),
            LIGHT_PACKET => Some(Self::Light),
            MOTOR_PACKET => Some(Self::Motor),
            IR_PACKET => Some(Self::Infrared),
            UNIFIED_PACKET => Some(Self::Unified),
            TEST_MODE_PACKET => Some(Self::TestMode),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Shutdown => "shutdown",
            Self::Light => "light",
            Self::Motor => "motor",
            Self::Infrared => "infrared",
            Self::Unified => "unified",
            Self::TestMode => "test mode",
        }
    }
}
