//! Named palette colors for the light command

use crate::ProtocolError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed palette the firmware documentation names. Each resolves to an
/// RGB triple; anything else must be sent as explicit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Cyan,
}

impl PaletteColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 0, 0),
            Self::Blue => (0, 0, 255),
            Self::Green => (0, 255, 0),
            Self::Yellow => (255, 255, 0),
            Self::Purple => (127, 0, 127),
            Self::Cyan => (0, 255, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
        }
    }
}

impl FromStr for PaletteColor {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "purple" => Ok(Self::Purple),
            "cyan" => Ok(Self::Cyan),
            _ => Err(ProtocolError::UnknownColor(s.to_string())),
        }
    }
}

/// Light command argument: a named palette entry or explicit channels.
///
/// Channels are carried as `i32` so out-of-range requests surface as
/// [`ProtocolError::InvalidParameter`] instead of silently truncating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightColor {
    Named(PaletteColor),
    Channels { r: i32, g: i32, b: i32 },
}
