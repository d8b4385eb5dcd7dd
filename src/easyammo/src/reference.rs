//! Vanilla background colours
//!
//! The built-in colour names the game client understands without any
//! colour-conversion plugin, and the fixed hex value each one maps to when
//! it takes part in a gradient.

use serde::{Deserialize, Serialize};

/// Hex value used for black and for any name not in the table
pub const BLACK_HEX: &str = "#000000";

/// A built-in background colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VanillaColor {
    Black,
    Blue,
    Default,
    Green,
    Orange,
    Red,
    TracerGreen,
    TracerRed,
    TracerYellow,
    Violet,
    Yellow,
}

/// Vanilla colour table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanillaColorInfo {
    pub color: VanillaColor,
    pub name: &'static str,
    pub hex: &'static str,
}

/// All vanilla colours, in the order the game lists them
pub const VANILLA_COLORS: &[VanillaColorInfo] = &[
    VanillaColorInfo {
        color: VanillaColor::Black,
        name: "black",
        hex: BLACK_HEX,
    },
    VanillaColorInfo {
        color: VanillaColor::Blue,
        name: "blue",
        hex: "#003366",
    },
    VanillaColorInfo {
        color: VanillaColor::Default,
        name: "default",
        hex: "#666666",
    },
    VanillaColorInfo {
        color: VanillaColor::Green,
        name: "green",
        hex: "#336600",
    },
    VanillaColorInfo {
        color: VanillaColor::Orange,
        name: "orange",
        hex: "#993300",
    },
    VanillaColorInfo {
        color: VanillaColor::Red,
        name: "red",
        hex: "#660000",
    },
    VanillaColorInfo {
        color: VanillaColor::TracerGreen,
        name: "tracerGreen",
        hex: "#00cc00",
    },
    VanillaColorInfo {
        color: VanillaColor::TracerRed,
        name: "tracerRed",
        hex: "#ff0000",
    },
    VanillaColorInfo {
        color: VanillaColor::TracerYellow,
        name: "tracerYellow",
        hex: "#ffff00",
    },
    VanillaColorInfo {
        color: VanillaColor::Violet,
        name: "violet",
        hex: "#330066",
    },
    VanillaColorInfo {
        color: VanillaColor::Yellow,
        name: "yellow",
        hex: "#666600",
    },
];

/// Get vanilla colour info by its wire name
pub fn vanilla_by_name(name: &str) -> Option<&'static VanillaColorInfo> {
    VANILLA_COLORS.iter().find(|v| v.name == name)
}

/// Hex value for a colour name, black's hex when the name is unknown
pub fn vanilla_hex(name: &str) -> &'static str {
    vanilla_by_name(name).map_or(BLACK_HEX, |v| v.hex)
}

impl VanillaColor {
    fn info(self) -> &'static VanillaColorInfo {
        // Every variant has exactly one table row.
        VANILLA_COLORS
            .iter()
            .find(|v| v.color == self)
            .unwrap_or(&VANILLA_COLORS[0])
    }

    /// Name as written in configuration files and item records
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Fixed hex equivalent used for interpolation
    pub fn hex(self) -> &'static str {
        self.info().hex
    }
}

impl std::fmt::Display for VanillaColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for VanillaColor {
    type Err = UnknownVanillaColor;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        vanilla_by_name(s)
            .map(|v| v.color)
            .ok_or_else(|| UnknownVanillaColor(s.to_string()))
    }
}

/// A string that is not one of the vanilla colour names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid background color")]
pub struct UnknownVanillaColor(pub String);
