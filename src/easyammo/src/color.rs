//! Colour model and colour-space math
//!
//! A background colour is either a vanilla name or a hex string. Hex values
//! are only meaningful to the client when a colour-conversion plugin is
//! installed; gradients are computed here in 8-bit RGB.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::VanillaColor;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Colour {0} cannot be used without Color Converter API installed.")]
    HexWithoutConverter(String),

    #[error(
        "INVALID_INTERPOLATION_AMOUNT - Colour interpolation amount should be between 0 and 1 (got {0})."
    )]
    InvalidInterpolationAmount(f64),

    #[error("'{0}' is neither a vanilla colour nor a hex colour")]
    InvalidColor(String),
}

/// Check for 3 or 6 hex digits after an optional leading `#`
pub fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A validated hex colour string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        if !is_hex_color(value) {
            return Err(ColorError::InvalidColor(value.to_string()));
        }
        let digits = value.strip_prefix('#').unwrap_or(value);
        Ok(Self(format!("#{}", digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> Rgb {
        let digits = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

        if digits.len() == 3 {
            let (r, g, b) = (&digits[0..1], &digits[1..2], &digits[2..3]);
            Rgb {
                r: channel(r.repeat(2).as_str()),
                g: channel(g.repeat(2).as_str()),
                b: channel(b.repeat(2).as_str()),
            }
        } else {
            Rgb {
                r: channel(&digits[0..2]),
                g: channel(&digits[2..4]),
                b: channel(&digits[4..6]),
            }
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 8-bit RGB triple, only used while interpolating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Uppercase `#RRGGBB`
    pub fn to_hex(self) -> HexColor {
        HexColor(format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b))
    }

    /// Per-channel linear interpolation, rounded to the nearest integer
    pub fn lerp(self, other: Rgb, amt: f64) -> Result<Rgb, ColorError> {
        let channel = |a: u8, b: u8| -> Result<u8, ColorError> {
            let v = lerp(f64::from(a), f64::from(b), amt)?;
            Ok(v.round().clamp(0.0, 255.0) as u8)
        };
        Ok(Rgb {
            r: channel(self.r, other.r)?,
            g: channel(self.g, other.g)?,
            b: channel(self.b, other.b)?,
        })
    }
}

/// `(1 - amt) * start + amt * end`, refusing amounts outside [0, 1]
pub fn lerp(start: f64, end: f64, amt: f64) -> Result<f64, ColorError> {
    if !(0.0..=1.0).contains(&amt) {
        return Err(ColorError::InvalidInterpolationAmount(amt));
    }
    Ok((1.0 - amt) * start + amt * end)
}

/// A background colour as stored on an item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Vanilla(VanillaColor),
    Hex(HexColor),
}

impl Color {
    pub const BLACK: Color = Color::Vanilla(VanillaColor::Black);

    /// Vanilla names win over the hex pattern when a string could be both
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        if let Ok(vanilla) = value.parse::<VanillaColor>() {
            return Ok(Self::Vanilla(vanilla));
        }
        HexColor::parse(value).map(Self::Hex)
    }

    pub fn is_hex(&self) -> bool {
        matches!(self, Self::Hex(_))
    }

    /// RGB value, vanilla names going through their fixed hex
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Vanilla(v) => HexColor(v.hex().to_string()).to_rgb(),
            Self::Hex(h) => h.to_rgb(),
        }
    }
}

/// Interpolate between two colours and return the uppercase hex result
pub fn interpolate(start: &Color, end: &Color, amt: f64) -> Result<Color, ColorError> {
    let rgb = start.to_rgb().lerp(end.to_rgb(), amt)?;
    Ok(Color::Hex(rgb.to_hex()))
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vanilla(v) => write!(f, "{}", v),
            Self::Hex(h) => write!(f, "{}", h),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<VanillaColor> for Color {
    fn from(color: VanillaColor) -> Self {
        Self::Vanilla(color)
    }
}
