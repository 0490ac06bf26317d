use crate::foundation::error::{PixgenError, PixgenResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Straight (non-premultiplied) 8-bit RGBA colour.
///
/// Serialized as a `#rrggbbaa` hex string so option files stay readable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, the zero value of every fresh canvas.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Build a colour from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque colour.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channel array in RGBA byte order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from an RGBA byte quadruple.
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> PixgenResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || PixgenError::validation(format!("invalid hex colour '{s}'"));
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }

        let nibble = |i: usize| -> PixgenResult<u8> {
            u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| bad())
        };
        let byte = |i: usize| -> PixgenResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad())
        };

        match hex.len() {
            3 => Ok(Self::opaque(
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
            )),
            6 => Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }

    /// Parse a CSS-style colour name (`black`, `orange`, ...) or any form accepted by
    /// [`Rgba8::from_hex`]. Names are case-insensitive.
    pub fn from_name_or_hex(s: &str) -> PixgenResult<Self> {
        let key = s.trim().to_ascii_lowercase();
        let named = match key.as_str() {
            "black" => Self::opaque(0x00, 0x00, 0x00),
            "white" => Self::opaque(0xff, 0xff, 0xff),
            "red" => Self::opaque(0xff, 0x00, 0x00),
            "green" => Self::opaque(0x00, 0xff, 0x00),
            "blue" => Self::opaque(0x00, 0x00, 0xff),
            "yellow" => Self::opaque(0xff, 0xff, 0x00),
            "cyan" => Self::opaque(0x00, 0xff, 0xff),
            "magenta" => Self::opaque(0xff, 0x00, 0xff),
            "gray" | "grey" => Self::opaque(0x80, 0x80, 0x80),
            "purple" => Self::opaque(0x80, 0x00, 0x80),
            "orange" => Self::opaque(0xff, 0xa5, 0x00),
            _ => return Self::from_hex(s),
        };
        Ok(named)
    }

    /// Format as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = PixgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name_or_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

/// Integer pixel coordinate used by the scan converters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Build a pixel coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
