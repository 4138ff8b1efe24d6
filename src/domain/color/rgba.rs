//! RGBA color value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidColorError;

/// Color with straight (non-premultiplied) channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black, the background used when nothing is stored
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |c: u8| f32::from(c) / 255.0;
        Self::new(unit(r), unit(g), unit(b), unit(a))
    }

    /// Quantize to 8-bit channels, clamping out-of-range values
    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Channels paired with their names, in storage order
    pub(crate) fn channels(&self) -> [(char, f32); 4] {
        [('r', self.r), ('g', self.g), ('b', self.b), ('a', self.a)]
    }

    /// Compare channel-wise within `tolerance`
    pub fn approx_eq(&self, other: &Rgba, tolerance: f32) -> bool {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .all(|((_, x), (_, y))| (x - y).abs() <= tolerance)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Rgba {
    type Err = InvalidColorError;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidColorError {
            input: s.to_string(),
        };
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let alpha = if hex.len() == 8 { byte(6)? } else { u8::MAX };
        Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}
