//! Fixed-layout binary encoding for persisted colors
//!
//! Layout (version 1, 10 bytes):
//!
//! | offset | size | content                       |
//! |--------|------|-------------------------------|
//! | 0      | 1    | magic `b'C'`                  |
//! | 1      | 1    | layout version (`1`)          |
//! | 2      | 8    | r, g, b, a as big-endian u16  |
//!
//! Each channel is stored as `round(x * 65535)`.

use crate::domain::error::ColorEncodeError;

use super::rgba::Rgba;

const MAGIC: u8 = b'C';
const VERSION: u8 = 1;
const ENCODED_LEN: usize = 10;
const CHANNEL_SCALE: f32 = u16::MAX as f32;

/// Largest difference a round trip can introduce on one channel
pub const PRECISION: f32 = 1.0 / CHANNEL_SCALE;

/// Encode a color.
///
/// Fails if any channel is not a finite value in `0.0..=1.0`.
pub fn encode(color: &Rgba) -> Result<Vec<u8>, ColorEncodeError> {
    let mut bytes = Vec::with_capacity(ENCODED_LEN);
    bytes.push(MAGIC);
    bytes.push(VERSION);

    for (channel, value) in color.channels() {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ColorEncodeError { channel, value });
        }
        let fixed = (value * CHANNEL_SCALE).round() as u16;
        bytes.extend_from_slice(&fixed.to_be_bytes());
    }

    Ok(bytes)
}

/// Decode a color, returning None for anything that is not a valid
/// version 1 encoding.
pub fn decode(bytes: &[u8]) -> Option<Rgba> {
    if bytes.len() != ENCODED_LEN || bytes[0] != MAGIC || bytes[1] != VERSION {
        return None;
    }

    let channel = |i: usize| {
        let fixed = u16::from_be_bytes([bytes[2 + i * 2], bytes[3 + i * 2]]);
        f32::from(fixed) / CHANNEL_SCALE
    };
    Some(Rgba::new(channel(0), channel(1), channel(2), channel(3)))
}
