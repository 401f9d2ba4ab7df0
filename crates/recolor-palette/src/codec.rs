//! Packed HSL bitfield codec.
//!
//! Layout of the 16-bit palette index:
//!
//! ```text
//! bits 10-15   hue         (6 bits, 0-63)
//! bits  7-9    saturation  (3 bits, 0-7)
//! bits  0-6    lightness   (7 bits, 0-127)
//! ```
//!
//! Both directions are pure and total; [`pack`] masks each field to its
//! width, so `pack(unpack(x)) == x` for every 16-bit value.

/// Maximum hue field value (6 bits).
pub const HUE_MAX: u8 = 63;

/// Maximum saturation field value (3 bits).
pub const SAT_MAX: u8 = 7;

/// Maximum lightness field value (7 bits).
pub const LIGHT_MAX: u8 = 127;

/// Splits a packed palette index into `(hue, sat, light)` fields.
///
/// # Example
///
/// ```rust
/// use recolor_palette::codec::unpack;
///
/// assert_eq!(unpack(0), (0, 0, 0));
/// assert_eq!(unpack(u16::MAX), (63, 7, 127));
/// ```
#[inline]
pub fn unpack(packed: u16) -> (u8, u8, u8) {
    (
        ((packed >> 10) & 0x3F) as u8,
        ((packed >> 7) & 0x07) as u8,
        (packed & 0x7F) as u8,
    )
}

/// Combines `(hue, sat, light)` fields into a packed palette index.
///
/// Fields wider than their bit allocation are masked down first.
///
/// # Example
///
/// ```rust
/// use recolor_palette::codec::{pack, unpack};
///
/// let packed = pack(10, 2, 50);
/// assert_eq!(unpack(packed), (10, 2, 50));
/// ```
#[inline]
pub fn pack(hue: u8, sat: u8, light: u8) -> u16 {
    (((hue & 0x3F) as u16) << 10) | (((sat & 0x07) as u16) << 7) | ((light & 0x7F) as u16)
}
