//! # recolor-palette
//!
//! Codec and color transforms for the game's packed HSL palette format.
//!
//! The palette stores each color as a 16-bit bitfield (6-bit hue, 3-bit
//! saturation, 7-bit lightness). This crate unpacks that bitfield, maps it
//! to normalized HSL with the palette's additive offsets, converts to RGB,
//! and packs the result into a signed 32-bit Java-style ARGB integer.
//!
//! # Pipeline
//!
//! ```text
//! packed u16
//!     |  codec::unpack
//! (hue, sat, light)
//!     |  hsl::fields_to_hsl        (offset mapping, live path)
//! [H, S, L]
//!     |  hsl::hsl_to_rgb01
//! [r, g, b] in [0, 1]
//!     |  shade::apply_brightness_exponent   (optional)
//!     |  shade::quantize_trunc
//! (r, g, b) bytes
//!     |  shade::argb
//! i32 (alpha 0xFF, two's complement)
//! ```
//!
//! Lightness pre-shaping ([`shade::shade_lightness`]) operates on the packed
//! index before any float conversion.
//!
//! # Quick Start
//!
//! ```rust
//! use recolor_palette::{index_to_rgb8, argb};
//!
//! let (r, g, b) = index_to_rgb8(8115, None);
//! let pixel = argb(r, g, b);
//! assert_eq!((pixel as u32) >> 24, 0xFF);
//! ```
//!
//! # Two conversion paths
//!
//! [`hsl::fields_to_hsl`] applies the palette's additive offsets (1/128 on
//! hue, 1/16 on saturation) and drives the live pipeline.
//! [`hsl::fields_to_rgb01_reference`] uses plain field ratios through the
//! classic HLS conversion and exists only for cross-validation against a
//! known-good reference. The two are deliberately kept as separate functions.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod hsl;
pub mod shade;

pub use codec::{pack, unpack};
pub use hsl::{fields_to_hsl, fields_to_rgb01_reference, hsl_to_rgb01};
pub use shade::{
    apply_brightness_exponent, argb, argb_hex, index_to_rgb8, quantize_round, quantize_trunc,
    shade_lightness,
};
