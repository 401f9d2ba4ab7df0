//! Brightness shaping, quantization, and ARGB packing.
//!
//! Covers everything between normalized RGB and the signed 32-bit pixel
//! value, plus the pre-RGB lightness shading that operates on the packed
//! index itself.

use crate::codec;
use crate::hsl;

/// Hard bounds of the 7-bit lightness field.
const LIGHT_FIELD_RANGE: (i32, i32) = (0, 127);

/// Raises each channel to `exponent` and clamps to [0, 1].
///
/// Identity when `exponent` is `None` or within 1e-12 of 1.0; in that case
/// the input is returned untouched. Exponents <= 0 are rejected by the
/// caller's option validation and never reach this function.
///
/// # Example
///
/// ```rust
/// use recolor_palette::shade::apply_brightness_exponent;
///
/// let rgb = [0.25, 0.5, 0.75];
/// assert_eq!(apply_brightness_exponent(rgb, None), rgb);
/// let darker = apply_brightness_exponent(rgb, Some(2.0));
/// assert!(darker[0] < rgb[0]);
/// ```
pub fn apply_brightness_exponent(rgb: [f64; 3], exponent: Option<f64>) -> [f64; 3] {
    let exp = match exponent {
        Some(e) if (e - 1.0).abs() >= 1e-12 => e,
        _ => return rgb,
    };
    [
        rgb[0].powf(exp).clamp(0.0, 1.0),
        rgb[1].powf(exp).clamp(0.0, 1.0),
        rgb[2].powf(exp).clamp(0.0, 1.0),
    ]
}

/// Truncating quantizer: `trunc(channel * 256)` clamped to [0, 255].
///
/// This is the variant the live pipeline uses; it reproduces the game
/// client's own float-to-byte conversion.
#[inline]
pub fn quantize_trunc(rgb: [f64; 3]) -> (u8, u8, u8) {
    let q = |c: f64| ((c * 256.0) as i32).clamp(0, 255) as u8;
    (q(rgb[0]), q(rgb[1]), q(rgb[2]))
}

/// Rounding quantizer: `round(channel * 255)` clamped to [0, 255].
///
/// Secondary variant, exposed for callers that want conventional
/// nearest-value quantization.
#[inline]
pub fn quantize_round(rgb: [f64; 3]) -> (u8, u8, u8) {
    let q = |c: f64| ((c * 255.0).round() as i32).clamp(0, 255) as u8;
    (q(rgb[0]), q(rgb[1]), q(rgb[2]))
}

/// Packs RGB bytes into a signed 32-bit ARGB word with alpha 0xFF.
///
/// The unsigned bit pattern is reinterpreted as two's complement, matching
/// Java's `int` pixels: pure white is exactly -1.
///
/// # Example
///
/// ```rust
/// use recolor_palette::shade::argb;
///
/// assert_eq!(argb(255, 255, 255), -1);
/// assert_eq!(argb(0, 0, 0), 0xFF000000u32 as i32);
/// ```
#[inline]
pub fn argb(r: u8, g: u8, b: u8) -> i32 {
    (0xFF00_0000u32 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)) as i32
}

/// Formats a signed ARGB value as its unsigned hex pattern, e.g. `0xFFFFFFFF`.
#[inline]
pub fn argb_hex(argb: i32) -> String {
    format!("0x{:08X}", argb as u32)
}

/// Scales the lightness field of a packed index before conversion.
///
/// Identity when `scale` is `None` or within 1e-9 of 1.0. Otherwise the new
/// lightness is `trunc(light * scale)`, clamped first to the caller's
/// `[lmin, lmax]` and then to the field's hard [0, 127] bounds; hue and
/// saturation pass through unchanged. Callers validate `lmin <= lmax` within
/// [0, 127] before invoking.
///
/// # Example
///
/// ```rust
/// use recolor_palette::codec::{pack, unpack};
/// use recolor_palette::shade::shade_lightness;
///
/// let shaded = shade_lightness(pack(10, 2, 50), Some(0.5), 40, 60);
/// assert_eq!(unpack(shaded), (10, 2, 40));
/// ```
pub fn shade_lightness(packed: u16, scale: Option<f64>, lmin: u8, lmax: u8) -> u16 {
    let scale = match scale {
        Some(s) if (s - 1.0).abs() >= 1e-9 => s,
        _ => return packed,
    };
    let (h, s, l) = codec::unpack(packed);
    let new_l = (l as f64 * scale) as i32;
    let new_l = new_l
        .clamp(lmin as i32, lmax as i32)
        .clamp(LIGHT_FIELD_RANGE.0, LIGHT_FIELD_RANGE.1);
    codec::pack(h, s, new_l as u8)
}

/// Full primary-path conversion from a packed index to RGB bytes.
///
/// Unpack, offset HSL mapping, HSL to RGB, optional brightness exponent,
/// truncating quantization.
pub fn index_to_rgb8(packed: u16, exponent: Option<f64>) -> (u8, u8, u8) {
    let (h, s, l) = codec::unpack(packed);
    let rgb = hsl::hsl_to_rgb01(hsl::fields_to_hsl(h, s, l));
    let rgb = apply_brightness_exponent(rgb, exponent);
    quantize_trunc(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{pack, unpack};

    #[test]
    fn brightness_identity() {
        let rgb = [0.25, 0.5, 0.75];
        assert_eq!(apply_brightness_exponent(rgb, None), rgb);
        assert_eq!(apply_brightness_exponent(rgb, Some(1.0)), rgb);
        // Within the identity tolerance.
        assert_eq!(apply_brightness_exponent(rgb, Some(1.0 + 1e-13)), rgb);
    }

    #[test]
    fn brightness_exponent_darkens() {
        let rgb = [0.25, 0.5, 0.75];
        let darker = apply_brightness_exponent(rgb, Some(2.0));
        for (d, o) in darker.iter().zip(rgb.iter()) {
            assert!(d < o, "{d} >= {o}");
        }
    }

    #[test]
    fn brightness_exponent_clamps() {
        let out = apply_brightness_exponent([1.0, 1.0, 1.0], Some(0.5));
        assert_eq!(out, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn quantize_trunc_white() {
        assert_eq!(quantize_trunc([1.0, 1.0, 1.0]), (255, 255, 255));
        assert_eq!(quantize_trunc([0.0, 0.0, 0.0]), (0, 0, 0));
        // 0.5 * 256 = 128 exactly; just below truncates down.
        assert_eq!(quantize_trunc([0.5, 0.4999, 0.0]).0, 128);
        assert_eq!(quantize_trunc([0.5, 0.4999, 0.0]).1, 127);
    }

    #[test]
    fn quantize_round_midpoint() {
        assert_eq!(quantize_round([0.5, 0.5, 0.5]), (128, 128, 128));
        assert_eq!(quantize_round([1.0, 0.0, 1.0]), (255, 0, 255));
    }

    #[test]
    fn argb_sign_semantics() {
        assert_eq!(argb(255, 255, 255), -1);
        assert_eq!(argb(0, 0, 0), -16777216); // 0xFF000000
        assert_eq!(argb(0x12, 0x34, 0x56) as u32, 0xFF123456);
    }

    #[test]
    fn argb_hex_formats_unsigned_pattern() {
        assert_eq!(argb_hex(-1), "0xFFFFFFFF");
        assert_eq!(argb_hex(argb(0x12, 0x34, 0x56)), "0xFF123456");
    }

    #[test]
    fn shade_lightness_identity_near_one() {
        let idx = pack(10, 2, 50);
        assert_eq!(shade_lightness(idx, None, 2, 126), idx);
        assert_eq!(shade_lightness(idx, Some(1.0), 2, 126), idx);
        assert_eq!(shade_lightness(idx, Some(1.0 + 1e-10), 2, 126), idx);
    }

    #[test]
    fn shade_lightness_clamps_to_caller_bounds() {
        let idx = pack(10, 2, 50);
        let shaded = shade_lightness(idx, Some(0.5), 40, 60);
        // 0.5 * 50 = 25, clamped up to the caller minimum of 40.
        assert_eq!(unpack(shaded), (10, 2, 40));
    }

    #[test]
    fn shade_lightness_truncates_before_clamping() {
        let idx = pack(0, 0, 10);
        // 10 * 0.79 = 7.9 truncates to 7.
        let shaded = shade_lightness(idx, Some(0.79), 0, 127);
        assert_eq!(unpack(shaded).2, 7);
    }

    #[test]
    fn shade_lightness_hard_field_bounds() {
        let idx = pack(5, 3, 100);
        // Caller bounds wider than the field cannot push past 127.
        let shaded = shade_lightness(idx, Some(10.0), 0, 127);
        assert_eq!(unpack(shaded), (5, 3, 127));
    }

    #[test]
    fn index_to_rgb8_is_deterministic_and_opaque() {
        let a = index_to_rgb8(8115, None);
        let b = index_to_rgb8(8115, None);
        assert_eq!(a, b);
        let pixel = argb(a.0, a.1, a.2);
        assert_eq!((pixel as u32) >> 24, 0xFF);
    }
}
