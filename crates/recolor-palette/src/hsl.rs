//! Field-to-HSL mappings and HSL to RGB conversion.
//!
//! Two parallel, separately callable paths:
//!
//! - The **offset path** ([`fields_to_hsl`] + [`hsl_to_rgb01`]) is what the
//!   live pipeline uses. The additive constants (1/128 on hue, 1/16 on
//!   saturation) match the game's own palette decode and must not be
//!   "normalized away".
//! - The **reference path** ([`fields_to_rgb01_reference`]) maps fields by
//!   plain ratio and runs them through the classic HLS conversion. It is kept
//!   only so the offset path can be cross-validated against a trusted
//!   implementation.
//!
//! # Range
//!
//! - Field inputs: hue 0-63, saturation 0-7, lightness 0-127
//! - Float outputs: [0, 1] per channel

/// Maps packed bitfield values to normalized HSL using the palette offsets.
///
/// # Formula
///
/// ```text
/// H = hue / 64 + 1/128
/// S = sat / 8  + 1/16
/// L = light / 128
/// ```
///
/// # Example
///
/// ```rust
/// use recolor_palette::hsl::fields_to_hsl;
///
/// let [h, s, l] = fields_to_hsl(0, 0, 0);
/// assert_eq!([h, s, l], [1.0 / 128.0, 1.0 / 16.0, 0.0]);
/// ```
#[inline]
pub fn fields_to_hsl(hue: u8, sat: u8, light: u8) -> [f64; 3] {
    [
        hue as f64 / 64.0 + 1.0 / 128.0,
        sat as f64 / 8.0 + 1.0 / 16.0,
        light as f64 / 128.0,
    ]
}

/// Hue helper for [`hsl_to_rgb01`]: wraps into [0, 1] by a single add or
/// subtract, then selects among four linear segments at 1/6, 1/2, 2/3.
#[inline]
fn hue_to_channel(mut f: f64, a: f64, b: f64) -> f64 {
    if f < 0.0 {
        f += 1.0;
    }
    if f > 1.0 {
        f -= 1.0;
    }
    if f < 1.0 / 6.0 {
        return b + (a - b) * 6.0 * f;
    }
    if f < 1.0 / 2.0 {
        return a;
    }
    if f < 2.0 / 3.0 {
        return b + (a - b) * (2.0 / 3.0 - f) * 6.0;
    }
    b
}

/// Converts normalized HSL to RGB in [0, 1].
///
/// Achromatic input (`S <= 0`) short-circuits to `(L, L, L)`. Otherwise the
/// chroma anchors are `a = L*(1+S)` for `L < 0.5`, else `a = L+S-L*S`, with
/// `b = 2L-a`, and each channel comes from the hue helper evaluated at
/// `H+1/3`, `H`, `H-1/3`.
///
/// # Example
///
/// ```rust
/// use recolor_palette::hsl::hsl_to_rgb01;
///
/// // Zero saturation collapses to gray.
/// assert_eq!(hsl_to_rgb01([0.3, 0.0, 0.5]), [0.5, 0.5, 0.5]);
/// ```
pub fn hsl_to_rgb01(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    if s <= 0.0 {
        return [l, l, l];
    }
    let a = if l < 0.5 { l * (1.0 + s) } else { (l + s) - l * s };
    let b = 2.0 * l - a;
    [
        hue_to_channel(h + 1.0 / 3.0, a, b),
        hue_to_channel(h, a, b),
        hue_to_channel(h - 1.0 / 3.0, a, b),
    ]
}

/// Reference path: unscaled field ratios through the classic HLS conversion.
///
/// Fields map as `hue/63`, `light/127`, `sat/7` with no offsets. The result
/// matches the textbook HLS-to-RGB conversion (Python's `colorsys` among
/// others) to floating-point precision, which makes this path trivially
/// auditable. Not interchangeable with the offset path.
pub fn fields_to_rgb01_reference(hue: u8, sat: u8, light: u8) -> [f64; 3] {
    hls_to_rgb(hue as f64 / 63.0, light as f64 / 127.0, sat as f64 / 7.0)
}

/// Classic HLS to RGB (argument order hue, lightness, saturation).
fn hls_to_rgb(h: f64, l: f64, s: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    [
        hls_value(m1, m2, h + 1.0 / 3.0),
        hls_value(m1, m2, h),
        hls_value(m1, m2, h - 1.0 / 3.0),
    ]
}

#[inline]
fn hls_value(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 1.0 / 2.0 {
        return m2;
    }
    if hue < 2.0 / 3.0 {
        return m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0;
    }
    m1
}
