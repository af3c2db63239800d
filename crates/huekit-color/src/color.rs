// SPDX-License-Identifier: MIT
//
// RGB and HSL value types with the conversions between them.
//
// HSL is stored with integer components (whole degrees, whole percents), which
// is what a color picker displays and what the shade tables are keyed on. The
// price is that RGB → HSL → RGB is lossy: rounding the hue to a whole degree
// and saturation/lightness to a whole percent can move a saturated channel by
// a few units on the way back. Primaries, secondaries and grays survive the
// round trip within ±1; arbitrary colors can drift further. The rounding is
// documented rather than hidden behind fractional fields.

use std::fmt;

use crate::hex::HexColor;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels.
///
/// The `u8` channels make the `[0, 255]` range a property of the type: any
/// clamping of free-text input happens before an `Rgb` exists, via
/// [`Rgb::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build an `Rgb` from unchecked integers, clamping each to `[0, 255]`.
    ///
    /// This is the caller-side guard for numeric text fields; the converters
    /// themselves never clamp.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Channels as a tuple, in `(r, g, b)` order.
    #[inline]
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels normalized to `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    #[inline]
    #[must_use]
    pub const fn to_hex(self) -> HexColor {
        rgb_to_hex(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL with whole-number components.
///
/// - `h`: hue in degrees, `[0, 360)`
/// - `s`: saturation in percent, `[0, 100]`
/// - `l`: lightness in percent, `[0, 100]`
///
/// [`Hsl::new`] wraps the hue into range. Saturation and lightness above 100
/// are a caller error; the conversion does not clamp them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s, l }
    }

    /// Same saturation and lightness at a different hue.
    #[inline]
    #[must_use]
    pub const fn with_hue(self, h: u16) -> Self {
        Self::new(h, self.s, self.l)
    }

    /// Same hue and saturation at a different lightness.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: u8) -> Self {
        Self { l, ..self }
    }

    /// Whether the color has no hue (saturation is zero).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.s == 0
    }

    #[inline]
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    #[inline]
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Read the channels out of a validated hex color.
#[inline]
#[must_use]
pub const fn hex_to_rgb(hex: &HexColor) -> Rgb {
    hex.rgb()
}

/// Format channels as a canonical `#RRGGBB` color.
#[inline]
#[must_use]
pub const fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor::from_rgb(rgb)
}

/// Convert RGB to whole-number HSL.
///
/// Standard max/min algorithm. The hue comes from whichever channel holds the
/// maximum, tested red, then green, then blue; in the red branch a negative
/// `(g - b)` is wrapped by adding a full turn. All three outputs are rounded
/// to the nearest integer, and a hue that rounds up to 360 wraps to 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();
    let max_byte = rgb.r.max(rgb.g).max(rgb.b);
    let min_byte = rgb.r.min(rgb.g).min(rgb.b);
    let max = f64::from(max_byte) / 255.0;
    let min = f64::from(min_byte) / 255.0;
    let l = (max + min) / 2.0;

    if max_byte == min_byte {
        return Hsl::new(0, 0, round_percent(l));
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if rgb.r == max_byte {
        let wrap = if rgb.g < rgb.b { 6.0 } else { 0.0 };
        ((g - b) / d + wrap) / 6.0
    } else if rgb.g == max_byte {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsl::new(round_degrees(h * 360.0), round_percent(s), round_percent(l))
}

/// Convert whole-number HSL to RGB.
///
/// Two-endpoint interpolation: `q` is the upper endpoint, `p = 2l - q` the
/// lower, and each channel samples [`hue_to_channel`] at hue offsets +1/3,
/// 0 and -1/3. Zero saturation short-circuits to a gray at `l`.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if hsl.s == 0 {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Convert a validated hex color straight to HSL.
#[inline]
#[must_use]
pub fn hex_to_hsl(hex: &HexColor) -> Hsl {
    rgb_to_hsl(hex_to_rgb(hex))
}

/// Convert HSL straight to a canonical hex color.
#[inline]
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    rgb_to_hex(hsl_to_rgb(hsl))
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Piecewise-linear channel value for hue position `t` between `p` and `q`.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert a unit float to a byte, rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Round a unit float to a whole percent.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Round degrees to a whole degree; 360 wraps to 0 in [`Hsl::new`].
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_degrees(v: f64) -> u16 {
    v.round().clamp(0.0, 360.0) as u16
}

// ─── Tests ───────────────────────────────────────────────────────────────────
