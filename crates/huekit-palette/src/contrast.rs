// SPDX-License-Identifier: MIT

//! Readability helpers for text drawn over palette colors.
//!
//! [`should_use_light_text`] is a luminance threshold, not a contrast-ratio
//! guarantee: it picks between two fixed text colors and nothing more.
//! [`contrast_ratio`] is there for callers that want the real WCAG number.

use huekit_color::{HexColor, Rgb, hex_to_rgb};

/// Text over a background darker than this luminance should be light.
const LIGHT_TEXT_THRESHOLD: f64 = 0.5;

/// Compute the relative luminance of a color per WCAG 2.0.
///
/// Each channel is scaled to [0, 1] and linearized with the piecewise sRGB
/// curve (`v / 12.92` at or below 0.03928), then weighted:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: &HexColor) -> f64 {
    let Rgb { r, g, b } = hex_to_rgb(color);
    let r_lin = linearize(r);
    let g_lin = linearize(g);
    let b_lin = linearize(b);
    0.0722f64.mul_add(b_lin, 0.2126f64.mul_add(r_lin, 0.7152 * g_lin))
}

/// Whether text over `background` should be light rather than dark.
#[must_use]
pub fn should_use_light_text(background: &HexColor) -> bool {
    relative_luminance(background) < LIGHT_TEXT_THRESHOLD
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: &HexColor, b: &HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[inline]
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// TextTone
// ---------------------------------------------------------------------------

/// Which of the two fixed text palettes to draw over a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTone {
    Light,
    Dark,
}

impl TextTone {
    /// Pick the tone for text drawn over `background`.
    #[must_use]
    pub fn for_background(background: &HexColor) -> Self {
        if should_use_light_text(background) {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Main text color: white, or near-black slate.
    #[must_use]
    pub const fn primary(self) -> HexColor {
        match self {
            Self::Light => HexColor::from_rgb(Rgb::new(0xFF, 0xFF, 0xFF)),
            Self::Dark => HexColor::from_rgb(Rgb::new(0x1F, 0x29, 0x37)),
        }
    }

    /// De-emphasized text color (captions, secondary lines).
    #[must_use]
    pub const fn muted(self) -> HexColor {
        match self {
            Self::Light => HexColor::from_rgb(Rgb::new(0xD1, 0xD5, 0xDB)),
            Self::Dark => HexColor::from_rgb(Rgb::new(0x6B, 0x72, 0x80)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
