// SPDX-License-Identifier: MIT

//! Harmony engine: pure hue-angle generation.
//!
//! Each rule takes a base hue (degrees) and returns an ordered set of related
//! hues. Order matters downstream: index 0 becomes the primary color and
//! index 1 the secondary. Every rule except analogous starts with the base
//! hue itself; analogous puts it in the middle.

use std::fmt;
use std::str::FromStr;

use huekit_color::{HexColor, Hsl, hex_to_hsl, hsl_to_hex};
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// The classical color-harmony rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    /// Base and its opposite (180°).
    Complementary,
    /// Neighbors at ±30° around the base.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Base plus the two neighbors of its complement (150°, 210°).
    #[serde(alias = "split")]
    SplitComplementary,
    /// Four hues 90° apart.
    Tetradic,
}

impl Harmony {
    /// Generate the hue angles for this rule. All values are in [0, 360).
    #[must_use]
    pub fn hues(self, base_hue: f64) -> Vec<f64> {
        match self {
            Self::Complementary => complementary(base_hue),
            Self::Analogous => analogous(base_hue),
            Self::Triadic => triadic(base_hue),
            Self::SplitComplementary => split_complementary(base_hue),
            Self::Tetradic => tetradic(base_hue),
        }
    }

    /// Generate the harmony colors for `base`.
    ///
    /// Each hue is rendered at the base color's saturation and lightness, so
    /// the set differs from the base only in hue.
    #[must_use]
    pub fn colors(self, base: &HexColor) -> Vec<HexColor> {
        let hsl = hex_to_hsl(base);
        self.hues(f64::from(hsl.h))
            .into_iter()
            .map(|hue| hsl_to_hex(Hsl::new(whole_degrees(hue), hsl.s, hsl.l)))
            .collect()
    }

    /// Canonical machine name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::SplitComplementary => "Split-Comp",
            Self::Tetradic => "Tetradic",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Complementary => "Opposite color (180°)",
            Self::Analogous => "Adjacent colors (±30°)",
            Self::Triadic => "3 evenly spaced colors",
            Self::SplitComplementary => "Complement plus its neighbors",
            Self::Tetradic => "4 evenly spaced colors",
        }
    }

    /// Parse a harmony from its name (case-insensitive). `split` is accepted
    /// for split-complementary.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        if lower == "split" {
            return Some(Self::SplitComplementary);
        }
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All harmony rules, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
            Self::Tetradic,
        ]
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownHarmony(s.to_owned()))
    }
}

/// Normalize a hue to [0, 360), wrapping negatives.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    ((hue % 360.0) + 360.0) % 360.0
}

/// Base and its complement: `[h, h+180]`.
#[must_use]
pub fn complementary(hue: f64) -> Vec<f64> {
    vec![normalize_hue(hue), normalize_hue(hue + 180.0)]
}

/// Base between its neighbors: `[h-30, h, h+30]`.
#[must_use]
pub fn analogous(hue: f64) -> Vec<f64> {
    vec![normalize_hue(hue - 30.0), normalize_hue(hue), normalize_hue(hue + 30.0)]
}

/// `[h, h+120, h+240]`.
#[must_use]
pub fn triadic(hue: f64) -> Vec<f64> {
    vec![normalize_hue(hue), normalize_hue(hue + 120.0), normalize_hue(hue + 240.0)]
}

/// `[h, h+150, h+210]`.
#[must_use]
pub fn split_complementary(hue: f64) -> Vec<f64> {
    vec![normalize_hue(hue), normalize_hue(hue + 150.0), normalize_hue(hue + 210.0)]
}

/// `[h, h+90, h+180, h+270]`.
#[must_use]
pub fn tetradic(hue: f64) -> Vec<f64> {
    vec![
        normalize_hue(hue),
        normalize_hue(hue + 90.0),
        normalize_hue(hue + 180.0),
        normalize_hue(hue + 270.0),
    ]
}

/// Round a normalized hue to the whole degree HSL stores.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_degrees(hue: f64) -> u16 {
    normalize_hue(hue).round().clamp(0.0, 360.0) as u16
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
