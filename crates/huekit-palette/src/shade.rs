// SPDX-License-Identifier: MIT

//! Shade ramps: one color expanded into the conventional 50..950 scale.
//!
//! Hue and saturation come from the source color; its lightness is thrown
//! away and replaced by a fixed per-label lightness. Labels run light to dark,
//! which is also the order every renderer and exporter iterates them in.

use huekit_color::{HexColor, Hsl, hex_to_hsl, hsl_to_hex};

/// The shade labels, light to dark.
pub const SHADE_LABELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Label → HSL lightness (percent).
const SHADE_LIGHTNESS: [(u16, u8); 11] = [
    (50, 95),
    (100, 90),
    (200, 80),
    (300, 70),
    (400, 60),
    (500, 50),
    (600, 40),
    (700, 30),
    (800, 20),
    (900, 10),
    (950, 5),
];

/// HSL lightness for a shade label, or `None` for a label outside the scale.
#[must_use]
pub fn lightness_for(label: u16) -> Option<u8> {
    SHADE_LIGHTNESS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|&(_, lightness)| lightness)
}

/// An 11-step lightness ramp of one hue, ordered 50 → 950.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadeRamp {
    shades: [(u16, HexColor); 11],
}

impl ShadeRamp {
    /// The color at `label`, if it is one of [`SHADE_LABELS`].
    #[must_use]
    pub fn get(&self, label: u16) -> Option<HexColor> {
        self.shades.iter().find(|(l, _)| *l == label).map(|&(_, hex)| hex)
    }

    /// `(label, color)` pairs, light to dark.
    pub fn iter(&self) -> impl Iterator<Item = (u16, HexColor)> + '_ {
        self.shades.iter().copied()
    }

    /// The middle of the ramp (label 500, lightness 50%).
    #[must_use]
    pub const fn mid(&self) -> HexColor {
        self.shades[5].1
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShadeRamp {
    type Item = (u16, HexColor);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (u16, HexColor)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.shades.iter().copied()
    }
}

/// Expand `hex` into its shade ramp.
#[must_use]
pub fn generate_shades(hex: &HexColor) -> ShadeRamp {
    let Hsl { h, s, .. } = hex_to_hsl(hex);
    let shades = SHADE_LIGHTNESS.map(|(label, lightness)| (label, hsl_to_hex(Hsl::new(h, s, lightness))));
    ShadeRamp { shades }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
