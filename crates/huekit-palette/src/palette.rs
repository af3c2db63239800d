// SPDX-License-Identifier: MIT

//! Palette assembly: the bridge from hue angles to named, shaded colors.
//!
//! Takes the colors a [`Harmony`] produces for a base color, names them by
//! position (`color-1`, `color-2`, …) and expands each into a [`ShadeRamp`].
//! The result is the single value every exporter and renderer consumes.

use huekit_color::HexColor;
use tracing::debug;

use crate::harmony::Harmony;
use crate::shade::{ShadeRamp, generate_shades};

/// One named palette entry with its shade ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    /// Export key, e.g. `color-1`.
    pub name: String,
    /// The harmony color itself, before shading.
    pub hex: HexColor,
    pub shades: ShadeRamp,
}

impl PaletteColor {
    /// Build an entry, deriving the shade ramp from `hex`.
    #[must_use]
    pub fn new(name: impl Into<String>, hex: HexColor) -> Self {
        Self {
            name: name.into(),
            hex,
            shades: generate_shades(&hex),
        }
    }
}

/// An ordered set of named colors, each with its shade ramp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    /// Generate the palette for `base` under `harmony`.
    #[must_use]
    pub fn generate(base: &HexColor, harmony: Harmony) -> Self {
        let palette = Self::from_colors(harmony.colors(base));
        debug!(
            base = %base,
            harmony = harmony.name(),
            colors = palette.len(),
            "generated palette"
        );
        palette
    }

    /// Name `colors` positionally (`color-1`, `color-2`, …) and shade them.
    #[must_use]
    pub fn from_colors(colors: impl IntoIterator<Item = HexColor>) -> Self {
        let colors = colors
            .into_iter()
            .enumerate()
            .map(|(i, hex)| PaletteColor::new(format!("color-{}", i + 1), hex))
            .collect();
        Self { colors }
    }

    /// Build a palette from pre-named entries, kept in the given order.
    #[must_use]
    pub const fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors }
    }

    #[must_use]
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteColor> {
        self.colors.iter()
    }

    /// The entry called `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PaletteColor> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// The first color; the one previews treat as the brand color.
    #[must_use]
    pub fn primary(&self) -> Option<&PaletteColor> {
        self.colors.first()
    }

    /// The second color, falling back to the primary for one-color palettes.
    #[must_use]
    pub fn secondary(&self) -> Option<&PaletteColor> {
        self.colors.get(1).or_else(|| self.primary())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteColor;
    type IntoIter = std::slice::Iter<'a, PaletteColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
