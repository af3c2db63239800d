// SPDX-License-Identifier: MIT

//! Palette serializers: CSS custom properties, Tailwind config, JSON, SCSS.
//!
//! Every serializer walks the palette in order and each ramp light to dark,
//! so output is deterministic for a given [`Palette`]. Text formats are
//! joined with `\n` and carry no trailing newline; writing them anywhere is
//! the caller's job.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::PaletteError;
use crate::palette::Palette;

/// Color name → shade label → hex string, in palette and ramp order.
///
/// This is the shape of the JSON export and what [`parse_json`] returns.
pub type ShadeTable = IndexMap<String, IndexMap<String, String>>;

/// The supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `:root { --name-shade: #hex; }`
    Css,
    /// `colors: { 'name': { 'shade': '#hex' } }`
    Tailwind,
    /// `{ "name": { "shade": "#hex" } }`
    Json,
    /// `$name-shade: #hex;`
    Scss,
}

impl ExportFormat {
    /// Render `palette` in this format.
    ///
    /// # Errors
    ///
    /// Only [`ExportFormat::Json`] can fail, and only if `serde_json` does.
    pub fn render(self, palette: &Palette) -> Result<String, PaletteError> {
        match self {
            Self::Css => Ok(to_css_variables(palette)),
            Self::Tailwind => Ok(to_tailwind(palette)),
            Self::Json => to_json(palette),
            Self::Scss => Ok(to_scss(palette)),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
            Self::Scss => "scss",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS Variables",
            Self::Tailwind => "Tailwind Config",
            Self::Json => "JSON",
            Self::Scss => "SCSS Variables",
        }
    }

    /// Conventional file extension, without the dot.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "js",
            Self::Json => "json",
            Self::Scss => "scss",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Tailwind, Self::Json, Self::Scss]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownFormat(s.to_owned()))
    }
}

// ─── Serializers ─────────────────────────────────────────────────────────────

/// CSS custom properties inside a `:root` block.
#[must_use]
pub fn to_css_variables(palette: &Palette) -> String {
    let mut lines = vec![String::from(":root {")];
    for color in palette {
        for (shade, hex) in &color.shades {
            lines.push(format!("  --{}-{shade}: {hex};", color.name));
        }
    }
    lines.push(String::from("}"));
    lines.join("\n")
}

/// A Tailwind `colors` object literal, one nested block per color.
#[must_use]
pub fn to_tailwind(palette: &Palette) -> String {
    let mut lines = vec![String::from("colors: {")];
    let last_color = palette.len().saturating_sub(1);
    for (i, color) in palette.iter().enumerate() {
        lines.push(format!("  '{}': {{", color.name));
        let last_shade = color.shades.len().saturating_sub(1);
        for (j, (shade, hex)) in color.shades.iter().enumerate() {
            let comma = if j == last_shade { "" } else { "," };
            lines.push(format!("    '{shade}': '{hex}'{comma}"));
        }
        let comma = if i == last_color { "" } else { "," };
        lines.push(format!("  }}{comma}"));
    }
    lines.push(String::from("}"));
    lines.join("\n")
}

/// Pretty-printed JSON (2-space indent), keys in palette and ramp order.
///
/// # Errors
///
/// Propagates `serde_json` failures; a table of strings does not fail in
/// practice.
pub fn to_json(palette: &Palette) -> Result<String, PaletteError> {
    Ok(serde_json::to_string_pretty(&shade_table(palette))?)
}

/// SCSS variable declarations, one per line, no wrapping block.
#[must_use]
pub fn to_scss(palette: &Palette) -> String {
    let mut lines = Vec::with_capacity(palette.len() * 11);
    for color in palette {
        for (shade, hex) in &color.shades {
            lines.push(format!("${}-{shade}: {hex};", color.name));
        }
    }
    lines.join("\n")
}

/// The palette as a nested name → shade → hex table.
#[must_use]
pub fn shade_table(palette: &Palette) -> ShadeTable {
    palette
        .iter()
        .map(|color| {
            let shades: IndexMap<String, String> = color
                .shades
                .iter()
                .map(|(shade, hex)| (shade.to_string(), hex.to_string()))
                .collect();
            (color.name.clone(), shades)
        })
        .collect()
}

/// Parse a JSON export back into its table, preserving key order.
///
/// # Errors
///
/// Returns [`PaletteError::Json`] if `json` is not a two-level object of
/// strings.
pub fn parse_json(json: &str) -> Result<ShadeTable, PaletteError> {
    Ok(serde_json::from_str(json)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
