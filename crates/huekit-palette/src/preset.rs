// SPDX-License-Identifier: MIT

//! Presets: a named (base color, harmony) pair.
//!
//! A preset stores the two inputs, never the generated colors: the palette
//! is regenerated on demand, so a preset always reflects the current shade
//! and harmony rules. Storage is the caller's concern; this module only
//! defines the record and its serde shape.

use huekit_color::{HexColor, Rgb};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::harmony::Harmony;
use crate::palette::Palette;

/// A saved palette recipe.
///
/// Serializes with camelCase keys and an RFC 3339 `createdAt`:
///
/// ```json
/// {
///   "id": "5f0c…",
///   "name": "brand",
///   "baseColor": "#8B5CF6",
///   "harmony": "complementary",
///   "createdAt": "2026-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: Uuid,
    pub name: String,
    pub base_color: HexColor,
    pub harmony: Harmony,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Preset {
    /// A fresh preset with a random id, stamped now (UTC).
    #[must_use]
    pub fn new(name: impl Into<String>, base_color: HexColor, harmony: Harmony) -> Self {
        Self::with_timestamp(name, base_color, harmony, OffsetDateTime::now_utc())
    }

    /// A fresh preset with a random id and an explicit creation time.
    #[must_use]
    pub fn with_timestamp(
        name: impl Into<String>,
        base_color: HexColor,
        harmony: Harmony,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            base_color,
            harmony,
            created_at,
        }
    }

    /// Regenerate this preset's palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::generate(&self.base_color, self.harmony)
    }
}

// ---------------------------------------------------------------------------
// Builtin presets
// ---------------------------------------------------------------------------

/// A preset shipped with the library, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinPreset {
    pub name: &'static str,
    pub base_color: HexColor,
    pub harmony: Harmony,
}

impl BuiltinPreset {
    /// Materialize as a [`Preset`] record, stamped now.
    #[must_use]
    pub fn to_preset(self) -> Preset {
        Preset::new(self.name, self.base_color, self.harmony)
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        Palette::generate(&self.base_color, self.harmony)
    }
}

const fn builtin(name: &'static str, r: u8, g: u8, b: u8, harmony: Harmony) -> BuiltinPreset {
    BuiltinPreset {
        name,
        base_color: HexColor::from_rgb(Rgb::new(r, g, b)),
        harmony,
    }
}

/// All builtin presets. `default` is first.
pub const BUILTIN_PRESETS: [BuiltinPreset; 5] = [
    builtin("default", 0x8B, 0x5C, 0xF6, Harmony::Complementary),
    builtin("ocean", 0x0E, 0xA5, 0xE9, Harmony::Analogous),
    builtin("sunset", 0xF9, 0x73, 0x16, Harmony::SplitComplementary),
    builtin("forest", 0x16, 0xA3, 0x4A, Harmony::Triadic),
    builtin("candy", 0xEC, 0x48, 0x99, Harmony::Tetradic),
];

/// Look up a builtin preset by name (case-insensitive).
#[must_use]
pub fn builtin_preset(name: &str) -> Option<BuiltinPreset> {
    let lower = name.trim().to_lowercase();
    BUILTIN_PRESETS.iter().find(|p| p.name == lower).copied()
}

/// Names of the builtin presets, in table order.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN_PRESETS.iter().map(|p| p.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn new_presets_get_distinct_ids() {
        let a = Preset::new("a", hex("#8B5CF6"), Harmony::Triadic);
        let b = Preset::new("a", hex("#8B5CF6"), Harmony::Triadic);
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.get_version_num(), 4);
    }

    #[test]
    fn serde_shape_is_camel_case_rfc3339() {
        let mut preset = Preset::with_timestamp(
            "brand",
            hex("#8b5cf6"),
            Harmony::SplitComplementary,
            datetime!(2026-01-02 03:04:05 UTC),
        );
        preset.id = Uuid::nil();

        let value = serde_json::to_value(&preset).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "brand",
                "baseColor": "#8B5CF6",
                "harmony": "split-complementary",
                "createdAt": "2026-01-02T03:04:05Z",
            })
        );

        let back: Preset = serde_json::from_value(value).unwrap();
        assert_eq!(back, preset);
    }

    #[test]
    fn deserialize_rejects_bad_base_color() {
        let json = r##"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "broken",
            "baseColor": "#GGGGGG",
            "harmony": "triadic",
            "createdAt": "2026-01-02T03:04:05Z"
        }"##;
        assert!(serde_json::from_str::<Preset>(json).is_err());
    }

    #[test]
    fn deserialize_accepts_split_alias() {
        let json = r##"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "legacy",
            "baseColor": "#abc",
            "harmony": "split",
            "createdAt": "2026-01-02T03:04:05+02:00"
        }"##;
        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.harmony, Harmony::SplitComplementary);
        assert_eq!(preset.base_color, hex("#AABBCC"));
    }

    #[test]
    fn palette_regenerates_from_inputs() {
        let preset = Preset::new("p", hex("#8B5CF6"), Harmony::Complementary);
        assert_eq!(
            preset.palette(),
            Palette::generate(&hex("#8B5CF6"), Harmony::Complementary)
        );
    }

    #[test]
    fn default_builtin() {
        let preset = builtin_preset("default").unwrap();
        assert_eq!(preset.base_color.to_string(), "#8B5CF6");
        assert_eq!(preset.harmony, Harmony::Complementary);
        assert_eq!(preset.palette().len(), 2);
    }

    #[test]
    fn builtin_lookup() {
        assert_eq!(
            builtin_names(),
            vec!["default", "ocean", "sunset", "forest", "candy"]
        );
        assert_eq!(builtin_preset(" Ocean ").map(|p| p.harmony), Some(Harmony::Analogous));
        assert!(builtin_preset("lava").is_none());
    }

    #[test]
    fn builtin_to_preset_keeps_inputs() {
        let builtin = builtin_preset("candy").unwrap();
        let preset = builtin.to_preset();
        assert_eq!(preset.name, "candy");
        assert_eq!(preset.base_color, hex("#EC4899"));
        assert_eq!(preset.harmony, Harmony::Tetradic);
    }
}
