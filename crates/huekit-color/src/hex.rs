// SPDX-License-Identifier: MIT
//
// The string boundary: validating and normalizing user-typed hex colors.
//
// `is_valid_hex` and `normalize_hex` are the two primitives a text field
// needs. `HexColor::parse` chains them and yields a value that is canonical by
// construction, so everything downstream of it is infallible.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb, rgb_to_hsl};
use crate::error::ColorError;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex pattern is a valid regex")
});

/// Whether `s` is a 3- or 6-digit hex color, with or without a leading `#`.
///
/// No trimming: surrounding whitespace makes the input invalid.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    HEX_PATTERN.is_match(s)
}

/// Canonicalize a hex color string: trim, add a missing `#`, expand `#RGB`
/// shorthand to `#RRGGBB`, and uppercase.
///
/// This does **not** validate. Malformed input comes back normalized but
/// still malformed; call [`is_valid_hex`] first.
#[must_use]
pub fn normalize_hex(s: &str) -> String {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let mut out = String::with_capacity(7);
    out.push('#');
    if digits.chars().count() == 3 {
        for c in digits.chars() {
            out.push(c);
            out.push(c);
        }
    } else {
        out.push_str(digits);
    }
    out.to_uppercase()
}

// ─── HexColor ────────────────────────────────────────────────────────────────

/// A validated `#RRGGBB` color.
///
/// Only obtainable through [`HexColor::parse`] (or its `FromStr` /
/// `TryFrom<String>` forms) or from an [`Rgb`], so the canonical six-digit
/// uppercase form is an invariant of the type. `Display` prints that form.
///
/// # Examples
///
/// ```
/// use huekit_color::HexColor;
///
/// let violet: HexColor = "8b5cf6".parse().unwrap();
/// assert_eq!(violet.to_string(), "#8B5CF6");
///
/// let short = HexColor::parse("#abc").unwrap();
/// assert_eq!(short.to_string(), "#AABBCC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    pub const BLACK: Self = Self(Rgb::BLACK);
    pub const WHITE: Self = Self(Rgb::WHITE);

    /// Validate and normalize user input.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] unless `s` passes [`is_valid_hex`].
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if !is_valid_hex(s) {
            return Err(ColorError::InvalidHex(s.to_owned()));
        }
        let canonical = normalize_hex(s);
        let bytes = canonical.as_bytes();
        let channel = |i: usize| {
            parse_hex_byte(&bytes[i..i + 2]).ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
        };
        Ok(Self(Rgb::new(channel(1)?, channel(3)?, channel(5)?)))
    }

    #[inline]
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn hsl(self) -> Hsl {
        rgb_to_hsl(self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex_to_rgb, rgb_to_hex};

    // ── Validation ───────────────────────────────────────────────────────

    #[test]
    fn valid_forms() {
        assert!(is_valid_hex("#FFF"));
        assert!(is_valid_hex("fff"));
        assert!(is_valid_hex("#8b5cf6"));
        assert!(is_valid_hex("8B5CF6"));
    }

    #[test]
    fn invalid_forms() {
        assert!(!is_valid_hex("#GGGGGG"));
        assert!(!is_valid_hex("#12345"));
        assert!(!is_valid_hex("#1234"));
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("#"));
        assert!(!is_valid_hex("##FFF"));
        assert!(!is_valid_hex(" #FFF"));
        assert!(!is_valid_hex("#FFFFFF00"));
    }

    // ── Normalization ────────────────────────────────────────────────────

    #[test]
    fn normalize_expands_shorthand() {
        assert_eq!(normalize_hex("abc"), "#AABBCC");
        assert_eq!(normalize_hex("#f80"), "#FF8800");
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_hex("  8b5cf6 "), "#8B5CF6");
        assert_eq!(normalize_hex("#8b5cf6"), "#8B5CF6");
    }

    #[test]
    fn normalize_does_not_validate() {
        assert_eq!(normalize_hex("xyz"), "#XXYYZZ");
        assert_eq!(normalize_hex("12345"), "#12345");
    }

    // ── HexColor ─────────────────────────────────────────────────────────

    #[test]
    fn parse_reads_channels() {
        let hex = HexColor::parse("#FF8000").unwrap();
        assert_eq!(hex_to_rgb(&hex), Rgb::new(255, 128, 0));
    }

    #[test]
    fn parse_shorthand() {
        let hex = HexColor::parse("#f80").unwrap();
        assert_eq!(hex.rgb(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            HexColor::parse("#GGGGGG"),
            Err(ColorError::InvalidHex("#GGGGGG".to_owned()))
        );
        assert!("".parse::<HexColor>().is_err());
    }

    #[test]
    fn rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 10, 255)).to_string(), "#000AFF");
    }

    #[test]
    fn hex_rgb_hex_is_exact() {
        for s in ["#000000", "#FFFFFF", "#8B5CF6", "#0A0B0C", "#C86432", "#1F2937"] {
            let hex = HexColor::parse(s).unwrap();
            assert_eq!(rgb_to_hex(hex_to_rgb(&hex)).to_string(), s);
        }
    }

    #[test]
    fn all_channel_bytes_roundtrip() {
        for v in 0..=255u8 {
            let rgb = Rgb::new(v, 255 - v, v / 2);
            let hex = rgb_to_hex(rgb);
            let reparsed = HexColor::parse(&hex.to_string()).unwrap();
            assert_eq!(hex_to_rgb(&reparsed), rgb);
        }
    }

    #[test]
    fn serde_uses_canonical_string() {
        let hex = HexColor::parse("abc").unwrap();
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#AABBCC\"");
        let back: HexColor = serde_json::from_str("\"#aabbcc\"").unwrap();
        assert_eq!(back, hex);
        assert!(serde_json::from_str::<HexColor>("\"#nope\"").is_err());
    }
}
