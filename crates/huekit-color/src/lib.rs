// SPDX-License-Identifier: MIT
//
// huekit-color: color space conversions for the huekit palette engine.
//
// Three representations, all plain immutable values:
//
//   HexColor  "#RRGGBB", validated once at the input boundary
//   Rgb       8-bit channels, lossless with hex
//   Hsl       integer degrees / integer percents, lossy (rounded)
//
// Conversion pipeline:
//
//   &str ──parse──▶ HexColor ⇄ Rgb ⇄ Hsl
//
// Only the string boundary (`HexColor::parse`) can fail. Every conversion
// after it is total: an `Rgb` cannot hold an out-of-range channel and a
// `HexColor` cannot hold a malformed string, so the math never sees garbage.

// Single-character variable names (r, g, b, h, s, l, p, q) are the standard
// convention in color math.
#![allow(clippy::many_single_char_names)]
// Channel math keeps the textbook operation order; fusing it into mul_add
// shifts results that sit exactly on a .5 rounding boundary.
#![allow(clippy::suboptimal_flops)]

pub mod color;
pub mod error;
pub mod hex;
pub mod random;

pub use color::{Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::ColorError;
pub use hex::{HexColor, is_valid_hex, normalize_hex};
pub use random::{random_color, random_color_with};
