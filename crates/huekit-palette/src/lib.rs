// SPDX-License-Identifier: MIT

//! # huekit-palette: harmonic palette engine
//!
//! Generates a complete palette from one base color. One parameter shift
//! (base color or harmony rule) produces an entirely new palette, each color
//! expanded into an 11-step shade ramp and ready to export.
//!
//! # Architecture
//!
//! ```text
//! HexColor + Harmony
//!     │
//!     ▼
//! harmony.rs:  generate hue angles (pure angle arithmetic)
//!     │
//!     ▼
//! palette.rs:  hues → colors at the base saturation/lightness, named color-N
//!     │
//!     ▼
//! shade.rs:    expand each color into the 50..950 lightness ramp
//!     │
//!     ▼
//! export.rs:   CSS variables / Tailwind / JSON / SCSS
//!
//! contrast.rs: light-or-dark text decisions, consulted by any renderer
//! preset.rs:   named (base, harmony) records and the builtin set
//! ```
//!
//! # Color Space
//!
//! Everything is plain sRGB/HSL from `huekit-color`. There is no perceptual
//! color model here: ramps vary HSL lightness, contrast uses the WCAG
//! relative-luminance formula.

pub mod contrast;
pub mod error;
pub mod export;
pub mod harmony;
pub mod palette;
pub mod preset;
pub mod shade;

pub use contrast::{TextTone, contrast_ratio, relative_luminance, should_use_light_text};
pub use error::PaletteError;
pub use export::{ExportFormat, ShadeTable};
pub use harmony::{Harmony, normalize_hue};
pub use palette::{Palette, PaletteColor};
pub use preset::{BUILTIN_PRESETS, BuiltinPreset, Preset, builtin_names, builtin_preset};
pub use shade::{SHADE_LABELS, ShadeRamp, generate_shades};
