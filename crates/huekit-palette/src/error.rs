// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by the palette engine's name lookups and JSON codec.
///
/// Generation itself is total; these only surface where text enters or
/// leaves the engine.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The name does not match any harmony rule.
    #[error("unknown harmony {0:?}")]
    UnknownHarmony(String),
    /// The name does not match any export format.
    #[error("unknown export format {0:?}")]
    UnknownFormat(String),
    /// JSON encoding or decoding failed.
    #[error("palette json: {0}")]
    Json(#[from] serde_json::Error),
}
