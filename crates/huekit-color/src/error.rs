// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised at the string boundary of the color engine.
///
/// Conversions between already-constructed values never fail; only turning
/// user text into a [`HexColor`](crate::HexColor) can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not `#RGB` or `#RRGGBB` (the `#` is optional).
    #[error("invalid hex color {0:?}: expected 3 or 6 hexadecimal digits")]
    InvalidHex(String),
}
