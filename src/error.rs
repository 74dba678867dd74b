//! Precondition errors raised by the layout helpers.

use thiserror::Error;

/// Errors surfaced by legend, border and color handling instead of silently
/// producing malformed draw commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
    /// Keys and colors must be paired one-to-one.
    #[error("legend keys and colors differ in length ({keys} keys, {colors} colors)")]
    LengthMismatch { keys: usize, colors: usize },

    /// A surface dimension attribute is missing or not a finite, non-negative number.
    #[error("surface attribute `{attribute}` is not a valid dimension: {}", .value.as_deref().unwrap_or("<missing>"))]
    InvalidDimension {
        attribute: &'static str,
        value: Option<String>,
    },

    /// A color string could not be resolved to RGB.
    #[error("unrecognized color `{0}`")]
    InvalidColor(String),
}
