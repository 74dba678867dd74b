//! Frame a surface with an unfilled rectangle matching its recorded size.

use super::types::{Element, INIT_HEIGHT_ATTR, INIT_WIDTH_ATTR, RectElement, Surface};
use crate::error::VizError;

/// Parse a dimension attribute as a finite, non-negative number.
pub(crate) fn dimension(surface: &Surface, attribute: &'static str) -> Result<f64, VizError> {
    let raw = surface.attr(attribute);
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| VizError::InvalidDimension {
            attribute,
            value: raw.map(str::to_string),
        })
}

/// Append a black, transparent-filled rectangle spanning `(0, 0)` to the
/// surface's `_initWidth` x `_initHeight`, and hand the surface back.
///
/// Both attributes are validated before anything is appended.
pub fn add_border(surface: &mut Surface) -> Result<&Surface, VizError> {
    let width = dimension(surface, INIT_WIDTH_ATTR)?;
    let height = dimension(surface, INIT_HEIGHT_ATTR)?;
    surface.append(Element::Rect(RectElement {
        x: 0.0,
        y: 0.0,
        width,
        height,
        fill: None,
        fill_opacity: 0.0,
        stroke: Some("black".into()),
    }));
    Ok(surface)
}
