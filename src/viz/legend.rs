//! Legend layout: one swatch + right-aligned label per key, stacked vertically.

use super::types::{Element, RectElement, Surface, TextAnchor, TextElement};
use crate::error::VizError;
use crate::models::Margin;

/// Side length of the colored swatch.
pub const SWATCH_PX: f64 = 20.0;
/// Height reserved per legend row (before padding).
pub const ROW_BOX_PX: f64 = 30.0;
/// Gap between rows.
pub const ROW_PADDING_PX: f64 = 10.0;

/// Geometry of a single legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch: RectElement,
    pub label: TextElement,
}

impl LegendEntry {
    fn into_element(self) -> Element {
        Element::Group(vec![Element::Rect(self.swatch), Element::Text(self.label)])
    }
}

/// Compute legend rows without touching any surface.
///
/// Row `i` has its label baseline at `offset_y + margin.top + i * 40` and its
/// swatch raised by half a row box above that. Swatches are left-aligned at
/// `offset_x + margin.left`; labels end at `offset_x + width - margin.right`.
pub fn legend_layout<K: AsRef<str>, C: AsRef<str>>(
    width: f64,
    keys: &[K],
    colors: &[C],
    margin: &Margin,
    offset_x: f64,
    offset_y: f64,
) -> Result<Vec<LegendEntry>, VizError> {
    if keys.len() != colors.len() {
        return Err(VizError::LengthMismatch {
            keys: keys.len(),
            colors: colors.len(),
        });
    }

    let swatch_x = offset_x + margin.left;
    let label_x = offset_x + width - margin.right;
    let entries = keys
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (key, color))| {
            let row_y = offset_y + margin.top + i as f64 * (ROW_BOX_PX + ROW_PADDING_PX);
            LegendEntry {
                swatch: RectElement::filled(
                    swatch_x,
                    row_y - ROW_BOX_PX / 2.0,
                    SWATCH_PX,
                    SWATCH_PX,
                    color.as_ref(),
                ),
                label: TextElement::new(label_x, row_y, key.as_ref()).with_anchor(TextAnchor::End),
            }
        })
        .collect();
    Ok(entries)
}

/// Append one group (swatch + label) per key to `parent`.
///
/// On a length mismatch nothing is appended.
pub fn construct_legend<K: AsRef<str>, C: AsRef<str>>(
    parent: &mut Surface,
    width: f64,
    keys: &[K],
    colors: &[C],
    margin: &Margin,
    offset_x: f64,
    offset_y: f64,
) -> Result<(), VizError> {
    let entries = legend_layout(width, keys, colors, margin, offset_x, offset_y)?;
    log::debug!("appending {} legend entries", entries.len());
    for entry in entries {
        parent.append(entry.into_element());
    }
    Ok(())
}
