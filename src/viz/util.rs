//! Color helpers: the default series palette and CSS-style color parsing.

use crate::error::VizError;
use plotters::style::RGBColor;
use regex::Regex;
use std::sync::OnceLock;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [&str; 10] = [
    "#4472C4", "#ED7D31", "#A5A5A5", "#FFC000", "#5B9BD5", "#70AD47", "#264478", "#9E480E",
    "#636363", "#997300",
];

/// Named colors accepted besides hex notation.
const NAMED: [(&str, RGBColor); 12] = [
    ("black", RGBColor(0, 0, 0)),
    ("white", RGBColor(255, 255, 255)),
    ("red", RGBColor(255, 0, 0)),
    ("green", RGBColor(0, 128, 0)),
    ("blue", RGBColor(0, 0, 255)),
    ("yellow", RGBColor(255, 255, 0)),
    ("orange", RGBColor(255, 165, 0)),
    ("purple", RGBColor(128, 0, 128)),
    ("gray", RGBColor(128, 128, 128)),
    ("grey", RGBColor(128, 128, 128)),
    ("steelblue", RGBColor(70, 130, 180)),
    ("teal", RGBColor(0, 128, 128)),
];

/// Palette color for series `idx` as a hex string (wraps around).
pub fn office_color(idx: usize) -> &'static str {
    OFFICE10[idx % OFFICE10.len()]
}

/// `n` palette colors, one per legend key.
pub fn palette(n: usize) -> Vec<String> {
    (0..n).map(|i| office_color(i).to_string()).collect()
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("static hex color pattern")
    })
}

/// Resolve `#rgb`, `#rrggbb` or a known color name.
pub fn parse_color(s: &str) -> Result<RGBColor, VizError> {
    let t = s.trim();
    if hex_re().is_match(t) {
        let hex = &t[1..];
        let expand = |c: &str| u8::from_str_radix(c, 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let rgb = if hex.len() == 3 {
            (expand(&hex[0..1]), expand(&hex[1..2]), expand(&hex[2..3]))
        } else {
            (byte(0), byte(2), byte(4))
        };
        return match rgb {
            (Ok(r), Ok(g), Ok(b)) => Ok(RGBColor(r, g, b)),
            _ => Err(VizError::InvalidColor(s.to_string())),
        };
    }
    let lower = t.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, c)| *c)
        .ok_or_else(|| VizError::InvalidColor(s.to_string()))
}
