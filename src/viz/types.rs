//! Public types for the visualization module: an in-memory drawing surface and
//! the draw commands the layout helpers append to it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute recording a surface's initial width.
pub const INIT_WIDTH_ATTR: &str = "_initWidth";
/// Attribute recording a surface's initial height.
pub const INIT_HEIGHT_ATTR: &str = "_initHeight";

/// Horizontal alignment of a text element relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color; `None` leaves the rectangle unfilled.
    pub fill: Option<String>,
    /// 0.0 (transparent) ..= 1.0 (opaque).
    pub fill_opacity: f64,
    pub stroke: Option<String>,
}

impl RectElement {
    /// A filled rectangle without stroke.
    pub fn filled(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: Some(fill.into()),
            fill_opacity: 1.0,
            stroke: None,
        }
    }
}

/// One wrapped line of a text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tspan {
    pub x: f64,
    pub y: f64,
    /// Vertical shift in ems, relative to `y`.
    pub dy: f64,
    pub text: String,
}

/// A text label. When `tspans` is non-empty they replace `text` at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub x: f64,
    pub y: f64,
    /// Vertical shift in ems, relative to `y`.
    pub dy: f64,
    pub anchor: TextAnchor,
    pub font_px: u32,
    pub text: String,
    pub tspans: Vec<Tspan>,
}

impl TextElement {
    pub const DEFAULT_FONT_PX: u32 = 14;

    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            dy: 0.0,
            anchor: TextAnchor::Start,
            font_px: Self::DEFAULT_FONT_PX,
            text: text.into(),
            tspans: Vec::new(),
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The text as it would be rendered, line by line.
    pub fn lines(&self) -> Vec<&str> {
        if self.tspans.is_empty() {
            vec![self.text.as_str()]
        } else {
            self.tspans.iter().map(|t| t.text.as_str()).collect()
        }
    }
}

/// A draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Group(Vec<Element>),
    Rect(RectElement),
    Text(TextElement),
}

/// An in-memory rendering target: attributes plus an ordered list of children.
///
/// The caller owns the surface; helpers only read attributes and append children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    attrs: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Surface {
    /// A surface recording `width`/`height` as its initial size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut s = Self::default();
        s.set_attr(INIT_WIDTH_ATTR, width.to_string());
        s.set_attr(INIT_HEIGHT_ATTR, height.to_string());
        s
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn append(&mut self, el: Element) {
        self.children.push(el);
    }
}
