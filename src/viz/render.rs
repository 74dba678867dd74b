//! Render a [`Surface`] onto a Plotters backend, or straight to an SVG/PNG file.

use super::border::dimension;
use super::types::{
    Element, INIT_HEIGHT_ATTR, INIT_WIDTH_ATTR, RectElement, Surface, TextAnchor, TextElement,
};
use super::util::parse_color;
use crate::error::VizError;
use anyhow::{Context, Result, anyhow, bail};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};

/// Rendering options that are not part of the draw commands themselves.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Font family used for every text element.
    pub font_family: String,
    /// TTF/OTF file registered under `font_family` before drawing.
    /// Bitmap output needs one; SVG output leaves font lookup to the viewer.
    pub font_path: Option<PathBuf>,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".into(),
            font_path: None,
            background: "white".into(),
        }
    }
}

/// Register a font file with Plotters' pure-Rust text path.
///
/// The bytes are leaked: Plotters keeps a `'static` reference for the process lifetime.
pub fn register_font_file(family: &str, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font(family, FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("invalid font {}", path.display()))
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn draw_rect<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, r: &RectElement) -> Result<()> {
    let corners = [(px(r.x), px(r.y)), (px(r.x + r.width), px(r.y + r.height))];
    if let Some(fill) = r.fill.as_deref() {
        let opacity = r.fill_opacity.clamp(0.0, 1.0);
        if opacity > 0.0 {
            let color = parse_color(fill)?.mix(opacity);
            area.draw(&Rectangle::new(corners, color.filled()))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }
    if let Some(stroke) = r.stroke.as_deref() {
        let style = ShapeStyle {
            color: parse_color(stroke)?.to_rgba(),
            filled: false,
            stroke_width: 1,
        };
        area.draw(&Rectangle::new(corners, style))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn draw_text<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    t: &TextElement,
    cfg: &RenderConfig,
) -> Result<()> {
    let h = match t.anchor {
        TextAnchor::Start => HPos::Left,
        TextAnchor::Middle => HPos::Center,
        TextAnchor::End => HPos::Right,
    };
    let style = TextStyle::from((cfg.font_family.as_str(), t.font_px))
        .pos(Pos::new(h, VPos::Bottom))
        .color(&BLACK);
    let em = t.font_px as f64;

    let lines: Vec<(f64, f64, &str)> = if t.tspans.is_empty() {
        vec![(t.x, t.y + t.dy * em, t.text.as_str())]
    } else {
        t.tspans
            .iter()
            .map(|s| (s.x, s.y + s.dy * em, s.text.as_str()))
            .collect()
    };
    for (x, y, line) in lines {
        if line.is_empty() {
            continue;
        }
        area.draw(&Text::new(line, (px(x), px(y)), style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn draw_element<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    el: &Element,
    cfg: &RenderConfig,
) -> Result<()> {
    match el {
        Element::Group(children) => {
            for c in children {
                draw_element(area, c, cfg)?;
            }
            Ok(())
        }
        Element::Rect(r) => draw_rect(area, r),
        Element::Text(t) => draw_text(area, t, cfg),
    }
}

/// Fill `area` with the background and draw every child of `surface` in order.
pub fn render_to_area<DB: DrawingBackend>(
    surface: &Surface,
    area: &DrawingArea<DB, Shift>,
    cfg: &RenderConfig,
) -> Result<()> {
    let bg = parse_color(&cfg.background)?;
    area.fill(&bg).map_err(|e| anyhow!("{:?}", e))?;
    for el in surface.children() {
        draw_element(area, el, cfg)?;
    }
    Ok(())
}

/// Write `surface` to `out_path`; the extension picks the backend (`.svg` or `.png`).
///
/// Output size comes from the surface's `_initWidth`/`_initHeight`.
pub fn render_to_file<P: AsRef<Path>>(surface: &Surface, out_path: P, cfg: &RenderConfig) -> Result<()> {
    let out_path = out_path.as_ref();
    let w = dimension(surface, INIT_WIDTH_ATTR)?.ceil() as u32;
    let h = dimension(surface, INIT_HEIGHT_ATTR)?.ceil() as u32;
    if let Some(font) = cfg.font_path.as_deref() {
        register_font_file(&cfg.font_family, font)?;
    }

    let ext = out_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    log::debug!("rendering {}x{} surface to {}", w, h, out_path.display());
    match ext.as_str() {
        "svg" => {
            let root = SVGBackend::new(out_path, (w, h)).into_drawing_area();
            render_to_area(surface, &root, cfg)?;
            root.present().map_err(|e| anyhow!("{:?}", e))?;
        }
        "png" => {
            let root = BitMapBackend::new(out_path, (w, h)).into_drawing_area();
            render_to_area(surface, &root, cfg)
                .context("bitmap text needs a registered font (set `font_path`)")?;
            root.present().map_err(|e| anyhow!("{:?}", e))?;
        }
        other => bail!("unsupported output format: {:?} (expected .svg or .png)", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Margin;
    use crate::viz::{add_border, construct_legend};

    #[test]
    fn svg_contains_legend_text_and_border() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legend.svg");
        let mut s = Surface::new(200, 120);
        construct_legend(&mut s, 200.0, &["Alpha", "Beta"], &["#4472C4", "orange"], &Margin::default(), 0.0, 0.0)
            .unwrap();
        add_border(&mut s).unwrap();
        render_to_file(&s, &path, &RenderConfig::default()).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Alpha"));
        assert!(svg.contains("Beta"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn bad_color_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = Surface::new(100, 100);
        construct_legend(&mut s, 100.0, &["x"], &["not-a-color"], &Margin::default(), 0.0, 0.0)
            .unwrap();
        let err = render_to_file(&s, dir.path().join("x.svg"), &RenderConfig::default()).unwrap_err();
        assert!(err.downcast_ref::<VizError>().is_some());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let s = Surface::new(10, 10);
        assert!(render_to_file(&s, "out.gif", &RenderConfig::default()).is_err());
    }

    #[test]
    fn unsized_surface_is_rejected() {
        assert!(render_to_file(&Surface::default(), "out.svg", &RenderConfig::default()).is_err());
    }

    #[test]
    fn missing_height_is_named_in_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = Surface::default();
        s.set_attr(INIT_WIDTH_ATTR, "100");
        let err = render_to_file(&s, dir.path().join("x.svg"), &RenderConfig::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<VizError>(),
            Some(&VizError::InvalidDimension {
                attribute: INIT_HEIGHT_ATTR,
                value: None
            })
        );
    }

    #[test]
    fn non_font_file_is_rejected_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-font.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        let err = register_font_file("broken-family", &path).unwrap_err();
        assert!(err.to_string().contains("not-a-font.ttf"), "{err}");
    }
}
