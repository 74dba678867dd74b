//! Chart drawing helpers.
//!
//! Layout is computed as plain draw commands ([`Element`]) appended to an
//! in-memory [`Surface`], so geometry can be inspected and tested without a
//! rendering engine. [`render`] turns a surface into SVG or PNG via Plotters.
//!
//! - [`construct_legend`]: color swatches with right-aligned labels
//! - [`wrap`]: greedy word wrapping of text labels into tspans
//! - [`add_border`]: unfilled frame matching the surface's recorded size

pub mod border;
pub mod legend;
pub mod render;
pub mod text;
pub mod types;
pub mod util;

pub use border::add_border;
pub use legend::{LegendEntry, construct_legend, legend_layout};
pub use render::{RenderConfig, render_to_area, render_to_file};
pub use text::{HeuristicMeasurer, TextMeasurer, wrap, wrap_lines};
pub use types::{Element, RectElement, Surface, TextAnchor, TextElement, Tspan};
