//! chartkit
//!
//! Small, independent helpers for chart rendering: color-keyed legends,
//! pixel-width text wrapping, bounding borders, random sampling, integer
//! ranges and per-year bucketing of timestamped records. Pairs with the
//! `chartkit` CLI.
//!
//! ### Example
//! ```no_run
//! use chartkit::models::Margin;
//! use chartkit::viz::{self, Surface};
//!
//! let mut surface = Surface::new(400, 200);
//! viz::construct_legend(
//!     &mut surface,
//!     400.0,
//!     &["Friends", "Family"],
//!     &["#4472C4", "#ED7D31"],
//!     &Margin::default(),
//!     0.0,
//!     0.0,
//! )?;
//! viz::add_border(&mut surface)?;
//! viz::render_to_file(&surface, "legend.svg", &viz::RenderConfig::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod models;
pub mod range;
pub mod sample;
pub mod stats;
pub mod storage;
pub mod viz;

pub use error::VizError;
pub use models::{Margin, TimestampedRecord, YearCount};
pub use range::nat_range;
pub use sample::{random_subarray, random_subarray_with};
pub use stats::{split_by_year, split_by_year_in};
