//! Ink coverage features for glyph outlines.
//!
//! This crate turns a flattened glyph outline into a fixed size feature
//! vector describing how the glyph's ink is distributed over an 8x8 grid
//! laid over its bounding box. Each cell's score is the exact area of the
//! filled outline inside the cell, normalized against the cell's area and
//! scaled to a small integer range.
//!
//! The pipeline for a single glyph is:
//!
//! 1. partition the bounding box into a [`Grid`] of 64 cells,
//! 2. compute the [`intersect_area`] of the outline with each cell,
//! 3. map each area to a [`CellScore`] with an [`AreaNormalizer`],
//! 4. assemble a [`FeatureRow`] labelled with the character's code point.
//!
//! [`extract_font`] runs this pipeline for every character of a
//! [`Charset`] that an [`OutlineSource`] maps.
//!
//! ```
//! use inkgrid::{extract_glyph, Contour, GridConfig, Outline};
//! use kurbo::Point;
//!
//! let square = Contour::new([
//!     Point::new(0.0, 0.0),
//!     Point::new(8.0, 0.0),
//!     Point::new(8.0, 8.0),
//!     Point::new(0.0, 8.0),
//! ])
//! .unwrap();
//! let outline = Outline::new(vec![square]);
//! let row = extract_glyph(&outline, outline.bounds(), 'I' as u32, &GridConfig::default()).unwrap();
//! assert!(row.scores().iter().all(|score| *score == 16));
//! ```

#![forbid(unsafe_code)]

pub mod charset;
pub mod clip;
pub mod config;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod outline;
pub mod row;
pub mod source;

mod extract;

pub use charset::Charset;
pub use clip::{cell_areas, filled_area, intersect_area};
pub use config::{FillRule, GridConfig};
pub use error::{CharsetError, GeometryError};
pub use extract::{extract_font, extract_glyph, FontRows, GlyphFailure};
pub use grid::{Grid, CELL_COUNT, GRID_SIZE};
pub use normalize::{AreaNormalizer, CellScore};
pub use outline::{Contour, Outline, OutlineBuilder};
pub use row::FeatureRow;
pub use source::OutlineSource;
