//! Per-glyph and per-font feature extraction.

use kurbo::Rect;

use crate::{
    charset::Charset,
    clip::cell_areas,
    config::GridConfig,
    error::GeometryError,
    grid::{Grid, CELL_COUNT},
    normalize::AreaNormalizer,
    outline::Outline,
    row::FeatureRow,
    source::OutlineSource,
};

/// Computes the feature row for a single outline sampled over `bounds`.
///
/// `bounds` is normally [`Outline::bounds`]. A zero-area box produces a row
/// of zeros.
pub fn extract_glyph(
    outline: &Outline,
    bounds: Rect,
    label: u32,
    config: &GridConfig,
) -> Result<FeatureRow, GeometryError> {
    if !outline.is_finite() {
        return Err(GeometryError::NonFiniteOutline);
    }
    if !bounds.is_finite() {
        return Err(GeometryError::InvalidBounds);
    }
    let grid = Grid::new(bounds);
    let areas = cell_areas(outline, &grid, config.fill_rule);
    let normalizer = AreaNormalizer::new(grid.ideal_cell_area(), config);
    let mut scores = [0; CELL_COUNT];
    for (cell, (score, area)) in scores.iter_mut().zip(areas).enumerate() {
        if !area.is_finite() {
            return Err(GeometryError::NonFiniteArea { cell });
        }
        *score = normalizer.normalize(area);
    }
    Ok(FeatureRow::new(scores, label))
}

/// A glyph that could not be turned into a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphFailure {
    pub ch: char,
    pub message: String,
}

/// Rows produced for one font, in character set order.
#[derive(Clone, Debug, Default)]
pub struct FontRows {
    pub name: String,
    pub rows: Vec<FeatureRow>,
    /// Number of characters the font does not map.
    pub unsupported: usize,
    pub failures: Vec<GlyphFailure>,
}

/// Extracts a row for every character of `charset` that `source` maps.
///
/// Unmapped characters are skipped. A character whose outline cannot be
/// loaded or measured is skipped as well and recorded in
/// [`FontRows::failures`]; it never affects the rows of other characters.
pub fn extract_font<S: OutlineSource>(
    source: &S,
    charset: &Charset,
    config: &GridConfig,
) -> FontRows {
    let mut result = FontRows {
        name: source.name().to_owned(),
        ..Default::default()
    };
    for ch in charset.iter() {
        let outline = match source.outline(ch) {
            Ok(Some(outline)) => outline,
            Ok(None) => {
                log::trace!("[{}] U+{:04X} is not mapped", result.name, ch as u32);
                result.unsupported += 1;
                continue;
            }
            Err(e) => {
                log::warn!("[{}] U+{:04X} outline failed: {e}", result.name, ch as u32);
                result.failures.push(GlyphFailure {
                    ch,
                    message: e.to_string(),
                });
                continue;
            }
        };
        match extract_glyph(&outline, outline.bounds(), ch as u32, config) {
            Ok(row) => result.rows.push(row),
            Err(e) => {
                log::warn!("[{}] U+{:04X} skipped: {e}", result.name, ch as u32);
                result.failures.push(GlyphFailure {
                    ch,
                    message: e.to_string(),
                });
            }
        }
    }
    log::debug!(
        "[{}] {} rows, {} unmapped, {} failed",
        result.name,
        result.rows.len(),
        result.unsupported,
        result.failures.len()
    );
    result
}
