//! Conversion of raw cell areas to integer coverage scores.

use crate::config::GridConfig;

/// Integer coverage score of a single cell.
pub type CellScore = u32;

/// Maps raw cell intersection areas to bounded integer scores.
///
/// A score is `area / ideal_cell_area * scale`, rounded half to even. Ideal
/// cell area is the area every cell of the grid has before any clipping.
#[derive(Copy, Clone, Debug)]
pub struct AreaNormalizer {
    ideal_cell_area: f64,
    scale: f64,
    max: Option<CellScore>,
}

impl AreaNormalizer {
    pub fn new(ideal_cell_area: f64, config: &GridConfig) -> Self {
        Self {
            ideal_cell_area,
            scale: config.scale as f64,
            max: config.clamp.then_some(config.scale),
        }
    }

    /// Returns the score for the given raw area.
    ///
    /// Degenerate grids (zero ideal area) score 0 for every cell. Scores
    /// above the scale are only possible when clamping is disabled and the
    /// area exceeds the ideal cell area.
    pub fn normalize(&self, raw_area: f64) -> CellScore {
        if self.ideal_cell_area <= 0.0 || !raw_area.is_finite() {
            return 0;
        }
        let score = (raw_area / self.ideal_cell_area * self.scale).round_ties_even();
        // Float to int casts saturate, so tiny negative areas from rounding
        // noise become 0.
        let score = score as CellScore;
        match self.max {
            Some(max) => score.min(max),
            None => score,
        }
    }
}

/// Convenience wrapper around [`AreaNormalizer::normalize`] using the
/// default scale of 16 and no clamping.
pub fn normalize(raw_area: f64, ideal_cell_area: f64) -> CellScore {
    AreaNormalizer::new(ideal_cell_area, &GridConfig::default()).normalize(raw_area)
}
