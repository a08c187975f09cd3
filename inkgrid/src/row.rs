//! Training rows.

use std::fmt;

use crate::{grid::CELL_COUNT, normalize::CellScore};

/// Coverage scores for every grid cell followed by the label of the glyph.
///
/// Formats as a single comma separated line without a trailing newline:
/// the 64 scores in row-major cell order followed by the label code point.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FeatureRow {
    scores: [CellScore; CELL_COUNT],
    label: u32,
}

impl FeatureRow {
    pub fn new(scores: [CellScore; CELL_COUNT], label: u32) -> Self {
        Self { scores, label }
    }

    /// Returns the cell scores in row-major order.
    pub fn scores(&self) -> &[CellScore; CELL_COUNT] {
        &self.scores
    }

    /// Returns the code point this row is labelled with.
    pub fn label(&self) -> u32 {
        self.label
    }

    /// Returns true if no cell has any coverage.
    pub fn is_blank(&self) -> bool {
        self.scores.iter().all(|score| *score == 0)
    }
}

impl fmt::Display for FeatureRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.scores {
            write!(f, "{score},")?;
        }
        write!(f, "{}", self.label)
    }
}

/// Builds a row from scores and a label.
pub fn build(scores: [CellScore; CELL_COUNT], label: u32) -> FeatureRow {
    FeatureRow::new(scores, label)
}
