//! Feature extraction settings.

/// Rule deciding which regions of overlapping or nested contours are filled.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum FillRule {
    /// A point is filled if the contours wind around it a non-zero number
    /// of times. TrueType and CFF outlines are designed for this rule.
    #[default]
    NonZero,
    /// A point is filled if the contours wind around it an odd number of
    /// times.
    EvenOdd,
}

impl FillRule {
    /// Returns true if a region with the given winding number is filled.
    pub fn is_filled(self, winding: i32) -> bool {
        match self {
            Self::NonZero => winding != 0,
            Self::EvenOdd => winding % 2 != 0,
        }
    }
}

/// Settings shared by every glyph in a batch.
///
/// Rows are only comparable when they were produced with the same
/// configuration.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GridConfig {
    /// Score assigned to a fully covered cell.
    pub scale: u32,
    /// Fill rule used to resolve overlapping contours.
    pub fill_rule: FillRule,
    /// Limit scores to `0..=scale`.
    pub clamp: bool,
    /// Size, in pixels per em, at which outlines are rendered.
    pub ppem: f32,
    /// Maximum distance between a curve and its flattened polyline, in
    /// rendered units.
    pub tolerance: f64,
}

impl GridConfig {
    pub const DEFAULT_SCALE: u32 = 16;
    pub const DEFAULT_PPEM: f32 = 100.0;
    pub const DEFAULT_TOLERANCE: f64 = 0.05;
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            fill_rule: FillRule::default(),
            clamp: false,
            ppem: Self::DEFAULT_PPEM,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}
