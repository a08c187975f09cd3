//! Interface to the provider of glyph outlines.

use crate::outline::Outline;

/// A font, or anything else that can produce flattened glyph outlines for
/// code points.
///
/// Outlines must be produced at a fixed rendering scale so that rows from
/// different sources are comparable.
pub trait OutlineSource {
    type Error: std::error::Error;

    /// Name used to identify the source in diagnostics.
    fn name(&self) -> &str;

    /// Returns the outline for the given character.
    ///
    /// Returns `Ok(None)` if the source does not map the character. An
    /// outline with no contours (such as for a space) is a valid result.
    fn outline(&self, ch: char) -> Result<Option<Outline>, Self::Error>;
}

impl<T: OutlineSource + ?Sized> OutlineSource for &T {
    type Error = T::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn outline(&self, ch: char) -> Result<Option<Outline>, Self::Error> {
        (**self).outline(ch)
    }
}
