//! Error types for grid feature extraction.

use std::fmt;

/// Errors that may occur while computing cell coverage.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The outline contains a NaN or infinite coordinate.
    NonFiniteOutline,
    /// The bounding box has a NaN or infinite coordinate.
    InvalidBounds,
    /// Clipping produced a NaN or infinite area for the given cell.
    NonFiniteArea { cell: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonFiniteOutline => write!(f, "outline contains a non-finite coordinate"),
            Self::InvalidBounds => write!(f, "outline bounding box is not a valid rectangle"),
            Self::NonFiniteArea { cell } => {
                write!(f, "intersection area for cell {cell} is not finite")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Errors that may occur when parsing a character set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharsetError {
    /// A code point could not be parsed as a hexadecimal number.
    InvalidCodepoint(String),
    /// A range whose start is greater than its end.
    InvalidRange { start: u32, end: u32 },
    /// A code point that is not a Unicode scalar value.
    NotAScalar(u32),
    /// The character set would contain no code points.
    Empty,
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCodepoint(raw) => write!(f, "invalid code point '{raw}'"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid code point range {start:04X}-{end:04X}")
            }
            Self::NotAScalar(cp) => write!(f, "U+{cp:04X} is not a Unicode scalar value"),
            Self::Empty => write!(f, "character set is empty"),
        }
    }
}

impl std::error::Error for CharsetError {}
