use std::path::PathBuf;

use inkgrid::CharsetError;
use skrifa::{outline::DrawError, raw::ReadError, GlyphId};
use thiserror::Error;

/// Errors that end processing of a font file or the whole run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing font '{}': {error}", .path.display())]
    Font { path: PathBuf, error: ReadError },

    #[error("Invalid input to --unicodes: {0}")]
    Charset(#[from] CharsetError),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("No font files found")]
    NoFonts,
}

/// Errors loading a single glyph.
#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("Drawing glyph {0} failed: {1}")]
    Draw(GlyphId, DrawError),
}
