//! Batch extraction of glyph coverage rows from font files.

mod batch;
mod error;
mod font;
mod output;
mod pen;
#[cfg(test)]
mod test_fonts;

pub use batch::{extract_file, extract_files, FileRows, Summary};
pub use error::{Error, GlyphError};
pub use font::{collect_font_files, Font, SharedFontData, SkrifaSource, FONT_EXTENSIONS};
pub use output::{format_grid, write_labels, write_rows, Split};
pub use pen::FlatteningPen;
