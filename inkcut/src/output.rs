use std::{io, num::NonZeroUsize};

use inkgrid::{Charset, FeatureRow, GRID_SIZE};

use crate::batch::FileRows;

/// Destination of the rows of one font file.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Split {
    Train,
    Holdout,
}

impl Split {
    /// Assigns the file at `index` (0-based, in processing order) to a split.
    ///
    /// With a holdout interval of `n`, every `n`th file goes to the holdout
    /// set.
    pub fn for_file(index: usize, holdout: Option<NonZeroUsize>) -> Self {
        match holdout {
            Some(n) if (index + 1) % n.get() == 0 => Self::Holdout,
            _ => Self::Train,
        }
    }
}

/// Writes one line per row, in file, face and character order. Returns the
/// number of rows written.
pub fn write_rows<'a>(
    out: &mut impl io::Write,
    files: impl IntoIterator<Item = &'a FileRows>,
) -> io::Result<usize> {
    let mut count = 0;
    for row in files
        .into_iter()
        .flat_map(|file| &file.fonts)
        .flat_map(|font| &font.rows)
    {
        writeln!(out, "{row}")?;
        count += 1;
    }
    Ok(count)
}

/// Writes the label table: one `code_point,char` line per character.
pub fn write_labels(out: &mut impl io::Write, charset: &Charset) -> io::Result<()> {
    for line in charset.label_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Renders a row as an 8x8 block of scores, top row first.
pub fn format_grid(row: &FeatureRow, charset: &Charset) -> String {
    let label = match charset.decode(row.label()) {
        Some(ch) => format!("U+{:04X} '{ch}'", row.label()),
        None => format!("U+{:04X}", row.label()),
    };
    let mut result = label;
    for cells in row.scores().chunks(GRID_SIZE) {
        result.push('\n');
        for score in cells {
            result.push_str(&format!("{score:>3}"));
        }
    }
    result
}
