use std::{
    ops::AddAssign,
    path::{Path, PathBuf},
};

use inkgrid::{extract_font, Charset, FontRows, GridConfig};
use rayon::prelude::*;

use crate::{font::Font, Error};

/// Rows for every face of one font file.
#[derive(Debug)]
pub struct FileRows {
    pub path: PathBuf,
    pub fonts: Vec<FontRows>,
}

impl FileRows {
    pub fn row_count(&self) -> usize {
        self.fonts.iter().map(|font| font.rows.len()).sum()
    }
}

/// Extracts rows for every face in the font file at `path`.
///
/// A face that cannot be parsed contributes no rows; every character counts
/// as unsupported for it.
pub fn extract_file(
    path: &Path,
    charset: &Charset,
    config: &GridConfig,
) -> Result<FileRows, Error> {
    let font = Font::new(path)?;
    let mut fonts = Vec::with_capacity(font.count());
    for index in 0..font.count() {
        let rows = match font.source(index, config.ppem, config.tolerance) {
            Some(source) => extract_font(&source, charset, config),
            None => FontRows {
                name: font.face_name(index),
                unsupported: charset.len(),
                ..Default::default()
            },
        };
        fonts.push(rows);
    }
    Ok(FileRows {
        path: path.to_owned(),
        fonts,
    })
}

/// Extracts rows for all files in parallel.
///
/// Results are returned in the order of `paths`, regardless of the order in
/// which files finish. Files that cannot be opened or parsed are logged and
/// yield no rows.
pub fn extract_files(
    paths: &[PathBuf],
    charset: &Charset,
    config: &GridConfig,
    print_paths: bool,
) -> Vec<FileRows> {
    paths
        .par_iter()
        .filter_map(|path| {
            if print_paths {
                log::info!("[{}]", path.display());
            }
            match extract_file(path, charset, config) {
                Ok(rows) => Some(rows),
                Err(e) => {
                    log::warn!("{e}");
                    None
                }
            }
        })
        .collect()
}

/// Totals over a batch, for the final report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of font files the batch was given.
    pub files: usize,
    /// Number of those files that could not be opened or parsed.
    pub unreadable: usize,
    pub faces: usize,
    pub rows: usize,
    pub unsupported: usize,
    pub failed: usize,
}

impl Summary {
    /// Totals the results of extracting `attempted` files, of which `files`
    /// are the ones that loaded.
    pub fn new(attempted: usize, files: &[FileRows]) -> Self {
        let mut summary = Self {
            files: attempted,
            unreadable: attempted.saturating_sub(files.len()),
            ..Default::default()
        };
        for file in files {
            summary.faces += file.fonts.len();
            summary.rows += file.row_count();
            for font in &file.fonts {
                summary.unsupported += font.unsupported;
                summary.failed += font.failures.len();
            }
        }
        summary
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.unreadable += other.unreadable;
        self.faces += other.faces;
        self.rows += other.rows;
        self.unsupported += other.unsupported;
        self.failed += other.failed;
    }
}
