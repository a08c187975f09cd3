use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use ::skrifa::raw::FileRef;

use crate::Error;

mod skrifa;

pub use skrifa::SkrifaSource;

/// Extensions of the font files picked up when scanning a directory.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// A memory mapped font file, possibly containing several faces.
pub struct Font {
    path: PathBuf,
    data: SharedFontData,
    count: usize,
}

impl Font {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_owned();
        let io_error = |source| Error::Io {
            path: path.clone(),
            source,
        };
        let file = std::fs::File::open(&path).map_err(io_error)?;
        // Safety: the mapping is read only and fonts are not expected to be
        // modified while a batch is running.
        let map = unsafe { memmap2::Mmap::map(&file) }.map_err(io_error)?;
        let data = SharedFontData(Arc::new(map));
        let count = match FileRef::new(data.as_ref()) {
            Ok(FileRef::Font(_)) => 1,
            Ok(FileRef::Collection(collection)) => collection.len() as usize,
            Err(error) => return Err(Error::Font { path, error }),
        };
        Ok(Self { path, data, count })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of faces in the file.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns a name identifying the face at `index` in diagnostics.
    pub fn face_name(&self, index: usize) -> String {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy());
        if self.count > 1 {
            format!("{file_name}#{index}")
        } else {
            file_name.into_owned()
        }
    }

    /// Creates an outline source for the face at `index`.
    pub fn source(&self, index: usize, ppem: f32, tolerance: f64) -> Option<SkrifaSource<'_>> {
        SkrifaSource::new(&self.data, index, self.face_name(index), ppem, tolerance)
    }
}

#[derive(Clone)]
pub struct SharedFontData(Arc<memmap2::Mmap>);

impl AsRef<[u8]> for SharedFontData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expands the given paths into a sorted list of font files.
///
/// Files are taken as given; directories contribute the files directly
/// inside them whose extension is one of [`FONT_EXTENSIONS`]. The result is
/// sorted so that batches are processed in a reproducible order.
pub fn collect_font_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }
        let entries = std::fs::read_dir(input).map_err(|source| Error::Io {
            path: input.clone(),
            source,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|source| Error::Io {
                    path: input.clone(),
                    source,
                })?
                .path();
            if path.is_file() && is_font_file(&path) {
                files.push(path);
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
