use ::skrifa::{
    charmap::Charmap,
    outline::DrawSettings,
    prelude::{LocationRef, Size},
    raw::FontRef,
    GlyphId, MetadataProvider, OutlineGlyphCollection,
};
use inkgrid::{Outline, OutlineSource};

use super::SharedFontData;
use crate::{FlatteningPen, GlyphError};

/// Outline source for one face of a font file, drawing unhinted outlines at
/// a fixed size.
pub struct SkrifaSource<'a> {
    name: String,
    size: Size,
    tolerance: f64,
    charmap: Charmap<'a>,
    outlines: OutlineGlyphCollection<'a>,
}

impl<'a> SkrifaSource<'a> {
    /// Returns `None` if the face cannot be parsed.
    pub fn new(
        data: &'a SharedFontData,
        index: usize,
        name: String,
        ppem: f32,
        tolerance: f64,
    ) -> Option<Self> {
        let font = match FontRef::from_index(data.as_ref(), index as u32) {
            Ok(font) => font,
            Err(e) => {
                log::warn!("[{name}] failed to load face: {e}");
                return None;
            }
        };
        Some(Self {
            name,
            size: Size::new(ppem),
            tolerance,
            charmap: font.charmap(),
            outlines: font.outline_glyphs(),
        })
    }
}

impl OutlineSource for SkrifaSource<'_> {
    type Error = GlyphError;

    fn name(&self) -> &str {
        &self.name
    }

    fn outline(&self, ch: char) -> Result<Option<Outline>, GlyphError> {
        // A character explicitly mapped to .notdef is not supported either.
        let Some(glyph_id) = self.charmap.map(ch).filter(|gid| *gid != GlyphId::NOTDEF) else {
            return Ok(None);
        };
        // Faces without scalable outlines (bitmap only fonts) support nothing.
        let Some(glyph) = self.outlines.get(glyph_id) else {
            log::trace!("[{}] {glyph_id} has no outline", self.name);
            return Ok(None);
        };
        let mut pen = FlatteningPen::new();
        glyph
            .draw(
                DrawSettings::unhinted(self.size, LocationRef::default()),
                &mut pen,
            )
            .map_err(|e| GlyphError::Draw(glyph_id, e))?;
        Ok(Some(pen.into_outline(self.tolerance)))
    }
}
