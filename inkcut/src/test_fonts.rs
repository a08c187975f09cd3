//! Minimal TrueType fonts assembled in memory.
//!
//! Each font carries the tables skrifa needs to map characters and draw
//! unhinted outlines: `cmap` (format 4), `glyf`, `head`, `hhea`, `hmtx`,
//! `loca` and `maxp`. Glyph 0 is always a box shaped `.notdef`.

use std::path::{Path, PathBuf};

pub(crate) type Points = Vec<(i16, i16)>;

type Tag = [u8; 4];

const UNITS_PER_EM: u16 = 1000;
const ADVANCE: u16 = 600;
const ON_CURVE: u8 = 0x01;

/// A clockwise rectangle, the TrueType direction for filled contours.
pub(crate) fn rect(x0: i16, y0: i16, x1: i16, y1: i16) -> Points {
    vec![(x0, y0), (x0, y1), (x1, y1), (x1, y0)]
}

#[derive(Clone, Debug)]
pub(crate) struct TestFont {
    glyphs: Vec<Vec<Points>>,
    cmap: Vec<(char, u16)>,
    outlines: bool,
}

impl TestFont {
    pub(crate) fn new() -> Self {
        Self {
            glyphs: vec![vec![rect(100, 0, 500, 700)]],
            cmap: Vec::new(),
            outlines: true,
        }
    }

    /// Adds a glyph and maps `ch` to it.
    pub(crate) fn glyph(mut self, ch: char, contours: Vec<Points>) -> Self {
        self.cmap.push((ch, self.glyphs.len() as u16));
        self.glyphs.push(contours);
        self
    }

    /// Maps `ch` to `.notdef`.
    pub(crate) fn notdef(mut self, ch: char) -> Self {
        self.cmap.push((ch, 0));
        self
    }

    /// Drops `glyf` and `loca`, leaving a font that maps characters but has
    /// no scalable outlines.
    pub(crate) fn without_outlines(mut self) -> Self {
        self.outlines = false;
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        write_sfnt(&self.tables(), 0)
    }

    fn tables(&self) -> Vec<(Tag, Vec<u8>)> {
        let num_glyphs = self.glyphs.len() as u16;
        let all_points = self
            .glyphs
            .iter()
            .flatten()
            .flatten()
            .copied()
            .collect::<Vec<_>>();
        let (x_min, y_min, x_max, y_max) = extent(&all_points);

        let mut glyf: Vec<u8> = Vec::new();
        let mut loca: Vec<u8> = Vec::new();
        let mut hmtx: Vec<u8> = Vec::new();
        for contours in &self.glyphs {
            loca.u32(glyf.len() as u32);
            glyf.extend(glyph_data(contours));
            let points = contours.iter().flatten().copied().collect::<Vec<_>>();
            hmtx.u16(ADVANCE);
            hmtx.i16(extent(&points).0);
        }
        loca.u32(glyf.len() as u32);

        let mut head: Vec<u8> = Vec::new();
        head.u32(0x0001_0000);
        head.u32(0x0001_0000);
        head.u32(0);
        head.u32(0x5F0F_3CF5);
        head.u16(0);
        head.u16(UNITS_PER_EM);
        // created, modified
        head.extend([0u8; 16]);
        for value in [x_min, y_min, x_max, y_max] {
            head.i16(value);
        }
        head.u16(0);
        head.u16(8);
        head.i16(2);
        // long loca offsets
        head.i16(1);
        head.i16(0);

        let mut hhea: Vec<u8> = Vec::new();
        hhea.u32(0x0001_0000);
        hhea.i16(800);
        hhea.i16(-200);
        hhea.i16(0);
        hhea.u16(ADVANCE);
        for value in [x_min, 0, x_max, 1, 0, 0, 0, 0, 0, 0, 0] {
            hhea.i16(value);
        }
        hhea.u16(num_glyphs);

        let max_points = self
            .glyphs
            .iter()
            .map(|contours| contours.iter().map(Vec::len).sum::<usize>())
            .max()
            .unwrap_or(0);
        let max_contours = self.glyphs.iter().map(Vec::len).max().unwrap_or(0);
        let mut maxp: Vec<u8> = Vec::new();
        maxp.u32(0x0001_0000);
        maxp.u16(num_glyphs);
        maxp.u16(max_points as u16);
        maxp.u16(max_contours as u16);
        // composite points and contours, then max zones
        for value in [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0] {
            maxp.u16(value);
        }

        let mut tables = vec![
            (*b"cmap", self.cmap_table()),
            (*b"head", head),
            (*b"hhea", hhea),
            (*b"hmtx", hmtx),
            (*b"maxp", maxp),
        ];
        if self.outlines {
            tables.push((*b"glyf", glyf));
            tables.push((*b"loca", loca));
        }
        tables.sort_by_key(|(tag, _)| *tag);
        tables
    }

    /// A Windows Unicode BMP subtable in format 4 with one segment per
    /// mapping.
    fn cmap_table(&self) -> Vec<u8> {
        let mut mappings = self.cmap.clone();
        mappings.sort();
        let mut segments = mappings
            .iter()
            .map(|&(ch, gid)| {
                let code = ch as u16;
                (code, gid.wrapping_sub(code))
            })
            .collect::<Vec<_>>();
        segments.push((0xFFFF, 1));
        let seg_count = segments.len() as u16;
        let entry_selector = 15 - seg_count.leading_zeros() as u16;
        let search_range = 2 << entry_selector;

        let mut subtable: Vec<u8> = Vec::new();
        subtable.u16(4);
        subtable.u16(16 + 8 * seg_count);
        subtable.u16(0);
        subtable.u16(seg_count * 2);
        subtable.u16(search_range);
        subtable.u16(entry_selector);
        subtable.u16(seg_count * 2 - search_range);
        // end codes, padding, then start codes
        for (code, _) in &segments {
            subtable.u16(*code);
        }
        subtable.u16(0);
        for (code, _) in &segments {
            subtable.u16(*code);
        }
        for (_, delta) in &segments {
            subtable.u16(*delta);
        }
        // id range offsets
        for _ in &segments {
            subtable.u16(0);
        }

        let mut cmap: Vec<u8> = Vec::new();
        cmap.u16(0);
        cmap.u16(1);
        cmap.u16(3);
        cmap.u16(1);
        cmap.u32(12);
        cmap.extend(subtable);
        cmap
    }
}

/// Builds a font collection from `fonts`, followed by `unreadable` faces
/// whose offsets point past the end of the file.
pub(crate) fn build_collection(fonts: &[TestFont], unreadable: usize) -> Vec<u8> {
    let count = fonts.len() + unreadable;
    let header_len = 12 + 4 * count as u32;
    let mut offsets = Vec::with_capacity(count);
    let mut body: Vec<u8> = Vec::new();
    for font in fonts {
        let offset = header_len + body.len() as u32;
        offsets.push(offset);
        body.extend(write_sfnt(&font.tables(), offset));
    }
    let end = header_len + body.len() as u32;
    offsets.extend((1..=unreadable as u32).map(|ix| end + 64 * ix));

    let mut out = b"ttcf".to_vec();
    out.u32(0x0001_0000);
    out.u32(count as u32);
    for offset in offsets {
        out.u32(offset);
    }
    out.extend(body);
    out
}

/// Writes `data` to `dir/name`, returning the path.
pub(crate) fn write(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

/// Writes a table directory followed by the tables, for a font starting at
/// `base` in its file.
fn write_sfnt(tables: &[(Tag, Vec<u8>)], base: u32) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = 16 << entry_selector;
    let mut out: Vec<u8> = Vec::new();
    out.u32(0x0001_0000);
    out.u16(num_tables);
    out.u16(search_range);
    out.u16(entry_selector);
    out.u16(num_tables * 16 - search_range);
    let data_start = base + 12 + 16 * num_tables as u32;
    let mut data: Vec<u8> = Vec::new();
    for (tag, table) in tables {
        out.extend(tag);
        out.u32(checksum(table));
        out.u32(data_start + data.len() as u32);
        out.u32(table.len() as u32);
        data.extend(table);
        data.resize(data.len().next_multiple_of(4), 0);
    }
    out.extend(data);
    out
}

/// A simple glyph with every point on the curve and no instructions.
fn glyph_data(contours: &[Points]) -> Vec<u8> {
    let points = contours.iter().flatten().copied().collect::<Vec<_>>();
    let mut out: Vec<u8> = Vec::new();
    if points.is_empty() {
        return out;
    }
    out.i16(contours.len() as i16);
    let (x_min, y_min, x_max, y_max) = extent(&points);
    for value in [x_min, y_min, x_max, y_max] {
        out.i16(value);
    }
    let mut end = 0;
    for contour in contours {
        end += contour.len() as u16;
        out.u16(end - 1);
    }
    out.u16(0);
    out.resize(out.len() + points.len(), ON_CURVE);
    let mut prev = 0;
    for &(x, _) in &points {
        out.i16(x - prev);
        prev = x;
    }
    prev = 0;
    for &(_, y) in &points {
        out.i16(y - prev);
        prev = y;
    }
    if out.len() % 2 == 1 {
        out.push(0);
    }
    out
}

fn extent(points: &[(i16, i16)]) -> (i16, i16, i16, i16) {
    let Some(&(x, y)) = points.first() else {
        return (0, 0, 0, 0);
    };
    points
        .iter()
        .fold((x, y, x, y), |(x_min, y_min, x_max, y_max), &(x, y)| {
            (x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y))
        })
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

trait BigEndian {
    fn u16(&mut self, value: u16);
    fn i16(&mut self, value: i16);
    fn u32(&mut self, value: u32);
}

impl BigEndian for Vec<u8> {
    fn u16(&mut self, value: u16) {
        self.extend(value.to_be_bytes());
    }

    fn i16(&mut self, value: i16) {
        self.extend(value.to_be_bytes());
    }

    fn u32(&mut self, value: u32) {
        self.extend(value.to_be_bytes());
    }
}

/// 'T' (a bar over a stem) and '-', with 'X' mapped to `.notdef`.
pub(crate) fn letters() -> TestFont {
    TestFont::new()
        .glyph('T', vec![rect(50, 600, 550, 700), rect(250, 0, 350, 600)])
        .glyph('-', vec![rect(100, 300, 500, 400)])
        .notdef('X')
}

/// A single 'L'.
pub(crate) fn ell() -> TestFont {
    TestFont::new().glyph(
        'L',
        vec![vec![(100, 0), (500, 0), (500, 100), (200, 100), (200, 700), (100, 700)]],
    )
}
