use inkgrid::{Outline, OutlineBuilder};
use kurbo::{BezPath, PathEl, Point};
use skrifa::outline::pen::OutlinePen;

/// Pen that records glyph drawing commands and flattens them into an
/// [`Outline`].
///
/// Font outlines are y-up while coverage rows are sampled top to bottom,
/// so the y axis is flipped as commands are recorded: row 0 of the grid
/// covers the top of the glyph.
///
/// Drawing commands that arrive without an open subpath (after a `close`,
/// or before any `move_to`) start a new subpath at the current point.
#[derive(Default)]
pub struct FlatteningPen {
    path: BezPath,
    current: Point,
    start: Point,
    is_open: bool,
}

impl FlatteningPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens all recorded curves to line segments that deviate from
    /// the curves by at most `tolerance` and returns the resulting outline.
    pub fn into_outline(self, tolerance: f64) -> Outline {
        let mut builder = OutlineBuilder::new();
        kurbo::flatten(self.path.iter(), tolerance, |el| match el {
            PathEl::MoveTo(p) => builder.move_to(p),
            PathEl::LineTo(p) => builder.line_to(p),
            PathEl::ClosePath => builder.close(),
            // Flattening only produces moves, lines and closes.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
        builder.finish()
    }

    fn point(x: f32, y: f32) -> Point {
        Point::new(x as f64, -(y as f64))
    }

    fn ensure_open(&mut self) {
        if !self.is_open {
            self.path.move_to(self.current);
            self.start = self.current;
            self.is_open = true;
        }
    }
}

impl OutlinePen for FlatteningPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = Self::point(x, y);
        self.path.move_to(p);
        self.current = p;
        self.start = p;
        self.is_open = true;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ensure_open();
        let p = Self::point(x, y);
        self.path.line_to(p);
        self.current = p;
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.ensure_open();
        let p = Self::point(x, y);
        self.path.quad_to(Self::point(cx0, cy0), p);
        self.current = p;
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.ensure_open();
        let p = Self::point(x, y);
        self.path
            .curve_to(Self::point(cx0, cy0), Self::point(cx1, cy1), p);
        self.current = p;
    }

    fn close(&mut self) {
        if self.is_open {
            self.path.close_path();
            self.current = self.start;
            self.is_open = false;
        }
    }
}
