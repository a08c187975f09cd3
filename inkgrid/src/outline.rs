//! Flattened glyph outlines.
//!
//! An [`Outline`] is a set of closed polygonal contours produced by
//! flattening the curves of a glyph. Outlines are immutable once built and
//! carry their tight bounding box.

use kurbo::{Point, Rect};

/// A single closed polygonal contour.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Creates a contour from a sequence of points.
    ///
    /// Consecutive duplicate points (including a trailing copy of the first
    /// point) are dropped. Returns `None` if fewer than three distinct points
    /// remain, since such a contour encloses no area.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut result: Vec<Point> = Vec::new();
        for point in points {
            if result.last() != Some(&point) {
                result.push(point);
            }
        }
        while result.len() > 1 && result.first() == result.last() {
            result.pop();
        }
        (result.len() >= 3).then_some(Self { points: result })
    }

    /// Returns the points of the contour.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the signed area of the contour.
    ///
    /// Positive for counter-clockwise contours in a y-up coordinate system.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    fn bounds(&self) -> Rect {
        let mut points = self.points.iter();
        let Some(first) = points.next() else {
            return Rect::ZERO;
        };
        points.fold(Rect::from_points(*first, *first), |rect, p| {
            rect.union_pt(*p)
        })
    }
}

/// A glyph outline made of zero or more closed contours.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Outline {
    contours: Vec<Contour>,
    bounds: Rect,
}

impl Outline {
    /// Creates an outline from a set of contours, computing its bounds.
    pub fn new(contours: Vec<Contour>) -> Self {
        let bounds = contours
            .iter()
            .map(Contour::bounds)
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO);
        Self { contours, bounds }
    }

    /// Creates an outline with no contours, such as the outline of a space.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the outline has no contours.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns the smallest axis-aligned rectangle enclosing every contour.
    ///
    /// This is [`Rect::ZERO`] for an empty outline.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns true if every coordinate in the outline is finite.
    pub fn is_finite(&self) -> bool {
        self.contours
            .iter()
            .flat_map(|contour| contour.points())
            .all(|p| p.is_finite())
    }
}

/// Incrementally collects flattened contours into an [`Outline`].
///
/// Accepts the move/line/close subset of path commands; curves must be
/// flattened before they reach the builder. An open contour is closed
/// implicitly when the next one begins or when the builder is finished.
#[derive(Default, Debug)]
pub struct OutlineBuilder {
    contours: Vec<Contour>,
    current: Vec<Point>,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) {
        self.close();
        self.current.push(point);
    }

    pub fn line_to(&mut self, point: Point) {
        self.current.push(point);
    }

    pub fn close(&mut self) {
        if let Some(contour) = Contour::new(self.current.drain(..)) {
            self.contours.push(contour);
        }
    }

    pub fn finish(mut self) -> Outline {
        self.close();
        Outline::new(self.contours)
    }
}

/// Shoelace formula over an implicitly closed polygon.
pub(crate) fn signed_area(points: &[Point]) -> f64 {
    let Some(last) = points.last() else {
        return 0.0;
    };
    let mut prev = *last;
    let mut twice_area = 0.0;
    for p in points {
        twice_area += prev.x * p.y - p.x * prev.y;
        prev = *p;
    }
    twice_area * 0.5
}
