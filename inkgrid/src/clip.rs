//! Exact intersection area between a filled outline and a rectangle.
//!
//! Each contour is first clipped to the rectangle with the Sutherland-Hodgman
//! algorithm. Clipping a concave contour may leave pairs of coincident,
//! oppositely directed edges along the rectangle border; these enclose no
//! area under either fill rule.
//!
//! The clipped edges are then resolved against the fill rule with a slab
//! decomposition: the plane is cut into horizontal bands at every edge
//! endpoint and every edge crossing. No two edges cross inside a band, so
//! sorting the edges that span a band by their horizontal position and
//! accumulating their winding directions yields exact filled trapezoids.

use kurbo::{Point, Rect, Vec2};

use crate::{
    config::FillRule,
    grid::{Grid, CELL_COUNT},
    outline::Outline,
};

/// Returns the area of the region that is both filled by `outline` under
/// `fill_rule` and inside `cell`.
///
/// Returns 0 for zero-area cells and empty outlines.
pub fn intersect_area(outline: &Outline, cell: Rect, fill_rule: FillRule) -> f64 {
    let cell = cell.abs();
    if outline.is_empty() || cell.area() <= 0.0 {
        return 0.0;
    }
    if outline.bounds().intersect(cell).area() <= 0.0 {
        return 0.0;
    }
    let mut edges = Vec::new();
    let mut clipped = Vec::new();
    for contour in outline.contours() {
        clip_polygon(contour.points(), cell, &mut clipped);
        push_edges(&clipped, &mut edges);
    }
    slab_area(&edges, fill_rule)
}

/// Returns the intersection area of `outline` with every cell of `grid`, in
/// row-major cell order.
pub fn cell_areas(outline: &Outline, grid: &Grid, fill_rule: FillRule) -> [f64; CELL_COUNT] {
    let mut areas = [0.0; CELL_COUNT];
    if grid.is_degenerate() {
        return areas;
    }
    for (area, cell) in areas.iter_mut().zip(grid.cells()) {
        *area = intersect_area(outline, *cell, fill_rule);
    }
    areas
}

/// Returns the total filled area of `outline` under `fill_rule`.
pub fn filled_area(outline: &Outline, fill_rule: FillRule) -> f64 {
    let mut edges = Vec::new();
    for contour in outline.contours() {
        push_edges(contour.points(), &mut edges);
    }
    slab_area(&edges, fill_rule)
}

/// One side of the clip rectangle, holding the inside half-plane.
#[derive(Copy, Clone, Debug)]
enum Boundary {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl Boundary {
    fn contains(self, p: Point) -> bool {
        match self {
            Self::Left(x) => p.x >= x,
            Self::Right(x) => p.x <= x,
            Self::Bottom(y) => p.y >= y,
            Self::Top(y) => p.y <= y,
        }
    }

    /// Intersection of the segment `a..b` with the boundary line. Only
    /// called when exactly one endpoint is inside, so the segment is never
    /// parallel to the line.
    fn intersect(self, a: Point, b: Point) -> Point {
        match self {
            Self::Left(x) | Self::Right(x) => {
                let t = (x - a.x) / (b.x - a.x);
                Point::new(x, a.y + t * (b.y - a.y))
            }
            Self::Bottom(y) | Self::Top(y) => {
                let t = (y - a.y) / (b.y - a.y);
                Point::new(a.x + t * (b.x - a.x), y)
            }
        }
    }
}

/// Sutherland-Hodgman clipping of a closed polygon to a rectangle.
///
/// The result is written to `output`, which is empty if the polygon lies
/// entirely outside the rectangle.
fn clip_polygon(points: &[Point], rect: Rect, output: &mut Vec<Point>) {
    output.clear();
    output.extend_from_slice(points);
    let mut input = Vec::with_capacity(points.len());
    for boundary in [
        Boundary::Left(rect.x0),
        Boundary::Right(rect.x1),
        Boundary::Bottom(rect.y0),
        Boundary::Top(rect.y1),
    ] {
        std::mem::swap(&mut input, output);
        output.clear();
        let Some(&last) = input.last() else {
            return;
        };
        let mut prev = last;
        let mut prev_inside = boundary.contains(prev);
        for &p in &input {
            let inside = boundary.contains(p);
            if inside != prev_inside {
                output.push(boundary.intersect(prev, p));
            }
            if inside {
                output.push(p);
            }
            prev = p;
            prev_inside = inside;
        }
    }
}

/// A non-horizontal edge, stored bottom to top with its original
/// direction.
#[derive(Copy, Clone, Debug)]
struct Edge {
    lo: Point,
    hi: Point,
    winding: i32,
}

impl Edge {
    fn new(a: Point, b: Point) -> Option<Self> {
        if a.y < b.y {
            Some(Self {
                lo: a,
                hi: b,
                winding: 1,
            })
        } else if a.y > b.y {
            Some(Self {
                lo: b,
                hi: a,
                winding: -1,
            })
        } else {
            None
        }
    }

    fn x_at(&self, y: f64) -> f64 {
        let y = y.clamp(self.lo.y, self.hi.y);
        let t = (y - self.lo.y) / (self.hi.y - self.lo.y);
        self.lo.x + t * (self.hi.x - self.lo.x)
    }

    /// Returns the y coordinate at which the interiors of two edges cross.
    fn crossing(&self, other: &Edge) -> Option<f64> {
        if self.hi.y <= other.lo.y || other.hi.y <= self.lo.y {
            return None;
        }
        let r = self.hi - self.lo;
        let s = other.hi - other.lo;
        let denom = r.cross(s);
        if denom == 0.0 {
            return None;
        }
        let d: Vec2 = other.lo - self.lo;
        let t = d.cross(s) / denom;
        let u = d.cross(r) / denom;
        (t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0).then(|| self.lo.y + t * r.y)
    }
}

fn push_edges(points: &[Point], edges: &mut Vec<Edge>) {
    if points.len() < 3 {
        return;
    }
    let mut prev = points[points.len() - 1];
    for &p in points {
        edges.extend(Edge::new(prev, p));
        prev = p;
    }
}

/// Filled area of a set of closed edge loops under the given fill rule.
fn slab_area(edges: &[Edge], fill_rule: FillRule) -> f64 {
    if edges.is_empty() {
        return 0.0;
    }
    let mut ys = Vec::with_capacity(edges.len() * 2);
    for (ix, edge) in edges.iter().enumerate() {
        ys.push(edge.lo.y);
        ys.push(edge.hi.y);
        ys.extend(edges[ix + 1..].iter().filter_map(|e| edge.crossing(e)));
    }
    ys.sort_by(f64::total_cmp);
    ys.dedup();

    let mut area = 0.0;
    // (x at band bottom, x at band middle, x at band top, winding)
    let mut spans: Vec<(f64, f64, f64, i32)> = Vec::new();
    for band in ys.windows(2) {
        let (y0, y1) = (band[0], band[1]);
        let height = y1 - y0;
        if height <= 0.0 {
            continue;
        }
        let mid = y0 + height * 0.5;
        spans.clear();
        spans.extend(
            edges
                .iter()
                .filter(|e| e.lo.y < mid && e.hi.y > mid)
                .map(|e| (e.x_at(y0), e.x_at(mid), e.x_at(y1), e.winding)),
        );
        spans.sort_by(|a, b| a.1.total_cmp(&b.1));
        let mut winding = 0;
        for pair in spans.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            winding += left.3;
            if fill_rule.is_filled(winding) {
                area += ((right.0 - left.0) + (right.2 - left.2)) * 0.5 * height;
            }
        }
    }
    area
}
