//! Partitioning of a bounding box into a fixed lattice of cells.

use kurbo::Rect;

/// Number of cells along each axis of the grid.
pub const GRID_SIZE: usize = 8;

/// Total number of cells in the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// An 8x8 partition of a bounding box into equally sized cells.
///
/// Cells are stored in row-major order: the cell in column `i` and row `j`
/// lives at index `j * 8 + i` and spans
/// `x0 + i * step_x .. x0 + (i + 1) * step_x` horizontally and
/// `y0 + j * step_y .. y0 + (j + 1) * step_y` vertically.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Rect,
    cells: [Rect; CELL_COUNT],
}

impl Grid {
    /// Partitions the given bounding box.
    ///
    /// A box with zero width or height produces degenerate cells of zero
    /// area.
    pub fn new(bounds: Rect) -> Self {
        let bounds = bounds.abs();
        let (step_x, step_y) = (
            bounds.width() / GRID_SIZE as f64,
            bounds.height() / GRID_SIZE as f64,
        );
        let cells = std::array::from_fn(|index| {
            let (i, j) = ((index % GRID_SIZE) as f64, (index / GRID_SIZE) as f64);
            Rect::new(
                bounds.x0 + i * step_x,
                bounds.y0 + j * step_y,
                bounds.x0 + (i + 1.0) * step_x,
                bounds.y0 + (j + 1.0) * step_y,
            )
        });
        Self { bounds, cells }
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> &[Rect; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at column `i` and row `j`.
    pub fn cell(&self, i: usize, j: usize) -> Option<Rect> {
        (i < GRID_SIZE && j < GRID_SIZE).then(|| self.cells[j * GRID_SIZE + i])
    }

    /// Returns the area every cell would have in an exact partition.
    ///
    /// This is the normalization reference for coverage scores.
    pub fn ideal_cell_area(&self) -> f64 {
        (self.bounds.width() / GRID_SIZE as f64) * (self.bounds.height() / GRID_SIZE as f64)
    }

    /// Returns true if the grid has no area to sample.
    pub fn is_degenerate(&self) -> bool {
        self.ideal_cell_area() <= 0.0
    }
}
