//! Grid placement of wards on the dashboard map.
//!
//! Wards have no real boundaries, so each one gets a cell in a fixed-width
//! grid. The cell's corners are nudged by a sine of the ward's position so
//! the shapes look irregular while staying identical from run to run.

use ward_air_ward_models::Point;

/// Number of cells per grid row.
pub const GRID_COLUMNS: usize = 5;

/// Side length of a cell.
pub const CELL_SIZE: f64 = 60.0;

/// Space between adjacent cells.
pub const CELL_GAP: f64 = 8.0;

/// Distance of the first cell from the map origin on both axes.
pub const GRID_OFFSET: f64 = 20.0;

/// Maximum displacement of a corner.
pub const CORNER_JITTER: f64 = 5.0;

/// The outline and label anchor of one ward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corners: [Point; 4],
    pub center: Point,
}

impl GridCell {
    /// Renders the outline as a closed SVG path.
    #[must_use]
    pub fn svg_path(&self) -> String {
        let [a, b, c, d] = self.corners;
        format!(
            "M{},{} L{},{} L{},{} L{},{} Z",
            a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
        )
    }
}

/// Computes the cell for the ward at `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn grid_cell(index: usize) -> GridCell {
    let row = index / GRID_COLUMNS;
    let col = index % GRID_COLUMNS;

    let x = (col as f64).mul_add(CELL_SIZE + CELL_GAP, GRID_OFFSET);
    let y = (row as f64).mul_add(CELL_SIZE + CELL_GAP, GRID_OFFSET);

    let jitter = |k: usize| ((index * k) as f64).sin() * CORNER_JITTER;

    GridCell {
        corners: [
            Point {
                x: x + jitter(1),
                y: y + jitter(2),
            },
            Point {
                x: x + CELL_SIZE + jitter(3),
                y: y + jitter(4),
            },
            Point {
                x: x + CELL_SIZE + jitter(5),
                y: y + CELL_SIZE + jitter(6),
            },
            Point {
                x: x + jitter(7),
                y: y + CELL_SIZE + jitter(8),
            },
        ],
        center: Point {
            x: x + CELL_SIZE / 2.0,
            y: y + CELL_SIZE / 2.0,
        },
    }
}
