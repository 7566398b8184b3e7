//! Pure rule helpers: edge ranges, enumeration, and cell completion.

use crate::types::{ClaimSet, Edge, EdgeSet, Orientation};

/// Total number of edges a `cols` x `rows` grid can hold.
///
/// `rows * (cols + 1)` vertical edges plus `cols * (rows + 1)` horizontal
/// ones; once the drawn set reaches this count no legal move remains.
pub fn edge_capacity(cols: u32, rows: u32) -> usize {
    (rows * (cols + 1) + cols * (rows + 1)) as usize
}

/// Checks that `edge` lies within the valid range for its orientation.
pub fn edge_in_range(edge: Edge, cols: u32, rows: u32) -> bool {
    match edge.orientation {
        Orientation::Horizontal => edge.row <= rows && edge.col < cols,
        Orientation::Vertical => edge.row < rows && edge.col <= cols,
    }
}

/// Enumerates every edge of the grid, both orientations, full coordinate
/// domains (horizontal rows run `0..=rows`, vertical cols run `0..=cols`).
pub fn all_edges(cols: u32, rows: u32) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(edge_capacity(cols, rows));
    for row in 0..=rows {
        for col in 0..cols {
            edges.push(Edge::horizontal(row, col));
        }
    }
    for row in 0..rows {
        for col in 0..=cols {
            edges.push(Edge::vertical(row, col));
        }
    }
    edges
}

/// Checks whether all four bounding edges of cell `(row, col)` are drawn.
pub fn cell_enclosed(row: u32, col: u32, edges: &EdgeSet) -> bool {
    edges.contains(Edge::horizontal(row, col))
        && edges.contains(Edge::horizontal(row + 1, col))
        && edges.contains(Edge::vertical(row, col))
        && edges.contains(Edge::vertical(row, col + 1))
}

/// Returns the unclaimed cells that `edge` closed.
///
/// Only the one or two cells adjacent to the edge are tested: for a
/// horizontal edge the cells above and below it, for a vertical edge the
/// cells left and right of it. Boundary edges have a single neighbor.
pub fn cells_closed_by(
    edge: Edge,
    edges: &EdgeSet,
    claims: &ClaimSet,
    cols: u32,
    rows: u32,
) -> Vec<(u32, u32)> {
    let mut completed = Vec::new();

    let mut check = |row: Option<u32>, col: Option<u32>| {
        let (Some(row), Some(col)) = (row, col) else {
            return;
        };
        if row >= rows || col >= cols {
            return;
        }
        if cell_enclosed(row, col, edges) && !claims.contains(row, col) {
            completed.push((row, col));
        }
    };

    match edge.orientation {
        Orientation::Horizontal => {
            check(edge.row.checked_sub(1), Some(edge.col));
            check(Some(edge.row), Some(edge.col));
        }
        Orientation::Vertical => {
            check(Some(edge.row), edge.col.checked_sub(1));
            check(Some(edge.row), Some(edge.col));
        }
    }

    completed
}
