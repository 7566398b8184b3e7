//! Pointer input resolution.
//!
//! Maps a continuous pointer coordinate onto the discrete edge the player
//! most plausibly aimed at, or nothing if the touch landed in a cell's
//! interior dead zone. Pure classification: no game state is mutated here.

use crate::rules;
use crate::types::{Edge, EdgeSet, Orientation};
use tracing::trace;

/// Resolves a touch at `(x, y)` to a candidate edge.
///
/// Coordinates are relative to the grid's top-left dot, in the same units
/// as `spacing_x` / `spacing_y` (the pixel size of one cell). The touch is
/// classified against the containing cell's four edge zones with a
/// one-third-of-cell tolerance, in precedence order top, bottom, left,
/// right; a touch in the remaining interior resolves to nothing.
///
/// Returns `None` for non-positive spacing, a zero-sized grid, an edge
/// outside the lattice, or an edge already present in `edges`. Calling
/// twice with the same arguments yields the same result.
pub fn resolve_touch(
    x: f32,
    y: f32,
    spacing_x: f32,
    spacing_y: f32,
    edges: &EdgeSet,
    cols: u32,
    rows: u32,
) -> Option<Edge> {
    if spacing_x <= 0.0 || spacing_y <= 0.0 || cols == 0 || rows == 0 {
        return None;
    }

    // Containing cell; touches left of or above the lattice floor to -1.
    let col = (x / spacing_x).floor() as i64;
    let row = (y / spacing_y).floor() as i64;

    let offset_x = x - col as f32 * spacing_x;
    let offset_y = y - row as f32 * spacing_y;

    let threshold_x = spacing_x / 3.0;
    let threshold_y = spacing_y / 3.0;

    // The cross axis is clamped into the lattice so a touch slightly
    // outside still snaps to the nearest valid edge; the classified axis
    // is left unclamped and range-checked below.
    let col_clamped = col.clamp(0, i64::from(cols) - 1);
    let row_clamped = row.clamp(0, i64::from(rows) - 1);

    let (cand_row, cand_col, orientation) = if offset_y < threshold_y {
        (row, col_clamped, Orientation::Horizontal)
    } else if offset_y > spacing_y - threshold_y {
        (row + 1, col_clamped, Orientation::Horizontal)
    } else if offset_x < threshold_x {
        (row_clamped, col, Orientation::Vertical)
    } else if offset_x > spacing_x - threshold_x {
        (row_clamped, col + 1, Orientation::Vertical)
    } else {
        trace!(x, y, "touch in dead zone");
        return None;
    };

    if cand_row < 0 || cand_col < 0 {
        return None;
    }

    let edge = Edge {
        row: cand_row as u32,
        col: cand_col as u32,
        orientation,
    };

    if !rules::edge_in_range(edge, cols, rows) {
        return None;
    }
    if edges.contains(edge) {
        trace!(%edge, "touch resolved to an already-drawn edge");
        return None;
    }

    trace!(%edge, "touch resolved");
    Some(edge)
}
