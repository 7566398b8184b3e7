//! Board pixel geometry for the presentation layer.
//!
//! Display-only mapping between board pixels and the dot lattice; the
//! engine never reads these values. The resolver's inputs (grid-relative
//! coordinates and cell spacing) are derived here.

use serde::Serialize;

/// Space between the outermost dots and the board edge, in pixels.
pub const EDGE_PADDING: f32 = 16.0;

/// Pixel metrics of a rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoardMetrics {
    /// Padding around the dot lattice.
    pub padding: f32,
    /// Pixel width of one cell.
    pub spacing_x: f32,
    /// Pixel height of one cell.
    pub spacing_y: f32,
    /// Grid column count.
    pub cols: u32,
    /// Grid row count.
    pub rows: u32,
}

impl BoardMetrics {
    /// Computes metrics for a board of `width` x `height` pixels.
    ///
    /// A board smaller than twice the padding yields zero spacing, which
    /// the input resolver treats as a degenerate-geometry no-op.
    pub fn from_board_size(width: f32, height: f32, cols: u32, rows: u32) -> Self {
        let usable_w = (width - EDGE_PADDING * 2.0).max(0.0);
        let usable_h = (height - EDGE_PADDING * 2.0).max(0.0);
        let spacing_x = if cols > 0 { usable_w / cols as f32 } else { 0.0 };
        let spacing_y = if rows > 0 { usable_h / rows as f32 } else { 0.0 };
        Self {
            padding: EDGE_PADDING,
            spacing_x,
            spacing_y,
            cols,
            rows,
        }
    }

    /// Pixel position of the dot at lattice index `(row, col)`.
    pub fn dot_origin(&self, row: u32, col: u32) -> (f32, f32) {
        (
            self.padding + col as f32 * self.spacing_x,
            self.padding + row as f32 * self.spacing_y,
        )
    }

    /// Converts board-relative pixels to grid-relative coordinates, the
    /// frame the input resolver expects.
    pub fn grid_relative(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.padding, y - self.padding)
    }

    /// Checks a grid-relative point against the usable area, with a
    /// generous 20%-of-a-cell slack on every side so near-miss touches
    /// still reach the resolver.
    pub fn contains(&self, rx: f32, ry: f32) -> bool {
        let slack_x = self.spacing_x * 0.2;
        let slack_y = self.spacing_y * 0.2;
        rx >= -slack_x
            && ry >= -slack_y
            && rx <= self.usable_width() + slack_x
            && ry <= self.usable_height() + slack_y
    }

    /// Pixel width of the dot lattice.
    pub fn usable_width(&self) -> f32 {
        self.spacing_x * self.cols as f32
    }

    /// Pixel height of the dot lattice.
    pub fn usable_height(&self) -> f32 {
        self.spacing_y * self.rows as f32
    }
}
