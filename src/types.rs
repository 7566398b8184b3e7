//! Core domain types for dots and boxes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// The first player (goes first; the human).
    #[strum(serialize = "P1")]
    One,
    /// The second player (the computer opponent).
    #[strum(serialize = "P2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Orientation of an edge on the dot lattice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Orientation {
    /// Runs along the top of cell `(row, col)`; valid for `row <= rows`.
    #[strum(serialize = "H")]
    Horizontal,
    /// Runs along the left of cell `(row, col)`; valid for `col <= cols`.
    #[strum(serialize = "V")]
    Vertical,
}

/// Identity of a single edge between two adjacent dots.
///
/// A horizontal edge `(row, col)` is the top side of cell `(row, col)`,
/// so `row` ranges over `0..=rows` and `col` over `0..cols`. A vertical
/// edge `(row, col)` is the left side of cell `(row, col)`, so `row`
/// ranges over `0..rows` and `col` over `0..=cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Row index of the edge.
    pub row: u32,
    /// Column index of the edge.
    pub col: u32,
    /// Whether the edge is horizontal or vertical.
    pub orientation: Orientation,
}

impl Edge {
    /// Creates a horizontal edge (top side of cell `(row, col)`).
    pub fn horizontal(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            orientation: Orientation::Horizontal,
        }
    }

    /// Creates a vertical edge (left side of cell `(row, col)`).
    pub fn vertical(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            orientation: Orientation::Vertical,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.orientation, self.row, self.col)
    }
}

/// An edge that has been drawn on the board, with the player who drew it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedEdge {
    /// The edge that was drawn.
    pub edge: Edge,
    /// The player who drew it.
    pub owner: Player,
}

/// The set of edges drawn so far.
///
/// Keeps placement order for rendering and a hash index for the duplicate
/// check. Duplicate inserts are rejected, so the set never holds two edges
/// with the same `(row, col, orientation)`.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    placed: Vec<PlacedEdge>,
    index: HashSet<Edge>,
}

impl EdgeSet {
    /// Creates an empty edge set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the edge has already been drawn.
    pub fn contains(&self, edge: Edge) -> bool {
        self.index.contains(&edge)
    }

    /// Inserts an edge for `owner`. Returns `false` if it was already present.
    pub(crate) fn insert(&mut self, edge: Edge, owner: Player) -> bool {
        if !self.index.insert(edge) {
            return false;
        }
        self.placed.push(PlacedEdge { edge, owner });
        true
    }

    /// Iterates over drawn edges in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedEdge> {
        self.placed.iter()
    }

    /// Returns the number of drawn edges.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Checks whether no edges have been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

/// A cell claimed by the player who completed its fourth side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedCell {
    /// Row index of the cell.
    pub row: u32,
    /// Column index of the cell.
    pub col: u32,
    /// The player who placed the completing edge.
    pub owner: Player,
}

/// The set of claimed cells, at most one claim per `(row, col)`.
#[derive(Debug, Clone, Default)]
pub struct ClaimSet {
    claimed: Vec<ClaimedCell>,
    index: HashSet<(u32, u32)>,
}

impl ClaimSet {
    /// Creates an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the cell has been claimed.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.index.contains(&(row, col))
    }

    /// Claims a cell for `owner`. Returns `false` if it was already claimed.
    pub(crate) fn insert(&mut self, row: u32, col: u32, owner: Player) -> bool {
        if !self.index.insert((row, col)) {
            return false;
        }
        self.claimed.push(ClaimedCell { row, col, owner });
        true
    }

    /// Iterates over claimed cells in claim order.
    pub fn iter(&self) -> impl Iterator<Item = &ClaimedCell> {
        self.claimed.iter()
    }

    /// Returns the number of claimed cells.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Checks whether no cells have been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// Per-player score totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    one: u32,
    two: u32,
}

impl Scores {
    /// Returns the score for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// Adds `points` to `player`'s total.
    pub(crate) fn add(&mut self, player: Player, points: u32) {
        match player {
            Player::One => self.one += points,
            Player::Two => self.two += points,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner (by threshold or by exhaustion).
    Won(Player),
}

/// Read-only view of the full game state for a render cycle.
///
/// Everything the presentation layer draws from, captured in one value;
/// nothing here is recomputed from the edge set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// Edges drawn so far, in placement order.
    pub edges: Vec<PlacedEdge>,
    /// Cells claimed so far, in claim order.
    pub claims: Vec<ClaimedCell>,
    /// Per-player score totals.
    pub scores: Scores,
    /// The player to move.
    pub turn: Player,
    /// In progress or won.
    pub status: GameStatus,
}
