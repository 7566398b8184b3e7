//! Game engine and move resolution for dots and boxes.

use crate::ai;
use crate::rules;
use crate::types::{ClaimSet, ClaimedCell, Edge, EdgeSet, GameSnapshot, GameStatus, Player, Scores};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

/// Points awarded for each completed cell.
pub const POINTS_PER_CELL: u32 = 10;

/// Default score threshold at which a player wins outright.
pub const WIN_THRESHOLD: u32 = 100;

/// Error that can occur when constructing a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Grid dimensions must both be positive.
    #[display("invalid grid dimensions {cols}x{rows}: both must be positive")]
    InvalidDimensions {
        /// Requested column count.
        cols: u32,
        /// Requested row count.
        rows: u32,
    },
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// Cells newly claimed by this move (zero, one, or two).
    pub completed: Vec<ClaimedCell>,
    /// Points added to the actor's score by this move.
    pub score_delta: u32,
    /// Whether the turn passed to the other player. `false` exactly when
    /// the move completed at least one cell.
    pub turn_passes: bool,
}

/// Result of asking the computer opponent to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiMove {
    /// The computer drew an edge.
    Played(MoveOutcome),
    /// No legal edge remains (or the game was already over); the game is
    /// terminal after this is returned.
    NoMovesLeft,
}

/// Dots-and-boxes game engine.
///
/// Owns the authoritative state: the edge set, claimed cells, scores, the
/// turn, and the status. All mutation goes through [`Game::apply`] and
/// [`Game::computer_move`]; reads are plain getters so a render cycle
/// never recomputes completion state.
#[derive(Debug, Clone)]
pub struct Game {
    cols: u32,
    rows: u32,
    threshold: u32,
    edges: EdgeSet,
    claims: ClaimSet,
    scores: Scores,
    turn: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game on a `cols` x `rows` grid with the default win
    /// threshold of [`WIN_THRESHOLD`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] if either dimension is zero.
    #[instrument]
    pub fn new(cols: u32, rows: u32) -> Result<Self, GameError> {
        Self::with_threshold(cols, rows, WIN_THRESHOLD)
    }

    /// Creates a new game with a custom win threshold.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] if either dimension is zero.
    #[instrument]
    pub fn with_threshold(cols: u32, rows: u32, threshold: u32) -> Result<Self, GameError> {
        if cols == 0 || rows == 0 {
            return Err(GameError::InvalidDimensions { cols, rows });
        }
        Ok(Self {
            cols,
            rows,
            threshold,
            edges: EdgeSet::new(),
            claims: ClaimSet::new(),
            scores: Scores::default(),
            turn: Player::One,
            status: GameStatus::InProgress,
        })
    }

    /// Applies a resolved edge for `actor`.
    ///
    /// Returns `None` with no state change when the game is already over,
    /// the edge lies outside the lattice, or the edge is already drawn
    /// (the resolver filters duplicates too, but the engine re-validates).
    ///
    /// On success the edge is recorded, every adjacent cell it enclosed is
    /// claimed for `actor` at [`POINTS_PER_CELL`] apiece, and the turn
    /// passes unless at least one cell was completed. Reaching the score
    /// threshold ends the game in `actor`'s favor.
    #[instrument(skip(self))]
    pub fn apply(&mut self, edge: Edge, actor: Player) -> Option<MoveOutcome> {
        if self.is_over() {
            return None;
        }
        if !rules::edge_in_range(edge, self.cols, self.rows) {
            debug!("rejected out-of-range edge");
            return None;
        }
        if self.edges.contains(edge) {
            debug!("rejected duplicate edge");
            return None;
        }
        Some(self.place(edge, actor))
    }

    /// Makes the computer opponent's move, selected uniformly at random
    /// among the edges not yet drawn.
    ///
    /// Returns [`AiMove::NoMovesLeft`] when the grid is exhausted (or the
    /// game already ended); exhaustion finalizes the game with the
    /// higher-scoring player as winner, ties going to [`Player::One`].
    /// The outcome honors the same extra-turn rule as [`Game::apply`], so
    /// the driver should call this again while the turn stays with
    /// [`Player::Two`].
    #[instrument(skip(self, rng))]
    pub fn computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AiMove {
        if self.is_over() {
            return AiMove::NoMovesLeft;
        }
        let candidates = self.legal_moves();
        let Some(edge) = ai::choose_edge(rng, &candidates) else {
            self.finish_by_score();
            return AiMove::NoMovesLeft;
        };
        AiMove::Played(self.place(edge, Player::Two))
    }

    /// Driver-facing no-moves check, run between turns.
    ///
    /// If the game is still in progress and every possible edge has been
    /// drawn, ends the game — winner is the higher-scoring player, ties
    /// going to [`Player::One`] — and returns `true`. Otherwise `false`.
    #[instrument(skip(self))]
    pub fn finish_if_exhausted(&mut self) -> bool {
        if self.is_over() || self.edges.len() < rules::edge_capacity(self.cols, self.rows) {
            return false;
        }
        self.finish_by_score();
        true
    }

    /// Records the edge, claims what it closed, scores, and settles the turn.
    fn place(&mut self, edge: Edge, actor: Player) -> MoveOutcome {
        self.edges.insert(edge, actor);

        let closed = rules::cells_closed_by(edge, &self.edges, &self.claims, self.cols, self.rows);
        let mut completed = Vec::with_capacity(closed.len());
        for (row, col) in closed {
            self.claims.insert(row, col, actor);
            completed.push(ClaimedCell {
                row,
                col,
                owner: actor,
            });
        }

        let score_delta = completed.len() as u32 * POINTS_PER_CELL;
        self.scores.add(actor, score_delta);

        if self.scores.get(actor) >= self.threshold {
            self.status = GameStatus::Won(actor);
            debug!(winner = %actor, "score threshold reached");
        }

        let turn_passes = completed.is_empty();
        self.turn = if turn_passes { actor.opponent() } else { actor };

        debug!(
            completed = completed.len(),
            score_delta, turn_passes, "edge placed"
        );
        MoveOutcome {
            completed,
            score_delta,
            turn_passes,
        }
    }

    /// Ends the game on exhaustion: higher score wins, ties go to the
    /// first player. An explicit policy choice, documented rather than
    /// inferred.
    fn finish_by_score(&mut self) {
        let winner = if self.scores.get(Player::Two) > self.scores.get(Player::One) {
            Player::Two
        } else {
            Player::One
        };
        self.status = GameStatus::Won(winner);
        debug!(winner = %winner, "no moves left");
    }

    /// Enumerates every edge not yet drawn.
    pub fn legal_moves(&self) -> Vec<Edge> {
        rules::all_edges(self.cols, self.rows)
            .into_iter()
            .filter(|edge| !self.edges.contains(*edge))
            .collect()
    }

    /// Returns the grid's column count.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns the grid's row count.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the win threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns the edges drawn so far.
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Returns the cells claimed so far.
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Returns the score totals.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    /// Captures a serializable read-only view of the state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            edges: self.edges.iter().copied().collect(),
            claims: self.claims.iter().copied().collect(),
            scores: self.scores,
            turn: self.turn,
            status: self.status,
        }
    }
}
