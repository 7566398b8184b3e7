//! Dots and boxes game logic.
//!
//! Two players alternately draw edges on a grid of dots; completing the
//! fourth side of a cell claims it for the drawer, who then moves again.
//! First to the score threshold wins. Player two is a uniform-random
//! computer opponent.
//!
//! The crate is the game *engine* only: pointer-to-edge resolution, move
//! validation, cell-completion detection, scoring, turn alternation, and
//! terminal detection. Rendering, screens, and pacing of the computer's
//! move belong to the caller, which drives the engine and re-renders from
//! [`Game::snapshot`].
//!
//! # Example
//!
//! ```
//! use dots_and_boxes::{Game, Player, resolve_touch};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), dots_and_boxes::GameError> {
//! let mut game = Game::new(8, 12)?;
//!
//! // Human touch, already converted to grid-relative coordinates.
//! if let Some(edge) = resolve_touch(2.0, 15.0, 30.0, 30.0, game.edges(), 8, 12) {
//!     let outcome = game.apply(edge, Player::One);
//!     assert!(outcome.is_some());
//! }
//!
//! // Computer reply; drive it again while the turn stays with Player::Two.
//! let mut rng = StdRng::seed_from_u64(7);
//! while game.turn() == Player::Two && !game.is_over() {
//!     game.computer_move(&mut rng);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod game;
mod geometry;
mod input;
mod rules;
mod types;

pub use ai::choose_edge;
pub use game::{AiMove, Game, GameError, MoveOutcome, POINTS_PER_CELL, WIN_THRESHOLD};
pub use geometry::{BoardMetrics, EDGE_PADDING};
pub use input::resolve_touch;
pub use rules::{all_edges, cell_enclosed, cells_closed_by, edge_capacity, edge_in_range};
pub use types::{
    ClaimSet, ClaimedCell, Edge, EdgeSet, GameSnapshot, GameStatus, Orientation, PlacedEdge,
    Player, Scores,
};
