//! Computer opponent move selection.
//!
//! Uniform random draw over the enumerated legal edges. No lookahead and
//! no preference for or against three-sided cells; the simplicity is
//! deliberate, not an optimization target.

use crate::types::Edge;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Picks one edge uniformly at random from `candidates`.
///
/// Returns `None` when no candidates remain. Callers inject the RNG, so a
/// seeded `StdRng` makes selection deterministic in tests.
pub fn choose_edge<R: Rng + ?Sized>(rng: &mut R, candidates: &[Edge]) -> Option<Edge> {
    let choice = candidates.choose(rng).copied();
    match choice {
        Some(edge) => debug!(%edge, pool = candidates.len(), "computer selected edge"),
        None => debug!("no edges left to select"),
    }
    choice
}
