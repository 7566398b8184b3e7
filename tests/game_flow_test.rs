//! Tests for the move engine: scoring, turns, completion, terminal states.

use dots_and_boxes::{
    Edge, Game, GameError, GameStatus, Player, cell_enclosed, edge_capacity,
};

#[test]
fn test_construction_rejects_zero_dimensions() {
    assert_eq!(
        Game::new(0, 3).unwrap_err(),
        GameError::InvalidDimensions { cols: 0, rows: 3 }
    );
    assert_eq!(
        Game::new(3, 0).unwrap_err(),
        GameError::InvalidDimensions { cols: 3, rows: 0 }
    );
}

#[test]
fn test_new_game_starts_clean() {
    let game = Game::new(8, 12).unwrap();
    assert!(game.edges().is_empty());
    assert!(game.claims().is_empty());
    assert_eq!(game.scores().get(Player::One), 0);
    assert_eq!(game.scores().get(Player::Two), 0);
    assert_eq!(game.turn(), Player::One);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_single_cell_walkthrough() {
    // 1x1 grid: three P1 edges pass the turn, P2's fourth edge claims the
    // cell, keeps the turn, and exhaustion then ends the game in P2's favor.
    let mut game = Game::new(1, 1).unwrap();

    let top = game.apply(Edge::horizontal(0, 0), Player::One).unwrap();
    assert!(top.turn_passes);
    assert_eq!(game.turn(), Player::Two);

    let right = game.apply(Edge::vertical(0, 1), Player::Two).unwrap();
    assert!(right.turn_passes);
    assert_eq!(game.turn(), Player::One);

    let bottom = game.apply(Edge::horizontal(1, 0), Player::One).unwrap();
    assert!(bottom.turn_passes);
    assert_eq!(game.turn(), Player::Two);

    let left = game.apply(Edge::vertical(0, 0), Player::Two).unwrap();
    assert_eq!(left.completed.len(), 1);
    assert_eq!(left.completed[0].owner, Player::Two);
    assert_eq!((left.completed[0].row, left.completed[0].col), (0, 0));
    assert_eq!(left.score_delta, 10);
    assert!(!left.turn_passes);
    assert_eq!(game.turn(), Player::Two);
    assert_eq!(game.scores().get(Player::Two), 10);
    assert_eq!(game.status(), GameStatus::InProgress);

    assert!(game.finish_if_exhausted());
    assert_eq!(game.status(), GameStatus::Won(Player::Two));
}

#[test]
fn test_duplicate_apply_is_idempotent() {
    let mut game = Game::new(3, 3).unwrap();
    assert!(game.apply(Edge::horizontal(1, 1), Player::One).is_some());
    assert_eq!(game.apply(Edge::horizontal(1, 1), Player::Two), None);
    assert_eq!(game.edges().len(), 1);
    assert_eq!(game.turn(), Player::Two); // unchanged by the rejected move
}

#[test]
fn test_out_of_range_edge_is_rejected() {
    let mut game = Game::new(3, 3).unwrap();
    assert_eq!(game.apply(Edge::horizontal(4, 0), Player::One), None);
    assert_eq!(game.apply(Edge::horizontal(0, 3), Player::One), None);
    assert_eq!(game.apply(Edge::vertical(3, 0), Player::One), None);
    assert_eq!(game.apply(Edge::vertical(0, 4), Player::One), None);
    assert!(game.edges().is_empty());
}

#[test]
fn test_turn_passes_exactly_when_nothing_completed() {
    let mut game = Game::new(2, 2).unwrap();
    let mut turn = game.turn();
    for edge in [
        Edge::horizontal(0, 0),
        Edge::horizontal(1, 0),
        Edge::vertical(0, 0),
        Edge::vertical(0, 1), // completes (0, 0)
        Edge::horizontal(0, 1),
    ] {
        let actor = turn;
        let outcome = game.apply(edge, actor).unwrap();
        assert_eq!(outcome.turn_passes, outcome.completed.is_empty());
        turn = game.turn();
        if outcome.turn_passes {
            assert_eq!(turn, actor.opponent());
        } else {
            assert_eq!(turn, actor);
        }
    }
}

#[test]
fn test_shared_edge_completes_two_cells_in_one_outcome() {
    let mut game = Game::new(2, 1).unwrap();
    // Everything except the vertical shared by both cells.
    for edge in [
        Edge::horizontal(0, 0),
        Edge::horizontal(0, 1),
        Edge::horizontal(1, 0),
        Edge::horizontal(1, 1),
        Edge::vertical(0, 0),
        Edge::vertical(0, 2),
    ] {
        assert!(game.apply(edge, Player::Two).unwrap().completed.is_empty());
    }

    let outcome = game.apply(Edge::vertical(0, 1), Player::One).unwrap();
    assert_eq!(outcome.completed.len(), 2);
    assert_eq!(outcome.score_delta, 20);
    assert!(!outcome.turn_passes);
    assert_eq!(game.scores().get(Player::One), 20);
    assert_eq!(game.claims().len(), 2);
}

#[test]
fn test_cell_claimed_iff_enclosed() {
    let mut game = Game::new(2, 2).unwrap();
    let mut turn = game.turn();
    for edge in [
        Edge::horizontal(0, 0),
        Edge::vertical(0, 0),
        Edge::vertical(0, 1),
        Edge::horizontal(1, 0), // completes (0, 0)
        Edge::horizontal(0, 1),
        Edge::vertical(0, 2),
        Edge::horizontal(1, 1), // completes (0, 1)
    ] {
        game.apply(edge, turn).unwrap();
        turn = game.turn();
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(
                    game.claims().contains(row, col),
                    cell_enclosed(row, col, game.edges()),
                    "claim/enclosure mismatch at ({row}, {col})"
                );
            }
        }
    }
    assert_eq!(game.claims().len(), 2);
}

#[test]
fn test_edge_count_never_exceeds_capacity() {
    let mut game = Game::with_threshold(2, 2, 1000).unwrap();
    let capacity = edge_capacity(2, 2);
    assert_eq!(capacity, 12);

    let mut turn = game.turn();
    for edge in dots_and_boxes::all_edges(2, 2) {
        game.apply(edge, turn).unwrap();
        turn = game.turn();
        assert!(game.edges().len() <= capacity);
    }
    assert_eq!(game.edges().len(), capacity);

    // Nothing further can be placed.
    assert_eq!(game.apply(Edge::horizontal(0, 0), turn), None);
    assert!(game.finish_if_exhausted());
    assert!(game.is_over());
}

#[test]
fn test_threshold_win_stops_play() {
    let mut game = Game::with_threshold(2, 1, 10).unwrap();
    for edge in [
        Edge::horizontal(0, 0),
        Edge::horizontal(1, 0),
        Edge::vertical(0, 0),
    ] {
        game.apply(edge, Player::Two).unwrap();
    }
    let outcome = game.apply(Edge::vertical(0, 1), Player::One).unwrap();
    assert_eq!(outcome.score_delta, 10);
    assert_eq!(game.status(), GameStatus::Won(Player::One));

    // Terminal games ignore further moves.
    assert_eq!(game.apply(Edge::horizontal(0, 1), Player::Two), None);
    assert_eq!(game.edges().len(), 4);
}

#[test]
fn test_exhaustion_tie_goes_to_first_player() {
    let mut game = Game::new(2, 1).unwrap();

    // P1 completes the left cell, P2 the right: 10 points apiece.
    game.apply(Edge::horizontal(0, 0), Player::Two).unwrap();
    game.apply(Edge::horizontal(1, 0), Player::One).unwrap();
    game.apply(Edge::vertical(0, 0), Player::Two).unwrap();
    let left = game.apply(Edge::vertical(0, 1), Player::One).unwrap();
    assert_eq!(left.score_delta, 10);

    game.apply(Edge::horizontal(0, 1), Player::One).unwrap();
    game.apply(Edge::horizontal(1, 1), Player::One).unwrap();
    let right = game.apply(Edge::vertical(0, 2), Player::Two).unwrap();
    assert_eq!(right.score_delta, 10);

    assert_eq!(game.scores().get(Player::One), game.scores().get(Player::Two));
    assert!(game.finish_if_exhausted());
    assert_eq!(game.status(), GameStatus::Won(Player::One));
}

#[test]
fn test_finish_if_exhausted_is_false_while_moves_remain() {
    let mut game = Game::new(3, 3).unwrap();
    assert!(!game.finish_if_exhausted());
    game.apply(Edge::horizontal(0, 0), Player::One).unwrap();
    assert!(!game.finish_if_exhausted());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_snapshot_reflects_state_and_serializes() {
    let mut game = Game::new(2, 2).unwrap();
    game.apply(Edge::horizontal(0, 0), Player::One).unwrap();
    game.apply(Edge::vertical(0, 0), Player::Two).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.edges.len(), 2);
    assert_eq!(snapshot.edges[0].owner, Player::One);
    assert_eq!(snapshot.turn, Player::One);
    assert_eq!(snapshot.status, GameStatus::InProgress);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["scores"]["one"], 0);
    assert_eq!(json["edges"][0]["edge"]["orientation"], "Horizontal");
}
