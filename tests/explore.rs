use minichess::chess::board::Board;
use minichess::chess::piece::{Piece, PieceKind, Player};
use minichess::core::coord::Coord;
use minichess::search::config::{NodeTracker, SearchError, SearchLimits};
use minichess::search::explore::reachable_positions;

fn board_with(pieces: &[(PieceKind, Player, (i32, i32))]) -> Board {
    let mut board = Board::empty(4);
    for &(kind, player, (row, col)) in pieces {
        board
            .place(Piece::new(kind, player, Coord::new(row, col)))
            .unwrap();
    }
    board
}

#[test]
fn zero_plies_is_just_the_start_placement() {
    let board = Board::initial();
    let mut tracker = NodeTracker::new(SearchLimits::default());
    let seen = reachable_positions(&board, Player::White, 0, &mut tracker).unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen.contains(&board.packed()));
}

#[test]
fn one_ply_counts_every_white_move() {
    let board = Board::initial();
    let moves = board.possible_actions(Player::White).len();

    let mut tracker = NodeTracker::new(SearchLimits::default());
    let seen = reachable_positions(&board, Player::White, 1, &mut tracker).unwrap();

    // Every single move leads to a distinct placement.
    assert_eq!(seen.len(), 1 + moves);
}

#[test]
fn exploration_is_deterministic() {
    let board = Board::initial();
    let mut tracker = NodeTracker::new(SearchLimits::default());
    let first = reachable_positions(&board, Player::White, 2, &mut tracker).unwrap();
    let mut tracker = NodeTracker::new(SearchLimits::default());
    let second = reachable_positions(&board, Player::White, 2, &mut tracker).unwrap();
    assert_eq!(first, second);
}

#[test]
fn placements_recurring_with_the_other_mover_are_still_expanded() {
    // wR(0,1), bK(3,2), wR(0,2), bK(3,1) is a legal 4-ply line; its final
    // placement is only reachable through intermediate placements that also
    // occur earlier with the opposite side to move, so a parity-blind
    // dedup would drop it.
    let start = board_with(&[
        (PieceKind::Rook, Player::White, (0, 0)),
        (PieceKind::King, Player::Black, (3, 3)),
    ]);
    let target = board_with(&[
        (PieceKind::Rook, Player::White, (0, 2)),
        (PieceKind::King, Player::Black, (3, 1)),
    ]);

    let mut tracker = NodeTracker::new(SearchLimits::default());
    let seen = reachable_positions(&start, Player::White, 4, &mut tracker).unwrap();
    assert!(seen.contains(&target.packed()));
}

#[test]
fn exploration_respects_the_node_budget() {
    let board = Board::initial();
    let mut tracker = NodeTracker::new(SearchLimits { max_nodes: 1 });
    let err = reachable_positions(&board, Player::White, 2, &mut tracker).unwrap_err();
    assert!(matches!(err, SearchError::LimitExceeded { limit: 1, .. }));
}
