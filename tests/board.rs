use minichess::chess::action::{Action, Reject};
use minichess::chess::board::Board;
use minichess::chess::piece::{Piece, PieceKind, Player};
use minichess::core::coord::Coord;

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
fn initial_placement_is_the_documented_one() {
    let board = Board::initial();
    let expect = [
        (PieceKind::Rook, Player::White, Coord::new(0, 0)),
        (PieceKind::King, Player::White, Coord::new(0, 1)),
        (PieceKind::Bishop, Player::White, Coord::new(0, 2)),
        (PieceKind::Bishop, Player::Black, Coord::new(3, 1)),
        (PieceKind::King, Player::Black, Coord::new(3, 2)),
        (PieceKind::Rook, Player::Black, Coord::new(3, 3)),
    ];
    for (kind, player, at) in expect {
        let p = board.find_piece(kind, player).expect("piece present");
        assert_eq!(p.pos, at);
    }
    assert_eq!(board.payoff(), 0);
    assert_eq!(board.plies(), 0);
    assert_eq!(board.only_kings_plies(), 0);
}

#[test]
fn piece_at_rejects_out_of_range_coordinates() {
    let board = Board::initial();
    assert!(matches!(
        board.piece_at(Coord::new(-1, 0)),
        Err(Reject::OutOfRange { .. })
    ));
    assert!(matches!(
        board.piece_at(Coord::new(0, 4)),
        Err(Reject::OutOfRange { .. })
    ));
}

#[test]
fn payoff_is_antisymmetric_under_color_swap() {
    let board = board_with(&[
        (PieceKind::Rook, Player::White, (0, 0)),
        (PieceKind::King, Player::White, (1, 2)),
        (PieceKind::King, Player::Black, (2, 0)),
        (PieceKind::Bishop, Player::Black, (3, 3)),
    ]);
    let swapped = board_with(&[
        (PieceKind::Rook, Player::Black, (0, 0)),
        (PieceKind::King, Player::Black, (1, 2)),
        (PieceKind::King, Player::White, (2, 0)),
        (PieceKind::Bishop, Player::White, (3, 3)),
    ]);
    assert_eq!(board.payoff(), 2);
    assert_eq!(swapped.payoff(), -board.payoff());
}

#[test]
fn capture_removes_the_victim_from_payoff_and_lookup() {
    let mut board = board_with(&[
        (PieceKind::King, Player::White, (0, 1)),
        (PieceKind::Rook, Player::Black, (3, 1)),
        (PieceKind::King, Player::Black, (3, 2)),
    ]);

    // Black rook takes the white king.
    let rook = *board.find_piece(PieceKind::Rook, Player::Black).unwrap();
    let act = Action::new(rook, Coord::new(0, 1), &board);
    assert!(act.is_valid());
    board.apply(&act).unwrap();

    assert!(board.find_piece(PieceKind::King, Player::White).is_none());
    assert_eq!(board.payoff(), -(10_000 + 5));
    let occupant = board.piece_at(Coord::new(0, 1)).unwrap().unwrap();
    assert_eq!(occupant.player, Player::Black);
    assert_eq!(occupant.kind, PieceKind::Rook);
    assert_eq!(occupant.pos, Coord::new(0, 1));
}

#[test]
fn deep_copies_are_fully_independent() {
    let original = Board::initial();
    let mut branch = original.clone();

    let rook = *branch.find_piece(PieceKind::Rook, Player::White).unwrap();
    let act = Action::new(rook, Coord::new(2, 0), &branch);
    branch.apply(&act).unwrap();

    assert_eq!(branch.plies(), 1);
    assert_eq!(original.plies(), 0);
    assert_eq!(
        original
            .find_piece(PieceKind::Rook, Player::White)
            .unwrap()
            .pos,
        Coord::new(0, 0)
    );
    assert_eq!(original.piece_at(Coord::new(2, 0)).unwrap(), None);
    assert_ne!(branch.packed(), original.packed());
}

#[test]
fn only_kings_counter_advances_once_only_kings_remain() {
    let mut board = board_with(&[
        (PieceKind::King, Player::White, (0, 0)),
        (PieceKind::King, Player::Black, (3, 3)),
    ]);

    let moves = [
        (Player::White, Coord::new(0, 1)),
        (Player::Black, Coord::new(3, 2)),
        (Player::White, Coord::new(0, 0)),
    ];
    for (i, (player, dest)) in moves.into_iter().enumerate() {
        assert_eq!(board.status(None, 3), None, "continues before move {i}");
        let king = *board.find_piece(PieceKind::King, player).unwrap();
        board.apply(&Action::new(king, dest, &board)).unwrap();
        assert_eq!(board.only_kings_plies(), i as u32 + 1);
    }

    // Third only-kings move hits the cutoff: a tie.
    assert_eq!(board.status(None, 3), Some(0));
}

#[test]
fn mixed_material_does_not_advance_the_only_kings_counter() {
    let mut board = Board::initial();
    let rook = *board.find_piece(PieceKind::Rook, Player::White).unwrap();
    board
        .apply(&Action::new(rook, Coord::new(0, 3), &board))
        .unwrap();
    assert_eq!(board.plies(), 1);
    assert_eq!(board.only_kings_plies(), 0);
}

#[test]
fn status_reports_payoff_once_a_king_is_gone() {
    let board = board_with(&[
        (PieceKind::King, Player::White, (0, 0)),
        (PieceKind::Rook, Player::White, (2, 2)),
    ]);
    // Black king missing: terminal regardless of horizon.
    assert_eq!(board.status(None, 3), Some(10_000 + 5));
    assert_eq!(board.status(Some(100), 3), Some(10_000 + 5));
}

#[test]
fn packed_distinguishes_placements() {
    let a = Board::initial();
    let b = Board::empty(4);
    let mut c = Board::initial();
    let rook = *c.find_piece(PieceKind::Rook, Player::White).unwrap();
    c.apply(&Action::new(rook, Coord::new(1, 0), &c)).unwrap();

    assert_ne!(a.packed(), b.packed());
    assert_ne!(a.packed(), c.packed());
    assert_eq!(a.packed(), Board::initial().packed());
}

#[test]
fn place_rejects_occupied_and_out_of_range_cells() {
    let mut board = Board::initial();
    let dup = Piece::new(PieceKind::Rook, Player::Black, Coord::new(0, 0));
    assert!(matches!(board.place(dup), Err(Reject::Occupied { .. })));

    let off = Piece::new(PieceKind::Rook, Player::Black, Coord::new(4, 0));
    assert!(matches!(board.place(off), Err(Reject::OutOfRange { .. })));
}

#[test]
fn place_rejects_a_second_piece_of_the_same_kind_and_player() {
    let mut board = Board::initial();

    // A second white rook on a free cell would be invisible to find_piece
    // while still showing up in the rendering; the board refuses it.
    let second = Piece::new(PieceKind::Rook, Player::White, Coord::new(2, 2));
    assert_eq!(
        board.place(second),
        Err(Reject::DuplicatePiece {
            kind: PieceKind::Rook,
            player: Player::White
        })
    );
    assert_eq!(board.piece_at(Coord::new(2, 2)).unwrap(), None);
}
