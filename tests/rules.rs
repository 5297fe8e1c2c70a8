use minishogi::{
    Bitboard, Color, ParseSetupError, Position, PositionErrorKinds, Rank, Role, Setup, Square,
};

fn pos(notation: &str) -> Position {
    let setup: Setup = notation.parse().expect("valid notation");
    Position::from_setup(setup).expect("legal position")
}

fn squares(squares: &[Square]) -> Bitboard {
    squares.iter().copied().collect()
}

#[test]
fn test_rook_stops_at_first_piece() {
    let pos = pos("k4/5/R1p2/5/4K");
    assert_eq!(
        pos.legal_moves(Square::A3),
        squares(&[Square::A2, Square::A4, Square::A5, Square::B3, Square::C3])
    );
}

#[test]
fn test_horse() {
    let pos = pos("k4/5/2+B2/5/4K");
    assert_eq!(
        pos.legal_moves(Square::C3),
        squares(&[
            Square::A5,
            Square::B2,
            Square::B3,
            Square::B4,
            Square::C2,
            Square::C4,
            Square::D2,
            Square::D3,
            Square::D4,
            Square::E1,
        ])
    );
}

#[test]
fn test_king_is_never_a_destination() {
    let pos = pos("k4/1b3/5/5/4K");
    assert_eq!(
        pos.legal_moves(Square::B2),
        squares(&[Square::A3, Square::C1, Square::C3, Square::D4])
    );
}

#[test]
fn test_king_avoids_attacked_squares() {
    let pos = pos("k4/5/5/4r/4K");
    assert!(pos.is_check(Color::First));
    assert_eq!(pos.checkers(Color::First), squares(&[Square::E4]));
    // d4 stays covered by the rook.
    assert_eq!(
        pos.legal_moves(Square::E5),
        squares(&[Square::D5, Square::E4])
    );
}

#[test]
fn test_gold_drops_anywhere_empty() {
    let pos = pos("k4/5/5/5/4K G");
    let drops = pos.legal_drops(Color::First.gold());
    assert_eq!(drops, !pos.board().occupied());
    assert!(drops.contains(Square::B1));
}

#[test]
fn test_pawn_drops_for_second() {
    let pos = pos("4k/5/5/5/K4 p");
    let drops = pos.legal_drops(Color::Second.pawn());
    assert!(!drops.intersects(Bitboard::from_rank(Rank::Fifth)));
    assert_eq!(drops.count(), 19);
    assert!(pos.legal_drops(Color::First.pawn()).is_empty());
}

#[test]
fn test_no_drops_without_hand() {
    let pos = Position::new();
    for role in Role::HAND {
        assert!(pos.legal_drops(role.of(Color::First)).is_empty());
    }
}

#[test]
fn test_invalid_notation() {
    for (notation, err) in [
        ("", ParseSetupError::InvalidBoard),
        ("k4/5/5/5", ParseSetupError::InvalidBoard),
        ("k4/5/5/5/4K/5", ParseSetupError::InvalidBoard),
        ("k5/5/5/5/4K", ParseSetupError::InvalidBoard),
        ("k3/5/5/5/4K", ParseSetupError::InvalidBoard),
        ("k4/5/5/5/4X", ParseSetupError::InvalidBoard),
        ("k4/5/+5/5/4K", ParseSetupError::InvalidBoard),
        ("k4/5/5/5/4K 0P", ParseSetupError::InvalidHand),
        ("k4/5/5/5/4K K", ParseSetupError::InvalidHand),
        ("k4/5/5/5/4K 2", ParseSetupError::InvalidHand),
        ("k4/5/5/5/4K - -", ParseSetupError::InvalidSetup),
    ] {
        assert_eq!(notation.parse::<Setup>(), Err(err), "{notation}");
    }
}

#[test]
fn test_illegal_positions() {
    for (notation, kinds) in [
        ("5/5/5/5/4K", PositionErrorKinds::MISSING_KING),
        ("kk3/5/5/5/4K", PositionErrorKinds::TOO_MANY_KINGS),
        ("k4/5/2+G2/5/4K", PositionErrorKinds::INVALID_PROMOTION),
        ("k4/2P2/5/2P2/4K", PositionErrorKinds::DOUBLED_PAWNS),
        ("k1P2/5/5/5/4K", PositionErrorKinds::DEAD_PAWN),
        ("k4/5/5/5/4K 3S", PositionErrorKinds::TOO_MUCH_MATERIAL),
    ] {
        let setup: Setup = notation.parse().expect("valid notation");
        let err = Position::from_setup(setup).expect_err("illegal position");
        assert!(err.kinds().contains(kinds), "{notation}: {err}");
    }
}
