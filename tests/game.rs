use minishogi::{
    Color, Game, GameError, GameStatus, HandSlot, Position, PromotionState, Role, Setup, Square,
    Target,
};

fn game(notation: &str) -> Game {
    let setup: Setup = notation.parse().expect("valid notation");
    Game::from_position(Position::from_setup(setup).expect("legal position"))
}

#[test]
fn test_initial_state() {
    let game = Game::new();
    let board = game.position().board();
    for color in Color::ALL {
        assert_eq!(board.by_color(color).count(), 6);
        for role in Role::HAND {
            assert_eq!(game.hand_count(color, role), 0);
        }
    }
    assert!(board.promoted().is_empty());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.selection(), None);
    assert_eq!(game.promotion_pending(), None);
}

#[test]
fn test_selection_is_idempotent() {
    let mut game = Game::new();
    let target = Target::BoardSquare(Square::B5);
    game.select(target);
    game.select(target);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_move_clears_selection() {
    let mut game = Game::new();
    game.select(Target::BoardSquare(Square::E5));
    let m = game.apply_move(Square::E5, Square::E2).expect("legal");
    assert_eq!(m.capture(), Some(Role::Pawn));
    assert_eq!(game.selection(), None);
    assert_eq!(game.hand_count(Color::First, Role::Pawn), 1);
    assert!(game.position().is_check(Color::Second));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_illegal_move_leaves_state_unchanged() {
    let mut game = Game::new();
    game.select(Target::BoardSquare(Square::A4));
    let before = game.clone();

    assert_eq!(
        game.apply_move(Square::A4, Square::A2),
        Err(GameError::IllegalMove)
    );
    assert_eq!(
        game.apply_move(Square::C3, Square::C2),
        Err(GameError::IllegalMove)
    );
    // Blocked by a friendly piece.
    assert_eq!(
        game.apply_move(Square::E5, Square::D5),
        Err(GameError::IllegalMove)
    );
    assert_eq!(game, before);
}

#[test]
fn test_pawn_promotes_without_prompt() {
    let mut game = game("k4/2P2/5/5/4K");
    let m = game.apply_move(Square::C2, Square::C1).expect("legal");
    assert!(m.is_promotion());
    assert_eq!(game.promotion_state(), PromotionState::Idle);
    assert_eq!(game.piece_at(Square::C1), Some(Color::First.pawn().promote()));
}

#[test]
fn test_silver_into_zone_awaits_choice() {
    let mut game = game("k4/4S/5/5/4K");
    game.apply_move(Square::E2, Square::E1).expect("legal");
    assert_eq!(
        game.promotion_state(),
        PromotionState::AwaitingChoice(Square::E1)
    );

    let before = game.clone();
    assert_eq!(
        game.apply_move(Square::E5, Square::D5),
        Err(GameError::PromotionPending)
    );
    assert_eq!(game, before);

    game.resolve_promotion(false).expect("pending");
    assert_eq!(game.piece_at(Square::E1), Some(Color::First.silver()));
    assert_eq!(game.resolve_promotion(true), Err(GameError::InvalidState));
}

#[test]
fn test_silver_out_of_zone_awaits_choice() {
    // Moving out of the promotion rank also offers promotion.
    let mut game = game("k2S1/5/5/5/4K");
    game.apply_move(Square::D1, Square::C2).expect("legal");
    assert_eq!(game.promotion_pending(), Some(Square::C2));
    game.resolve_promotion(true).expect("pending");
    assert_eq!(
        game.piece_at(Square::C2),
        Some(Color::First.silver().promote())
    );
}

#[test]
fn test_second_promotes_on_rank_five() {
    let mut game = game("k4/5/5/4p/K4");
    game.apply_move(Square::E4, Square::E5).expect("legal");
    assert_eq!(
        game.piece_at(Square::E5),
        Some(Color::Second.pawn().promote())
    );
}

#[test]
fn test_checkmate_ends_game() {
    let mut game = game("k4/5/1GS2/5/4K");
    assert_eq!(game.status(), GameStatus::InProgress);

    game.apply_move(Square::B3, Square::B2).expect("legal");
    assert_eq!(
        game.status(),
        GameStatus::Over {
            winner: Color::First
        }
    );

    let before = game.clone();
    assert_eq!(
        game.apply_move(Square::E5, Square::E4),
        Err(GameError::GameOver)
    );
    let slot = HandSlot::new(Color::First, Role::Pawn).expect("droppable");
    assert_eq!(game.apply_drop(slot, Square::C4), Err(GameError::GameOver));
    assert_eq!(game, before);

    // Selection still works.
    game.select(Target::BoardSquare(Square::E5));
    assert_eq!(game.selection(), Some(Target::BoardSquare(Square::E5)));
}

#[test]
fn test_drop_checkmate_ends_game() {
    let mut game = game("k3g/2G2/1S3/5/4K S");
    let slot = HandSlot::new(Color::First, Role::Silver).expect("droppable");
    game.apply_drop(slot, Square::A2).expect("legal");
    assert_eq!(
        game.status(),
        GameStatus::Over {
            winner: Color::First
        }
    );
    assert_eq!(game.hand_count(Color::First, Role::Silver), 0);
}

#[test]
fn test_promotion_decides_checkmate() {
    // Only a promoted silver on c1 covers b1.
    let mut game = game("k4/3S1/1G3/5/4K");
    game.apply_move(Square::D2, Square::C1).expect("legal");
    assert_eq!(game.status(), GameStatus::InProgress);

    let mut declined = game.clone();
    declined.resolve_promotion(false).expect("pending");
    assert_eq!(declined.status(), GameStatus::InProgress);

    game.resolve_promotion(true).expect("pending");
    assert_eq!(
        game.status(),
        GameStatus::Over {
            winner: Color::First
        }
    );
}

#[test]
fn test_double_checkmate_favours_first() {
    let game = game("k4/K4/1B3/rg3/1B3");
    assert!(game.position().is_checkmate(Color::First));
    assert!(game.position().is_checkmate(Color::Second));
    assert_eq!(game.status().winner(), Some(Color::First));
}

#[test]
fn test_drop() {
    let mut game = game("k4/5/5/5/4K P");
    let slot = HandSlot::new(Color::First, Role::Pawn).expect("droppable");
    game.select(Target::HandSlot(slot));

    let m = game.apply_drop(slot, Square::C3).expect("legal");
    assert!(m.is_drop());
    assert_eq!(game.piece_at(Square::C3), Some(Color::First.pawn()));
    assert_eq!(game.hand_count(Color::First, Role::Pawn), 0);
    assert_eq!(game.selection(), None);

    let before = game.clone();
    assert_eq!(game.apply_drop(slot, Square::D3), Err(GameError::IllegalDrop));
    assert_eq!(game, before);
}

#[test]
fn test_illegal_drops() {
    let mut game = game("k4/5/5/2P2/4K P");
    let before = game.clone();
    let slot = HandSlot::new(Color::First, Role::Pawn).expect("droppable");

    // Same file as an unpromoted pawn.
    assert_eq!(game.apply_drop(slot, Square::C2), Err(GameError::IllegalDrop));
    // Promotion rank.
    assert_eq!(game.apply_drop(slot, Square::B1), Err(GameError::IllegalDrop));
    // Occupied.
    assert_eq!(game.apply_drop(slot, Square::E5), Err(GameError::IllegalDrop));
    assert_eq!(game, before);
}

#[test]
fn test_new_game() {
    let mut game = game("k4/5/1GS2/5/4K P");
    game.apply_move(Square::B3, Square::B2).expect("legal");
    game.new_game();
    assert_eq!(game, Game::new());
}

#[test]
fn test_invalid_coordinate() {
    let mut game = Game::new();
    let err = game.select_coords(0, 7).expect_err("off board");
    assert!(matches!(err, GameError::InvalidCoordinate(_)));
    assert_eq!(
        err.to_string(),
        Square::try_from_coords(0, 7)
            .expect_err("off board")
            .to_string()
    );
}
