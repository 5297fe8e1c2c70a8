use iai::black_box;
use minishogi::{perft, Color, Game, Move, Position, Role, Setup, Square};

const BUSY: &str = "4k/2p2/4P/K2R1/5 RBGbg2s";

fn busy_position() -> Position {
    BUSY.parse::<Setup>()
        .map(Position::from_setup)
        .expect("valid notation")
        .expect("legal position")
}

fn bench_shallow_perft() {
    let pos = Position::new();
    assert_eq!(black_box(perft(black_box(&pos), Color::First, 4)), 35_401);
}

fn bench_deep_perft() {
    let pos = Position::new();
    assert_eq!(perft(black_box(&pos), Color::First, 5), 533_203);
}

fn bench_generate_moves() {
    let pos = busy_position();
    assert_eq!(black_box(&pos).legal_moves_of(Color::First).len(), 74);
}

fn bench_play_unchecked() -> Position {
    let m = Move::Normal {
        role: Role::Rook,
        from: Square::D4,
        capture: None,
        to: Square::D3,
        promotion: false,
    };

    let mut pos = black_box(busy_position());
    pos.play_unchecked(m);
    pos
}

fn bench_parse_setup() -> Setup {
    black_box(BUSY).parse().expect("valid notation")
}

fn bench_game_move() -> Game {
    let mut game = black_box(Game::new());
    game.apply_move(Square::E5, Square::E2).expect("legal move");
    game
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_generate_moves,
    bench_play_unchecked,
    bench_parse_setup,
    bench_game_move,
);
