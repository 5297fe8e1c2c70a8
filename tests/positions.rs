use minishogi::{Bitboard, Color, Position, Setup, Square};
use serde::Deserialize;
use serde_with::{
    formats::SpaceSeparator, serde_as, DisplayFromStr, NoneAsEmptyString, StringWithSeparator,
};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    #[serde_as(as = "DisplayFromStr")]
    setup: Setup,
    first_moves: usize,
    second_moves: usize,
    first_check: bool,
    second_check: bool,
    #[serde_as(as = "NoneAsEmptyString")]
    winner: Option<Color>,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Square>")]
    first_pawn_drops: Vec<Square>,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Square>")]
    second_pawn_drops: Vec<Square>,
}

#[test]
fn test_reference_positions() {
    let mut reader = csv::Reader::from_path("tests/positions.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");
        let line = i + 2;

        let pos = Position::from_setup(record.setup).expect("legal position");

        assert_eq!(
            pos.legal_moves_of(Color::First).len(),
            record.first_moves,
            "line {line}"
        );
        assert_eq!(
            pos.legal_moves_of(Color::Second).len(),
            record.second_moves,
            "line {line}"
        );
        assert_eq!(pos.is_check(Color::First), record.first_check, "line {line}");
        assert_eq!(pos.is_check(Color::Second), record.second_check, "line {line}");
        assert_eq!(pos.winner(), record.winner, "line {line}");
        assert_eq!(
            pos.legal_drops(Color::First.pawn()),
            record.first_pawn_drops.into_iter().collect::<Bitboard>(),
            "line {line}"
        );
        assert_eq!(
            pos.legal_drops(Color::Second.pawn()),
            record.second_pawn_drops.into_iter().collect::<Bitboard>(),
            "line {line}"
        );
    }
}

#[test]
fn test_notation_roundtrip() {
    let mut reader = csv::Reader::from_path("tests/positions.csv").expect("reader");

    for record in reader.records() {
        let record = record.expect("record");
        let text = record.get(0).expect("setup field");
        let setup: Setup = text.parse().expect("valid notation");
        assert_eq!(setup.to_string(), text);
    }
}

#[test]
fn test_legal_moves_agree_with_move_list() {
    let mut reader = csv::Reader::from_path("tests/positions.csv").expect("reader");

    for record in reader.deserialize() {
        let record: Record = record.expect("record");
        let pos = Position::from_setup(record.setup).expect("legal position");

        for color in Color::ALL {
            let moves = pos.legal_moves_of(color);
            assert!(moves.iter().all(|&m| pos.is_legal(m)));

            for from in pos.board().by_color(color) {
                let targets: Bitboard = moves
                    .iter()
                    .filter(|m| m.from() == Some(from))
                    .map(|m| m.to())
                    .collect();
                assert_eq!(targets, pos.legal_moves(from), "{} {from}", record.setup);
            }

            for &m in &moves {
                let mut after = pos;
                after.play_unchecked(m);
                assert!(!after.is_check(color), "{} leaves king in check", m);
            }
        }
    }
}
