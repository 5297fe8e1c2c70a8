#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use minishogi::{Color, Move, Position, Setup};

#[derive(Debug, Arbitrary)]
struct Data {
    candidate: Move,
    color: Color,
    notation: Vec<u8>,
}

fuzz_target!(|data: Data| {
    let Ok(setup) = Setup::from_ascii(&data.notation) else {
        return;
    };
    let Ok(pos) = Position::from_setup(setup) else {
        return;
    };

    let legals = pos.legal_moves_of(data.color);
    let mover = match data.candidate {
        Move::Normal { from, .. } => pos.board().color_at(from),
        Move::Drop { color, .. } => Some(color),
    };
    assert_eq!(
        legals.contains(&data.candidate),
        mover == Some(data.color) && pos.is_legal(data.candidate)
    );
    assert!(legals.iter().all(|&m| pos.is_legal(m)));
    for m in legals {
        let mut after = pos;
        after.play_unchecked(m);
        assert!(!after.is_check(data.color));
    }
});
