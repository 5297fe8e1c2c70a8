// This file is part of the minishogi library.
// Copyright (C) 2024 The minishogi authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Movesets and pseudo-legal move generation.
//!
//! Every piece moves by a list of single steps and a list of sliding
//! directions, looked up by color, role and promotion state.
//!
//! # Example
//!
//! ```
//! use minishogi::{attacks, Bitboard, Color, Square};
//!
//! let occupied = Bitboard::from_square(Square::C2); // blocking piece
//! let attacks = attacks::attacks(Square::C4, Color::First.rook(), occupied);
//! // . . . . .
//! // . . 1 . .
//! // . . 1 . .
//! // 1 1 . 1 1
//! // . . 1 . .
//!
//! assert!(attacks.contains(Square::C2));
//! assert!(!attacks.contains(Square::C1));
//! ```

use crate::{bitboard::Bitboard, board::Board, color::ByColor, square::Square, types::Piece};

/// A (file, rank) step. Rank deltas are negative toward rank 1.
pub type Delta = (i8, i8);

const KING_DELTAS: [Delta; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
const ORTHOGONAL_DELTAS: [Delta; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL_DELTAS: [Delta; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// As seen by First, for whom forward is toward rank 1.
const GOLD_DELTAS: [Delta; 6] = [(1, 0), (1, -1), (0, 1), (-1, -1), (-1, 0), (0, -1)];
const SILVER_DELTAS: [Delta; 5] = [(1, 1), (0, -1), (-1, 1), (-1, -1), (1, -1)];
const PAWN_DELTAS: [Delta; 1] = [(0, -1)];

const SECOND_GOLD_DELTAS: [Delta; 6] = mirror(GOLD_DELTAS);
const SECOND_SILVER_DELTAS: [Delta; 5] = mirror(SILVER_DELTAS);
const SECOND_PAWN_DELTAS: [Delta; 1] = mirror(PAWN_DELTAS);

const fn mirror<const N: usize>(deltas: [Delta; N]) -> [Delta; N] {
    let mut result = deltas;
    let mut i = 0;
    while i < N {
        result[i].1 = -deltas[i].1;
        i += 1;
    }
    result
}

/// Single steps and sliding directions of a piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Moveset {
    pub steps: &'static [Delta],
    pub slides: &'static [Delta],
}

impl Moveset {
    const fn stepper(steps: &'static [Delta]) -> Moveset {
        Moveset { steps, slides: &[] }
    }
}

const fn movesets(
    pawn: &'static [Delta],
    silver: &'static [Delta],
    gold: &'static [Delta],
) -> [Moveset; 12] {
    [
        // Pawn, promoted pawn
        Moveset::stepper(pawn),
        Moveset::stepper(gold),
        // Silver, promoted silver
        Moveset::stepper(silver),
        Moveset::stepper(gold),
        // Gold never promotes
        Moveset::stepper(gold),
        Moveset::stepper(gold),
        // Bishop, horse
        Moveset {
            steps: &[],
            slides: &DIAGONAL_DELTAS,
        },
        Moveset {
            steps: &ORTHOGONAL_DELTAS,
            slides: &DIAGONAL_DELTAS,
        },
        // Rook, dragon
        Moveset {
            steps: &[],
            slides: &ORTHOGONAL_DELTAS,
        },
        Moveset {
            steps: &DIAGONAL_DELTAS,
            slides: &ORTHOGONAL_DELTAS,
        },
        // King never promotes
        Moveset::stepper(&KING_DELTAS),
        Moveset::stepper(&KING_DELTAS),
    ]
}

static MOVESETS: ByColor<[Moveset; 12]> = ByColor {
    first: movesets(&PAWN_DELTAS, &SILVER_DELTAS, &GOLD_DELTAS),
    second: movesets(&SECOND_PAWN_DELTAS, &SECOND_SILVER_DELTAS, &SECOND_GOLD_DELTAS),
};

/// Looks up the moveset of a piece.
///
/// # Examples
///
/// ```
/// use minishogi::{attacks, Color};
///
/// assert_eq!(attacks::moveset(Color::First.silver()).steps.len(), 5);
/// assert_eq!(attacks::moveset(Color::First.silver().promote()).steps.len(), 6);
/// assert_eq!(attacks::moveset(Color::Second.rook()).slides.len(), 4);
/// ```
#[inline]
pub fn moveset(piece: Piece) -> &'static Moveset {
    let index = (usize::from(piece.role) - 1) * 2 + usize::from(piece.promoted);
    &MOVESETS.get(piece.color)[index]
}

/// Squares attacked by `piece` standing on `sq`, given the occupied
/// squares.
///
/// Slides stop at the first occupied square, which is included. Friendly
/// pieces are not excluded.
pub fn attacks(sq: Square, piece: Piece, occupied: Bitboard) -> Bitboard {
    let moveset = moveset(piece);
    let mut attacks = Bitboard::EMPTY;

    for &(file_delta, rank_delta) in moveset.steps {
        if let Some(to) = sq.offset(file_delta.into(), rank_delta.into()) {
            attacks.add(to);
        }
    }

    for &(file_delta, rank_delta) in moveset.slides {
        let mut previous = sq;
        while let Some(to) = previous.offset(file_delta.into(), rank_delta.into()) {
            attacks.add(to);
            if occupied.contains(to) {
                break;
            }
            previous = to;
        }
    }

    attacks
}

/// Pseudo-legal destinations of the piece on `sq`: empty or
/// enemy-occupied squares it can reach, ignoring king safety. Empty for
/// an empty square.
pub fn pseudo_legal_moves(board: &Board, sq: Square) -> Bitboard {
    board.piece_at(sq).map_or(Bitboard::EMPTY, |piece| {
        attacks(sq, piece, board.occupied()) & !board.by_color(piece.color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, role::Role};

    fn has_step(role: Role, promoted: bool, delta: Delta) -> bool {
        let piece = Piece {
            color: Color::First,
            role,
            promoted,
        };
        moveset(piece).steps.contains(&delta)
    }

    #[test]
    fn test_second_mirrors_first() {
        for role in Role::ALL {
            for promoted in [false, true] {
                let first = moveset(Piece {
                    color: Color::First,
                    role,
                    promoted,
                });
                let second = moveset(Piece {
                    color: Color::Second,
                    role,
                    promoted,
                });
                assert_eq!(first.steps.len(), second.steps.len());
                for &(df, dr) in first.steps {
                    assert!(second.steps.contains(&(df, -dr)));
                }
                assert_eq!(first.slides.len(), second.slides.len());
            }
        }
    }

    #[test]
    fn test_step_sets() {
        // Silver moves back diagonally but not straight back.
        assert!(has_step(Role::Silver, false, (1, 1)));
        assert!(!has_step(Role::Silver, false, (0, 1)));
        // Gold moves straight back but not back diagonally.
        assert!(has_step(Role::Gold, false, (0, 1)));
        assert!(!has_step(Role::Gold, false, (1, 1)));
        // Promoted silver and pawn move as gold.
        assert!(has_step(Role::Silver, true, (0, 1)));
        assert!(has_step(Role::Pawn, true, (-1, 0)));
        assert_eq!(moveset(Color::First.pawn()).steps, &[(0, -1)]);
        assert_eq!(moveset(Color::Second.pawn()).steps, &[(0, 1)]);
    }

    #[test]
    fn test_king_in_corner() {
        let attacks = attacks(Square::A5, Color::First.king(), Bitboard::EMPTY);
        assert_eq!(attacks.count(), 3);
        assert!(attacks.contains(Square::A4));
        assert!(attacks.contains(Square::B4));
        assert!(attacks.contains(Square::B5));
    }

    #[test]
    fn test_dragon_and_horse() {
        let dragon = attacks(Square::C3, Color::First.rook().promote(), Bitboard::EMPTY);
        // 8 orthogonal slides and 4 diagonal steps.
        assert_eq!(dragon.count(), 12);
        let horse = attacks(Square::C3, Color::Second.bishop().promote(), Bitboard::EMPTY);
        // 8 diagonal slides and 4 orthogonal steps.
        assert_eq!(horse.count(), 12);
    }

    #[test]
    fn test_slide_blocked() {
        let occupied = Bitboard::from_square(Square::C4);
        let attacks = attacks(Square::C5, Color::First.rook(), occupied);
        assert!(attacks.contains(Square::C4));
        assert!(!attacks.contains(Square::C3));
        assert!(attacks.contains(Square::A5));
        assert!(attacks.contains(Square::E5));
        assert_eq!(attacks.count(), 5);
    }
}
