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

use core::{error, fmt};

use bitflags::bitflags;

use crate::{
    attacks,
    bitboard::Bitboard,
    board::Board,
    color::Color,
    hand::Hand,
    m::{Move, MoveList},
    role::Role,
    setup::Setup,
    square::Square,
    types::Piece,
};

/// Error when trying to play an illegal move.
#[derive(Debug)]
pub struct PlayError {
    m: Move,
    position: Position,
}

impl PlayError {
    /// The rejected move.
    pub fn m(&self) -> Move {
        self.m
    }

    /// Returns the unchanged position.
    pub fn into_inner(self) -> Position {
        self.position
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move {} in {}", self.m, Setup::from(self.position))
    }
}

impl error::Error for PlayError {}

bitflags! {
    /// Reasons for a [`Setup`] not being a legal [`Position`].
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// A color has no king on the board.
        const MISSING_KING = 1 << 0;

        /// A color has more than one king on the board.
        const TOO_MANY_KINGS = 1 << 1;

        /// A king or gold is marked as promoted.
        const INVALID_PROMOTION = 1 << 2;

        /// A color has two unpromoted pawns on one file.
        const DOUBLED_PAWNS = 1 << 3;

        /// An unpromoted pawn stands on its promotion rank and could never
        /// move again.
        const DEAD_PAWN = 1 << 4;

        /// There are more than two pieces of a kind across the board and
        /// both hands, or a king in hand.
        const TOO_MUCH_MATERIAL = 1 << 5;
    }
}

/// Error when trying to create a [`Position`] from an illegal [`Setup`].
#[derive(Debug)]
pub struct PositionError {
    setup: Setup,
    errors: PositionErrorKinds,
}

impl PositionError {
    fn ignore(self, ignore: PositionErrorKinds) -> Result<Position, PositionError> {
        if (self.errors - ignore).is_empty() {
            Ok(Position {
                board: self.setup.board,
                hand: self.setup.hand,
            })
        } else {
            Err(self)
        }
    }

    /// Get the position despite extra material, as in composed problems.
    pub fn ignore_too_much_material(self) -> Result<Position, PositionError> {
        self.ignore(PositionErrorKinds::TOO_MUCH_MATERIAL)
    }

    pub fn kinds(&self) -> PositionErrorKinds {
        self.errors
    }

    /// The rejected setup.
    pub fn into_setup(self) -> Setup {
        self.setup
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const REASONS: [(PositionErrorKinds, &str); 6] = [
            (PositionErrorKinds::MISSING_KING, "missing king"),
            (PositionErrorKinds::TOO_MANY_KINGS, "too many kings"),
            (PositionErrorKinds::INVALID_PROMOTION, "promoted king or gold"),
            (PositionErrorKinds::DOUBLED_PAWNS, "two pawns on a file"),
            (PositionErrorKinds::DEAD_PAWN, "pawn on promotion rank"),
            (PositionErrorKinds::TOO_MUCH_MATERIAL, "too much material"),
        ];

        f.write_str("illegal position: ")?;
        let mut first = true;
        for (kind, reason) in REASONS {
            if self.errors.contains(kind) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(reason)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl error::Error for PositionError {}

/// A legal minishogi position: a board and the hands of both colors.
///
/// There is no side to move. Every rule query takes the color it is asked
/// about.
///
/// # Examples
///
/// ```
/// use minishogi::{Color, Position, Square};
///
/// let pos = Position::new();
/// assert_eq!(pos.legal_moves_of(Color::First).len(), 14);
/// assert!(pos.legal_moves(Square::C3).is_empty());
/// assert!(!pos.is_check(Color::Second));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    board: Board,
    hand: Hand,
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl Position {
    /// The initial position, with empty hands.
    pub const fn new() -> Position {
        Position {
            board: Board::new(),
            hand: Hand::new(),
        }
    }

    /// Validates a [`Setup`].
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] with every problem found, if any.
    pub fn from_setup(setup: Setup) -> Result<Position, PositionError> {
        let errors = validate(&setup);
        if errors.is_empty() {
            Ok(Position {
                board: setup.board,
                hand: setup.hand,
            })
        } else {
            Err(PositionError { setup, errors })
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn hand_count(&self, color: Color, role: Role) -> u8 {
        self.hand.count(color, role)
    }

    /// Enemy pieces attacking the king of `color`.
    pub fn checkers(&self, color: Color) -> Bitboard {
        checkers(&self.board, color)
    }

    /// Tests if the king of `color` is attacked.
    pub fn is_check(&self, color: Color) -> bool {
        is_check(&self.board, color)
    }

    /// Legal destinations of the piece on `sq`.
    pub fn legal_moves(&self, sq: Square) -> Bitboard {
        legal_moves(&self.board, sq)
    }

    /// Legal drop squares for `piece`. Empty unless its color holds one
    /// in hand.
    pub fn legal_drops(&self, piece: Piece) -> Bitboard {
        if self.hand.count(piece.color, piece.role) == 0 {
            return Bitboard::EMPTY;
        }
        legal_drops(&self.board, piece)
    }

    /// Tests if no board piece of `color` has a legal move. Drops are not
    /// considered and being in check is not required.
    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(&self.board, color)
    }

    /// The winner, if a color is checkmated.
    ///
    /// `First` is tested before `Second`. If both are checkmated, the
    /// result for `Second` takes precedence and `First` wins.
    pub fn winner(&self) -> Option<Color> {
        let mut winner = None;
        if self.is_checkmate(Color::First) {
            winner = Some(Color::Second);
        }
        if self.is_checkmate(Color::Second) {
            winner = Some(Color::First);
        }
        winner
    }

    /// Generates all legal moves and drops of `color`.
    ///
    /// Board moves are listed by origin square, then destination square.
    /// Drops follow, by role in the order pawn, silver, gold, bishop, rook.
    pub fn legal_moves_of(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for from in self.board.by_color(color) {
            let Some(piece) = self.board.piece_at(from) else {
                continue;
            };
            for to in legal_moves(&self.board, from) {
                let capture = self.board.role_at(to);
                let mut push = |promotion| {
                    moves.push(Move::Normal {
                        role: piece.role,
                        from,
                        capture,
                        to,
                        promotion,
                    })
                };
                if !can_promote(piece, from, to) {
                    push(false);
                } else if piece.role == Role::Pawn {
                    push(true);
                } else {
                    push(false);
                    push(true);
                }
            }
        }

        for role in Role::HAND {
            if self.hand.count(color, role) > 0 {
                for to in legal_drops(&self.board, role.of(color)) {
                    moves.push(Move::Drop { color, role, to });
                }
            }
        }

        moves
    }

    /// Tests a move for legality.
    pub fn is_legal(&self, m: Move) -> bool {
        match m {
            Move::Normal {
                role,
                from,
                capture,
                to,
                promotion,
            } => {
                let Some(piece) = self.board.piece_at(from) else {
                    return false;
                };
                piece.role == role
                    && capture == self.board.role_at(to)
                    && legal_moves(&self.board, from).contains(to)
                    && if promotion {
                        can_promote(piece, from, to)
                    } else {
                        !must_promote(piece, from, to)
                    }
            }
            Move::Drop { color, role, to } => {
                role.is_droppable()
                    && self.hand.count(color, role) > 0
                    && legal_drops(&self.board, role.of(color)).contains(to)
            }
        }
    }

    /// Plays a move. It is the caller's responsibility to ensure the move
    /// is legal.
    ///
    /// Captured pieces go to the mover's hand, unpromoted. Capturing a
    /// king is not possible in a legal game and does not add it to a hand.
    pub fn play_unchecked(&mut self, m: Move) {
        match m {
            Move::Normal {
                from,
                to,
                promotion,
                ..
            } => {
                let Some(piece) = self.board.remove_piece_at(from) else {
                    return;
                };
                if let Some(captured) = self.board.remove_piece_at(to) {
                    if captured.role.is_droppable() {
                        self.hand.add(piece.color, captured.role);
                    }
                }
                let piece = if promotion { piece.promote() } else { piece };
                self.board.set_piece_at(to, piece);
            }
            Move::Drop { color, role, to } => {
                let taken = self.hand.take(color, role);
                debug_assert!(taken, "no {role} in hand of {color}");
                self.board.set_piece_at(to, role.of(color));
            }
        }
    }

    /// Validates and plays a move.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] with the unchanged position if the move is not
    /// legal.
    pub fn play(mut self, m: Move) -> Result<Position, PlayError> {
        if self.is_legal(m) {
            self.play_unchecked(m);
            Ok(self)
        } else {
            Err(PlayError { m, position: self })
        }
    }

    /// Sets the promotion flag of the piece on `sq`.
    pub(crate) fn set_promoted(&mut self, sq: Square, promoted: bool) {
        if let Some(piece) = self.board.piece_at(sq) {
            debug_assert!(!promoted || piece.role.is_promotable());
            self.board.set_piece_at(sq, Piece { promoted, ..piece });
        }
    }
}

impl From<Position> for Setup {
    fn from(position: Position) -> Setup {
        Setup {
            board: position.board,
            hand: position.hand,
        }
    }
}

/// Promotion is available to an unpromoted promotable piece moving from or
/// to its promotion rank.
pub(crate) fn can_promote(piece: Piece, from: Square, to: Square) -> bool {
    let zone = piece.color.promotion_rank();
    piece.role.is_promotable() && !piece.promoted && (from.rank() == zone || to.rank() == zone)
}

/// Pawns promote whenever they can.
fn must_promote(piece: Piece, from: Square, to: Square) -> bool {
    piece.role == Role::Pawn && can_promote(piece, from, to)
}

fn checkers(board: &Board, color: Color) -> Bitboard {
    let Some(king) = board.king_of(color) else {
        return Bitboard::EMPTY;
    };
    board
        .by_color(!color)
        .into_iter()
        .filter(|&sq| attacks::pseudo_legal_moves(board, sq).contains(king))
        .collect()
}

fn is_check(board: &Board, color: Color) -> bool {
    !checkers(board, color).is_empty()
}

fn legal_moves(board: &Board, from: Square) -> Bitboard {
    let Some(piece) = board.piece_at(from) else {
        return Bitboard::EMPTY;
    };

    let kings = board.by_role(Role::King);
    let mut legals = Bitboard::EMPTY;
    for to in attacks::pseudo_legal_moves(board, from) {
        if kings.contains(to) {
            continue;
        }
        let mut after = *board;
        after.remove_piece_at(from);
        after.set_piece_at(to, piece);
        if !is_check(&after, piece.color) {
            legals.add(to);
        }
    }
    legals
}

fn legal_drops(board: &Board, piece: Piece) -> Bitboard {
    if !piece.role.is_droppable() {
        return Bitboard::EMPTY;
    }
    let color = piece.color;
    let piece = piece.unpromote();

    let mut candidates = !board.occupied();
    if piece.role == Role::Pawn {
        for sq in board.by_piece(piece) {
            candidates &= !Bitboard::from_file(sq.file());
        }
        candidates &= !Bitboard::from_rank(color.promotion_rank());
    }

    let mut legals = Bitboard::EMPTY;
    for to in candidates {
        let mut after = *board;
        after.set_piece_at(to, piece);
        if is_check(&after, color) {
            continue;
        }
        if piece.role == Role::Pawn && is_checkmate(&after, !color) {
            continue;
        }
        legals.add(to);
    }
    legals
}

fn is_checkmate(board: &Board, color: Color) -> bool {
    board
        .by_color(color)
        .into_iter()
        .all(|sq| legal_moves(board, sq).is_empty())
}

fn validate(setup: &Setup) -> PositionErrorKinds {
    let board = &setup.board;
    let mut errors = PositionErrorKinds::empty();

    for color in Color::ALL {
        let kings = board.by_role(Role::King) & board.by_color(color);
        if kings.is_empty() {
            errors |= PositionErrorKinds::MISSING_KING;
        } else if kings.more_than_one() {
            errors |= PositionErrorKinds::TOO_MANY_KINGS;
        }

        let pawns = board.by_piece(color.pawn());
        if pawns.intersects(Bitboard::from_rank(color.promotion_rank())) {
            errors |= PositionErrorKinds::DEAD_PAWN;
        }
        if pawns.into_iter().any(|sq| {
            (pawns & Bitboard::from_file(sq.file())).more_than_one()
        }) {
            errors |= PositionErrorKinds::DOUBLED_PAWNS;
        }
    }

    if board
        .promoted()
        .intersects(board.by_role(Role::King) | board.by_role(Role::Gold))
    {
        errors |= PositionErrorKinds::INVALID_PROMOTION;
    }

    for role in Role::HAND {
        let in_hands = usize::from(setup.hand.count(Color::First, role))
            + usize::from(setup.hand.count(Color::Second, role));
        if board.by_role(role).count() + in_hands > 2 {
            errors |= PositionErrorKinds::TOO_MUCH_MATERIAL;
        }
    }
    if setup.hand.count(Color::First, Role::King) > 0
        || setup.hand.count(Color::Second, Role::King) > 0
    {
        errors |= PositionErrorKinds::TOO_MUCH_MATERIAL;
    }

    errors
}
