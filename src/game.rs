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

//! A game session: selection, promotion prompts and game over detection
//! on top of a [`Position`].
//!
//! # Examples
//!
//! ```
//! use minishogi::{Color, Game, GameStatus, Square, Target};
//!
//! let mut game = Game::new();
//! game.select(Target::BoardSquare(Square::A4));
//! assert_eq!(game.selection(), Some(Target::BoardSquare(Square::A4)));
//!
//! game.apply_move(Square::A4, Square::A3)?;
//! assert_eq!(game.selection(), None);
//! assert_eq!(game.piece_at(Square::A3), Some(Color::First.pawn()));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<_, minishogi::GameError>(())
//! ```

use core::{error, fmt};

use log::{debug, info, trace};

use crate::{
    bitboard::Bitboard,
    color::Color,
    m::Move,
    position::{self, Position},
    role::Role,
    square::{InvalidCoordinate, Square},
    types::Piece,
};

/// A kind of piece in the hand of a color. Kings never are.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct HandSlot {
    color: Color,
    role: Role,
}

impl HandSlot {
    /// Returns `None` for kings.
    pub const fn new(color: Color, role: Role) -> Option<HandSlot> {
        if role.is_droppable() {
            Some(HandSlot { color, role })
        } else {
            None
        }
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn role(self) -> Role {
        self.role
    }

    /// The unpromoted piece a drop from this slot places.
    pub const fn piece(self) -> Piece {
        self.role.of(self.color)
    }
}

/// Something the player can select.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Target {
    BoardSquare(Square),
    HandSlot(HandSlot),
}

/// Whether the game waits for a promotion decision.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PromotionState {
    #[default]
    Idle,
    /// The piece that just moved to this square may promote.
    AwaitingChoice(Square),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GameStatus {
    InProgress,
    Over { winner: Color },
}

impl GameStatus {
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over { winner } => Some(winner),
        }
    }

    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }
}

/// Error when a [`Game`] command is rejected. The game is left unchanged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameError {
    InvalidCoordinate(InvalidCoordinate),
    IllegalMove,
    IllegalDrop,
    /// No promotion decision is pending.
    InvalidState,
    PromotionPending,
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate(err) => fmt::Display::fmt(err, f),
            GameError::IllegalMove => f.write_str("illegal move"),
            GameError::IllegalDrop => f.write_str("illegal drop"),
            GameError::InvalidState => f.write_str("no promotion decision pending"),
            GameError::PromotionPending => f.write_str("promotion decision pending"),
            GameError::GameOver => f.write_str("game is over"),
        }
    }
}

impl error::Error for GameError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GameError::InvalidCoordinate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidCoordinate> for GameError {
    fn from(err: InvalidCoordinate) -> GameError {
        GameError::InvalidCoordinate(err)
    }
}

/// A game session.
///
/// Commands mutate the session and either succeed or leave it unchanged.
/// There is no turn order: any color may move at any time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    position: Position,
    selection: Option<Target>,
    promotion: PromotionState,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// Starts from the initial position.
    pub fn new() -> Game {
        Game::from_position(Position::new())
    }

    /// Starts from any legal position. The game may be over immediately.
    pub fn from_position(position: Position) -> Game {
        let mut game = Game {
            position,
            selection: None,
            promotion: PromotionState::Idle,
            status: GameStatus::InProgress,
        };
        game.update_status();
        game
    }

    /// Discards the session and starts from the initial position.
    pub fn new_game(&mut self) {
        debug!("new game");
        *self = Game::new();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    pub fn legal_moves(&self, sq: Square) -> Bitboard {
        self.position.legal_moves(sq)
    }

    /// Empty unless the color of `piece` holds one in hand.
    pub fn legal_drops(&self, piece: Piece) -> Bitboard {
        self.position.legal_drops(piece)
    }

    pub fn hand_count(&self, color: Color, role: Role) -> u8 {
        self.position.hand_count(color, role)
    }

    pub fn selection(&self) -> Option<Target> {
        self.selection
    }

    /// The square of the piece awaiting a promotion decision, if any.
    pub fn promotion_pending(&self) -> Option<Square> {
        match self.promotion {
            PromotionState::Idle => None,
            PromotionState::AwaitingChoice(sq) => Some(sq),
        }
    }

    pub fn promotion_state(&self) -> PromotionState {
        self.promotion
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Selects `target`, or clears the selection if it is already
    /// selected. Accepted at any time.
    pub fn select(&mut self, target: Target) {
        self.selection = if self.selection == Some(target) {
            None
        } else {
            Some(target)
        };
        trace!("selection: {:?}", self.selection);
    }

    /// Selects a board square given by raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if the coordinates are off
    /// the board.
    pub fn select_coords(&mut self, file: u32, rank: u32) -> Result<(), GameError> {
        let sq = Square::try_from_coords(file, rank)?;
        self.select(Target::BoardSquare(sq));
        Ok(())
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        if self.selection.take().is_some() {
            trace!("selection cleared");
        }
    }

    fn ensure_accepting_moves(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            Err(GameError::GameOver)
        } else if self.promotion != PromotionState::Idle {
            Err(GameError::PromotionPending)
        } else {
            Ok(())
        }
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// Pawns reaching their promotion rank promote at once. Other pieces
    /// moving from or to their promotion rank leave a promotion decision
    /// pending, which [`Game::resolve_promotion()`] settles. The returned
    /// move then has `promotion: false`.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`], [`GameError::PromotionPending`], or
    /// [`GameError::IllegalMove`] if `to` is not a legal destination.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        self.ensure_accepting_moves()?;

        let piece = self.position.piece_at(from).ok_or(GameError::IllegalMove)?;
        if !self.position.legal_moves(from).contains(to) {
            return Err(GameError::IllegalMove);
        }

        let promotable = position::can_promote(piece, from, to);
        let m = Move::Normal {
            role: piece.role,
            from,
            capture: self.position.board().role_at(to),
            to,
            promotion: promotable && piece.role == Role::Pawn,
        };
        self.position.play_unchecked(m);
        self.selection = None;
        debug!("{} plays {}", piece.color, m);

        if promotable && piece.role != Role::Pawn {
            self.promotion = PromotionState::AwaitingChoice(to);
            debug!("promotion decision pending on {}", to);
        } else {
            self.update_status();
        }

        Ok(m)
    }

    /// Drops a piece from `slot` on `to`.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`], [`GameError::PromotionPending`], or
    /// [`GameError::IllegalDrop`] if the hand is empty or `to` is not a
    /// legal drop square.
    pub fn apply_drop(&mut self, slot: HandSlot, to: Square) -> Result<Move, GameError> {
        self.ensure_accepting_moves()?;

        if !self.position.legal_drops(slot.piece()).contains(to) {
            return Err(GameError::IllegalDrop);
        }

        let m = Move::Drop {
            color: slot.color,
            role: slot.role,
            to,
        };
        self.position.play_unchecked(m);
        self.selection = None;
        debug!("{} plays {}", slot.color, m);

        self.update_status();
        Ok(m)
    }

    /// Settles a pending promotion decision.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidState`] if no decision is pending.
    pub fn resolve_promotion(&mut self, promote: bool) -> Result<(), GameError> {
        let PromotionState::AwaitingChoice(sq) = self.promotion else {
            return Err(GameError::InvalidState);
        };
        self.position.set_promoted(sq, promote);
        self.promotion = PromotionState::Idle;
        debug!(
            "piece on {} {}",
            sq,
            if promote { "promotes" } else { "stays unpromoted" }
        );
        self.update_status();
        Ok(())
    }

    fn update_status(&mut self) {
        if let Some(winner) = self.position.winner() {
            self.status = GameStatus::Over { winner };
            info!("game over, {} wins", winner);
        }
    }
}
