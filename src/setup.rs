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

//! Parse and write positions in a compact text notation.
//!
//! The notation has a board part and an optional hand part, separated by a
//! space. The board part lists ranks from rank 1 to rank 5, separated by
//! `/`. Uppercase letters are `First`, lowercase letters are `Second`,
//! digits count empty squares and `+` marks a promoted piece. The hand
//! part is `-` or a sequence of piece letters with optional counts.
//!
//! # Examples
//!
//! ```
//! use minishogi::{Color, Role, Setup, Square};
//!
//! let setup: Setup = "rb1gk/4p/2+S2/P4/KG1BR 2p".parse()?;
//! assert_eq!(setup.board.piece_at(Square::C3), Some(Color::First.silver().promote()));
//! assert_eq!(setup.hand.count(Color::Second, Role::Pawn), 2);
//! assert_eq!(setup.to_string(), "rb1gk/4p/2+S2/P4/KG1BR 2p");
//! # Ok::<_, minishogi::ParseSetupError>(())
//! ```

use core::{
    error,
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::{
    board::Board,
    hand::Hand,
    square::{File, Rank, Square},
    types::Piece,
};

/// Errors that can occur when parsing the position notation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseSetupError {
    InvalidSetup,
    InvalidBoard,
    InvalidHand,
}

impl fmt::Display for ParseSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseSetupError::InvalidSetup => "invalid position notation",
            ParseSetupError::InvalidBoard => "invalid board part",
            ParseSetupError::InvalidHand => "invalid hand part",
        })
    }
}

impl error::Error for ParseSetupError {}

/// A not necessarily legal position: a board and the hands of both
/// colors.
///
/// Use [`Position::from_setup()`](crate::Position::from_setup) to validate.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Setup {
    pub board: Board,
    pub hand: Hand,
}

impl Setup {
    /// The initial position.
    pub const fn initial() -> Setup {
        Setup {
            board: Board::new(),
            hand: Hand::new(),
        }
    }

    /// An empty board with empty hands.
    pub const fn empty() -> Setup {
        Setup {
            board: Board::empty(),
            hand: Hand::new(),
        }
    }

    pub fn from_ascii(s: &[u8]) -> Result<Setup, ParseSetupError> {
        let mut parts = s.split(|ch| *ch == b' ');

        let board_part = parts.next().ok_or(ParseSetupError::InvalidSetup)?;
        let board = Board::from_ascii_board(board_part)?;

        let hand = match parts.next() {
            Some(hand_part) => Hand::from_ascii(hand_part)?,
            None => Hand::new(),
        };

        if parts.next().is_some() {
            return Err(ParseSetupError::InvalidSetup);
        }

        Ok(Setup { board, hand })
    }
}

impl Board {
    /// Parses the board part of the position notation.
    pub fn from_ascii_board(s: &[u8]) -> Result<Board, ParseSetupError> {
        let mut board = Board::empty();
        let mut ranks = s.split(|ch| *ch == b'/');

        for rank in Rank::ALL {
            let rank_part = ranks.next().ok_or(ParseSetupError::InvalidBoard)?;
            let mut file = 0u32;
            let mut promoted = false;

            for &ch in rank_part {
                if ch == b'+' {
                    if promoted {
                        return Err(ParseSetupError::InvalidBoard);
                    }
                    promoted = true;
                } else if (b'1'..=b'5').contains(&ch) && !promoted {
                    file += u32::from(ch - b'0');
                } else {
                    let piece =
                        Piece::from_char(char::from(ch)).ok_or(ParseSetupError::InvalidBoard)?;
                    if file >= 5 {
                        return Err(ParseSetupError::InvalidBoard);
                    }
                    let sq = Square::from_coords(File::new(file), rank);
                    board.set_piece_at(sq, Piece { promoted, ..piece });
                    promoted = false;
                    file += 1;
                }

                if file > 5 {
                    return Err(ParseSetupError::InvalidBoard);
                }
            }

            if file != 5 || promoted {
                return Err(ParseSetupError::InvalidBoard);
            }
        }

        if ranks.next().is_some() {
            return Err(ParseSetupError::InvalidBoard);
        }

        Ok(board)
    }
}

impl Hand {
    /// Parses the hand part of the position notation.
    pub fn from_ascii(s: &[u8]) -> Result<Hand, ParseSetupError> {
        let mut hand = Hand::new();
        if s == b"-" {
            return Ok(hand);
        }
        if s.is_empty() {
            return Err(ParseSetupError::InvalidHand);
        }

        let mut rest = s;
        while !rest.is_empty() {
            let digits = rest.iter().take_while(|ch| ch.is_ascii_digit()).count();
            let count = if digits > 0 {
                btoi::btou::<u8>(&rest[..digits]).map_err(|_| ParseSetupError::InvalidHand)?
            } else {
                1
            };
            let &ch = rest.get(digits).ok_or(ParseSetupError::InvalidHand)?;
            let piece = Piece::from_char(char::from(ch)).ok_or(ParseSetupError::InvalidHand)?;
            if count == 0 || !piece.role.is_droppable() {
                return Err(ParseSetupError::InvalidHand);
            }
            let total = hand
                .count(piece.color, piece.role)
                .checked_add(count)
                .ok_or(ParseSetupError::InvalidHand)?;
            hand.set(piece.color, piece.role, total);
            rest = &rest[digits + 1..];
        }

        Ok(hand)
    }
}

impl From<Board> for Setup {
    fn from(board: Board) -> Setup {
        Setup {
            board,
            hand: Hand::new(),
        }
    }
}

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Setup, ParseSetupError> {
        Setup::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        f.write_char(' ')?;
        write!(f, "{}", self.hand)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Setup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = arrayvec::ArrayString::<128>::new();
        write!(s, "{self}").map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Setup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SetupVisitor;

        impl serde::de::Visitor<'_> for SetupVisitor {
            type Value = Setup;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("position notation")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SetupVisitor)
    }
}
