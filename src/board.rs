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

use core::fmt::{self, Write as _};

use crate::{
    bitboard::{self, Bitboard},
    color::{ByColor, Color},
    role::{ByRole, Role},
    square::{File, Rank, Square},
    types::Piece,
};

/// [`Piece`] positions on a board.
///
/// The board is `Copy`, so candidate moves can be tried on a scratch copy.
///
/// # Examples
///
/// ```
/// use minishogi::{Board, Color, Square};
///
/// let board = Board::new();
/// // r b s g k
/// // . . . . p
/// // . . . . .
/// // P . . . .
/// // K G S B R
///
/// assert_eq!(board.piece_at(Square::C5), Some(Color::First.silver()));
/// assert_eq!(board.king_of(Color::Second), Some(Square::E1));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    by_role: ByRole<Bitboard>,
    by_color: ByColor<Bitboard>,
    occupied: Bitboard,
    promoted: Bitboard,
}

impl Board {
    /// The initial minishogi layout.
    pub const fn new() -> Board {
        Board {
            by_role: ByRole {
                pawn: Bitboard(0x0000_8200),
                silver: Bitboard(0x0040_0004),
                gold: Bitboard(0x0020_0008),
                bishop: Bitboard(0x0080_0002),
                rook: Bitboard(0x0100_0001),
                king: Bitboard(0x0010_0010),
            },
            by_color: ByColor {
                first: Bitboard(0x01f0_8000),
                second: Bitboard(0x0000_021f),
            },
            occupied: Bitboard(0x01f0_821f),
            promoted: Bitboard(0),
        }
    }

    pub const fn empty() -> Board {
        Board {
            by_role: ByRole {
                pawn: Bitboard(0),
                silver: Bitboard(0),
                gold: Bitboard(0),
                bishop: Bitboard(0),
                rook: Bitboard(0),
                king: Bitboard(0),
            },
            by_color: ByColor {
                first: Bitboard(0),
                second: Bitboard(0),
            },
            occupied: Bitboard(0),
            promoted: Bitboard(0),
        }
    }

    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub const fn by_color(&self, color: Color) -> Bitboard {
        *self.by_color.get(color)
    }

    /// Squares holding pieces of `role`, promoted or not.
    #[inline]
    pub const fn by_role(&self, role: Role) -> Bitboard {
        *self.by_role.get(role)
    }

    /// Squares holding promoted pieces.
    #[inline]
    pub const fn promoted(&self) -> Bitboard {
        self.promoted
    }

    /// Squares holding exactly `piece`, including its promotion state.
    #[inline]
    pub fn by_piece(&self, piece: Piece) -> Bitboard {
        let promoted = if piece.promoted {
            self.promoted
        } else {
            !self.promoted
        };
        self.by_color(piece.color) & self.by_role(piece.role) & promoted
    }

    /// The square of the king of `color`, if there is one.
    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        (self.by_role.king & self.by_color(color)).first()
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.by_color.find(|bb| bb.contains(sq))
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        if !self.occupied.contains(sq) {
            None
        } else {
            self.by_role.find(|bb| bb.contains(sq))
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let color = self.color_at(sq)?;
        let role = self.role_at(sq)?;
        Some(Piece {
            color,
            role,
            promoted: self.promoted.contains(sq),
        })
    }

    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq);
        if let Some(piece) = piece {
            self.by_color.get_mut(piece.color).remove(sq);
            self.by_role.get_mut(piece.role).remove(sq);
            self.occupied.remove(sq);
            self.promoted.remove(sq);
        }
        piece
    }

    /// Places `piece` on `sq`, replacing any piece already there.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.remove_piece_at(sq);
        self.by_color.get_mut(piece.color).add(sq);
        self.by_role.get_mut(piece.role).add(sq);
        self.occupied.add(sq);
        if piece.promoted {
            self.promoted.add(sq);
        }
    }

    /// Iterates over all pieces in ascending square order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            board: self,
            squares: self.occupied.into_iter(),
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL {
            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) if piece.promoted => write!(f, "{piece}")?,
                    Some(piece) => write!(f, " {}", piece.char())?,
                    None => f.write_str(" .")?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    /// Formats the board part of the position notation, starting with
    /// rank 1. For example `rbsgk/4p/5/P4/KGSBR`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL {
            let mut empty = 0;
            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            f.write_char(char::from(b'0' + empty))?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                f.write_char(char::from(b'0' + empty))?;
            }
            if rank < Rank::Fifth {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl FromIterator<(Square, Piece)> for Board {
    fn from_iter<T>(iter: T) -> Board
    where
        T: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        board.extend(iter);
        board
    }
}

impl Extend<(Square, Piece)> for Board {
    fn extend<T: IntoIterator<Item = (Square, Piece)>>(&mut self, iter: T) {
        for (sq, piece) in iter {
            self.set_piece_at(sq, piece);
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = (Square, Piece);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the pieces of a [`Board`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    board: &'a Board,
    squares: bitboard::IntoIter,
}

impl Iterator for Iter<'_> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<(Square, Piece)> {
        let sq = self.squares.next()?;
        self.board.piece_at(sq).map(|piece| (sq, piece))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.squares.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
