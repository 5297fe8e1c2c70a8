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

use crate::{color::Color, role::Role};

/// A piece with [`Color`], [`Role`] and promotion state.
///
/// Only roles for which [`Role::is_promotable()`] holds may be promoted.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub promoted: bool,
}

impl Piece {
    /// The same piece, promoted.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the role cannot promote.
    #[must_use]
    #[inline]
    pub const fn promote(self) -> Piece {
        debug_assert!(self.role.is_promotable());
        Piece {
            promoted: true,
            ..self
        }
    }

    /// The same piece, unpromoted.
    #[must_use]
    #[inline]
    pub const fn unpromote(self) -> Piece {
        Piece {
            promoted: false,
            ..self
        }
    }

    /// Checks the promotion invariant: kings and golds are never promoted.
    #[inline]
    pub const fn is_valid(self) -> bool {
        !self.promoted || self.role.is_promotable()
    }

    /// The piece a capture of `self` adds to the capturing side's hand.
    #[inline]
    pub const fn captured_by(self, color: Color) -> Piece {
        self.role.of(color)
    }

    /// Gets the piece letter, uppercase for `First` and lowercase for
    /// `Second`. The promotion marker is not included.
    pub const fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_first(ch.is_ascii_uppercase())))
    }
}

impl fmt::Display for Piece {
    /// Formats as in the position notation, for example `+p` for a promoted
    /// `Second` pawn.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.promoted {
            f.write_char('+')?;
        }
        f.write_char(self.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char() {
        assert_eq!(Color::First.rook().char(), 'R');
        assert_eq!(Color::Second.silver().char(), 's');
        assert_eq!(Piece::from_char('G'), Some(Color::First.gold()));
        assert_eq!(Piece::from_char('p'), Some(Color::Second.pawn()));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_captured_by() {
        let dragon = Color::Second.rook().promote();
        assert!(dragon.promoted);
        assert_eq!(dragon.captured_by(Color::First), Color::First.rook());
    }

    #[test]
    fn test_is_valid() {
        assert!(Color::First.pawn().promote().is_valid());
        assert!(!Piece {
            promoted: true,
            ..Color::First.gold()
        }
        .is_valid());
    }
}
