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

use arrayvec::ArrayVec;

use crate::{color::Color, role::Role, square::Square};

/// Information about a move.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using a long notation, for
/// example `Sc5-c4`, `Bb4xd2+` (capture with promotion) or `P*c3` (drop).
/// Drops of `Second` use a lowercase letter, as in `g*b4`.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    /// A board move.
    Normal {
        role: Role,
        from: Square,
        capture: Option<Role>,
        to: Square,
        promotion: bool,
    },
    /// A drop of a piece from hand. Without a side to move, the dropping
    /// color is part of the move.
    Drop { color: Color, role: Role, to: Square },
}

impl Move {
    /// Gets the role of the moved or dropped piece.
    pub const fn role(self) -> Role {
        match self {
            Move::Normal { role, .. } | Move::Drop { role, .. } => role,
        }
    }

    /// Gets the origin square or `None` for drops.
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// Gets the role of the captured piece or `None`.
    pub const fn capture(self) -> Option<Role> {
        match self {
            Move::Normal { capture, .. } => capture,
            Move::Drop { .. } => None,
        }
    }

    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            Move::Normal {
                capture: Some(_),
                ..
            }
        )
    }

    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Normal { promotion: true, .. })
    }

    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Normal {
                role,
                from,
                capture,
                to,
                promotion,
            } => {
                f.write_char(role.upper_char())?;
                write!(f, "{}{}{}", from, if capture.is_some() { 'x' } else { '-' }, to)?;
                if promotion {
                    f.write_char('+')?;
                }
                Ok(())
            }
            Move::Drop { color, role, to } => write!(f, "{}*{}", role.of(color).char(), to),
        }
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is sufficient for all positions reachable with minishogi
/// material.
pub type MoveList = ArrayVec<Move, 256>;

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn test_accessors() {
        let m = Move::Normal {
            role: Role::Bishop,
            from: Square::D5,
            capture: Some(Role::Silver),
            to: Square::B3,
            promotion: false,
        };
        assert_eq!(m.from(), Some(Square::D5));
        assert_eq!(m.to(), Square::B3);
        assert!(m.is_capture());
        assert!(!m.is_drop());

        let d = Move::Drop {
            color: Color::Second,
            role: Role::Gold,
            to: Square::C2,
        };
        assert_eq!(d.from(), None);
        assert_eq!(d.capture(), None);
        assert!(d.is_drop());
    }

    #[test]
    fn test_display() {
        let m = Move::Normal {
            role: Role::Bishop,
            from: Square::B4,
            capture: Some(Role::Silver),
            to: Square::D2,
            promotion: true,
        };
        assert_eq!(m.to_string(), "Bb4xd2+");
        let d = Move::Drop {
            color: Color::Second,
            role: Role::Gold,
            to: Square::B4,
        };
        assert_eq!(d.to_string(), "g*b4");
    }
}
