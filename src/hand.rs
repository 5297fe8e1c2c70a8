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
    color::{ByColor, Color},
    role::{ByRole, Role},
};

/// Captured pieces available for dropping, counted per color and role.
///
/// Hands never hold kings or promoted pieces.
///
/// # Examples
///
/// ```
/// use minishogi::{Color, Hand, Role};
///
/// let mut hand = Hand::new();
/// hand.add(Color::First, Role::Pawn);
/// hand.add(Color::First, Role::Pawn);
/// hand.add(Color::Second, Role::Silver);
/// assert_eq!(hand.count(Color::First, Role::Pawn), 2);
/// assert_eq!(hand.to_string(), "2Ps");
///
/// assert!(hand.take(Color::Second, Role::Silver));
/// assert!(!hand.take(Color::Second, Role::Silver));
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Hand {
    by_color: ByColor<ByRole<u8>>,
}

impl Hand {
    /// An empty hand for both colors.
    pub const fn new() -> Hand {
        const EMPTY: ByRole<u8> = ByRole {
            pawn: 0,
            silver: 0,
            gold: 0,
            bishop: 0,
            rook: 0,
            king: 0,
        };
        Hand {
            by_color: ByColor {
                first: EMPTY,
                second: EMPTY,
            },
        }
    }

    #[inline]
    pub const fn count(&self, color: Color, role: Role) -> u8 {
        *self.by_color.get(color).get(role)
    }

    /// The counts of one color.
    #[inline]
    pub const fn side(&self, color: Color) -> &ByRole<u8> {
        self.by_color.get(color)
    }

    /// Total number of pieces held by `color`.
    pub fn total(&self, color: Color) -> usize {
        self.side(color).iter().map(|&n| usize::from(n)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total(Color::First) == 0 && self.total(Color::Second) == 0
    }

    /// Adds one piece of `role` to the hand of `color`.
    #[inline]
    pub fn add(&mut self, color: Color, role: Role) {
        debug_assert!(role.is_droppable());
        let count = self.by_color.get_mut(color).get_mut(role);
        *count = count.saturating_add(1);
    }

    /// Removes one piece of `role` from the hand of `color`. Returns
    /// `false` if there was none.
    #[inline]
    pub fn take(&mut self, color: Color, role: Role) -> bool {
        let count = self.by_color.get_mut(color).get_mut(role);
        if *count > 0 {
            *count -= 1;
            true
        } else {
            false
        }
    }

    /// Sets the count of `role` for `color` directly.
    pub fn set(&mut self, color: Color, role: Role, count: u8) {
        *self.by_color.get_mut(color).get_mut(role) = count;
    }
}

impl fmt::Display for Hand {
    /// Formats the hand part of the position notation. `First` is written
    /// in uppercase and `Second` in lowercase, each from rook down to pawn,
    /// with a count prefix for more than one piece. An empty hand is `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_char('-');
        }
        for color in Color::ALL {
            for role in Role::HAND.into_iter().rev() {
                let count = self.count(color, role);
                if count > 1 {
                    write!(f, "{count}")?;
                }
                if count > 0 {
                    f.write_char(role.of(color).char())?;
                }
            }
        }
        Ok(())
    }
}
