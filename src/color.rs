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

use core::{error, fmt, ops, str::FromStr};

use crate::{
    role::Role,
    square::Rank,
    types::Piece,
};

/// `First` or `Second`.
///
/// `First` starts on rank 5 and moves toward rank 1. `Second` starts on
/// rank 1 and moves toward rank 5.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Color {
    First = 0,
    Second = 1,
}

impl Color {
    #[inline]
    pub const fn from_first(first: bool) -> Color {
        if first {
            Color::First
        } else {
            Color::Second
        }
    }

    #[inline]
    pub const fn fold<T: Copy>(self, first: T, second: T) -> T {
        match self {
            Color::First => first,
            Color::Second => second,
        }
    }

    #[inline]
    pub const fn other(self) -> Color {
        self.fold(Color::Second, Color::First)
    }

    /// The rank this color starts on.
    #[inline]
    pub const fn backrank(self) -> Rank {
        self.fold(Rank::Fifth, Rank::First)
    }

    /// The rank where pieces of this color may promote. This is the
    /// opponent's back rank.
    #[inline]
    pub const fn promotion_rank(self) -> Rank {
        self.fold(Rank::First, Rank::Fifth)
    }

    pub const fn char(self) -> char {
        self.fold('b', 'w')
    }

    #[inline]
    pub const fn king(self) -> Piece {
        Role::King.of(self)
    }
    #[inline]
    pub const fn rook(self) -> Piece {
        Role::Rook.of(self)
    }
    #[inline]
    pub const fn bishop(self) -> Piece {
        Role::Bishop.of(self)
    }
    #[inline]
    pub const fn gold(self) -> Piece {
        Role::Gold.of(self)
    }
    #[inline]
    pub const fn silver(self) -> Piece {
        Role::Silver.of(self)
    }
    #[inline]
    pub const fn pawn(self) -> Piece {
        Role::Pawn.of(self)
    }

    /// `First` and `Second`, in this order.
    pub const ALL: [Color; 2] = [Color::First, Color::Second];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.other()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("first", "second"))
    }
}

/// Error when parsing an invalid color name.
#[derive(Clone, Debug)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color")
    }
}

impl error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        Ok(match s {
            "first" | "b" => Color::First,
            "second" | "w" => Color::Second,
            _ => return Err(ParseColorError),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.fold("first", "second"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ColorVisitor;

        impl serde::de::Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("color name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Container with values for each [`Color`].
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByColor<T> {
    pub first: T,
    pub second: T,
}

impl<T> ByColor<T> {
    #[inline]
    pub const fn get(&self, color: Color) -> &T {
        match color {
            Color::First => &self.first,
            Color::Second => &self.second,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::First => &mut self.first,
            Color::Second => &mut self.second,
        }
    }

    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Color>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.first) {
            Some(Color::First)
        } else if predicate(&self.second) {
            Some(Color::Second)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ranks() {
        assert_eq!(Color::First.backrank(), Rank::Fifth);
        assert_eq!(Color::First.promotion_rank(), Rank::First);
        assert_eq!(Color::Second.backrank(), Rank::First);
        assert_eq!(Color::Second.promotion_rank(), Rank::Fifth);
        for color in Color::ALL {
            assert_eq!(color.promotion_rank(), color.other().backrank());
        }
    }

    #[test]
    fn test_by_color_find() {
        let counts = ByColor { first: 0, second: 2 };
        assert_eq!(counts.find(|c| *c > 0), Some(Color::Second));
        assert_eq!(counts.find(|c| *c > 5), None);
    }
}
