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

use core::{array, fmt, num};

use crate::{color::Color, types::Piece, util::overflow_error};

/// Piece kinds: `Pawn`, `Silver`, `Gold`, `Bishop`, `Rook`, `King`.
///
/// # Examples
///
/// ```
/// use minishogi::Role;
///
/// // Piece kinds are indexed from 1 to 6.
/// assert_eq!(u32::from(Role::Pawn), 1);
/// assert_eq!(u32::from(Role::King), 6);
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Pawn = 1,
    Silver = 2,
    Gold = 3,
    Bishop = 4,
    Rook = 5,
    King = 6,
}

impl Role {
    /// Gets the piece kind from its letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use minishogi::Role;
    ///
    /// assert_eq!(Role::from_char('K'), Some(Role::King));
    /// assert_eq!(Role::from_char('s'), Some(Role::Silver));
    ///
    /// assert_eq!(Role::from_char('N'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'S' | 's' => Some(Role::Silver),
            'G' | 'g' => Some(Role::Gold),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'K' | 'k' => Some(Role::King),
            _ => None,
        }
    }

    /// Gets an unpromoted [`Piece`] of the given color.
    ///
    /// # Examples
    ///
    /// ```
    /// use minishogi::{Color, Role};
    ///
    /// assert_eq!(Role::King.of(Color::Second), Color::Second.king());
    /// ```
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece {
            color,
            role: self,
            promoted: false,
        }
    }

    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Silver => 's',
            Role::Gold => 'g',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::King => 'k',
        }
    }

    pub const fn upper_char(self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::Silver => 'S',
            Role::Gold => 'G',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::King => 'K',
        }
    }

    /// Kings and golds never promote.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(self, Role::Pawn | Role::Silver | Role::Bishop | Role::Rook)
    }

    /// Kinds that can be captured and held in hand.
    #[inline]
    pub const fn is_droppable(self) -> bool {
        !matches!(self, Role::King)
    }

    /// `Pawn`, `Silver`, `Gold`, `Bishop`, `Rook`, and `King`, in this order.
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Silver,
        Role::Gold,
        Role::Bishop,
        Role::Rook,
        Role::King,
    ];

    /// The kinds that can be held in hand, in drop order.
    pub const HAND: [Role; 5] = [Role::Pawn, Role::Silver, Role::Gold, Role::Bishop, Role::Rook];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Pawn => "pawn",
            Role::Silver => "silver",
            Role::Gold => "gold",
            Role::Bishop => "bishop",
            Role::Rook => "rook",
            Role::King => "king",
        })
    }
}

macro_rules! int_from_role_impl {
    ($($t:ty)+) => {
        $(impl From<Role> for $t {
            #[inline]
            fn from(role: Role) -> $t {
                role as $t
            }
        })+
    }
}

int_from_role_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

macro_rules! try_role_from_int_impl {
    ($($t:ty)+) => {
        $(impl core::convert::TryFrom<$t> for Role {
            type Error = num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Role, Self::Error> {
                Ok(match value {
                    1 => Role::Pawn,
                    2 => Role::Silver,
                    3 => Role::Gold,
                    4 => Role::Bishop,
                    5 => Role::Rook,
                    6 => Role::King,
                    _ => return Err(overflow_error()),
                })
            }
        })+
    }
}

try_role_from_int_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RoleVisitor;

        impl serde::de::Visitor<'_> for RoleVisitor {
            type Value = Role;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("piece letter")
            }

            fn visit_char<E>(self, value: char) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Role::from_char(value)
                    .ok_or_else(|| serde::de::Error::custom("invalid piece letter"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => self.visit_char(ch),
                    _ => Err(serde::de::Error::custom("invalid piece letter")),
                }
            }
        }

        deserializer.deserialize_char(RoleVisitor)
    }
}

/// Container with values for each [`Role`].
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByRole<T> {
    pub pawn: T,
    pub silver: T,
    pub gold: T,
    pub bishop: T,
    pub rook: T,
    pub king: T,
}

impl<T> ByRole<T> {
    #[inline]
    pub const fn get(&self, role: Role) -> &T {
        match role {
            Role::Pawn => &self.pawn,
            Role::Silver => &self.silver,
            Role::Gold => &self.gold,
            Role::Bishop => &self.bishop,
            Role::Rook => &self.rook,
            Role::King => &self.king,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Pawn => &mut self.pawn,
            Role::Silver => &mut self.silver,
            Role::Gold => &mut self.gold,
            Role::Bishop => &mut self.bishop,
            Role::Rook => &mut self.rook,
            Role::King => &mut self.king,
        }
    }

    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Role>
    where
        F: FnMut(&T) -> bool,
    {
        Role::ALL.into_iter().find(|&role| predicate(self.get(role)))
    }

    pub fn iter(&self) -> array::IntoIter<&T, 6> {
        [
            &self.pawn,
            &self.silver,
            &self.gold,
            &self.bishop,
            &self.rook,
            &self.king,
        ]
        .into_iter()
    }
}
