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

use core::{error, fmt, str::FromStr};

/// Number of files and ranks.
pub const BOARD_SIZE: u32 = 5;

/// A file of the board, `a` to `e` from the left as seen by `First`.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
}

impl File {
    /// Gets a `File` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=4`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> File {
        match index {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            _ => panic!("file index out of range"),
        }
    }

    #[inline]
    pub fn from_char(ch: char) -> Option<File> {
        match ch {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    pub const fn offset(self, delta: i32) -> Option<File> {
        let index = self as i32 + delta;
        if 0 <= index && index < BOARD_SIZE as i32 {
            Some(File::new(index as u32))
        } else {
            None
        }
    }

    pub const ALL: [File; 5] = [File::A, File::B, File::C, File::D, File::E];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

from_enum_as_int_impl! { File, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
try_from_int_impl! { File, 0, 5, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

/// A rank of the board, `1` to `5` from the top as seen by `First`.
///
/// Rank `1` is the back rank of [`Color::Second`](crate::Color::Second),
/// rank `5` the back rank of [`Color::First`](crate::Color::First).
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Rank {
    /// Gets a `Rank` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=4`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> Rank {
        match index {
            0 => Rank::First,
            1 => Rank::Second,
            2 => Rank::Third,
            3 => Rank::Fourth,
            4 => Rank::Fifth,
            _ => panic!("rank index out of range"),
        }
    }

    #[inline]
    pub fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1' => Some(Rank::First),
            '2' => Some(Rank::Second),
            '3' => Some(Rank::Third),
            '4' => Some(Rank::Fourth),
            '5' => Some(Rank::Fifth),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    pub const fn offset(self, delta: i32) -> Option<Rank> {
        let index = self as i32 + delta;
        if 0 <= index && index < BOARD_SIZE as i32 {
            Some(Rank::new(index as u32))
        } else {
            None
        }
    }

    pub const ALL: [Rank; 5] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

from_enum_as_int_impl! { Rank, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
try_from_int_impl! { Rank, 0, 5, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

/// Error when a (file, rank) pair lies outside the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidCoordinate {
    pub file: u32,
    pub rank: u32,
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate ({}, {}) is outside the {}x{} board",
            self.file, self.rank, BOARD_SIZE, BOARD_SIZE
        )
    }
}

impl error::Error for InvalidCoordinate {}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl error::Error for ParseSquareError {}

/// A square of the 5x5 board.
///
/// Squares are indexed rank by rank: `a1` is 0, `e1` is 4, `a2` is 5 and
/// `e5` is 24.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets a `Square` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=24`.
    #[track_caller]
    /// # Panics
    ///
    /// Panics if the index is not below 25.
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < BOARD_SIZE * BOARD_SIZE, "square index out of range");
        Square(index as u8)
    }

    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(rank as u8 * BOARD_SIZE as u8 + file as u8)
    }

    /// Converts a raw (file, rank) pair, as received from an input layer.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] if either coordinate is not in
    /// `0..5`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minishogi::Square;
    ///
    /// assert_eq!(Square::try_from_coords(2, 4), Ok(Square::C5));
    /// assert!(Square::try_from_coords(5, 0).is_err());
    /// ```
    pub const fn try_from_coords(file: u32, rank: u32) -> Result<Square, InvalidCoordinate> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Ok(Square::from_coords(File::new(file), Rank::new(rank)))
        } else {
            Err(InvalidCoordinate { file, rank })
        }
    }

    #[inline]
    pub const fn file(self) -> File {
        File::new(self.0 as u32 % BOARD_SIZE)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::new(self.0 as u32 / BOARD_SIZE)
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0 as u32
    }

    /// Steps by a (file, rank) delta, or `None` when leaving the board.
    #[inline]
    pub const fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        match (self.file().offset(file_delta), self.rank().offset(rank_delta)) {
            (Some(file), Some(rank)) => Some(Square::from_coords(file, rank)),
            _ => None,
        }
    }

    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file, rank] => Ok(Square::from_coords(
                File::from_char(char::from(file)).ok_or(ParseSquareError)?,
                Rank::from_char(char::from(rank)).ok_or(ParseSquareError)?,
            )),
            _ => Err(ParseSquareError),
        }
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const A2: Square = Square(5);
    pub const B2: Square = Square(6);
    pub const C2: Square = Square(7);
    pub const D2: Square = Square(8);
    pub const E2: Square = Square(9);
    pub const A3: Square = Square(10);
    pub const B3: Square = Square(11);
    pub const C3: Square = Square(12);
    pub const D3: Square = Square(13);
    pub const E3: Square = Square(14);
    pub const A4: Square = Square(15);
    pub const B4: Square = Square(16);
    pub const C4: Square = Square(17);
    pub const D4: Square = Square(18);
    pub const E4: Square = Square(19);
    pub const A5: Square = Square(20);
    pub const B5: Square = Square(21);
    pub const C5: Square = Square(22);
    pub const D5: Square = Square(23);
    pub const E5: Square = Square(24);

    #[rustfmt::skip]
    pub const ALL: [Square; 25] = [
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5,
    ];
}

impl TryFrom<(u32, u32)> for Square {
    type Error = InvalidCoordinate;

    fn try_from((file, rank): (u32, u32)) -> Result<Square, InvalidCoordinate> {
        Square::try_from_coords(file, rank)
    }
}

impl From<(File, Rank)> for Square {
    #[inline]
    fn from((file, rank): (File, Rank)) -> Square {
        Square::from_coords(file, rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file().char().to_ascii_uppercase(),
            self.rank()
        )
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        u.choose(&Square::ALL).copied()
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(4))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = arrayvec::ArrayString::<2>::new();
        let _ = fmt::Write::write_fmt(&mut s, format_args!("{}", self));
        serializer.serialize_str(&s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("square name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coords() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let square = Square::from_coords(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_try_from_coords() {
        assert_eq!(Square::try_from_coords(0, 0), Ok(Square::A1));
        assert_eq!(Square::try_from_coords(4, 4), Ok(Square::E5));
        assert_eq!(
            Square::try_from_coords(0, 5),
            Err(InvalidCoordinate { file: 0, rank: 5 })
        );
        assert_eq!(
            Square::try_from((7, 1)),
            Err(InvalidCoordinate { file: 7, rank: 1 })
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::C3.offset(1, -1), Some(Square::D2));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::E5.offset(0, 1), None);
        assert_eq!(Square::E1.offset(1, 0), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("c4".parse::<Square>().ok(), Some(Square::C4));
        assert!("f1".parse::<Square>().is_err());
        assert!("a6".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(File::try_from(4u8).ok(), Some(File::E));
        assert!(File::try_from(5u8).is_err());
        assert!(Rank::try_from(-1i32).is_err());
        assert_eq!(u32::from(Rank::Third), 2);
    }
}
