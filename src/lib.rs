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

//! Rules, move generation and game control for minishogi, the 5x5 shogi
//! variant.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use minishogi::{Color, Position};
//!
//! let pos = Position::new();
//! let legals = pos.legal_moves_of(Color::First);
//! assert_eq!(legals.len(), 14);
//! ```
//!
//! Play moves:
//!
//! ```
//! use minishogi::{Move, Position, Role, Square};
//!
//! let pos = Position::new();
//!
//! let pos = pos.play(Move::Normal {
//!     role: Role::Pawn,
//!     from: Square::A4,
//!     capture: None,
//!     to: Square::A3,
//!     promotion: false,
//! })?;
//! # Ok::<_, minishogi::PlayError>(())
//! ```
//!
//! Run a game session with selection and promotion prompts:
//!
//! ```
//! use minishogi::{Game, GameStatus, Square};
//!
//! let mut game = Game::new();
//! game.apply_move(Square::E5, Square::E2)?; // rook takes pawn
//! assert_eq!(game.promotion_pending(), None);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<_, minishogi::GameError>(())
//! ```
//!
//! Positions can be read and written in a compact [notation](setup).
//!
//! # Feature flags
//!
//! * `std`: Enabled by default. For `no_std` environments, this must be
//!   disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! [`Game`] reports executed commands through the
//! [`log`](https://docs.rs/log/0.4) facade. Install any logger to see them.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod util;
mod color;
mod game;
mod hand;
mod m;
mod position;
mod role;
mod square;
mod types;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod perft;
pub mod setup;

pub use bitboard::Bitboard;
pub use board::Board;
pub use color::{ByColor, Color, ParseColorError};
pub use game::{Game, GameError, GameStatus, HandSlot, PromotionState, Target};
pub use hand::Hand;
pub use m::{Move, MoveList};
pub use perft::perft;
pub use position::{PlayError, Position, PositionError, PositionErrorKinds};
pub use role::{ByRole, Role};
pub use setup::{ParseSetupError, Setup};
pub use square::{File, InvalidCoordinate, ParseSquareError, Rank, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
