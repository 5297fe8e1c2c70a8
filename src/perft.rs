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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use minishogi::{perft::perft, Color, Position};
//!
//! let pos = Position::new();
//! assert_eq!(perft(&pos, Color::First, 1), 14);
//! assert_eq!(perft(&pos, Color::First, 2), 181);
//! assert_eq!(perft(&pos, Color::First, 3), 2512);
//! ```

use log::debug;

use crate::{color::Color, position::Position};

/// Counts legal move paths of a given length, with colors alternating and
/// `color` moving first.
///
/// Paths ending in a position without legal moves are not counted unless
/// it occurs at the final depth. Useful for comparing, testing and
/// debugging move generation correctness and performance.
pub fn perft(pos: &Position, color: Color, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.legal_moves_of(color);

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|&m| {
                    let mut child = *pos;
                    child.play_unchecked(m);
                    perft(&child, !color, depth - 1)
                })
                .sum()
        }
    }
}

/// Like [`perft()`], but also logs the count below each move at `debug`
/// level.
pub fn debug_perft(pos: &Position, color: Color, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        pos.legal_moves_of(color)
            .iter()
            .map(|&m| {
                let mut child = *pos;
                child.play_unchecked(m);
                let nodes = perft(&child, !color, depth - 1);
                debug!("{} {}: {}", m, depth - 1, nodes);
                nodes
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_perft_agrees() {
        let pos = Position::new();
        assert_eq!(
            debug_perft(&pos, Color::Second, 2),
            perft(&pos, Color::Second, 2)
        );
        assert_eq!(perft(&pos, Color::Second, 0), 1);
    }
}
