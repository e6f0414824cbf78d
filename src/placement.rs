//! Random queen placement.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::trace;

use crate::core::square::Square;
use crate::error::{GameError, GameResult};

/// Scatter `count` queens uniformly over the board, avoiding `forbidden` and each other.
///
/// Rejection sampling: draw a square, drop it if it is `forbidden` or already taken,
/// repeat until `count` squares are collected. Fails up front with
/// [`GameError::CapacityExceeded`] if `count` exceeds the `board_size² - 1` free squares,
/// since sampling could otherwise never finish.
pub fn place_queens<R: Rng>(
    count: u32,
    board_size: u8,
    forbidden: Square,
    rng: &mut R,
) -> GameResult<BTreeSet<Square>> {
    let cells = board_size as u32 * board_size as u32;
    let available = if forbidden.on_board(board_size) {
        cells.saturating_sub(1)
    } else {
        cells
    };
    if count > available {
        return Err(GameError::CapacityExceeded {
            requested: count,
            available,
        });
    }

    let mut queens = BTreeSet::new();
    let mut draws = 0u64;
    while (queens.len() as u32) < count {
        draws += 1;
        let sq = Square::new(
            rng.random_range(0..board_size),
            rng.random_range(0..board_size),
        );
        if sq == forbidden {
            continue;
        }
        queens.insert(sq);
    }
    trace!(count, draws, "placed queens");
    Ok(queens)
}
