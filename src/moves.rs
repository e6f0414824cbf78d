//! Knight move generation on a square board.

use crate::core::offset::KNIGHT_OFFSETS;
use crate::core::square::Square;

/// All squares one knight move away from `from`, in [`KNIGHT_OFFSETS`] order.
///
/// Between 2 (corner) and 8 (interior) squares on boards of size 5 and up.
pub fn legal_moves(from: Square, board_size: u8) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&d| from.shifted(d, board_size))
        .collect()
}

/// True iff `to` is on the board and one knight move from `from`.
#[inline]
pub fn is_legal(from: Square, to: Square, board_size: u8) -> bool {
    to.on_board(board_size) && from.offset_to(to).is_knight_step()
}
