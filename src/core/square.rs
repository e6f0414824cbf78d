use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::offset::Offset;

/// A board square, `row` and `col` both in `[0, board_size)`.
///
/// Ordering is row-major so sets of squares iterate top-left to bottom-right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn on_board(self, board_size: u8) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// The square `delta` away from this one, if it is still on the board.
    pub fn shifted(self, delta: Offset, board_size: u8) -> Option<Square> {
        let row = self.row as i32 + delta.rows;
        let col = self.col as i32 + delta.cols;
        let size = board_size as i32;
        if row < 0 || col < 0 || row >= size || col >= size {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }

    /// Offset from `self` to `other`.
    #[inline]
    pub fn offset_to(self, other: Square) -> Offset {
        Offset::new(
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_stays_on_board() {
        let sq = Square::new(0, 1);
        assert_eq!(sq.shifted(Offset::new(2, 1), 8), Some(Square::new(2, 2)));
        assert_eq!(sq.shifted(Offset::new(-1, 2), 8), None);
        assert_eq!(sq.shifted(Offset::new(1, -2), 8), None);
        assert_eq!(Square::new(7, 7).shifted(Offset::new(1, 0), 8), None);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Square::new(0, 7) < Square::new(1, 0));
        assert!(Square::new(3, 2) < Square::new(3, 4));
    }

    #[test]
    fn offset_to_round_trips_through_shifted() {
        let a = Square::new(4, 4);
        let b = Square::new(2, 5);
        assert_eq!(a.shifted(a.offset_to(b), 8), Some(b));
    }
}
