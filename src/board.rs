use std::collections::BTreeSet;

use crate::core::square::Square;
use crate::moves::legal_moves;

/// Knight square, remaining queens, and the knight's current legal moves.
///
/// `legal` is always `legal_moves(knight, size)`; every mutation recomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    size: u8,
    knight: Square,
    queens: BTreeSet<Square>,
    legal: Vec<Square>,
}

impl BoardState {
    pub fn new(size: u8, knight: Square) -> Self {
        debug_assert!(knight.on_board(size));
        Self {
            size,
            knight,
            queens: BTreeSet::new(),
            legal: legal_moves(knight, size),
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn knight(&self) -> Square {
        self.knight
    }

    #[inline]
    pub fn queens(&self) -> &BTreeSet<Square> {
        &self.queens
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Square] {
        &self.legal
    }

    #[inline]
    pub fn has_queen(&self, sq: Square) -> bool {
        self.queens.contains(&sq)
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.queens.is_empty()
    }

    pub fn can_move_to(&self, target: Square) -> bool {
        self.legal.contains(&target)
    }

    /// Replace the queen set for a new level.
    ///
    /// Queens must not overlap the knight.
    pub fn set_queens(&mut self, queens: BTreeSet<Square>) {
        debug_assert!(!queens.contains(&self.knight));
        self.queens = queens;
        self.legal = legal_moves(self.knight, self.size);
    }

    /// Move the knight to `target`, capturing a queen there if present.
    ///
    /// Returns `true` on capture. The caller is responsible for checking
    /// [`Self::can_move_to`] first.
    pub fn move_knight(&mut self, target: Square) -> bool {
        debug_assert!(target.on_board(self.size));
        self.knight = target;
        let captured = self.queens.remove(&target);
        self.legal = legal_moves(target, self.size);
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_onto_queen_captures_it() {
        let mut board = BoardState::new(8, Square::new(0, 1));
        board.set_queens([Square::new(2, 2), Square::new(5, 5)].into_iter().collect());

        assert!(board.can_move_to(Square::new(2, 2)));
        assert!(board.move_knight(Square::new(2, 2)));
        assert_eq!(board.knight(), Square::new(2, 2));
        assert_eq!(board.queens().len(), 1);
        assert_eq!(board.legal_moves().len(), 8);

        assert!(!board.move_knight(Square::new(4, 3)));
        assert_eq!(board.queens().len(), 1);
    }
}
