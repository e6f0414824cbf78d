use std::ops::Neg;

/// A signed `(rows, cols)` step between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub rows: i32,
    pub cols: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { rows: 0, cols: 0 };

    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// True iff this step is one of [`KNIGHT_OFFSETS`].
    #[inline]
    pub fn is_knight_step(self) -> bool {
        let r = self.rows.abs();
        let c = self.cols.abs();
        (r == 1 && c == 2) || (r == 2 && c == 1)
    }
}

impl Neg for Offset {
    type Output = Offset;

    #[inline]
    fn neg(self) -> Self::Output {
        Offset::new(-self.rows, -self.cols)
    }
}

/// The 8 L-shaped knight steps.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset { rows: -2, cols: -1 },
    Offset { rows: -2, cols: 1 },
    Offset { rows: -1, cols: -2 },
    Offset { rows: -1, cols: 2 },
    Offset { rows: 1, cols: -2 },
    Offset { rows: 1, cols: 2 },
    Offset { rows: 2, cols: -1 },
    Offset { rows: 2, cols: 1 },
];
