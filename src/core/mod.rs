//! Board primitives.
//!
//! - [`offset`]: signed row/column deltas and the knight offset table.
//! - [`square`]: an on-board `(row, col)` coordinate.

pub mod offset;
pub mod square;
