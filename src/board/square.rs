//! Board coordinates.
//!
//! A `Square` is an always-in-bounds (row, col) pair. Rows run 0..=7 from
//! White's back rank upward; columns run 0..=7 from the queenside. Candidate
//! coordinates produced while scanning go through `offset`, which refuses to
//! build an out-of-range square.

use std::fmt;

pub const BOARD_SIZE: i8 = 8;

/// A single board coordinate. Construction is validated; a `Square` that
/// exists is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Builds the square at `(row, col)`. Panics when either index is outside
    /// 0..=7; callers stepping off a known-good square should use `offset`.
    pub fn at(row: i8, col: i8) -> Self {
        assert!(
            (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col),
            "square ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Steps by `(d_row, d_col)`, or `None` when the result would leave the
    /// board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row + d_row;
        let col = self.col + d_col;
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Iterates every square in row-major order (a1, b1, ... h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    /// Long-algebraic rendering: column as a file letter, row as a rank digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col as u8),
            char::from(b'1' + self.row as u8)
        )
    }
}
