use std::fmt;

/// A board coordinate.
///
/// Row 0 is White's back rank and row 7 is Black's; column 0 is the a-file.
/// A `Square` can only be built inside the 8x8 grid, so indexing the board
/// with one never goes out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` for coordinates outside the grid
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Builds a square from coordinates the caller already knows are in range.
    ///
    /// Panics otherwise: an out-of-range literal is a programming error, not
    /// something move generation can produce.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of bounds");
        Self { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Steps by a signed offset, `None` when the target leaves the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub(crate) fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }
}

impl fmt::Display for Square {
    /// Algebraic name, e.g. `e4`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + self.row) as char;
        write!(f, "{}{}", file, rank)
    }
}
