use crate::chess::{File, Rank, Square};

/// Number of rows and columns on the board.
pub const SIZE: u8 = 8;

/// Terminal columns to the left of the board, taken by the rank labels.
pub const MARGIN_LEFT: u16 = 3;

/// Terminal lines above the board, taken by the top border.
pub const MARGIN_TOP: u16 = 1;

/// Terminal columns taken by a cell, including its left border.
pub const CELL_WIDTH: u16 = 4;

/// Terminal lines taken by a cell, including its bottom border.
pub const CELL_HEIGHT: u16 = 2;

/// The [`Square`] displayed at the given row and column of the board.
///
/// Row 0 holds the eighth rank and column 0 the a-file, unless the board is
/// `flipped`, in which case row 0 holds the first rank and column 0 the h-file.
///
/// # Panics
///
/// Panics if `row` or `col` is not in the range (0..=7).
pub fn square_at(row: u8, col: u8, flipped: bool) -> Square {
    let (file, rank) = (File::from_index(col), Rank::from_index(row).flip());

    if flipped {
        Square::new(file.mirror(), rank.flip())
    } else {
        Square::new(file, rank)
    }
}

/// The [`Square`] under the terminal cell at column `x` and line `y`,
/// if it lies within the board.
pub fn cell_at(x: u16, y: u16, flipped: bool) -> Option<Square> {
    let col = x.checked_sub(MARGIN_LEFT)? / CELL_WIDTH;
    let row = y.checked_sub(MARGIN_TOP)? / CELL_HEIGHT;

    if col < SIZE.into() && row < SIZE.into() {
        Some(square_at(row as u8, col as u8, flipped))
    } else {
        None
    }
}
