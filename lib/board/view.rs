use crate::board::{bottom, file_labels, is_legal_destination, middle, square_at, top};
use crate::board::{Emphasis, SIZE, VERTICAL};
use crate::chess::{Move, Piece, Position, Square};
use std::fmt::{self, Display, Formatter};

/// A human readable chess board.
///
/// All pieces and empty squares are arranged in a grid. The selected square
/// is highlighted, as is the king of the side to move while in check. Squares
/// the selected piece may move to are highlighted too, with a dot if empty.
///
/// For example, if the pawn on e2 is selected, e3 and e4 are marked.
///
/// ```text
///    ┌───┬───┬───┬───┬───┬───┬───┬───┐
///  8 │ ♖ │ ♘ │ ♗ │ ♕ │ ♔ │ ♗ │ ♘ │ ♖ │
///    ├───┼───┼───┼───┼───┼───┼───┼───┤
///  7 │ ♙ │ ♙ │ ♙ │ ♙ │ ♙ │ ♙ │ ♙ │ ♙ │
///    ├───┼───┼───┼───┼───┼───┼───┼───┤
///  6 │   │   │   │   │   │   │   │   │
///    ├───┼───┼───┼───┼───┼───┼───┼───┤
///  5 │   │   │   │   │   │   │   │   │
///    ├───┼───┼───┼───┼───┼───┼───┼───┤
///  4 │   │   │   │   │ . │   │   │   │
///    ├───┼───┼───┼───┼───┼───┼───┼───┤
///  3 │   │   │   │   │ . │   │   │   │
///    ├───┼───┼───┼───┼───┼───┼───┼───┤
///  2 │ ♟ │ ♟ │ ♟ │ ♟ │ ♟ │ ♟ │ ♟ │ ♟ │
///    ├───┼───┼───┼───┼───┼───┼───┼───┤
///  1 │ ♜ │ ♞ │ ♝ │ ♛ │ ♚ │ ♝ │ ♞ │ ♜ │
///    └───┴───┴───┴───┴───┴───┴───┴───┘
///      A   B   C   D   E   F   G   H
/// ```
#[derive(Debug, Copy, Clone)]
pub struct View<'a> {
    position: &'a Position,
    selected: Option<Square>,
    destinations: &'a [Move],
    flipped: bool,
    plain: bool,
}

impl<'a> View<'a> {
    /// Constructs a [`View`] of `position`, where `destinations` are the moves of the selected piece.
    pub fn new(
        position: &'a Position,
        selected: Option<Square>,
        destinations: &'a [Move],
        flipped: bool,
    ) -> Self {
        View {
            position,
            selected,
            destinations,
            flipped,
            plain: false,
        }
    }

    /// Renders without escape sequences.
    pub fn plain(self) -> Self {
        View {
            plain: true,
            ..self
        }
    }

    fn cell(&self, square: Square, piece: Option<Piece>) -> (&'static str, Option<Emphasis>) {
        let glyph = piece.map_or(" ", |p| p.glyph());

        if is_legal_destination(self.destinations, square) {
            return (if piece.is_some() { glyph } else { "." }, Some(Emphasis::Destination));
        }

        let turn = self.position.turn();
        let in_danger = |p: Piece| p.is_king() && p.color() == turn && self.position.is_check();

        if self.selected == Some(square) {
            (glyph, Some(Emphasis::Selected))
        } else if piece.is_some_and(in_danger) {
            (glyph, Some(Emphasis::Danger))
        } else {
            (glyph, None)
        }
    }
}

impl<'a> Display for View<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.position.grid();

        f.write_str(&top())?;

        for r in 0..SIZE {
            let (mut row, rank) = match self.flipped {
                false => (grid[r as usize], SIZE - r),
                true => (grid[(SIZE - 1 - r) as usize], r + 1),
            };

            if self.flipped {
                row.reverse();
            }

            let label = format!(" {rank} ");
            write!(f, "{}{VERTICAL}", Emphasis::Faint.paint(label, self.plain))?;

            for (c, &piece) in (0..SIZE).zip(row.iter()) {
                match self.cell(square_at(r, c, self.flipped), piece) {
                    (glyph, None) => write!(f, " {glyph} {VERTICAL}")?,
                    (glyph, Some(e)) => write!(f, " {} {VERTICAL}", e.paint(glyph, self.plain))?,
                }
            }

            writeln!(f)?;

            if r != SIZE - 1 {
                f.write_str(&middle())?;
            }
        }

        f.write_str(&bottom())?;
        let labels = file_labels(self.flipped);
        write!(f, "{}", Emphasis::Faint.paint(labels, self.plain))
    }
}
