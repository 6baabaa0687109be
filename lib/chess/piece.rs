use crate::chess::{Color, Role};
use derive_more::{Constructor, Display};
use shakmaty as sm;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "self.glyph()")]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.1
    }

    /// Whether this piece is a king.
    pub fn is_king(&self) -> bool {
        self.1 == Role::King
    }

    /// The Unicode glyph of this piece.
    ///
    /// The glyphs are swapped with respect to their Unicode names, so that
    /// white pieces look white on a dark terminal.
    pub fn glyph(&self) -> &'static str {
        use Color::*;
        use Role::*;
        match (self.0, self.1) {
            (White, Pawn) => "♟",
            (White, Knight) => "♞",
            (White, Bishop) => "♝",
            (White, Rook) => "♜",
            (White, Queen) => "♛",
            (White, King) => "♚",
            (Black, Pawn) => "♙",
            (Black, Knight) => "♘",
            (Black, Bishop) => "♗",
            (Black, Rook) => "♖",
            (Black, Queen) => "♕",
            (Black, King) => "♔",
        }
    }
}

#[doc(hidden)]
impl From<sm::Piece> for Piece {
    fn from(p: sm::Piece) -> Self {
        Piece(p.color.into(), p.role.into())
    }
}

#[doc(hidden)]
impl From<Piece> for sm::Piece {
    fn from(p: Piece) -> Self {
        sm::Piece {
            color: p.0.into(),
            role: p.1.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_color(c: Color, r: Role) {
        assert_eq!(Piece::new(c, r).color(), c);
    }

    #[proptest]
    fn piece_has_a_role(c: Color, r: Role) {
        assert_eq!(Piece::new(c, r).role(), r);
    }

    #[proptest]
    fn only_kings_are_kings(c: Color, r: Role) {
        assert_eq!(Piece::new(c, r).is_king(), r == Role::King);
    }

    #[proptest]
    fn every_piece_has_a_distinct_glyph(a: Piece, b: Piece) {
        assert_eq!(a.glyph() == b.glyph(), a == b);
    }

    #[proptest]
    fn piece_is_printed_as_its_glyph(p: Piece) {
        assert_eq!(p.to_string(), p.glyph());
    }

    #[proptest]
    fn piece_has_an_equivalent_shakmaty_representation(p: Piece) {
        assert_eq!(Piece::from(sm::Piece::from(p)), p);
    }
}
