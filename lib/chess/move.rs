use crate::chess::{File, Promotion, Square};
use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}{_2}")]
pub struct Move(pub Square, pub Square, pub Promotion);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Promotion`] specifier.
    pub fn promotion(&self) -> Promotion {
        self.2
    }

    /// Whether this move goes from `whence` to `whither`, regardless of promotion.
    pub fn connects(&self, whence: Square, whither: Square) -> bool {
        self.0 == whence && self.1 == whither
    }
}

/// The reason why the string is not a valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        let j = s.char_indices().nth(4).map_or_else(|| s.len(), |(i, _)| i);

        let whence = s[..i].parse().map_err(|_| ParseMoveError)?;
        let whither = s[i..j].parse().map_err(|_| ParseMoveError)?;
        let promotion = match &s[j..] {
            "" => Promotion::None,
            "n" => Promotion::Knight,
            "b" => Promotion::Bishop,
            "r" => Promotion::Rook,
            "q" => Promotion::Queen,
            _ => return Err(ParseMoveError),
        };

        Ok(Move(whence, whither, promotion))
    }
}

#[doc(hidden)]
impl From<&sm::Move> for Move {
    fn from(m: &sm::Move) -> Self {
        match *m {
            sm::Move::Normal {
                from,
                to,
                promotion,
                ..
            } => Move(from.into(), to.into(), promotion.into()),

            sm::Move::EnPassant { from, to } => Move(from.into(), to.into(), Promotion::None),

            // The king lands two files away from where it started.
            sm::Move::Castle { king, rook } => {
                let file = if rook.file() > king.file() {
                    File::G
                } else {
                    File::C
                };

                let king = Square::from(king);
                Move(king, Square::new(file, king.rank()), Promotion::None)
            }

            ref v => panic!("unexpected {v:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_for_invalid_promotion(
        a: Square,
        b: Square,
        #[filter(!["", "n", "b", "r", "q"].contains(&#p.as_str()))] p: String,
    ) {
        assert_eq!([a.to_string(), b.to_string(), p].concat().parse::<Move>(), Err(ParseMoveError));
    }

    #[proptest]
    fn move_connects_its_squares_regardless_of_promotion(m: Move) {
        assert!(m.connects(m.whence(), m.whither()));
        assert!(!m.connects(m.whither(), m.whence()));
    }

    #[test]
    fn castling_is_converted_to_the_king_move() {
        let castle = sm::Move::Castle {
            king: sm::Square::E1,
            rook: sm::Square::H1,
        };

        assert_eq!(Move::from(&castle).to_string(), "e1g1");

        let castle = sm::Move::Castle {
            king: sm::Square::E8,
            rook: sm::Square::A8,
        };

        assert_eq!(Move::from(&castle).to_string(), "e8c8");
    }
}
