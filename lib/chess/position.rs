use crate::chess::{Color, File, Move, Piece, Rank, Square};
use derive_more::{DebugCustom, Display, Error, From};
use shakmaty as sm;
use std::str::FromStr;

#[cfg(test)]
use proptest::{prelude::*, sample::Selector};

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse FEN")]
    InvalidFen(sm::fen::ParseFenError),
    #[display(fmt = "the position is not legal")]
    IllegalPosition,
}

/// The current position on the chess board.
///
/// This type guarantees that it only holds valid positions.
#[derive(DebugCustom, Display, Default, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Position({self})")]
#[display(
    fmt = "{}",
    "sm::fen::Fen::from_position(self.0.clone(), sm::EnPassantMode::Legal)"
)]
pub struct Position(
    #[cfg_attr(test, strategy((0..64usize, any::<Selector>()).prop_map(|(moves, selector)| {
        let mut chess = sm::Chess::default();
        for _ in 0..moves {
            match selector.try_select(sm::Position::legal_moves(&chess)) {
                Some(m) => sm::Position::play_unchecked(&mut chess, &m),
                None => break,
            }
        }
        chess
    })))]
    sm::Chess,
);

impl Position {
    /// The side to move.
    pub fn turn(&self) -> Color {
        sm::Position::turn(&self.0).into()
    }

    /// Whether the side to move is in [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    pub fn is_check(&self) -> bool {
        sm::Position::is_check(&self.0)
    }

    /// Whether the side to move has been [checkmated].
    ///
    /// [checkmated]: https://www.chessprogramming.org/Checkmate
    pub fn is_checkmate(&self) -> bool {
        sm::Position::is_checkmate(&self.0)
    }

    /// The legal moves of the side to move, in the order the rules engine generates them.
    pub fn moves(&self) -> Vec<Move> {
        sm::Position::legal_moves(&self.0)
            .iter()
            .map(Move::from)
            .collect()
    }

    /// The [`Piece`] on the given [`Square`], if any.
    pub fn piece_on(&self, s: Square) -> Option<Piece> {
        sm::Position::board(&self.0)
            .piece_at(s.into())
            .map(Piece::from)
    }

    /// The piece placement as rows of cells, starting from the eighth rank
    /// and going from the a-file to the h-file within each row.
    pub fn grid(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];

        for (row, cells) in grid.iter_mut().enumerate() {
            let rank = Rank::from_index(7 - row as u8);
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.piece_on(Square::new(File::from_index(col as u8), rank));
            }
        }

        grid
    }

    /// Play a [`Move`] if legal in this position.
    pub fn play(&mut self, m: Move) -> Result<(), IllegalMove> {
        let legal = sm::Position::legal_moves(&self.0);
        let m = legal
            .iter()
            .find(|&lm| Move::from(lm) == m)
            .ok_or(IllegalMove(m))?;

        sm::Position::play_unchecked(&mut self.0, m);
        Ok(())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fen: sm::fen::Fen = s.trim().parse()?;
        let chess = fen
            .into_position(sm::CastlingMode::Standard)
            .map_err(|_| ParsePositionError::IllegalPosition)?;

        Ok(Position(chess))
    }
}
