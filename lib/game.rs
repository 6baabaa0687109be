use crate::board::{cell_at, find_move, moves_from, View};
use crate::chess::{File, Move, Position, Rank, Square};
use tracing::{debug, instrument, warn};

mod command;
mod event;

pub use command::*;
pub use event::*;

/// The state of an interactive game of chess.
///
/// Tracks the position, its legal moves, the selected square, and the subset
/// of legal moves for the piece on the selected square.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    position: Position,
    moves: Vec<Move>,
    piece_moves: Vec<Move>,
    selected: Option<Square>,
    buffer: Option<File>,
    flipped: bool,
}

impl From<Position> for Game {
    fn from(position: Position) -> Self {
        Game {
            moves: position.moves(),
            piece_moves: Vec::new(),
            selected: None,
            buffer: None,
            flipped: false,
            position,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game from the starting position.
    pub fn new() -> Self {
        Position::default().into()
    }

    /// A game from the position in [FEN], or the starting position if `fen` is invalid.
    ///
    /// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    #[instrument(level = "debug")]
    pub fn with_position(fen: &str) -> Self {
        match fen.parse::<Position>() {
            Ok(pos) => pos.into(),
            Err(e) => {
                warn!("{e}, falling back to the starting position");
                Game::new()
            }
        }
    }

    /// The current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The current position in [FEN].
    ///
    /// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn fen(&self) -> String {
        self.position.to_string()
    }

    /// All legal moves in the current position.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The legal moves of the piece on the selected square.
    pub fn piece_moves(&self) -> &[Move] {
        &self.piece_moves
    }

    /// The selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// The file typed so far, waiting for a rank.
    pub fn buffered(&self) -> Option<File> {
        self.buffer
    }

    /// Whether the board is seen from the black side.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Sets whether the board is seen from the black side.
    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    /// Turns the board around.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// The board as it should be displayed.
    pub fn view(&self) -> View<'_> {
        View::new(
            &self.position,
            self.selected,
            &self.piece_moves,
            self.flipped,
        )
    }

    /// Handles an [`Event`].
    #[instrument(level = "debug", skip(self), ret)]
    pub fn update(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Mouse(Mouse {
                button: Button::Left,
                x,
                y,
            }) => match cell_at(x, y, self.flipped) {
                Some(square) => self.select(square),
                None => self.deselect(),
            },

            Event::Mouse(_) => None,

            Event::Key(Key::Char('q') | Key::Ctrl('c')) => Some(Command::Quit),

            Event::Key(Key::Ctrl('f')) => {
                self.flip();
                None
            }

            Event::Key(Key::Escape) => self.deselect(),

            Event::Key(Key::Char(c @ 'a'..='h')) => {
                self.buffer = File::try_from(c).ok();
                None
            }

            Event::Key(Key::Char(c @ '1'..='8')) => {
                let file = self.buffer.take()?;
                let rank = Rank::try_from(c).ok()?;
                self.select(Square::new(file, rank))
            }

            Event::Key(_) => None,

            Event::Move { from, to } => {
                self.buffer = None;
                self.selected = Some(from);
                self.piece_moves = moves_from(&self.moves, self.selected);
                self.select(to)
            }
        }
    }

    /// Clears the selection and any file typed so far.
    pub fn deselect(&mut self) -> Option<Command> {
        self.selected = None;
        self.buffer = None;
        self.piece_moves.clear();
        None
    }

    /// Selects a [`Square`].
    ///
    /// If the piece on the previously selected square may move to `square`,
    /// the move is played. Otherwise `square` becomes the new selection.
    #[instrument(level = "debug", skip(self), fields(selected = ?self.selected), ret)]
    pub fn select(&mut self, square: Square) -> Option<Command> {
        if let Some(from) = self.selected {
            if let Some(m) = find_move(&self.piece_moves, from, square) {
                return Some(self.play(m));
            }
        }

        self.selected = Some(square);
        self.piece_moves = moves_from(&self.moves, self.selected);
        debug!(moves = self.piece_moves.len(), "selected {square}");

        None
    }

    fn play(&mut self, m: Move) -> Command {
        if let Err(e) = self.position.play(m) {
            panic!("{e}, although generated by the rules engine");
        }

        self.moves = self.position.moves();
        self.deselect();

        Command::Notify(Notification {
            from: m.whence(),
            to: m.whither(),
            turn: self.position.turn(),
            check: self.position.is_check(),
            checkmate: self.position.is_checkmate(),
        })
    }
}

// We provide a custom implementation of Arbitrary rather than deriving,
// so that the legal moves always agree with the position.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Game {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        any::<(Position, Option<Square>, Option<File>, bool)>()
            .prop_map(|(pos, selected, buffer, flipped)| {
                let mut game = Game::from(pos);
                game.selected = selected;
                game.piece_moves = moves_from(&game.moves, selected);
                game.buffer = buffer;
                game.flipped = flipped;
                game
            })
            .boxed()
    }
}
