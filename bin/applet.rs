use anyhow::Error as Anyhow;
use clap::{Args, Subcommand};
use derive_more::From;
use lib::game::Game;

mod play;
mod show;

/// Options shared by applets that display a board.
#[derive(Debug, Default, Clone, Eq, PartialEq, Args)]
pub struct Board {
    /// The starting position in FEN, the standard starting position if omitted or invalid.
    #[clap(long)]
    fen: Option<String>,

    /// See the board from the black side.
    #[clap(short, long)]
    flipped: bool,

    /// Render without colors.
    #[clap(long)]
    plain: bool,
}

impl Board {
    /// A [`Game`] configured by these options.
    pub fn game(&self) -> Game {
        let mut game = match &self.fen {
            None => Game::new(),
            Some(fen) => Game::with_position(fen),
        };

        game.set_flipped(self.flipped);
        game
    }
}

#[derive(Debug, From, Subcommand)]
pub enum Applet {
    /// Play interactively, reading one command per line.
    Play(play::Play),
    /// Print the board and exit.
    Show(show::Show),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Show(a) => a.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::Color;

    #[test]
    fn board_defaults_to_the_starting_position() {
        let game = Board::default().game();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn board_can_start_from_any_position_and_orientation() {
        let board = Board {
            fen: Some("4k3/8/8/8/8/8/8/4K3 b - - 0 1".into()),
            flipped: true,
            plain: false,
        };

        let game = board.game();
        assert!(game.is_flipped());
        assert_eq!(game.position().turn(), Color::Black);
    }

    #[test]
    fn board_falls_back_to_the_starting_position() {
        let board = Board {
            fen: Some("not a position".into()),
            ..Board::default()
        };

        assert_eq!(board.game(), Game::new());
    }
}
