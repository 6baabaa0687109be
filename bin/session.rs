use crate::{input, io::Terminal};
use lib::game::{Command, Game};
use std::io::{self, Read, Write};
use tracing::{info, instrument, warn};

/// Drives a [`Game`] from lines of input, one event at a time.
#[derive(Debug)]
pub struct Session<W: Write, R: Read> {
    io: Terminal<W, R>,
    game: Game,
    plain: bool,
}

impl<W: Write, R: Read> Session<W, R> {
    pub fn new(io: Terminal<W, R>, game: Game, plain: bool) -> Self {
        Session { io, game, plain }
    }

    fn draw(&mut self) -> io::Result<()> {
        let view = self.game.view();
        match self.plain {
            false => self.io.draw(view),
            true => self.io.draw(view.plain()),
        }
    }

    /// Runs until the user quits or the input is exhausted, returning the final state of the [`Game`].
    #[instrument(level = "debug", skip(self), err)]
    pub fn run(mut self) -> io::Result<Game> {
        self.draw()?;

        while let Some(line) = self.io.recv()? {
            let events = match input::parse(&line) {
                Ok(events) => events,
                Err(e) => {
                    warn!(%line, "{e}");
                    self.io.send(e)?;
                    continue;
                }
            };

            for event in events {
                match self.game.update(event) {
                    None => continue,
                    Some(Command::Quit) => return Ok(self.game),
                    Some(Command::Notify(n)) => {
                        info!(notification = %n, "move played");
                        self.io.send(n)?;
                    }
                }
            }

            self.draw()?;
        }

        Ok(self.game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::Color;
    use std::{io::empty, str};

    fn run(game: Game, input: &str) -> (Game, String) {
        let mut output = Vec::new();
        let io = Terminal::new(&mut output, input.as_bytes());
        let game = Session::new(io, game, true).run().unwrap();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn board_is_drawn_before_reading_input() {
        let mut output = Vec::new();
        let io = Terminal::new(&mut output, empty());
        Session::new(io, Game::new(), true).run().unwrap();

        let expected = format!("{}\n", Game::new().view().plain());
        assert_eq!(str::from_utf8(&output).unwrap(), expected);
    }

    #[test]
    fn moves_are_notified_after_the_board_is_updated() {
        let (game, output) = run(Game::new(), "e2\ne4\n");

        assert_eq!(game.position().turn(), Color::Black);
        assert_eq!(game.selected(), None);

        let notification = output.find("e2e4, black to move").unwrap();
        let before = output[..notification].matches('┌').count();
        assert_eq!(before, 2);
        assert_eq!(output.matches('┌').count(), 3);
    }

    #[test]
    fn session_ends_on_quit() {
        let (game, output) = run(Game::new(), "quit\ne2e4\n");
        assert_eq!(game, Game::new());
        assert_eq!(output.matches('┌').count(), 1);
    }

    #[test]
    fn q_also_quits() {
        let (game, _) = run(Game::new(), "move e2 e4 q move e7 e5\n");
        assert_eq!(game.position().turn(), Color::Black);
    }

    #[test]
    fn invalid_input_is_reported_and_skipped() {
        let (game, output) = run(Game::new(), "click 1\nmove g1 f3\n");
        assert!(output.contains("expected `click <x> <y> [left|middle|right]`"));
        assert!(output.contains("g1f3, black to move"));
        assert_eq!(game.position().turn(), Color::Black);
    }

    #[test]
    fn fools_mate_is_announced() {
        let (game, output) = run(Game::new(), "f2f3 e7e5\ng2g4\nd8h4\n");
        assert!(output.contains("d8h4, white to move, checkmate"));
        assert!(game.position().is_checkmate());
    }
}
