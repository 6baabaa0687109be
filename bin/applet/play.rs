use super::Board;
use crate::{io::Terminal, session::Session};
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::{stdin, stdout};
use tracing::{info, instrument};

/// An interactive game on the terminal.
#[derive(Debug, Default, Parser)]
pub struct Play {
    #[clap(flatten)]
    board: Board,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let io = Terminal::new(stdout(), stdin());
        let game = Session::new(io, self.board.game(), self.board.plain).run()?;
        info!(fen = %game.fen(), "game over");
        Ok(())
    }
}
