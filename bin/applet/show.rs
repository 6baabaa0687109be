use super::Board;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::{stdout, Write};
use tracing::instrument;

/// Prints a board.
#[derive(Debug, Default, Parser)]
pub struct Show {
    #[clap(flatten)]
    board: Board,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = self.board.game();
        let view = game.view();

        let mut out = stdout().lock();
        match self.board.plain {
            false => writeln!(out, "{view}")?,
            true => writeln!(out, "{}", view.plain())?,
        }

        Ok(())
    }
}
