use crate::chess::{Color, Square};
use derive_more::{Display, From};
use std::fmt::{self, Formatter};

/// Emitted once a move has been played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Notification {
    /// Where the piece moved from.
    pub from: Square,
    /// Where the piece moved to.
    pub to: Square,
    /// The side to move after the move.
    pub turn: Color,
    /// Whether the side to move is in check.
    pub check: bool,
    /// Whether the side to move has been checkmated.
    pub checkmate: bool,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}, {} to move", self.from, self.to, self.turn)?;

        if self.checkmate {
            f.write_str(", checkmate")
        } else if self.check {
            f.write_str(", check")
        } else {
            Ok(())
        }
    }
}

/// Something the [`Game`][`crate::game::Game`] asks of whoever drives it,
/// to be carried out after the state transition that produced it.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, From)]
pub enum Command {
    #[display(fmt = "{_0}")]
    Notify(Notification),

    #[display(fmt = "quit")]
    #[from(ignore)]
    Quit,
}
