use crate::chess::Square;
use derive_more::{Display, From};

/// A mouse button.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Button {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "middle")]
    Middle,
    #[display(fmt = "right")]
    Right,
}

/// A mouse press at a terminal cell.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{button} click at ({x}, {y})")]
pub struct Mouse {
    pub button: Button,
    pub x: u16,
    pub y: u16,
}

/// A key press.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Key {
    #[display(fmt = "{_0}")]
    Char(char),
    #[display(fmt = "ctrl+{_0}")]
    Ctrl(char),
    #[display(fmt = "esc")]
    Escape,
}

/// An input to the [`Game`][`crate::game::Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Event {
    #[display(fmt = "{_0}")]
    Mouse(Mouse),

    #[display(fmt = "{_0}")]
    Key(Key),

    /// Moves a piece on behalf of the user.
    #[display(fmt = "move {from} {to}")]
    #[from(ignore)]
    Move { from: Square, to: Square },
}
