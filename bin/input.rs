use derive_more::{Display, Error};
use lib::chess::Square;
use lib::game::{Button, Event, Key, Mouse};

/// The reason why parsing a line of input failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseEventError {
    #[display(fmt = "expected `click <x> <y> [left|middle|right]`")]
    InvalidClick,
    #[display(fmt = "expected `move <from> <to>`")]
    InvalidMove,
}

/// Parses a line of input into [`Event`]s.
///
/// The line is split into words, each of which is either a command or a
/// sequence of key presses, one per character.
///
/// ```text
/// <line>    ::= {<word>}
/// <word>    ::= click <x> <y> [<button>] | move <square> <square>
///             | esc | escape | flip | ctrl+f | quit | ctrl+c | <keys>
/// <button>  ::= left | middle | right
/// ```
pub fn parse(line: &str) -> Result<Vec<Event>, ParseEventError> {
    let mut words = line.split_whitespace().peekable();
    let mut events = Vec::new();

    while let Some(word) = words.next() {
        match word {
            "click" => {
                let mut coord = || words.next().and_then(|w| w.parse::<u16>().ok());
                let (x, y) = coord().zip(coord()).ok_or(ParseEventError::InvalidClick)?;

                let button = match words.peek().copied() {
                    Some("left") => Some(Button::Left),
                    Some("middle") => Some(Button::Middle),
                    Some("right") => Some(Button::Right),
                    _ => None,
                };

                if button.is_some() {
                    words.next();
                }

                let button = button.unwrap_or(Button::Left);
                events.push(Mouse { button, x, y }.into());
            }

            "move" => {
                let mut square = || words.next().and_then(|w| w.parse::<Square>().ok());
                let (from, to) = square().zip(square()).ok_or(ParseEventError::InvalidMove)?;
                events.push(Event::Move { from, to });
            }

            "esc" | "escape" => events.push(Key::Escape.into()),
            "flip" | "ctrl+f" => events.push(Key::Ctrl('f').into()),
            "quit" | "ctrl+c" => events.push(Key::Ctrl('c').into()),
            keys => events.extend(keys.chars().map(|c| Event::from(Key::Char(c)))),
        }
    }

    Ok(events)
}
