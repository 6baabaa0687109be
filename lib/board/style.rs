use crate::chess::File;
use colored::{ColoredString, Colorize};
use std::fmt::Display;

/// Emphasis applied to parts of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Emphasis {
    /// The square currently selected.
    Selected,
    /// The king of the side to move while in check.
    Danger,
    /// A square the selected piece may move to.
    Destination,
    /// Rank and file labels.
    Faint,
}

impl Emphasis {
    /// Colors `content` with this emphasis, unless `plain`.
    pub fn paint<T: Display>(self, content: T, plain: bool) -> ColoredString {
        let content = content.to_string();
        let content = content.as_str();

        match (plain, self) {
            (true, _) => content.normal(),
            (false, Emphasis::Selected) => content.cyan(),
            (false, Emphasis::Danger) => content.red(),
            (false, Emphasis::Destination) => content.magenta(),
            (false, Emphasis::Faint) => content.dimmed(),
        }
    }
}

/// The vertical border between cells.
pub const VERTICAL: &str = "│";

fn border(left: &str, joint: &str, right: &str) -> String {
    let cells = vec!["───"; 8].join(joint);
    format!("   {left}{cells}{right}\n")
}

/// The border above the first row.
pub fn top() -> String {
    border("┌", "┬", "┐")
}

/// The border between two rows.
pub fn middle() -> String {
    border("├", "┼", "┤")
}

/// The border below the last row.
pub fn bottom() -> String {
    border("└", "┴", "┘")
}

/// The file labels below the board, mirrored if `flipped`.
pub fn file_labels(flipped: bool) -> String {
    let labels: Vec<_> = match flipped {
        false => File::iter().map(|f| f.to_string().to_uppercase()).collect(),
        true => File::iter().rev().map(|f| f.to_string().to_uppercase()).collect(),
    };

    format!("     {}", labels.join("   "))
}
