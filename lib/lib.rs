/// Chess domain types.
pub mod chess;
/// Presentation of the chess board as text.
pub mod board;
/// The interactive game.
pub mod game;
