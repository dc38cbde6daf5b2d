//! The rules-level model: pieces, the board, and validated actions.

pub mod action;
pub mod board;
pub mod piece;
