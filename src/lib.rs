//! A minimal chess variant (king + rook + bishop per side) on a small square
//! board, with exhaustive two-player minimax search to a fixed ply horizon.
//!
//! The crate is the *engine*: board model, move legality, move enumeration,
//! payoff/terminal evaluation and the max/min recursion. Rendering and turn
//! loops live in `src/bin/` and only call through [`game::Game`].

pub mod core;
pub mod chess;
pub mod search;
pub mod game;
