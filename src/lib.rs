//! Perfect-play tic-tac-toe
//!
//! This crate provides:
//! - A 3x3 board with win detection, move enumeration, and rendering
//! - Exhaustive minimax search returning the game value and the best move
//! - A self-play driver that opens randomly and then plays both sides optimally

pub mod board;
pub mod error;
pub mod lines;
pub mod search;
pub mod selfplay;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use lines::WINNING_LINES;
pub use search::minimax;
pub use selfplay::{play_from_opening, play_random_opening};
