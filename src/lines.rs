//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// The order is load-bearing: [`crate::Board::winner`] reports the owner of
/// the first fully-owned line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Owner of a single line: the player whose mark fills all three cells.
pub(crate) fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
    let first = cells[line[0]];
    if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
        first.to_player()
    } else {
        None
    }
}
