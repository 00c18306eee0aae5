//! Exhaustive minimax search over the 3x3 board

use crate::board::{Board, Player};

/// Compute the game-theoretic value of a position and the move achieving it.
///
/// `maximizing` selects the side to move: X maximizes (+1), O minimizes (-1).
/// The returned value is one of {+1, 0, -1}; the move is `None` on terminal
/// positions (a decided board, or a full board with no winner, whose value
/// falls through as 0 — the implicit draw).
///
/// Candidates are explored in ascending index order on an independent copy of
/// the board per branch. A reply scoring the current player's own value ends
/// the scan immediately: any winning move is optimal. Otherwise the first
/// candidate seeds the running best and later candidates replace it only on a
/// strictly better score, so ties keep the lower index.
///
/// Full brute-force enumeration; no pruning, no memoization. Bounded by the
/// 9-cell board, so every call terminates within 9 plies.
pub fn minimax(board: &Board, maximizing: bool) -> (i32, Option<usize>) {
    if let Some(winner) = board.winner() {
        return (winner.value(), None);
    }

    let player = if maximizing { Player::X } else { Player::O };
    let mut best: Option<(i32, usize)> = None;

    for mv in board.valid_moves() {
        let mut next = *board;
        next.apply(mv, player)
            .expect("moves from valid_moves() are always applicable");
        let (score, _) = minimax(&next, !maximizing);

        if score == player.value() {
            return (score, Some(mv));
        }

        match best {
            None => best = Some((score, mv)),
            Some((best_score, _)) => {
                let better = if maximizing {
                    score > best_score
                } else {
                    score < best_score
                };
                if better {
                    best = Some((score, mv));
                }
            }
        }
    }

    match best {
        Some((score, mv)) => (score, Some(mv)),
        None => (0, None),
    }
}
