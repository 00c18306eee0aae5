//! Self-play driver: random opening, then optimal play for both sides

use rand::Rng;

use crate::{
    board::{Board, Player},
    error::{Error, Result},
    search::minimax,
};

/// Play one full game from a fixed opening move.
///
/// The opening mark is placed for X (the maximizing player); the minimizing
/// player answers first and the sides then alternate, each playing the move
/// returned by [`minimax`]. The loop runs until the board is full — fullness,
/// not a decided winner, is the termination condition, so a won position
/// would keep being re-searched until the board fills.
///
/// Returns the board after the opening and after every subsequent move: 9
/// snapshots, each with one more mark than the last.
///
/// # Errors
///
/// Returns [`Error::InvalidMove`] if `opening` is out of range, and
/// [`Error::NoMoveAvailable`] if the search yields no move on a non-full
/// board (a decided position; unreachable when both sides play optimally).
pub fn play_from_opening(opening: usize) -> Result<Vec<Board>> {
    let mut board = Board::new();
    board.apply(opening, Player::X)?;

    let mut snapshots = vec![board];
    let mut maximizing = false;

    while !board.is_full() {
        let (_, best) = minimax(&board, maximizing);
        let mv = best.ok_or(Error::NoMoveAvailable)?;
        let player = if maximizing { Player::X } else { Player::O };
        board.apply(mv, player)?;
        maximizing = !maximizing;
        snapshots.push(board);
    }

    Ok(snapshots)
}

/// Play one full game from a uniformly random opening move.
pub fn play_random_opening<R: Rng>(rng: &mut R) -> Result<Vec<Board>> {
    play_from_opening(rng.random_range(0..9))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_game_from_center_fills_board() {
        let snapshots = play_from_opening(4).unwrap();

        assert_eq!(snapshots.len(), 9, "one snapshot per move");
        for (i, board) in snapshots.iter().enumerate() {
            assert_eq!(board.occupied_count(), i + 1);
        }
        assert!(snapshots.last().unwrap().is_full());
    }

    #[test]
    fn test_optimal_self_play_is_drawn() {
        let snapshots = play_from_opening(0).unwrap();
        for board in &snapshots {
            assert_eq!(
                board.winner(),
                None,
                "optimal self-play must never produce a winner:\n{board}"
            );
        }
    }

    #[test]
    fn test_opening_mark_is_x() {
        let snapshots = play_from_opening(7).unwrap();
        assert_eq!(snapshots[0].get(7), crate::Cell::X);
        assert_eq!(snapshots[0].occupied_count(), 1);
    }

    #[test]
    fn test_invalid_opening_is_rejected() {
        assert!(matches!(
            play_from_opening(9),
            Err(Error::InvalidMove { position: 9 })
        ));
    }

    #[test]
    fn test_random_opening_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let game1 = play_random_opening(&mut rng1).unwrap();
        let game2 = play_random_opening(&mut rng2).unwrap();
        assert_eq!(game1, game2);
    }
}
