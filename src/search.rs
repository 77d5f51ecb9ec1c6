//! Adversarial search: full-depth minimax with alpha-beta pruning
//!
//! The game tree is at most 9 plies deep, so the search always runs to
//! completion and returns exact game-theoretic values. Pruning only skips
//! subtrees that cannot affect the decision; the values returned by
//! [`max_value`] and [`min_value`] are identical to exhaustive minimax.

use crate::board::{Action, Board, Player};

/// Values strictly outside the -1..=1 utility range, used to seed the
/// alpha-beta bounds and the running extremum. Never involved in
/// arithmetic, so the integer limits are safe stand-ins for infinity.
const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

/// The game-theoretically optimal action for the player to move.
///
/// Returns `Ok(None)` exactly when the board is terminal. Otherwise X picks
/// the action maximizing the minimax value and O the one minimizing it,
/// scanning actions in row-major order and keeping the first action that
/// strictly improves on the best value seen so far — on ties the earlier
/// action wins.
///
/// # Errors
///
/// The only failure mode is [`Error::InvalidMove`] propagating from
/// [`Board::apply`]. Every action evaluated here comes from
/// [`Board::legal_actions`], so seeing that error means a caller bug, not a
/// game condition.
///
/// [`Error::InvalidMove`]: crate::Error::InvalidMove
pub fn optimal_action(board: &Board) -> Result<Option<Action>, crate::Error> {
    if board.is_terminal() {
        return Ok(None);
    }

    let mut best = None;
    match board.to_move() {
        Player::X => {
            let mut val = NEG_INF;
            for action in board.legal_actions() {
                let v = min_value(&board.apply(action)?, NEG_INF, POS_INF)?;
                if v > val {
                    val = v;
                    best = Some(action);
                }
            }
        }
        Player::O => {
            let mut val = POS_INF;
            for action in board.legal_actions() {
                let v = max_value(&board.apply(action)?, NEG_INF, POS_INF)?;
                if v < val {
                    val = v;
                    best = Some(action);
                }
            }
        }
    }

    Ok(best)
}

/// Minimax value of a board assuming the maximizer (X) is to move.
///
/// Explores actions in row-major order, tightening `alpha` as better values
/// are found and abandoning the remaining actions once `alpha >= beta`.
pub fn max_value(board: &Board, mut alpha: i32, beta: i32) -> Result<i32, crate::Error> {
    if board.is_terminal() {
        return Ok(board.utility());
    }

    let mut v = NEG_INF;
    for action in board.legal_actions() {
        v = v.max(min_value(&board.apply(action)?, alpha, beta)?);
        alpha = alpha.max(v);
        if alpha >= beta {
            break;
        }
    }

    Ok(v)
}

/// Minimax value of a board assuming the minimizer (O) is to move.
///
/// The dual of [`max_value`]: tightens `beta` and prunes once
/// `alpha >= beta`.
pub fn min_value(board: &Board, alpha: i32, mut beta: i32) -> Result<i32, crate::Error> {
    if board.is_terminal() {
        return Ok(board.utility());
    }

    let mut v = POS_INF;
    for action in board.legal_actions() {
        v = v.min(max_value(&board.apply(action)?, alpha, beta)?);
        beta = beta.min(v);
        if alpha >= beta {
            break;
        }
    }

    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_optimal_action() {
        let won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(optimal_action(&won).unwrap(), None);

        let drawn = Board::from_string("XOXXOXOXO").unwrap();
        assert_eq!(optimal_action(&drawn).unwrap(), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X completes the top row at (0, 2)
        let board = Board::from_string("XX..OO...").unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(optimal_action(&board).unwrap(), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O completes the left column at (0, 0)
        let board = Board::from_string(".XXOX.O..").unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(optimal_action(&board).unwrap(), Some(Action::new(0, 0)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X threatens (0, 2); every other O reply loses
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(optimal_action(&board).unwrap(), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_answers_corner_with_center() {
        // The only reply to a corner opening that does not lose
        let board = Board::from_string("X........").unwrap();
        assert_eq!(optimal_action(&board).unwrap(), Some(Action::new(1, 1)));
    }

    #[test]
    fn test_tie_break_keeps_first_action() {
        // X wins immediately at either (0, 2) or (2, 0); (0, 2) comes
        // first in row-major order and must be the one returned
        let board = Board::from_string("XX.XOO..O").unwrap();
        let wins = board.winning_actions(Player::X);
        assert_eq!(wins, vec![Action::new(0, 2), Action::new(2, 0)]);
        assert_eq!(optimal_action(&board).unwrap(), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_empty_board_is_drawn() {
        let value = max_value(&Board::new(), NEG_INF, POS_INF).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_value_of_won_positions() {
        let x_won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(max_value(&x_won, NEG_INF, POS_INF).unwrap(), 1);
        assert_eq!(min_value(&x_won, NEG_INF, POS_INF).unwrap(), 1);

        let o_won = Board::from_string("OOOXX.X..").unwrap();
        assert_eq!(max_value(&o_won, NEG_INF, POS_INF).unwrap(), -1);
    }

    #[test]
    fn test_forced_win_is_seen_from_a_distance() {
        // X threatens both (2, 2) and (2, 0) through the center; O can
        // only cover one, so the position is worth +1 with O to move
        let board = Board::from_string("XOX.X..O.").unwrap();
        assert_eq!(board.to_move(), Player::O);
        let value = min_value(&board, NEG_INF, POS_INF).unwrap();
        assert_eq!(value, 1);
    }
}
