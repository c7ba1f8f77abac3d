//! Exhaustive minimax over the full game tree. Values are from X's side:
//! X maximises, O minimises. No pruning or caching; the 3x3 tree is small
//! enough to walk on every call.

use super::board::{actions, player, terminal, utility};
use super::types::{Action, Board, Player};

fn successor(board: &Board, action: Action) -> Board {
    board.with_mark(action, player(board).to_mark())
}

/// Best outcome X can force from `board` when O replies optimally.
pub fn max_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }

    let mut value = i32::MIN;
    for action in actions(board) {
        value = value.max(min_value(&successor(board, action)));
    }
    value
}

/// Best outcome O can force from `board` when X replies optimally.
pub fn min_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }

    let mut value = i32::MAX;
    for action in actions(board) {
        value = value.min(max_value(&successor(board, action)));
    }
    value
}

/// Optimal action for the player to move, or `None` once the game is over.
///
/// Actions are tried in row-major order and the best is only replaced by a
/// strictly better one, so among equally good moves the first in row-major
/// order is returned.
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        return None;
    }

    let maximizing = player(board) == Player::X;
    let mut best: Option<(Action, i32)> = None;

    for action in actions(board) {
        let next = successor(board, action);
        let score = if maximizing {
            min_value(&next)
        } else {
            max_value(&next)
        };

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((action, score));
        }
    }

    best.map(|(action, _)| action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{initial_state, result};
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(max_value(&initial_state()), 0);
    }

    #[test]
    fn test_minimax_on_initial_state_returns_move() {
        // Every opening is a draw, so the first cell in row-major order wins the tie.
        assert_eq!(minimax(&initial_state()), Some(Action::new(0, 0)));
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        let mut board = initial_state();
        while let Some(action) = minimax(&board) {
            board = result(&board, action).unwrap();
        }
        assert!(terminal(&board));
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let full = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(minimax(&won), None);
        assert_eq!(minimax(&full), None);
    }

    #[test]
    fn test_x_completes_top_row() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(player(&board), Player::X);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
        assert_eq!(max_value(&board), 1);
    }

    #[test]
    fn test_o_takes_win_over_block() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
        assert_eq!(player(&board), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(1, 2)));
        assert_eq!(min_value(&board), -1);
    }

    #[test]
    fn test_o_blocks_forced_loss() {
        let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        assert_eq!(player(&board), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_edge_reply_to_corner_loses() {
        // Answering a corner with the centre holds; the adjacent edge lets X fork.
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        assert_eq!(max_value(&board), 0);
        let fork = Board::from_rows([[X, O, E], [E, E, E], [E, E, E]]);
        assert_eq!(max_value(&fork), 1);
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let copy = board;
        let _ = minimax(&board);
        assert_eq!(board, copy);
    }
}
