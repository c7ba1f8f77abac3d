use std::collections::BTreeSet;

use super::error::TicTacToeError;
use super::types::{Action, Board, Mark, Player};
use super::win_detector::winner;

pub fn initial_state() -> Board {
    Board::default()
}

/// X moves whenever it does not lead on marks, so the turn always follows
/// from the board contents.
pub fn player(board: &Board) -> Player {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Player::X
    } else {
        Player::O
    }
}

/// All empty cells. Iteration order is row-major.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    let mut available = BTreeSet::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                available.insert(Action::new(row, col));
            }
        }
    }
    available
}

pub fn is_valid_action(board: &Board, action: Action) -> bool {
    board.cell(action.row, action.col) == Some(Mark::Empty)
}

/// Returns the board after the player to move on `board` marks `action`.
/// `board` itself is left as it was.
pub fn result(board: &Board, action: Action) -> Result<Board, TicTacToeError> {
    if !is_valid_action(board, action) {
        return Err(TicTacToeError::invalid_action(action));
    }
    Ok(board.with_mark(action, player(board).to_mark()))
}

pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.count(Mark::Empty) == 0
}

/// 1 for an X win, -1 for an O win, 0 for anything else.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
