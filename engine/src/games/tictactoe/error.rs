use super::types::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeError {
    /// The coordinate is off the board or the cell is already marked.
    InvalidAction { row: usize, col: usize },
}

impl TicTacToeError {
    pub fn invalid_action(action: Action) -> Self {
        TicTacToeError::InvalidAction {
            row: action.row,
            col: action.col,
        }
    }
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::InvalidAction { row, col } => {
                write!(f, "Invalid action: ({}, {}) is not an empty cell", row, col)
            }
        }
    }
}

impl std::error::Error for TicTacToeError {}
