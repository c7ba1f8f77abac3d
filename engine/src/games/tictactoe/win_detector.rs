use super::types::{Action, BOARD_SIZE, Board, Mark, Player, WinningLine};

const fn line(cells: [(usize, usize); BOARD_SIZE]) -> [Action; BOARD_SIZE] {
    [
        Action { row: cells[0].0, col: cells[0].1 },
        Action { row: cells[1].0, col: cells[1].1 },
        Action { row: cells[2].0, col: cells[2].1 },
    ]
}

/// Rows, then columns, then the main and anti-diagonal.
const LINES: [[Action; BOARD_SIZE]; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

fn owner(mark: Mark) -> Option<Player> {
    match mark {
        Mark::X => Some(Player::X),
        Mark::O => Some(Player::O),
        Mark::Empty => None,
    }
}

/// First completed line in scan order, if any.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|cells| {
        let [a, b, c] = *cells;
        let mark = board.cell(a.row, a.col)?;
        let player = owner(mark)?;
        if board.cell(b.row, b.col) == Some(mark) && board.cell(c.row, c.col) == Some(mark) {
            Some(WinningLine {
                player,
                cells: *cells,
            })
        } else {
            None
        }
    })
}

pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&Board::default()), None);
    }

    #[test]
    fn test_top_row() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.cells, [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)]);
    }

    #[test]
    fn test_middle_column() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player, Player::O);
        assert_eq!(line.cells, [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)]);
    }

    #[test]
    fn test_main_diagonal() {
        let board = Board::from_rows([[O, X, X], [X, O, E], [E, E, O]]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = Board::from_rows([[O, O, X], [E, X, E], [X, E, E]]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.cells, [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)]);
    }

    #[test]
    fn test_two_lines_same_player_reports_first_scanned() {
        let board = Board::from_rows([[X, X, X], [O, X, O], [O, O, X]]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.cells[0], Action::new(0, 0));
        assert_eq!(line.cells[2], Action::new(0, 2));
    }

    #[test]
    fn test_incomplete_lines() {
        let board = Board::from_rows([[X, X, O], [O, O, X], [X, O, X]]);
        assert_eq!(winner(&board), None);
    }
}
