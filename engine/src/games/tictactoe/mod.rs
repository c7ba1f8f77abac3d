mod board;
mod bot_controller;
mod error;
mod minimax;
mod types;
mod win_detector;

pub use board::{actions, initial_state, is_valid_action, player, result, terminal, utility};
pub use bot_controller::{BotType, calculate_move};
pub use error::TicTacToeError;
pub use minimax::{max_value, min_value, minimax};
pub use types::{Action, BOARD_SIZE, Board, Mark, Player, WinningLine};
pub use win_detector::{winner, winning_line};
