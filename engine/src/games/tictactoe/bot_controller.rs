use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::{actions, terminal};
use super::minimax::minimax;
use super::types::{Action, Board};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Random,
    Minimax,
}

pub fn calculate_move(bot_type: BotType, board: &Board, rng: &mut SessionRng) -> Option<Action> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => minimax(board),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Action> {
    if terminal(board) {
        return None;
    }
    let available_moves: Vec<Action> = actions(board).into_iter().collect();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}
