use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    Action, Board, BotType, Player, TicTacToeError, calculate_move, initial_state, player, result,
    terminal, utility, winning_line,
};
use tictactoe_engine::{log, log_debug};

use crate::selfplay_config::SelfPlayConfig;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub actions: Vec<Action>,
    pub final_board: Board,
    pub utility: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl MatchSummary {
    pub fn record(&mut self, utility: i32) {
        match utility {
            1 => self.x_wins += 1,
            -1 => self.o_wins += 1,
            _ => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

pub fn outcome_name(utility: i32) -> &'static str {
    match utility {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

pub fn play_game(
    player_x: BotType,
    player_o: BotType,
    rng: &mut SessionRng,
) -> Result<GameRecord, TicTacToeError> {
    let mut board = initial_state();
    let mut actions = Vec::new();

    while !terminal(&board) {
        let to_move = player(&board);
        let bot = match to_move {
            Player::X => player_x,
            Player::O => player_o,
        };
        let Some(action) = calculate_move(bot, &board, rng) else {
            break;
        };

        log_debug!("{:?} ({:?}) plays ({}, {})", to_move, bot, action.row, action.col);
        board = result(&board, action)?;
        actions.push(action);
    }

    Ok(GameRecord {
        actions,
        final_board: board,
        utility: utility(&board),
    })
}

pub fn run_matches(
    config: &SelfPlayConfig,
    rng: &mut SessionRng,
) -> Result<MatchSummary, TicTacToeError> {
    let mut summary = MatchSummary::default();

    for game in 1..=config.games {
        let record = play_game(config.player_x, config.player_o, rng)?;
        log!(
            "Game {}/{}: {} after {} moves",
            game,
            config.games,
            outcome_name(record.utility),
            record.actions.len()
        );
        if let Some(line) = winning_line(&record.final_board) {
            let cells: Vec<(usize, usize)> = line.cells.iter().map(|a| (a.row, a.col)).collect();
            log_debug!("Winning line for {:?}: {:?}", line.player, cells);
        }
        summary.record(record.utility);
    }

    Ok(summary)
}
