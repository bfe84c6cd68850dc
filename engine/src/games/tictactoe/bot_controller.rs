use crate::games::SessionRng;
use super::board::Board;
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Position handed to the bot. The side to move is the one the bot plays.
#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self::new(*state.board(), state.current_mark())
    }
}

/// Score of a searched position from the computer's point of view. `index`
/// is `None` on terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub index: Option<usize>,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self { score, index: None }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, GameError> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMoves);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Full-depth minimax for the side to move. Ties go to the lowest index.
pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, GameError> {
    let bot_mark = input.current_mark;
    let mut board = input.board;

    let mut best: Option<(i32, usize)> = None;

    for index in input.board.available_moves() {
        board.place(index, bot_mark);
        let score = minimax(&mut board, bot_mark.opponent(), bot_mark).score;
        board.clear(index);

        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, index));
        }
    }

    best.map(|(_, index)| index).ok_or(GameError::NoLegalMoves)
}

/// Searches `board` with `to_move` on turn, scoring for `computer`. Works on a
/// copy; the caller's board is left as it was.
pub fn search(board: &Board, to_move: Mark, computer: Mark) -> SearchResult {
    let mut scratch = *board;
    minimax(&mut scratch, to_move, computer)
}

fn minimax(board: &mut Board, to_move: Mark, computer: Mark) -> SearchResult {
    let human = computer.opponent();

    if board.evaluate(computer).is_some() {
        return SearchResult::terminal(WIN_SCORE);
    }
    if board.evaluate(human).is_some() {
        return SearchResult::terminal(LOSS_SCORE);
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return SearchResult::terminal(DRAW_SCORE);
    }

    let is_maximizing = to_move == computer;
    let mut best = SearchResult {
        score: if is_maximizing { i32::MIN } else { i32::MAX },
        index: None,
    };

    for index in moves {
        board.place(index, to_move);
        let score = minimax(board, to_move.opponent(), computer).score;
        board.clear(index);

        let improves = if is_maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                score,
                index: Some(index),
            };
        }
    }

    best
}
