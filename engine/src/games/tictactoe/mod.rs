mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, Cell};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, SearchResult, WIN_SCORE, calculate_minimax_move,
    calculate_move, calculate_random_move, search,
};
pub use error::{GameError, IllegalMove};
pub use game_state::TicTacToeGameState;
pub use session::GameSession;
pub use settings::{SessionSettings, get_settings_manager, get_settings_path};
pub use types::{Difficulty, GameOutcome, GameSetup, Mark, SessionPhase, Turn};
pub use win_detector::{WIN_LINES, WinLine, check_win, check_win_with_line};
