pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::tictactoe::{
    Board, Difficulty, GameError, GameOutcome, GameSession, IllegalMove, Mark, SessionPhase,
    SessionSettings, Turn, WinLine,
};
