use std::fmt;

use super::types::Mark;

/// Why a move was refused. A refused move never changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    NotYourTurn { to_move: Mark },
    NotComputerTurn,
    GameNotInProgress,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfRange { index } => write!(f, "Cell {} is off the board", index),
            IllegalMove::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            IllegalMove::NotYourTurn { to_move } => {
                write!(f, "Not your turn, {} is to move", to_move)
            }
            IllegalMove::NotComputerTurn => write!(f, "It is not the computer's turn"),
            IllegalMove::GameNotInProgress => write!(f, "Game is not in progress"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    IllegalMove(IllegalMove),
    /// The bot was asked to move on a full board.
    NoLegalMoves,
    /// `restart` before any game was set up.
    NotStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(reason) => write!(f, "Illegal move: {}", reason),
            GameError::NoLegalMoves => write!(f, "No legal moves left on the board"),
            GameError::NotStarted => write!(f, "No game has been started yet"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<IllegalMove> for GameError {
    fn from(reason: IllegalMove) -> Self {
        GameError::IllegalMove(reason)
    }
}
