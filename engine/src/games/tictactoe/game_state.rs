use super::board::Board;
use super::error::{GameError, IllegalMove};
use super::types::{GameOutcome, Mark};

/// Board plus turn order. X always opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    last_move: Option<(usize, Mark)>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<(usize, Mark)> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.last_move
            .map_or(GameOutcome::InProgress, |(_, mark)| self.board.outcome(mark))
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<GameOutcome, GameError> {
        if self.outcome().is_over() {
            return Err(IllegalMove::GameNotInProgress.into());
        }

        if mark != self.current_mark {
            return Err(IllegalMove::NotYourTurn {
                to_move: self.current_mark,
            }
            .into());
        }

        self.board = self.board.apply_move(index, mark)?;
        self.last_move = Some((index, mark));

        let outcome = self.board.outcome(mark);
        if !outcome.is_over() {
            self.current_mark = mark.opponent();
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::WinLine;

    #[test]
    fn test_turns_alternate_from_x() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.current_mark(), Mark::X);
        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.last_move(), Some((4, Mark::X)));
    }

    #[test]
    fn test_wrong_mark_is_rejected_without_change() {
        let mut state = TicTacToeGameState::new();
        let before = state.clone();
        assert_eq!(
            state.place_mark(Mark::O, 0),
            Err(GameError::IllegalMove(IllegalMove::NotYourTurn { to_move: Mark::X }))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Mark::X, 0).unwrap();
        let before = state.clone();
        assert_eq!(
            state.place_mark(Mark::O, 0),
            Err(GameError::IllegalMove(IllegalMove::CellOccupied { index: 0 }))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut state = TicTacToeGameState::new();
        for (mark, index) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4)] {
            assert_eq!(state.place_mark(mark, index), Ok(GameOutcome::InProgress));
        }
        assert_eq!(
            state.place_mark(Mark::X, 2),
            Ok(GameOutcome::Win(Mark::X, WinLine::new(0, 1, 2)))
        );
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(
            state.place_mark(Mark::X, 8),
            Err(GameError::IllegalMove(IllegalMove::GameNotInProgress))
        );
        assert_eq!(
            state.place_mark(Mark::O, 8),
            Err(GameError::IllegalMove(IllegalMove::GameNotInProgress))
        );
    }
}
