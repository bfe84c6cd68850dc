use std::fmt;

use super::error::{GameError, IllegalMove};
use super::types::{GameOutcome, Mark};
use super::win_detector::{WinLine, check_win, check_win_with_line};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// `None` is an empty cell.
pub type Cell = Option<Mark>;

/// 3x3 grid, indexed 0..9 in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// `None` when `index` is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(None)
    }

    /// Returns a copy with `mark` at `index`. Never overwrites a filled cell.
    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, GameError> {
        match self.get(index) {
            None => Err(IllegalMove::OutOfRange { index }.into()),
            Some(Some(_)) => Err(IllegalMove::CellOccupied { index }.into()),
            Some(None) => {
                let mut next = *self;
                next.cells[index] = Some(mark);
                Ok(next)
            }
        }
    }

    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn evaluate(&self, mark: Mark) -> Option<WinLine> {
        check_win(self, mark)
    }

    pub fn winner(&self) -> Option<(Mark, WinLine)> {
        check_win_with_line(self)
    }

    /// Outcome after `last_mover` played. A move that completes a line and
    /// fills the board is a win, not a draw.
    pub fn outcome(&self, last_mover: Mark) -> GameOutcome {
        if let Some(line) = self.evaluate(last_mover) {
            return GameOutcome::Win(last_mover, line);
        }
        if self.is_full() {
            return GameOutcome::Draw;
        }
        GameOutcome::InProgress
    }

    /// Indices whose contents differ between the two boards.
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&index| self.cells[index] != other.cells[index])
            .collect()
    }

    /// Builds a board from nine characters: `X`, `O`, anything else is empty.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let mut cells = [None; CELL_COUNT];
        for (cell, ch) in cells.iter_mut().zip(pattern.chars()) {
            *cell = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        Self { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                match cell {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.outcome(Mark::X), GameOutcome::InProgress);
    }

    #[test]
    fn test_apply_move_changes_exactly_one_cell() {
        let board = Board::from_pattern("X...O....");
        let next = board.apply_move(8, Mark::X).unwrap();
        assert_eq!(next.diff(&board), vec![8]);
        assert_eq!(next.get(8), Some(Some(Mark::X)));
        assert_eq!(board.get(8), Some(None));
    }

    #[test]
    fn test_apply_move_rejects_filled_cell() {
        let board = Board::from_pattern("X...O....");
        let before = board;
        assert_eq!(
            board.apply_move(4, Mark::X),
            Err(GameError::IllegalMove(IllegalMove::CellOccupied { index: 4 }))
        );
        assert_eq!(
            board.apply_move(0, Mark::X),
            Err(GameError::IllegalMove(IllegalMove::CellOccupied { index: 0 }))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.apply_move(9, Mark::O),
            Err(GameError::IllegalMove(IllegalMove::OutOfRange { index: 9 }))
        );
    }

    #[test]
    fn test_win_takes_precedence_over_full_board() {
        let board = Board::from_pattern("XOXOXOOXX");
        assert!(board.is_full());
        assert_eq!(
            board.outcome(Mark::X),
            GameOutcome::Win(Mark::X, WinLine::new(0, 4, 8))
        );
    }

    #[test]
    fn test_last_cell_draw_and_win() {
        let board = Board::from_pattern("XOXOXOOX.");
        assert_eq!(board.outcome(Mark::X), GameOutcome::InProgress);
        assert_eq!(board.outcome(Mark::O), GameOutcome::InProgress);

        let with_o = board.apply_move(8, Mark::O).unwrap();
        assert_eq!(with_o.outcome(Mark::O), GameOutcome::Draw);

        let with_x = board.apply_move(8, Mark::X).unwrap();
        assert_eq!(
            with_x.outcome(Mark::X),
            GameOutcome::Win(Mark::X, WinLine::new(0, 4, 8))
        );
    }

    #[test]
    fn test_count_and_display() {
        let board = Board::from_pattern("XX.OO....");
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
    }
}
