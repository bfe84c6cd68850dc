use std::fmt;

use super::board::Board;
use super::types::Mark;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WinLine([usize; 3]);

impl WinLine {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new(0, 1, 2),
    WinLine::new(3, 4, 5),
    WinLine::new(6, 7, 8),
    WinLine::new(0, 3, 6),
    WinLine::new(1, 4, 7),
    WinLine::new(2, 5, 8),
    WinLine::new(0, 4, 8),
    WinLine::new(2, 4, 6),
];

/// First line in `WIN_LINES` order fully held by `mark`.
pub fn check_win(board: &Board, mark: Mark) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.cells().iter().all(|&index| board.get(index) == Some(Some(mark))))
}

/// First line in `WIN_LINES` order fully held by either mark.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES.iter().copied().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a)? {
            Some(mark) if board.get(b)? == Some(mark) && board.get(c)? == Some(mark) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
