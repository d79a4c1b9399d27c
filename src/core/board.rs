//! The 3x3 board and terminal-state detection.
//!
//! Cells are indexed `0..9` in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! Terminal detection works on a bare [`Cells`] array rather than on a
//! [`Board`], so search can evaluate hypothetical positions held in a
//! scratch buffer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::MoveError;
use super::symbol::{Cell, Symbol};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Raw cell state, row-major.
pub type Cells = [Cell; CELL_COUNT];

/// Empty cell indices in ascending order.
pub type EmptyCells = SmallVec<[usize; CELL_COUNT]>;

/// The 8 winning lines: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of evaluating a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves remain and nobody has a line.
    Ongoing,
    /// The symbol completed a line.
    Win(Symbol),
    /// Board full, no line.
    Draw,
}

impl Status {
    /// True for `Win` and `Draw`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::Ongoing)
    }

    /// The winning symbol, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Symbol> {
        match self {
            Status::Win(s) => Some(s),
            _ => None,
        }
    }
}

/// Evaluate any 9-cell state.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first complete line
/// decides the winner. Draw is only reported once no empty cell remains.
#[must_use]
pub fn terminal_status(cells: &Cells) -> Status {
    for [a, b, c] in WINNING_LINES {
        if let Cell::Occupied(s) = cells[a] {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Status::Win(s);
            }
        }
    }

    if is_full(cells) {
        Status::Draw
    } else {
        Status::Ongoing
    }
}

/// True when every cell holds a symbol.
#[must_use]
pub fn is_full(cells: &Cells) -> bool {
    cells.iter().all(|c| !c.is_empty())
}

/// Indices of empty cells, ascending.
#[must_use]
pub fn empty_cells(cells: &Cells) -> EmptyCells {
    cells
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// The authoritative game board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from existing cell state.
    #[must_use]
    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    /// Place `symbol` at `index`.
    ///
    /// Returns `false` without touching the board if the index is out of
    /// range or the cell is occupied.
    pub fn place(&mut self, index: usize, symbol: Symbol) -> bool {
        self.try_place(index, symbol).is_ok()
    }

    /// Place `symbol` at `index`, reporting why a move was rejected.
    pub fn try_place(&mut self, index: usize, symbol: Symbol) -> Result<(), MoveError> {
        self.place_cell(index, Cell::Occupied(symbol))
    }

    /// Lower-level placement taking a raw cell value.
    ///
    /// Rejects `Cell::Empty`; use [`Board::clear`] to empty a cell.
    pub fn place_cell(&mut self, index: usize, cell: Cell) -> Result<(), MoveError> {
        let current = *self
            .cells
            .get(index)
            .ok_or(MoveError::OutOfRange { index })?;

        if cell.is_empty() {
            return Err(MoveError::EmptyMarker { index });
        }
        if let Cell::Occupied(by) = current {
            return Err(MoveError::Occupied { index, by });
        }

        self.cells[index] = cell;
        Ok(())
    }

    /// Force a cell back to empty. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Owned copy of the cell state.
    ///
    /// Mutating the copy never affects the board.
    #[must_use]
    pub fn snapshot(&self) -> Cells {
        self.cells
    }

    /// Borrow the cell state.
    #[must_use]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// The cell at `index`, or `None` when out of range.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True if `index` is in range and empty.
    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    #[must_use]
    pub fn status(&self) -> Status {
        terminal_status(&self.cells)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        is_full(&self.cells)
    }

    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        empty_cells(&self.cells)
    }

    /// Number of cells holding `symbol`.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(symbol))
            .count()
    }

    /// Whose turn it is, assuming `first` opened the game and play alternated.
    #[must_use]
    pub fn side_to_move(&self, first: Symbol) -> Symbol {
        if self.count(first) == self.count(first.opponent()) {
            first
        } else {
            first.opponent()
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
