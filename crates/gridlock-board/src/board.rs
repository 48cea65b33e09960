//! Sudoku board state with legality enforcement.

use gridlock_core::{Digit, DigitSet, House, Position};

use crate::BoardError;

/// A 9x9 Sudoku board that tracks fixed cells and enforces move legality.
///
/// The board owns two pieces of state: the grid itself (81 optional digits,
/// row-major) and a fixed-cell mask computed once at construction. Cells that
/// are pre-filled in the initial configuration are fixed and can never be
/// modified; all other cells are editable for the lifetime of the board.
///
/// Every mutation goes through [`Board::update`], which commits a value only
/// if it keeps the grid legal. As a consequence the board satisfies a global
/// invariant: at all times, the non-empty values of every row, column, and
/// box are pairwise distinct.
///
/// # Examples
///
/// ```
/// use gridlock_board::Board;
/// use gridlock_core::{Digit, Position};
///
/// let mut rows = [[0; 9]; 9];
/// rows[4][4] = 7;
///
/// let mut board = Board::from_givens(rows).unwrap();
/// assert_eq!(board.value(Position::new(4, 4)), Some(Digit::D7));
/// assert!(!board.is_solved());
///
/// board.update(Position::new(0, 0), 7).unwrap();
/// board.update(Position::new(0, 0), 0).unwrap(); // 0 clears the cell
/// assert_eq!(board.value(Position::new(0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
    fixed: [bool; 81],
}

impl Board {
    /// Creates a board from a row-major grid of integers in 0-9, where 0
    /// denotes an empty cell.
    ///
    /// The non-zero cells become the puzzle's fixed cells. The initial
    /// configuration is validated eagerly: every given is placed through the
    /// same legality check as a regular update, so a constructed board is
    /// always in a legal state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidValue`] if any cell holds a value greater
    /// than 9, or [`BoardError::Conflict`] if the givens already duplicate a
    /// digit within a row, column, or box.
    pub fn from_givens(rows: [[u8; 9]; 9]) -> Result<Self, BoardError> {
        let mut board = Self {
            cells: [None; 81],
            fixed: [false; 81],
        };
        for pos in Position::ALL {
            let value = rows[usize::from(pos.y())][usize::from(pos.x())];
            if value == 0 {
                continue;
            }
            let digit = Digit::new(value).ok_or(BoardError::InvalidValue { value })?;
            board.try_write(pos, Some(digit))?;
        }
        for (fixed, cell) in board.fixed.iter_mut().zip(&board.cells) {
            *fixed = cell.is_some();
        }
        Ok(board)
    }

    /// Returns the value of the cell at the given position.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Returns whether the cell at the given position is fixed.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.fixed[pos.index()]
    }

    /// Returns the nine values of a house, in cell-index order.
    ///
    /// The values are read from the grid on demand; the returned array is a
    /// snapshot, not a live view.
    #[must_use]
    pub fn house_values(&self, house: House) -> [Option<Digit>; 9] {
        house.positions().map(|pos| self.cells[pos.index()])
    }

    /// Returns the nine values of the row at `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, y: u8) -> [Option<Digit>; 9] {
        self.house_values(House::Row { y })
    }

    /// Returns the nine values of the column at `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column(&self, x: u8) -> [Option<Digit>; 9] {
        self.house_values(House::Column { x })
    }

    /// Returns the nine values of the box at `index`, row-major within the
    /// box.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub fn box_values(&self, index: u8) -> [Option<Digit>; 9] {
        self.house_values(House::Box { index })
    }

    /// Returns the digits not yet present in a house.
    #[must_use]
    pub fn missing_digits(&self, house: House) -> DigitSet {
        let mut missing = DigitSet::FULL;
        for pos in house.positions() {
            if let Some(digit) = self.cells[pos.index()] {
                missing.remove(digit);
            }
        }
        missing
    }

    /// Checks whether the three houses containing `pos` are free of
    /// duplicates.
    ///
    /// Empty cells are never conflicts. Only the row, column, and box
    /// touching `pos` are inspected: a single-cell change can only introduce
    /// a duplicate within houses that contain that cell.
    #[must_use]
    pub fn is_valid(&self, pos: Position) -> bool {
        House::containing(pos)
            .iter()
            .all(|&house| !self.has_duplicate(house))
    }

    fn has_duplicate(&self, house: House) -> bool {
        let mut seen = DigitSet::new();
        house
            .positions()
            .iter()
            .any(|&pos| self.cells[pos.index()].is_some_and(|digit| !seen.insert(digit)))
    }

    /// Writes `value` at `pos` if the move is legal.
    ///
    /// A value of 0 clears the cell; clearing never conflicts. On success
    /// exactly one cell changes. On failure the grid is left exactly as it
    /// was before the call, and no intermediate illegal state is observable
    /// outside of it.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`BoardError::InvalidValue`] if `value` is greater than 9.
    /// - [`BoardError::FixedCell`] if the target cell is fixed, regardless of
    ///   the value.
    /// - [`BoardError::Conflict`] if the value would duplicate a digit in the
    ///   cell's row, column, or box.
    pub fn update(&mut self, pos: Position, value: u8) -> Result<(), BoardError> {
        if value > 9 {
            return Err(BoardError::InvalidValue { value });
        }
        if self.fixed[pos.index()] {
            return Err(BoardError::FixedCell);
        }
        self.try_write(pos, Digit::new(value))
    }

    fn try_write(&mut self, pos: Position, value: Option<Digit>) -> Result<(), BoardError> {
        let previous = std::mem::replace(&mut self.cells[pos.index()], value);
        if self.is_valid(pos) {
            Ok(())
        } else {
            self.cells[pos.index()] = previous;
            Err(BoardError::Conflict)
        }
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns whether the board is completely filled.
    ///
    /// This does not re-verify legality: every committed update preserved the
    /// no-duplicate invariant, so a fully-filled board is a completed, valid
    /// solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}
