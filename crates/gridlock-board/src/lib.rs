//! Sudoku board state management.
//!
//! This crate provides [`Board`], a self-contained state machine over a 9x9
//! grid. A board is created from an initial configuration whose pre-filled
//! cells become permanently fixed, and every subsequent mutation goes through
//! a legality check: a committed update can never introduce a duplicate digit
//! in any row, column, or 3x3 box.
//!
//! The grid is the single source of truth; row, column, and box views are
//! computed on demand rather than kept as separate mutable containers, so
//! there is no view state to keep in sync on the rollback path.
//!
//! # Examples
//!
//! ```
//! use gridlock_board::{Board, BoardError};
//! use gridlock_core::{Digit, Position};
//!
//! let mut rows = [[0; 9]; 9];
//! rows[0][0] = 5;
//!
//! let mut board = Board::from_givens(rows)?;
//! assert!(board.is_fixed(Position::new(0, 0)));
//!
//! // Legal move
//! board.update(Position::new(1, 0), 3)?;
//! assert_eq!(board.value(Position::new(1, 0)), Some(Digit::D3));
//!
//! // 5 already appears in row 0; the board is left unchanged
//! assert_eq!(board.update(Position::new(2, 0), 5), Err(BoardError::Conflict));
//! assert_eq!(board.value(Position::new(2, 0)), None);
//! # Ok::<(), BoardError>(())
//! ```

pub mod board;
pub mod error;

pub use self::{board::Board, error::BoardError};
