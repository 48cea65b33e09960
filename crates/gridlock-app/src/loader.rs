//! Puzzle file loading.
//!
//! A puzzle file is a JSON array of nine arrays of nine integers in 0-9,
//! row-major, where 0 denotes an empty cell. Structural validation (valid
//! JSON, exactly 9x9, values in range) happens here; board legality is
//! checked by [`gridlock_board::Board::from_givens`].

use std::{fs, io, path::Path};

use derive_more::{Display, Error, From};

/// Errors produced while loading a puzzle file.
#[derive(Debug, Display, Error, From)]
pub(crate) enum LoadError {
    /// The file could not be read.
    #[display("failed to read puzzle file")]
    Io(#[error(source)] io::Error),
    /// The file is not a JSON array of arrays of integers.
    #[display("puzzle file is not a JSON grid: {_0}")]
    Json(#[error(source)] serde_json::Error),
    /// The grid does not have exactly nine rows.
    #[display("expected 9 rows, found {found}")]
    #[from(ignore)]
    RowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not have exactly nine values.
    #[display("row {row}: expected 9 values, found {found}")]
    #[from(ignore)]
    ColumnCount {
        /// Row index (0-based).
        row: usize,
        /// Number of values found.
        found: usize,
    },
    /// A cell value is outside the range 0-9.
    #[display("row {row}, column {column}: value {value} is outside 0-9")]
    #[from(ignore)]
    ValueOutOfRange {
        /// Row index (0-based).
        row: usize,
        /// Column index (0-based).
        column: usize,
        /// The rejected value.
        value: i64,
    },
}

/// Reads a 9x9 puzzle grid from a JSON file.
pub(crate) fn load_puzzle(path: &Path) -> Result<[[u8; 9]; 9], LoadError> {
    let text = fs::read_to_string(path)?;
    parse_puzzle(&text)
}

/// Parses a 9x9 puzzle grid from JSON text.
pub(crate) fn parse_puzzle(text: &str) -> Result<[[u8; 9]; 9], LoadError> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(text)?;
    if rows.len() != 9 {
        return Err(LoadError::RowCount { found: rows.len() });
    }

    let mut grid = [[0; 9]; 9];
    for (y, row) in rows.iter().enumerate() {
        if row.len() != 9 {
            return Err(LoadError::ColumnCount {
                row: y,
                found: row.len(),
            });
        }
        for (x, &value) in row.iter().enumerate() {
            match u8::try_from(value) {
                Ok(cell) if cell <= 9 => grid[y][x] = cell,
                _ => {
                    return Err(LoadError::ValueOutOfRange {
                        row: y,
                        column: x,
                        value,
                    });
                }
            }
        }
    }
    Ok(grid)
}
