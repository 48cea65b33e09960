//! Board mutation errors.

use derive_more::{Display, Error, IsVariant};

/// Errors returned by board construction and mutation.
///
/// All variants are recoverable: a failed operation leaves the board exactly
/// as it was, and the board remains fully usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum BoardError {
    /// The supplied value is outside the range 0-9.
    #[display("invalid value {value}, must be 0-9")]
    InvalidValue {
        /// The rejected value.
        value: u8,
    },
    /// The target cell is part of the initial puzzle and cannot be modified.
    #[display("cell is fixed and cannot be modified")]
    FixedCell,
    /// The value would duplicate a digit in its row, column, or box.
    #[display("value conflicts within its row, column, or box")]
    Conflict,
}
