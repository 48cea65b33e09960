//! Interactive play session on stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::Result;
use gridlock_board::{Board, BoardError};
use gridlock_core::{House, Position};

use crate::render;

const USAGE: &str = "Enter ROW COL VALUE (0-based, value 0 clears the cell), or \"quit\".";
const COORDS: &str = "Row and column must be between 0 and 8.";

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Place `value` at column `x`, row `y`; 0 clears the cell.
    Move { x: u8, y: u8, value: u8 },
    Quit,
    Empty,
    /// The line was not understood; the payload explains why.
    Unrecognized(&'static str),
}

impl Command {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if matches!(trimmed, "q" | "quit" | "exit") {
            return Self::Quit;
        }

        let mut tokens = trimmed.split_whitespace();
        let (Some(row), Some(col), Some(value), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Self::Unrecognized(USAGE);
        };
        let (Ok(y), Ok(x)) = (row.parse::<u8>(), col.parse::<u8>()) else {
            return Self::Unrecognized(COORDS);
        };
        if x > 8 || y > 8 {
            return Self::Unrecognized(COORDS);
        }
        let Ok(value) = value.parse::<i64>() else {
            return Self::Unrecognized(USAGE);
        };
        // values outside u8 are out of range for the board as well
        let value = u8::try_from(value).unwrap_or(u8::MAX);
        Self::Move { x, y, value }
    }
}

/// Maps a board error to its user-facing message.
const fn message(error: BoardError) -> &'static str {
    match error {
        BoardError::InvalidValue { .. } => "Invalid input: value must be between 0 and 9.",
        BoardError::FixedCell => "This cell is fixed and cannot be modified.",
        BoardError::Conflict => "Move causes a conflict in row, column, or box.",
    }
}

/// Runs the interactive session until `quit` or end of input.
pub(crate) fn run(board: &mut Board, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "{}", render::render(board))?;
    writeln!(output, "{USAGE}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match Command::parse(&line?) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Unrecognized(reason) => writeln!(output, "{reason}")?,
            Command::Move { x, y, value } => {
                let pos = Position::new(x, y);
                match board.update(pos, value) {
                    Ok(()) => {
                        for house in House::containing(pos) {
                            log::debug!("{house} still needs: {}", board.missing_digits(house));
                        }
                        writeln!(output, "{}", render::render(board))?;
                        if board.is_solved() {
                            writeln!(output, "Puzzle solved, congratulations!")?;
                        } else {
                            writeln!(output, "{} cells remaining.", board.empty_count())?;
                        }
                    }
                    Err(error) => writeln!(output, "{}", message(error))?,
                }
            }
        }
    }
    Ok(())
}
