//! Sudoku house (unit) representation.

use derive_more::Display;

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// A house is any group of nine cells subject to the no-duplicate rule. The
/// board crate checks legality of a placement by inspecting the three houses
/// containing the placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    #[display("row {y}")]
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    #[display("column {x}")]
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    #[display("box {index}")]
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing the given position: its row, its
    /// column, and its box, in that order.
    #[must_use]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// Row and column cells are ordered by the free coordinate; box cells are
    /// ordered row-major within the box.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine positions contained in this house.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{House, Position};
    ///
    /// let positions = House::Box { index: 4 }.positions();
    /// assert_eq!(positions[0], Position::new(3, 3));
    /// assert_eq!(positions[8], Position::new(5, 5));
    /// ```
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        #[expect(clippy::cast_possible_truncation)]
        std::array::from_fn(|i| self.position_from_cell_index(i as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(House::ROWS[3], House::Row { y: 3 });
        assert_eq!(House::COLUMNS[8], House::Column { x: 8 });
        assert_eq!(House::BOXES[0], House::Box { index: 0 });
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_row_and_column_positions() {
        let row = House::Row { y: 2 }.positions();
        assert_eq!(row[0], Position::new(0, 2));
        assert_eq!(row[8], Position::new(8, 2));

        let column = House::Column { x: 5 }.positions();
        assert_eq!(column[0], Position::new(5, 0));
        assert_eq!(column[8], Position::new(5, 8));
    }

    #[test]
    fn test_box_positions_are_row_major() {
        let positions = House::Box { index: 1 }.positions();
        assert_eq!(positions[0], Position::new(3, 0));
        assert_eq!(positions[2], Position::new(5, 0));
        assert_eq!(positions[3], Position::new(3, 1));
        assert_eq!(positions[8], Position::new(5, 2));
    }

    #[test]
    fn test_containing() {
        let pos = Position::new(4, 7);
        let [row, column, house_box] = House::containing(pos);
        assert_eq!(row, House::Row { y: 7 });
        assert_eq!(column, House::Column { x: 4 });
        assert_eq!(house_box, House::Box { index: 7 });
    }

    #[test]
    fn test_every_house_covers_nine_distinct_cells() {
        for house in House::ALL {
            let positions = house.positions();
            for (i, a) in positions.iter().enumerate() {
                for b in &positions[i + 1..] {
                    assert_ne!(a, b, "{house} repeats a cell");
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(House::Row { y: 0 }.to_string(), "row 0");
        assert_eq!(House::Column { x: 4 }.to_string(), "column 4");
        assert_eq!(House::Box { index: 8 }.to_string(), "box 8");
    }
}
