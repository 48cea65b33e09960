//! Board position representation.

use derive_more::Display;

/// A cell position on the 9x9 grid.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both coordinates are validated at construction time.
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
///
/// let pos = Position::new(8, 0);
/// assert_eq!(pos.x(), 8);
/// assert_eq!(pos.y(), 0);
/// assert_eq!(pos.box_index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({x}, {y})")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions, row-major (left to right, top to
    /// bottom).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates the position of a cell within a 3x3 box.
    ///
    /// Boxes are indexed 0-8 left to right, top to bottom, and cells within a
    /// box follow the same order.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Position;
    ///
    /// assert_eq!(Position::from_box(0, 0), Position::new(0, 0));
    /// assert_eq!(Position::from_box(4, 4), Position::new(4, 4));
    /// assert_eq!(Position::from_box(8, 8), Position::new(8, 8));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        Self::new(
            (box_index % 3) * 3 + cell_index % 3,
            (box_index / 3) * 3 + cell_index / 3,
        )
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3x3 box containing this position.
    ///
    /// Boxes are indexed 0-8 left to right, top to bottom, so the index is
    /// `x / 3 + (y / 3) * 3`.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.x / 3 + (self.y / 3) * 3
    }

    /// Returns the row-major index of this position (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_box_index_corners() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }

    proptest! {
        #[test]
        fn prop_from_box_round_trip(box_index in 0u8..9, cell_index in 0u8..9) {
            let pos = Position::from_box(box_index, cell_index);
            prop_assert_eq!(pos.box_index(), box_index);
            let within = (pos.y() % 3) * 3 + pos.x() % 3;
            prop_assert_eq!(within, cell_index);
        }
    }
}
