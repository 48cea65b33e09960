//! Core value types for the Gridlock board state manager.
//!
//! This crate provides the fundamental types shared by the board crate and
//! the command line application:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`DigitSet`]: a set of digits backed by a 9-bit mask
//! - [`Position`]: a cell coordinate on the 9x9 grid
//! - [`House`]: a row, column, or 3x3 box — any group of nine cells subject
//!   to the no-duplicate rule
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, House, Position};
//!
//! let pos = Position::new(4, 4);
//! assert_eq!(pos.box_index(), 4);
//!
//! // The box containing the center cell covers rows 3-5 and columns 3-5.
//! let house = House::Box { index: pos.box_index() };
//! assert_eq!(house.positions()[0], Position::new(3, 3));
//!
//! assert_eq!(Digit::new(5), Some(Digit::D5));
//! assert_eq!(Digit::new(0), None);
//! ```

pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;

pub use self::{digit::Digit, digit_set::DigitSet, house::House, position::Position};
