#![warn(missing_docs)]

//! Higher-order-function helpers.
//!
//! - [`Repeater`] - join `n` copies of a string with a separator
//! - [`Generator`] - a sequence seeded with a value and advanced by a function
//! - [`MapReducer`] - map every input, then fold the results left to right

pub mod generator;
pub mod map_reduce;
pub mod repeater;

pub use generator::Generator;
pub use map_reduce::MapReducer;
pub use repeater::{repeater, Repeater};
