//! Toroidal Conway's Game of Life core (B3/S23).
//!
//! The crate holds no timers, draws nothing, and listens to nothing; a
//! driver creates a [`Grid`], seeds it with [`Grid::randomize`], and calls
//! [`Grid::step`] on whatever schedule it likes.

pub mod grid;
mod step;

pub use grid::Grid;
