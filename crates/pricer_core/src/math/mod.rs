//! Mathematical utilities.
//!
//! - [`grid`]: evenly spaced sample axes, mesh grids and the [`grid::Grid2D`] container
//! - [`functions`]: logistic curve, rounding and other scalar helpers

pub mod functions;
pub mod grid;
