//! Sample axes and 2D mesh grids.
//!
//! Curves are sampled on evenly spaced axes ([`linspace`]) and surfaces on
//! the Cartesian mesh of two such axes ([`meshgrid`]). A mesh built from
//! `x` and `y` has shape `(y.len(), x.len())`: rows walk the y axis and
//! columns walk the x axis, the layout 3D surface renderers expect.
//!
//! # Examples
//!
//! ```
//! use pricer_core::math::grid::{linspace, meshgrid};
//!
//! let x = linspace(1.0_f64, 3.0, 3);
//! let y = linspace(10.0_f64, 20.0, 2);
//! let (xg, yg) = meshgrid(&x, &y);
//!
//! assert_eq!(xg.shape(), (2, 3));
//! assert_eq!(xg.row(1), &[1.0, 2.0, 3.0]);
//! assert_eq!(yg.row(1), &[20.0, 20.0, 20.0]);
//! ```

use num_traits::Float;

use crate::types::GridError;

/// Evenly spaced samples over the closed interval `[start, end]`.
///
/// `count == 0` yields an empty vector and `count == 1` yields `[start]`.
/// The final sample is exactly `end`, so the endpoints never drift.
///
/// # Examples
///
/// ```
/// use pricer_core::math::grid::linspace;
///
/// let m = linspace(1.0_f64, 30.0, 30);
/// assert_eq!(m.len(), 30);
/// assert_eq!(m[0], 1.0);
/// assert_eq!(m[1], 2.0);
/// assert_eq!(m[29], 30.0);
/// ```
pub fn linspace<T: Float>(start: T, end: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let divisor = T::from(last).unwrap_or_else(T::one);
            let step = (end - start) / divisor;
            (0..count)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + T::from(i).unwrap_or_else(T::zero) * step
                    }
                })
                .collect()
        }
    }
}

/// Full Cartesian mesh of two sample axes.
///
/// Returns `(X, Y)` with `X[r][c] = x[c]` and `Y[r][c] = y[r]`.
pub fn meshgrid<T: Copy>(x: &[T], y: &[T]) -> (Grid2D<T>, Grid2D<T>) {
    let xs = Grid2D::from_fn(y.len(), x.len(), |_, c| x[c]);
    let ys = Grid2D::from_fn(y.len(), x.len(), |r, _| y[r]);
    (xs, ys)
}

/// Configurable sample domain: `count` evenly spaced points from `min`
/// to `max` inclusive.
///
/// # Examples
///
/// ```
/// use pricer_core::math::grid::AxisRange;
///
/// let range = AxisRange::new(2.0, 8.0, 30);
/// assert!(range.validate("yield").is_ok());
/// assert_eq!(range.samples().len(), 30);
///
/// assert!(AxisRange::new(2.0, f64::NAN, 30).validate("yield").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    /// First sample
    pub min: f64,
    /// Last sample
    pub max: f64,
    /// Number of samples
    pub count: usize,
}

impl AxisRange {
    /// Creates a new range.
    pub const fn new(min: f64, max: f64, count: usize) -> Self {
        Self { min, max, count }
    }

    /// Checks the bounds are finite and at least one sample is requested.
    ///
    /// `name` labels the bound in the returned error.
    pub fn validate(&self, name: &str) -> Result<(), GridError> {
        if self.count == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (bound, value) in [("min", self.min), ("max", self.max)] {
            if !value.is_finite() {
                return Err(GridError::NonFinite {
                    name: format!("{}.{}", name, bound),
                    value,
                });
            }
        }
        Ok(())
    }

    /// The sample points of this range.
    pub fn samples(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.count)
    }
}

/// Dense row-major 2D grid.
///
/// Serialises as a list of rows (`[[...], [...]]`).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid2D<T> {
    /// Wraps row-major `data` as a `rows × cols` grid.
    ///
    /// Fails with [`GridError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                expected: (rows, cols),
                got: (data.len() / cols.max(1), cols),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Builds a grid from nested rows, which must all have equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(GridError::ShapeMismatch {
                    expected: (n_rows, n_cols),
                    got: (n_rows, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterator over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; a zero-column grid has no cells to yield anyway
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Applies `f` cell by cell, preserving the shape.
    pub fn map<U, F>(&self, f: F) -> Grid2D<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid2D {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Combines two equal-shaped grids cell by cell.
    pub fn zip_map<U, V, F>(&self, other: &Grid2D<U>, mut f: F) -> Result<Grid2D<V>, GridError>
    where
        F: FnMut(&T, &U) -> V,
    {
        if self.shape() != other.shape() {
            return Err(GridError::ShapeMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        Ok(Grid2D {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Clone> Grid2D<T> {
    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Grid2D;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize> Serialize for Grid2D<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.iter_rows())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid2D<T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
            Grid2D::from_rows(rows).map_err(de::Error::custom)
        }
    }
}
