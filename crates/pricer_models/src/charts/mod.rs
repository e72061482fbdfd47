//! Chart payloads produced by the pricers.
//!
//! - [`CurveData`]: paired x/y samples for 2D mode
//! - [`SurfaceData`]: equally shaped X/Y/Z grids for 3D mode
//! - [`Chart`]: either payload plus titles, ready for a renderer
//!
//! Payloads are plain values: built per call, owned by the caller and
//! never cached.

use std::fmt;

use pricer_core::math::grid::{meshgrid, Grid2D};
use pricer_core::types::GridError;

/// Colour map tag attached to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colorscale {
    /// Perceptually uniform blue-green-yellow
    Viridis,
    /// Perceptually uniform purple-orange-yellow
    Plasma,
    /// Sequential blues
    Blues,
}

impl Colorscale {
    /// Renderer name of the colour map.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Colorscale::Viridis => "Viridis",
            Colorscale::Plasma => "Plasma",
            Colorscale::Blues => "Blues",
        }
    }
}

impl fmt::Display for Colorscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Curve samples with axis labels.
///
/// `x_values` and `y_values` always have the same length.
///
/// # Examples
///
/// ```
/// use pricer_models::charts::CurveData;
///
/// let curve = CurveData::new(vec![1.0, 2.0], vec![2.0, 2.69], "Maturity", "Yield").unwrap();
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve.x_label(), "Maturity");
///
/// assert!(CurveData::new(vec![1.0], vec![], "Maturity", "Yield").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurveData"))]
pub struct CurveData {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    x_label: String,
    y_label: String,
}

impl CurveData {
    /// Pairs two sample vectors.
    ///
    /// # Errors
    /// [`GridError::ShapeMismatch`] if the lengths differ.
    pub fn new(
        x_values: Vec<f64>,
        y_values: Vec<f64>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Result<Self, GridError> {
        if x_values.len() != y_values.len() {
            return Err(GridError::ShapeMismatch {
                expected: (1, x_values.len()),
                got: (1, y_values.len()),
            });
        }
        Ok(Self {
            x_values,
            y_values,
            x_label: x_label.into(),
            y_label: y_label.into(),
        })
    }

    /// Pairs two sample vectors the caller built from one axis.
    pub(crate) fn from_equal_len(
        x_values: Vec<f64>,
        y_values: Vec<f64>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        debug_assert_eq!(x_values.len(), y_values.len());
        Self {
            x_values,
            y_values,
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    /// X samples.
    #[inline]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    /// Y samples.
    #[inline]
    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// X-axis label.
    #[inline]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Y-axis label.
    #[inline]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Whether the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// `(x, y)` pairs in sample order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values.iter().copied().zip(self.y_values.iter().copied())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurveData {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    x_label: String,
    y_label: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurveData> for CurveData {
    type Error = GridError;

    fn try_from(raw: RawCurveData) -> Result<Self, Self::Error> {
        CurveData::new(raw.x_values, raw.y_values, raw.x_label, raw.y_label)
    }
}

/// Surface mesh with a colour map.
///
/// The three grids always share one shape, `(y samples, x samples)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSurfaceData"))]
pub struct SurfaceData {
    #[cfg_attr(feature = "serde", serde(rename = "X_grid"))]
    x_grid: Grid2D<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Y_grid"))]
    y_grid: Grid2D<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Z_grid"))]
    z_grid: Grid2D<f64>,
    colorscale: Colorscale,
}

impl SurfaceData {
    /// Bundles three grids.
    ///
    /// # Errors
    /// [`GridError::ShapeMismatch`] if the Y or Z grid differs in shape from X.
    pub fn new(
        x_grid: Grid2D<f64>,
        y_grid: Grid2D<f64>,
        z_grid: Grid2D<f64>,
        colorscale: Colorscale,
    ) -> Result<Self, GridError> {
        let expected = x_grid.shape();
        for got in [y_grid.shape(), z_grid.shape()] {
            if got != expected {
                return Err(GridError::ShapeMismatch { expected, got });
            }
        }
        Ok(Self {
            x_grid,
            y_grid,
            z_grid,
            colorscale,
        })
    }

    /// Meshes `xs` against `ys` and fills the Z grid with `f(x, y)`.
    ///
    /// All three grids have shape `(ys.len(), xs.len())` by construction.
    pub fn from_axes<F>(xs: &[f64], ys: &[f64], colorscale: Colorscale, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> f64,
    {
        let (x_grid, y_grid) = meshgrid(xs, ys);
        let z_grid = Grid2D::from_fn(ys.len(), xs.len(), |r, c| f(xs[c], ys[r]));
        Self {
            x_grid,
            y_grid,
            z_grid,
            colorscale,
        }
    }

    /// X grid (columns walk the x axis).
    #[inline]
    pub fn x_grid(&self) -> &Grid2D<f64> {
        &self.x_grid
    }

    /// Y grid (rows walk the y axis).
    #[inline]
    pub fn y_grid(&self) -> &Grid2D<f64> {
        &self.y_grid
    }

    /// Z grid.
    #[inline]
    pub fn z_grid(&self) -> &Grid2D<f64> {
        &self.z_grid
    }

    /// Colour map tag.
    #[inline]
    pub fn colorscale(&self) -> Colorscale {
        self.colorscale
    }

    /// Common `(rows, cols)` shape of the grids.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.x_grid.shape()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSurfaceData {
    #[serde(rename = "X_grid")]
    x_grid: Grid2D<f64>,
    #[serde(rename = "Y_grid")]
    y_grid: Grid2D<f64>,
    #[serde(rename = "Z_grid")]
    z_grid: Grid2D<f64>,
    colorscale: Colorscale,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSurfaceData> for SurfaceData {
    type Error = GridError;

    fn try_from(raw: RawSurfaceData) -> Result<Self, Self::Error> {
        SurfaceData::new(raw.x_grid, raw.y_grid, raw.z_grid, raw.colorscale)
    }
}

/// Chart payload of either mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "lowercase"))]
pub enum ChartData {
    /// 2D mode
    Curve(CurveData),
    /// 3D mode
    Surface(SurfaceData),
}

/// A titled chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// Chart title
    pub title: String,
    /// X-axis title
    pub x_title: String,
    /// Y-axis title
    pub y_title: String,
    /// Z-axis title, surfaces only
    pub z_title: Option<String>,
    /// Payload
    pub data: ChartData,
}

impl Chart {
    /// Whether the payload is a curve.
    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self.data, ChartData::Curve(_))
    }

    /// The curve payload, if any.
    pub fn as_curve(&self) -> Option<&CurveData> {
        match &self.data {
            ChartData::Curve(curve) => Some(curve),
            ChartData::Surface(_) => None,
        }
    }

    /// The surface payload, if any.
    pub fn as_surface(&self) -> Option<&SurfaceData> {
        match &self.data {
            ChartData::Surface(surface) => Some(surface),
            ChartData::Curve(_) => None,
        }
    }
}
