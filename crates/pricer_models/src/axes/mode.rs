//! Curve / surface mode selection.

use super::{parse_axis, resolve_or, Axis, AxisError, AxisResolution};

/// Z-axis value that selects curve mode.
pub const CURVE_MODE_SENTINEL: &str = "None";

/// Chart mode derived from a z-axis selection.
///
/// Nothing is persisted between calls: the mode is recomputed from the
/// z-axis string every time a chart is built.
///
/// # Examples
///
/// ```
/// use pricer_models::axes::{BondSurfaceMetric, ChartMode};
///
/// let curve = ChartMode::<BondSurfaceMetric>::select("None").unwrap();
/// assert!(curve.is_curve());
///
/// let surface = ChartMode::<BondSurfaceMetric>::select("Coupon").unwrap();
/// assert_eq!(surface.surface_metric(), Some(BondSurfaceMetric::Coupon));
///
/// assert!(ChartMode::<BondSurfaceMetric>::select("Vega").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode<Z> {
    /// 2D curve
    #[default]
    Curve,
    /// 3D surface of the given metric
    Surface(Z),
}

impl<Z: Axis> ChartMode<Z> {
    /// Selects the mode for `z`, rejecting unknown metric names.
    pub fn select(z: &str) -> Result<Self, AxisError> {
        if z == CURVE_MODE_SENTINEL {
            Ok(ChartMode::Curve)
        } else {
            parse_axis(z).map(ChartMode::Surface)
        }
    }

    /// Selects the mode for `z`; unknown names draw the `fallback` surface.
    pub fn select_or(z: &str, fallback: Z) -> Self {
        if z == CURVE_MODE_SENTINEL {
            ChartMode::Curve
        } else {
            ChartMode::Surface(resolve_or(z, fallback))
        }
    }

    /// Selects the mode for `z` under `resolution`.
    pub fn resolve(z: &str, resolution: AxisResolution, fallback: Z) -> Result<Self, AxisError> {
        match resolution {
            AxisResolution::Strict => Self::select(z),
            AxisResolution::Lenient => Ok(Self::select_or(z, fallback)),
        }
    }
}

impl<Z: Copy> ChartMode<Z> {
    /// Whether this is curve mode.
    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self, ChartMode::Curve)
    }

    /// Whether this is surface mode.
    #[inline]
    pub fn is_surface(&self) -> bool {
        matches!(self, ChartMode::Surface(_))
    }

    /// The surface metric, if any.
    #[inline]
    pub fn surface_metric(&self) -> Option<Z> {
        match self {
            ChartMode::Curve => None,
            ChartMode::Surface(z) => Some(*z),
        }
    }
}
