//! Bond curve series and surface metrics.

use super::{Axis, InstrumentKind};
use crate::charts::Colorscale;

/// Series that can be plotted against each other in bond curve mode.
///
/// Every series is a function of maturity.
///
/// # Examples
///
/// ```
/// use pricer_models::axes::BondSeries;
///
/// assert_eq!(BondSeries::Price.evaluate(10.0), 90.0);
/// assert_eq!(BondSeries::Duration.evaluate(10.0), 8.0);
/// assert_eq!(BondSeries::Yield.evaluate(1.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BondSeries {
    /// Maturity in years
    Maturity,
    /// `ln(maturity) + 2`
    Yield,
    /// `100 - maturity`
    Price,
    /// `0.8 * maturity`
    Duration,
}

impl BondSeries {
    /// Series offered on the x axis of the bond chart.
    pub const X_CHOICES: [BondSeries; 2] = [BondSeries::Maturity, BondSeries::Duration];

    /// Series offered on the y axis of the bond chart.
    pub const Y_CHOICES: [BondSeries; 2] = [BondSeries::Yield, BondSeries::Price];

    /// Evaluates the series at one maturity.
    #[inline]
    pub fn evaluate(&self, maturity: f64) -> f64 {
        match self {
            BondSeries::Maturity => maturity,
            BondSeries::Yield => maturity.ln() + 2.0,
            BondSeries::Price => 100.0 - maturity,
            BondSeries::Duration => maturity * 0.8,
        }
    }

    /// Evaluates the series over a maturity axis.
    pub fn sample(&self, maturities: &[f64]) -> Vec<f64> {
        maturities.iter().map(|&m| self.evaluate(m)).collect()
    }
}

impl Axis for BondSeries {
    const INSTRUMENT: InstrumentKind = InstrumentKind::Bond;

    fn name(&self) -> &'static str {
        match self {
            BondSeries::Maturity => "Maturity",
            BondSeries::Yield => "Yield",
            BondSeries::Price => "Price",
            BondSeries::Duration => "Duration",
        }
    }

    fn all() -> &'static [Self] {
        &[
            BondSeries::Maturity,
            BondSeries::Yield,
            BondSeries::Price,
            BondSeries::Duration,
        ]
    }
}

/// Z-axis metrics of the bond surface over the maturity × yield mesh.
///
/// `Baseline` is the formula used when no named metric applies; it is
/// not part of the selectable registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BondSurfaceMetric {
    /// `X*Y/5 + 5*sin(X/5)`
    Coupon,
    /// `(Y - 5)^2 + X/10`
    Convexity,
    /// `X*Y`
    Baseline,
}

impl BondSurfaceMetric {
    /// Evaluates the metric at maturity `x` and yield `y`.
    ///
    /// ```
    /// use pricer_models::axes::BondSurfaceMetric;
    ///
    /// assert_eq!(BondSurfaceMetric::Convexity.evaluate(10.0, 5.0), 1.0);
    /// assert_eq!(BondSurfaceMetric::Baseline.evaluate(3.0, 4.0), 12.0);
    /// ```
    #[inline]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        match self {
            BondSurfaceMetric::Coupon => x * y / 5.0 + (x / 5.0).sin() * 5.0,
            BondSurfaceMetric::Convexity => (y - 5.0).powi(2) + x / 10.0,
            BondSurfaceMetric::Baseline => x * y,
        }
    }

    /// Colour map the surface is rendered with.
    #[inline]
    pub fn colorscale(&self) -> Colorscale {
        match self {
            BondSurfaceMetric::Coupon => Colorscale::Viridis,
            BondSurfaceMetric::Convexity => Colorscale::Plasma,
            BondSurfaceMetric::Baseline => Colorscale::Blues,
        }
    }
}

impl Axis for BondSurfaceMetric {
    const INSTRUMENT: InstrumentKind = InstrumentKind::Bond;

    fn name(&self) -> &'static str {
        match self {
            BondSurfaceMetric::Coupon => "Coupon",
            BondSurfaceMetric::Convexity => "Convexity",
            BondSurfaceMetric::Baseline => "Baseline",
        }
    }

    fn all() -> &'static [Self] {
        &[BondSurfaceMetric::Coupon, BondSurfaceMetric::Convexity]
    }
}

impl_display_from_str!(BondSeries, BondSurfaceMetric);
