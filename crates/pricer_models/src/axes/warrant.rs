//! Warrant axis registries.
//!
//! The x axis of every warrant chart is the underlying price domain around
//! the strike; [`WarrantXAxis`] only labels it. The y axis picks the curve
//! metric (and the surface's second domain), the z axis the surface metric.

use super::{Axis, InstrumentKind};
use crate::charts::Colorscale;

/// X-axis label options of the warrant chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarrantXAxis {
    /// Underlying spot price
    #[cfg_attr(feature = "serde", serde(rename = "Spot Price"))]
    SpotPrice,
    /// Strike price
    Strike,
    /// Volatility
    Volatility,
}

impl Axis for WarrantXAxis {
    const INSTRUMENT: InstrumentKind = InstrumentKind::Warrant;

    fn name(&self) -> &'static str {
        match self {
            WarrantXAxis::SpotPrice => "Spot Price",
            WarrantXAxis::Strike => "Strike",
            WarrantXAxis::Volatility => "Volatility",
        }
    }

    fn all() -> &'static [Self] {
        &[
            WarrantXAxis::SpotPrice,
            WarrantXAxis::Strike,
            WarrantXAxis::Volatility,
        ]
    }
}

/// Payoff curve metrics, evaluated at underlying `x` for a given strike.
///
/// `center` is the strike, or 100 for a non-positive strike.
///
/// # Examples
///
/// ```
/// use pricer_models::axes::WarrantCurveMetric;
///
/// // At the strike: no intrinsic value, full time value
/// assert_eq!(WarrantCurveMetric::Value.evaluate(100.0, 100.0, 100.0), 5.0);
/// assert_eq!(WarrantCurveMetric::Delta.evaluate(100.0, 100.0, 100.0), 0.5);
/// assert_eq!(WarrantCurveMetric::Gamma.evaluate(100.0, 100.0, 100.0), 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarrantCurveMetric {
    /// Intrinsic value plus a Gaussian time-value bump
    Value,
    /// `tanh` step around the strike
    Delta,
    /// Gaussian peak at the strike
    Gamma,
}

impl WarrantCurveMetric {
    /// Evaluates the metric.
    #[inline]
    pub fn evaluate(&self, x: f64, strike: f64, center: f64) -> f64 {
        let d = x - strike;
        match self {
            WarrantCurveMetric::Value => {
                d.max(0.0) + (-(d * d) / (center * 10.0)).exp() * (center * 0.05)
            }
            WarrantCurveMetric::Delta => 0.5 + 0.5 * (d / (center * 0.1)).tanh(),
            WarrantCurveMetric::Gamma => 0.01 * (-(d / (center * 0.2)).powi(2)).exp(),
        }
    }

    /// Second surface domain `(min, max)` paired with this y selection.
    ///
    /// `Value` plots against time `[0.1, 2]`, everything else against `[0, 1]`.
    #[inline]
    pub fn y_domain(&self) -> (f64, f64) {
        match self {
            WarrantCurveMetric::Value => (0.1, 2.0),
            WarrantCurveMetric::Delta | WarrantCurveMetric::Gamma => (0.0, 1.0),
        }
    }
}

impl Axis for WarrantCurveMetric {
    const INSTRUMENT: InstrumentKind = InstrumentKind::Warrant;

    fn name(&self) -> &'static str {
        match self {
            WarrantCurveMetric::Value => "Value",
            WarrantCurveMetric::Delta => "Delta",
            WarrantCurveMetric::Gamma => "Gamma",
        }
    }

    fn all() -> &'static [Self] {
        &[
            WarrantCurveMetric::Value,
            WarrantCurveMetric::Delta,
            WarrantCurveMetric::Gamma,
        ]
    }
}

/// Warrant surface metrics over the underlying × y-domain mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarrantSurfaceMetric {
    /// Time decay of intrinsic plus a Gaussian time-value ridge
    Time,
    /// Smile-shaped volatility
    Volatility,
}

impl WarrantSurfaceMetric {
    /// Evaluates the metric at mesh point `(x, y)`.
    ///
    /// ```
    /// use pricer_models::axes::WarrantSurfaceMetric;
    ///
    /// assert_eq!(WarrantSurfaceMetric::Volatility.evaluate(100.0, 0.0, 100.0, 100.0), 0.25);
    /// assert_eq!(WarrantSurfaceMetric::Time.evaluate(100.0, 1.0, 100.0, 100.0), 5.0);
    /// ```
    #[inline]
    pub fn evaluate(&self, x: f64, y: f64, strike: f64, center: f64) -> f64 {
        let d = x - strike;
        match self {
            WarrantSurfaceMetric::Volatility => {
                0.2 + 0.1 * (d / center).powi(2) + 0.05 * (-y).exp()
            }
            WarrantSurfaceMetric::Time => {
                d.max(0.0) * (-0.05 * y).exp()
                    + (center * 0.05) * (-0.5 * (d / (center * 0.1)).powi(2)).exp() * y.sqrt()
            }
        }
    }

    /// Colour map the surface is rendered with.
    #[inline]
    pub fn colorscale(&self) -> Colorscale {
        match self {
            WarrantSurfaceMetric::Volatility => Colorscale::Plasma,
            WarrantSurfaceMetric::Time => Colorscale::Viridis,
        }
    }
}

impl Axis for WarrantSurfaceMetric {
    const INSTRUMENT: InstrumentKind = InstrumentKind::Warrant;

    fn name(&self) -> &'static str {
        match self {
            WarrantSurfaceMetric::Time => "Time",
            WarrantSurfaceMetric::Volatility => "Volatility",
        }
    }

    fn all() -> &'static [Self] {
        &[WarrantSurfaceMetric::Time, WarrantSurfaceMetric::Volatility]
    }
}

impl_display_from_str!(WarrantXAxis, WarrantCurveMetric, WarrantSurfaceMetric);
