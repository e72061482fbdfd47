//! Warrant pricer.
//!
//! Two layers: closed-form point functions (fair value, banded delta,
//! moneyness) and curve/surface generators over an underlying domain of
//! ±20% around the strike.

use pricer_core::math::functions::{logistic, positive_part, round_to};
use pricer_core::math::grid::linspace;
use pricer_core::types::PricingError;

use crate::axes::{
    parse_axis, resolve_or, Axis, AxisResolution, ChartMode, WarrantCurveMetric,
    WarrantSurfaceMetric, WarrantXAxis,
};
use crate::charts::{Chart, ChartData, CurveData, SurfaceData};
use crate::instruments::{InstrumentError, WarrantParameters, WarrantPricingResult};

/// Samples on a payoff curve.
pub const PAYOFF_CURVE_POINTS: usize = 100;

/// Samples per axis of a warrant surface.
pub const SURFACE_POINTS: usize = 50;

/// Domain center used when the strike is not positive.
const DEFAULT_CENTER: f64 = 100.0;

/// Flat time value as a fraction of spot in the quick fair value.
const QUICK_TIME_VALUE: f64 = 0.05;

/// Delta bands as `(moneyness strictly above, delta)`, highest first.
const DELTA_BANDS: [(f64, f64); 3] = [(1.1, 0.85), (1.0, 0.65), (0.9, 0.45)];

/// Delta below the lowest band.
const DELTA_FLOOR: f64 = 0.25;

/// Warrant pricer.
///
/// Stateless; every method is a pure function of its arguments.
///
/// # Examples
///
/// ```
/// use pricer_models::pricers::WarrantPricer;
///
/// let pricer = WarrantPricer::new();
/// assert_eq!(pricer.calculate_fair_value(110.0, 100.0), 15.5);
/// assert_eq!(pricer.calculate_delta(110.0, 100.0), 0.65);
/// assert!(pricer.is_in_the_money(110.0, 100.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarrantPricer;

impl WarrantPricer {
    /// Creates a pricer.
    pub fn new() -> Self {
        Self
    }

    /// Full point valuation.
    ///
    /// Intrinsic value plus a volatility time value and a rate carry, less
    /// the borrow cost, floored at 0.01. Delta is a logistic in moneyness.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidInput` if `params` fails validation
    /// - `PricingError::NumericalInstability` if the fair value is not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::WarrantParameters;
    /// use pricer_models::pricers::WarrantPricer;
    ///
    /// let result = WarrantPricer::new()
    ///     .price_warrant(&WarrantParameters::new(100.0, 100.0))
    ///     .unwrap();
    /// // 0 intrinsic + 100 * 0.3 * 0.4 + 0.005 * 100 * 0.1
    /// assert_eq!(result.fair_value, 12.05);
    /// assert_eq!(result.delta, 0.5);
    /// assert_eq!(result.expected_discount, 12.05);
    /// ```
    pub fn price_warrant(
        &self,
        params: &WarrantParameters,
    ) -> Result<WarrantPricingResult, PricingError> {
        params.validate()?;

        let spot = params.spot_price;
        let strike = params.strike_price;
        let t = params.time_to_maturity_years;

        let intrinsic = positive_part(spot - strike);
        let time_value = spot * params.volatility * t.max(0.001).sqrt() * 0.4;
        let borrow_cost = spot * (params.borrow_rate_bps / 10_000.0) * t;
        let rate_adj = params.interest_rate * spot * t * 0.1;

        let fair_value = (intrinsic + time_value - borrow_cost + rate_adj).max(0.01);
        if !fair_value.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "warrant fair value is not finite: spot = {}, strike = {}",
                spot, strike
            )));
        }

        let delta = round_to(logistic(moneyness(spot, strike) - 1.0, 10.0), 2);
        let expected_discount = if spot > 0.0 {
            round_to((fair_value - intrinsic) / spot * 100.0, 2)
        } else {
            0.0
        };

        tracing::debug!(fair_value, intrinsic, delta, "Priced warrant");

        Ok(WarrantPricingResult {
            fair_value: round_to(fair_value, 2),
            delta,
            expected_discount,
            currency: params.currency,
        })
    }

    /// Intrinsic value plus a flat 5% of spot.
    #[inline]
    pub fn calculate_fair_value(&self, spot: f64, strike: f64) -> f64 {
        positive_part(spot - strike) + spot * QUICK_TIME_VALUE
    }

    /// Banded delta by moneyness.
    ///
    /// Bands are open below: moneyness exactly `1.1` gets `0.65`, not `0.85`.
    /// A non-positive strike counts as moneyness `1`.
    ///
    /// ```
    /// use pricer_models::pricers::WarrantPricer;
    ///
    /// let pricer = WarrantPricer::new();
    /// assert_eq!(pricer.calculate_delta(120.0, 100.0), 0.85);
    /// assert_eq!(pricer.calculate_delta(100.0, 100.0), 0.45);
    /// assert_eq!(pricer.calculate_delta(90.0, 100.0), 0.25);
    /// assert_eq!(pricer.calculate_delta(110.0, 0.0), 0.45);
    /// ```
    pub fn calculate_delta(&self, spot: f64, strike: f64) -> f64 {
        let m = moneyness(spot, strike);
        DELTA_BANDS
            .iter()
            .find(|&&(threshold, _)| m > threshold)
            .map_or(DELTA_FLOOR, |&(_, delta)| delta)
    }

    /// Whether spot is strictly above strike.
    #[inline]
    pub fn is_in_the_money(&self, spot: f64, strike: f64) -> bool {
        spot > strike
    }

    /// Underlying samples of a payoff curve: [`PAYOFF_CURVE_POINTS`] points
    /// over `[0.8, 1.2] × center`.
    pub fn payoff_domain(&self, strike: f64) -> Vec<f64> {
        let c = center(strike);
        linspace(c * 0.8, c * 1.2, PAYOFF_CURVE_POINTS)
    }

    /// Payoff or Greek curve around `strike`.
    ///
    /// # Errors
    /// `InstrumentError::NonFiniteParameter` for a non-finite strike.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::axes::WarrantCurveMetric;
    /// use pricer_models::pricers::WarrantPricer;
    ///
    /// let curve = WarrantPricer::new()
    ///     .generate_payoff_curve(100.0, WarrantCurveMetric::Delta)
    ///     .unwrap();
    /// assert_eq!(curve.len(), 100);
    /// assert_eq!(curve.x_values()[0], 80.0);
    /// assert_eq!(curve.x_values()[99], 120.0);
    /// ```
    pub fn generate_payoff_curve(
        &self,
        strike: f64,
        metric: WarrantCurveMetric,
    ) -> Result<CurveData, InstrumentError> {
        self.payoff_curve_with_labels(strike, metric, WarrantXAxis::SpotPrice.name(), metric.name())
    }

    /// [`WarrantPricer::generate_payoff_curve`] from a metric name.
    pub fn payoff_curve_from_name(&self, strike: f64, y: &str) -> Result<CurveData, PricingError> {
        let metric = parse_axis::<WarrantCurveMetric>(y)?;
        Ok(self.generate_payoff_curve(strike, metric)?)
    }

    /// [`WarrantPricer::generate_payoff_curve`] from a metric name, drawing
    /// the `Gamma` curve for unknown names.
    pub fn payoff_curve_lenient(&self, strike: f64, y: &str) -> Result<CurveData, InstrumentError> {
        let metric = resolve_or(y, WarrantCurveMetric::Gamma);
        self.payoff_curve_with_labels(strike, metric, WarrantXAxis::SpotPrice.name(), y)
    }

    fn payoff_curve_with_labels(
        &self,
        strike: f64,
        metric: WarrantCurveMetric,
        x_label: &str,
        y_label: &str,
    ) -> Result<CurveData, InstrumentError> {
        check_strike(strike)?;
        let c = center(strike);
        let x_values = self.payoff_domain(strike);
        let y_values = x_values
            .iter()
            .map(|&x| metric.evaluate(x, strike, c))
            .collect();
        tracing::debug!(strike, y = metric.name(), "Generated warrant payoff curve");
        Ok(CurveData::from_equal_len(x_values, y_values, x_label, y_label))
    }

    /// Surface of `metric` over underlying × the `y` domain.
    ///
    /// `y` only selects the second domain: time `[0.1, 2]` for `Value`,
    /// `[0, 1]` otherwise. Grids are [`SURFACE_POINTS`] square.
    ///
    /// # Errors
    /// `InstrumentError::NonFiniteParameter` for a non-finite strike.
    pub fn generate_surface_data(
        &self,
        strike: f64,
        y: WarrantCurveMetric,
        metric: WarrantSurfaceMetric,
    ) -> Result<SurfaceData, InstrumentError> {
        check_strike(strike)?;
        let c = center(strike);
        let (y_min, y_max) = y.y_domain();
        let xs = linspace(c * 0.8, c * 1.2, SURFACE_POINTS);
        let ys = linspace(y_min, y_max, SURFACE_POINTS);
        tracing::debug!(
            strike,
            y = y.name(),
            z = metric.name(),
            "Generated warrant surface"
        );
        Ok(SurfaceData::from_axes(&xs, &ys, metric.colorscale(), |x, y| {
            metric.evaluate(x, y, strike, c)
        }))
    }

    /// [`WarrantPricer::generate_surface_data`] from names.
    pub fn surface_data_from_names(
        &self,
        strike: f64,
        y: &str,
        z: &str,
    ) -> Result<SurfaceData, PricingError> {
        let y_metric = parse_axis::<WarrantCurveMetric>(y)?;
        let z_metric = parse_axis::<WarrantSurfaceMetric>(z)?;
        Ok(self.generate_surface_data(strike, y_metric, z_metric)?)
    }

    /// [`WarrantPricer::generate_surface_data`] from names; an unknown `y`
    /// takes the `[0, 1]` domain and an unknown `z` draws `Time`.
    pub fn surface_data_lenient(
        &self,
        strike: f64,
        y: &str,
        z: &str,
    ) -> Result<SurfaceData, InstrumentError> {
        self.generate_surface_data(
            strike,
            resolve_or(y, WarrantCurveMetric::Gamma),
            resolve_or(z, WarrantSurfaceMetric::Time),
        )
    }

    /// Builds a titled chart; `z` selects the mode.
    ///
    /// ```
    /// use pricer_models::axes::{
    ///     ChartMode, WarrantCurveMetric, WarrantSurfaceMetric, WarrantXAxis,
    /// };
    /// use pricer_models::pricers::WarrantPricer;
    ///
    /// let chart = WarrantPricer::new()
    ///     .chart(
    ///         100.0,
    ///         WarrantXAxis::SpotPrice,
    ///         WarrantCurveMetric::Value,
    ///         ChartMode::Surface(WarrantSurfaceMetric::Volatility),
    ///     )
    ///     .unwrap();
    /// assert_eq!(chart.title, "Volatility Surface (Spot Price vs Value)");
    /// assert_eq!(chart.y_title, "Time");
    /// ```
    pub fn chart(
        &self,
        strike: f64,
        x: WarrantXAxis,
        y: WarrantCurveMetric,
        z: ChartMode<WarrantSurfaceMetric>,
    ) -> Result<Chart, InstrumentError> {
        let labels = ChartLabels {
            x: x.name(),
            y: y.name(),
            z: z.surface_metric().map(|m| m.name()),
        };
        self.assemble_chart(strike, labels, y, z)
    }

    /// Builds a titled chart from axis names under `resolution`.
    ///
    /// In lenient mode the titles keep the requested names.
    pub fn chart_from_names(
        &self,
        strike: f64,
        x: &str,
        y: &str,
        z: &str,
        resolution: AxisResolution,
    ) -> Result<Chart, PricingError> {
        let mode = ChartMode::resolve(z, resolution, WarrantSurfaceMetric::Time)?;
        let chart = match resolution {
            AxisResolution::Strict => {
                let x_axis = parse_axis::<WarrantXAxis>(x)?;
                let y_metric = parse_axis::<WarrantCurveMetric>(y)?;
                self.chart(strike, x_axis, y_metric, mode)?
            }
            AxisResolution::Lenient => {
                let labels = ChartLabels {
                    x,
                    y,
                    z: mode.surface_metric().map(|_| z),
                };
                let y_metric = resolve_or(y, WarrantCurveMetric::Gamma);
                self.assemble_chart(strike, labels, y_metric, mode)?
            }
        };
        Ok(chart)
    }

    fn assemble_chart(
        &self,
        strike: f64,
        labels: ChartLabels<'_>,
        y: WarrantCurveMetric,
        mode: ChartMode<WarrantSurfaceMetric>,
    ) -> Result<Chart, InstrumentError> {
        let chart = match mode {
            ChartMode::Curve => Chart {
                title: format!("{} vs {}", labels.y, labels.x),
                x_title: labels.x.to_string(),
                y_title: labels.y.to_string(),
                z_title: None,
                data: ChartData::Curve(
                    self.payoff_curve_with_labels(strike, y, labels.x, labels.y)?,
                ),
            },
            ChartMode::Surface(metric) => {
                let z_title = labels.z.unwrap_or(metric.name());
                let y_title = if labels.y == WarrantCurveMetric::Value.name() {
                    "Time"
                } else {
                    labels.y
                };
                Chart {
                    title: format!("{} Surface ({} vs {})", z_title, labels.x, labels.y),
                    x_title: labels.x.to_string(),
                    y_title: y_title.to_string(),
                    z_title: Some(z_title.to_string()),
                    data: ChartData::Surface(self.generate_surface_data(strike, y, metric)?),
                }
            }
        };
        Ok(chart)
    }
}

struct ChartLabels<'a> {
    x: &'a str,
    y: &'a str,
    z: Option<&'a str>,
}

#[inline]
fn moneyness(spot: f64, strike: f64) -> f64 {
    if strike > 0.0 {
        spot / strike
    } else {
        1.0
    }
}

#[inline]
fn center(strike: f64) -> f64 {
    if strike > 0.0 {
        strike
    } else {
        DEFAULT_CENTER
    }
}

fn check_strike(strike: f64) -> Result<(), InstrumentError> {
    if strike.is_finite() {
        Ok(())
    } else {
        Err(InstrumentError::NonFiniteParameter {
            field: "strike_price",
            value: strike,
        })
    }
}
