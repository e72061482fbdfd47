//! Convertible bond pricer.
//!
//! Point pricing ([`price_bond`]) is a closed-form approximation: the
//! bond is worth the larger of its floor and its parity, plus a
//! volatility-driven time premium, less the stock borrow cost. Curve and
//! surface generation sample the configured maturity and yield axes.
//!
//! # Examples
//!
//! ```
//! use pricer_models::pricers::BondPricer;
//! use pricer_models::axes::{BondSeries, BondSurfaceMetric};
//!
//! let pricer = BondPricer::default();
//!
//! let curve = pricer.generate_curve_data(BondSeries::Maturity, BondSeries::Yield);
//! assert_eq!(curve.len(), 30);
//! assert_eq!(curve.y_values()[0], 2.0);
//!
//! let surface = pricer.generate_surface_data(BondSurfaceMetric::Convexity);
//! assert_eq!(surface.shape(), (30, 30));
//! ```

use pricer_core::math::functions::{logistic, round_to};
use pricer_core::math::grid::AxisRange;
use pricer_core::types::PricingError;

use crate::axes::{
    parse_axis, resolve_or, Axis, AxisError, AxisResolution, BondSeries, BondSurfaceMetric,
    ChartMode,
};
use crate::charts::{Chart, ChartData, CurveData, SurfaceData};
use crate::instruments::{InstrumentError, PricingParameters, PricingResult};

/// Floor on the time fed to the volatility premium.
const MIN_PREMIUM_TIME: f64 = 0.001;

/// Floor on the reported fair value.
const MIN_FAIR_VALUE: f64 = 0.01;

/// Time premium per unit of `sigma * sqrt(T)` per unit notional.
const TIME_PREMIUM_FACTOR: f64 = 0.05;

/// Steepness of the parity-ratio logistic.
const DELTA_STEEPNESS: f64 = 5.0;

/// Prices a convertible bond.
///
/// # Arguments
///
/// * `params` - Bond terms and market inputs
///
/// # Returns
///
/// The rounded valuation. Zero strike (straight debt), a zero floor and a
/// non-positive fair value are handled without error.
///
/// # Errors
///
/// - `PricingError::InvalidInput` if `params` fails validation
/// - `PricingError::NumericalInstability` if the fair value is not finite
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::PricingParameters;
/// use pricer_models::pricers::price_bond;
///
/// let params = PricingParameters {
///     spot_price: 120.0,
///     strike_price: 100.0,
///     ..Default::default()
/// };
/// let result = price_bond(&params).unwrap();
/// assert_eq!(result.bond_floor, 99.501);
/// assert_eq!(result.bond_parity, 120.0);
/// assert_eq!(result.fair_value, 121.5);
/// assert_eq!(result.delta, 0.737);
/// assert_eq!(result.expected_discount, 1.23);
/// ```
pub fn price_bond(params: &PricingParameters) -> Result<PricingResult, PricingError> {
    params.validate()?;

    let notional = params.notional;
    let t = params.time_to_maturity_years;

    let discount_rate = params.interest_rate + params.credit_spread_bps / 10_000.0;
    let pv_factor = (-discount_rate * t).exp();

    let mut bond_floor = notional * params.redemption_rate * pv_factor;
    if params.coupon_rate > 0.0 && t > 0.0 {
        bond_floor += notional * params.coupon_rate * t * pv_factor;
    }

    let bond_parity = if params.strike_price > 0.0 {
        notional / params.strike_price * params.spot_price
    } else {
        notional
    };

    let time_premium =
        notional * params.volatility * t.max(MIN_PREMIUM_TIME).sqrt() * TIME_PREMIUM_FACTOR;
    let borrow_cost = notional * (params.borrow_rate_bps / 10_000.0) * t;

    let fair_value = (bond_floor.max(bond_parity) + time_premium - borrow_cost).max(MIN_FAIR_VALUE);
    if !fair_value.is_finite() {
        return Err(PricingError::NumericalInstability(format!(
            "bond fair value is not finite: floor = {}, parity = {}",
            bond_floor, bond_parity
        )));
    }

    let parity_ratio = if bond_floor > 0.0 {
        bond_parity / bond_floor
    } else {
        1.0
    };
    let delta = round_to(logistic(parity_ratio - 1.0, DELTA_STEEPNESS), 3);
    let bond_delta = round_to(1.0 - delta, 3);

    let expected_discount = if fair_value > 0.0 {
        round_to((fair_value - bond_parity) / fair_value * 100.0, 2)
    } else {
        0.0
    };

    tracing::debug!(
        fair_value,
        bond_floor,
        bond_parity,
        delta,
        "Priced convertible bond"
    );

    Ok(PricingResult {
        fair_value: round_to(fair_value, 3),
        delta,
        expected_discount,
        bond_delta,
        bond_floor: round_to(bond_floor, 3),
        bond_parity: round_to(bond_parity, 3),
        currency: params.currency,
    })
}

/// Bond pricer with configurable sample axes.
///
/// Holds no mutable state: every generator re-samples its axes, so two
/// calls on the same pricer return identical data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BondPricer {
    coupon_rate: f64,
    maturity_range: AxisRange,
    yield_range: AxisRange,
}

impl Default for BondPricer {
    fn default() -> Self {
        Self {
            coupon_rate: BondPricer::DEFAULT_COUPON_RATE,
            maturity_range: BondPricer::DEFAULT_MATURITY_RANGE,
            yield_range: BondPricer::DEFAULT_YIELD_RANGE,
        }
    }
}

impl BondPricer {
    /// Annual coupon rate in percent.
    pub const DEFAULT_COUPON_RATE: f64 = 4.5;

    /// Maturities 1..=30 years, 30 points.
    pub const DEFAULT_MATURITY_RANGE: AxisRange = AxisRange::new(1.0, 30.0, 30);

    /// Yields 2%..=8%, 30 points.
    pub const DEFAULT_YIELD_RANGE: AxisRange = AxisRange::new(2.0, 8.0, 30);

    /// Starts a builder from the defaults.
    pub fn builder() -> BondPricerBuilder {
        BondPricerBuilder::new()
    }

    /// Annual coupon rate in percent.
    #[inline]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Maturity sample range.
    #[inline]
    pub fn maturity_range(&self) -> AxisRange {
        self.maturity_range
    }

    /// Yield sample range.
    #[inline]
    pub fn yield_range(&self) -> AxisRange {
        self.yield_range
    }

    /// Evenly spaced maturities.
    pub fn generate_maturities(&self) -> Vec<f64> {
        self.maturity_range.samples()
    }

    /// Evenly spaced yields.
    pub fn generate_yields(&self) -> Vec<f64> {
        self.yield_range.samples()
    }

    /// See [`price_bond`].
    pub fn price_bond(&self, params: &PricingParameters) -> Result<PricingResult, PricingError> {
        price_bond(params)
    }

    /// Pairs two series over the maturity axis.
    ///
    /// Only the two requested series are evaluated.
    pub fn generate_curve_data(&self, x: BondSeries, y: BondSeries) -> CurveData {
        self.curve_with_labels(x, y, x.name(), y.name())
    }

    /// [`BondPricer::generate_curve_data`] from axis names.
    ///
    /// # Errors
    /// [`AxisError::UnknownAxis`] for a name outside [`BondSeries`].
    pub fn curve_data_from_names(&self, x: &str, y: &str) -> Result<CurveData, AxisError> {
        Ok(self.generate_curve_data(parse_axis(x)?, parse_axis(y)?))
    }

    /// [`BondPricer::generate_curve_data`] from axis names, falling back to
    /// `Maturity` / `Yield` for unknown names.
    ///
    /// The labels are the requested names, even when a fallback was used.
    pub fn curve_data_lenient(&self, x: &str, y: &str) -> CurveData {
        let x_series = resolve_or(x, BondSeries::Maturity);
        let y_series = resolve_or(y, BondSeries::Yield);
        self.curve_with_labels(x_series, y_series, x, y)
    }

    fn curve_with_labels(
        &self,
        x: BondSeries,
        y: BondSeries,
        x_label: &str,
        y_label: &str,
    ) -> CurveData {
        let maturities = self.generate_maturities();
        let x_values = x.sample(&maturities);
        let y_values = y.sample(&maturities);
        tracing::debug!(
            x = x.name(),
            y = y.name(),
            points = maturities.len(),
            "Generated bond curve"
        );
        CurveData::from_equal_len(x_values, y_values, x_label, y_label)
    }

    /// Evaluates `metric` over the maturity × yield mesh.
    ///
    /// The grids have shape `(yield count, maturity count)`.
    pub fn generate_surface_data(&self, metric: BondSurfaceMetric) -> SurfaceData {
        let maturities = self.generate_maturities();
        let yields = self.generate_yields();
        let shape = (yields.len(), maturities.len());
        tracing::debug!(
            z = metric.name(),
            shape = ?shape,
            "Generated bond surface"
        );
        SurfaceData::from_axes(&maturities, &yields, metric.colorscale(), |x, y| {
            metric.evaluate(x, y)
        })
    }

    /// [`BondPricer::generate_surface_data`] from a metric name.
    ///
    /// # Errors
    /// [`AxisError::UnknownAxis`] for a name outside [`BondSurfaceMetric`].
    pub fn surface_data_from_name(&self, z: &str) -> Result<SurfaceData, AxisError> {
        Ok(self.generate_surface_data(parse_axis(z)?))
    }

    /// [`BondPricer::generate_surface_data`] from a metric name, drawing the
    /// `Baseline` surface for unknown names.
    pub fn surface_data_lenient(&self, z: &str) -> SurfaceData {
        self.generate_surface_data(resolve_or(z, BondSurfaceMetric::Baseline))
    }

    /// Builds a titled chart; `z` selects the mode.
    ///
    /// ```
    /// use pricer_models::pricers::BondPricer;
    /// use pricer_models::axes::{BondSeries, BondSurfaceMetric, ChartMode};
    ///
    /// let pricer = BondPricer::default();
    /// let chart = pricer.chart(
    ///     BondSeries::Maturity,
    ///     BondSeries::Price,
    ///     ChartMode::Surface(BondSurfaceMetric::Coupon),
    /// );
    /// assert_eq!(chart.title, "3D Surface: Coupon Analysis");
    /// assert_eq!(chart.z_title.as_deref(), Some("Coupon"));
    /// ```
    pub fn chart(
        &self,
        x: BondSeries,
        y: BondSeries,
        z: ChartMode<BondSurfaceMetric>,
    ) -> Chart {
        let z_title = z.surface_metric().map(|metric| metric.name());
        self.assemble_chart(x.name(), y.name(), z_title, z, || self.generate_curve_data(x, y))
    }

    /// Builds a titled chart from axis names under `resolution`.
    ///
    /// In lenient mode the titles keep the requested names.
    pub fn chart_from_names(
        &self,
        x: &str,
        y: &str,
        z: &str,
        resolution: AxisResolution,
    ) -> Result<Chart, PricingError> {
        let mode = ChartMode::resolve(z, resolution, BondSurfaceMetric::Baseline)?;
        let chart = match resolution {
            AxisResolution::Strict => {
                let x_series = parse_axis::<BondSeries>(x)?;
                let y_series = parse_axis::<BondSeries>(y)?;
                self.chart(x_series, y_series, mode)
            }
            AxisResolution::Lenient => {
                let z_title = mode.surface_metric().map(|_| z);
                self.assemble_chart(x, y, z_title, mode, || self.curve_data_lenient(x, y))
            }
        };
        Ok(chart)
    }

    fn assemble_chart<F>(
        &self,
        x_title: &str,
        y_title: &str,
        z_title: Option<&str>,
        mode: ChartMode<BondSurfaceMetric>,
        curve: F,
    ) -> Chart
    where
        F: FnOnce() -> CurveData,
    {
        match mode {
            ChartMode::Curve => {
                let data = curve();
                Chart {
                    title: format!("{} vs {}", data.y_label(), data.x_label()),
                    x_title: data.x_label().to_string(),
                    y_title: data.y_label().to_string(),
                    z_title: None,
                    data: ChartData::Curve(data),
                }
            }
            ChartMode::Surface(metric) => {
                let z_title = z_title.unwrap_or(metric.name());
                Chart {
                    title: format!("3D Surface: {} Analysis", z_title),
                    x_title: x_title.to_string(),
                    y_title: y_title.to_string(),
                    z_title: Some(z_title.to_string()),
                    data: ChartData::Surface(self.generate_surface_data(metric)),
                }
            }
        }
    }
}

/// Builder for [`BondPricer`].
///
/// # Examples
///
/// ```
/// use pricer_models::pricers::BondPricer;
/// use pricer_core::math::grid::AxisRange;
///
/// let pricer = BondPricer::builder()
///     .maturity_range(AxisRange::new(0.5, 10.0, 20))
///     .yield_range(AxisRange::new(1.0, 5.0, 9))
///     .build()
///     .unwrap();
///
/// assert_eq!(pricer.generate_maturities().len(), 20);
///
/// let result = BondPricer::builder()
///     .maturity_range(AxisRange::new(0.0, 10.0, 20))
///     .build();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BondPricerBuilder {
    coupon_rate: f64,
    maturity_range: AxisRange,
    yield_range: AxisRange,
}

impl Default for BondPricerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BondPricerBuilder {
    /// Builder seeded with the [`BondPricer`] defaults.
    pub fn new() -> Self {
        Self {
            coupon_rate: BondPricer::DEFAULT_COUPON_RATE,
            maturity_range: BondPricer::DEFAULT_MATURITY_RANGE,
            yield_range: BondPricer::DEFAULT_YIELD_RANGE,
        }
    }

    /// Sets the coupon rate in percent.
    pub fn coupon_rate(mut self, coupon_rate: f64) -> Self {
        self.coupon_rate = coupon_rate;
        self
    }

    /// Sets the maturity sample range.
    pub fn maturity_range(mut self, range: AxisRange) -> Self {
        self.maturity_range = range;
        self
    }

    /// Sets the yield sample range.
    pub fn yield_range(mut self, range: AxisRange) -> Self {
        self.yield_range = range;
        self
    }

    /// Validates and builds the pricer.
    ///
    /// # Errors
    ///
    /// - `InstrumentError::NonFiniteParameter` for a non-finite coupon rate
    /// - `InstrumentError::Grid` for an empty or non-finite range
    /// - `InstrumentError::InvalidRange` if any maturity sample is not
    ///   strictly positive (`Yield` takes its logarithm)
    pub fn build(self) -> Result<BondPricer, InstrumentError> {
        if !self.coupon_rate.is_finite() {
            return Err(InstrumentError::NonFiniteParameter {
                field: "coupon_rate",
                value: self.coupon_rate,
            });
        }
        self.maturity_range.validate("maturity_range")?;
        self.yield_range.validate("yield_range")?;

        let m = self.maturity_range;
        if m.min <= 0.0 || m.max <= 0.0 {
            return Err(InstrumentError::InvalidRange {
                name: "maturity",
                min: m.min,
                max: m.max,
                count: m.count,
                reason: "maturities must be strictly positive",
            });
        }

        Ok(BondPricer {
            coupon_rate: self.coupon_rate,
            maturity_range: self.maturity_range,
            yield_range: self.yield_range,
        })
    }
}
