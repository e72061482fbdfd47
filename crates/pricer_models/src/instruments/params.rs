//! Pricing parameter records.
//!
//! Each record is an immutable-per-call value: pricers read it and never
//! keep it. Defaults live on the structs (`Default` / serde field defaults)
//! so that a partially specified JSON parameter file is a valid input.

use pricer_core::types::{time_to_maturity_or_default, Currency};

use super::error::InstrumentError;

/// Stochastic simulation settings.
///
/// Accepted alongside every parameter set so that a Monte Carlo engine can
/// be slotted in later. The closed-form pricers in this crate do not read
/// them, so they never influence a result.
///
/// # Examples
/// ```
/// use pricer_models::instruments::SimulationSettings;
///
/// let sim = SimulationSettings::default();
/// assert_eq!(sim.trial_num, 5);
/// assert_eq!(sim.simulation_num, 100);
/// assert_eq!(sim.jump_std_dev, 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationSettings {
    /// RNG seed
    pub seed: u64,
    /// Number of independent trials
    pub trial_num: u32,
    /// Paths per trial
    pub simulation_num: u32,
    /// Jump intensity (jumps per year)
    pub jump_lambda: f64,
    /// Mean log jump size
    pub jump_mean: f64,
    /// Log jump size standard deviation
    pub jump_std_dev: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            trial_num: 5,
            simulation_num: 100,
            jump_lambda: 0.0,
            jump_mean: 0.0,
            jump_std_dev: 0.2,
        }
    }
}

/// Convertible bond pricing parameters.
///
/// Rates are decimals (`0.005` = 0.5%), spreads and borrow costs are in
/// basis points.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PricingParameters;
///
/// let params = PricingParameters {
///     spot_price: 120.0,
///     strike_price: 100.0,
///     ..Default::default()
/// };
/// assert_eq!(params.notional, 100.0);
/// assert_eq!(params.redemption_rate, 1.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PricingParameters {
    /// Underlying spot price
    pub spot_price: f64,
    /// Conversion price; 0 prices the bond as straight debt
    pub strike_price: f64,
    /// Face amount
    pub notional: f64,
    /// Annual coupon rate (decimal)
    pub coupon_rate: f64,
    /// Redemption amount as a fraction of notional
    pub redemption_rate: f64,
    /// Underlying volatility
    pub volatility: f64,
    /// Risk-free rate (decimal)
    pub interest_rate: f64,
    /// Stock borrow cost in basis points
    pub borrow_rate_bps: f64,
    /// Issuer credit spread in basis points
    pub credit_spread_bps: f64,
    /// Time to maturity in years
    pub time_to_maturity_years: f64,
    /// Minimum exercise discount
    pub min_exe_disc: f64,
    /// Already-exercised or redeemed amount
    pub exec_redeemed: f64,
    /// Simulation settings (not read by the closed-form pricer)
    pub simulation: SimulationSettings,
    /// Settlement currency
    pub currency: Currency,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            spot_price: 100.0,
            strike_price: 100.0,
            notional: 100.0,
            coupon_rate: 0.0,
            redemption_rate: 1.0,
            volatility: 0.3,
            interest_rate: 0.005,
            borrow_rate_bps: 0.0,
            credit_spread_bps: 0.0,
            time_to_maturity_years: 1.0,
            min_exe_disc: 0.0,
            exec_redeemed: 0.0,
            simulation: SimulationSettings::default(),
            currency: Currency::default(),
        }
    }
}

impl PricingParameters {
    /// Replaces the time to maturity with the ACT/365.25 year fraction
    /// between two ISO dates (floored at 0.001, `1.0` if unreadable).
    ///
    /// ```
    /// use pricer_models::instruments::PricingParameters;
    ///
    /// let params = PricingParameters::default().with_maturity_dates("2026-02-11", "2026-03-13");
    /// assert!((params.time_to_maturity_years - 30.0 / 365.25).abs() < 1e-12);
    /// ```
    pub fn with_maturity_dates(mut self, valuation_date: &str, maturity_date: &str) -> Self {
        self.time_to_maturity_years = time_to_maturity_or_default(valuation_date, maturity_date);
        self
    }

    /// Validates the fields the pricer depends on.
    ///
    /// # Errors
    /// - `NonFiniteParameter` if any numeric field is NaN or infinite
    /// - `InvalidNotional` if `notional <= 0`
    /// - `InvalidMaturity` if `time_to_maturity_years < 0`
    /// - `InvalidVolatility` if `volatility < 0`
    ///
    /// A zero strike is valid and selects the straight-debt branch.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        check_finite(&[
            ("spot_price", self.spot_price),
            ("strike_price", self.strike_price),
            ("notional", self.notional),
            ("coupon_rate", self.coupon_rate),
            ("redemption_rate", self.redemption_rate),
            ("volatility", self.volatility),
            ("interest_rate", self.interest_rate),
            ("borrow_rate_bps", self.borrow_rate_bps),
            ("credit_spread_bps", self.credit_spread_bps),
            ("time_to_maturity_years", self.time_to_maturity_years),
            ("min_exe_disc", self.min_exe_disc),
            ("exec_redeemed", self.exec_redeemed),
        ])?;

        if self.notional <= 0.0 {
            return Err(InstrumentError::InvalidNotional {
                notional: self.notional,
            });
        }
        check_maturity_and_vol(self.time_to_maturity_years, self.volatility)
    }
}

/// Warrant pricing parameters.
///
/// # Examples
/// ```
/// use pricer_models::instruments::WarrantParameters;
///
/// let params = WarrantParameters::new(110.0, 100.0);
/// assert_eq!(params.volatility, 0.3);
/// assert_eq!(params.reset_lookback_days, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WarrantParameters {
    /// Underlying spot price
    pub spot_price: f64,
    /// Exercise price
    pub strike_price: f64,
    /// Underlying volatility
    pub volatility: f64,
    /// Risk-free rate (decimal)
    pub interest_rate: f64,
    /// Stock borrow cost in basis points
    pub borrow_rate_bps: f64,
    /// Time to maturity in years
    pub time_to_maturity_years: f64,
    /// Minimum exercise discount
    pub min_exe_disc: f64,
    /// Strike reset lookback window in days
    pub reset_lookback_days: u32,
    /// Strike reset multiplier
    pub reset_multiplier: f64,
    /// Simulation settings (not read by the closed-form pricer)
    pub simulation: SimulationSettings,
    /// Settlement currency
    pub currency: Currency,
}

impl Default for WarrantParameters {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

impl WarrantParameters {
    /// Parameters for the given spot and strike with every other field at
    /// its default.
    pub fn new(spot_price: f64, strike_price: f64) -> Self {
        Self {
            spot_price,
            strike_price,
            volatility: 0.3,
            interest_rate: 0.005,
            borrow_rate_bps: 0.0,
            time_to_maturity_years: 1.0,
            min_exe_disc: 0.0,
            reset_lookback_days: 10,
            reset_multiplier: 0.9,
            simulation: SimulationSettings::default(),
            currency: Currency::default(),
        }
    }

    /// See [`PricingParameters::with_maturity_dates`].
    pub fn with_maturity_dates(mut self, valuation_date: &str, maturity_date: &str) -> Self {
        self.time_to_maturity_years = time_to_maturity_or_default(valuation_date, maturity_date);
        self
    }

    /// Validates the fields the pricer depends on.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        check_finite(&[
            ("spot_price", self.spot_price),
            ("strike_price", self.strike_price),
            ("volatility", self.volatility),
            ("interest_rate", self.interest_rate),
            ("borrow_rate_bps", self.borrow_rate_bps),
            ("time_to_maturity_years", self.time_to_maturity_years),
            ("min_exe_disc", self.min_exe_disc),
            ("reset_multiplier", self.reset_multiplier),
        ])?;
        check_maturity_and_vol(self.time_to_maturity_years, self.volatility)
    }
}

fn check_finite(fields: &[(&'static str, f64)]) -> Result<(), InstrumentError> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(field, value)) => Err(InstrumentError::NonFiniteParameter { field, value }),
        None => Ok(()),
    }
}

fn check_maturity_and_vol(time_to_maturity: f64, volatility: f64) -> Result<(), InstrumentError> {
    if time_to_maturity < 0.0 {
        return Err(InstrumentError::InvalidMaturity { time_to_maturity });
    }
    if volatility < 0.0 {
        return Err(InstrumentError::InvalidVolatility { volatility });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_defaults() {
        let params = PricingParameters::default();
        assert_eq!(params.notional, 100.0);
        assert_eq!(params.redemption_rate, 1.0);
        assert_eq!(params.volatility, 0.3);
        assert_eq!(params.interest_rate, 0.005);
        assert_eq!(params.currency, Currency::JPY);
        assert_eq!(params.simulation, SimulationSettings::default());
    }

    #[test]
    fn test_zero_strike_is_valid() {
        let params = PricingParameters {
            strike_price: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_maturity_is_valid() {
        let params = PricingParameters {
            time_to_maturity_years: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_invalid_notional() {
        for notional in [0.0, -100.0] {
            let params = PricingParameters {
                notional,
                ..Default::default()
            };
            assert_eq!(
                params.validate(),
                Err(InstrumentError::InvalidNotional { notional })
            );
        }
    }

    #[test]
    fn test_negative_maturity() {
        let params = PricingParameters {
            time_to_maturity_years: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(InstrumentError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_negative_volatility() {
        let params = WarrantParameters {
            volatility: -0.1,
            ..WarrantParameters::new(100.0, 100.0)
        };
        assert!(matches!(
            params.validate(),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_non_finite_reports_first_field() {
        let params = PricingParameters {
            spot_price: f64::NAN,
            credit_spread_bps: f64::INFINITY,
            ..Default::default()
        };
        match params.validate() {
            Err(InstrumentError::NonFiniteParameter { field, .. }) => {
                assert_eq!(field, "spot_price")
            }
            other => panic!("Expected NonFiniteParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_with_maturity_dates_fallback() {
        let params = WarrantParameters::new(100.0, 100.0).with_maturity_dates("bad", "2026-03-12");
        assert_eq!(params.time_to_maturity_years, 1.0);
    }

    #[test]
    fn test_with_maturity_dates_floor() {
        let params = PricingParameters::default().with_maturity_dates("2026-03-13", "2026-02-11");
        assert_eq!(params.time_to_maturity_years, 0.001);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let params: PricingParameters =
            serde_json::from_str(r#"{"spot_price": 120.0, "currency": "USD"}"#).unwrap();
        assert_eq!(params.spot_price, 120.0);
        assert_eq!(params.strike_price, 100.0);
        assert_eq!(params.currency, Currency::USD);
        assert_eq!(params.simulation.trial_num, 5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_simulation_json() {
        let params: WarrantParameters =
            serde_json::from_str(r#"{"simulation": {"seed": 42}}"#).unwrap();
        assert_eq!(params.simulation.seed, 42);
        assert_eq!(params.simulation.simulation_num, 100);
    }
}
