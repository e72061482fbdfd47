//! Instrument error types.
//!
//! This module provides structured error handling for parameter
//! validation and pricer construction.

use pricer_core::types::{GridError, PricingError};
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidNotional`: Notional amount is non-positive
/// - `InvalidMaturity`: Time to maturity is negative
/// - `InvalidVolatility`: Volatility is negative
/// - `NonFiniteParameter`: A numeric field is NaN or infinite
/// - `InvalidRange`: A sample range cannot feed the pricer's formulas
/// - `Grid`: A sample range failed generic grid validation
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidNotional { notional: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid notional amount (non-positive).
    #[error("Invalid notional: N = {notional}")]
    InvalidNotional {
        /// The invalid notional value
        notional: f64,
    },

    /// Invalid time to maturity (negative).
    #[error("Invalid time to maturity: T = {time_to_maturity}")]
    InvalidMaturity {
        /// The invalid time to maturity in years
        time_to_maturity: f64,
    },

    /// Invalid volatility (negative).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility
        volatility: f64,
    },

    /// A numeric parameter is NaN or infinite.
    #[error("Non-finite parameter {field} = {value}")]
    NonFiniteParameter {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A sample range is unusable for the formulas it feeds.
    #[error("Invalid {name} range [{min}, {max}] with {count} points: {reason}")]
    InvalidRange {
        /// Range name
        name: &'static str,
        /// First sample
        min: f64,
        /// Last sample
        max: f64,
        /// Sample count
        count: usize,
        /// Why the range was rejected
        reason: &'static str,
    },

    /// Generic grid validation failure.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_notional_display() {
        let err = InstrumentError::InvalidNotional { notional: -1000.0 };
        assert_eq!(format!("{}", err), "Invalid notional: N = -1000");
    }

    #[test]
    fn test_invalid_maturity_display() {
        let err = InstrumentError::InvalidMaturity {
            time_to_maturity: -0.5,
        };
        assert_eq!(format!("{}", err), "Invalid time to maturity: T = -0.5");
    }

    #[test]
    fn test_non_finite_display() {
        let err = InstrumentError::NonFiniteParameter {
            field: "spot_price",
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Non-finite parameter spot_price = NaN");
    }

    #[test]
    fn test_invalid_range_display() {
        let err = InstrumentError::InvalidRange {
            name: "maturity",
            min: 0.0,
            max: 30.0,
            count: 30,
            reason: "maturities must be strictly positive",
        };
        assert_eq!(
            format!("{}", err),
            "Invalid maturity range [0, 30] with 30 points: maturities must be strictly positive"
        );
    }

    #[test]
    fn test_grid_error_is_transparent() {
        let err: InstrumentError = GridError::EmptyGrid.into();
        assert_eq!(err.to_string(), GridError::EmptyGrid.to_string());
    }

    #[test]
    fn test_into_pricing_error() {
        let pricing_err: PricingError =
            InstrumentError::InvalidVolatility { volatility: -0.3 }.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("-0.3")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
