//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency parsing
//! - `GridError`: Errors from sample axis and mesh construction

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative notional".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative notional");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Grid construction errors.
///
/// Raised by the sample-axis and mesh helpers in [`crate::math::grid`]
/// when the requested domain cannot produce a usable grid.
///
/// # Examples
/// ```
/// use pricer_core::types::GridError;
///
/// let err = GridError::ShapeMismatch { expected: (30, 30), got: (30, 29) };
/// assert!(format!("{}", err).contains("(30, 29)"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// A sample axis or grid with no points was requested.
    #[error("Grid must contain at least one point")]
    EmptyGrid,

    /// A domain bound is NaN or infinite.
    #[error("Non-finite grid bound {name} = {value}")]
    NonFinite {
        /// Name of the offending bound
        name: String,
        /// The offending value
        value: f64,
    },

    /// Two grids that must share a shape do not.
    #[error("Grid shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        got: (usize, usize),
    },
}

impl From<GridError> for PricingError {
    fn from(err: GridError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

impl From<CurrencyError> for PricingError {
    fn from(err: CurrencyError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::NumericalInstability("NaN fair value".to_string()).to_string(),
            "Numerical instability: NaN fair value"
        );
        assert_eq!(
            PricingError::InvalidInput("Negative notional".to_string()).to_string(),
            "Invalid input: Negative notional"
        );
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad");
    }

    #[test]
    fn test_grid_error_display() {
        assert_eq!(
            GridError::EmptyGrid.to_string(),
            "Grid must contain at least one point"
        );
        let err = GridError::NonFinite {
            name: "min".to_string(),
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Non-finite grid bound min = inf");
    }

    #[test]
    fn test_grid_error_into_pricing_error() {
        let err: PricingError = GridError::EmptyGrid.into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("at least one point")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_currency_error_into_pricing_error() {
        let err: PricingError = CurrencyError::UnknownCurrency("ABC".to_string()).into();
        assert_eq!(err.to_string(), "Invalid input: Unknown currency: ABC");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
        let err = DateError::ParseError("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
