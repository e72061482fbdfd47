//! Core time, currency and error types.
//!
//! This module provides:
//! - `time`: `Date`, `year_fraction` and time-to-maturity helpers
//! - `currency`: ISO 4217 currency codes
//! - `error`: Structured error types for pricing, date, currency and grid operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod currency;
pub mod error;
pub mod time;

pub use currency::Currency;
pub use error::{CurrencyError, DateError, GridError, PricingError};
pub use time::{time_to_maturity, time_to_maturity_or_default, year_fraction, Date};
