//! Time types and year-fraction conventions for maturity calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `year_fraction`: ACT/365.25 year fraction between two dates
//! - `time_to_maturity` helpers with the floor and fallback the pricing
//!   forms rely on
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{year_fraction, Date};
//!
//! let start = Date::from_ymd(2026, 2, 11).unwrap();
//! let end = Date::from_ymd(2026, 3, 13).unwrap();
//!
//! let yf = year_fraction(start, end);
//! assert!((yf - 30.0 / 365.25).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Smallest time to maturity handed to a pricer, in years.
///
/// Matured or same-day instruments are priced as if a sliver of time
/// remains so that `sqrt(T)` terms stay well defined.
pub const MIN_TIME_TO_MATURITY: f64 = 0.001;

/// Time to maturity used when the maturity dates cannot be read.
pub const DEFAULT_TIME_TO_MATURITY: f64 = 1.0;

/// Day-count denominator of the ACT/365.25 convention.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2026, 2, 11).unwrap();
/// assert_eq!(date.year(), 2026);
///
/// let parsed: Date = "2026-02-11".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = Date::from_ymd(2026, 2, 21).unwrap();
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// Returns `Err(DateError::InvalidDate)` for impossible dates
    /// such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::parse("2026-03-13").is_ok());
    /// assert!(Date::parse("13/03/2026").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the signed number of days from `other` to `self`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Signed ACT/365.25 year fraction between two dates.
///
/// Negative when `end` precedes `start`.
///
/// ```
/// use pricer_core::types::time::{year_fraction, Date};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
/// assert!((year_fraction(start, end) - 182.0 / 365.25).abs() < 1e-12);
/// assert!(year_fraction(end, start) < 0.0);
/// ```
#[inline]
pub fn year_fraction(start: Date, end: Date) -> f64 {
    (end - start) as f64 / DAYS_PER_YEAR
}

/// Time to maturity in years under ACT/365.25, floored at
/// [`MIN_TIME_TO_MATURITY`].
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{time_to_maturity, Date, MIN_TIME_TO_MATURITY};
///
/// let valuation = Date::from_ymd(2026, 2, 11).unwrap();
/// let maturity = Date::from_ymd(2027, 2, 11).unwrap();
/// assert!((time_to_maturity(valuation, maturity) - 365.0 / 365.25).abs() < 1e-12);
///
/// // Already matured
/// assert_eq!(time_to_maturity(maturity, valuation), MIN_TIME_TO_MATURITY);
/// ```
pub fn time_to_maturity(valuation: Date, maturity: Date) -> f64 {
    year_fraction(valuation, maturity).max(MIN_TIME_TO_MATURITY)
}

/// Time to maturity from ISO date strings.
///
/// Falls back to [`DEFAULT_TIME_TO_MATURITY`] when either string does not
/// parse, matching the behaviour of the pricing forms.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::time_to_maturity_or_default;
///
/// let ttm = time_to_maturity_or_default("2026-02-11", "2026-03-13");
/// assert!((ttm - 30.0 / 365.25).abs() < 1e-12);
///
/// assert_eq!(time_to_maturity_or_default("", "2026-03-13"), 1.0);
/// ```
pub fn time_to_maturity_or_default(valuation: &str, maturity: &str) -> f64 {
    match (Date::parse(valuation), Date::parse(maturity)) {
        (Ok(v), Ok(m)) => time_to_maturity(v, m),
        _ => DEFAULT_TIME_TO_MATURITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert_eq!(
            Date::from_ymd(2026, 2, 30),
            Err(DateError::InvalidDate {
                year: 2026,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn test_parse_and_display() {
        let date = Date::parse("2026-02-11").unwrap();
        assert_eq!(date.to_string(), "2026-02-11");
        assert_eq!(date.year(), 2026);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Date::parse(" 2026-02-11 ").unwrap(), d(2026, 2, 11));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Date::parse("2026/02/11"),
            Err(DateError::ParseError(_))
        ));
    }

    #[test]
    fn test_year_fraction_act_365_25() {
        assert_relative_eq!(
            year_fraction(d(2024, 1, 1), d(2024, 7, 1)),
            182.0 / 365.25,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            year_fraction(d(2026, 2, 11), d(2027, 2, 11)),
            365.0 / 365.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_year_fraction_negative_when_reversed() {
        assert!(year_fraction(d(2024, 7, 1), d(2024, 1, 1)) < 0.0);
    }

    #[test]
    fn test_time_to_maturity_floor() {
        assert_eq!(
            time_to_maturity(d(2026, 2, 11), d(2026, 2, 11)),
            MIN_TIME_TO_MATURITY
        );
    }

    #[test]
    fn test_time_to_maturity_or_default_fallback() {
        assert_eq!(
            time_to_maturity_or_default("2026-02-11", "garbage"),
            DEFAULT_TIME_TO_MATURITY
        );
        assert_eq!(
            time_to_maturity_or_default("garbage", "2026-02-11"),
            DEFAULT_TIME_TO_MATURITY
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_date_serde_transparent() {
        let json = serde_json::to_string(&d(2026, 3, 13)).unwrap();
        assert_eq!(json, "\"2026-03-13\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d(2026, 3, 13));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(y, m, day)| Date::from_ymd(y, m, day).ok())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_time_to_maturity_never_below_floor(
                start in date_strategy(),
                end in date_strategy(),
            ) {
                prop_assert!(time_to_maturity(start, end) >= MIN_TIME_TO_MATURITY);
            }

            #[test]
            fn test_string_path_matches_typed_path(
                start in date_strategy(),
                end in date_strategy(),
            ) {
                let typed = time_to_maturity(start, end);
                let parsed = time_to_maturity_or_default(&start.to_string(), &end.to_string());
                prop_assert_eq!(typed, parsed);
            }
        }
    }
}
