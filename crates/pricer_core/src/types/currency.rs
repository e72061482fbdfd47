//! Currency types for pricing results.
//!
//! This module provides ISO 4217 currency codes carried on parameter and
//! result records, plus the `"{code} {amount}"` presentation used when a
//! value is shown to a user.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::currency::Currency;
//!
//! let jpy = Currency::JPY;
//! assert_eq!(jpy.code(), "JPY");
//! assert_eq!(jpy.format_amount(101.02), "JPY 101.02");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes.
///
/// Designed for static dispatch (enum-based). The default is `JPY`, the
/// listing currency of the instruments the dashboard was built around.
///
/// # Examples
///
/// ```
/// use pricer_core::types::currency::Currency;
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
///
/// assert_eq!(Currency::default(), Currency::JPY);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar
    USD,

    /// Euro
    EUR,

    /// British Pound Sterling
    GBP,

    /// Japanese Yen
    #[default]
    JPY,

    /// Swiss Franc
    CHF,

    /// Hong Kong Dollar
    HKD,

    /// Australian Dollar
    AUD,
}

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Currency; 7] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CHF,
        Currency::HKD,
        Currency::AUD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::HKD => "HKD",
            Currency::AUD => "AUD",
        }
    }

    /// Formats an already-rounded amount as `"{code} {amount}"`.
    ///
    /// The amount is rendered with the shortest representation that
    /// round-trips, so `100.0` prints as `100`.
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::JPY.format_amount(100.0), "JPY 100");
    /// assert_eq!(Currency::USD.format_amount(97.508), "USD 97.508");
    /// ```
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{} {}", self.code(), amount)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let upper = s.trim().to_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::JPY.code(), "JPY");
        assert_eq!(Currency::HKD.code(), "HKD");
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" jpy ".parse::<Currency>().unwrap(), Currency::JPY);
        assert_eq!("Aud".parse::<Currency>().unwrap(), Currency::AUD);
    }

    #[test]
    fn test_currency_from_str_unknown() {
        match "XYZ".parse::<Currency>() {
            Err(CurrencyError::UnknownCurrency(code)) => assert_eq!(code, "XYZ"),
            _ => panic!("Expected UnknownCurrency error"),
        }
    }

    #[test]
    fn test_every_code_parses_back() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(Currency::JPY.format_amount(121.5), "JPY 121.5");
        assert_eq!(Currency::EUR.format_amount(0.01), "EUR 0.01");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Currency::GBP), "GBP");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_currency_serde() {
        let json = serde_json::to_string(&Currency::JPY).unwrap();
        assert_eq!(json, "\"JPY\"");
        let parsed: Currency = serde_json::from_str("\"CHF\"").unwrap();
        assert_eq!(parsed, Currency::CHF);
    }
}
