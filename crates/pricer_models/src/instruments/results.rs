//! Pricing result records.
//!
//! Results are produced fresh on every call and owned by the caller.
//! All monetary fields are already rounded by the pricer that produced
//! them; the `summary` helpers only format.

use pricer_core::types::Currency;

/// Convertible bond valuation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Fair value, never below 0.01 (3 dp)
    pub fair_value: f64,
    /// Equity sensitivity in `[0, 1]` (3 dp)
    pub delta: f64,
    /// Premium of fair value over parity, in percent (2 dp)
    pub expected_discount: f64,
    /// Debt sensitivity, `1 - delta` (3 dp)
    pub bond_delta: f64,
    /// Present value of redemption and coupons (3 dp)
    pub bond_floor: f64,
    /// Conversion value (3 dp)
    pub bond_parity: f64,
    /// Currency of the monetary fields
    pub currency: Currency,
}

impl PricingResult {
    /// Labelled display strings in form order.
    ///
    /// ```
    /// use pricer_models::instruments::PricingResult;
    /// use pricer_core::types::Currency;
    ///
    /// let result = PricingResult {
    ///     fair_value: 121.5,
    ///     delta: 0.737,
    ///     expected_discount: 1.23,
    ///     bond_delta: 0.263,
    ///     bond_floor: 99.501,
    ///     bond_parity: 120.0,
    ///     currency: Currency::JPY,
    /// };
    /// let summary = result.summary();
    /// assert_eq!(summary[0], ("Fair Value", "JPY 121.5".to_string()));
    /// assert_eq!(summary[2], ("Expected Discount", "1.23%".to_string()));
    /// assert_eq!(summary[5], ("Bond Parity", "JPY 120".to_string()));
    /// ```
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Fair Value", self.currency.format_amount(self.fair_value)),
            ("Delta", self.delta.to_string()),
            ("Expected Discount", format!("{}%", self.expected_discount)),
            ("Bond Delta", self.bond_delta.to_string()),
            ("Bond Floor", self.currency.format_amount(self.bond_floor)),
            ("Bond Parity", self.currency.format_amount(self.bond_parity)),
        ]
    }
}

/// Warrant valuation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarrantPricingResult {
    /// Fair value, never below 0.01 (2 dp)
    pub fair_value: f64,
    /// Logistic moneyness delta (2 dp)
    pub delta: f64,
    /// Time value as a percentage of spot (2 dp)
    pub expected_discount: f64,
    /// Currency of the monetary fields
    pub currency: Currency,
}

impl WarrantPricingResult {
    /// Labelled display strings in form order.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Fair Value", self.currency.format_amount(self.fair_value)),
            ("Delta", self.delta.to_string()),
            ("Expected Discount", format!("{}%", self.expected_discount)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warrant_summary() {
        let result = WarrantPricingResult {
            fair_value: 15.5,
            delta: 0.47,
            expected_discount: 0.03,
            currency: Currency::JPY,
        };
        assert_eq!(
            result.summary(),
            vec![
                ("Fair Value", "JPY 15.5".to_string()),
                ("Delta", "0.47".to_string()),
                ("Expected Discount", "0.03%".to_string()),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pricing_result_json_fields() {
        let result = PricingResult {
            fair_value: 101.02,
            delta: 0.136,
            expected_discount: 0.03,
            bond_delta: 0.864,
            bond_floor: 97.508,
            bond_parity: 100.0,
            currency: Currency::JPY,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["bond_floor"], 97.508);
        assert_eq!(value["currency"], "JPY");
    }
}
