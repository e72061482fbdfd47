//! Price-warrant command implementation

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use pricer_core::types::{time_to_maturity, Currency, Date};
use pricer_models::instruments::WarrantParameters;
use pricer_models::pricers::WarrantPricer;
use tracing::info;

use super::{load_json, render};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `pricer price-warrant`
#[derive(Debug, Clone, Default, Args)]
pub struct WarrantArgs {
    /// JSON parameter file
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Underlying spot price
    #[arg(long)]
    pub spot: Option<f64>,

    /// Exercise price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Risk-free rate
    #[arg(long)]
    pub interest_rate: Option<f64>,

    /// Borrow cost in basis points
    #[arg(long)]
    pub borrow_bps: Option<f64>,

    /// Time to maturity in years
    #[arg(long, conflicts_with = "maturity_date")]
    pub maturity: Option<f64>,

    /// Valuation date (YYYY-MM-DD)
    #[arg(long, requires = "maturity_date")]
    pub valuation_date: Option<String>,

    /// Maturity date (YYYY-MM-DD)
    #[arg(long, requires = "valuation_date")]
    pub maturity_date: Option<String>,

    /// Currency code
    #[arg(long)]
    pub currency: Option<String>,
}

/// Assembles the parameter set from the file and flags.
pub fn build_params(args: &WarrantArgs) -> Result<WarrantParameters> {
    let mut params: WarrantParameters = match &args.params {
        Some(path) => load_json(path)?,
        None => WarrantParameters::default(),
    };

    let overrides = [
        (args.spot, &mut params.spot_price),
        (args.strike, &mut params.strike_price),
        (args.volatility, &mut params.volatility),
        (args.interest_rate, &mut params.interest_rate),
        (args.borrow_bps, &mut params.borrow_rate_bps),
        (args.maturity, &mut params.time_to_maturity_years),
    ];
    for (value, field) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }

    if let (Some(valuation), Some(maturity)) = (&args.valuation_date, &args.maturity_date) {
        params.time_to_maturity_years =
            time_to_maturity(Date::parse(valuation)?, Date::parse(maturity)?);
    }
    if let Some(code) = &args.currency {
        params.currency = Currency::from_str(code)?;
    }

    Ok(params)
}

/// Prices the warrant and renders the result.
pub fn execute(args: &WarrantArgs, config: &CliConfig) -> Result<String> {
    let params = build_params(args)?;
    info!(
        spot = params.spot_price,
        strike = params.strike_price,
        "Pricing warrant"
    );

    let result = WarrantPricer::new().price_warrant(&params)?;
    render(config.output_format, &result, &result.summary())
}

/// Run the price-warrant command
pub fn run(args: &WarrantArgs, config: &CliConfig) -> Result<()> {
    println!("{}", execute(args, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::CliError;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_params_dates() {
        let args = WarrantArgs {
            valuation_date: Some("2026-02-11".to_string()),
            maturity_date: Some("2027-02-11".to_string()),
            ..Default::default()
        };
        let params = build_params(&args).unwrap();
        assert_relative_eq!(params.time_to_maturity_years, 365.0 / 365.25, epsilon = 1e-12);
    }

    #[test]
    fn test_build_params_rejects_impossible_date() {
        let args = WarrantArgs {
            valuation_date: Some("2026-02-30".to_string()),
            maturity_date: Some("2026-03-13".to_string()),
            ..Default::default()
        };
        assert!(matches!(build_params(&args), Err(CliError::Date(_))));
    }

    #[test]
    fn test_defaults_price_at_the_money() {
        let config = CliConfig {
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        let out = execute(&WarrantArgs::default(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["fair_value"], 12.05);
        assert_eq!(value["delta"], 0.5);
        assert_eq!(value["expected_discount"], 12.05);
    }

    #[test]
    fn test_in_the_money_table() {
        let args = WarrantArgs {
            spot: Some(120.0),
            strike: Some(100.0),
            ..Default::default()
        };
        let out = execute(&args, &CliConfig::default()).unwrap();
        assert!(out.contains("│ Fair Value        │ JPY 34.46 │"));
        assert!(out.contains("│ Delta             │ 0.88      │"));
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let args = WarrantArgs {
            volatility: Some(-0.1),
            ..Default::default()
        };
        assert!(matches!(
            execute(&args, &CliConfig::default()),
            Err(CliError::Pricing(_))
        ));
    }
}
