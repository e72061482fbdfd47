//! Price-bond command implementation
//!
//! Point valuation of a convertible bond. Parameters come from an optional
//! JSON file (missing fields take the form defaults) with flag overrides
//! applied on top.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use pricer_core::types::{time_to_maturity, Currency, Date};
use pricer_models::instruments::PricingParameters;
use pricer_models::pricers::price_bond;
use tracing::info;

use super::{load_json, render};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `pricer price-bond`
#[derive(Debug, Clone, Default, Args)]
pub struct BondArgs {
    /// JSON parameter file
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Underlying spot price
    #[arg(long)]
    pub spot: Option<f64>,

    /// Conversion price (0 selects the straight-debt branch)
    #[arg(long)]
    pub strike: Option<f64>,

    /// Face amount
    #[arg(long)]
    pub notional: Option<f64>,

    /// Coupon rate
    #[arg(long)]
    pub coupon_rate: Option<f64>,

    /// Redemption as a fraction of face
    #[arg(long)]
    pub redemption_rate: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Risk-free rate
    #[arg(long)]
    pub interest_rate: Option<f64>,

    /// Borrow cost in basis points
    #[arg(long)]
    pub borrow_bps: Option<f64>,

    /// Credit spread in basis points
    #[arg(long)]
    pub spread_bps: Option<f64>,

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
pub fn build_params(args: &BondArgs) -> Result<PricingParameters> {
    let mut params: PricingParameters = match &args.params {
        Some(path) => load_json(path)?,
        None => PricingParameters::default(),
    };

    let overrides = [
        (args.spot, &mut params.spot_price),
        (args.strike, &mut params.strike_price),
        (args.notional, &mut params.notional),
        (args.coupon_rate, &mut params.coupon_rate),
        (args.redemption_rate, &mut params.redemption_rate),
        (args.volatility, &mut params.volatility),
        (args.interest_rate, &mut params.interest_rate),
        (args.borrow_bps, &mut params.borrow_rate_bps),
        (args.spread_bps, &mut params.credit_spread_bps),
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

/// Prices the bond and renders the result.
pub fn execute(args: &BondArgs, config: &CliConfig) -> Result<String> {
    let params = build_params(args)?;
    info!(
        spot = params.spot_price,
        strike = params.strike_price,
        maturity = params.time_to_maturity_years,
        "Pricing convertible bond"
    );

    let result = price_bond(&params)?;
    render(config.output_format, &result, &result.summary())
}

/// Run the price-bond command
pub fn run(args: &BondArgs, config: &CliConfig) -> Result<()> {
    println!("{}", execute(args, config)?);
    Ok(())
}
