//! Pricer CLI - Command Line Operations for Convertible Bond and Warrant Pricing
//!
//! This is the operational entry point for the pricing library.
//!
//! # Commands
//!
//! - `pricer price-bond` - Point valuation of a convertible bond
//! - `pricer price-warrant` - Point valuation of a warrant
//! - `pricer chart bond|warrant` - Curve or surface chart from axis names
//! - `pricer axes` - List the accepted axis names
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate is the only one that
//! performs I/O: it loads configuration, reads parameter files and prints
//! results.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::axes::InstrumentArg;
use commands::chart::ChartTarget;
use commands::price_bond::BondArgs;
use commands::price_warrant::WarrantArgs;
use config::{build_config, resolve_config_file, CliArgs, OutputFormat};

/// Convertible bond and warrant pricing CLI
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to pricer.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Substitute fallback formulas for unknown axis names
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a convertible bond
    PriceBond(BondArgs),

    /// Price a warrant
    PriceWarrant(WarrantArgs),

    /// Generate a curve or surface chart
    Chart {
        #[command(subcommand)]
        target: ChartTarget,
    },

    /// List the axis names accepted by the chart command
    Axes {
        /// Restrict the listing to one instrument
        #[arg(value_enum)]
        instrument: Option<InstrumentArg>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: resolve_config_file(cli.config.clone()),
        verbose: cli.verbose,
        output_format: cli.format,
        lenient: cli.lenient,
    };
    let config = build_config(&args)?;

    // RUST_LOG wins over the configured level unless --verbose is given
    let filter = if cli.verbose {
        EnvFilter::new(config.log_level.as_filter_str())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(
        config_file = ?args.config_file,
        output_format = %config.output_format,
        strict_axes = config.strict_axes,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::PriceBond(bond) => commands::price_bond::run(bond, &config),
        Commands::PriceWarrant(warrant) => commands::price_warrant::run(warrant, &config),
        Commands::Chart { target } => commands::chart::run(target, &config),
        Commands::Axes { instrument } => commands::axes::run(*instrument, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chart_warrant() {
        let cli = Cli::try_parse_from([
            "pricer",
            "--format",
            "json",
            "chart",
            "warrant",
            "--strike",
            "95",
            "--x",
            "Spot Price",
            "--z",
            "Volatility",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Chart {
                target: ChartTarget::Warrant { strike, x, y, z },
            } => {
                assert_eq!(strike, 95.0);
                assert_eq!(x, "Spot Price");
                assert_eq!(y, "Value");
                assert_eq!(z, "Volatility");
            }
            _ => panic!("Expected warrant chart command"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pricer", "price-bond", "--spot", "120", "--lenient", "-v"])
            .unwrap();
        assert!(cli.lenient);
        assert!(cli.verbose);
        match cli.command {
            Commands::PriceBond(args) => assert_eq!(args.spot, Some(120.0)),
            _ => panic!("Expected price-bond command"),
        }
    }

    #[test]
    fn test_dates_require_each_other() {
        assert!(Cli::try_parse_from(["pricer", "price-warrant", "--valuation-date", "2026-02-11"])
            .is_err());
        assert!(Cli::try_parse_from([
            "pricer",
            "price-warrant",
            "--maturity",
            "1.0",
            "--valuation-date",
            "2026-02-11",
            "--maturity-date",
            "2027-02-11",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_axes_filter() {
        let cli = Cli::try_parse_from(["pricer", "axes", "warrant"]).unwrap();
        match cli.command {
            Commands::Axes { instrument } => assert_eq!(instrument, Some(InstrumentArg::Warrant)),
            _ => panic!("Expected axes command"),
        }
    }
}
