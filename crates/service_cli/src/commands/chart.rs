//! Chart command implementation
//!
//! Builds a curve or surface chart from axis names. The z-axis `None`
//! selects curve mode; any other name draws a surface.

use clap::Subcommand;
use pricer_models::axes::CURVE_MODE_SENTINEL;
use pricer_models::charts::{Chart, ChartData};
use pricer_models::pricers::WarrantPricer;
use tracing::info;

use super::render;
use crate::config::CliConfig;
use crate::Result;

/// Instrument to chart
#[derive(Debug, Clone, Subcommand)]
pub enum ChartTarget {
    /// Maturity/yield analytics of the bond generator
    Bond {
        /// X-axis series
        #[arg(long, default_value = "Maturity")]
        x: String,

        /// Y-axis series
        #[arg(long, default_value = "Yield")]
        y: String,

        /// Surface metric, or None for a curve
        #[arg(long, default_value = CURVE_MODE_SENTINEL)]
        z: String,
    },

    /// Payoff analytics around a warrant strike
    Warrant {
        /// Exercise price the domain is centred on
        #[arg(long, default_value_t = 100.0)]
        strike: f64,

        /// X-axis label
        #[arg(long, default_value = "Spot Price")]
        x: String,

        /// Y-axis metric
        #[arg(long, default_value = "Value")]
        y: String,

        /// Surface metric, or None for a curve
        #[arg(long, default_value = CURVE_MODE_SENTINEL)]
        z: String,
    },
}

/// Builds the requested chart.
pub fn build_chart(target: &ChartTarget, config: &CliConfig) -> Result<Chart> {
    let resolution = config.axis_resolution();
    let chart = match target {
        ChartTarget::Bond { x, y, z } => {
            info!(x = %x, y = %y, z = %z, "Generating bond chart");
            config
                .bond_pricer()?
                .chart_from_names(x, y, z, resolution)?
        }
        ChartTarget::Warrant { strike, x, y, z } => {
            info!(strike, x = %x, y = %y, z = %z, "Generating warrant chart");
            WarrantPricer::new().chart_from_names(*strike, x, y, z, resolution)?
        }
    };
    Ok(chart)
}

fn chart_rows(chart: &Chart) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Title", chart.title.clone()),
        ("X Axis", chart.x_title.clone()),
        ("Y Axis", chart.y_title.clone()),
    ];
    if let Some(z) = &chart.z_title {
        rows.push(("Z Axis", z.clone()));
    }

    match &chart.data {
        ChartData::Curve(curve) => {
            rows.push(("Mode", "curve".to_string()));
            rows.push(("Points", curve.len().to_string()));
            let ys = curve.y_values();
            let (lo, hi) = ys
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
            if !ys.is_empty() {
                rows.push(("Y Range", format!("{:.4} .. {:.4}", lo, hi)));
            }
        }
        ChartData::Surface(surface) => {
            let (rows_n, cols_n) = surface.shape();
            rows.push(("Mode", "surface".to_string()));
            rows.push(("Shape", format!("{} x {}", rows_n, cols_n)));
            rows.push(("Colorscale", surface.colorscale().to_string()));
        }
    }
    rows
}

/// Builds the chart and renders it.
pub fn execute(target: &ChartTarget, config: &CliConfig) -> Result<String> {
    let chart = build_chart(target, config)?;
    render(config.output_format, &chart, &chart_rows(&chart))
}

/// Run the chart command
pub fn run(target: &ChartTarget, config: &CliConfig) -> Result<()> {
    println!("{}", execute(target, config)?);
    Ok(())
}
