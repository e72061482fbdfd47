//! Axes command implementation
//!
//! Lists the axis names each instrument's chart accepts.

use pricer_models::axes::{AxisRegistry, InstrumentKind};

use super::render;
use crate::config::CliConfig;
use crate::Result;

/// Instrument filter for `pricer axes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InstrumentArg {
    /// Convertible bond
    Bond,
    /// Warrant
    Warrant,
}

impl From<InstrumentArg> for InstrumentKind {
    fn from(arg: InstrumentArg) -> Self {
        match arg {
            InstrumentArg::Bond => InstrumentKind::Bond,
            InstrumentArg::Warrant => InstrumentKind::Warrant,
        }
    }
}

fn registries(instrument: Option<InstrumentArg>) -> Vec<AxisRegistry> {
    match instrument {
        Some(arg) => vec![AxisRegistry::for_instrument(arg.into())],
        None => vec![AxisRegistry::bond(), AxisRegistry::warrant()],
    }
}

/// Renders the registries for `instrument`, or all of them.
pub fn execute(instrument: Option<InstrumentArg>, config: &CliConfig) -> Result<String> {
    let registries = registries(instrument);
    let labels: Vec<(String, String)> = registries
        .iter()
        .flat_map(|registry| {
            [("x", &registry.x), ("y", &registry.y), ("z", &registry.z)]
                .into_iter()
                .map(move |(axis, names)| {
                    (format!("{} {}", registry.instrument, axis), names.join(", "))
                })
        })
        .collect();
    let rows: Vec<(&str, String)> = labels
        .iter()
        .map(|(key, names)| (key.as_str(), names.clone()))
        .collect();

    render(config.output_format, &registries, &rows)
}

/// Run the axes command
pub fn run(instrument: Option<InstrumentArg>, config: &CliConfig) -> Result<()> {
    println!("{}", execute(instrument, config)?);
    Ok(())
}
