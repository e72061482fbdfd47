//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::math::grid::AxisRange;
use pricer_models::axes::AxisResolution;
use pricer_models::instruments::InstrumentError;
use pricer_models::pricers::BondPricer;
use serde::Deserialize;
use thiserror::Error;

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pricer.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: json, table")]
    InvalidOutputFormat(String),

    #[error("Invalid range {name}: {reason}")]
    InvalidRange { name: String, reason: String },

    #[error("Invalid coupon rate: {0}")]
    InvalidCouponRate(f64),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Boxed two-column table
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// `[bond]` section: sample axes of the bond chart generator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BondChartConfig {
    /// Maturity sample axis (years)
    pub maturity_range: AxisRange,
    /// Yield sample axis (percent)
    pub yield_range: AxisRange,
    /// Coupon rate (percent)
    pub coupon_rate: f64,
}

impl Default for BondChartConfig {
    fn default() -> Self {
        Self {
            maturity_range: BondPricer::DEFAULT_MATURITY_RANGE,
            yield_range: BondPricer::DEFAULT_YIELD_RANGE,
            coupon_rate: BondPricer::DEFAULT_COUPON_RATE,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
    /// Reject unknown axis names instead of substituting fallbacks
    pub strict_axes: bool,
    /// Bond chart axes
    pub bond: BondChartConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
            strict_axes: true,
            bond: BondChartConfig::default(),
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::EnvError(format!(
            "{} must be a boolean, got '{}'",
            name, value
        ))),
    }
}

fn validate_range(name: &str, range: &AxisRange) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidRange {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    range.validate(name).map_err(|e| invalid(&e.to_string()))?;
    if range.min > range.max {
        return Err(invalid("min must not exceed max"));
    }
    Ok(())
}

impl CliConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(log_level) = std::env::var("PRICER_LOG_LEVEL") {
            config.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Ok(format) = std::env::var("PRICER_OUTPUT_FORMAT") {
            config.output_format = OutputFormat::from_str(&format)?;
        }

        if let Ok(strict) = std::env::var("PRICER_STRICT_AXES") {
            config.strict_axes = parse_bool("PRICER_STRICT_AXES", &strict)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range("bond.maturity_range", &self.bond.maturity_range)?;
        validate_range("bond.yield_range", &self.bond.yield_range)?;

        if !self.bond.coupon_rate.is_finite() {
            return Err(ConfigError::InvalidCouponRate(self.bond.coupon_rate));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.output_format {
            self.output_format = format;
        }
        if cli.lenient {
            self.strict_axes = false;
        }
    }

    /// Axis resolution policy for string selections
    pub fn axis_resolution(&self) -> AxisResolution {
        if self.strict_axes {
            AxisResolution::Strict
        } else {
            AxisResolution::Lenient
        }
    }

    /// Bond chart generator for the `[bond]` section
    pub fn bond_pricer(&self) -> Result<BondPricer, InstrumentError> {
        BondPricer::builder()
            .coupon_rate(self.bond.coupon_rate)
            .maturity_range(self.bond.maturity_range)
            .yield_range(self.bond.yield_range)
            .build()
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Force debug logging
    pub verbose: bool,
    /// Output format override
    pub output_format: Option<OutputFormat>,
    /// Substitute fallbacks for unknown axis names
    pub lenient: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    let env_config = CliConfig::from_env()?;
    if std::env::var("PRICER_LOG_LEVEL").is_ok() {
        config.log_level = env_config.log_level;
    }
    if std::env::var("PRICER_OUTPUT_FORMAT").is_ok() {
        config.output_format = env_config.output_format;
    }
    if std::env::var("PRICER_STRICT_AXES").is_ok() {
        config.strict_axes = env_config.strict_axes;
    }

    config.merge_with_cli(cli);

    config.validate()?;

    Ok(config)
}

/// Config file to load: the explicit `--config` path, else
/// [`DEFAULT_CONFIG_FILE`] when it exists.
pub fn resolve_config_file(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some(default)
    })
}
