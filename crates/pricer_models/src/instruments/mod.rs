//! Instrument parameter and result records.
//!
//! # Records
//!
//! - [`PricingParameters`] / [`PricingResult`]: convertible bond inputs and outputs
//! - [`WarrantParameters`] / [`WarrantPricingResult`]: warrant inputs and outputs
//! - [`SimulationSettings`]: seed, trial and jump-diffusion settings carried by both
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{PricingParameters, InstrumentError};
//!
//! let params = PricingParameters { notional: 0.0, ..Default::default() };
//! assert!(matches!(params.validate(), Err(InstrumentError::InvalidNotional { .. })));
//! ```

mod error;
mod params;
mod results;

pub use error::InstrumentError;
pub use params::{PricingParameters, SimulationSettings, WarrantParameters};
pub use results::{PricingResult, WarrantPricingResult};
