//! Convertible bond and warrant pricers.
//!
//! - [`price_bond`] / [`BondPricer`]: point pricing plus maturity/yield curves and surfaces
//! - [`WarrantPricer`]: point pricing plus payoff curves and underlying/time surfaces
//!
//! Pricers are stateless apart from their sample-axis configuration and
//! are safe to share across threads.

mod bond;
mod warrant;

pub use bond::{price_bond, BondPricer, BondPricerBuilder};
pub use warrant::{WarrantPricer, PAYOFF_CURVE_POINTS, SURFACE_POINTS};
