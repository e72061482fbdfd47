//! # Pricer Models (L2: Business Logic)
//!
//! Convertible bond and warrant pricing with axis-selectable sensitivity
//! curves and surfaces.
//!
//! This crate provides:
//! - Parameter and result records (`instruments`)
//! - Closed axis registries and curve/surface mode selection (`axes`)
//! - Curve, surface and chart payloads (`charts`)
//! - The bond and warrant pricers (`pricers`)
//!
//! ## Design Principles
//!
//! - **Enum-based axes** for static formula dispatch; unknown names are
//!   rejected unless the caller opts into lenient resolution
//! - **Pure computation**: no I/O, no shared mutable state, no caching
//! - **Builder pattern** for pricer configuration with validated defaults
//!
//! ## Example
//!
//! ```
//! use pricer_models::axes::AxisResolution;
//! use pricer_models::instruments::PricingParameters;
//! use pricer_models::pricers::{price_bond, BondPricer};
//!
//! let result = price_bond(&PricingParameters::default()).unwrap();
//! assert!(result.fair_value >= 0.01);
//!
//! let chart = BondPricer::default()
//!     .chart_from_names("Maturity", "Yield", "Convexity", AxisResolution::Strict)
//!     .unwrap();
//! assert_eq!(chart.title, "3D Surface: Convexity Analysis");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod axes;
pub mod charts;
pub mod instruments;
pub mod pricers;
