//! # pricer_core: Foundation for the Convertible and Warrant Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Sample axes and mesh grids for curve/surface generation (`math::grid`)
//! - Logistic, rounding and other scalar helpers (`math::functions`)
//! - Time types: `Date`, `year_fraction`, time-to-maturity helpers (`types::time`)
//! - Currency types: `Currency` (`types::currency`)
//! - Error types: `PricingError`, `DateError`, `CurrencyError`, `GridError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::grid::{linspace, meshgrid};
//! use pricer_core::types::{time_to_maturity_or_default, Currency};
//!
//! let maturities = linspace(1.0_f64, 30.0, 30);
//! let yields = linspace(2.0_f64, 8.0, 30);
//! let (x, _y) = meshgrid(&maturities, &yields);
//! assert_eq!(x.shape(), (30, 30));
//!
//! let ttm = time_to_maturity_or_default("2026-02-11", "2027-02-11");
//! assert!((ttm - 365.0 / 365.25).abs() < 1e-12);
//!
//! assert_eq!(Currency::JPY.format_amount(101.02), "JPY 101.02");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, Currency, AxisRange, Grid2D

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
