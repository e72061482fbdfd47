//! Closed axis registries for curve and surface generation.
//!
//! Every selectable axis is a variant of a small per-instrument enum that
//! implements [`Axis`]. Formula dispatch is a `match` on the variant, so an
//! axis name either resolves to exactly one formula or is rejected with
//! [`AxisError::UnknownAxis`].
//!
//! # Registries
//!
//! - [`BondSeries`]: `Maturity`, `Yield`, `Price`, `Duration`
//! - [`BondSurfaceMetric`]: `Coupon`, `Convexity` (plus the unselectable `Baseline`)
//! - [`WarrantXAxis`]: `Spot Price`, `Strike`, `Volatility`
//! - [`WarrantCurveMetric`]: `Value`, `Delta`, `Gamma`
//! - [`WarrantSurfaceMetric`]: `Time`, `Volatility`
//!
//! # Examples
//!
//! ```
//! use pricer_models::axes::{parse_axis, Axis, BondSeries, AxisError};
//!
//! let series: BondSeries = parse_axis("Duration").unwrap();
//! assert_eq!(series, BondSeries::Duration);
//! assert_eq!(series.name(), "Duration");
//!
//! let err = parse_axis::<BondSeries>("duration").unwrap_err();
//! assert!(matches!(err, AxisError::UnknownAxis { .. }));
//! ```

macro_rules! impl_display_from_str {
    ($($ty:ty),*) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str($crate::axes::Axis::name(self))
                }
            }

            impl ::std::str::FromStr for $ty {
                type Err = $crate::axes::AxisError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $crate::axes::parse_axis(s)
                }
            }
        )*
    };
}

mod bond;
mod mode;
mod warrant;

pub use bond::{BondSeries, BondSurfaceMetric};
pub use mode::{ChartMode, CURVE_MODE_SENTINEL};
pub use warrant::{WarrantCurveMetric, WarrantSurfaceMetric, WarrantXAxis};

use std::fmt;

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument family an axis registry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InstrumentKind {
    /// Convertible bond
    Bond,
    /// Warrant
    Warrant,
}

impl InstrumentKind {
    /// Lowercase name used in messages and on the command line.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Bond => "bond",
            InstrumentKind::Warrant => "warrant",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variant of a closed, per-instrument axis registry.
pub trait Axis: Copy + PartialEq + fmt::Debug + Sized + 'static {
    /// Instrument family the registry belongs to.
    const INSTRUMENT: InstrumentKind;

    /// Display name, the exact string accepted by [`parse_axis`].
    fn name(&self) -> &'static str;

    /// Selectable variants in display order.
    fn all() -> &'static [Self];

    /// Instrument family this axis belongs to.
    #[inline]
    fn instrument(&self) -> InstrumentKind {
        Self::INSTRUMENT
    }

    /// Display names of [`Axis::all`].
    fn names() -> Vec<&'static str> {
        Self::all().iter().map(Axis::name).collect()
    }
}

/// Axis lookup errors.
///
/// # Variants
/// - `UnknownAxis`: The name is not in the registry for this instrument
///
/// # Examples
/// ```
/// use pricer_models::axes::{parse_axis, WarrantCurveMetric};
///
/// let err = parse_axis::<WarrantCurveMetric>("Vega").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Unknown warrant axis 'Vega' (expected one of: Value, Delta, Gamma)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// Axis name not found in the registry.
    #[error(
        "Unknown {instrument} axis '{name}' (expected one of: {allowed_list})",
        allowed_list = .allowed.join(", ")
    )]
    UnknownAxis {
        /// Requested name
        name: String,
        /// Registry that was searched
        instrument: InstrumentKind,
        /// Accepted names
        allowed: Vec<&'static str>,
    },
}

impl From<AxisError> for PricingError {
    fn from(err: AxisError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Resolves `name` against the registry of `A` by exact match.
///
/// # Errors
/// Returns [`AxisError::UnknownAxis`] listing the accepted names.
pub fn parse_axis<A: Axis>(name: &str) -> Result<A, AxisError> {
    A::all()
        .iter()
        .copied()
        .find(|axis| axis.name() == name)
        .ok_or_else(|| AxisError::UnknownAxis {
            name: name.to_string(),
            instrument: A::INSTRUMENT,
            allowed: A::names(),
        })
}

/// Resolves `name`, substituting `fallback` for unknown names.
///
/// The substitution is logged at `warn` level.
///
/// ```
/// use pricer_models::axes::{resolve_or, BondSurfaceMetric};
///
/// assert_eq!(resolve_or("Coupon", BondSurfaceMetric::Baseline), BondSurfaceMetric::Coupon);
/// assert_eq!(resolve_or("Gamma", BondSurfaceMetric::Baseline), BondSurfaceMetric::Baseline);
/// ```
pub fn resolve_or<A: Axis>(name: &str, fallback: A) -> A {
    match parse_axis::<A>(name) {
        Ok(axis) => axis,
        Err(err) => {
            tracing::warn!(
                error = %err,
                fallback = fallback.name(),
                "Unrecognised axis, using fallback"
            );
            fallback
        }
    }
}

/// How string axis selections are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisResolution {
    /// Unknown names are rejected
    #[default]
    Strict,
    /// Unknown names fall back to the instrument's default formula
    Lenient,
}

impl AxisResolution {
    /// Resolves `name` under this policy.
    ///
    /// `fallback` is only used by [`AxisResolution::Lenient`].
    pub fn resolve<A: Axis>(self, name: &str, fallback: A) -> Result<A, AxisError> {
        match self {
            AxisResolution::Strict => parse_axis(name),
            AxisResolution::Lenient => Ok(resolve_or(name, fallback)),
        }
    }
}

/// Axis option lists offered by an instrument's chart controls.
///
/// `z` always starts with [`CURVE_MODE_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxisRegistry {
    /// Instrument family
    pub instrument: InstrumentKind,
    /// X-axis options
    pub x: Vec<&'static str>,
    /// Y-axis options
    pub y: Vec<&'static str>,
    /// Z-axis options
    pub z: Vec<&'static str>,
}

impl AxisRegistry {
    /// Bond chart options.
    ///
    /// ```
    /// use pricer_models::axes::AxisRegistry;
    ///
    /// let registry = AxisRegistry::bond();
    /// assert_eq!(registry.x, vec!["Maturity", "Duration"]);
    /// assert_eq!(registry.z, vec!["None", "Coupon", "Convexity"]);
    /// ```
    pub fn bond() -> Self {
        Self {
            instrument: InstrumentKind::Bond,
            x: BondSeries::X_CHOICES.iter().map(Axis::name).collect(),
            y: BondSeries::Y_CHOICES.iter().map(Axis::name).collect(),
            z: with_sentinel::<BondSurfaceMetric>(),
        }
    }

    /// Warrant chart options.
    pub fn warrant() -> Self {
        Self {
            instrument: InstrumentKind::Warrant,
            x: WarrantXAxis::names(),
            y: WarrantCurveMetric::names(),
            z: with_sentinel::<WarrantSurfaceMetric>(),
        }
    }

    /// Options for `instrument`.
    pub fn for_instrument(instrument: InstrumentKind) -> Self {
        match instrument {
            InstrumentKind::Bond => Self::bond(),
            InstrumentKind::Warrant => Self::warrant(),
        }
    }
}

fn with_sentinel<A: Axis>() -> Vec<&'static str> {
    std::iter::once(CURVE_MODE_SENTINEL)
        .chain(A::all().iter().map(Axis::name))
        .collect()
}
