//! Scalar helpers shared by the point pricers and surface formulas.
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.

use num_traits::Float;

/// Logistic curve `1 / (1 + exp(-k·x))`.
///
/// Maps any finite input into `(0, 1)`, with `logistic(0, k) = 0.5`.
///
/// # Examples
/// ```
/// use pricer_core::math::functions::logistic;
///
/// assert_eq!(logistic(0.0_f64, 5.0), 0.5);
/// assert!(logistic(10.0_f64, 5.0) > 0.999);
/// assert!(logistic(-10.0_f64, 5.0) < 0.001);
/// ```
#[inline]
pub fn logistic<T: Float>(x: T, steepness: T) -> T {
    let one = T::one();
    one / (one + (-steepness * x).exp())
}

/// `max(x, 0)`.
#[inline]
pub fn positive_part<T: Float>(x: T) -> T {
    x.max(T::zero())
}

/// Rounds half away from zero to `decimals` decimal places.
///
/// # Examples
/// ```
/// use pricer_core::math::functions::round_to;
///
/// assert_eq!(round_to(99.501248_f64, 3), 99.501);
/// assert_eq!(round_to(1.2345679_f64, 2), 1.23);
/// assert_eq!(round_to(-0.0005_f64, 3), -0.001);
/// ```
#[inline]
pub fn round_to<T: Float>(value: T, decimals: i32) -> T {
    let factor = T::from(10.0).unwrap_or_else(T::one).powi(decimals);
    let scaled = value * factor;
    // Values this large carry no fractional digits at this precision
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
