//! Mathematical utilities for solar position calculations.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// One full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle in radians to the half-open turn `[0, 2π)`.
///
/// Computed as `x - floor(x / 2π) * 2π`. Every angle the almanac model
/// normalizes goes through this one reduction, including the equation of
/// time, whose natural range would be symmetric around zero.
///
/// # Example
/// ```
/// # use sunpos::math::{normalize_radians, PI};
/// assert!((normalize_radians(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// assert_eq!(normalize_radians(0.0), 0.0);
/// ```
#[inline]
#[must_use]
pub fn normalize_radians(radians: f64) -> f64 {
    let mut reduced = radians - floor(radians / TAU) * TAU;
    // rounding of radians / 2π can push the result one ulp outside the turn
    if reduced < 0.0 {
        reduced += TAU;
    }
    if reduced >= TAU {
        reduced -= TAU;
    }
    reduced
}

/// Normalizes an angle in degrees to the range [0, 360).
#[must_use]
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized >= 0.0 || normalized.is_nan() {
        return normalized;
    }
    // a tiny negative rounds up to a full turn
    let wrapped = normalized + 360.0;
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
