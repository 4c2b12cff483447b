//! Core data types for solar position calculations.

use crate::Result;
use crate::error::check_coordinates;
use crate::math::{
    PI, degrees_to_radians, normalize_degrees_0_to_360, normalize_radians, radians_to_degrees,
};

/// Geographic position of an observer.
///
/// Angles are stored in radians. No range checks are applied: the model is
/// plain arithmetic and out-of-range values simply wrap through the
/// trigonometric functions.
///
/// # Example
/// ```
/// # use sunpos::GeoCoordinate;
/// let leipzig = GeoCoordinate::from_degrees(51.340333, 12.37475);
/// assert!((leipzig.latitude_degrees() - 51.340333).abs() < 1e-12);
/// assert!((leipzig.longitude() - 12.37475_f64.to_radians()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in radians, north positive
    latitude: f64,
    /// Longitude in radians, east positive
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from latitude and longitude in radians.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(degrees_to_radians(latitude), degrees_to_radians(longitude))
    }

    /// Creates a coordinate from degrees, rejecting NaN and infinite values.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for non-finite input.
    pub fn try_from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::from_degrees(latitude, longitude))
    }

    /// Gets the latitude in radians.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in radians.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude_degrees(&self) -> f64 {
        radians_to_degrees(self.latitude)
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude_degrees(&self) -> f64 {
        radians_to_degrees(self.longitude)
    }
}

/// Solar position in the observer's horizon frame.
///
/// - Elevation: angle above the horizon, radians, negative below it
/// - Azimuth: radians in `[0, 2π)`, 0 = North, increasing clockwise through East
///
/// Use [`south_azimuth_degrees`](Self::south_azimuth_degrees) for the
/// astronomical convention measured from South through West.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Elevation angle in radians
    elevation: f64,
    /// Azimuth in radians from North, clockwise, [0, 2π)
    azimuth: f64,
}

impl SunPosition {
    /// Creates a position from elevation and azimuth (from North, clockwise) in radians.
    ///
    /// The azimuth is reduced into `[0, 2π)`. NaN is kept as is.
    ///
    /// # Example
    /// ```
    /// # use sunpos::SunPosition;
    /// # use core::f64::consts::PI;
    /// let position = SunPosition::new(PI / 6.0, -PI / 2.0);
    /// assert!((position.elevation_degrees() - 30.0).abs() < 1e-12);
    /// assert!((position.azimuth_degrees() - 270.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Self {
            elevation,
            azimuth: normalize_radians(azimuth),
        }
    }

    /// Gets the elevation angle in radians.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the azimuth in radians (0 = North, clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation angle in degrees.
    #[must_use]
    pub const fn elevation_degrees(&self) -> f64 {
        radians_to_degrees(self.elevation)
    }

    /// Gets the azimuth in degrees (0° = North, clockwise).
    #[must_use]
    pub const fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Gets the zenith angle in degrees (90° - elevation).
    #[must_use]
    pub fn zenith_angle_degrees(&self) -> f64 {
        radians_to_degrees(PI / 2.0 - self.elevation)
    }

    /// Gets the azimuth measured from South, clockwise through West, in [0, 360).
    #[must_use]
    pub fn south_azimuth_degrees(&self) -> f64 {
        normalize_degrees_0_to_360(radians_to_degrees(normalize_radians(self.azimuth - PI)))
    }

    /// Checks if the sun is above the horizon (elevation > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation ≤ 0).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation <= 0.0
    }
}
