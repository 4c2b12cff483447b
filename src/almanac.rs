//! Low-precision solar position from the Astronomical Almanac approximation.
//!
//! Follows the "approximate position of the Sun" formulas of the Astronomical
//! Almanac (2019, page C5): mean longitude and mean anomaly give the ecliptic
//! longitude, from which right ascension, declination and the equation of time
//! follow. The sub-solar point is then projected into the observer's horizon.
//!
//! Accuracy is around 0.01° for declination near the present epoch. There is no
//! refraction correction and no ΔT: the day count is taken straight from UTC.
//!
//! The calculation is split into a time-dependent part ([`SolarCoordinates`])
//! and an observer-dependent part, so one instant can be evaluated for many
//! observers cheaply.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{PI, TAU, asin, atan2, cos, degrees_to_radians, normalize_radians, sin};
use crate::time::Instant;
use crate::types::{GeoCoordinate, SunPosition};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Mean longitude of the Sun at J2000.0
const MEAN_LONGITUDE_AT_EPOCH: f64 = degrees_to_radians(280.460);
/// Mean longitude advance per day
const MEAN_LONGITUDE_RATE: f64 = degrees_to_radians(0.985_647_4);

/// Mean anomaly of the Sun at J2000.0
const MEAN_ANOMALY_AT_EPOCH: f64 = degrees_to_radians(357.528);
/// Mean anomaly advance per day
const MEAN_ANOMALY_RATE: f64 = degrees_to_radians(0.985_600_3);

/// Equation of center, first and second harmonic
const CENTER_FIRST_HARMONIC: f64 = degrees_to_radians(1.915);
const CENTER_SECOND_HARMONIC: f64 = degrees_to_radians(0.020);

/// Obliquity of the ecliptic at J2000.0 and its decrease per day
const OBLIQUITY_AT_EPOCH: f64 = degrees_to_radians(23.439);
const OBLIQUITY_RATE: f64 = degrees_to_radians(0.000_000_4);

/// Minutes of time per radian of hour angle
const MINUTES_PER_RADIAN: f64 = 24.0 * 60.0 / TAU;

/// Time-dependent solar coordinates for one instant.
///
/// Everything here is independent of the observer. Compute once with
/// [`SolarCoordinates::at`] and reuse with [`solar_position_with_coordinates`]
/// for coordinate sweeps.
///
/// All angles are radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// Days since 2000-01-01 12:00:00 UTC
    pub(crate) days_since_j2000: f64,
    /// Mean longitude L, [0, 2π)
    pub(crate) mean_longitude: f64,
    /// Mean anomaly g, [0, 2π)
    pub(crate) mean_anomaly: f64,
    /// Ecliptic longitude λ, [0, 2π)
    pub(crate) ecliptic_longitude: f64,
    /// Obliquity of the ecliptic ε
    pub(crate) obliquity: f64,
    /// Right ascension α, (-π, π]
    pub(crate) right_ascension: f64,
    /// Declination δ, also the latitude of the sub-solar point
    pub(crate) declination: f64,
    /// Equation of time L - α reduced into [0, 2π)
    pub(crate) equation_of_time: f64,
    /// Longitude of the sub-solar point, [0, 2π)
    pub(crate) subsolar_longitude: f64,
}

impl SolarCoordinates {
    /// Evaluates the almanac model at `instant`.
    ///
    /// # Example
    /// ```
    /// use sunpos::{Instant, SolarCoordinates};
    ///
    /// let june_solstice = Instant::from_utc(2024, 6, 20, 21, 0, 0).unwrap();
    /// let coordinates = SolarCoordinates::at(june_solstice);
    /// assert!((coordinates.declination().to_degrees() - 23.435).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn at(instant: Instant) -> Self {
        let n = instant.days_since_j2000();

        let mean_longitude = normalize_radians(MEAN_LONGITUDE_AT_EPOCH + MEAN_LONGITUDE_RATE * n);
        let mean_anomaly = normalize_radians(MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * n);
        let ecliptic_longitude = normalize_radians(
            mean_longitude
                + CENTER_FIRST_HARMONIC * sin(mean_anomaly)
                + CENTER_SECOND_HARMONIC * sin(2.0 * mean_anomaly),
        );
        let obliquity = OBLIQUITY_AT_EPOCH - OBLIQUITY_RATE * n;

        let sin_lambda = sin(ecliptic_longitude);
        let right_ascension = atan2(cos(obliquity) * sin_lambda, cos(ecliptic_longitude));
        let declination = asin(sin(obliquity) * sin_lambda);

        // reduced into [0, 2π) like every other angle, not into (-π, π]
        let equation_of_time = normalize_radians(mean_longitude - right_ascension);

        let subsolar_longitude =
            normalize_radians(-TAU * instant.day_fraction() + PI - equation_of_time);

        Self {
            days_since_j2000: n,
            mean_longitude,
            mean_anomaly,
            ecliptic_longitude,
            obliquity,
            right_ascension,
            declination,
            equation_of_time,
            subsolar_longitude,
        }
    }

    /// Gets the days since J2000.0 the coordinates were evaluated for.
    #[must_use]
    pub const fn days_since_j2000(&self) -> f64 {
        self.days_since_j2000
    }

    /// Gets the mean longitude of the Sun in radians, [0, 2π).
    #[must_use]
    pub const fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Gets the mean anomaly of the Sun in radians, [0, 2π).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Gets the ecliptic longitude of the Sun in radians, [0, 2π).
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Gets the obliquity of the ecliptic in radians.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// Gets the right ascension of the Sun in radians, (-π, π].
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination of the Sun in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time as an angle in radians.
    ///
    /// The value lies in `[0, 2π)`: a sundial running 3 minutes slow reads as
    /// an angle just below 2π, not as a negative angle. See
    /// [`equation_of_time_minutes`](Self::equation_of_time_minutes) for the
    /// signed value.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the equation of time in minutes of time, in (-720, 720].
    ///
    /// Positive when apparent solar time is ahead of mean solar time.
    #[must_use]
    pub fn equation_of_time_minutes(&self) -> f64 {
        let signed = if self.equation_of_time > PI {
            self.equation_of_time - TAU
        } else {
            self.equation_of_time
        };
        signed * MINUTES_PER_RADIAN
    }

    /// Gets the point on Earth where the Sun is at the zenith.
    #[must_use]
    pub const fn subsolar_point(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.declination, self.subsolar_longitude)
    }

    /// Gets the Earth-Sun distance in astronomical units.
    #[must_use]
    pub fn sun_distance_au(&self) -> f64 {
        1.000_14 - 0.016_71 * cos(self.mean_anomaly) - 0.000_14 * cos(2.0 * self.mean_anomaly)
    }
}

/// Calculates the solar position for an instant and an observer given in radians.
///
/// Pure and total: any finite input gives a result, NaN input gives NaN output.
///
/// # Arguments
/// * `instant` - UTC instant
/// * `latitude` - Observer latitude in radians, north positive
/// * `longitude` - Observer longitude in radians, east positive
///
/// # Example
/// ```
/// use sunpos::{Instant, almanac};
///
/// let instant = Instant::from_utc(2025, 10, 31, 18, 33, 0).unwrap();
/// let position = almanac::compute(instant, 51.340333_f64.to_radians(), 12.37475_f64.to_radians());
///
/// assert!((position.elevation_degrees() - -26.541462).abs() < 1e-3);
/// assert!((position.azimuth_degrees() - 280.398315).abs() < 1e-3);
/// ```
#[must_use]
pub fn compute(instant: Instant, latitude: f64, longitude: f64) -> SunPosition {
    solar_position(instant, &GeoCoordinate::new(latitude, longitude))
}

/// Calculates the solar position for an observer.
#[must_use]
pub fn solar_position(instant: Instant, observer: &GeoCoordinate) -> SunPosition {
    solar_position_with_coordinates(observer, &SolarCoordinates::at(instant))
}

/// Calculates the solar position from pre-computed [`SolarCoordinates`].
///
/// Gives results identical to [`solar_position`] for the same instant.
///
/// # Example
/// ```
/// use sunpos::{GeoCoordinate, Instant, SolarCoordinates, almanac};
///
/// let instant = Instant::from_utc(2024, 3, 20, 12, 0, 0).unwrap();
/// let coordinates = SolarCoordinates::at(instant);
///
/// for lat in (-60..=60).step_by(30) {
///     for lon in (-180..180).step_by(45) {
///         let observer = GeoCoordinate::from_degrees(f64::from(lat), f64::from(lon));
///         let position = almanac::solar_position_with_coordinates(&observer, &coordinates);
///         assert_eq!(position, almanac::solar_position(instant, &observer));
///     }
/// }
/// ```
#[must_use]
pub fn solar_position_with_coordinates(
    observer: &GeoCoordinate,
    coordinates: &SolarCoordinates,
) -> SunPosition {
    let lat = observer.latitude();
    let declination = coordinates.declination;
    let hour_offset = coordinates.subsolar_longitude - observer.longitude();

    let (sin_lat, cos_lat) = (sin(lat), cos(lat));
    let (sin_decl, cos_decl) = (sin(declination), cos(declination));
    let cos_offset = cos(hour_offset);

    // east, north and up components of the unit vector towards the Sun
    let sx = cos_decl * sin(hour_offset);
    let sy = cos_lat * sin_decl - sin_lat * cos_decl * cos_offset;
    let sz = sin_lat * sin_decl + cos_lat * cos_decl * cos_offset;

    SunPosition::new(asin(sz), atan2(sx, sy))
}

/// Calculates the solar position for a chrono `DateTime` and an observer in degrees.
///
/// The date/time is converted to UTC first.
///
/// # Example
/// ```rust
/// use sunpos::almanac;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2025-10-31T19:33:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = almanac::solar_position_at(datetime, 51.340333, 12.37475);
///
/// assert!(position.is_sun_down());
/// ```
#[cfg(feature = "chrono")]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position_at<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    solar_position(
        Instant::from_datetime(&datetime),
        &GeoCoordinate::from_degrees(latitude, longitude),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::radians_to_degrees;

    const EPSILON: f64 = 1e-12;

    fn leipzig() -> GeoCoordinate {
        GeoCoordinate::from_degrees(51.340333, 12.37475)
    }

    fn fixture_instant() -> Instant {
        Instant::from_utc(2025, 10, 31, 18, 33, 0).unwrap()
    }

    #[test]
    fn test_reference_fixture() {
        let position = solar_position(fixture_instant(), &leipzig());

        assert!((position.elevation_degrees() - -26.541462).abs() < 1e-3);
        assert!((position.azimuth_degrees() - 280.398315).abs() < 1e-3);
    }

    #[test]
    fn test_intermediate_values() {
        let coordinates = SolarCoordinates::at(fixture_instant());

        assert!((coordinates.days_since_j2000() - 9435.272916666667).abs() < 1e-9);
        assert!((coordinates.declination() - -0.25068102284713273).abs() < EPSILON);
        assert!((coordinates.equation_of_time() - 0.07160490925881113).abs() < EPSILON);
        assert!((coordinates.subsolar_point().longitude() - 4.496794407836346).abs() < 1e-10);
        assert_eq!(coordinates.subsolar_point().latitude(), coordinates.declination());
    }

    #[test]
    fn test_normalized_intermediates() {
        let coordinates = SolarCoordinates::at(Instant::from_utc(1987, 4, 10, 0, 0, 0).unwrap());

        for angle in [
            coordinates.mean_longitude(),
            coordinates.mean_anomaly(),
            coordinates.ecliptic_longitude(),
            coordinates.equation_of_time(),
            coordinates.subsolar_point().longitude(),
        ] {
            assert!((0.0..TAU).contains(&angle), "{angle} outside [0, 2π)");
        }
        assert!(coordinates.right_ascension() > -PI && coordinates.right_ascension() <= PI);
    }

    #[test]
    fn test_equation_of_time_keeps_full_turn_reduction() {
        // apparent solar time runs 14 minutes behind mean time in mid February
        let february = SolarCoordinates::at(Instant::from_utc(2024, 2, 11, 12, 0, 0).unwrap());
        assert!((radians_to_degrees(february.equation_of_time()) - 356.44964957723676).abs() < 1e-9);
        assert!((february.equation_of_time_minutes() - -14.201401691052958).abs() < 1e-9);

        let november = SolarCoordinates::at(Instant::from_utc(2024, 11, 3, 12, 0, 0).unwrap());
        assert!((radians_to_degrees(november.equation_of_time()) - 4.110832527576142).abs() < 1e-9);
        assert!((november.equation_of_time_minutes() - 16.44333011030457).abs() < 1e-9);
    }

    #[test]
    fn test_solstice_declinations() {
        let june = SolarCoordinates::at(Instant::from_utc(2024, 6, 20, 21, 0, 0).unwrap());
        let december = SolarCoordinates::at(Instant::from_utc(2024, 12, 21, 9, 0, 0).unwrap());

        assert!((radians_to_degrees(june.declination()) - 23.435424824610323).abs() < 1e-9);
        assert!((radians_to_degrees(december.declination()) - -23.435351220403636).abs() < 1e-9);
    }

    #[test]
    fn test_sun_distance() {
        let perihelion = SolarCoordinates::at(Instant::from_utc(2024, 1, 3, 0, 0, 0).unwrap());
        let aphelion = SolarCoordinates::at(Instant::from_utc(2024, 7, 5, 0, 0, 0).unwrap());

        assert!((perihelion.sun_distance_au() - 0.9832939236779202).abs() < 1e-12);
        assert!((aphelion.sun_distance_au() - 1.0167099590124755).abs() < 1e-12);
    }

    #[test]
    fn test_compute_matches_solar_position() {
        let observer = leipzig();
        let via_radians = compute(fixture_instant(), observer.latitude(), observer.longitude());
        assert_eq!(via_radians, solar_position(fixture_instant(), &observer));
    }

    #[test]
    fn test_deterministic() {
        let first = solar_position(fixture_instant(), &leipzig());
        for _ in 0..10 {
            let again = solar_position(fixture_instant(), &leipzig());
            assert_eq!(first.elevation().to_bits(), again.elevation().to_bits());
            assert_eq!(first.azimuth().to_bits(), again.azimuth().to_bits());
        }
    }

    #[test]
    fn test_time_dependent_parts_reuse() {
        let instant = fixture_instant();
        let coordinates = SolarCoordinates::at(instant);

        for (lat, lon) in [(0.0, 0.0), (-33.8688, 151.2093), (78.2232, 15.6267), (40.0, -75.0)] {
            let observer = GeoCoordinate::from_degrees(lat, lon);
            assert_eq!(
                solar_position_with_coordinates(&observer, &coordinates),
                solar_position(instant, &observer)
            );
        }
    }

    #[test]
    fn test_observer_near_subsolar_point_sees_sun_overhead() {
        let coordinates = SolarCoordinates::at(Instant::from_utc(2024, 3, 20, 12, 0, 0).unwrap());
        let subsolar = coordinates.subsolar_point();
        let one_degree = degrees_to_radians(1.0);

        let near = GeoCoordinate::new(subsolar.latitude() + one_degree, subsolar.longitude());
        let position = solar_position_with_coordinates(&near, &coordinates);
        assert!((position.elevation_degrees() - 89.0).abs() < 1e-9);
        // the sun stands one degree to the south
        assert!((position.azimuth_degrees() - 180.0).abs() < 1e-6);

        let antipode = GeoCoordinate::new(-subsolar.latitude() + one_degree, subsolar.longitude() + PI);
        let position = solar_position_with_coordinates(&antipode, &coordinates);
        assert!((position.elevation_degrees() + 89.0).abs() < 1e-9);
    }

    #[test]
    fn test_noon_sun_is_south_in_northern_mid_latitudes() {
        // close to local apparent noon at Greenwich on the June solstice
        let position = solar_position(
            Instant::from_utc(2024, 6, 21, 12, 2, 0).unwrap(),
            &GeoCoordinate::from_degrees(51.477928, 0.0),
        );

        assert!((position.azimuth_degrees() - 180.0).abs() < 0.1);
        assert!(position.south_azimuth_degrees() < 0.1);
        assert!((position.elevation_degrees() - 61.956).abs() < 1e-3);
        assert!(position.is_sun_up());
    }

    #[test]
    fn test_morning_sun_is_east() {
        let position = solar_position(
            Instant::from_utc(2024, 6, 21, 6, 0, 0).unwrap(),
            &GeoCoordinate::from_degrees(51.477928, 0.0),
        );

        assert!((position.azimuth_degrees() - 74.55068315764983).abs() < 1e-9);
        assert!((position.elevation_degrees() - 17.84735572896677).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_instants_do_not_overflow() {
        for seconds in [i64::MIN, i64::MIN + 1, i64::MAX] {
            let position = solar_position(
                Instant::from_unix_seconds(seconds),
                &GeoCoordinate::from_degrees(0.0, 0.0),
            );
            assert!(position.elevation().abs() <= PI / 2.0, "{seconds}");
            assert!((0.0..TAU).contains(&position.azimuth()), "{seconds}");
        }
    }

    #[test]
    fn test_nan_inputs_propagate() {
        let position = compute(fixture_instant(), f64::NAN, 0.0);
        assert!(position.elevation().is_nan());
        assert!(position.azimuth().is_nan());

        let position = compute(fixture_instant(), 0.0, f64::NAN);
        assert!(position.elevation().is_nan());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_solar_position_at_converts_to_utc() {
        use chrono::{FixedOffset, Utc};

        let local = "2025-10-31T19:33:00+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let utc = "2025-10-31T18:33:00Z".parse::<DateTime<Utc>>().unwrap();

        let from_local = solar_position_at(local, 51.340333, 12.37475);
        let from_utc = solar_position_at(utc, 51.340333, 12.37475);

        assert_eq!(from_local, from_utc);
        assert_eq!(from_utc, solar_position(fixture_instant(), &leipzig()));
    }
}
