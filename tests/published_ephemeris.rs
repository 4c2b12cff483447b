//! Checks against published solar ephemeris values for 2024.
//!
//! Equinox and solstice instants, perihelion and aphelion are from the USNO
//! "Earth's Seasons and Apsides" table. Equation of time values are the
//! Astronomical Almanac's, rounded to the tenth of a minute. Tolerances reflect
//! the accuracy of the low-precision model, not of the published data.

use approx::assert_abs_diff_eq;
use sunpos::{Instant, SolarCoordinates};

/// Mean obliquity of the ecliptic for 2024, degrees
const OBLIQUITY_2024: f64 = 23.436;

const DECLINATION_EPSILON: f64 = 0.01; // degrees
const EQUATION_OF_TIME_EPSILON: f64 = 0.1; // minutes
const DISTANCE_EPSILON: f64 = 1e-4; // AU

fn coordinates(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> SolarCoordinates {
    SolarCoordinates::at(Instant::from_utc(year, month, day, hour, minute, 0).unwrap())
}

#[test]
fn test_equinox_declination_is_zero() {
    for (month, day, hour, minute) in [(3, 20, 3, 6), (9, 22, 12, 44)] {
        let equinox = coordinates(2024, month, day, hour, minute);
        assert_abs_diff_eq!(
            equinox.declination().to_degrees(),
            0.0,
            epsilon = DECLINATION_EPSILON
        );
    }
}

#[test]
fn test_solstice_declination_equals_obliquity() {
    let june = coordinates(2024, 6, 20, 20, 51);
    let december = coordinates(2024, 12, 21, 9, 20);

    assert_abs_diff_eq!(
        june.declination().to_degrees(),
        OBLIQUITY_2024,
        epsilon = DECLINATION_EPSILON
    );
    assert_abs_diff_eq!(
        december.declination().to_degrees(),
        -OBLIQUITY_2024,
        epsilon = DECLINATION_EPSILON
    );
}

#[test]
fn test_equation_of_time_extremes() {
    // sundial slowest in mid February, fastest in early November
    let february = coordinates(2024, 2, 11, 12, 0);
    let november = coordinates(2024, 11, 3, 12, 0);

    assert_abs_diff_eq!(
        february.equation_of_time_minutes(),
        -14.2,
        epsilon = EQUATION_OF_TIME_EPSILON
    );
    assert_abs_diff_eq!(
        november.equation_of_time_minutes(),
        16.4,
        epsilon = EQUATION_OF_TIME_EPSILON
    );
}

#[test]
fn test_apsides_distance() {
    let perihelion = coordinates(2024, 1, 3, 0, 38);
    let aphelion = coordinates(2024, 7, 5, 5, 6);

    assert_abs_diff_eq!(
        perihelion.sun_distance_au(),
        0.983_307,
        epsilon = DISTANCE_EPSILON
    );
    assert_abs_diff_eq!(
        aphelion.sun_distance_au(),
        1.016_725,
        epsilon = DISTANCE_EPSILON
    );
}
