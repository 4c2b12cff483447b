//! Example demonstrating usage without chrono.
//!
//! Instants are built from UTC calendar fields or Unix seconds, which is all a
//! `no_std` target with an RTC needs.

use sunpos::{GeoCoordinate, Instant, almanac};

fn main() -> Result<(), sunpos::Error> {
    // Vienna: 48.21°N, 16.37°E, 2024-06-21 12:00:00 UTC
    let instant = Instant::from_utc(2024, 6, 21, 12, 0, 0)?;
    let vienna = GeoCoordinate::from_degrees(48.21, 16.37);

    println!("Solar position without chrono\n");
    println!("Days since J2000: {:.6}", instant.days_since_j2000());
    println!("Julian Date:      {:.6}\n", instant.julian_date());

    let position = almanac::solar_position(instant, &vienna);
    println!("Vienna at {instant} UTC:");
    println!("  Elevation: {:.3}°", position.elevation_degrees());
    println!("  Azimuth:   {:.3}° from North", position.azimuth_degrees());
    println!("  Azimuth:   {:.3}° from South", position.south_azimuth_degrees());

    // Same instant from a Unix timestamp, e.g. read from a hardware clock
    let from_rtc = Instant::from_unix_seconds(instant.unix_seconds());
    let again = almanac::compute(from_rtc, vienna.latitude(), vienna.longitude());
    assert_eq!(position, again);

    Ok(())
}
