//! Basic solar position calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use sunpos::{Instant, SolarCoordinates, almanac};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Leipzig observatory, evening of 2025-10-31
    let instant: Instant = "2025-10-31 18:33:00".parse()?;
    let position = almanac::compute(
        instant,
        51.340333_f64.to_radians(),
        12.37475_f64.to_radians(),
    );

    println!("Leipzig at {instant} UTC:");
    println!("  Elevation: {:.6}°", position.elevation_degrees());
    println!("  Azimuth:   {:.6}° from North", position.azimuth_degrees());
    println!("  Zenith:    {:.6}°", position.zenith_angle_degrees());

    // Same calculation from zoned date/times
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc
        .with_ymd_and_hms(2023, 6, 21, 19, 0, 0)
        .single()
        .ok_or("ambiguous date/time")?;

    let position_fixed = almanac::solar_position_at(datetime_fixed, 37.7749, -122.4194);
    let position_utc = almanac::solar_position_at(datetime_utc, 37.7749, -122.4194);

    println!("\nSan Francisco, June 21, 2023 at noon Pacific Time:");
    println!(
        "  Elevation: {:.3}° (UTC input: {:.3}°)",
        position_fixed.elevation_degrees(),
        position_utc.elevation_degrees()
    );
    println!(
        "  Azimuth:   {:.3}° (UTC input: {:.3}°)",
        position_fixed.azimuth_degrees(),
        position_utc.azimuth_degrees()
    );
    println!(
        "  Sun is {}",
        if position_fixed.is_sun_up() {
            "up"
        } else {
            "down"
        }
    );

    let coordinates = SolarCoordinates::at(Instant::from(datetime_utc));
    println!("\nSun on that instant:");
    println!(
        "  Declination:      {:.4}°",
        coordinates.declination().to_degrees()
    );
    println!(
        "  Equation of time: {:+.2} min",
        coordinates.equation_of_time_minutes()
    );
    println!("  Distance:         {:.5} AU", coordinates.sun_distance_au());

    Ok(())
}
