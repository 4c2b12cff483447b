//! Daylight map for one instant, evaluating many observers against one set of
//! solar coordinates.

use sunpos::{GeoCoordinate, Instant, SolarCoordinates, almanac};

fn main() -> Result<(), sunpos::Error> {
    let instant = Instant::from_utc(2025, 12, 21, 9, 0, 0)?;
    let coordinates = SolarCoordinates::at(instant);
    let subsolar = coordinates.subsolar_point();

    println!("{instant} UTC");
    println!(
        "Sun overhead at {:.2}°, {:.2}°\n",
        subsolar.latitude_degrees(),
        subsolar.longitude_degrees()
    );

    // '#' sun above 30°, '+' above horizon, '-' civil twilight, ' ' night
    for lat in (-75..=75).rev().step_by(15) {
        let row: String = (-180..180)
            .step_by(6)
            .map(|lon| {
                let observer = GeoCoordinate::from_degrees(f64::from(lat), f64::from(lon));
                let elevation = almanac::solar_position_with_coordinates(&observer, &coordinates)
                    .elevation_degrees();
                match elevation {
                    e if e > 30.0 => '#',
                    e if e > 0.0 => '+',
                    e if e > -6.0 => '-',
                    _ => ' ',
                }
            })
            .collect();
        println!("{lat:>4} |{row}|");
    }

    Ok(())
}
