use std::fmt;

use sunpos::{GeoCoordinate, Instant, SunPosition};

/// One output line: latitude, longitude, elevation and azimuth in degrees, tab separated.
pub struct Reading<'a> {
    observer: &'a GeoCoordinate,
    position: &'a SunPosition,
}

impl<'a> Reading<'a> {
    pub const fn new(observer: &'a GeoCoordinate, position: &'a SunPosition) -> Self {
        Self { observer, position }
    }
}

impl fmt::Display for Reading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}\t{:.6}\t{:.6}\t{:.6}",
            self.observer.latitude_degrees(),
            self.observer.longitude_degrees(),
            self.position.elevation_degrees(),
            self.position.azimuth_degrees()
        )
    }
}

/// UTC wall-clock time of an instant as `HH:MM:SS`.
pub struct Clock(pub Instant);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0.hour(),
            self.0.minute(),
            self.0.second()
        )
    }
}
