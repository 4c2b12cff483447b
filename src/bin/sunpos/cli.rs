use clap::Parser;
use sunpos::Instant;
use tracing::warn;

/// Default observer: Leipzig, Germany.
const DEFAULT_LATITUDE: f64 = 51.340333;
const DEFAULT_LONGITUDE: f64 = 12.37475;

#[derive(Parser, Debug)]
#[command(name = "sunpos")]
#[command(version, about = "Print the sun's elevation and azimuth for a place and a UTC time")]
pub struct Args {
    /// Observer latitude in degrees, north positive
    #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_LATITUDE)]
    pub latitude: f64,

    /// Observer longitude in degrees, east positive
    #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_LONGITUDE)]
    pub longitude: f64,

    /// UTC date and time as "YYYY-MM-DD HH:MM:SS" (defaults to now)
    #[arg(short, long)]
    pub date: Option<String>,

    /// After the first line, keep printing the position for the current time
    #[arg(short, long)]
    pub watch: bool,

    /// Seconds between updates in watch mode
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Stop watching after this many updates
    #[arg(long, requires = "watch")]
    pub count: Option<u64>,
}

/// Picks the instant to report: the parsed `--date`, or `now`.
///
/// An unparsable date is not fatal; it is logged and replaced by `now`.
pub fn resolve_instant(date: Option<&str>, now: Instant) -> Instant {
    let Some(text) = date else {
        return now;
    };
    match Instant::parse(text) {
        Ok(instant) => instant,
        Err(e) => {
            warn!(input = text, error = %e, "using current time instead");
            now
        }
    }
}
