//! `sunpos` command-line tool.
//!
//! Prints the sun's elevation and azimuth for one instant, or keeps tracking
//! the current position at a fixed interval.
//!
//! # Usage
//!
//! ```bash
//! # Position right now in Leipzig (default observer)
//! sunpos
//!
//! # Position for a given place and UTC time
//! sunpos 48.21 16.37 --date "2026-06-21 12:00:00"
//!
//! # Track the sun every second, with debug logging
//! RUST_LOG=debug sunpos -33.8688 151.2093 --watch --count 10
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level for diagnostics on stderr (default: warn)

mod cli;
mod output;

use std::env;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, trace};
use tracing_subscriber::FmtSubscriber;

use sunpos::{GeoCoordinate, Instant, almanac};

use cli::{Args, resolve_instant};
use output::{Clock, Reading};

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout carries the readings
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let observer = GeoCoordinate::try_from_degrees(args.latitude, args.longitude)
        .context("invalid observer coordinates")?;
    debug!(
        latitude = args.latitude,
        longitude = args.longitude,
        watch = args.watch,
        "observer configured"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let instant = resolve_instant(args.date.as_deref(), Instant::now());
    debug!(%instant, "computing solar position");
    let position = almanac::solar_position(instant, &observer);
    writeln!(out, "{}", Reading::new(&observer, &position))?;

    if args.watch {
        out.flush()?;
        track(&mut out, &observer, args.interval, args.count)?;
    }
    Ok(())
}

/// Prints the position for the current time every `interval` seconds.
///
/// Stops after `count` lines, or runs forever without a count.
fn track(
    out: &mut impl Write,
    observer: &GeoCoordinate,
    interval: u64,
    count: Option<u64>,
) -> anyhow::Result<()> {
    let mut written = 0;
    while count.is_none_or(|limit| written < limit) {
        thread::sleep(Duration::from_secs(interval));

        let now = Instant::now();
        let position = almanac::solar_position(now, observer);
        trace!(%now, elevation = position.elevation_degrees(), "tick");

        writeln!(out, "[{}] {}", Clock(now), Reading::new(observer, &position))?;
        out.flush()?;
        written += 1;
    }
    Ok(())
}
