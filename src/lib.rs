//! # Sun Position
//!
//! Low-precision solar elevation and azimuth for a UTC instant and an observer on Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The model is the "approximate position of the Sun" from the Astronomical
//! Almanac: mean longitude and mean anomaly of the Sun give its ecliptic
//! longitude, right ascension, declination and the equation of time. The
//! sub-solar point is then rotated into the observer's horizon frame. The whole
//! calculation is a few dozen floating-point operations in double precision.
//!
//! ## Features
//!
//! - Pure and total: no error path, no shared state, safe to call from any thread
//! - Split API: compute the time-dependent part once, evaluate many observers
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions and enable [`Instant::now`]
//! - `chrono` (default): Enable `DateTime<Tz>` conversions and `YYYY-MM-DD HH:MM:SS` parsing
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `cli`: Build the `sunpos` command-line tool
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sunpos = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! sunpos = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunpos::{almanac, Instant};
//!
//! let instant = Instant::parse("2025-10-31 18:33:00").unwrap();
//! let position = almanac::compute(
//!     instant,
//!     51.340333_f64.to_radians(), // Leipzig latitude
//!     12.37475_f64.to_radians(),  // Leipzig longitude
//! );
//!
//! println!("Elevation: {:.6}°", position.elevation_degrees());
//! println!("Azimuth: {:.6}°", position.azimuth_degrees());
//! # }
//! ```
//!
//! ### Solar Position (numeric API, no chrono)
//! ```rust
//! use sunpos::{almanac, GeoCoordinate, Instant};
//!
//! let instant = Instant::from_utc(2026, 6, 21, 12, 0, 0).unwrap();
//! let vienna = GeoCoordinate::from_degrees(48.21, 16.37);
//! let position = almanac::solar_position(instant, &vienna);
//!
//! assert!(position.is_sun_up());
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0 = North, measured clockwise (0 to 2π)
//! - **Elevation angle**: 0 = horizon, π/2 = directly overhead (-π/2 to +π/2)
//!
//! All inputs and outputs of the core calculation are radians; the `*_degrees`
//! accessors convert for display.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::almanac::{SolarCoordinates, compute, solar_position};
pub use crate::error::{Error, Result};
pub use crate::time::Instant;
pub use crate::types::{GeoCoordinate, SunPosition};

// Algorithm modules
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;
