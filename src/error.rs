//! Error types for the solar position library.
//!
//! The position calculation itself is total and never fails; these errors come
//! from building its inputs (calendar dates, date strings, coordinates).

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while preparing inputs for a solar position calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude is not a finite number.
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Longitude is not a finite number.
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Calendar fields do not describe a valid UTC instant.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// A date string did not match `YYYY-MM-DD HH:MM:SS`.
    ParseDateTime {
        /// Description of the parse failure.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "invalid latitude {value}° (must be finite)")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "invalid longitude {value}° (must be finite)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ParseDateTime { message } => {
                write!(
                    f,
                    "cannot parse date/time (expected YYYY-MM-DD HH:MM:SS): {message}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a date/time parse error.
    #[must_use]
    pub const fn parse_datetime(message: &'static str) -> Self {
        Self::ParseDateTime { message }
    }
}

/// Validates latitude is a finite number.
///
/// Range is deliberately not checked: the model is plain arithmetic and
/// accepts any finite angle.
///
/// # Errors
/// Returns `InvalidLatitude` for NaN or infinite values.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is a finite number.
///
/// # Errors
/// Returns `InvalidLongitude` for NaN or infinite values.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are finite.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for non-finite coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}
