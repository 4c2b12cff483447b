//! UTC instants and the day counts the almanac model is driven by.
//!
//! An [`Instant`] is a point in UTC time stored as whole Unix seconds plus a
//! nanosecond remainder. The calendar follows the proleptic Gregorian rules and
//! ignores leap seconds, exactly like Unix time.

#![allow(clippy::unreadable_literal)]

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use core::fmt;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

const SECONDS_PER_DAY_I64: i64 = 86_400;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Unix time of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Fixed input format accepted by [`Instant::parse`].
#[cfg(feature = "chrono")]
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point in civil time, interpreted in UTC.
///
/// Immutable once constructed. Provides the two quantities the solar model
/// needs: [`days_since_j2000`](Self::days_since_j2000) and
/// [`day_fraction`](Self::day_fraction).
///
/// # Example
/// ```
/// # use sunpos::Instant;
/// let instant = Instant::from_utc(2000, 1, 2, 0, 0, 0).unwrap();
/// assert_eq!(instant.days_since_j2000(), 0.5);
/// assert_eq!(instant.day_fraction(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    /// Whole seconds since 1970-01-01 00:00:00 UTC
    seconds: i64,
    /// Sub-second part, always below one second
    nanos: u32,
}

impl Instant {
    /// The J2000.0 reference epoch, 2000-01-01 12:00:00 UTC.
    pub const J2000: Self = Self::from_unix_seconds(J2000_UNIX_SECONDS);

    /// Creates an instant from UTC calendar fields.
    ///
    /// # Arguments
    /// * `year` - Year (proleptic Gregorian, can be zero or negative)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31, checked against the month length)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any field is outside its valid range.
    ///
    /// # Example
    /// ```
    /// # use sunpos::Instant;
    /// let instant = Instant::from_utc(2025, 10, 31, 18, 33, 0).unwrap();
    /// assert_eq!(instant.unix_seconds(), 1_761_935_580);
    /// assert!(Instant::from_utc(2025, 2, 29, 0, 0, 0).is_err());
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if day > days_in_month(i64::from(year), month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if second > 59 {
            return Err(Error::invalid_datetime("second must be between 0 and 59"));
        }

        let days = days_from_civil(i64::from(year), month, day);
        let seconds = days * SECONDS_PER_DAY_I64
            + i64::from(hour) * 3600
            + i64::from(minute) * 60
            + i64::from(second);
        Ok(Self::from_unix_seconds(seconds))
    }

    /// Creates an instant from whole seconds since the Unix epoch.
    #[must_use]
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Creates an instant from seconds and nanoseconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if `nanos` is one second or more.
    pub const fn from_unix_timestamp(seconds: i64, nanos: u32) -> Result<Self> {
        if nanos >= NANOS_PER_SECOND {
            return Err(Error::invalid_datetime(
                "nanoseconds must be below one second",
            ));
        }
        Ok(Self { seconds, nanos })
    }

    /// Reads the current instant from the system clock.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => Self {
                seconds: i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
                nanos: elapsed.subsec_nanos(),
            },
            Err(before_epoch) => {
                let behind = before_epoch.duration();
                let seconds = -i64::try_from(behind.as_secs()).unwrap_or(i64::MAX);
                match behind.subsec_nanos() {
                    0 => Self::from_unix_seconds(seconds),
                    nanos => Self {
                        seconds: seconds - 1,
                        nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    /// Creates an instant from a timezone-aware chrono `DateTime`.
    ///
    /// The offset is applied, so equal moments in different zones give equal
    /// instants. A leap second is folded into the last nanosecond of its minute.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            seconds: datetime.timestamp(),
            nanos: datetime.timestamp_subsec_nanos().min(NANOS_PER_SECOND - 1),
        }
    }

    /// Creates an instant from a naive date/time taken to be UTC.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_naive_utc(datetime: &NaiveDateTime) -> Self {
        Self::from_datetime(&datetime.and_utc())
    }

    /// Parses a UTC date string in the fixed `YYYY-MM-DD HH:MM:SS` format.
    ///
    /// Surrounding whitespace is ignored. Time zone designators are not accepted.
    ///
    /// # Errors
    /// Returns `ParseDateTime` if the string does not match the format or names
    /// a date that does not exist.
    ///
    /// # Example
    /// ```
    /// # use sunpos::Instant;
    /// let instant = Instant::parse("2025-10-31 18:33:00").unwrap();
    /// assert_eq!(instant, Instant::from_utc(2025, 10, 31, 18, 33, 0).unwrap());
    /// assert!(Instant::parse("2025-10-31T18:33:00Z").is_err());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn parse(input: &str) -> Result<Self> {
        use chrono::format::ParseErrorKind;

        let naive = NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT).map_err(
            |e| match e.kind() {
                ParseErrorKind::OutOfRange => Error::parse_datetime("field out of range"),
                ParseErrorKind::Impossible => Error::parse_datetime("date does not exist"),
                ParseErrorKind::NotEnough | ParseErrorKind::TooShort => {
                    Error::parse_datetime("input is incomplete")
                }
                ParseErrorKind::TooLong => Error::parse_datetime("trailing input"),
                _ => Error::parse_datetime("input contains invalid characters"),
            },
        )?;
        Ok(Self::from_naive_utc(&naive))
    }

    /// Converts back to a chrono `DateTime<Utc>`.
    ///
    /// Returns `None` for instants outside chrono's representable range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }

    /// Returns this instant moved by a whole number of seconds.
    ///
    /// Saturates at the ends of the representable range.
    #[must_use]
    pub const fn add_seconds(self, seconds: i64) -> Self {
        Self {
            seconds: self.seconds.saturating_add(seconds),
            nanos: self.nanos,
        }
    }

    /// Days elapsed since 2000-01-01 12:00:00 UTC, including the fraction of a day.
    ///
    /// Negative before the epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        // i128 keeps the difference exact for every i64 second count
        let whole = i128::from(self.seconds) - i128::from(J2000_UNIX_SECONDS);
        let elapsed = whole as f64 + self.subsecond();
        elapsed / SECONDS_PER_DAY
    }

    /// Fraction of the current UTC calendar day already elapsed, in `[0, 1)`.
    #[must_use]
    pub fn day_fraction(&self) -> f64 {
        let second_of_day = self.seconds.rem_euclid(SECONDS_PER_DAY_I64) as f64;
        (second_of_day + self.subsecond()) / SECONDS_PER_DAY
    }

    /// Gets the Julian Date (UTC based).
    #[must_use]
    pub fn julian_date(&self) -> f64 {
        J2000_JDN + self.days_since_j2000()
    }

    /// Gets whole seconds since the Unix epoch.
    #[must_use]
    pub const fn unix_seconds(&self) -> i64 {
        self.seconds
    }

    /// Gets the nanosecond part of the current second.
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.nanos
    }

    /// Gets the calendar year.
    #[must_use]
    pub fn year(&self) -> i64 {
        self.civil_date().0
    }

    /// Gets the calendar month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.civil_date().1
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.civil_date().2
    }

    /// Gets the hour of day (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        (self.second_of_day() / 3600) as u32
    }

    /// Gets the minute of hour (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        (self.second_of_day() % 3600 / 60) as u32
    }

    /// Gets the second of minute (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        (self.second_of_day() % 60) as u32
    }

    const fn second_of_day(&self) -> i64 {
        self.seconds.rem_euclid(SECONDS_PER_DAY_I64)
    }

    fn subsecond(&self) -> f64 {
        f64::from(self.nanos) / f64::from(NANOS_PER_SECOND)
    }

    fn civil_date(&self) -> (i64, u32, u32) {
        civil_from_days(self.seconds.div_euclid(SECONDS_PER_DAY_I64))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.civil_date();
        write!(
            f,
            "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

#[cfg(feature = "chrono")]
impl core::str::FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Howard Hinnant's `days_from_civil`, with March as the first month of the
/// computational year so the leap day falls last.
const fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian `(year, month, day)` for days since 1970-01-01.
const fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + (month <= 2) as i64;
    (year, month, day)
}
