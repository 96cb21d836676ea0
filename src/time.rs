//! Time conversions for the solar calculation.
//!
//! Every instant is reduced to two numbers: the Julian Date, which drives the
//! orbital polynomials, and the minutes elapsed since UTC midnight, which
//! places the sun in longitude.

#![allow(clippy::unreadable_literal)]

use crate::error::check_unix_millis;
use crate::math::wrap;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::TimeZone;

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Minutes per day (1,440)
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Julian Date of the unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// An instant expressed for astronomical calculations.
///
/// UTC is treated as UT; the sub-minute difference to UT1 and ΔT are below the
/// accuracy of the low-precision algorithm and are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD)
    jd: f64,
    /// Minutes since the preceding UTC midnight, in [0, 1440)
    minutes_past_midnight: f64,
}

impl JulianDate {
    /// Creates a Julian date from milliseconds since the unix epoch.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `millis` is NaN, infinite, or beyond
    /// [`MAX_UNIX_MILLIS`](crate::error::MAX_UNIX_MILLIS) from the epoch.
    ///
    /// # Example
    /// ```
    /// # use nite::time::JulianDate;
    /// let jd = JulianDate::from_unix_millis(946_728_000_000.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// assert_eq!(jd.minutes_past_midnight(), 720.0);
    /// ```
    pub fn from_unix_millis(millis: f64) -> Result<Self> {
        check_unix_millis(millis)?;
        Ok(Self {
            jd: millis / MILLIS_PER_DAY + UNIX_EPOCH_JD,
            minutes_past_midnight: wrap(millis, MILLIS_PER_DAY) / 60_000.0,
        })
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The instant is what counts: the same moment in any timezone yields the same value.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let seconds = datetime.timestamp();
        let nanos = datetime.timestamp_subsec_nanos();
        let millis = seconds as f64 * 1_000.0 + f64::from(nanos) / 1e6;
        Self {
            jd: millis / MILLIS_PER_DAY + UNIX_EPOCH_JD,
            minutes_past_midnight: wrap(millis, MILLIS_PER_DAY) / 60_000.0,
        }
    }

    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// Dates use the proleptic Gregorian calendar throughout, matching unix time.
    ///
    /// # Errors
    /// Returns `InvalidInput` if any component is outside its valid range
    /// (month 1-12, day within month, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use nite::time::JulianDate;
    /// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// assert_eq!(jd.julian_century(), 0.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_input("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_input("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_input("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_input("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_input(
                "second must be between 0 and 59.999...",
            ));
        }

        let days = days_from_civil(year, month, day) as f64;
        let seconds_of_day = f64::from(hour * 3600 + minute * 60) + second;
        Self::from_unix_millis(days * MILLIS_PER_DAY + seconds_of_day * 1_000.0)
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the minutes elapsed since the preceding UTC midnight, in [0, 1440).
    #[must_use]
    pub const fn minutes_past_midnight(&self) -> f64 {
        self.minutes_past_midnight
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Howard Hinnant's `days_from_civil`, exact for the whole `i32` year range.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
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
