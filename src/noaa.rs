//! Low-precision subsolar point calculation.
//!
//! Follows the NOAA solar calculator spreadsheet equations, themselves a
//! simplification of Meeus, 'Astronomical Algorithms'. Declination is good to
//! roughly 0.01° for dates within a few centuries of J2000; that is plenty
//! for shading a map and not meant for navigation.
//!
//! The result is the subsolar point: the place on Earth where the sun stands
//! at the zenith at the given instant.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    asin, cos, mul_add, normalize_degrees_0_to_360, normalize_degrees_pm180, polynomial, sin,
    tan, wrap,
};
use crate::time::{JulianDate, MINUTES_PER_DAY};
use crate::{GeoPosition, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Intermediate quantities of the solar calculation for one instant.
///
/// All angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarParameters {
    julian_century: f64,
    mean_longitude: f64,
    mean_anomaly: f64,
    apparent_longitude: f64,
    obliquity: f64,
    declination: f64,
    equation_of_time: f64,
}

impl SolarParameters {
    /// Julian centuries since J2000.0.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// Geometric mean longitude of the sun, in [0°, 360°).
    #[must_use]
    pub const fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Geometric mean anomaly of the sun (not normalized).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Apparent ecliptic longitude, corrected for nutation and aberration.
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Obliquity of the ecliptic, corrected for nutation.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// Solar declination, the latitude of the subsolar point.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Equation of time in minutes: apparent solar time minus mean solar time.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Computes the time-dependent solar quantities for a Julian date.
///
/// # Example
/// ```
/// # use nite::{noaa, time::JulianDate};
/// let jd = JulianDate::from_utc(2023, 11, 3, 12, 0, 0.0).unwrap();
/// let params = noaa::solar_parameters(&jd);
/// // Early November has the sundial running about a quarter hour ahead of the clock
/// assert!((params.equation_of_time() - 16.4).abs() < 0.3);
/// ```
#[must_use]
pub fn solar_parameters(jd: &JulianDate) -> SolarParameters {
    let jc = jd.julian_century();

    let mean_longitude =
        normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], jc));
    let mean_anomaly = polynomial(&[357.52911, 35999.05029, -0.0001537], jc);
    let m = mean_anomaly.to_radians();

    // equation of the center
    let center = sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], jc)
        + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], jc)
        + sin(3.0 * m) * 0.000289;
    let true_longitude = mean_longitude + center;

    // longitude of the moon's ascending node, drives the nutation terms
    let omega = mul_add(-1934.136, jc, 125.04).to_radians();
    let apparent_longitude = true_longitude - 0.00569 - 0.00478 * sin(omega);

    let mean_obliquity =
        23.0 + (26.0 + polynomial(&[21.448, -46.815, -0.00059, 0.001813], jc) / 60.0) / 60.0;
    let obliquity = mean_obliquity + 0.00256 * cos(omega);

    let declination = asin(sin(obliquity.to_radians()) * sin(apparent_longitude.to_radians()))
        .to_degrees();

    let eccentricity = polynomial(&[0.016708634, -0.000042037, -0.0000001267], jc);
    let equation_of_time = equation_of_time(obliquity, mean_longitude, m, eccentricity);

    SolarParameters {
        julian_century: jc,
        mean_longitude,
        mean_anomaly,
        apparent_longitude,
        obliquity,
        declination,
        equation_of_time,
    }
}

/// Equation of time in minutes (Smart's closed form).
fn equation_of_time(obliquity: f64, mean_longitude: f64, mean_anomaly_rad: f64, e: f64) -> f64 {
    let y = tan((obliquity / 2.0).to_radians());
    let y = y * y;
    let l0 = mean_longitude.to_radians();
    let m = mean_anomaly_rad;

    let radians = y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    // 4 minutes of time per degree of rotation
    4.0 * radians.to_degrees()
}

/// Calculates the subsolar point for a Julian date.
///
/// The latitude is the solar declination. The longitude follows from the true
/// solar time at Greenwich: at apparent noon the sun stands over the prime
/// meridian, and it moves west by one degree every four minutes.
#[must_use]
pub fn sun_position_from_julian(jd: JulianDate) -> GeoPosition {
    let params = solar_parameters(&jd);
    subsolar_point(&jd, &params)
}

fn subsolar_point(jd: &JulianDate, params: &SolarParameters) -> GeoPosition {
    let true_solar_time = wrap(
        jd.minutes_past_midnight() + params.equation_of_time(),
        MINUTES_PER_DAY,
    );
    let longitude = normalize_degrees_pm180(180.0 - true_solar_time / 4.0);
    GeoPosition::from_parts(longitude, params.declination())
}

/// Calculates the subsolar point for a unix timestamp in milliseconds.
///
/// # Errors
/// Returns `InvalidInput` if `millis` is NaN, infinite, or more than 100,000,000
/// days from the epoch.
///
/// # Example
/// ```
/// # use nite::noaa;
/// // 2023-06-21T14:57:00Z, northern summer solstice
/// let sun = noaa::sun_position_from_unix_millis(1_687_359_420_000.0).unwrap();
/// assert!((sun.latitude() - 23.44).abs() < 0.05);
///
/// assert!(noaa::sun_position_from_unix_millis(f64::NAN).is_err());
/// ```
pub fn sun_position_from_unix_millis(millis: f64) -> Result<GeoPosition> {
    let jd = JulianDate::from_unix_millis(millis)?;
    Ok(sun_position_from_julian(jd))
}

/// Calculates the subsolar point for a timezone-aware date and time.
///
/// Only the instant matters; the timezone of `datetime` does not change the result.
///
/// # Example
/// ```rust
/// use nite::noaa;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2023-03-20T22:24:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let sun = noaa::sun_position(datetime);
///
/// // March equinox: the sun stands over the equator
/// assert!(sun.latitude().abs() < 0.05);
/// println!("Subsolar point: {sun}");
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn sun_position<Tz: TimeZone>(datetime: DateTime<Tz>) -> GeoPosition {
    sun_position_from_julian(JulianDate::from_datetime(&datetime))
}

/// Calculates the subsolar point for the current system time.
#[cfg(all(feature = "chrono", feature = "std"))]
#[must_use]
pub fn sun_position_now() -> GeoPosition {
    sun_position(chrono::Utc::now())
}
