//! Core data types shared by the calculator and the overlay.

use crate::error::check_coordinates;
use crate::math::normalize_degrees_pm180;
use crate::Result;
use core::fmt;

/// A point on the globe in geographic coordinates.
///
/// - Longitude: -180° to +180°, positive east of Greenwich
/// - Latitude: -90° to +90°, positive north of the equator
///
/// # Example
/// ```
/// # use nite::GeoPosition;
/// let vienna = GeoPosition::new(16.37, 48.21).unwrap();
/// assert_eq!(vienna.longitude(), 16.37);
/// assert_eq!(vienna.latitude(), 48.21);
///
/// assert!(GeoPosition::new(200.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    longitude: f64,
    latitude: f64,
}

impl GeoPosition {
    /// Creates a position from longitude and latitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLongitude` or `InvalidLatitude` for out-of-range or non-finite values.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Builds a position from values the caller has already kept in range.
    pub(crate) const fn from_parts(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Gets the longitude in degrees (-180° to +180°).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the latitude in degrees (-90° to +90°).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The diametrically opposite point on the globe.
    ///
    /// Longitude is shifted by 180° and wrapped back into (-180°, 180°], latitude is mirrored.
    ///
    /// # Example
    /// ```
    /// # use nite::GeoPosition;
    /// let p = GeoPosition::new(-43.8, 23.44).unwrap().antipode();
    /// assert!((p.longitude() - 136.2).abs() < 1e-9);
    /// assert_eq!(p.latitude(), -23.44);
    /// ```
    #[must_use]
    pub fn antipode(&self) -> Self {
        Self {
            longitude: normalize_degrees_pm180(self.longitude + 180.0),
            latitude: -self.latitude,
        }
    }

    /// Returns `[longitude, latitude]`, the axis order used by GeoJSON and most map libraries.
    #[must_use]
    pub const fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, ns) = if self.latitude < 0.0 {
            (-self.latitude, 'S')
        } else {
            (self.latitude, 'N')
        };
        let (lon, ew) = if self.longitude < 0.0 {
            (-self.longitude, 'W')
        } else {
            (self.longitude, 'E')
        };
        write!(f, "{lat:.3}°{ns} {lon:.3}°{ew}")
    }
}
