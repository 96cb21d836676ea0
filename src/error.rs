//! Error types for the night overlay library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while computing the sun position or driving an overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input that is not a usable timestamp (non-finite or out of range).
    InvalidInput {
        /// Description of the rejected input.
        message: &'static str,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid angular radius for a shadow circle (must be in (0, 180]).
    InvalidAngle {
        /// The invalid angle provided.
        value: f64,
    },
    /// Invalid fill opacity (must be between 0 and 1).
    InvalidOpacity {
        /// The invalid opacity provided.
        value: f64,
    },
    /// Overlay configuration that is individually valid but inconsistent.
    InvalidConfig {
        /// Description of the configuration problem.
        message: &'static str,
    },
    /// An overlay operation was called before `init`.
    NotInitialized,
    /// `init` was called on an overlay that already owns regions.
    AlreadyInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { message } => write!(f, "invalid input: {message}"),
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidAngle { value } => {
                write!(
                    f,
                    "invalid shadow angle {value}° (must be greater than 0° and at most 180°)"
                )
            }
            Self::InvalidOpacity { value } => {
                write!(f, "invalid opacity {value} (must be between 0 and 1)")
            }
            Self::InvalidConfig { message } => write!(f, "invalid configuration: {message}"),
            Self::NotInitialized => write!(f, "overlay used before init"),
            Self::AlreadyInitialized => write!(f, "overlay is already initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid input error.
    #[must_use]
    pub const fn invalid_input(message: &'static str) -> Self {
        Self::InvalidInput { message }
    }

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

    /// Creates an invalid shadow angle error.
    #[must_use]
    pub const fn invalid_angle(value: f64) -> Self {
        Self::InvalidAngle { value }
    }

    /// Creates an invalid opacity error.
    #[must_use]
    pub const fn invalid_opacity(value: f64) -> Self {
        Self::InvalidOpacity { value }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub const fn invalid_config(message: &'static str) -> Self {
        Self::InvalidConfig { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a shadow circle's angular radius.
///
/// # Errors
/// Returns `InvalidAngle` unless the angle is in (0, 180] degrees.
pub fn check_angle(angle: f64) -> Result<()> {
    if !(angle > 0.0 && angle <= 180.0) {
        return Err(Error::invalid_angle(angle));
    }
    Ok(())
}

/// Validates a fill opacity.
///
/// # Errors
/// Returns `InvalidOpacity` unless the opacity is in [0, 1].
pub fn check_opacity(opacity: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(Error::invalid_opacity(opacity));
    }
    Ok(())
}

/// Largest unix timestamp magnitude accepted, in milliseconds: 100,000,000 days either
/// side of the epoch.
pub const MAX_UNIX_MILLIS: f64 = 8.64e15;

/// Validates a unix timestamp in milliseconds.
///
/// # Errors
/// Returns `InvalidInput` if the timestamp is NaN, infinite, or further than
/// [`MAX_UNIX_MILLIS`] from the epoch.
pub fn check_unix_millis(millis: f64) -> Result<()> {
    if !millis.is_finite() {
        return Err(Error::invalid_input("timestamp is not a finite number"));
    }
    if millis.abs() > MAX_UNIX_MILLIS {
        return Err(Error::invalid_input("timestamp is out of range"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(23.44).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_angle_validation() {
        assert!(check_angle(90.0).is_ok());
        assert!(check_angle(87.0).is_ok());
        assert!(check_angle(180.0).is_ok());
        assert!(check_angle(0.001).is_ok());

        assert!(check_angle(0.0).is_err());
        assert!(check_angle(-5.0).is_err());
        assert!(check_angle(180.5).is_err());
        assert!(check_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_opacity_validation() {
        assert!(check_opacity(0.0).is_ok());
        assert!(check_opacity(0.25).is_ok());
        assert!(check_opacity(1.0).is_ok());

        assert!(check_opacity(-0.1).is_err());
        assert!(check_opacity(1.5).is_err());
        assert!(check_opacity(f64::NAN).is_err());
    }

    #[test]
    fn test_unix_millis_validation() {
        assert!(check_unix_millis(0.0).is_ok());
        assert!(check_unix_millis(-86_400_000.0).is_ok());
        assert!(check_unix_millis(f64::NAN).is_err());
        assert!(check_unix_millis(f64::NEG_INFINITY).is_err());

        assert!(check_unix_millis(MAX_UNIX_MILLIS).is_ok());
        assert!(check_unix_millis(-MAX_UNIX_MILLIS).is_ok());
        assert_eq!(
            check_unix_millis(1e17),
            Err(Error::invalid_input("timestamp is out of range"))
        );
        assert!(check_unix_millis(-1e300).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        assert_eq!(
            Error::invalid_latitude(95.0).to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );
        assert_eq!(
            Error::invalid_opacity(2.0).to_string(),
            "invalid opacity 2 (must be between 0 and 1)"
        );
        assert_eq!(Error::NotInitialized.to_string(), "overlay used before init");
        assert_eq!(
            Error::invalid_input("timestamp is not a finite number").to_string(),
            "invalid input: timestamp is not a finite number"
        );
    }
}
