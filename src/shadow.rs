//! Shadow circles: the unlit part of the globe as small circles around the antisolar point.
//!
//! The night side of Earth is everything more than 90° of arc away from the
//! subsolar point, i.e. within 90° of its antipode. Shrinking the radius below
//! 90° cuts off the twilight band and leaves the part that is fully dark.

use crate::error::check_angle;
use crate::math::{asin, atan2, ceil, cos, normalize_degrees_pm180, sin, sqrt};
use crate::{GeoPosition, Result};
use alloc::vec::Vec;

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Default angular radius of the twilight circle: the geometric day/night boundary.
pub const DEFAULT_TWILIGHT_ANGLE: f64 = 90.0;

/// Default angular radius of the full-night circle.
pub const DEFAULT_NIGHT_ANGLE: f64 = 87.0;

/// The two shaded regions an overlay draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowKind {
    /// Outer circle, the edge of twilight
    Twilight,
    /// Inner circle, full night
    Night,
}

impl ShadowKind {
    /// Both kinds, outer first, in the order regions are created.
    pub const ALL: [Self; 2] = [Self::Twilight, Self::Night];

    /// Stable region name handed to renderers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Twilight => "twilight",
            Self::Night => "night",
        }
    }
}

/// A circle on the sphere: everything within `angular_radius` degrees of arc of `center`.
///
/// Built fresh for every recomputation and handed to the renderer by value.
///
/// # Example
/// ```
/// # use nite::{GeoPosition, ShadowRegion};
/// let sun = GeoPosition::new(-43.8, 23.44).unwrap();
/// let night = ShadowRegion::opposite(&sun, 87.0).unwrap();
///
/// assert!((night.center().longitude() - 136.2).abs() < 1e-9);
/// assert_eq!(night.center().latitude(), -23.44);
/// assert_eq!(night.angular_radius(), 87.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowRegion {
    center: GeoPosition,
    angular_radius: f64,
}

impl ShadowRegion {
    /// Creates a circle around an arbitrary center.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless `angular_radius` is in (0°, 180°].
    pub fn new(center: GeoPosition, angular_radius: f64) -> Result<Self> {
        check_angle(angular_radius)?;
        Ok(Self {
            center,
            angular_radius,
        })
    }

    /// Creates the shadow circle for a sun position: centered on the sun's antipode.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless `angular_radius` is in (0°, 180°].
    pub fn opposite(sun: &GeoPosition, angular_radius: f64) -> Result<Self> {
        Self::new(sun.antipode(), angular_radius)
    }

    /// Center of the circle.
    #[must_use]
    pub const fn center(&self) -> GeoPosition {
        self.center
    }

    /// Angular radius in degrees of arc.
    #[must_use]
    pub const fn angular_radius(&self) -> f64 {
        self.angular_radius
    }

    /// Radius as a distance along the surface of a sphere with the mean Earth radius.
    ///
    /// For backends that draw circles in meters; a 90° circle is a quarter meridian.
    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        EARTH_RADIUS_METERS * self.angular_radius.to_radians()
    }

    /// Whether `point` lies inside the circle (boundary included).
    #[must_use]
    pub fn contains(&self, point: &GeoPosition) -> bool {
        angular_distance(&self.center, point) <= self.angular_radius
    }

    /// Samples the circle's boundary as a closed ring of `[longitude, latitude]` vertices.
    ///
    /// Vertices are spaced `step_degrees` of bearing apart, walking clockwise from north
    /// as seen from above the center. The first vertex is repeated at the end. Steps
    /// outside (0°, 90°] are clamped into that range.
    ///
    /// The ring is still on the sphere; projecting it is the renderer's job.
    #[must_use]
    pub fn ring(&self, step_degrees: f64) -> Vec<[f64; 2]> {
        let step = if step_degrees.is_finite() {
            step_degrees.clamp(1e-3, 90.0)
        } else {
            90.0
        };
        let count = ceil(360.0 / step) as usize;

        let mut ring = Vec::with_capacity(count + 1);
        for i in 0..count {
            let bearing = (i as f64 * 360.0 / count as f64).to_radians();
            ring.push(destination(&self.center, self.angular_radius, bearing).to_lon_lat());
        }
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        ring
    }
}

/// Point reached by travelling `distance_degrees` of arc from `origin` on initial `bearing`.
fn destination(origin: &GeoPosition, distance_degrees: f64, bearing: f64) -> GeoPosition {
    let lat1 = origin.latitude().to_radians();
    let lon1 = origin.longitude().to_radians();
    let d = distance_degrees.to_radians();

    let lat2 = asin(sin(lat1) * cos(d) + cos(lat1) * sin(d) * cos(bearing));
    let lon2 = lon1 + atan2(sin(bearing) * sin(d) * cos(lat1), cos(d) - sin(lat1) * sin(lat2));

    GeoPosition::from_parts(
        normalize_degrees_pm180(lon2.to_degrees()),
        lat2.to_degrees().clamp(-90.0, 90.0),
    )
}

/// Great-circle distance between two points, in degrees of arc.
#[must_use]
pub fn angular_distance(a: &GeoPosition, b: &GeoPosition) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude() - a.longitude()).to_radians();

    // haversine
    let h = sin(dlat / 2.0) * sin(dlat / 2.0)
        + cos(lat1) * cos(lat2) * sin(dlon / 2.0) * sin(dlon / 2.0);
    (2.0 * asin(sqrt(h.clamp(0.0, 1.0)))).to_degrees()
}
