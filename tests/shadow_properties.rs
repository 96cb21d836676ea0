#![cfg(feature = "chrono")]

//! Property-based checks of the sun position and the shadow circles derived from it.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::TZ_VARIANTS;
use nite::{GeoPosition, ShadowRegion, noaa, shadow::angular_distance};
use proptest::prelude::*;

/// 1950-01-01 to 2150-01-01: the obliquity stays below 23.45° throughout.
const FIRST_SECOND: i64 = -631_152_000;
const LAST_SECOND: i64 = 5_680_281_600;

fn any_utc_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    (FIRST_SECOND..LAST_SECOND, 0u32..1_000_000_000)
        .prop_map(|(seconds, nanos)| DateTime::from_timestamp(seconds, nanos).unwrap())
}

fn wrap180(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

proptest! {
    #[test]
    fn sun_latitude_stays_within_tropics(datetime in any_utc_datetime()) {
        let sun = noaa::sun_position(datetime);
        prop_assert!((-23.45..=23.45).contains(&sun.latitude()), "{sun:?} at {datetime}");
    }

    #[test]
    fn sun_longitude_stays_in_range(datetime in any_utc_datetime()) {
        let sun = noaa::sun_position(datetime);
        prop_assert!((-180.0..=180.0).contains(&sun.longitude()), "{sun:?} at {datetime}");
    }

    #[test]
    fn shadow_center_is_the_antipode(
        datetime in any_utc_datetime(),
        angle in 1.0_f64..=180.0,
    ) {
        let sun = noaa::sun_position(datetime);
        let region = ShadowRegion::opposite(&sun, angle).unwrap();
        let center = region.center();

        prop_assert_eq!(center.latitude(), -sun.latitude());
        prop_assert!((center.longitude() - wrap180(sun.longitude() + 180.0)).abs() < 1e-9);
        prop_assert!((angular_distance(&sun, &center) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn sun_is_never_inside_its_own_shadow(datetime in any_utc_datetime()) {
        let sun = noaa::sun_position(datetime);
        let twilight = ShadowRegion::opposite(&sun, 90.0).unwrap();
        let night = ShadowRegion::opposite(&sun, 87.0).unwrap();

        prop_assert!(!twilight.contains(&sun));
        prop_assert!(twilight.contains(&sun.antipode()));
        prop_assert!(night.radius_meters() < twilight.radius_meters());
    }

    #[test]
    fn night_ring_lies_inside_twilight(
        datetime in any_utc_datetime(),
        step in 5.0_f64..45.0,
    ) {
        let sun = noaa::sun_position(datetime);
        let twilight = ShadowRegion::opposite(&sun, 90.0).unwrap();
        let night = ShadowRegion::opposite(&sun, 87.0).unwrap();

        for [lon, lat] in night.ring(step) {
            let vertex = GeoPosition::new(lon, lat).unwrap();
            prop_assert!(twilight.contains(&vertex));
            prop_assert!((angular_distance(&sun, &vertex) - 93.0).abs() < 1e-6);
        }
    }

    #[test]
    fn timezone_does_not_change_the_result(
        datetime in any_utc_datetime(),
        tz_index in 0..TZ_VARIANTS.len(),
    ) {
        let tz = TZ_VARIANTS[tz_index];
        let local = tz.from_utc_datetime(&datetime.naive_utc());

        prop_assert_eq!(noaa::sun_position(local), noaa::sun_position(datetime));
    }

    #[test]
    fn same_instant_same_position(datetime in any_utc_datetime()) {
        prop_assert_eq!(noaa::sun_position(datetime), noaa::sun_position(datetime));
    }
}
