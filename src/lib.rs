//! # Nite
//!
//! Day/night overlay for geographic maps: where the sun is overhead right now, and which
//! part of the globe is in twilight or full night.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate has two layers:
//! - [`noaa`]: a low-precision solar position calculator (NOAA spreadsheet equations,
//!   roughly ±0.01° in declination) that turns an instant into the subsolar point.
//! - [`NightOverlay`]: a small state machine that keeps two shadow circles, twilight and
//!   full night, centered opposite the sun, on any map backend implementing [`Renderer`].
//!
//! The overlay never projects coordinates. It hands circles on the sphere
//! ([`ShadowRegion`]) to the renderer, which draws them however its map library does.
//!
//! ## Feature Flags
//!
//! - `std` (default): native math functions, `std::error::Error`, and the system clock
//! - `chrono` (default): `DateTime<Tz>` based API and the [`NightOverlay`] controller
//! - `libm`: pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! nite = "0.1"
//!
//! # no_std calculator only (numeric API)
//! nite = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun position
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, Utc};
//! use nite::noaa;
//!
//! let datetime = "2023-06-21T14:57:00Z".parse::<DateTime<Utc>>().unwrap();
//! let sun = noaa::sun_position(datetime);
//!
//! println!("Sun overhead at {sun}");
//! println!("Night centered on {}", sun.antipode());
//! # }
//! ```
//!
//! ### Sun position (numeric API, no chrono)
//! ```rust
//! use nite::{noaa, time::JulianDate};
//!
//! let jd = JulianDate::from_utc(2023, 6, 21, 14, 57, 0.0).unwrap();
//! let sun = noaa::sun_position_from_julian(jd);
//! assert!((sun.latitude() - 23.44).abs() < 0.05);
//! ```
//!
//! ### Overlay
//! ```rust
//! # #[cfg(all(feature = "chrono", feature = "std"))] {
//! use nite::{NightOverlay, OverlayConfig, render::MemoryRenderer};
//!
//! let mut overlay = NightOverlay::new();
//! overlay
//!     .init(MemoryRenderer::new(), OverlayConfig::default().with_opacity(0.3))
//!     .unwrap();
//!
//! // later, e.g. once a minute
//! overlay.refresh().unwrap();
//!
//! let twilight = overlay.renderer().unwrap().region("twilight").unwrap();
//! assert_eq!(twilight.circle.angular_radius(), 90.0);
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Longitude**: -180° to +180°, positive east of Greenwich
//! - **Latitude**: -90° to +90°, positive north
//! - **Angular radius**: degrees of arc along the sphere from a circle's center
//!
//! ## References
//!
//! - NOAA Global Monitoring Laboratory, Solar Calculation Details.
//!   <https://gml.noaa.gov/grad/solcalc/calcdetails.html>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of derived coordinates in tests
)]

extern crate alloc;

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::noaa::SolarParameters;
#[cfg(feature = "chrono")]
pub use crate::overlay::{Clock, FixedClock, NightOverlay, OverlayConfig};
#[cfg(all(feature = "chrono", feature = "std"))]
pub use crate::overlay::SystemClock;
pub use crate::render::{MemoryRenderer, RegionStyle, Renderer};
pub use crate::shadow::{ShadowKind, ShadowRegion};
pub use crate::types::GeoPosition;

// Calculation modules
pub mod noaa;
pub mod shadow;

// Core modules
pub mod error;
pub mod types;

// Rendering and state
#[cfg(feature = "chrono")]
pub mod overlay;
pub mod render;

// Internal modules
mod math;

// Public modules
pub mod time;
