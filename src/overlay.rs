//! The night overlay: keeps two shadow circles on a map in step with the sun.
//!
//! [`NightOverlay`] owns the overlay state (sun position, fixed date, visibility
//! and style) and drives a [`Renderer`] that does the actual drawing. Two
//! regions are created on [`NightOverlay::init`]: `"twilight"`, the outer circle
//! reaching to the day/night boundary, and `"night"`, a slightly smaller circle
//! drawn on top of it so full night reads darker than twilight.

use crate::error::{check_angle, check_opacity};
use crate::noaa;
use crate::render::{RegionStyle, Renderer};
use crate::shadow::{DEFAULT_NIGHT_ANGLE, DEFAULT_TWILIGHT_ANGLE, ShadowKind};
use crate::{Error, GeoPosition, Result, ShadowRegion};
use alloc::string::String;
use chrono::{DateTime, Utc};
use tracing::{debug, info, trace, warn};

/// Source of "now" for overlays that are not pinned to a fixed date.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reads the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock stopped at `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F: Fn() -> DateTime<Utc>> Clock for F {
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Style and geometry settings of an overlay.
///
/// Unset fields keep their defaults: black fill, 25% opacity, a 90° twilight
/// circle and an 87° night circle.
///
/// # Example
/// ```
/// # use nite::OverlayConfig;
/// let config = OverlayConfig::default().with_color("#102040").with_opacity(0.4);
/// assert_eq!(config.color(), "#102040");
/// assert_eq!(config.twilight_angle(), 90.0);
/// assert!(config.validate().is_ok());
///
/// assert!(OverlayConfig::default().with_opacity(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    color: String,
    opacity: f64,
    twilight_angle: f64,
    night_angle: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: String::from("#000"),
            opacity: 0.25,
            twilight_angle: DEFAULT_TWILIGHT_ANGLE,
            night_angle: DEFAULT_NIGHT_ANGLE,
        }
    }
}

impl OverlayConfig {
    /// Sets the fill color of both regions.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the fill opacity of both regions.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the angular radius of the outer (twilight) circle.
    #[must_use]
    pub fn with_twilight_angle(mut self, degrees: f64) -> Self {
        self.twilight_angle = degrees;
        self
    }

    /// Sets the angular radius of the inner (full night) circle.
    #[must_use]
    pub fn with_night_angle(mut self, degrees: f64) -> Self {
        self.night_angle = degrees;
        self
    }

    /// Fill color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Fill opacity.
    #[must_use]
    pub const fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Angular radius of the twilight circle in degrees.
    #[must_use]
    pub const fn twilight_angle(&self) -> f64 {
        self.twilight_angle
    }

    /// Angular radius of the night circle in degrees.
    #[must_use]
    pub const fn night_angle(&self) -> f64 {
        self.night_angle
    }

    /// Angular radius for a region kind.
    #[must_use]
    pub const fn angle(&self, kind: ShadowKind) -> f64 {
        match kind {
            ShadowKind::Twilight => self.twilight_angle,
            ShadowKind::Night => self.night_angle,
        }
    }

    /// Checks every setting.
    ///
    /// # Errors
    /// Returns `InvalidOpacity`, `InvalidAngle`, or `InvalidConfig` for an empty
    /// color or a night circle larger than the twilight circle.
    pub fn validate(&self) -> Result<()> {
        if self.color.trim().is_empty() {
            return Err(Error::invalid_config("color must not be empty"));
        }
        check_opacity(self.opacity)?;
        check_angle(self.twilight_angle)?;
        check_angle(self.night_angle)?;
        if self.night_angle > self.twilight_angle {
            return Err(Error::invalid_config(
                "night angle must not exceed twilight angle",
            ));
        }
        Ok(())
    }

    fn style(&self) -> RegionStyle {
        RegionStyle {
            fill_color: self.color.clone(),
            opacity: self.opacity,
        }
    }
}

/// A renderer together with the two regions the overlay created on it.
struct Attached<R: Renderer> {
    renderer: R,
    twilight: R::Handle,
    night: R::Handle,
}

impl<R: Renderer> Attached<R> {
    fn create(renderer: R, regions: &[ShadowRegion; 2], style: &RegionStyle) -> Self {
        let mut renderer = renderer;
        let [twilight, night] = ShadowKind::ALL.map(|kind| {
            trace!(region = kind.name(), "creating region");
            renderer.create_region(kind.name(), &regions[kind as usize], style)
        });
        Self {
            renderer,
            twilight,
            night,
        }
    }

    fn update(&mut self, regions: &[ShadowRegion; 2]) {
        let Self {
            renderer,
            twilight,
            night,
        } = self;
        for (kind, handle) in [(ShadowKind::Twilight, &*twilight), (ShadowKind::Night, &*night)] {
            trace!(region = kind.name(), "updating region geometry");
            renderer.update_region_geometry(handle, &regions[kind as usize]);
        }
    }

    fn set_visibility(&mut self, visible: bool) {
        let Self {
            renderer,
            twilight,
            night,
        } = self;
        for (kind, handle) in [(ShadowKind::Twilight, &*twilight), (ShadowKind::Night, &*night)] {
            trace!(region = kind.name(), visible, "setting region visibility");
            renderer.set_region_visibility(handle, visible);
        }
    }

    fn detach(self) -> R {
        let Self {
            mut renderer,
            twilight,
            night,
        } = self;
        renderer.remove_region(&twilight);
        renderer.remove_region(&night);
        renderer
    }
}

/// Day/night overlay bound to a rendering backend.
///
/// Starts uninitialized; [`init`](Self::init) attaches it to a renderer and
/// draws both regions, visible. After that the overlay moves between visible
/// and hidden with [`show`](Self::show) and [`hide`](Self::hide). Every
/// operation except `init` fails with [`Error::NotInitialized`] before `init`.
///
/// The sun position follows the clock unless a fixed date is set with
/// [`set_date`](Self::set_date). Nothing is scheduled: call
/// [`refresh`](Self::refresh) whenever the picture should catch up with the
/// clock.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use nite::{FixedClock, NightOverlay, OverlayConfig, render::MemoryRenderer};
///
/// let clock = FixedClock::new(Utc.with_ymd_and_hms(2023, 6, 21, 14, 57, 0).unwrap());
/// let mut overlay = NightOverlay::with_clock(clock);
/// overlay.init(MemoryRenderer::new(), OverlayConfig::default()).unwrap();
///
/// let shadow = overlay.shadow_position().unwrap();
/// assert!((shadow.latitude() + 23.44).abs() < 0.05);
///
/// overlay.hide().unwrap();
/// assert!(!overlay.is_visible().unwrap());
/// ```
pub struct NightOverlay<R: Renderer, C: Clock> {
    clock: C,
    config: OverlayConfig,
    date: Option<DateTime<Utc>>,
    sun_position: Option<GeoPosition>,
    visible: bool,
    attached: Option<Attached<R>>,
}

#[cfg(feature = "std")]
impl<R: Renderer> NightOverlay<R, SystemClock> {
    /// Creates an uninitialized overlay following the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

#[cfg(feature = "std")]
impl<R: Renderer> Default for NightOverlay<R, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer, C: Clock> NightOverlay<R, C> {
    /// Creates an uninitialized overlay reading "now" from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            config: OverlayConfig::default(),
            date: None,
            sun_position: None,
            visible: false,
            attached: None,
        }
    }

    /// Attaches the overlay to `renderer` and draws both regions for the current instant.
    ///
    /// # Errors
    /// Returns `AlreadyInitialized` on a second call, or a validation error for a bad `config`.
    /// On error the overlay is left unchanged.
    pub fn init(&mut self, renderer: R, config: OverlayConfig) -> Result<()> {
        if self.attached.is_some() {
            warn!("init called on an initialized overlay");
            return Err(Error::AlreadyInitialized);
        }
        config.validate()?;
        self.config = config;

        let regions = self.recompute()?;
        self.attached = Some(Attached::create(renderer, &regions, &self.config.style()));
        self.visible = true;
        info!(
            twilight_angle = self.config.twilight_angle,
            night_angle = self.config.night_angle,
            "night overlay initialized"
        );
        Ok(())
    }

    /// Recomputes the sun position and moves both regions to match.
    ///
    /// Does nothing while the overlay is hidden; [`show`](Self::show) catches up.
    ///
    /// # Errors
    /// Returns `NotInitialized` before [`init`](Self::init).
    pub fn refresh(&mut self) -> Result<()> {
        self.attached()?;
        if !self.visible {
            trace!("overlay hidden, skipping refresh");
            return Ok(());
        }
        let regions = self.recompute()?;
        self.attached_mut()?.update(&regions);
        Ok(())
    }

    /// Pins the overlay to `date`, or back to the clock with `None`, then refreshes.
    ///
    /// # Errors
    /// Returns `NotInitialized` before [`init`](Self::init).
    pub fn set_date(&mut self, date: impl Into<Option<DateTime<Utc>>>) -> Result<()> {
        self.attached()?;
        self.date = date.into();
        debug!(date = ?self.date, "overlay date set");
        self.refresh()
    }

    /// Pins the overlay to a unix timestamp in milliseconds, then refreshes.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a timestamp that is not finite or not representable
    /// as a date, or `NotInitialized` before [`init`](Self::init). The stored date is
    /// unchanged on error.
    pub fn set_date_from_unix_millis(&mut self, millis: f64) -> Result<()> {
        self.attached()?;
        let date = datetime_from_unix_millis(millis)?;
        self.set_date(date)
    }

    /// Shows both regions and brings their geometry up to date.
    ///
    /// # Errors
    /// Returns `NotInitialized` before [`init`](Self::init).
    pub fn show(&mut self) -> Result<()> {
        self.attached_mut()?.set_visibility(true);
        self.visible = true;
        info!("night overlay shown");
        self.refresh()
    }

    /// Hides both regions. Their geometry is kept as is.
    ///
    /// # Errors
    /// Returns `NotInitialized` before [`init`](Self::init).
    pub fn hide(&mut self) -> Result<()> {
        self.attached_mut()?.set_visibility(false);
        self.visible = false;
        info!("night overlay hidden");
        Ok(())
    }

    /// Whether the overlay is shown.
    ///
    /// # Errors
    /// Returns `NotInitialized` before [`init`](Self::init).
    pub fn is_visible(&self) -> Result<bool> {
        self.attached()?;
        Ok(self.visible)
    }

    /// Moves the overlay to another renderer and hands back the previous one.
    ///
    /// Both regions are removed from the old renderer and recreated on the new
    /// one with the current geometry, style and visibility.
    ///
    /// # Errors
    /// Returns `NotInitialized` before [`init`](Self::init).
    pub fn set_renderer(&mut self, renderer: R) -> Result<R> {
        self.attached()?;
        let regions = match self.sun_position {
            Some(sun) => self.regions_for(&sun)?,
            None => self.recompute()?,
        };

        let previous = self.attached.take().ok_or_else(not_initialized)?;
        let old = previous.detach();
        let mut attached = Attached::create(renderer, &regions, &self.config.style());
        if !self.visible {
            attached.set_visibility(false);
        }
        self.attached = Some(attached);
        info!("night overlay moved to a new renderer");
        Ok(old)
    }

    /// Removes both regions and returns the renderer, leaving the overlay uninitialized.
    ///
    /// The fixed date is cleared too, so a later [`init`](Self::init) starts from the clock.
    ///
    /// # Errors
    /// Returns `NotInitialized` before [`init`](Self::init).
    pub fn detach(&mut self) -> Result<R> {
        let attached = self.attached.take().ok_or_else(not_initialized)?;
        self.sun_position = None;
        self.date = None;
        self.visible = false;
        info!("night overlay detached");
        Ok(attached.detach())
    }

    /// The sun position from the latest computation.
    #[must_use]
    pub const fn sun_position(&self) -> Option<GeoPosition> {
        self.sun_position
    }

    /// Center of both shadow circles: the point opposite the sun.
    #[must_use]
    pub fn shadow_position(&self) -> Option<GeoPosition> {
        self.sun_position.map(|sun| sun.antipode())
    }

    /// Geometry of one of the regions as last handed to the renderer.
    #[must_use]
    pub fn region(&self, kind: ShadowKind) -> Option<ShadowRegion> {
        let sun = self.sun_position?;
        ShadowRegion::opposite(&sun, self.config.angle(kind)).ok()
    }

    /// The fixed date, if one is set.
    #[must_use]
    pub const fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The renderer, once initialized.
    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.attached.as_ref().map(|attached| &attached.renderer)
    }

    /// Mutable access to the renderer, once initialized.
    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.attached.as_mut().map(|attached| &mut attached.renderer)
    }

    /// The instant the next computation uses: the fixed date or the clock.
    fn instant(&self) -> DateTime<Utc> {
        self.date.unwrap_or_else(|| self.clock.now())
    }

    /// Recomputes the sun position and derives both circles from it.
    fn recompute(&mut self) -> Result<[ShadowRegion; 2]> {
        let instant = self.instant();
        let sun = noaa::sun_position(instant);
        self.sun_position = Some(sun);
        debug!(?instant, %sun, shadow = %sun.antipode(), "sun position recomputed");
        self.regions_for(&sun)
    }

    fn regions_for(&self, sun: &GeoPosition) -> Result<[ShadowRegion; 2]> {
        Ok([
            ShadowRegion::opposite(sun, self.config.twilight_angle)?,
            ShadowRegion::opposite(sun, self.config.night_angle)?,
        ])
    }

    fn attached(&self) -> Result<&Attached<R>> {
        self.attached.as_ref().ok_or_else(not_initialized)
    }

    fn attached_mut(&mut self) -> Result<&mut Attached<R>> {
        self.attached.as_mut().ok_or_else(not_initialized)
    }
}

fn not_initialized() -> Error {
    warn!("night overlay used before init");
    Error::NotInitialized
}

fn datetime_from_unix_millis(millis: f64) -> Result<DateTime<Utc>> {
    crate::error::check_unix_millis(millis)?;
    DateTime::from_timestamp_millis(millis as i64)
        .ok_or(Error::invalid_input("timestamp is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryRenderer;
    use chrono::TimeZone;
    use core::cell::Cell;

    fn solstice() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 21, 14, 57, 0).unwrap()
    }

    fn overlay() -> NightOverlay<MemoryRenderer, FixedClock> {
        let mut overlay = NightOverlay::with_clock(FixedClock::new(solstice()));
        overlay
            .init(MemoryRenderer::new(), OverlayConfig::default())
            .unwrap();
        overlay
    }

    #[test]
    fn test_init_creates_both_regions() {
        let overlay = overlay();
        let renderer = overlay.renderer().unwrap();

        assert_eq!(renderer.creates(), 2);
        let names: Vec<_> = renderer.regions().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["twilight", "night"]);

        let twilight = renderer.region("twilight").unwrap();
        assert_eq!(twilight.circle.angular_radius(), 90.0);
        assert_eq!(twilight.style.fill_color, "#000");
        assert_eq!(twilight.style.opacity, 0.25);
        assert!(twilight.visible);
        assert_eq!(renderer.region("night").unwrap().circle.angular_radius(), 87.0);

        assert!(overlay.is_visible().unwrap());
    }

    #[test]
    fn test_shadow_center_is_opposite_the_sun() {
        let overlay = overlay();
        let sun = overlay.sun_position().unwrap();
        let shadow = overlay.shadow_position().unwrap();

        assert_eq!(shadow.latitude(), -sun.latitude());
        assert_eq!(
            shadow.longitude(),
            crate::math::normalize_degrees_pm180(sun.longitude() + 180.0)
        );
        let twilight = overlay.renderer().unwrap().region("twilight").unwrap();
        assert_eq!(twilight.circle.center(), shadow);
        assert_eq!(overlay.region(ShadowKind::Twilight), Some(twilight.circle));
    }

    #[test]
    fn test_operations_before_init_fail() {
        let mut overlay: NightOverlay<MemoryRenderer, _> =
            NightOverlay::with_clock(FixedClock::new(solstice()));

        assert_eq!(overlay.refresh(), Err(Error::NotInitialized));
        assert_eq!(overlay.set_date(solstice()), Err(Error::NotInitialized));
        assert_eq!(overlay.show(), Err(Error::NotInitialized));
        assert_eq!(overlay.hide(), Err(Error::NotInitialized));
        assert_eq!(overlay.is_visible(), Err(Error::NotInitialized));
        assert!(overlay.set_renderer(MemoryRenderer::new()).is_err());
        assert!(overlay.detach().is_err());
        assert!(overlay.date().is_none());
        assert!(overlay.sun_position().is_none());
    }

    #[test]
    fn test_init_twice_fails() {
        let mut overlay = overlay();
        assert_eq!(
            overlay.init(MemoryRenderer::new(), OverlayConfig::default()),
            Err(Error::AlreadyInitialized)
        );
        assert_eq!(overlay.renderer().unwrap().creates(), 2);
    }

    #[test]
    fn test_init_rejects_bad_config() {
        let mut overlay: NightOverlay<MemoryRenderer, _> =
            NightOverlay::with_clock(FixedClock::new(solstice()));
        let config = OverlayConfig::default().with_night_angle(95.0);

        assert!(matches!(
            overlay.init(MemoryRenderer::new(), config),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(overlay.renderer().is_none());
        assert_eq!(overlay.refresh(), Err(Error::NotInitialized));
    }

    #[test]
    fn test_hidden_refresh_touches_nothing() {
        let mut overlay = overlay();
        overlay.hide().unwrap();
        let before = overlay.renderer().unwrap().geometry_updates();

        overlay.refresh().unwrap();
        overlay.set_date(solstice() + chrono::Duration::hours(6)).unwrap();

        assert_eq!(overlay.renderer().unwrap().geometry_updates(), before);
        assert!(!overlay.is_visible().unwrap());
    }

    #[test]
    fn test_show_refreshes_geometry() {
        let mut overlay = overlay();
        overlay.hide().unwrap();
        overlay.set_date(solstice() + chrono::Duration::hours(6)).unwrap();
        let stale = overlay.renderer().unwrap().region("night").unwrap().circle;

        overlay.show().unwrap();
        let renderer = overlay.renderer().unwrap();
        let fresh = renderer.region("night").unwrap().circle;

        assert!(overlay.is_visible().unwrap());
        assert!(renderer.region("night").unwrap().visible);
        assert_eq!(renderer.geometry_updates(), 2);
        // six hours of rotation moves the shadow 90° west
        let moved = stale.center().longitude() - fresh.center().longitude();
        assert!((crate::math::normalize_degrees_pm180(moved) - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_refresh_follows_the_clock() {
        let now = Cell::new(solstice());
        let mut overlay = NightOverlay::with_clock(|| now.get());
        overlay
            .init(MemoryRenderer::new(), OverlayConfig::default())
            .unwrap();
        let first = overlay.sun_position().unwrap();

        now.set(solstice() + chrono::Duration::hours(1));
        overlay.refresh().unwrap();
        let second = overlay.sun_position().unwrap();

        assert!((first.longitude() - second.longitude() - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_fixed_date_ignores_the_clock() {
        let now = Cell::new(solstice());
        let mut overlay = NightOverlay::with_clock(|| now.get());
        overlay
            .init(MemoryRenderer::new(), OverlayConfig::default())
            .unwrap();

        let fixed = Utc.with_ymd_and_hms(2023, 12, 22, 3, 27, 0).unwrap();
        overlay.set_date(fixed).unwrap();
        let pinned = overlay.sun_position().unwrap();
        assert!(pinned.latitude() < -23.0);

        now.set(solstice() + chrono::Duration::hours(5));
        overlay.refresh().unwrap();
        assert_eq!(overlay.sun_position(), Some(pinned));
        assert_eq!(overlay.date(), Some(fixed));

        overlay.set_date(None).unwrap();
        assert!(overlay.date().is_none());
        assert!(overlay.sun_position().unwrap().latitude() > 23.0);
    }

    #[test]
    fn test_set_date_from_unix_millis() {
        let mut overlay = overlay();
        overlay.set_date_from_unix_millis(1_687_359_420_000.0).unwrap();
        assert_eq!(overlay.date(), Some(solstice()));

        assert!(matches!(
            overlay.set_date_from_unix_millis(f64::NAN),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            overlay.set_date_from_unix_millis(1e300),
            Err(Error::InvalidInput { .. })
        ));
        assert_eq!(overlay.date(), Some(solstice()));
    }

    #[test]
    fn test_set_renderer_moves_regions() {
        let mut overlay = overlay();
        overlay.hide().unwrap();
        let geometry = overlay.region(ShadowKind::Night).unwrap();

        let old = overlay.set_renderer(MemoryRenderer::new()).unwrap();
        assert_eq!(old.regions().count(), 0);
        assert_eq!(old.removals(), 2);

        let renderer = overlay.renderer().unwrap();
        assert_eq!(renderer.creates(), 2);
        let night = renderer.region("night").unwrap();
        assert_eq!(night.circle, geometry);
        assert!(!night.visible);
        assert!(!overlay.is_visible().unwrap());
    }

    #[test]
    fn test_detach() {
        let mut overlay = overlay();
        overlay
            .set_date(Utc.with_ymd_and_hms(2023, 12, 22, 3, 27, 0).unwrap())
            .unwrap();
        let renderer = overlay.detach().unwrap();
        assert_eq!(renderer.regions().count(), 0);
        assert_eq!(overlay.is_visible(), Err(Error::NotInitialized));
        assert!(overlay.date().is_none());
        assert!(overlay.sun_position().is_none());

        // a new init computes for the clock, not the old fixed date
        overlay.init(renderer, OverlayConfig::default()).unwrap();
        assert!(overlay.is_visible().unwrap());
        assert_eq!(overlay.sun_position(), Some(noaa::sun_position(solstice())));
        assert!(overlay.sun_position().unwrap().latitude() > 23.0);
    }

    #[test]
    fn test_set_renderer_before_init_keeps_nothing() {
        let mut overlay: NightOverlay<MemoryRenderer, _> =
            NightOverlay::with_clock(FixedClock::new(solstice()));
        assert!(matches!(
            overlay.set_renderer(MemoryRenderer::new()),
            Err(Error::NotInitialized)
        ));
        assert!(overlay.renderer().is_none());
        assert!(overlay.sun_position().is_none());
    }

    #[test]
    fn test_set_renderer_keeps_regions_on_the_new_renderer_only() {
        let mut overlay = overlay();
        let old = overlay.set_renderer(MemoryRenderer::new()).unwrap();
        assert_eq!(old.creates(), 2);
        assert_eq!(old.removals(), 2);

        let renderer = overlay.renderer().unwrap();
        assert_eq!(renderer.removals(), 0);
        assert_eq!(renderer.regions().count(), 2);
        assert_eq!(overlay.sun_position(), Some(noaa::sun_position(solstice())));
    }

    #[test]
    fn test_config_validation() {
        assert!(OverlayConfig::default().validate().is_ok());
        assert!(OverlayConfig::default().with_color("  ").validate().is_err());
        assert!(OverlayConfig::default().with_opacity(-0.5).validate().is_err());
        assert!(OverlayConfig::default().with_twilight_angle(0.0).validate().is_err());
        assert!(OverlayConfig::default().with_night_angle(200.0).validate().is_err());
        assert!(
            OverlayConfig::default()
                .with_twilight_angle(96.0)
                .with_night_angle(90.0)
                .validate()
                .is_ok()
        );
    }
}
