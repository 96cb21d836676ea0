//! The rendering backend an overlay draws through.
//!
//! The overlay never projects anything: it hands circles on the sphere to a
//! [`Renderer`] and lets the map library turn them into paths, polygons or
//! whatever it draws with.

use crate::ShadowRegion;
use alloc::string::String;
use alloc::vec::Vec;

/// Fill style of a shaded region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStyle {
    /// Fill color, in whatever notation the backend understands (e.g. `"#000"`).
    pub fill_color: String,
    /// Fill opacity, 0 (transparent) to 1 (opaque).
    pub opacity: f64,
}

/// A map or drawing surface that can hold named circular regions.
///
/// An overlay assumes it is the only user of the regions it creates.
pub trait Renderer {
    /// Identifies a region created by this renderer.
    type Handle: Clone;

    /// Creates a visible region with the given geometry and style.
    fn create_region(
        &mut self,
        name: &str,
        circle: &ShadowRegion,
        style: &RegionStyle,
    ) -> Self::Handle;

    /// Replaces the geometry of an existing region; its style is left alone.
    fn update_region_geometry(&mut self, handle: &Self::Handle, circle: &ShadowRegion);

    /// Shows or hides a region.
    fn set_region_visibility(&mut self, handle: &Self::Handle, visible: bool);

    /// Whether a region is currently shown.
    fn region_visibility(&self, handle: &Self::Handle) -> bool;

    /// Detaches a region from the surface for good.
    fn remove_region(&mut self, handle: &Self::Handle);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Handle = R::Handle;

    fn create_region(
        &mut self,
        name: &str,
        circle: &ShadowRegion,
        style: &RegionStyle,
    ) -> Self::Handle {
        (**self).create_region(name, circle, style)
    }

    fn update_region_geometry(&mut self, handle: &Self::Handle, circle: &ShadowRegion) {
        (**self).update_region_geometry(handle, circle);
    }

    fn set_region_visibility(&mut self, handle: &Self::Handle, visible: bool) {
        (**self).set_region_visibility(handle, visible);
    }

    fn region_visibility(&self, handle: &Self::Handle) -> bool {
        (**self).region_visibility(handle)
    }

    fn remove_region(&mut self, handle: &Self::Handle) {
        (**self).remove_region(handle);
    }
}

/// A region as held by [`MemoryRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRegion {
    /// Name given at creation.
    pub name: String,
    /// Current geometry.
    pub circle: ShadowRegion,
    /// Style given at creation.
    pub style: RegionStyle,
    /// Whether the region is shown.
    pub visible: bool,
}

/// Renderer that keeps regions in memory and counts the calls it receives.
///
/// Slots of removed regions are reused, so attaching and detaching overlays
/// repeatedly does not grow the renderer. A handle of a removed region may
/// therefore come to refer to a later region.
///
/// Useful headless (server-side tile rendering, snapshots) and as a test double.
///
/// # Example
/// ```
/// # use nite::{GeoPosition, ShadowRegion, render::{MemoryRenderer, RegionStyle, Renderer}};
/// let mut renderer = MemoryRenderer::new();
/// let circle = ShadowRegion::new(GeoPosition::new(0.0, 0.0).unwrap(), 90.0).unwrap();
/// let style = RegionStyle { fill_color: "#000".into(), opacity: 0.25 };
///
/// let handle = renderer.create_region("twilight", &circle, &style);
/// renderer.set_region_visibility(&handle, false);
///
/// assert!(!renderer.region_visibility(&handle));
/// assert_eq!(renderer.region("twilight").unwrap().circle, circle);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    regions: Vec<Option<MemoryRegion>>,
    creates: usize,
    geometry_updates: usize,
    visibility_changes: usize,
    removals: usize,
}

/// Handle into a [`MemoryRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryHandle(usize);

impl MemoryRenderer {
    /// Creates an empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a live region by name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&MemoryRegion> {
        self.regions().find(|region| region.name == name)
    }

    /// Iterates over live regions in creation order.
    pub fn regions(&self) -> impl Iterator<Item = &MemoryRegion> {
        self.regions.iter().flatten()
    }

    /// Number of `create_region` calls received.
    #[must_use]
    pub const fn creates(&self) -> usize {
        self.creates
    }

    /// Number of `update_region_geometry` calls received.
    #[must_use]
    pub const fn geometry_updates(&self) -> usize {
        self.geometry_updates
    }

    /// Number of `set_region_visibility` calls received.
    #[must_use]
    pub const fn visibility_changes(&self) -> usize {
        self.visibility_changes
    }

    /// Number of `remove_region` calls received.
    #[must_use]
    pub const fn removals(&self) -> usize {
        self.removals
    }

    fn slot(&mut self, handle: MemoryHandle) -> Option<&mut MemoryRegion> {
        self.regions.get_mut(handle.0).and_then(Option::as_mut)
    }
}

impl Renderer for MemoryRenderer {
    type Handle = MemoryHandle;

    fn create_region(
        &mut self,
        name: &str,
        circle: &ShadowRegion,
        style: &RegionStyle,
    ) -> MemoryHandle {
        self.creates += 1;
        let region = Some(MemoryRegion {
            name: name.into(),
            circle: *circle,
            style: style.clone(),
            visible: true,
        });
        // removed regions leave a free slot behind
        if let Some(index) = self.regions.iter().position(Option::is_none) {
            self.regions[index] = region;
            return MemoryHandle(index);
        }
        self.regions.push(region);
        MemoryHandle(self.regions.len() - 1)
    }

    fn update_region_geometry(&mut self, handle: &MemoryHandle, circle: &ShadowRegion) {
        self.geometry_updates += 1;
        if let Some(region) = self.slot(*handle) {
            region.circle = *circle;
        }
    }

    fn set_region_visibility(&mut self, handle: &MemoryHandle, visible: bool) {
        self.visibility_changes += 1;
        if let Some(region) = self.slot(*handle) {
            region.visible = visible;
        }
    }

    fn region_visibility(&self, handle: &MemoryHandle) -> bool {
        self.regions
            .get(handle.0)
            .and_then(Option::as_ref)
            .is_some_and(|region| region.visible)
    }

    fn remove_region(&mut self, handle: &MemoryHandle) {
        self.removals += 1;
        if let Some(slot) = self.regions.get_mut(handle.0) {
            *slot = None;
        }
    }
}
