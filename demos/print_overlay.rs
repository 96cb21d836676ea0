//! Drives a night overlay against a renderer that prints what a map would draw.
//!
//! Run with `RUST_LOG=nite=debug cargo run --example print_overlay` to see the
//! controller's own events alongside the output.

use chrono::{DateTime, Utc};
use nite::{
    GeoPosition, NightOverlay, OverlayConfig, RegionStyle, Renderer, ShadowKind, ShadowRegion,
};
use tracing_subscriber::{EnvFilter, fmt};

/// Prints every draw call to stdout. Handles index into `names`.
#[derive(Default)]
struct PrintRenderer {
    label: &'static str,
    names: Vec<String>,
    visible: Vec<bool>,
}

impl PrintRenderer {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    fn describe(circle: &ShadowRegion) -> String {
        let ring = circle.ring(30.0);
        format!(
            "center {} radius {:.0}° ({:.0} km), {} vertices, first {:?}",
            circle.center(),
            circle.angular_radius(),
            circle.radius_meters() / 1000.0,
            ring.len(),
            ring.first().map(|[lon, lat]| (lon.round(), lat.round()))
        )
    }
}

impl Renderer for PrintRenderer {
    type Handle = usize;

    fn create_region(&mut self, name: &str, circle: &ShadowRegion, style: &RegionStyle) -> usize {
        println!(
            "[{}] create {name}: fill {} at {:.2}, {}",
            self.label,
            style.fill_color,
            style.opacity,
            Self::describe(circle)
        );
        self.names.push(name.to_owned());
        self.visible.push(true);
        self.names.len() - 1
    }

    fn update_region_geometry(&mut self, handle: &usize, circle: &ShadowRegion) {
        println!("[{}] move {}: {}", self.label, self.names[*handle], Self::describe(circle));
    }

    fn set_region_visibility(&mut self, handle: &usize, visible: bool) {
        println!(
            "[{}] {} {}",
            self.label,
            if visible { "show" } else { "hide" },
            self.names[*handle]
        );
        self.visible[*handle] = visible;
    }

    fn region_visibility(&self, handle: &usize) -> bool {
        self.visible[*handle]
    }

    fn remove_region(&mut self, handle: &usize) {
        println!("[{}] remove {}", self.label, self.names[*handle]);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut overlay = NightOverlay::new();
    overlay.init(
        PrintRenderer::new("main map"),
        OverlayConfig::default().with_color("#001133").with_opacity(0.3),
    )?;
    println!("sun overhead at {}", overlay.sun_position().ok_or("no sun")?);

    let solstice = "2024-12-21T09:21:00Z".parse::<DateTime<Utc>>()?;
    overlay.set_date(solstice)?;
    let sun = overlay.sun_position().ok_or("no sun")?;
    println!("on {solstice} the sun is overhead at {sun}");

    let night = overlay.region(ShadowKind::Night).ok_or("no night region")?;
    for (city, lon, lat) in [
        ("Tokyo", 139.69, 35.69),
        ("London", -0.13, 51.51),
        ("New York", -74.01, 40.71),
        ("Sydney", 151.21, -33.87),
    ] {
        let place = GeoPosition::new(lon, lat)?;
        let state = if night.contains(&place) { "night" } else { "not night" };
        println!("{city}: {state}");
    }

    overlay.hide()?;
    println!("visible after hide: {}", overlay.is_visible()?);
    // hidden: no geometry work
    overlay.refresh()?;
    overlay.show()?;

    overlay.set_renderer(PrintRenderer::new("minimap"))?;
    overlay.set_date_from_unix_millis(1_718_916_660_000.0)?;

    overlay.set_date(None)?;
    println!("back to live time, sun at {}", overlay.sun_position().ok_or("no sun")?);
    Ok(())
}
