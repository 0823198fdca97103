use anyhow::{bail, Context, Result};
use image::RgbaImage;
use tracing::{instrument, warn};
use xcap::Monitor;

use super::ScreenCapturer;

/// Captures the first monitor the platform reports. On macOS the terminal needs the Screen
/// Recording permission, otherwise frames come back empty.
pub struct MonitorCapturer;

impl MonitorCapturer {
    pub fn new() -> Result<Self> {
        let monitors = Monitor::all().context("Failed to enumerate monitors")?;
        if monitors.is_empty() {
            bail!("No monitors found");
        }
        if monitors.len() > 1 {
            warn!("Found {} monitors, only the first one is captured", monitors.len());
        }
        Ok(Self)
    }
}

impl ScreenCapturer for MonitorCapturer {
    #[instrument(skip(self))]
    fn capture(&mut self) -> Result<RgbaImage> {
        let monitors = Monitor::all().context("Failed to enumerate monitors")?;
        let Some(monitor) = monitors.first() else {
            bail!("No monitors found");
        };

        let image = monitor
            .capture_image()
            .context("Failed to capture monitor image")?;
        if image.width() == 0 || image.height() == 0 {
            bail!("Captured an empty screenshot. Is screen recording permitted?");
        }
        Ok(image)
    }
}
