//! Screen grabbing. [ScreenCapturer] is the seam between the tracker and the platform,
//! [GenericCapturer] picks whichever backend was compiled in and [capture_screenshot] turns a
//! grabbed frame into a PNG on disk.

#[cfg(feature = "screen")]
pub mod monitor;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use tracing::{debug, instrument};

use crate::utils::{clock::Clock, time::file_timestamp};

/// Contract every capture backend must implement.
#[cfg_attr(test, mockall::automock)]
pub trait ScreenCapturer {
    /// Grabs the whole display.
    fn capture(&mut self) -> Result<RgbaImage>;
}

/// Serves as a cross-compatible [ScreenCapturer] implementation.
pub struct GenericCapturer {
    inner: Box<dyn ScreenCapturer>,
}

impl GenericCapturer {
    pub fn new() -> Result<Self> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "screen")] {
                Ok(Self {
                    inner: Box::new(monitor::MonitorCapturer::new()?),
                })
            } else {
                anyhow::bail!("No capture backend was compiled in. Rebuild with `--features screen`")
            }
        }
    }
}

impl ScreenCapturer for GenericCapturer {
    fn capture(&mut self) -> Result<RgbaImage> {
        self.inner.capture()
    }
}

/// Grabs the screen and stores it as `<dir>/<timestamp>.png`. Returns the written path.
#[instrument(skip(capturer, clock))]
pub fn capture_screenshot(
    dir: &Path,
    capturer: &mut dyn ScreenCapturer,
    clock: &dyn Clock,
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.png", file_timestamp(&clock.time())));
    let image = capturer.capture().context("Failed to capture the screen")?;
    debug!("Captured {}x{} frame", image.width(), image.height());

    image
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("Failed to save screenshot to {path:?}"))?;

    println!("[+] Screenshot saved: {}", path.display());
    Ok(path)
}
