use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use arboard::{Clipboard, ImageData};
use tracing::debug;

/// Place a saved screenshot on the system clipboard as raw image data.
///
/// Clear-then-set against the single system clipboard. The clipboard is
/// process-wide shared state: another process writing to it between the two
/// calls is a race this crate does not guard against, so only one delivery
/// run may execute at a time.
pub fn copy_image(path: &Path) -> Result<()> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load screenshot {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();

    debug!("Copying {}x{} image to clipboard", width, height);

    let mut clipboard = Clipboard::new().context("Failed to open system clipboard")?;
    clipboard
        .clear()
        .context("Failed to clear system clipboard")?;
    clipboard
        .set_image(ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(image.into_raw()),
        })
        .context("Failed to write image to system clipboard")?;

    Ok(())
}
