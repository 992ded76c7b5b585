use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use fantoccini::key::Key;
use tracing::{debug, info};

use crate::clipboard;
use crate::config::RunConfig;
use crate::locator::{self, anchors};
use crate::session::Session;

const CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Mechanism for getting the screenshot into the chat composer.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DeliveryMode {
    /// Clipboard bridge plus a keyboard paste chord
    Paste,
    /// Direct file injection into the hidden file input
    Upload,
    /// Try upload first, fall back to paste
    Auto,
}

impl std::str::FromStr for DeliveryMode {
    type Err = anyhow::Error;

    /// Parse delivery mode from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "paste" => Ok(DeliveryMode::Paste),
            "upload" => Ok(DeliveryMode::Upload),
            "auto" => Ok(DeliveryMode::Auto),
            _ => anyhow::bail!("Unsupported delivery mode: {}", s),
        }
    }
}

/// Get the screenshot (and caption, if any) into the open chat's composer.
///
/// Every failure in here is recoverable at the current contact; callers map
/// it to `FailureStage::UploadFailed` and move on.
pub async fn deliver_image(
    session: &Session,
    cfg: &RunConfig,
    artifact: &Path,
    caption: Option<&str>,
) -> Result<()> {
    match cfg.mode {
        DeliveryMode::Paste => paste_image(session, cfg, artifact, caption).await,
        DeliveryMode::Upload => upload_image(session, cfg, artifact, caption).await,
        DeliveryMode::Auto => match upload_image(session, cfg, artifact, caption).await {
            Ok(()) => Ok(()),
            Err(e) => {
                info!("Upload attach failed ({:#}); falling back to clipboard paste", e);
                paste_image(session, cfg, artifact, caption).await
            }
        },
    }
}

/// Paste variant: clipboard bridge, focus the composer, Ctrl+V.
async fn paste_image(
    session: &Session,
    cfg: &RunConfig,
    artifact: &Path,
    caption: Option<&str>,
) -> Result<()> {
    clipboard::copy_image(artifact)?;

    let composer = locator::resolve(session, &anchors::composer(), cfg.locator_timeout)
        .await
        .context("Message composer not found")?;
    composer
        .element
        .click()
        .await
        .context("Could not focus the message composer")?;

    debug!("Pasting image into composer");
    composer
        .element
        .send_keys(&paste_chord())
        .await
        .context("Paste keystroke was rejected")?;

    // The preview has no reliable completion event. Watch for a preview
    // element; if none surfaces, the elapsed settle interval is the fallback.
    if locator::resolve(session, &anchors::media_preview(), cfg.paste_settle)
        .await
        .is_none()
    {
        debug!("No preview element observed after paste; continuing on settle interval");
    }

    if let Some(caption) = caption {
        // The pasted preview keeps keyboard focus; type straight into it
        debug!("Typing caption into focused element");
        let active = session
            .client
            .active_element()
            .await
            .context("No focused element to type the caption into")?;
        active
            .send_keys(caption)
            .await
            .context("Caption input was rejected")?;
        tokio::time::sleep(cfg.caption_settle).await;
    }

    Ok(())
}

/// Upload variant: click the attach control, then feed the hidden file input
/// directly so no OS file-picker dialog ever opens.
async fn upload_image(
    session: &Session,
    cfg: &RunConfig,
    artifact: &Path,
    caption: Option<&str>,
) -> Result<()> {
    let attach = locator::resolve(session, &anchors::attach_control(), cfg.locator_timeout)
        .await
        .context("Attach control not found")?;
    debug!("Attach control bound via {}", attach.selector);
    attach
        .element
        .click()
        .await
        .context("Could not click the attach control")?;

    let input = locator::resolve(session, &anchors::media_input(), cfg.locator_timeout)
        .await
        .context("Hidden file input did not materialize")?;

    let path = artifact
        .to_str()
        .context("Screenshot path is not valid UTF-8")?;
    input
        .element
        .send_keys(path)
        .await
        .context("File input rejected the screenshot path")?;

    // The preview dialog is the only evidence the injection took; without it
    // the commit key would land in the stale composer and send nothing
    let preview = locator::resolve(session, &anchors::media_preview(), cfg.locator_timeout)
        .await
        .context("Media preview did not appear after file injection")?;
    debug!("Media preview bound via {}", preview.selector);

    if let Some(caption) = caption {
        match locator::resolve(session, &anchors::caption_field(), cfg.locator_timeout).await {
            Some(field) => {
                debug!("Caption field bound via {}", field.selector);
                field
                    .element
                    .click()
                    .await
                    .context("Could not focus the caption field")?;
                field
                    .element
                    .send_keys(caption)
                    .await
                    .context("Caption input was rejected")?;
            }
            None => {
                // The preview sometimes focuses its caption box without a
                // label we know; type into whatever holds focus
                debug!("No labeled caption field; typing into focused element");
                let active = session
                    .client
                    .active_element()
                    .await
                    .context("No focused element to type the caption into")?;
                active
                    .send_keys(caption)
                    .await
                    .context("Caption input was rejected")?;
            }
        }
        tokio::time::sleep(cfg.caption_settle).await;
    }

    Ok(())
}

/// Press the commit key from the focused element and wait for the send to be
/// acknowledged.
///
/// After a fixed grace period the pending-send clock marker is polled until
/// it clears. If the marker cannot be queried at all, the grace period
/// already spent is the fallback, matching the page offering no signal.
pub async fn submit_and_confirm(session: &Session, cfg: &RunConfig) -> Result<()> {
    let active = session
        .client
        .active_element()
        .await
        .context("No focused element to submit from")?;
    info!("Submitting message");
    active
        .send_keys(&enter_key())
        .await
        .context("Commit keystroke was rejected")?;

    // Let the outgoing bubble render before its pending marker means anything
    tokio::time::sleep(cfg.send_settle).await;

    let deadline = Instant::now() + cfg.send_timeout;
    loop {
        // Non-waiting chain lookup: absence of the marker means the send
        // was acknowledged (or the page offers no signal at all)
        match locator::resolve(session, &anchors::pending_send(), Duration::ZERO).await {
            None => return Ok(()),
            Some(pending) => debug!("Message still pending ({})", pending.selector),
        }

        if Instant::now() >= deadline {
            anyhow::bail!(
                "Message still marked as sending after {:?}",
                cfg.send_timeout
            );
        }
        tokio::time::sleep(CONFIRM_POLL_INTERVAL).await;
    }
}

/// Ctrl+V with an explicit trailing Control to release the modifier.
pub(crate) fn paste_chord() -> String {
    let ctrl = char::from(Key::Control);
    format!("{ctrl}v{ctrl}")
}

pub(crate) fn enter_key() -> String {
    char::from(Key::Enter).to_string()
}

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;
