use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::delivery;
use crate::locator::{self, anchors};
use crate::session::Session;
use crate::types::{Contact, DeliveryOutcome, FailureStage};

/// Error inside the per-contact fault boundary, tagged with the stage the
/// pipeline was in when it happened.
struct StageError {
    stage: FailureStage,
    reason: String,
}

impl StageError {
    fn new(stage: FailureStage, reason: impl Into<String>) -> Self {
        StageError {
            stage,
            reason: reason.into(),
        }
    }

    /// Adapter for `map_err`: tag an error with the current stage.
    fn at(stage: FailureStage) -> impl FnOnce(anyhow::Error) -> StageError {
        move |err| StageError {
            stage,
            reason: format!("{err:#}"),
        }
    }
}

/// Run the full delivery pipeline for one contact.
///
/// This is the single fault boundary of the run: whatever goes wrong inside
/// is downgraded to a `Failed` outcome so the caller's loop can continue with
/// the next contact.
pub async fn deliver(session: &Session, cfg: &RunConfig, contact: &Contact) -> DeliveryOutcome {
    match run_pipeline(session, cfg, contact).await {
        Ok(()) => {
            info!("Delivered to {}", contact.name);
            DeliveryOutcome::success(&contact.name)
        }
        Err(e) => {
            warn!(
                "Delivery to {} failed at {}: {}",
                contact.name, e.stage, e.reason
            );
            DeliveryOutcome::failed(&contact.name, e.stage, e.reason)
        }
    }
}

async fn run_pipeline(
    session: &Session,
    cfg: &RunConfig,
    contact: &Contact,
) -> Result<(), StageError> {
    // Target page and screenshot artifact
    session
        .goto(&contact.url, cfg.navigation_timeout)
        .await
        .map_err(StageError::at(FailureStage::NavigationFailed))?;

    let artifact = contact.screenshot_path(&cfg.screenshot_dir);
    session
        .capture_full_page(&artifact)
        .await
        .map_err(StageError::at(FailureStage::NavigationFailed))?;

    // A number with no digits can never resolve to a chat; skip the
    // deep-link timeout and fail right away
    if contact.phone_digits().is_empty() {
        return Err(StageError::new(
            FailureStage::ChatNotFound,
            format!("No digits in phone number {:?}", contact.whatsapp_number),
        ));
    }

    // Open the chat through the deep link
    session
        .goto(&contact.chat_link(&cfg.base_url), cfg.navigation_timeout)
        .await
        .map_err(StageError::at(FailureStage::NavigationFailed))?;

    let anchor = locator::resolve(session, &anchors::chat_loaded(), cfg.chat_timeout)
        .await
        .ok_or_else(|| {
            StageError::at(FailureStage::ChatNotFound)(anyhow!(
                "Chat did not load within {:?} (invalid number, blocked popup, or UI not rendered)",
                cfg.chat_timeout
            ))
        })?;
    info!("Chat open for {} via {}", contact.name, anchor.selector);

    // Focus the composer; best-effort, the strategies re-focus as needed
    if let Err(e) = anchor.element.click().await {
        debug!("Could not focus chat anchor for {}: {}", contact.name, e);
    }

    delivery::deliver_image(session, cfg, &artifact, contact.caption.as_deref())
        .await
        .map_err(StageError::at(FailureStage::UploadFailed))?;

    delivery::submit_and_confirm(session, cfg)
        .await
        .map_err(StageError::at(FailureStage::SendUnconfirmed))?;

    Ok(())
}
