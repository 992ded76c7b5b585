use anyhow::Result;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::locator::{self, anchors};
use crate::session::Session;
use crate::types::{Contact, DeliveryOutcome, DeliveryStatus};
use crate::workflow;

/// Drive one browser session over the whole contact list.
///
/// The session is created once, authenticated once through the interactive
/// login gate, reused for every contact in input order, and torn down once.
/// Only a login-gate timeout (or failing to open the browser at all) aborts
/// the run; per-contact failures are recorded and skipped.
pub async fn run(cfg: &RunConfig, contacts: &[Contact]) -> Result<Vec<DeliveryOutcome>> {
    let session = Session::new(cfg.browser).await?;

    if let Err(e) = login_gate(&session, cfg).await {
        let _ = session.close().await;
        return Err(e);
    }

    let session_ref = &session;
    let outcomes = collect_outcomes(contacts, |contact| async move {
        workflow::deliver(session_ref, cfg, &contact).await
    })
    .await;

    // Coarse safety margin for in-flight uploads, not a completion signal
    info!(
        "Holding session open {:?} before teardown",
        cfg.run_settle
    );
    tokio::time::sleep(cfg.run_settle).await;
    session.close().await?;

    Ok(outcomes)
}

/// Block until a post-authentication anchor appears, or give up.
///
/// The login requires a human to scan the QR code in the visible window, so
/// a timeout here is never retried: the human action did not happen.
async fn login_gate(session: &Session, cfg: &RunConfig) -> Result<()> {
    session.goto(&cfg.base_url, cfg.navigation_timeout).await?;

    println!("Scan the QR code in the browser window to log in.");
    info!(
        "Waiting up to {:?} for the login gate",
        cfg.login_timeout
    );

    match locator::resolve(session, &anchors::logged_in(), cfg.login_timeout).await {
        Some(anchor) => {
            info!("Login confirmed via {}", anchor.selector);
            Ok(())
        }
        None => anyhow::bail!(
            "Login was not completed within {} seconds",
            cfg.login_timeout.as_secs()
        ),
    }
}

/// Sequential per-contact loop: exactly one delivery invocation per contact,
/// outcomes in input order, and no failure stops the iteration.
///
/// Generic over the delivery future so the ordering and isolation guarantees
/// are testable without a browser.
pub async fn collect_outcomes<F, Fut>(contacts: &[Contact], mut deliver_one: F) -> Vec<DeliveryOutcome>
where
    F: FnMut(Contact) -> Fut,
    Fut: Future<Output = DeliveryOutcome>,
{
    let total = contacts.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, contact) in contacts.iter().enumerate() {
        info!("Processing contact {}/{}: {}", i + 1, total, contact.name);
        let outcome = deliver_one(contact.clone()).await;
        if let DeliveryStatus::Failed { stage, reason } = &outcome.status {
            warn!("Skipping {}: {} ({})", contact.name, stage, reason);
        }
        outcomes.push(outcome);
    }

    outcomes
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
