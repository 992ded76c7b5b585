use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::RunConfig;
use crate::contacts;
use crate::runner;

#[allow(clippy::too_many_arguments)]
pub async fn handle_send(
    contacts_path: PathBuf,
    out: PathBuf,
    mode: String,
    browser: String,
    base_url: String,
    login_timeout: u64,
    chat_timeout: u64,
) -> Result<()> {
    let contacts = contacts::load_contacts(&contacts_path)?;

    if contacts.is_empty() {
        info!("No contacts to process");
        println!("[]");
        return Ok(());
    }

    let cfg = RunConfig {
        base_url,
        screenshot_dir: out,
        mode: mode.parse()?,
        browser: browser.parse()?,
        login_timeout: Duration::from_secs(login_timeout),
        chat_timeout: Duration::from_secs(chat_timeout),
        ..RunConfig::default()
    };

    std::fs::create_dir_all(&cfg.screenshot_dir).with_context(|| {
        format!(
            "Failed to create screenshot directory {}",
            cfg.screenshot_dir.display()
        )
    })?;

    let outcomes = runner::run(&cfg, &contacts).await?;

    let delivered = outcomes.iter().filter(|o| o.is_success()).count();
    info!("Delivered {}/{} contact(s)", delivered, outcomes.len());

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}
