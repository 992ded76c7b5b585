use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use crate::contacts;

/// Preflight the contact table without opening a browser: report each
/// contact's deep link, artifact name, and whether the number has any digits
/// at all (a digit-less number is guaranteed to fail at the chat stage).
pub async fn handle_validate(contacts_path: PathBuf, base_url: String) -> Result<()> {
    let contacts = contacts::load_contacts(&contacts_path)?;

    let report: Vec<_> = contacts
        .iter()
        .map(|contact| {
            json!({
                "name": contact.name,
                "chat_link": contact.chat_link(&base_url),
                "screenshot": contact.screenshot_file_name(),
                "has_caption": contact.caption.is_some(),
                "phone_ok": !contact.phone_digits().is_empty(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
