use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::types::Contact;

/// Load the contact table from a CSV file.
///
/// Expected headers: `name,whatsapp_number,url,caption` (caption optional).
/// A missing file or malformed row is fatal to the run; it is reported to
/// the operator before any browser session is opened.
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    if !path.exists() {
        anyhow::bail!("Contacts file not found: {}", path.display());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open contacts file: {}", path.display()))?;

    let mut contacts = Vec::new();
    for (row, record) in reader.deserialize().enumerate() {
        let mut contact: Contact = record
            .with_context(|| format!("Malformed row {} in contacts file", row + 1))?;

        // A blank caption cell means "no caption"
        if contact
            .caption
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            contact.caption = None;
        }

        contacts.push(contact);
    }

    info!(
        "Loaded {} contact(s) from {}",
        contacts.len(),
        path.display()
    );
    Ok(contacts)
}

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;
