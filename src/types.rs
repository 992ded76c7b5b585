use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One row of the contact table. Immutable once loaded; drives exactly one
/// delivery attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, also used to derive the screenshot file name
    pub name: String,
    /// Phone number; only its digits are used to build the chat deep link
    pub whatsapp_number: String,
    /// Page to capture for this contact
    pub url: String,
    /// Optional caption typed under the image
    #[serde(default)]
    pub caption: Option<String>,
}

impl Contact {
    /// Digits of the phone number, with any formatting characters stripped.
    pub fn phone_digits(&self) -> String {
        self.whatsapp_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    /// Direct-chat deep link for this contact.
    pub fn chat_link(&self, base_url: &str) -> String {
        format!(
            "{}/send?phone={}",
            base_url.trim_end_matches('/'),
            self.phone_digits()
        )
    }

    /// File name for this contact's screenshot artifact.
    ///
    /// Whitespace becomes underscores and path separators are dropped, so the
    /// same contact always maps to the same file and a re-run overwrites the
    /// prior artifact.
    pub fn screenshot_file_name(&self) -> String {
        let mut stem: String = self
            .name
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .filter(|c| !matches!(c, '/' | '\\'))
            .collect();
        if stem.is_empty() {
            stem.push_str("contact");
        }
        format!("{stem}.png")
    }

    /// Full path of the screenshot artifact under the output directory.
    pub fn screenshot_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.screenshot_file_name())
    }
}

/// Stage at which a per-contact delivery gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureStage {
    /// The target page or the chat deep link did not load
    NavigationFailed,
    /// The chat never presented a composer within the bounded wait
    ChatNotFound,
    /// The image could not be attached or the caption was rejected
    UploadFailed,
    /// The message was still marked as sending when the wait expired
    SendUnconfirmed,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureStage::NavigationFailed => "navigation-failed",
            FailureStage::ChatNotFound => "chat-not-found",
            FailureStage::UploadFailed => "upload-failed",
            FailureStage::SendUnconfirmed => "send-unconfirmed",
        };
        write!(f, "{}", s)
    }
}

/// Result of one contact's delivery attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum DeliveryStatus {
    /// Image (and caption, if any) was submitted into the chat
    Success,
    /// Delivery stopped at `stage`; the run continues with the next contact
    Failed { stage: FailureStage, reason: String },
}

/// Per-contact outcome, reported in input order. Outcomes carry no shared
/// state: one contact's failure never affects another's processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryOutcome {
    /// Display name of the contact this outcome belongs to
    pub contact: String,
    #[serde(flatten)]
    pub status: DeliveryStatus,
}

impl DeliveryOutcome {
    pub fn success(contact: &str) -> Self {
        DeliveryOutcome {
            contact: contact.to_string(),
            status: DeliveryStatus::Success,
        }
    }

    pub fn failed(contact: &str, stage: FailureStage, reason: impl Into<String>) -> Self {
        DeliveryOutcome {
            contact: contact.to_string(),
            status: DeliveryStatus::Failed {
                stage,
                reason: reason.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, DeliveryStatus::Success)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
