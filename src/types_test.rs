// Unit tests for the data model

use std::path::Path;

use pretty_assertions::assert_eq;

use super::*;

fn contact(name: &str, number: &str) -> Contact {
    Contact {
        name: name.to_string(),
        whatsapp_number: number.to_string(),
        url: "https://example.com".to_string(),
        caption: None,
    }
}

#[test]
fn test_phone_digits_strips_formatting() {
    assert_eq!(contact("A", "15551234567").phone_digits(), "15551234567");
    assert_eq!(contact("A", "+1 (555) 123-4567").phone_digits(), "15551234567");
    assert_eq!(contact("A", "no digits").phone_digits(), "");
}

#[test]
fn test_chat_link() {
    let c = contact("Alice", "15551234567");
    assert_eq!(
        c.chat_link("https://web.whatsapp.com"),
        "https://web.whatsapp.com/send?phone=15551234567"
    );
    // Trailing slash on the base must not double up
    assert_eq!(
        c.chat_link("https://web.whatsapp.com/"),
        "https://web.whatsapp.com/send?phone=15551234567"
    );
}

#[test]
fn test_screenshot_file_name_replaces_whitespace() {
    assert_eq!(contact("Alice", "1").screenshot_file_name(), "Alice.png");
    assert_eq!(
        contact("Alice Smith", "1").screenshot_file_name(),
        "Alice_Smith.png"
    );
    assert_eq!(
        contact("  Alice\tSmith ", "1").screenshot_file_name(),
        "Alice_Smith.png"
    );
}

#[test]
fn test_screenshot_file_name_drops_path_separators() {
    assert_eq!(
        contact("a/b\\c", "1").screenshot_file_name(),
        "abc.png"
    );
    // A name that sanitizes to nothing still yields a usable file name
    assert_eq!(contact("//", "1").screenshot_file_name(), "contact.png");
}

#[test]
fn test_screenshot_naming_is_idempotent() {
    let c = contact("Alice Smith", "1");
    let dir = Path::new("screenshots");
    // Same contact always maps to the same path, so re-runs overwrite
    assert_eq!(c.screenshot_path(dir), c.screenshot_path(dir));
    assert_eq!(
        c.screenshot_path(dir),
        Path::new("screenshots/Alice_Smith.png")
    );
}

#[test]
fn test_failure_stage_display() {
    assert_eq!(FailureStage::NavigationFailed.to_string(), "navigation-failed");
    assert_eq!(FailureStage::ChatNotFound.to_string(), "chat-not-found");
    assert_eq!(FailureStage::UploadFailed.to_string(), "upload-failed");
    assert_eq!(FailureStage::SendUnconfirmed.to_string(), "send-unconfirmed");
}

#[test]
fn test_outcome_serialization() {
    let ok = DeliveryOutcome::success("Alice");
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["contact"], "Alice");
    assert_eq!(json["status"], "success");

    let failed = DeliveryOutcome::failed("Bob", FailureStage::ChatNotFound, "timed out");
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["contact"], "Bob");
    assert_eq!(json["status"], "failed");
    assert_eq!(json["stage"], "chat-not-found");
    assert_eq!(json["reason"], "timed out");
}

#[test]
fn test_is_success() {
    assert!(DeliveryOutcome::success("Alice").is_success());
    assert!(
        !DeliveryOutcome::failed("Bob", FailureStage::UploadFailed, "rejected").is_success()
    );
}
