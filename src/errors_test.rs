// Unit tests for fatal-error classification and exit codes

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_input_source_missing_classification() {
    let err = anyhow::anyhow!("Contacts file not found: contacts.csv");
    let snap: SnapcourierError = err.into();
    assert!(matches!(snap, SnapcourierError::InputSourceMissing(_)));
    assert_eq!(snap.exit_code(), 2);
}

#[test]
fn test_login_timeout_classification() {
    let err = anyhow::anyhow!("Login was not completed within 60 seconds");
    let snap: SnapcourierError = err.into();
    assert!(matches!(snap, SnapcourierError::LoginTimeout(_)));
    assert_eq!(snap.exit_code(), 3);
}

#[test]
fn test_webdriver_classification() {
    let err = anyhow::anyhow!("Cannot connect to geckodriver WebDriver at http://localhost:4444");
    let snap: SnapcourierError = err.into();
    assert!(matches!(snap, SnapcourierError::WebDriverFailed(_)));
    assert_eq!(snap.exit_code(), 4);
}

#[test]
fn test_other_errors_exit_one() {
    let err = anyhow::anyhow!("something else entirely");
    let snap: SnapcourierError = err.into();
    assert!(matches!(snap, SnapcourierError::Other(_)));
    assert_eq!(snap.exit_code(), 1);
}

#[test]
fn test_display_keeps_message() {
    let err = anyhow::anyhow!("Login was not completed within 60 seconds");
    let snap: SnapcourierError = err.into();
    assert_eq!(snap.to_string(), "Login was not completed within 60 seconds");
}
