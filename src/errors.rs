use std::fmt;

/// Custom error type that includes exit codes.
///
/// Only run-fatal conditions live here. Per-contact failures are downgraded
/// to `DeliveryStatus::Failed` inside the workflow's fault boundary and never
/// reach this type.
#[derive(Debug)]
pub enum SnapcourierError {
    /// Contact table missing or unreadable (exit code 2)
    InputSourceMissing(String),
    /// Login gate not passed within the bounded wait (exit code 3)
    LoginTimeout(String),
    /// WebDriver connection failed (exit code 4)
    WebDriverFailed(String),
    /// Generic error (exit code 1)
    Other(anyhow::Error),
}

impl SnapcourierError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SnapcourierError::InputSourceMissing(_) => 2,
            SnapcourierError::LoginTimeout(_) => 3,
            SnapcourierError::WebDriverFailed(_) => 4,
            SnapcourierError::Other(_) => 1,
        }
    }
}

impl fmt::Display for SnapcourierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapcourierError::InputSourceMissing(msg) => {
                write!(f, "{}", msg)
            }
            SnapcourierError::LoginTimeout(msg) => {
                write!(f, "{}", msg)
            }
            SnapcourierError::WebDriverFailed(msg) => {
                write!(f, "WebDriver connection failed: {}", msg)
            }
            SnapcourierError::Other(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SnapcourierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapcourierError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for SnapcourierError {
    fn from(err: anyhow::Error) -> Self {
        // Classify from the error message so call sites can stay on anyhow
        let msg = err.to_string();

        if msg.contains("Contacts file not found") || msg.contains("contacts file") {
            SnapcourierError::InputSourceMissing(msg)
        } else if msg.contains("Login was not completed") {
            SnapcourierError::LoginTimeout(msg)
        } else if msg.contains("WebDriver")
            || msg.contains("geckodriver")
            || msg.contains("chromedriver")
        {
            SnapcourierError::WebDriverFailed(msg)
        } else {
            SnapcourierError::Other(err)
        }
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;
