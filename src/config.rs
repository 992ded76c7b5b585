use std::path::PathBuf;
use std::time::Duration;

use crate::delivery::DeliveryMode;
use crate::session::BrowserType;

/// Tunables for one delivery run.
///
/// Every wait below is single-shot: it fires at most once per step and there
/// is no retry-with-backoff anywhere. Timeouts are the only failure-detection
/// mechanism against the externally-controlled UI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base address of the messaging web application
    pub base_url: String,
    /// Output directory for screenshot artifacts
    pub screenshot_dir: PathBuf,
    /// Mechanism for getting the image into the composer
    pub mode: DeliveryMode,
    /// Browser to drive
    pub browser: BrowserType,
    /// Bound on the interactive QR login gate
    pub login_timeout: Duration,
    /// Bound on each page navigation
    pub navigation_timeout: Duration,
    /// Bound on the chat-loaded anchor appearing after the deep link
    pub chat_timeout: Duration,
    /// Bound on resolving a single UI target through its selector chain
    pub locator_timeout: Duration,
    /// Settle interval for the pasted image preview to render
    pub paste_settle: Duration,
    /// Settle interval after typing a caption
    pub caption_settle: Duration,
    /// Grace period after the commit key before the send marker is checked
    pub send_settle: Duration,
    /// Bound on the pending-send marker clearing
    pub send_timeout: Duration,
    /// Hold the session open this long after the last contact
    pub run_settle: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            base_url: "https://web.whatsapp.com".to_string(),
            screenshot_dir: PathBuf::from("screenshots"),
            mode: DeliveryMode::Auto,
            browser: BrowserType::Firefox,
            login_timeout: Duration::from_secs(60),
            navigation_timeout: Duration::from_secs(60),
            chat_timeout: Duration::from_secs(30),
            locator_timeout: Duration::from_secs(10),
            paste_settle: Duration::from_secs(3),
            caption_settle: Duration::from_secs(1),
            send_settle: Duration::from_secs(5),
            send_timeout: Duration::from_secs(15),
            run_settle: Duration::from_secs(5),
        }
    }
}
