use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::{debug, info};

/// Window geometry the session starts in and returns to after a capture.
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 900;

/// Some drivers refuse absurd window heights; cap the full-page grow.
const MAX_CAPTURE_HEIGHT: u32 = 10_000;

/// The one browser session for a whole run.
///
/// Always launched with a visible window: the login gate requires a human to
/// scan a QR code, so there is no headless mode here. Created once,
/// authenticated once, reused across every contact, torn down once.
pub struct Session {
    pub(crate) client: Client,
}

/// Supported browser types
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BrowserType {
    /// Mozilla Firefox
    Firefox,
    /// Google Chrome/Chromium
    Chrome,
}

impl std::str::FromStr for BrowserType {
    type Err = anyhow::Error;

    /// Parse browser type from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "firefox" => Ok(BrowserType::Firefox),
            "chrome" | "chromium" => Ok(BrowserType::Chrome),
            _ => anyhow::bail!("Unsupported browser: {}", s),
        }
    }
}

impl BrowserType {
    /// Get the WebDriver URL for this browser type
    pub fn webdriver_url(&self) -> String {
        match self {
            BrowserType::Firefox => "http://localhost:4444".to_string(),
            BrowserType::Chrome => "http://localhost:9515".to_string(),
        }
    }
}

impl Session {
    /// Connect to the WebDriver and open the visible browser window.
    pub async fn new(browser_type: BrowserType) -> Result<Self> {
        info!("Connecting to {:?} WebDriver", browser_type);

        let webdriver_url = browser_type.webdriver_url();

        if !Self::is_webdriver_running(&webdriver_url).await {
            let driver_name = match browser_type {
                BrowserType::Firefox => "geckodriver",
                BrowserType::Chrome => "chromedriver",
            };

            anyhow::bail!(
                "Cannot connect to {} WebDriver at {}.\n\
                Please ensure {} is running:\n\
                  For Firefox: geckodriver --port 4444\n\
                  For Chrome: chromedriver --port 9515\n\n\
                Install instructions:\n\
                  macOS: brew install {}\n\
                  Linux: Download from https://github.com/mozilla/geckodriver/releases\n\
                  Windows: Download and add to PATH",
                driver_name,
                webdriver_url,
                driver_name,
                driver_name
            );
        }

        let mut caps = serde_json::Map::new();

        // No --headless in either branch: the QR scan needs a real window
        match &browser_type {
            BrowserType::Firefox => {
                let mut firefox_opts = serde_json::Map::new();
                let args = vec![
                    format!("--width={}", WINDOW_WIDTH),
                    format!("--height={}", WINDOW_HEIGHT),
                ];
                firefox_opts.insert("args".to_string(), json!(args));
                caps.insert("moz:firefoxOptions".to_string(), json!(firefox_opts));
            }
            BrowserType::Chrome => {
                let mut chrome_opts = serde_json::Map::new();
                let args = vec![
                    "--no-sandbox".to_string(),
                    format!("--window-size={},{}", WINDOW_WIDTH, WINDOW_HEIGHT),
                ];
                chrome_opts.insert("args".to_string(), json!(args));
                caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));
            }
        }

        debug!("Connecting to WebDriver at {}", webdriver_url);

        let client = ClientBuilder::rustls()
            .capabilities(caps)
            .connect(&webdriver_url)
            .await
            .context("Failed to connect to WebDriver")?;

        Ok(Session { client })
    }

    async fn is_webdriver_running(url: &str) -> bool {
        // Try to connect to the WebDriver status endpoint
        let status_url = format!("{}/status", url);

        match reqwest::get(&status_url).await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Navigate with a bounded wait, then poll for document readiness.
    pub async fn goto(&self, url: &str, timeout: Duration) -> Result<()> {
        info!("Navigating to {}", url);

        tokio::time::timeout(timeout, self.client.goto(url))
            .await
            .map_err(|_| {
                anyhow::anyhow!("Navigation to {} timed out after {:?}", url, timeout)
            })?
            .with_context(|| format!("Navigation to {} failed", url))?;

        let wait_script = r#"
            return document.readyState === 'complete';
        "#;

        // Max 2 seconds; single-page apps keep loading past this anyway
        for _ in 0..20 {
            match self.client.execute(wait_script, vec![]).await {
                Ok(val) if val.as_bool().unwrap_or(false) => {
                    break;
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            }
        }

        Ok(())
    }

    /// Capture a full-page screenshot of the current page into `path`.
    ///
    /// The window is grown to the document height so a single viewport
    /// capture covers the page, then restored so the visible session stays
    /// usable for the operator.
    pub async fn capture_full_page(&self, path: &Path) -> Result<()> {
        let measure_script = r#"
            return {
                width: Math.max(document.documentElement.scrollWidth, window.innerWidth),
                height: Math.max(document.documentElement.scrollHeight, window.innerHeight)
            };
        "#;

        if let Ok(value) = self.client.execute(measure_script, vec![]).await {
            let width = value.get("width").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
            let height = value.get("height").and_then(|v| v.as_u64()).unwrap_or(0) as u32;

            if width > 0 && height > WINDOW_HEIGHT {
                // Best-effort: some drivers refuse resize requests
                if let Err(e) = self
                    .client
                    .set_window_size(width.max(WINDOW_WIDTH), height.min(MAX_CAPTURE_HEIGHT))
                    .await
                {
                    debug!("Could not grow window for full-page capture: {}", e);
                }
            }
        }

        let png = self
            .client
            .screenshot()
            .await
            .context("Failed to capture screenshot")?;

        std::fs::write(path, &png)
            .with_context(|| format!("Failed to write screenshot to {}", path.display()))?;

        if let Err(e) = self
            .client
            .set_window_size(WINDOW_WIDTH, WINDOW_HEIGHT)
            .await
        {
            debug!("Could not restore window size: {}", e);
        }

        info!("Captured {} ({} bytes)", path.display(), png.len());
        Ok(())
    }

    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
