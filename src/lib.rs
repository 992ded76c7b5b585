//! # snapcourier
#![allow(clippy::uninlined_format_args)]
//!
//! CLI tool that captures full-page screenshots of arbitrary URLs and
//! delivers them into WhatsApp Web chats through UI automation.
//!
//! No messaging-platform API is involved: the tool drives one visible
//! browser session over WebDriver and simulates human interaction with a
//! page whose markup is owned by a third party. A human completes the login
//! once per run by scanning the QR code in the browser window; after that,
//! every contact in the input table is processed in order, each one
//! independently — a failed contact is reported and skipped, never aborting
//! the run.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Start a WebDriver first
//! geckodriver --port 4444
//!
//! # Deliver screenshots to every contact in contacts.csv
//! snapcourier send --contacts contacts.csv --out screenshots
//!
//! # Force a delivery mechanism instead of the upload-then-paste fallback
//! snapcourier send --mode paste
//! snapcourier send --mode upload
//!
//! # Preflight the contact table without opening a browser
//! snapcourier validate --contacts contacts.csv
//! ```
//!
//! The contact table is CSV with a header row:
//!
//! ```csv
//! name,whatsapp_number,url,caption
//! Alice,15551234567,https://example.com,Hi
//! Bob,15557654321,https://example.org,
//! ```
//!
//! Per-contact outcomes are printed to stdout as JSON; logs go to stderr.
//!
//! ## Library Usage
//!
//! ```no_run
//! use snapcourier::{RunConfig, runner};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let cfg = RunConfig::default();
//! let contacts = snapcourier::contacts::load_contacts("contacts.csv".as_ref())?;
//! let outcomes = runner::run(&cfg, &contacts).await?;
//! for outcome in &outcomes {
//!     println!("{}: {:?}", outcome.contact, outcome.status);
//! }
//! # Ok(())
//! # }
//! ```

/// Clipboard image bridge for the paste delivery strategy
pub mod clipboard;

/// Run configuration: base URL, output directory, timeouts
pub mod config;

/// Contact table loading
pub mod contacts;

/// The two image delivery strategies and send confirmation
pub mod delivery;

/// Fatal-error taxonomy with exit codes
pub mod errors;

/// Ordered selector-chain resolution against the live page
pub mod locator;

/// Session controller: login gate and the per-contact loop
pub mod runner;

/// WebDriver session lifecycle, navigation, and screenshot capture
pub mod session;

/// Contact, outcome, and failure-stage types
pub mod types;

/// Per-contact delivery pipeline
pub mod workflow;

pub use config::RunConfig;
pub use delivery::DeliveryMode;
pub use locator::{ResolvedElement, SelectorChain};
pub use session::{BrowserType, Session};
pub use types::{Contact, DeliveryOutcome, DeliveryStatus, FailureStage};
