#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clipboard;
mod commands;
mod config;
mod contacts;
mod delivery;
mod errors;
mod locator;
mod runner;
mod session;
mod types;
mod workflow;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const _EXIT_COMMAND_ERROR: i32 = 1;
const _EXIT_INPUT_SOURCE_MISSING: i32 = 2;
const _EXIT_LOGIN_TIMEOUT: i32 = 3;
const _EXIT_WEBDRIVER_FAILED: i32 = 4;

#[derive(Parser)]
#[command(name = "snapcourier")]
#[command(about = "Screenshot delivery to WhatsApp Web chats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture each contact's page and deliver the screenshot to their chat
    Send {
        /// CSV file with name,whatsapp_number,url,caption columns
        #[arg(short, long, default_value = "contacts.csv")]
        contacts: PathBuf,

        /// Directory for captured screenshots (created if absent)
        #[arg(short, long, default_value = "screenshots")]
        out: PathBuf,

        /// Image delivery mechanism (paste, upload, or auto)
        #[arg(short, long, default_value = "auto")]
        mode: String,

        /// Browser to drive (always visible; the QR login needs a window)
        #[arg(short, long, default_value = "firefox")]
        browser: String,

        /// Base address of WhatsApp Web
        #[arg(long, default_value = "https://web.whatsapp.com")]
        base_url: String,

        /// Seconds to wait for the QR login to complete
        #[arg(long, default_value = "60")]
        login_timeout: u64,

        /// Seconds to wait for a contact's chat to load
        #[arg(long, default_value = "30")]
        chat_timeout: u64,
    },

    /// Check the contact table without opening a browser
    Validate {
        /// CSV file with name,whatsapp_number,url,caption columns
        #[arg(short, long, default_value = "contacts.csv")]
        contacts: PathBuf,

        /// Base address used to build the reported deep links
        #[arg(long, default_value = "https://web.whatsapp.com")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() {
    let result = run().await;

    // Handle exit codes based on error type
    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            // Convert to our error type to get proper exit code
            let snap_err: errors::SnapcourierError = err.into();

            // Output JSON error to stdout for programmatic consumption
            let error_json = json!({
                "error": true,
                "message": snap_err.to_string(),
                "exit_code": snap_err.exit_code()
            });
            println!(
                "{}",
                serde_json::to_string(&error_json).unwrap_or_else(|_| "{}".to_string())
            );

            // Also log to stderr for human reading
            eprintln!("Error: {}", snap_err);
            std::process::exit(snap_err.exit_code());
        }
    }
}

async fn run() -> Result<()> {
    // Initialize tracing to stderr (so JSON output to stdout remains clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snapcourier=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // Output logs to stderr
                .with_target(false), // Don't show target module in logs
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Send {
            contacts,
            out,
            mode,
            browser,
            base_url,
            login_timeout,
            chat_timeout,
        } => {
            commands::send::handle_send(
                contacts,
                out,
                mode,
                browser,
                base_url,
                login_timeout,
                chat_timeout,
            )
            .await?
        }

        Commands::Validate { contacts, base_url } => {
            commands::validate::handle_validate(contacts, base_url).await?
        }
    }

    Ok(())
}
