//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! vk-links https://example.com/very/long/path
//! vk-links https://vk.cc/abc123
//! ```
//!
//! # Environment Variables
//!
//! - `VK_ACCESS_TOKEN` (required): VK API access token
//!
//! A `.env` file next to the executable is read first, then one in the current
//! directory. Variables already set in the environment are never overridden.
//!
//! # Exit Codes
//!
//! - `0` - Success
//! - `2` - Invalid arguments
//! - `3` - Configuration error
//! - `4` - Request error
//! - `5` - VK returned an error

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use vk_links::app;
use vk_links::config::{self, Config};
use vk_links::infrastructure::vk::HttpTransport;
use vk_links::telemetry;
use vk_links::AppError;

/// VK link shortener and click counter.
#[derive(Parser)]
#[command(name = "vk-links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to process: shortened, or click-counted if it is a vk.cc link
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    load_dotenv();

    match app::bootstrap(&cli.url, load_config, HttpTransport::from_config).await {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} {}", e.prefix().red().bold(), e);
            e.into()
        }
    }
}

fn load_config() -> Result<Config, AppError> {
    let config = config::load_from_env()?;
    telemetry::init(&config);
    config.print_summary();
    Ok(config)
}

/// Loads `.env` from the executable's directory, then from the working directory.
fn load_dotenv() {
    if let Some(path) = exe_dir().map(|dir| dir.join(".env")) {
        dotenvy::from_path(path).ok();
    }
    dotenvy::dotenv().ok();
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
}
