//! Command-line health probe for camp-registration.
//!
//! Calls `GET /health` on a running instance and reports the result through
//! its exit status, for container `HEALTHCHECK` directives and scripts.
//!
//! # Usage
//!
//! ```bash
//! # Check the local instance
//! cargo run --bin healthcheck
//!
//! # Check another instance and print the raw report
//! cargo run --bin healthcheck -- --url http://camp.internal:3000 --json
//! ```
//!
//! # Exit Status
//!
//! - `0`: the service answered 200 (`healthy` or `degraded`)
//! - `1`: the service answered 503, any other status, or was unreachable
//!
//! # Environment Variables
//!
//! - `HEALTHCHECK_URL` (optional): base URL, same as `--url`

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use serde_json::Value;
use std::process::ExitCode;
use std::time::Duration;

/// Probe a running camp-registration instance.
#[derive(Parser)]
#[command(name = "healthcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the service
    #[arg(short, long, env = "HEALTHCHECK_URL", default_value = "http://127.0.0.1:3000")]
    url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    timeout: u64,

    /// Print the raw JSON report instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let endpoint = format!("{}/health", cli.url.trim_end_matches('/'));

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .context("Failed to build HTTP client")?;

    let response = match client.get(&endpoint).send().await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{} {}: {}", "✗".red(), endpoint, e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let http_status = response.status();
    let report: Value = response
        .json()
        .await
        .context("Health endpoint returned a non-JSON body")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    if http_status.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Prints one line per check, colored by status.
fn print_summary(report: &Value) {
    let overall = report["status"].as_str().unwrap_or("unknown");
    println!(
        "{} {} at {}",
        "Overall:".bold(),
        paint(overall),
        report["timestamp"].as_str().unwrap_or("-")
    );

    let Some(checks) = report["checks"].as_object() else {
        return;
    };

    for (name, check) in checks {
        let status = check["status"].as_str().unwrap_or("unknown");
        let millis = check["responseTimeMs"].as_u64().unwrap_or(0);
        let mut line = format!("  {:<10} {:<10} {:>5}ms", name, paint(status), millis);

        if let Some(message) = check["errorMessage"].as_str() {
            line.push_str(&format!("  {}", message.dimmed()));
        }
        println!("{}", line);

        if let Some(providers) = check["providers"].as_object() {
            for (provider, result) in providers {
                let status = result["status"].as_str().unwrap_or("unknown");
                let message = result["errorMessage"].as_str().unwrap_or("");
                println!("    {:<8} {} {}", provider, paint(status), message.dimmed());
            }
        }
    }
}

fn paint(status: &str) -> ColoredString {
    match status {
        "healthy" => status.green(),
        "degraded" => status.yellow(),
        _ => status.red(),
    }
}
