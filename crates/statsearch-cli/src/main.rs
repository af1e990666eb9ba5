//! Statsearch CLI - run a search from the terminal.
//!
//! # Usage
//!
//! ```bash
//! statsearch "Statista"
//! statsearch "statista" --json
//! statsearch "statista" --endpoint http://localhost:8080/results.json --timeout 10
//!
//! # Reproduce the original failure behavior (loading never clears)
//! statsearch "statista" --legacy-failure
//! ```

mod config;
mod output;
mod search;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use search::SearchOutcome;

/// Statsearch command-line search.
///
/// Only queries containing "statista" (any case) are looked up; anything
/// else is rejected without a request.
#[derive(Parser)]
#[command(name = "statsearch", version, about)]
struct Cli {
    /// Search query
    query: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Results endpoint (default: $STATSEARCH_ENDPOINT or the built-in URL)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Keep loading on fetch failure instead of reporting it
    #[arg(long)]
    legacy_failure: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let Some(query) = cli.query.as_deref() else {
        eprintln!("No search query provided. Use --help for usage information.");
        std::process::exit(1);
    };

    let config = config::resolve(cli.endpoint.as_deref(), cli.timeout, cli.legacy_failure)?;

    match search::execute_search(query, &config).await? {
        SearchOutcome::Results(display) => {
            let output = if cli.json {
                output::format_json(query, &display)
            } else {
                output::format_human(query, &display)
            };
            println!("{}", output);
        }
        SearchOutcome::Rejected(message) | SearchOutcome::Failed(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        SearchOutcome::StillLoading => {
            println!("Loading...");
            eprintln!("The request did not complete. Run with --verbose for details.");
            std::process::exit(1);
        }
    }

    Ok(())
}
