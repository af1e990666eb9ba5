//! Configuration resolution for the CLI.
//!
//! The endpoint is taken from, in order:
//! 1. `--endpoint`
//! 2. `$STATSEARCH_ENDPOINT`
//! 3. The built-in default

use std::time::Duration;

use anyhow::{bail, Result};
use statsearch_core::{SearchConfig, WorkflowPolicy};

/// Environment variable overriding the results endpoint
pub const ENDPOINT_ENV: &str = "STATSEARCH_ENDPOINT";

/// Builds the search configuration from CLI flags and the environment.
pub fn resolve(
    endpoint_flag: Option<&str>,
    timeout_secs: Option<u64>,
    legacy_failure: bool,
) -> Result<SearchConfig> {
    let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
    build(endpoint_flag, env_endpoint.as_deref(), timeout_secs, legacy_failure)
}

fn build(
    endpoint_flag: Option<&str>,
    env_endpoint: Option<&str>,
    timeout_secs: Option<u64>,
    legacy_failure: bool,
) -> Result<SearchConfig> {
    let mut config = SearchConfig::default();

    if let Some(endpoint) = endpoint_flag.or(env_endpoint).filter(|e| !e.trim().is_empty()) {
        config = config.with_endpoint(endpoint);
    }

    match timeout_secs {
        Some(0) => bail!("--timeout must be at least 1 second"),
        Some(secs) => config = config.with_timeout(Duration::from_secs(secs)),
        None => {}
    }

    if legacy_failure {
        config = config.with_policy(WorkflowPolicy {
            on_fetch_failure: statsearch_core::FetchFailurePolicy::KeepLoading,
            ..WorkflowPolicy::default()
        });
    }

    Ok(config)
}
