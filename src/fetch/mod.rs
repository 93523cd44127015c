//! Retrieval of the case dataset.
//!
//! [`fetch_records`] and [`load_records`] never fail: any transport, status
//! or decoding problem is logged and reported as an empty [`RecordSet`].

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::SourceConfig;
use crate::parser::parse_records;
use crate::record::RecordSet;

/// Performs a GET and returns the body of a successful response.
///
/// # Errors
///
/// Returns an error for an invalid URL, a transport failure, or a
/// non-success status.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;

    let status = resp.status();
    if !status.is_success() {
        anyhow::bail!("source returned status {status}");
    }

    Ok(resp.bytes().await?.to_vec())
}

/// Fetches and parses the records from the configured remote source.
#[tracing::instrument(skip(client, config), fields(source = %config.source, limit = config.limit))]
pub async fn fetch_records<C: HttpClient>(client: &C, config: &SourceConfig) -> RecordSet {
    match try_fetch(client, config).await {
        Ok(records) => {
            info!(records = records.len(), "Records fetched");
            records
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Fetch failed, continuing with no records");
            RecordSet::empty()
        }
    }
}

async fn try_fetch<C: HttpClient>(client: &C, config: &SourceConfig) -> Result<RecordSet> {
    let url = config.request_url()?;
    let fetch_start = std::time::Instant::now();
    let bytes = fetch_bytes(client, url.as_str())
        .await
        .context("request to data source failed")?;
    debug!(
        bytes = bytes.len(),
        elapsed_ms = elapsed_ms(fetch_start.elapsed()),
        "Body received, parsing"
    );
    parse_records(&bytes)
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Loads records from a URL or a local JSON file, depending on the source.
pub async fn load_records<C: HttpClient>(client: &C, config: &SourceConfig) -> RecordSet {
    if config.is_remote() {
        return fetch_records(client, config).await;
    }

    let path = config.source.as_str();
    let loaded = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {path}"))
        .and_then(|bytes| parse_records(&bytes));

    match loaded {
        Ok(records) => {
            info!(path, records = records.len(), "Records loaded from file");
            records
        }
        Err(e) => {
            warn!(path, error = %format!("{e:#}"), "Load failed, continuing with no records");
            RecordSet::empty()
        }
    }
}
