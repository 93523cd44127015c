//! Output of summary payloads.
//!
//! Supports debug logging, JSON to any writer, and JSON files.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, info};

use crate::summary::SummaryPayload;

/// Logs the payload using Rust's debug pretty-print format.
pub fn print_pretty(payload: &SummaryPayload) {
    debug!("{:#?}", payload);
}

/// Logs the headline numbers of a payload.
pub fn log_headline(payload: &SummaryPayload) {
    info!(
        total_cases = payload.total_cases,
        total_deaths = payload.total_deaths,
        cities = payload.available_cities.len(),
        departments = payload.available_departments.len(),
        "Summary computed"
    );
}

/// Serializes the payload as JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, payload: &SummaryPayload, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, payload)?;
    } else {
        serde_json::to_writer(&mut writer, payload)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the payload as JSON to `path`, replacing any existing file.
pub fn write_json_file(path: &str, payload: &SummaryPayload, pretty: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    write_json(BufWriter::new(file), payload, pretty)?;
    debug!(path, "Summary written");
    Ok(())
}
