//! JSON parser for the case dataset.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::record::{Field, Record, RecordSet};

/// Decodes a JSON array of case objects into a [`RecordSet`].
///
/// Column names are matched case-insensitively against [`Field`]; unknown
/// columns are dropped. Strings are kept verbatim, numbers and booleans keep
/// their textual form, and a `null` value counts as absent. A known column
/// is still part of the set's columns when all of its values are `null`.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or the top-level value is not
/// an array.
pub fn parse_records(bytes: &[u8]) -> Result<RecordSet> {
    let body: Value = serde_json::from_slice(bytes).context("response body is not valid JSON")?;

    let Value::Array(items) = body else {
        anyhow::bail!("expected a JSON array of records");
    };

    let mut skipped = 0usize;
    let mut unknown_columns = 0usize;
    let mut columns = BTreeSet::new();

    let records: Vec<Record> = items
        .into_iter()
        .filter_map(|item| {
            let Value::Object(map) = item else {
                skipped += 1;
                return None;
            };

            let mut record = Record::default();
            for (column, value) in map {
                let Some(field) = Field::from_column(&column) else {
                    unknown_columns += 1;
                    continue;
                };
                columns.insert(field);
                if let Some(text) = scalar_text(value) {
                    record.set(field, text);
                }
            }
            Some(record)
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "Skipped non-object array items");
    }
    trace!(unknown_columns, "Ignored unknown columns");

    Ok(RecordSet::with_columns(records, columns))
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
