//! The dashboard query: one fresh load followed by one aggregation pass.

use crate::aggregate::{Filters, aggregate};
use crate::config::SourceConfig;
use crate::fetch::{HttpClient, load_records};
use crate::summary::SummaryPayload;

/// Loads the current records and summarizes them under `filters`.
///
/// Nothing is cached between calls. An unreachable or malformed source
/// yields the empty payload rather than an error.
#[tracing::instrument(skip(client, config), fields(source = %config.source))]
pub async fn dashboard_data<C: HttpClient>(
    client: &C,
    config: &SourceConfig,
    filters: &Filters,
) -> SummaryPayload {
    let records = load_records(client, config).await;
    aggregate(&records, filters)
}
