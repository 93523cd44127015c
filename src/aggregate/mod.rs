//! Filtering and aggregation of case records into the dashboard summary.
//!
//! The pipeline runs in a fixed order because each stage decides which
//! payload fields reflect which filters:
//!
//! 1. `available_departments` comes from the unfiltered records.
//! 2. The department filter is applied, then `available_cities` is taken.
//! 3. City and gender filters are applied; every remaining field is computed
//!    from that subset.
//!
//! Each field computation returns a [`FieldError`] instead of failing the
//! whole pass; the pipeline replaces a failed field with its empty default.

pub mod age;
pub mod dates;
pub mod error;
pub mod fields;
pub mod filter;

pub use error::FieldError;
pub use filter::Filters;

use tracing::debug;

use crate::record::{Field, RecordSet};
use crate::summary::SummaryPayload;

/// Builds the summary payload for `records` under `filters`.
#[tracing::instrument(level = "debug", skip_all, fields(records = records.len()))]
pub fn aggregate(records: &RecordSet, filters: &Filters) -> SummaryPayload {
    let mut payload = SummaryPayload::default();

    if records.is_empty() {
        return payload;
    }

    payload.available_departments = filter::distinct_sorted(records, Field::Department);

    let in_department = filter::by_department(records, filters.department());
    payload.available_cities = filter::distinct_sorted(&in_department, Field::City);

    let subset = filter::by_gender(
        &filter::by_city(&in_department, filters.city()),
        filters.gender(),
    );

    debug!(
        in_department = in_department.len(),
        selected = subset.len(),
        "Filters applied"
    );

    if subset.is_empty() {
        return payload;
    }

    payload.total_cases = subset.len();

    let (total_deaths, cases_by_status) =
        or_default("cases_by_status", fields::status_counts(&subset));
    payload.total_deaths = total_deaths;
    payload.cases_by_status = cases_by_status;
    payload.top_cities = or_default(
        "top_cities",
        fields::top_cities(&subset, fields::TOP_CITIES),
    );
    payload.age_distribution = or_default("age_distribution", age::age_distribution(&subset));
    payload.gender_distribution = or_default(
        "gender_distribution",
        fields::gender_distribution(&subset),
    );
    payload.deaths_over_time = or_default("deaths_over_time", dates::deaths_over_time(&subset));

    payload
}

fn or_default<T: Default>(name: &'static str, result: Result<T, FieldError>) -> T {
    result.unwrap_or_else(|e| {
        debug!(field = name, error = %e, "Field left empty");
        T::default()
    })
}
