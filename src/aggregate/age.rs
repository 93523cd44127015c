//! Age bucketing.

use crate::aggregate::error::{FieldError, require};
use crate::record::{Field, RecordSet};
use crate::summary::Counts;

/// A right-open age interval `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBucket {
    pub lower: u32,
    pub upper: u32,
    pub label: &'static str,
}

/// Buckets in ascending order. Ages of 120 and above fall outside all of them.
pub const AGE_BUCKETS: [AgeBucket; 11] = [
    AgeBucket { lower: 0, upper: 10, label: "0-10" },
    AgeBucket { lower: 10, upper: 20, label: "11-20" },
    AgeBucket { lower: 20, upper: 30, label: "21-30" },
    AgeBucket { lower: 30, upper: 40, label: "31-40" },
    AgeBucket { lower: 40, upper: 50, label: "41-50" },
    AgeBucket { lower: 50, upper: 60, label: "51-60" },
    AgeBucket { lower: 60, upper: 70, label: "61-70" },
    AgeBucket { lower: 70, upper: 80, label: "71-80" },
    AgeBucket { lower: 80, upper: 90, label: "81-90" },
    AgeBucket { lower: 90, upper: 100, label: "91-100" },
    AgeBucket { lower: 100, upper: 120, label: "100+" },
];

/// Parses a raw age. Returns `None` for non-numeric or non-finite text.
pub fn parse_age(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|age| age.is_finite())
}

/// Index into [`AGE_BUCKETS`] for `age`, if it lies in `[0, 120)`.
pub fn bucket_index(age: f64) -> Option<usize> {
    AGE_BUCKETS
        .iter()
        .position(|b| age >= f64::from(b.lower) && age < f64::from(b.upper))
}

/// Counts records per age bucket, ordered by lower bound.
///
/// Records whose age is missing, unparseable or out of range are left out.
/// Buckets with no records are omitted.
pub fn age_distribution(set: &RecordSet) -> Result<Counts, FieldError> {
    require(set, &[Field::Age])?;

    let mut tally = [0usize; AGE_BUCKETS.len()];
    for i in set
        .values(Field::Age)
        .filter_map(parse_age)
        .filter_map(bucket_index)
    {
        tally[i] += 1;
    }

    Ok(AGE_BUCKETS
        .iter()
        .zip(tally)
        .filter(|(_, n)| *n > 0)
        .map(|(b, n)| (b.label.to_string(), n))
        .collect())
}
