//! The dashboard summary payload.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Label → count mapping that keeps the order it was built in.
///
/// Serializes as a JSON object whose keys appear in stored order, so the
/// ranking or chronology computed by the aggregator survives serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts(Vec<(String, usize)>);

impl Counts {
    /// Counts occurrences of each value, most frequent first.
    ///
    /// Equal counts keep the order in which the values first appeared.
    pub fn value_counts<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for value in values {
            match index.get(value) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(value, entries.len());
                    entries.push((value.to_string(), 1));
                }
            }
        }

        // stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Counts(entries)
    }

    /// Keeps the first `n` entries.
    pub fn truncated(mut self, n: usize) -> Self {
        self.0.truncate(n);
        self
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, c)| c).sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(l, c)| (l.as_str(), *c))
    }
}

impl FromIterator<(String, usize)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Counts(iter.into_iter().collect())
    }
}

impl Serialize for Counts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Summary statistics returned for one dashboard query.
///
/// Every field has an empty default; missing source data changes the
/// content, never the shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SummaryPayload {
    pub total_cases: usize,
    pub total_deaths: usize,
    pub cases_by_status: Counts,
    pub top_cities: Counts,
    pub age_distribution: Counts,
    pub gender_distribution: Counts,
    pub deaths_over_time: Counts,
    pub available_cities: Vec<String>,
    pub available_departments: Vec<String>,
}
