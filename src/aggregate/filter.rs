//! Department, city and gender filters.
//!
//! A filter is skipped when its value is not given or when the fetched data
//! has no such column at all. Records missing a value in a present column
//! never match.

use serde::Deserialize;
use std::collections::BTreeSet;

use crate::record::{Field, RecordSet};

/// Optional query restrictions. Empty strings mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Filters {
    pub department: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
}

impl Filters {
    pub fn new(department: Option<String>, city: Option<String>, gender: Option<String>) -> Self {
        Self {
            department,
            city,
            gender,
        }
    }

    pub fn department(&self) -> Option<&str> {
        non_empty(&self.department)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    pub fn gender(&self) -> Option<&str> {
        non_empty(&self.gender)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Exact, case-sensitive department match.
pub fn by_department(set: &RecordSet, department: Option<&str>) -> RecordSet {
    exact(set, Field::Department, department)
}

/// Exact, case-sensitive city match.
pub fn by_city(set: &RecordSet, city: Option<&str>) -> RecordSet {
    exact(set, Field::City, city)
}

/// Case-insensitive sex match.
pub fn by_gender(set: &RecordSet, gender: Option<&str>) -> RecordSet {
    match gender {
        Some(wanted) if set.has_column(Field::Sex) => {
            let wanted = wanted.to_uppercase();
            set.filter(|r| r.sex.as_deref().is_some_and(|s| s.to_uppercase() == wanted))
        }
        _ => set.clone(),
    }
}

fn exact(set: &RecordSet, field: Field, wanted: Option<&str>) -> RecordSet {
    match wanted {
        Some(wanted) if set.has_column(field) => set.filter(|r| r.get(field) == Some(wanted)),
        _ => set.clone(),
    }
}

/// Distinct non-missing values of `field`, sorted ascending.
pub fn distinct_sorted(set: &RecordSet, field: Field) -> Vec<String> {
    set.values(field)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn case(department: &str, city: &str, sex: &str) -> Record {
        Record {
            department: Some(department.to_string()),
            city: Some(city.to_string()),
            sex: Some(sex.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> RecordSet {
        RecordSet::new(vec![
            case("Antioquia", "Medellín", "F"),
            case("Antioquia", "Envigado", "m"),
            case("Valle", "Cali", "f"),
            Record::default(),
        ])
    }

    #[test]
    fn test_empty_filter_values_are_ignored() {
        let filters = Filters::new(Some(String::new()), None, Some("F".to_string()));

        assert_eq!(filters.department(), None);
        assert_eq!(filters.city(), None);
        assert_eq!(filters.gender(), Some("F"));
    }

    #[test]
    fn test_department_match_is_case_sensitive() {
        assert_eq!(by_department(&sample(), Some("Antioquia")).len(), 2);
        assert_eq!(by_department(&sample(), Some("ANTIOQUIA")).len(), 0);
    }

    #[test]
    fn test_gender_match_ignores_case() {
        let women = by_gender(&sample(), Some("f"));

        assert_eq!(women.len(), 2);
        assert_eq!(by_gender(&sample(), Some("M")).len(), 1);
    }

    #[test]
    fn test_no_filter_keeps_everything() {
        assert_eq!(by_city(&sample(), None).len(), 4);
    }

    #[test]
    fn test_filter_on_absent_column_is_skipped() {
        let set = RecordSet::new(vec![
            Record {
                age: Some("3".to_string()),
                ..Default::default()
            };
            3
        ]);

        assert_eq!(by_city(&set, Some("Cali")).len(), 3);
        assert_eq!(by_gender(&set, Some("F")).len(), 3);
    }

    #[test]
    fn test_distinct_sorted() {
        assert_eq!(
            distinct_sorted(&sample(), Field::City),
            vec!["Cali", "Envigado", "Medellín"]
        );
    }
}
