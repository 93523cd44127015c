//! Status, city and gender counts.

use crate::aggregate::error::{FieldError, require};
use crate::record::{Field, Record, RecordSet};
use crate::summary::Counts;

/// Lowercased status value marking a fatal case.
pub const DECEASED_MARKER: &str = "fallecido";

/// Maximum number of entries in the top cities ranking.
pub const TOP_CITIES: usize = 10;

pub fn is_deceased(record: &Record) -> bool {
    record
        .status
        .as_deref()
        .is_some_and(|s| s.to_lowercase() == DECEASED_MARKER)
}

/// Death count and lowercased status value counts.
pub fn status_counts(set: &RecordSet) -> Result<(usize, Counts), FieldError> {
    require(set, &[Field::Status])?;

    let statuses: Vec<String> = set.values(Field::Status).map(str::to_lowercase).collect();
    let deaths = statuses.iter().filter(|s| *s == DECEASED_MARKER).count();

    Ok((deaths, Counts::value_counts(statuses.iter().map(String::as_str))))
}

/// The most frequent cities, at most `limit` of them.
pub fn top_cities(set: &RecordSet, limit: usize) -> Result<Counts, FieldError> {
    require(set, &[Field::City])?;
    Ok(Counts::value_counts(set.values(Field::City)).truncated(limit))
}

/// Value counts of uppercased sex.
pub fn gender_distribution(set: &RecordSet) -> Result<Counts, FieldError> {
    require(set, &[Field::Sex])?;

    let genders: Vec<String> = set.values(Field::Sex).map(str::to_uppercase).collect();
    Ok(Counts::value_counts(genders.iter().map(String::as_str)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(status: &str) -> Record {
        Record {
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    fn in_city(city: &str) -> Record {
        Record {
            city: Some(city.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_counts_normalize_case() {
        let set = RecordSet::new(vec![
            with_status("Fallecido"),
            with_status("Leve"),
            with_status("FALLECIDO"),
            Record::default(),
        ]);

        let (deaths, by_status) = status_counts(&set).unwrap();

        assert_eq!(deaths, 2);
        assert_eq!(by_status.get("fallecido"), Some(2));
        assert_eq!(by_status.get("leve"), Some(1));
        assert_eq!(by_status.total(), 3);
    }

    #[test]
    fn test_is_deceased() {
        assert!(is_deceased(&with_status("Fallecido")));
        assert!(!is_deceased(&with_status("Recuperado")));
        assert!(!is_deceased(&Record::default()));
    }

    #[test]
    fn test_top_cities_truncates_and_sorts() {
        let mut records = Vec::new();
        for i in 0..12 {
            for _ in 0..=i {
                records.push(in_city(&format!("city-{i:02}")));
            }
        }

        let top = top_cities(&RecordSet::new(records), TOP_CITIES).unwrap();

        assert_eq!(top.len(), 10);
        assert_eq!(top.labels().next(), Some("city-11"));
        let counts: Vec<_> = top.iter().map(|(_, n)| n).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(top.get("city-01"), None);
    }

    #[test]
    fn test_top_cities_ties_keep_first_seen_order() {
        let set = RecordSet::new(vec![
            in_city("Pasto"),
            in_city("Neiva"),
            in_city("Pasto"),
            in_city("Neiva"),
        ]);

        let top = top_cities(&set, TOP_CITIES).unwrap();

        let labels: Vec<_> = top.labels().collect();
        assert_eq!(labels, vec!["Pasto", "Neiva"]);
    }

    #[test]
    fn test_gender_distribution_uppercases() {
        let set = RecordSet::new(vec![
            Record {
                sex: Some("f".to_string()),
                ..Default::default()
            },
            Record {
                sex: Some("F".to_string()),
                ..Default::default()
            },
            Record {
                sex: Some("M".to_string()),
                ..Default::default()
            },
        ]);

        let genders = gender_distribution(&set).unwrap();

        assert_eq!(genders.get("F"), Some(2));
        assert_eq!(genders.get("M"), Some(1));
        assert_eq!(genders.get("f"), None);
    }

    #[test]
    fn test_missing_columns() {
        let set = RecordSet::new(vec![Record {
            age: Some("4".to_string()),
            ..Default::default()
        }]);

        assert_eq!(
            status_counts(&set),
            Err(FieldError::MissingColumn(Field::Status))
        );
        assert_eq!(
            top_cities(&set, TOP_CITIES),
            Err(FieldError::MissingColumn(Field::City))
        );
        assert_eq!(
            gender_distribution(&set),
            Err(FieldError::MissingColumn(Field::Sex))
        );
    }
}
