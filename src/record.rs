//! Case records and the closed set of columns the dashboard reads.

use std::collections::BTreeSet;
use std::fmt;

/// A source column the aggregation pipeline knows how to read.
///
/// Column names are matched case-insensitively; anything outside this set is
/// ignored by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Department,
    City,
    Sex,
    Status,
    Age,
    DeathDate,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Department,
        Field::City,
        Field::Sex,
        Field::Status,
        Field::Age,
        Field::DeathDate,
    ];

    /// Lowercase column name used by the datos.gov.co resource.
    pub fn column(self) -> &'static str {
        match self {
            Field::Department => "departamento_nom",
            Field::City => "ciudad_municipio_nom",
            Field::Sex => "sexo",
            Field::Status => "estado",
            Field::Age => "edad",
            Field::DeathDate => "fecha_muerte",
        }
    }

    /// Resolves a raw column name, ignoring case.
    pub fn from_column(name: &str) -> Option<Field> {
        let lowered = name.to_lowercase();
        Field::ALL.into_iter().find(|f| f.column() == lowered)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One reported case. Every field is optional because the source omits
/// columns freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub department: Option<String>,
    pub city: Option<String>,
    pub sex: Option<String>,
    pub status: Option<String>,
    pub age: Option<String>,
    pub death_date: Option<String>,
}

impl Record {
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Department => &self.department,
            Field::City => &self.city,
            Field::Sex => &self.sex,
            Field::Status => &self.status,
            Field::Age => &self.age,
            Field::DeathDate => &self.death_date,
        };
        value.as_deref()
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Department => &mut self.department,
            Field::City => &mut self.city,
            Field::Sex => &mut self.sex,
            Field::Status => &mut self.status,
            Field::Age => &mut self.age,
            Field::DeathDate => &mut self.death_date,
        };
        *slot = Some(value);
    }

    /// Columns this record carries a value for.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|f| self.get(*f).is_some())
    }
}

/// An ordered collection of records together with the columns seen across
/// the whole fetch.
///
/// Filtering keeps the column set of the set it came from, so a subset that
/// filtered down to nothing still reports which columns the source provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
    columns: BTreeSet<Field>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        let columns = records.iter().flat_map(Record::fields).collect();
        Self { records, columns }
    }

    /// Builds a set whose columns include `columns` as well as every field
    /// the records carry a value for. A column that was sent with only null
    /// values stays present.
    pub fn with_columns(records: Vec<Record>, columns: BTreeSet<Field>) -> Self {
        let mut set = Self::new(records);
        set.columns.extend(columns);
        set
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, field: Field) -> bool {
        self.columns.contains(&field)
    }

    /// Returns the records matching `predicate`, keeping this set's columns.
    pub fn filter<P>(&self, mut predicate: P) -> RecordSet
    where
        P: FnMut(&Record) -> bool,
    {
        RecordSet {
            records: self
                .records
                .iter()
                .filter(|r| predicate(*r))
                .cloned()
                .collect(),
            columns: self.columns.clone(),
        }
    }

    /// Iterates the non-missing values of one column in record order.
    pub fn values(&self, field: Field) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().filter_map(move |r| r.get(field))
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        RecordSet::new(iter.into_iter().collect())
    }
}
