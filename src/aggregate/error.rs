//! Per-field failure type for the aggregation pipeline.

use thiserror::Error;

use crate::record::Field;

/// Why a single payload field could not be computed.
///
/// The pipeline turns any of these into that field's empty default; the
/// rest of the payload is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("column `{0}` is absent from the record set")]
    MissingColumn(Field),
}

/// Fails with [`FieldError::MissingColumn`] for the first absent column.
pub(crate) fn require(
    set: &crate::record::RecordSet,
    fields: &[Field],
) -> Result<(), FieldError> {
    match fields.iter().find(|f| !set.has_column(**f)) {
        Some(missing) => Err(FieldError::MissingColumn(*missing)),
        None => Ok(()),
    }
}
