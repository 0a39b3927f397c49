//! Schema conformance checks for coerced records.

use crate::error::ValidateError;
use crate::schema::TableSchema;
use crate::value::Value;

/// Check a candidate record's length and per-field kind against a schema.
///
/// Fail-fast: length first, then the first field whose runtime kind
/// falls outside its accepted set. Failures are never aggregated.
pub fn validate(record: &[Value], schema: &TableSchema) -> Result<(), ValidateError> {
    if record.len() != schema.fields.len() {
        return Err(ValidateError::WrongLength {
            expected: schema.fields.len(),
            actual: record.len(),
        });
    }

    for (field, (value, spec)) in record.iter().zip(schema.fields.iter()).enumerate() {
        if !spec.contains(value.kind()) {
            return Err(ValidateError::KindMismatch {
                field,
                expected: *spec,
                actual: value.kind(),
            });
        }
    }

    Ok(())
}
