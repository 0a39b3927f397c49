//! Ordered, validated record storage for one table.
//!
//! Two parallel write paths. The default path (`append`, `extend`,
//! `insert`, `set`) coerces raw string tokens and validates the result
//! against the table schema before anything lands in the container. The
//! `*_directly` path bypasses both steps for producers that already
//! hold correctly-typed values; it is an explicit trust boundary, and
//! malformed input there is a caller bug rather than a reported error.
//!
//! Insertion order is preserved exactly. One importer reconstructs
//! word/definition associations from record positions, so any
//! reordering of the append path would silently corrupt output.

use smallvec::SmallVec;
use tracing::debug;

use crate::coerce::coerce;
use crate::error::{RecordError, ValidateError};
use crate::schema::TableSchema;
use crate::validate::validate;
use crate::value::{Record, Value};

/// Growable sequence of validated records for one table schema.
#[derive(Debug, Clone)]
pub struct TableContainer {
    schema: &'static TableSchema,
    records: Vec<Record>,
}

impl TableContainer {
    /// Create an empty container for the given schema.
    pub fn new(schema: &'static TableSchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    /// Canonical name of the table this container holds.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Position in the fixed transfer order (1..=8).
    pub fn order(&self) -> u8 {
        self.schema.order
    }

    /// The shared, read-only schema backing this container.
    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Number of fields every record must carry.
    pub fn field_count(&self) -> usize {
        self.schema.fields.len()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the container holds no records. An empty container after
    /// population means "zero rows of this kind in the source".
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Coerce and validate one raw record, then append it.
    ///
    /// Atomic: on any coercion or validation failure the container is
    /// left unchanged.
    pub fn append<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), RecordError> {
        let record = self.coerce_record(tokens, 0)?;
        self.records.push(record);
        Ok(())
    }

    /// Append every raw record in order.
    ///
    /// Deliberately does NOT roll back earlier successful appends when a
    /// later record fails; callers needing all-or-nothing semantics must
    /// pre-validate the batch. The error's record index is the position
    /// of the failing record within `records`.
    pub fn extend<I, R, S>(&mut self, records: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        for (pos, tokens) in records.into_iter().enumerate() {
            let record = self.coerce_record(tokens.as_ref(), pos)?;
            self.records.push(record);
        }
        Ok(())
    }

    /// Trusted bypass of coercion and validation for producers that
    /// already hold correctly-typed values.
    pub fn append_directly(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Trusted bulk bypass; see [`TableContainer::append_directly`].
    pub fn extend_directly<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        self.records.extend(records);
    }

    /// Coerce and validate one raw record, then insert it at `index`.
    /// `index` must lie in `[0, len]`.
    pub fn insert<S: AsRef<str>>(&mut self, index: usize, tokens: &[S]) -> Result<(), RecordError> {
        if index > self.records.len() {
            return Err(self.index_error(index));
        }
        let record = self.coerce_record(tokens, 0)?;
        self.records.insert(index, record);
        Ok(())
    }

    /// Trusted positional insert. `index` must lie in `[0, len]`.
    pub fn insert_directly(&mut self, index: usize, record: Record) -> Result<(), RecordError> {
        if index > self.records.len() {
            return Err(self.index_error(index));
        }
        self.records.insert(index, record);
        Ok(())
    }

    /// Coerce and validate one raw record, then replace the record at
    /// `index` in place. `index` must lie in `[0, len)`.
    pub fn set<S: AsRef<str>>(&mut self, index: usize, tokens: &[S]) -> Result<(), RecordError> {
        if index >= self.records.len() {
            return Err(self.index_error(index));
        }
        let record = self.coerce_record(tokens, 0)?;
        self.records[index] = record;
        Ok(())
    }

    /// Run the full coercion + validation pipeline on one raw record.
    /// `record_pos` is the record's position within the batch being
    /// ingested, carried into any error.
    fn coerce_record<S: AsRef<str>>(
        &self,
        tokens: &[S],
        record_pos: usize,
    ) -> Result<Record, RecordError> {
        let expected = self.schema.fields.len();
        if tokens.len() != expected {
            return Err(RecordError::WrongLength {
                table: self.schema.name,
                record: record_pos,
                expected,
                actual: tokens.len(),
            });
        }

        let mut values: SmallVec<[Value; 12]> = SmallVec::with_capacity(expected);
        for (field, (token, spec)) in tokens.iter().zip(self.schema.fields.iter()).enumerate() {
            let value = coerce(token.as_ref(), *spec).map_err(|e| {
                debug!(
                    table = self.schema.name,
                    record = record_pos,
                    field,
                    token = e.token.as_str(),
                    "no accepted kind matched"
                );
                RecordError::Coercion {
                    table: self.schema.name,
                    record: record_pos,
                    field,
                    token: e.token,
                    accepted: e.accepted,
                }
            })?;
            values.push(value);
        }
        let record = values.into_vec();

        // Redundant after a successful coercion pass, but guards the
        // container invariant against future coercion rule changes.
        validate(&record, self.schema).map_err(|e| match e {
            ValidateError::WrongLength { expected, actual } => RecordError::WrongLength {
                table: self.schema.name,
                record: record_pos,
                expected,
                actual,
            },
            ValidateError::KindMismatch {
                field,
                expected,
                actual,
            } => RecordError::KindMismatch {
                table: self.schema.name,
                record: record_pos,
                field,
                expected,
                actual,
            },
        })?;

        Ok(record)
    }

    fn index_error(&self, index: usize) -> RecordError {
        RecordError::IndexOutOfRange {
            table: self.schema.name,
            index,
            len: self.records.len(),
        }
    }
}

impl<'a> IntoIterator for &'a TableContainer {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema_by_name;

    fn container(name: &str) -> TableContainer {
        TableContainer::new(schema_by_name(name).unwrap())
    }

    #[test]
    fn test_append_author() {
        let mut author = container("Author");
        author.append(&["JCB", "John Cable", "notes"]).unwrap();
        assert_eq!(
            author.records()[0],
            vec![
                Value::from("JCB"),
                Value::from("John Cable"),
                Value::from("notes")
            ]
        );
    }

    #[test]
    fn test_append_author_empty_optionals_become_null() {
        let mut author = container("Author");
        author.append(&["JCB", "", ""]).unwrap();
        assert_eq!(
            author.records()[0],
            vec![Value::from("JCB"), Value::Null, Value::Null]
        );
    }

    #[test]
    fn test_append_words_twelve_fields() {
        let mut words = container("Words");
        words
            .append(&[
                "13", "D-Prim", "Predicate", "", "", "JCB", "1991", "10", "cervu", "", "", "",
            ])
            .unwrap();
        let record = &words.records()[0];
        assert_eq!(record[0], Value::Integer(13));
        assert_eq!(record[3], Value::Null);
        assert_eq!(record[4], Value::Null);
        // year is a Text|Null field: the digit token stays text
        assert_eq!(record[6], Value::from("1991"));
        assert_eq!(record[9], Value::Null);
        assert_eq!(record[10], Value::Null);
        // trailing empty token lands in an Integer|Null field
        assert_eq!(record[11], Value::Null);
    }

    #[test]
    fn test_append_wrong_length_leaves_container_unchanged() {
        let mut words = container("Words");
        let err = words
            .append(&[
                "13", "D-Prim", "Predicate", "", "", "JCB", "1991", "10", "cervu", "", "",
            ])
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::WrongLength {
                table: "Words",
                record: 0,
                expected: 12,
                actual: 11,
            }
        );
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn test_append_bad_token_leaves_container_unchanged() {
        let mut types = container("Type");
        types
            .append(&["C-Prim", "Cpx", "Predicate", "true", ""])
            .unwrap();
        let err = types
            .append(&["C-Prim", "Cpx", "Predicate", "maybe", ""])
            .unwrap_err();
        match err {
            RecordError::Coercion { table, field, token, .. } => {
                assert_eq!(table, "Type");
                assert_eq!(field, 3);
                assert_eq!(token, "maybe");
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
        assert_eq!(types.len(), 1);
    }

    #[test]
    fn test_extend_keeps_prefix_before_failure() {
        let mut author = container("Author");
        let batch = vec![
            vec!["AAA", "First", ""],
            vec!["BBB", "Second", "note"],
            vec!["too", "short"],
            vec!["CCC", "Third", ""],
        ];
        let err = author.extend(batch).unwrap_err();
        assert_eq!(
            err,
            RecordError::WrongLength {
                table: "Author",
                record: 2,
                expected: 3,
                actual: 2,
            }
        );
        // No rollback: the two good records before the failure survive,
        // the one after it was never ingested.
        assert_eq!(author.len(), 2);
        assert_eq!(author.records()[1][0], Value::from("BBB"));
    }

    #[test]
    fn test_direct_path_skips_validation_where_append_rejects() {
        let mut author = container("Author");

        // append rejects the short record...
        assert!(author.append(&["JCB"]).is_err());
        assert_eq!(author.len(), 0);

        // ...while the trusted bypass accepts the same malformed shape.
        author.append_directly(vec![Value::from("JCB")]);
        assert_eq!(author.len(), 1);
        assert_eq!(author.records()[0].len(), 1);
    }

    #[test]
    fn test_extend_directly() {
        let mut syllable = container("Syllable");
        syllable.extend_directly(vec![
            vec![Value::from("ba"), Value::from("CV"), Value::Boolean(true)],
            vec![Value::from("br"), Value::from("CC"), Value::Null],
        ]);
        assert_eq!(syllable.len(), 2);
    }

    #[test]
    fn test_insert_positions() {
        let mut author = container("Author");
        author.append(&["AAA", "", ""]).unwrap();
        author.append(&["CCC", "", ""]).unwrap();
        author.insert(1, &["BBB", "", ""]).unwrap();
        let names: Vec<_> = author.iter().map(|r| r[0].clone()).collect();
        assert_eq!(
            names,
            vec![Value::from("AAA"), Value::from("BBB"), Value::from("CCC")]
        );

        // Inserting at len() appends; one past that is out of range.
        author.insert(3, &["DDD", "", ""]).unwrap();
        let err = author.insert(5, &["EEE", "", ""]).unwrap_err();
        assert_eq!(
            err,
            RecordError::IndexOutOfRange {
                table: "Author",
                index: 5,
                len: 4,
            }
        );
    }

    #[test]
    fn test_insert_directly_bounds() {
        let mut author = container("Author");
        author
            .insert_directly(0, vec![Value::from("AAA"), Value::Null, Value::Null])
            .unwrap();
        let err = author.insert_directly(2, vec![Value::Null]).unwrap_err();
        assert!(matches!(err, RecordError::IndexOutOfRange { index: 2, len: 1, .. }));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut author = container("Author");
        author.append(&["AAA", "", ""]).unwrap();
        author.set(0, &["ZZZ", "Zed", ""]).unwrap();
        assert_eq!(author.len(), 1);
        assert_eq!(author.records()[0][0], Value::from("ZZZ"));

        // set validates like append and rejects out-of-range indices.
        assert!(author.set(0, &["only-one-token"]).is_err());
        assert!(matches!(
            author.set(1, &["AAA", "", ""]),
            Err(RecordError::IndexOutOfRange { index: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_iteration_is_stable_and_restartable() {
        let mut syllable = container("Syllable");
        syllable.append(&["ba", "CV", "true"]).unwrap();
        syllable.append(&["br", "CC", ""]).unwrap();

        let first: Vec<_> = syllable.iter().collect();
        let second: Vec<_> = (&syllable).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_queries() {
        let settings = container("Settings");
        assert_eq!(settings.name(), "Settings");
        assert_eq!(settings.order(), 7);
        assert_eq!(settings.field_count(), 4);
        assert!(settings.is_empty());
    }
}
