//! Delimited text backend: one `<Table>.txt` file per table.
//!
//! Fields are joined by `@`, one record per line, nulls rendered as
//! empty tokens. Text values containing the separator are not escaped;
//! that matches the historical file format. Reading feeds the
//! validating write path, so a malformed file surfaces the usual
//! record errors with table name and position; the record index in
//! those errors is the zero-based line number within the file, counting
//! skipped blank lines, so it points at the offending line as an editor
//! shows it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, RecordError, Result};
use crate::schema::table_names;
use crate::storage::Storage;
use crate::value::Value;

/// Field separator within a line.
pub const SEPARATOR: &str = "@";

/// File extension for per-table files.
pub const EXTENSION: &str = "txt";

fn table_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{EXTENSION}"))
}

/// Read a full 8-table dataset from `dir` into a fresh [`Storage`].
///
/// All 8 files are checked up front so a partially-populated directory
/// is reported with every missing table name at once, not one failure
/// per run. Blank lines are skipped.
pub fn read_storage(dir: &Path) -> Result<Storage> {
    let missing: Vec<String> = table_names()
        .iter()
        .filter(|name| !table_path(dir, name).exists())
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingTables {
            dir: dir.to_path_buf(),
            missing,
        });
    }

    let mut storage = Storage::new()?;
    for container in storage.containers_mut() {
        let content = fs::read_to_string(table_path(dir, container.name()))?;
        for (line_no, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split(SEPARATOR).collect();
            container
                .append(&tokens)
                .map_err(|e| at_line(e, line_no))?;
        }
        info!(table = container.name(), rows = container.len(), "imported");
    }
    Ok(storage)
}

/// Rewrite a record error's index to the file line it came from, so the
/// position survives blank-line skipping.
fn at_line(err: RecordError, line: usize) -> RecordError {
    match err {
        RecordError::Coercion {
            table,
            field,
            token,
            accepted,
            ..
        } => RecordError::Coercion {
            table,
            record: line,
            field,
            token,
            accepted,
        },
        RecordError::WrongLength {
            table,
            expected,
            actual,
            ..
        } => RecordError::WrongLength {
            table,
            record: line,
            expected,
            actual,
        },
        RecordError::KindMismatch {
            table,
            field,
            expected,
            actual,
            ..
        } => RecordError::KindMismatch {
            table,
            record: line,
            field,
            expected,
            actual,
        },
        other => other,
    }
}

/// Write every container of `storage` to `dir`, one file per table,
/// creating the directory if needed.
pub fn write_storage(dir: &Path, storage: &Storage) -> Result<()> {
    fs::create_dir_all(dir)?;
    for container in storage.containers() {
        let mut content = String::new();
        for record in container {
            let tokens: Vec<String> = record.iter().map(Value::to_token).collect();
            content.push_str(&tokens.join(SEPARATOR));
            content.push('\n');
        }
        fs::write(table_path(dir, container.name()), content)?;
        info!(table = container.name(), rows = container.len(), "exported");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(table_path(dir.path(), "Author"), "JCB@@\n").unwrap();

        match read_storage(dir.path()) {
            Err(Error::MissingTables { missing, .. }) => {
                assert_eq!(missing.len(), 7);
                assert!(!missing.contains(&"Author".to_string()));
                assert!(missing.contains(&"Syllable".to_string()));
            }
            other => panic!("expected missing tables error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_line_carries_position() {
        let dir = tempfile::tempdir().unwrap();
        for name in table_names() {
            fs::write(table_path(dir.path(), name), "").unwrap();
        }
        fs::write(
            table_path(dir.path(), "Syllable"),
            "ba@CV@true\nbr@CC@maybe\n",
        )
        .unwrap();

        match read_storage(dir.path()) {
            Err(Error::Record(RecordError::Coercion {
                table,
                record,
                field,
                ..
            })) => {
                assert_eq!(table, "Syllable");
                assert_eq!(record, 1);
                assert_eq!(field, 2);
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_skipped_on_read() {
        let dir = tempfile::tempdir().unwrap();
        for name in table_names() {
            fs::write(table_path(dir.path(), name), "").unwrap();
        }
        fs::write(
            table_path(dir.path(), "Syllable"),
            "ba@CV@true\n\nbr@CC@\n",
        )
        .unwrap();

        let storage = read_storage(dir.path()).unwrap();
        let syllables = storage.container_by_name("Syllable").unwrap();
        assert_eq!(syllables.len(), 2);
        assert_eq!(syllables.records()[1][0], Value::from("br"));
        assert_eq!(syllables.records()[1][2], Value::Null);
    }

    #[test]
    fn test_error_index_counts_file_lines_past_blanks() {
        let dir = tempfile::tempdir().unwrap();
        for name in table_names() {
            fs::write(table_path(dir.path(), name), "").unwrap();
        }
        // The bad record sits on line 2; the blank line before it must
        // not shift the reported position.
        fs::write(
            table_path(dir.path(), "Syllable"),
            "ba@CV@true\n\nbr@CC@maybe\n",
        )
        .unwrap();

        match read_storage(dir.path()) {
            Err(Error::Record(RecordError::Coercion { record, field, .. })) => {
                assert_eq!(record, 2);
                assert_eq!(field, 2);
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
    }
}
