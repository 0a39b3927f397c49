//! Table schema descriptor.

use super::FieldSpec;

/// Immutable description of one dictionary table.
///
/// Built once in the registry and shared by reference from every
/// container of that table; never constructed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Canonical table name, the sole lookup key between backends.
    pub name: &'static str,

    /// Position in the fixed transfer order (1..=8).
    pub order: u8,

    /// Accepted-kind set per field, positionally aligned with records.
    pub fields: &'static [FieldSpec],
}

impl TableSchema {
    /// Number of fields every record of this table must carry.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl std::fmt::Display for TableSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({} fields)", self.name, self.fields.len())
    }
}
