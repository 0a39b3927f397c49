//! Aggregate of one table container per registry schema.
//!
//! A `Storage` is created fresh per transfer: the producing backend
//! fills its containers, the consuming backend reads them in transfer
//! order, then the whole thing is dropped. It is never shared between
//! transfers and requires no locking because exactly one logical caller
//! owns it at a time.

use crate::container::TableContainer;
use crate::error::SchemaError;
use crate::schema::{self, TABLE_COUNT};

/// In-memory exchange storage: exactly one container per table, in
/// transfer order. Empty containers are valid and mean "zero rows of
/// this kind in the source".
#[derive(Debug, Clone)]
pub struct Storage {
    containers: Vec<TableContainer>,
}

impl Storage {
    /// Build a storage with all 8 containers allocated empty, in
    /// registry order.
    ///
    /// Fails with [`SchemaError::RegistryCorrupt`] if the registry does
    /// not yield exactly 8 distinct schemas; that is a programming-time
    /// invariant and never an expected runtime condition.
    pub fn new() -> Result<Self, SchemaError> {
        let containers: Vec<TableContainer> = schema::all_schemas()
            .iter()
            .map(TableContainer::new)
            .collect();

        let mut names: Vec<&str> = containers.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        if containers.len() != TABLE_COUNT || names.len() != TABLE_COUNT {
            return Err(SchemaError::RegistryCorrupt {
                expected: TABLE_COUNT,
                actual: names.len(),
            });
        }

        Ok(Self { containers })
    }

    /// The 8 canonical table names, in transfer order.
    pub fn names(&self) -> [&'static str; TABLE_COUNT] {
        schema::table_names()
    }

    /// Look up a container by canonical table name.
    pub fn container_by_name(&self, name: &str) -> Result<&TableContainer, SchemaError> {
        self.containers
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| SchemaError::UnknownTable {
                name: name.to_string(),
            })
    }

    /// Mutable variant of [`Storage::container_by_name`], for the
    /// producing backend's export routine.
    pub fn container_by_name_mut(&mut self, name: &str) -> Result<&mut TableContainer, SchemaError> {
        self.containers
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| SchemaError::UnknownTable {
                name: name.to_string(),
            })
    }

    /// Iterate containers in transfer order.
    pub fn containers(&self) -> impl Iterator<Item = &TableContainer> {
        self.containers.iter()
    }

    /// Mutable iteration in transfer order.
    pub fn containers_mut(&mut self) -> impl Iterator<Item = &mut TableContainer> {
        self.containers.iter_mut()
    }

    /// Total number of records across all containers.
    pub fn total_records(&self) -> usize {
        self.containers.iter().map(TableContainer::len).sum()
    }
}
