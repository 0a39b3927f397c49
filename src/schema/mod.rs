//! Backend-agnostic table schemas.
//!
//! This module fixes the shape of the exchanged dataset: which tables
//! exist, in what order they are transferred, and which kinds each field
//! accepts. Backends never see each other's native column types; they
//! only agree on what is declared here.
//!
//! # Example
//!
//! ```rust
//! use dictbridge::schema::{schema_by_name, FieldKind};
//!
//! let author = schema_by_name("Author").unwrap();
//! assert_eq!(author.field_count(), 3);
//! assert!(author.fields[1].contains(FieldKind::Null));
//! ```

mod kind;
mod registry;
mod table;

pub use kind::{FieldKind, FieldSpec};
pub use registry::{all_schemas, schema_by_name, table_names, TABLE_COUNT};
pub use table::TableSchema;
