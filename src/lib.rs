//! dictbridge - schema-validated exchange core for a fixed dictionary
//! dataset.
//!
//! This crate is the canonical in-memory representation sitting between
//! incompatible storage backends: a registry of 8 table schemas, a
//! type-coercion engine turning raw string tokens into typed values, a
//! record validator, and ordered per-table containers aggregated into a
//! [`Storage`]. A producing backend fills a fresh `Storage`; a consuming
//! backend reads it in transfer order and writes its own format. The
//! core itself performs no I/O beyond the bundled delimited-text
//! backend and is synchronous and single-threaded by design.
//!
//! # Example
//!
//! ```rust
//! use dictbridge::{Storage, Value};
//!
//! let mut storage = Storage::new()?;
//!
//! let author = storage.container_by_name_mut("Author")?;
//! author.append(&["JCB", "John Cable", ""])?;
//!
//! let record = &storage.container_by_name("Author")?.records()[0];
//! assert_eq!(record[1], Value::from("John Cable"));
//! assert_eq!(record[2], Value::Null);
//! # Ok::<(), dictbridge::Error>(())
//! ```

pub mod coerce;
pub mod container;
pub mod error;
pub mod schema;
pub mod storage;
pub mod text;
pub mod validate;
pub mod value;

pub use container::TableContainer;
pub use error::{Error, Result};
pub use storage::Storage;
pub use value::{Record, Value};
