//! Fixed catalog of the 8 dictionary table schemas.
//!
//! The registry is the wire contract between backends: any two backends
//! exchanging data through this crate must agree on table names, field
//! order, and field counts exactly as laid out here. The transfer order
//! matters downstream: importers process `Words` before `WordDefinition`
//! to resolve word/definition associations by position.

use super::{FieldSpec, TableSchema};
use crate::error::SchemaError;

/// Number of tables in the dataset.
pub const TABLE_COUNT: usize = 8;

const TEXT: FieldSpec = FieldSpec::TEXT;
const INTEGER: FieldSpec = FieldSpec::INTEGER;
const BOOLEAN: FieldSpec = FieldSpec::BOOLEAN;
const OPT_TEXT: FieldSpec = FieldSpec::TEXT.or_null();
const OPT_INTEGER: FieldSpec = FieldSpec::INTEGER.or_null();
const OPT_BOOLEAN: FieldSpec = FieldSpec::BOOLEAN.or_null();

/// All table schemas, in transfer order.
static TABLES: [TableSchema; TABLE_COUNT] = [
    TableSchema {
        name: "Author",
        order: 1,
        fields: &[
            TEXT,     // abbreviation
            OPT_TEXT, // full_name
            OPT_TEXT, // notes
        ],
    },
    TableSchema {
        name: "LexEvent",
        order: 2,
        fields: &[
            INTEGER,  // event_id
            TEXT,     // name
            TEXT,     // date
            TEXT,     // definition
            OPT_TEXT, // annotation
            OPT_TEXT, // suffix
        ],
    },
    TableSchema {
        name: "Type",
        order: 3,
        fields: &[
            TEXT,     // type
            TEXT,     // type_x
            TEXT,     // group
            BOOLEAN,  // parentable
            OPT_TEXT, // description
        ],
    },
    TableSchema {
        name: "Words",
        order: 4,
        fields: &[
            INTEGER,     // old_id
            TEXT,        // type
            TEXT,        // type_x
            OPT_TEXT,    // affixes
            OPT_TEXT,    // match
            OPT_TEXT,    // source
            OPT_TEXT,    // year
            OPT_TEXT,    // rank
            OPT_TEXT,    // origin
            OPT_TEXT,    // origin_x
            OPT_TEXT,    // usedin
            OPT_INTEGER, // tid_old
        ],
    },
    TableSchema {
        name: "WordSpell",
        order: 5,
        fields: &[
            INTEGER,  // old_id
            TEXT,     // name
            TEXT,     // name_lower
            TEXT,     // code_name
            INTEGER,  // event_start_id
            INTEGER,  // event_end_id
            OPT_TEXT, // origin_x
        ],
    },
    TableSchema {
        name: "WordDefinition",
        order: 6,
        fields: &[
            INTEGER,  // source_word_old_id
            INTEGER,  // position
            OPT_TEXT, // usage
            OPT_TEXT, // grammar
            TEXT,     // body
            OPT_TEXT, // main
            OPT_TEXT, // case_tags
        ],
    },
    TableSchema {
        name: "Settings",
        order: 7,
        fields: &[
            TEXT,    // date
            INTEGER, // db_version
            INTEGER, // last_word_id
            TEXT,    // db_release
        ],
    },
    TableSchema {
        name: "Syllable",
        order: 8,
        fields: &[
            TEXT,        // name
            TEXT,        // type
            OPT_BOOLEAN, // allowed
        ],
    },
];

/// All 8 table schemas, sorted by transfer order.
pub fn all_schemas() -> &'static [TableSchema] {
    &TABLES
}

/// Look up a schema by its canonical table name.
pub fn schema_by_name(name: &str) -> Result<&'static TableSchema, SchemaError> {
    TABLES
        .iter()
        .find(|schema| schema.name == name)
        .ok_or_else(|| SchemaError::UnknownTable {
            name: name.to_string(),
        })
}

/// The 8 canonical table names, in transfer order.
pub fn table_names() -> [&'static str; TABLE_COUNT] {
    let mut names = [""; TABLE_COUNT];
    for (slot, schema) in names.iter_mut().zip(TABLES.iter()) {
        *slot = schema.name;
    }
    names
}
