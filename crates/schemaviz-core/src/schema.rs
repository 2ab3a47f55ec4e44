use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ColumnType;

/// Top-level schema snapshot for a database.
///
/// Tables are keyed by name in a `BTreeMap` so that every traversal of the
/// schema sees the same lexicographic order; port assignment depends on this.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DatabaseSchema {
    pub name: String,
    pub version: String,
    #[serde(rename = "cksum", skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    pub tables: BTreeMap<String, TableSchema>,
}

/// One table in the schema.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TableSchema {
    #[serde(default)]
    pub columns: BTreeMap<String, ColumnSchema>,
    /// Declared indexes, each an ordered list of column names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<Vec<String>>,
    /// Root tables are not garbage-collected by the source database.
    #[serde(default, rename = "isRoot")]
    pub is_root: bool,
    #[serde(rename = "maxrows", skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<u64>,
}

impl TableSchema {
    /// Reports whether the column participates in any declared index.
    ///
    /// Index definitions are flattened into a single membership test; which
    /// index matched, or whether the column is only part of a composite key,
    /// is not tracked.
    pub fn is_indexed(&self, column: &str) -> bool {
        self.indexes.iter().flatten().any(|name| name == column)
    }
}

/// One column in a table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ColumnSchema {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}
