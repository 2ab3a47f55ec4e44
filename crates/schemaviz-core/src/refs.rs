use serde::{Deserialize, Serialize};

use crate::schema::ColumnSchema;
use crate::types::{ColumnType, TypeEntry};

/// Which side of a map descriptor a reference was declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    Key,
    Value,
}

impl RefKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RefKind::Key => "key",
            RefKind::Value => "value",
        }
    }
}

/// A reference from one column to another table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReference {
    pub kind: RefKind,
    pub table: String,
}

impl ColumnSchema {
    /// Extract the references this column declares: at most one per map side.
    ///
    /// Extraction is best-effort. A scalar type, a missing side, or a side
    /// whose shape does not carry a string `refTable` all contribute nothing;
    /// nothing here ever fails.
    pub fn references(&self) -> Vec<ColumnReference> {
        let ColumnType::Map(map) = &self.column_type else {
            return Vec::new();
        };

        let mut references = Vec::new();
        if let Some(table) = ref_target(map.key.as_ref()) {
            references.push(ColumnReference {
                kind: RefKind::Key,
                table,
            });
        }
        if let Some(table) = ref_target(map.value.as_ref()) {
            references.push(ColumnReference {
                kind: RefKind::Value,
                table,
            });
        }
        references
    }
}

fn ref_target(entry: Option<&TypeEntry>) -> Option<String> {
    match entry? {
        TypeEntry::Descriptor(descriptor) => descriptor.ref_table.clone(),
        TypeEntry::Atomic(_) | TypeEntry::Other(_) => None,
    }
}
