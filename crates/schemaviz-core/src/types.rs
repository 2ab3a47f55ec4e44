use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type descriptor for a column: either a bare scalar type name or a
/// structured set/map descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ColumnType {
    Scalar(String),
    Map(MapType),
}

/// Structured descriptor for set/map columns. Bound fields such as `min` and
/// `max` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MapType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<TypeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TypeEntry>,
}

/// One side of a map descriptor.
///
/// The `Other` arm preserves shapes the structured arms reject, for example a
/// non-string `refTable`; such entries decode fine and simply carry no
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TypeEntry {
    Atomic(String),
    Descriptor(RefDescriptor),
    Other(Value),
}

/// Structured entry that may name another table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RefDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(rename = "refTable", skip_serializing_if = "Option::is_none")]
    pub ref_table: Option<String>,
    #[serde(rename = "refType", skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
}
