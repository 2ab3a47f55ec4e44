//! Core contracts and graph building for schemaviz.
//!
//! This crate defines the canonical schema types, the reference resolver and
//! column ordering used for port assignment, and the graph model consumed by
//! renderers.

pub mod error;
pub mod graph;
pub mod order;
pub mod refs;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use graph::{GraphSummary, NodeRow, ReferenceEdge, SchemaGraph, TableNode, build_schema_graph};
pub use order::{column_order, port_index};
pub use refs::{ColumnReference, RefKind};
pub use schema::{ColumnSchema, DatabaseSchema, TableSchema};
pub use types::{ColumnType, MapType, RefDescriptor, TypeEntry};
