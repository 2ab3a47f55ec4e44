use serde::{Deserialize, Serialize};

use crate::order::{column_order, port_index};
use crate::refs::RefKind;
use crate::schema::DatabaseSchema;

/// Node and edge counts for a built graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Graph model of a schema: one node per table, one edge per reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaGraph {
    pub nodes: Vec<TableNode>,
    pub edges: Vec<ReferenceEdge>,
}

/// A table rendered as a labeled node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableNode {
    pub table: String,
    pub is_root: bool,
    pub rows: Vec<NodeRow>,
}

/// One row of a table node; row 0 is the table-name sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRow {
    pub name: String,
    pub port: usize,
    pub is_index: bool,
}

/// A directed reference between two tables, anchored to column ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceEdge {
    pub source_table: String,
    pub source_port: usize,
    pub kind: RefKind,
    pub target_table: String,
    pub target_port: usize,
}

impl SchemaGraph {
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
        }
    }
}

/// Build the graph model for a schema.
///
/// Tables and columns are walked in their map order, so the ports assigned
/// here match any other traversal using [`column_order`]. Dangling reference
/// targets are emitted as-is; resolving them is the consumer's concern.
pub fn build_schema_graph(schema: &DatabaseSchema) -> SchemaGraph {
    let mut nodes = Vec::with_capacity(schema.tables.len());
    let mut edges = Vec::new();

    for (table_name, table) in &schema.tables {
        let order = column_order(table_name, table);

        let rows = order
            .iter()
            .enumerate()
            .map(|(port, name)| NodeRow {
                name: name.clone(),
                port,
                is_index: table.is_indexed(name),
            })
            .collect();

        nodes.push(TableNode {
            table: table_name.clone(),
            is_root: table.is_root,
            rows,
        });

        for (column_name, column) in &table.columns {
            let source_port = port_index(&order, column_name);
            for reference in column.references() {
                edges.push(ReferenceEdge {
                    source_table: table_name.clone(),
                    source_port,
                    kind: reference.kind,
                    target_table: reference.table,
                    target_port: 0,
                });
            }
        }
    }

    SchemaGraph { nodes, edges }
}
