use crate::schema::TableSchema;

/// Column traversal order for a table: the table-name sentinel first, then the
/// column names in lexicographic order.
///
/// The sentinel at position 0 anchors edges that target the table itself.
/// Lexicographic order comes from the `BTreeMap` backing the column map, so
/// two traversals of the same table always agree on port numbering.
pub fn column_order(table_name: &str, table: &TableSchema) -> Vec<String> {
    let mut order = Vec::with_capacity(table.columns.len() + 1);
    order.push(table_name.to_string());
    order.extend(table.columns.keys().cloned());
    order
}

/// Position of `column` within an order computed by [`column_order`].
///
/// Unknown names resolve to 0: a reference through a column we cannot place
/// anchors at the table's header row instead of being dropped.
pub fn port_index(order: &[String], column: &str) -> usize {
    order.iter().position(|name| name == column).unwrap_or(0)
}
