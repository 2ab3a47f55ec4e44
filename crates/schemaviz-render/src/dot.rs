use schemaviz_core::{NodeRow, RefKind, SchemaGraph, TableNode};

const HEADER_BG: &str = "turquoise1";

/// Render a schema graph as a Graphviz DOT document.
///
/// Nodes are HTML-like tables with one row per column port; edges anchor to
/// those ports and are colored by reference kind.
pub fn render_dot(graph: &SchemaGraph) -> String {
    let mut out = String::from("digraph schema {\n");

    for node in &graph.nodes {
        out.push_str(&format!(
            "  \"{}\" [shape=none label=<<table border=\"0\" cellspacing=\"0\">{}</table>>];\n",
            node.table,
            node_label(node),
        ));
    }

    for edge in &graph.edges {
        out.push_str(&format!(
            "  \"{}\":f{} -> \"{}\":f{} [label=\"{}\" color=\"{}\" splines=\"polyline\"];\n",
            edge.source_table,
            edge.source_port,
            edge.target_table,
            edge.target_port,
            edge.kind.as_str(),
            edge_color(edge.kind),
        ));
    }

    out.push_str("}\n");
    out
}

fn node_label(node: &TableNode) -> String {
    let mut label = String::new();
    for row in &node.rows {
        label.push_str(&format!(
            "<tr><td port=\"f{}\" border=\"1\" bgcolor=\"{}\">{}</td></tr>",
            row.port,
            row_background(row),
            row_text(node, row),
        ));
    }
    label
}

fn row_background(row: &NodeRow) -> &'static str {
    if row.port == 0 { HEADER_BG } else { "transparent" }
}

fn row_text(node: &TableNode, row: &NodeRow) -> String {
    let mut text = escape_html(&row.name);
    if row.port == 0 && node.is_root {
        text.push_str(" (root)");
    }
    if row.is_index {
        text.push_str(" (index)");
    }
    text
}

fn edge_color(kind: RefKind) -> &'static str {
    match kind {
        RefKind::Key => "red",
        RefKind::Value => "blue",
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
