//! Rendering of schema graphs into Graphviz DOT.

pub mod dot;

pub use dot::render_dot;
