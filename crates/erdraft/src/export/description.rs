//! DOT description text.
//!
//! The text is built from the [`Model`] alone and carries the same nodes,
//! labels and edges as the raster image. Cardinality is not written.
//! Relationship endpoints are written as-is, without checking them against
//! declared entities.

use std::fmt::Write as _;

use erdraft_core::model::Model;

use crate::{label, structure::RANKDIR};

/// Build the DOT description of `model`.
///
/// ```
/// let model = erdraft_parser::parse("Entity: A []\nRelationship: A -- self --> A");
/// let dot = erdraft::export::description::describe(&model);
///
/// assert!(dot.starts_with("digraph ERD {\nrankdir=LR;\n"));
/// assert!(dot.contains("\"A\" -> \"A\" [label=\"self\"];\n"));
/// assert!(dot.ends_with("}\n"));
/// ```
pub fn describe(model: &Model) -> String {
    let mut dot = format!("digraph ERD {{\nrankdir={RANKDIR};\n");

    for entity in model.entities() {
        let _ = writeln!(
            dot,
            "\"{}\" [shape=plaintext, label=<{}>];",
            quoted(entity.name()),
            label::render_label(entity)
        );
    }

    for relationship in model.relationships() {
        let _ = writeln!(
            dot,
            "\"{}\" -> \"{}\" [label=\"{}\"];",
            quoted(relationship.entity1()),
            quoted(relationship.entity2()),
            quoted(relationship.relation())
        );
    }

    dot.push_str("}\n");
    dot
}

/// Escape a value for a double-quoted DOT string.
fn quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
