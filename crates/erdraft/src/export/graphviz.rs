//! Raster rendering through Graphviz.
//!
//! Builds a [`dot_structures::Graph`] from a [`DiagramGraph`] and runs the
//! `dot` executable to produce a PNG. The `dot` binary must be on `PATH`.

use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Node, NodeId, Stmt, Vertex,
};
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::PrinterContext,
};
use log::debug;

use super::{ExportError, Renderer};
use crate::structure::{DiagramGraph, RANKDIR};

/// [`Renderer`] backed by the Graphviz `dot` tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphvizRenderer;

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for GraphvizRenderer {
    fn layout(&self, graph: &DiagramGraph) -> Result<Vec<u8>, ExportError> {
        let dot = to_dot(graph);
        debug!(statements = statement_count(&dot); "Invoking graphviz");

        exec(
            dot,
            &mut PrinterContext::default(),
            vec![CommandArg::Format(Format::Png)],
        )
        .map_err(|err| ExportError::Render(format!("graphviz failed: {err}")))
    }
}

/// Convert the diagram graph into a Graphviz digraph named `ERD`.
fn to_dot(graph: &DiagramGraph) -> Graph {
    let mut stmts = vec![Stmt::GAttribute(GraphAttributes::Graph(vec![attr(
        "rankdir",
        Id::Plain(RANKDIR.to_string()),
    )]))];

    stmts.extend(graph.nodes().iter().map(|node| {
        Stmt::Node(Node {
            id: node_id(node.name()),
            attributes: vec![
                attr("shape", Id::Plain("plaintext".to_string())),
                attr("label", Id::Html(format!("<{}>", node.label()))),
            ],
        })
    }));

    stmts.extend(graph.edges().iter().map(|edge| {
        Stmt::Edge(Edge {
            ty: EdgeTy::Pair(
                Vertex::N(node_id(edge.from())),
                Vertex::N(node_id(edge.to())),
            ),
            attributes: vec![attr("label", escaped(edge.label()))],
        })
    }));

    Graph::DiGraph {
        id: Id::Plain("ERD".to_string()),
        strict: false,
        stmts,
    }
}

fn statement_count(graph: &Graph) -> usize {
    match graph {
        Graph::Graph { stmts, .. } | Graph::DiGraph { stmts, .. } => stmts.len(),
    }
}

fn attr(key: &str, value: Id) -> Attribute {
    Attribute(Id::Plain(key.to_string()), value)
}

fn node_id(name: &str) -> NodeId {
    NodeId(escaped(name), None)
}

fn escaped(value: &str) -> Id {
    Id::Escaped(format!(
        "\"{}\"",
        value.replace('\\', "\\\\").replace('"', "\\\"")
    ))
}
