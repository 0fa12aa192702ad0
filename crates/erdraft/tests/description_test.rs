//! Property tests for the DOT description of parsed documents.

use proptest::prelude::*;

use erdraft::{DiagramBuilder, export::description::describe};

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}"
}

proptest! {
    #[test]
    fn description_has_one_line_per_declaration(
        entities in prop::collection::btree_map(
            identifier(),
            prop::collection::vec((identifier(), any::<bool>()), 0..5),
            1..6,
        ),
        edges in prop::collection::vec((0usize..6, identifier(), 0usize..6, prop::option::of("[1N]:[1NM]")), 0..6),
    ) {
        let names: Vec<&String> = entities.keys().collect();
        let mut source = String::new();

        for (name, attrs) in &entities {
            let attrs: Vec<String> = attrs
                .iter()
                .map(|(attr, primary)| if *primary { format!("{attr}*") } else { attr.clone() })
                .collect();
            source.push_str(&format!("Entity: {name} [{}]\n", attrs.join(", ")));
        }

        let mut expected_edges = Vec::new();
        for (from, relation, to, cardinality) in &edges {
            let from = names[from % names.len()];
            let to = names[to % names.len()];
            match cardinality {
                Some(c) => source.push_str(&format!("Relationship: {from} -- {relation} --> {to} ({c})\n")),
                None => source.push_str(&format!("Relationship: {from} -- {relation} --> {to}\n")),
            }
            expected_edges.push(format!("\"{from}\" -> \"{to}\" [label=\"{relation}\"];"));
        }

        let dot = describe(&DiagramBuilder::default().parse(&source));
        let lines: Vec<&str> = dot.lines().collect();

        prop_assert!(dot.ends_with("}\n"), "dot output should end with a closing brace");
        prop_assert_eq!(lines.len(), 3 + entities.len() + edges.len());
        prop_assert_eq!(lines[0], "digraph ERD {");
        prop_assert_eq!(lines[1], "rankdir=LR;");
        prop_assert_eq!(lines[lines.len() - 1], "}");

        let node_lines = &lines[2..2 + entities.len()];
        for (line, name) in node_lines.iter().zip(entities.keys()) {
            let prefix = format!("\"{name}\" [shape=plaintext, label=<");
            prop_assert!(line.starts_with(&prefix), "{line} should declare {name}");
            prop_assert!(line.ends_with(">];"));
        }

        let edge_lines = &lines[2 + entities.len()..lines.len() - 1];
        prop_assert_eq!(edge_lines, expected_edges.as_slice());

        // Cardinality is the only source of ':' in the document.
        prop_assert!(!dot.contains(':'));
    }
}
