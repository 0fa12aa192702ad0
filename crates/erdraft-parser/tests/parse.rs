//! Integration tests for the public parsing entry points.

use proptest::prelude::*;

use erdraft_parser::{GenerateError, INSTRUCTION_PREAMBLE, TextGenerator, extract, parse};

struct Canned(&'static str);

impl TextGenerator for Canned {
    fn generate(&self, preamble: &str, _text: &str) -> Result<String, GenerateError> {
        assert_eq!(preamble, INSTRUCTION_PREAMBLE);
        Ok(self.0.to_string())
    }
}

struct Offline;

impl TextGenerator for Offline {
    fn generate(&self, _preamble: &str, _text: &str) -> Result<String, GenerateError> {
        Err(GenerateError::Request("connection refused".to_string()))
    }
}

#[test]
fn test_extract_parses_generator_reply() {
    let reply = "Sure! Here it is:\nEntity: Hotel [id*, name]\nEntity: Room [id*, price]\nRelationship: Hotel -- has --> Room (1:N)";
    let model = extract("A hotel has many rooms.", &Canned(reply));

    assert_eq!(model.entity_count(), 2);
    assert_eq!(model.relationships()[0].cardinality(), "1:N");
}

#[test]
fn test_extract_yields_empty_model_on_generator_failure() {
    let model = extract("A hotel has many rooms.", &Offline);
    assert!(model.is_empty());
}

#[test]
fn test_closure_generator() {
    let generator = |_: &str, text: &str| -> Result<String, GenerateError> {
        Ok(format!("Entity: {text} [id*]"))
    };
    let model = extract("Widget", &generator);

    assert!(model.entity("Widget").is_some());
}

#[test]
fn test_preamble_describes_grammar() {
    assert!(INSTRUCTION_PREAMBLE.contains("Entity: EntityName [attribute1, attribute2, ...]"));
    assert!(INSTRUCTION_PREAMBLE.contains("-->"));
}

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}"
}

proptest! {
    #[test]
    fn well_formed_documents_parse_completely(
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

        for (from, relation, to, cardinality) in &edges {
            let from = names[from % names.len()];
            let to = names[to % names.len()];
            match cardinality {
                Some(c) => source.push_str(&format!("Relationship: {from} -- {relation} --> {to} ({c})\n")),
                None => source.push_str(&format!("Relationship: {from} -- {relation} --> {to}\n")),
            }
        }

        let model = parse(&source);

        prop_assert_eq!(model.entity_count(), entities.len());
        prop_assert_eq!(model.relationships().len(), edges.len());

        for (name, attrs) in &entities {
            let entity = model.entity(name).expect("declared entity must be present");
            prop_assert_eq!(entity.attributes().len(), attrs.len());
            for (parsed, (attr, primary)) in entity.attributes().iter().zip(attrs) {
                prop_assert_eq!(parsed.name(), attr.as_str());
                prop_assert_eq!(parsed.is_primary(), *primary);
            }
        }

        for (rel, (_, relation, _, cardinality)) in model.relationships().iter().zip(&edges) {
            prop_assert_eq!(rel.relation(), relation.as_str());
            prop_assert_eq!(rel.cardinality(), cardinality.as_deref().unwrap_or("1:1"));
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,200}") {
        let _ = parse(&text);
    }
}
