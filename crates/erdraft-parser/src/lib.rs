//! # Erdraft Parser
//!
//! Parser for erdraft structured text. Input is line oriented; each line is
//! either an entity declaration, a relationship declaration, or noise:
//!
//! ```text
//! Entity: Hotel [id*, name, location]
//! Entity: Room [id*, hotel_id, price]
//! Relationship: Hotel -- has --> Room (1:N)
//! ```
//!
//! Parsing is tolerant. Lines that do not match the grammar are skipped
//! without error, so a caller cannot tell "no content" apart from "all
//! content malformed" by looking at the returned [`Model`].
//!
//! ## Usage
//!
//! ```
//! let model = erdraft_parser::parse("Entity: Hotel [id*, name]");
//! assert_eq!(model.entity_count(), 1);
//! ```

mod error;
mod generate;
mod parser;

pub use error::GenerateError;
pub use generate::{INSTRUCTION_PREAMBLE, TextGenerator};
pub use parser::{Line, classify};

use log::{debug, error, info, trace};

use erdraft_core::model::Model;

/// Parse structured text into a [`Model`].
///
/// Every line is trimmed and classified independently. Matched entity lines
/// replace any earlier entity with the same name; matched relationship lines
/// are appended. Unmatched lines are skipped.
///
/// # Example
///
/// ```
/// let model = erdraft_parser::parse(
///     "Entity: X [a]\nnot a declaration\nEntity: X [b]",
/// );
/// let x = model.entity("X").unwrap();
/// assert_eq!(x.attributes().len(), 1);
/// assert_eq!(x.attributes()[0].name(), "b");
/// ```
pub fn parse(text: &str) -> Model {
    let mut model = Model::new();

    for (index, raw) in text.lines().enumerate() {
        match classify(raw.trim()) {
            Line::Entity(entity) => {
                debug!(
                    entity = entity.name(),
                    attributes = entity.attributes().len();
                    "Registering entity"
                );
                if model.insert_entity(entity).is_some() {
                    debug!(line_number = index + 1; "Entity redeclared, previous definition replaced");
                }
            }
            Line::Relationship(relationship) => {
                debug!(
                    from = relationship.entity1(),
                    to = relationship.entity2(),
                    relation = relationship.relation();
                    "Registering relationship"
                );
                model.push_relationship(relationship);
            }
            Line::Unmatched => {
                trace!(line_number = index + 1; "Skipping unmatched line");
            }
        }
    }

    info!(
        entities = model.entity_count(),
        relationships = model.relationships().len();
        "Structured text parsed"
    );

    model
}

/// Turn free-form text into a [`Model`] through a [`TextGenerator`].
///
/// The generator receives [`INSTRUCTION_PREAMBLE`] and `text`; its reply is
/// untrusted and goes through [`parse`]. If the generator fails the failure
/// is logged and an empty model is returned, so an empty result may mean
/// either "nothing described" or "upstream unavailable".
pub fn extract(text: &str, generator: &dyn TextGenerator) -> Model {
    info!("Requesting structured text from generator");

    match generator.generate(INSTRUCTION_PREAMBLE, text) {
        Ok(output) => {
            trace!(output = output.as_str(); "Generator output");
            parse(&output)
        }
        Err(err) => {
            error!("Text generation failed: {err}");
            Model::new()
        }
    }
}
