//! The upstream text-generation seam.

use crate::error::GenerateError;

/// Instructions sent ahead of the user's text, describing the grammar the
/// reply must follow.
pub const INSTRUCTION_PREAMBLE: &str = "\
Extract entities and relationships from the given text.
Format the response as follows:

Entity: EntityName [attribute1, attribute2, ...]
Relationship: Entity1 -- relationship_name --> Entity2 (cardinality)

Mark primary key attributes with a trailing `*`.

Example:
Entity: Hotel [id*, name, location]
Entity: Room [id*, hotel_id, room_number, price]
Entity: Customer [id*, name, email]
Entity: Booking [id*, customer_id, hotel_id, booking_date]

Relationship: Hotel -- has --> Room (1:N)
Relationship: Customer -- makes --> Booking (1:N)
Relationship: Booking -- belongs_to --> Hotel (1:1)

Do not include explanations, just return the structured output.";

/// A service that rewrites free-form text into structured text.
///
/// Implementations make a single blocking request and do not retry.
pub trait TextGenerator {
    /// Send `preamble` as instructions and `text` as the user input,
    /// returning the raw reply.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the service is unreachable, rejects the
    /// request, or replies with something that cannot be decoded.
    fn generate(&self, preamble: &str, text: &str) -> Result<String, GenerateError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str, &str) -> Result<String, GenerateError>,
{
    fn generate(&self, preamble: &str, text: &str) -> Result<String, GenerateError> {
        self(preamble, text)
    }
}
