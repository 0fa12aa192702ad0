//! Line grammar for structured text.
//!
//! ```text
//! entity_line       := "Entity:" WS identifier WS "[" attr_list "]"
//! attr_list         := attr ("," WS attr)*
//! attr              := WS? identifier "*"?
//! relationship_line := "Relationship:" WS identifier WS "--" WS label WS "-->" WS identifier WS ["(" cardinality ")"]
//! ```
//!
//! Each line is matched as a prefix; text after a complete construct is
//! ignored. The public entry point is [`classify`].

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, delimited, opt, preceded},
    error::ParserError,
    token::take_while,
};

use erdraft_core::model::{Attribute, Entity, Relationship};

type Input<'src> = &'src str;
type PResult<O> = winnow::Result<O>;

/// Classification of a single line of structured text.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// An `Entity:` declaration.
    Entity(Entity),
    /// A `Relationship:` declaration.
    Relationship(Relationship),
    /// Anything else, including keyword lines that fail the grammar.
    Unmatched,
}

/// Classify one line (already trimmed) against the grammar.
///
/// # Example
///
/// ```
/// use erdraft_parser::{Line, classify};
///
/// assert!(matches!(classify("Entity: Room [id*, price]"), Line::Entity(_)));
/// assert!(matches!(classify("Entity: ###"), Line::Unmatched));
/// ```
pub fn classify(line: &str) -> Line {
    let mut input = line;
    alt((
        entity_line.map(Line::Entity),
        relationship_line.map(Line::Relationship),
    ))
    .parse_next(&mut input)
    .unwrap_or(Line::Unmatched)
}

/// Parse a word made of Unicode letters, Unicode digits and underscores.
fn identifier<'src>(input: &mut Input<'src>) -> PResult<&'src str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

/// Parse `token` with optional surrounding blanks.
fn padded<'src>(token: &'static str) -> impl FnMut(&mut Input<'src>) -> PResult<&'src str> {
    move |input: &mut Input<'src>| delimited(space0, token, space0).parse_next(input)
}

/// Parse `Entity: Name [attr, attr*, ...]`.
///
/// The attribute list runs to the last `]` on the line.
fn entity_line(input: &mut Input<'_>) -> PResult<Entity> {
    let name = preceded(("Entity:", space0), identifier).parse_next(input)?;
    let body = preceded((space0, '['), until_last(']')).parse_next(input)?;

    Ok(Entity::new(name, attribute_list(body)))
}

/// Split an attribute list body into attributes.
///
/// Any `*` in a token marks the attribute primary and is removed from its
/// name. Tokens that are empty after trimming are dropped.
fn attribute_list(body: &str) -> Vec<Attribute> {
    body.split(',')
        .filter_map(|token| {
            let is_primary = token.contains('*');
            let name = token.replace('*', "");
            let name = name.trim();
            (!name.is_empty()).then(|| Attribute::new(name).with_primary(is_primary))
        })
        .collect()
}

/// Parse `Relationship: A -- label --> B (cardinality)`.
fn relationship_line(input: &mut Input<'_>) -> PResult<Relationship> {
    let entity1 = preceded(("Relationship:", space0), identifier).parse_next(input)?;
    let relation = preceded(padded("--"), identifier).parse_next(input)?;
    let entity2 = preceded(padded("-->"), identifier).parse_next(input)?;
    let cardinality = opt(preceded(space0, cardinality)).parse_next(input)?;

    let cardinality = cardinality
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Ok(Relationship::new(entity1, entity2, relation, cardinality))
}

/// Parse `(...)` up to the last `)` on the line, returning the inside.
fn cardinality<'src>(input: &mut Input<'src>) -> PResult<&'src str> {
    preceded('(', until_last(')')).parse_next(input)
}

/// Take everything before the last `close` in the input and consume the
/// delimiter itself.
fn until_last<'src>(close: char) -> impl FnMut(&mut Input<'src>) -> PResult<&'src str> {
    move |input: &mut Input<'src>| {
        let text: &'src str = *input;
        let Some(end) = text.rfind(close) else {
            return Err(ParserError::from_input(input));
        };
        *input = &text[end + close.len_utf8()..];
        Ok(&text[..end])
    }
}
