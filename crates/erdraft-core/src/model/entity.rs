//! Entities and their attributes.

use serde::Serialize;

/// A named field of an [`Entity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    name: String,
    is_primary: bool,
    is_foreign: bool,
}

impl Attribute {
    /// Create a plain (non-key) attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_primary: false,
            is_foreign: false,
        }
    }

    /// Create a primary key attribute.
    pub fn primary(name: impl Into<String>) -> Self {
        Self::new(name).with_primary(true)
    }

    /// Set whether this attribute is part of the primary key.
    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Set whether this attribute references another entity.
    ///
    /// Nothing in the parser sets this; it exists for callers building
    /// models by hand.
    pub fn with_foreign(mut self, is_foreign: bool) -> Self {
        self.is_foreign = is_foreign;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_foreign(&self) -> bool {
        self.is_foreign
    }
}

/// A named record type with an ordered list of attributes.
///
/// Attribute order is the declaration order and is preserved by every
/// output format. Multiple primary attributes are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    name: String,
    attributes: Vec<Attribute>,
}

impl Entity {
    /// Create a new entity from its name and attributes.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Iterate over the primary key attributes.
    pub fn primary_keys(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|attr| attr.is_primary())
    }
}
