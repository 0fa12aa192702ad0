//! Table labels for entity nodes.
//!
//! Every output format shows an entity as the same Graphviz HTML-like table:
//! a header row with the entity name, then one row per attribute holding an
//! optional `PK` marker, the attribute name and an inferred display type.

use std::fmt::{self, Display, Write as _};

use erdraft_core::model::{Attribute, Entity};

/// Display type guessed from an attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    String,
    Float,
    Bool,
}

impl From<DataType> for &'static str {
    fn from(val: DataType) -> Self {
        match val {
            DataType::Integer => "integer",
            DataType::String => "string",
            DataType::Float => "float",
            DataType::Bool => "bool",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Guess a display type from an attribute name.
///
/// Case-insensitive substring rules, first match wins:
/// `id` → integer, `name` → string, `price` → float,
/// `bool` / `eligible` → bool, anything else → string.
///
/// ```
/// # use erdraft::label::{DataType, infer_type};
/// assert_eq!(infer_type("price_id"), DataType::Integer);
/// assert_eq!(infer_type("unit_price"), DataType::Float);
/// ```
pub fn infer_type(name: &str) -> DataType {
    let name = name.to_lowercase();
    if name.contains("id") {
        DataType::Integer
    } else if name.contains("name") {
        DataType::String
    } else if name.contains("price") {
        DataType::Float
    } else if name.contains("bool") || name.contains("eligible") {
        DataType::Bool
    } else {
        DataType::String
    }
}

/// Render the table markup for one entity.
///
/// The result is the inner HTML-like label (starting with `<TABLE`); DOT
/// output wraps it in `<` `>`. Attribute rows follow declaration order.
pub fn render_label(entity: &Entity) -> String {
    let mut label =
        String::from(r#"<TABLE BORDER="1" CELLBORDER="1" CELLSPACING="0" CELLPADDING="4">"#);
    let _ = write!(
        label,
        r#"<TR><TD COLSPAN="2" BGCOLOR="lightgrey" ALIGN="CENTER"><B>{}</B></TD></TR>"#,
        Escaped(entity.name())
    );

    for attribute in entity.attributes() {
        push_attribute_row(&mut label, attribute);
    }

    label.push_str("</TABLE>");
    label
}

fn push_attribute_row(label: &mut String, attribute: &Attribute) {
    let marker = if attribute.is_primary() { "<B>PK </B>" } else { "" };
    let _ = write!(
        label,
        r#"<TR><TD ALIGN="LEFT">{marker}<B>{}</B></TD><TD ALIGN="LEFT">{}</TD></TR>"#,
        Escaped(attribute.name()),
        infer_type(attribute.name()),
    );
}

/// Escapes `&`, `<`, `>` and `"` for HTML-like label and XML text content.
pub(crate) struct Escaped<'a>(pub(crate) &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
