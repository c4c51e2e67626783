//! Script-visible values produced by selector introspection.

use std::fmt;

use serde::Serialize;

/// Separator between the elements of a [`Value::List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
pub enum ListSeparator {
    /// `a, b, c`
    #[strum(serialize = ", ")]
    Comma,
    /// `a b c`
    #[strum(serialize = " ")]
    Space,
}

/// A generic value as seen by stylesheet functions such as `selector-parse()`.
///
/// Only the shapes the selector algebra exports are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Value {
    /// An ordered list of values.
    List {
        /// How the elements are separated.
        separator: ListSeparator,
        /// The elements, in order.
        elements: Vec<Value>,
    },
    /// A string token.
    String {
        /// The text of the string.
        text: String,
        /// Whether the string prints with quotes.
        quoted: bool,
    },
}

impl Value {
    /// An unquoted string, printed verbatim.
    #[must_use]
    pub fn unquoted(text: impl Into<String>) -> Self {
        Self::String {
            text: text.into(),
            quoted: false,
        }
    }

    /// The elements of a list, or `None` for a string.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List { elements, .. } => Some(elements),
            Self::String { .. } => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String { text, quoted: true } => write!(f, "\"{text}\""),
            Self::String { text, quoted: false } => f.write_str(text),
            Self::List {
                separator,
                elements,
            } => {
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{separator}")?;
                    }
                    write!(f, "{element}")?;
                }
                Ok(())
            }
        }
    }
}
