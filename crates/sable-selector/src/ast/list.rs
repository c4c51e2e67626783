//! Selector lists.

use std::fmt;
use std::hash::{Hash, Hasher};

use sable_common::SourceSpan;

use crate::ast::ComplexSelector;
use crate::error::{SelectorError, SelectorResult};
use crate::value::{ListSeparator, Value};

/// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
///
/// "A selector list is a comma-separated list of selectors."
///
/// A list always holds at least one complex selector. Equality and hashing
/// compare the complex selectors in order, so `.a, .b` and `.b, .a` are
/// different values even though they match the same elements. The span is
/// only used for error messages and is ignored by both.
#[derive(Debug, Clone)]
pub struct SelectorList {
    pub(crate) components: Vec<ComplexSelector>,
    pub(crate) span: Option<SourceSpan>,
}

impl SelectorList {
    /// Build a selector list from its alternatives.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyList`] if `components` is empty.
    pub fn new(components: Vec<ComplexSelector>) -> SelectorResult<Self> {
        if components.is_empty() {
            return Err(SelectorError::EmptyList);
        }
        Ok(Self {
            components,
            span: None,
        })
    }

    /// Record where this list was written.
    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// The complex selectors, in source order.
    #[must_use]
    pub fn components(&self) -> &[ComplexSelector] {
        &self.components
    }

    /// Where this list was written, if known.
    #[must_use]
    pub const fn span(&self) -> Option<&SourceSpan> {
        self.span.as_ref()
    }

    /// Whether `&` appears anywhere in this list, including inside the
    /// arguments of selector pseudos such as `:not(&.b)`.
    #[must_use]
    pub fn contains_parent_selector(&self) -> bool {
        self.components
            .iter()
            .any(ComplexSelector::contains_parent_selector)
    }

    /// Whether every alternative is invisible, so the rule would emit nothing.
    #[must_use]
    pub fn is_invisible(&self) -> bool {
        self.components.iter().all(ComplexSelector::is_invisible)
    }

    /// Export this list for script-level introspection.
    ///
    /// The result is a comma-separated list with one space-separated list per
    /// complex selector, holding one unquoted string per component:
    /// `.a > .b, .c` becomes `((".a" ">" ".b"), (".c"))`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::List {
            separator: ListSeparator::Comma,
            elements: self
                .components
                .iter()
                .map(|complex| Value::List {
                    separator: ListSeparator::Space,
                    elements: complex
                        .components
                        .iter()
                        .map(|component| Value::unquoted(component.to_string()))
                        .collect(),
                })
                .collect(),
        }
    }
}

impl PartialEq for SelectorList {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for SelectorList {}

impl Hash for SelectorList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, complex) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{complex}")?;
        }
        Ok(())
    }
}
