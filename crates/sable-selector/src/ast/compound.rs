//! Compound selectors.

use std::fmt;

use crate::ast::SimpleSelector;
use crate::error::{SelectorError, SelectorResult};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// The order is kept as written: `.a.b` and `.b.a` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundSelector {
    pub(crate) simple_selectors: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Build a compound selector from its simple selectors.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyCompound`] if `simple_selectors` is empty.
    pub fn new(simple_selectors: Vec<SimpleSelector>) -> SelectorResult<Self> {
        if simple_selectors.is_empty() {
            return Err(SelectorError::EmptyCompound);
        }
        Ok(Self { simple_selectors })
    }

    /// The simple selectors, in source order.
    #[must_use]
    pub fn simple_selectors(&self) -> &[SimpleSelector] {
        &self.simple_selectors
    }

    /// The leftmost simple selector.
    #[must_use]
    pub fn first(&self) -> &SimpleSelector {
        &self.simple_selectors[0]
    }

    /// Whether any member is invisible (see [`SimpleSelector::is_invisible`]).
    #[must_use]
    pub fn is_invisible(&self) -> bool {
        self.simple_selectors.iter().any(SimpleSelector::is_invisible)
    }

    /// Whether any member is `&`, or a pseudo whose nested list contains one.
    pub(crate) fn contains_parent_selector(&self) -> bool {
        self.simple_selectors.iter().any(|simple| match simple {
            SimpleSelector::Parent { .. } => true,
            SimpleSelector::Pseudo(pseudo) => pseudo.contains_parent_selector(),
            _ => false,
        })
    }

    /// Whether any member is a pseudo whose nested list references `&`.
    pub(crate) fn has_pseudo_parent(&self) -> bool {
        self.simple_selectors
            .iter()
            .any(|simple| matches!(simple, SimpleSelector::Pseudo(pseudo) if pseudo.contains_parent_selector()))
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for simple in &self.simple_selectors {
            write!(f, "{simple}")?;
        }
        Ok(())
    }
}
