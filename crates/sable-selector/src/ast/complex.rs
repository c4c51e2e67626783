//! Complex selectors and combinators.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ast::CompoundSelector;
use crate::error::{SelectorError, SelectorResult};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// The descendant combinator is whitespace, so it has no variant here: two
/// adjacent compound selectors in a [`ComplexSelector`] are in a descendant
/// relationship.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum Combinator {
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately), where A and B share the
    /// same parent."
    #[strum(serialize = "~")]
    FollowingSibling,
}

/// One step of a complex selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComplexComponent {
    /// A compound selector.
    Compound(CompoundSelector),
    /// An explicit combinator.
    Combinator(Combinator),
}

impl ComplexComponent {
    /// The compound selector, if this component is one.
    #[must_use]
    pub const fn as_compound(&self) -> Option<&CompoundSelector> {
        match self {
            Self::Compound(compound) => Some(compound),
            Self::Combinator(_) => None,
        }
    }

    /// Whether this component is a combinator.
    #[must_use]
    pub const fn is_combinator(&self) -> bool {
        matches!(self, Self::Combinator(_))
    }
}

impl From<CompoundSelector> for ComplexComponent {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<Combinator> for ComplexComponent {
    fn from(combinator: Combinator) -> Self {
        Self::Combinator(combinator)
    }
}

impl fmt::Display for ComplexComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Combinator(combinator) => write!(f, "{combinator}"),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// Components are stored left to right as written. Leading and trailing
/// combinators (`> .a`, `.a >`) are representable because nested rules may
/// use them.
///
/// Example: `div.container > ul.nav li` is stored as
/// ```text
/// [div.container] [>] [ul.nav] [li]
/// ```
///
/// `line_break` records whether the selector was followed by a newline in
/// the source. It only affects formatting and takes no part in equality or
/// hashing.
#[derive(Debug, Clone)]
pub struct ComplexSelector {
    pub(crate) components: Vec<ComplexComponent>,
    pub(crate) line_break: bool,
}

impl ComplexSelector {
    /// Build a complex selector from its components.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyComplex`] if `components` is empty.
    pub fn new(components: Vec<ComplexComponent>, line_break: bool) -> SelectorResult<Self> {
        if components.is_empty() {
            return Err(SelectorError::EmptyComplex);
        }
        Ok(Self {
            components,
            line_break,
        })
    }

    /// The components, left to right.
    #[must_use]
    pub fn components(&self) -> &[ComplexComponent] {
        &self.components
    }

    /// Whether a newline followed this selector in the source.
    #[must_use]
    pub const fn line_break(&self) -> bool {
        self.line_break
    }

    /// The rightmost component, if it is a compound selector.
    #[must_use]
    pub fn last_compound(&self) -> Option<&CompoundSelector> {
        self.components.last().and_then(ComplexComponent::as_compound)
    }

    /// Whether any compound in this selector is invisible.
    #[must_use]
    pub fn is_invisible(&self) -> bool {
        self.components
            .iter()
            .filter_map(ComplexComponent::as_compound)
            .any(CompoundSelector::is_invisible)
    }

    /// Whether any compound references `&`, directly or inside a pseudo.
    pub(crate) fn contains_parent_selector(&self) -> bool {
        self.components
            .iter()
            .filter_map(ComplexComponent::as_compound)
            .any(CompoundSelector::contains_parent_selector)
    }

    /// Whether two combinators appear with no compound between them, as in
    /// `.a > > .b`. Such selectors are kept but are not valid CSS.
    pub(crate) fn has_adjacent_combinators(&self) -> bool {
        self.components
            .windows(2)
            .any(|pair| pair[0].is_combinator() && pair[1].is_combinator())
    }
}

impl PartialEq for ComplexSelector {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for ComplexSelector {}

impl Hash for ComplexSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
