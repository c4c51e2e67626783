//! Simple selectors: the leaves of the selector tree.

use std::fmt;

use crate::ast::SelectorList;
use crate::error::{SelectorError, SelectorResult};

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single condition on an element, plus the two
/// preprocessor-only forms: the parent reference `&` and placeholders `%name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// The parent reference `&`, replaced by the enclosing rule's selector
    /// during nesting resolution.
    ///
    /// Examples: `&`, `&-title`, `&__item`
    Parent {
        /// Text written directly after the `&`, appended to the parent's
        /// trailing simple selector.
        suffix: Option<String>,
    },

    /// A placeholder selector, only ever used as an `@extend` target and
    /// never emitted to CSS on its own.
    ///
    /// Example: `%button-base`
    Placeholder(String),

    /// [§ 3.6 Pseudo-classes and pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `::before`, `:nth-child(2n+1)`, `:not(.foo)`
    Pseudo(PseudoSelector),

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    ///
    /// Examples: `div`, `p`, `span`, `body`, `h1`
    Type(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    ///
    /// Example: `*`
    Universal,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.highlight`, `.btn`, `.nav-item`
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#header`, `#nav-bar`
    Id(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[type=text]`, `[class~=active]`, `[lang|=en]`
    Attribute(AttributeSelector),
}

/// Attribute selectors per [§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Values are kept exactly as written, including any quotes, so that
/// `[type="text"]` and `[type=text]` stay distinct and print back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeSelector {
    /// `[attr]`: "Represents an element with the att attribute"
    Exists(String),

    /// `[attr=value]`: "Represents an element with the att attribute whose value
    /// is exactly 'val'."
    Equals(String, String),

    /// `[attr~=value]`: "Represents an element with the att attribute whose value
    /// is a whitespace-separated list of words, one of which is exactly 'val'."
    Includes(String, String),

    /// `[attr|=value]`: "Represents an element with the att attribute, its value
    /// either being exactly 'val' or beginning with 'val' immediately followed by '-'."
    DashMatch(String, String),

    /// `[attr^=value]`: "Represents an element with the att attribute whose value
    /// begins with the prefix 'val'."
    PrefixMatch(String, String),

    /// `[attr$=value]`: "Represents an element with the att attribute whose value
    /// ends with the suffix 'val'."
    SuffixMatch(String, String),

    /// `[attr*=value]`: "Represents an element with the att attribute whose value
    /// contains at least one instance of the substring 'val'."
    SubstringMatch(String, String),
}

/// A pseudo-class or pseudo-element, optionally taking an argument.
///
/// Selector pseudos such as `:not(...)` or `:is(...)` own a nested
/// [`SelectorList`]; `:nth-child(2n+1 of .foo)` carries both a textual
/// argument and a nested list. The argument is printed verbatim before the
/// list, so it holds the trailing `of` itself (`2n+1 of`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PseudoSelector {
    pub(crate) name: String,
    pub(crate) is_class: bool,
    pub(crate) argument: Option<String>,
    pub(crate) selector: Option<SelectorList>,
}

/// Pseudo-classes whose nested selector can be satisfied by the enclosing
/// compound alone.
const SUBSELECTOR_PSEUDOS: [&str; 6] = ["is", "matches", "where", "any", "nth-child", "nth-last-child"];

impl PseudoSelector {
    /// A pseudo-class such as `:hover`.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_class: true,
            argument: None,
            selector: None,
        }
    }

    /// A pseudo-element such as `::before`.
    #[must_use]
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            is_class: false,
            ..Self::class(name)
        }
    }

    /// Attach a textual argument, as in `:nth-child(2n+1)`.
    ///
    /// When a nested list follows, the argument includes the separating
    /// keyword: `2n+1 of` for `:nth-child(2n+1 of .foo)`.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Replace the nested selector list, as in `:not(.foo)`.
    #[must_use]
    pub fn with_selector(&self, selector: SelectorList) -> Self {
        Self {
            selector: Some(selector),
            ..self.clone()
        }
    }

    /// The name as written, without colons.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name with any vendor prefix removed (`-moz-any` becomes `any`).
    #[must_use]
    pub fn normalized_name(&self) -> &str {
        let name = self.name.as_str();
        if !name.starts_with('-') || name.starts_with("--") {
            return name;
        }
        name[1..].find('-').map_or(name, |dash| &name[dash + 2..])
    }

    /// Whether this is a pseudo-class (`:`) rather than a pseudo-element (`::`).
    #[must_use]
    pub const fn is_class(&self) -> bool {
        self.is_class
    }

    /// Whether this is a pseudo-element (`::`).
    #[must_use]
    pub const fn is_element(&self) -> bool {
        !self.is_class
    }

    /// The textual argument, if any.
    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// The nested selector list, if any.
    #[must_use]
    pub const fn selector(&self) -> Option<&SelectorList> {
        self.selector.as_ref()
    }

    /// Whether this pseudo may be satisfied by a compound that matches every
    /// alternative of its nested selector.
    pub(crate) fn is_subselector_pseudo(&self) -> bool {
        SUBSELECTOR_PSEUDOS.contains(&self.normalized_name())
    }

    /// Whether the nested selector list references `&` anywhere.
    pub(crate) fn contains_parent_selector(&self) -> bool {
        self.selector
            .as_ref()
            .is_some_and(SelectorList::contains_parent_selector)
    }
}

impl SimpleSelector {
    /// Whether this is the parent reference `&`, with or without a suffix.
    #[must_use]
    pub const fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }

    /// Whether this selector keeps its enclosing complex selector out of the
    /// emitted CSS.
    ///
    /// Placeholders are invisible. A selector pseudo is invisible when its
    /// nested list is, except for `:not`, which matches everything its
    /// argument does not.
    #[must_use]
    pub fn is_invisible(&self) -> bool {
        match self {
            Self::Placeholder(_) => true,
            Self::Pseudo(pseudo) => {
                pseudo.name != "not"
                    && pseudo
                        .selector
                        .as_ref()
                        .is_some_and(SelectorList::is_invisible)
            }
            _ => false,
        }
    }

    /// Return a copy of this selector with `suffix` appended to its name.
    ///
    /// This is how `&-suffix` merges into the parent's last simple selector:
    /// `.a` with `-foo` becomes `.a-foo`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidParent`] for selectors that have no
    /// name to extend: `*`, attribute selectors, `&` itself, and pseudos that
    /// take an argument.
    pub fn with_suffix(&self, suffix: &str) -> SelectorResult<Self> {
        match self {
            Self::Type(name) => Ok(Self::Type(format!("{name}{suffix}"))),
            Self::Class(name) => Ok(Self::Class(format!("{name}{suffix}"))),
            Self::Id(name) => Ok(Self::Id(format!("{name}{suffix}"))),
            Self::Placeholder(name) => Ok(Self::Placeholder(format!("{name}{suffix}"))),
            Self::Pseudo(pseudo) if pseudo.argument.is_none() && pseudo.selector.is_none() => {
                Ok(Self::Pseudo(PseudoSelector {
                    name: format!("{}{suffix}", pseudo.name),
                    ..pseudo.clone()
                }))
            }
            Self::Pseudo(_) | Self::Universal | Self::Attribute(_) | Self::Parent { .. } => {
                Err(SelectorError::invalid_parent(self.to_string(), None))
            }
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent { suffix } => write!(f, "&{}", suffix.as_deref().unwrap_or_default()),
            Self::Placeholder(name) => write!(f, "%{name}"),
            Self::Pseudo(pseudo) => write!(f, "{pseudo}"),
            Self::Type(name) => f.write_str(name),
            Self::Universal => f.write_str("*"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Attribute(attribute) => write!(f, "{attribute}"),
        }
    }
}

impl fmt::Display for PseudoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_class { ":" } else { "::" })?;
        f.write_str(&self.name)?;
        match (&self.argument, &self.selector) {
            (None, None) => Ok(()),
            (Some(argument), None) => write!(f, "({argument})"),
            (None, Some(selector)) => write!(f, "({selector})"),
            (Some(argument), Some(selector)) => write!(f, "({argument} {selector})"),
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, operator, value) = match self {
            Self::Exists(name) => return write!(f, "[{name}]"),
            Self::Equals(name, value) => (name, "=", value),
            Self::Includes(name, value) => (name, "~=", value),
            Self::DashMatch(name, value) => (name, "|=", value),
            Self::PrefixMatch(name, value) => (name, "^=", value),
            Self::SuffixMatch(name, value) => (name, "$=", value),
            Self::SubstringMatch(name, value) => (name, "*=", value),
        };
        write!(f, "[{name}{operator}{value}]")
    }
}
