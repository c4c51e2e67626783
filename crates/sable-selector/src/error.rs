//! Errors raised while building or transforming selectors.

use sable_common::SourceSpan;
use thiserror::Error;

/// Result alias for selector operations.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Renders an optional span as a ` at <span>` suffix for error messages.
fn at(span: Option<&SourceSpan>) -> String {
    span.map_or_else(String::new, |span| format!(" at {span}"))
}

/// Everything that can go wrong in the selector algebra.
///
/// The `Empty*` variants are invariant violations: a producer handed the
/// algebra an empty sequence, which well-formed parser output never does.
/// The remaining variants are compilation errors the user can fix in their
/// stylesheet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A selector list was built from zero complex selectors.
    #[error("Selector lists may not be empty")]
    EmptyList,

    /// A complex selector was built from zero components.
    #[error("Complex selectors may not be empty")]
    EmptyComplex,

    /// A compound selector was built from zero simple selectors.
    #[error("Compound selectors may not be empty")]
    EmptyCompound,

    /// A style rule with no enclosing rule used `&`.
    #[error("Top-level selectors may not contain the parent selector \"&\"{}", at(.span.as_ref()))]
    TopLevelParent {
        /// Where the offending selector was written.
        span: Option<SourceSpan>,
    },

    /// `&` with a suffix or trailing simple selectors was resolved against a
    /// parent that ends in a combinator.
    #[error("Parent \"{parent}\" is incompatible with this selector{}", at(.span.as_ref()))]
    IncompatibleParent {
        /// The offending parent complex selector, as written.
        parent: String,
        /// Where the child selector was written.
        span: Option<SourceSpan>,
    },

    /// A suffix was applied to a simple selector that cannot take one.
    #[error("Invalid parent selector \"{selector}\"{}", at(.span.as_ref()))]
    InvalidParent {
        /// The simple selector the suffix would have been appended to.
        selector: String,
        /// Where the child selector was written.
        span: Option<SourceSpan>,
    },
}

impl SelectorError {
    /// Top-level `&` error.
    #[must_use]
    pub const fn top_level_parent(span: Option<SourceSpan>) -> Self {
        Self::TopLevelParent { span }
    }

    /// Parent ending in a combinator.
    #[must_use]
    pub fn incompatible_parent(parent: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Self::IncompatibleParent {
            parent: parent.into(),
            span,
        }
    }

    /// Suffix applied to a selector that cannot take one.
    #[must_use]
    pub fn invalid_parent(selector: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Self::InvalidParent {
            selector: selector.into(),
            span,
        }
    }

    /// Whether this error is a broken construction invariant rather than a
    /// problem in the user's stylesheet.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::EmptyList | Self::EmptyComplex | Self::EmptyCompound
        )
    }

    /// The source location attached to a compilation error, if any.
    #[must_use]
    pub const fn span(&self) -> Option<&SourceSpan> {
        match self {
            Self::TopLevelParent { span }
            | Self::IncompatibleParent { span, .. }
            | Self::InvalidParent { span, .. } => span.as_ref(),
            Self::EmptyList | Self::EmptyComplex | Self::EmptyCompound => None,
        }
    }

    /// Attach a span to a compilation error that does not carry one yet.
    #[must_use]
    pub fn or_span(self, fallback: Option<&SourceSpan>) -> Self {
        let fill = |span: Option<SourceSpan>| span.or_else(|| fallback.cloned());
        match self {
            Self::TopLevelParent { span } => Self::TopLevelParent { span: fill(span) },
            Self::IncompatibleParent { parent, span } => Self::IncompatibleParent {
                parent,
                span: fill(span),
            },
            Self::InvalidParent { selector, span } => Self::InvalidParent {
                selector,
                span: fill(span),
            },
            other => other,
        }
    }
}
