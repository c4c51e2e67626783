//! Parent selector resolution.
//!
//! Nested style rules are flattened by substituting the enclosing rule's
//! selector for every `&` in the child selector:
//!
//! ```text
//! .card {            .card .title { ... }
//!   .title { ... }   .card-body { ... }
//!   &-body { ... }   .card:not(.card-active) { ... }
//!   &:not(&-active) { ... }
//! }
//! ```
//!
//! A child alternative that never mentions `&` is prefixed with the parent
//! instead, unless the caller turns implicit parents off. Every parent
//! alternative produces its own output, so a child with two `&` against a
//! two-alternative parent expands to four selectors.

use std::borrow::Cow;

use sable_common::{SourceSpan, warn_once};

use crate::ast::{
    ComplexComponent, ComplexSelector, CompoundSelector, SelectorList, SimpleSelector,
};
use crate::error::{SelectorError, SelectorResult};

impl SelectorList {
    /// Replace every `&` in this list with `parent`.
    ///
    /// With no parent (a top-level rule) the list is returned as is, borrowed.
    /// With a parent, each alternative that does not reference `&` is
    /// prefixed by every parent alternative when `implicit_parent` is set, and
    /// left alone otherwise. Selectors nested inside pseudo arguments such as
    /// `:not(&-x)` are resolved too, but never implicitly prefixed.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::TopLevelParent`] if `parent` is `None` and this
    ///   list references `&`.
    /// - [`SelectorError::IncompatibleParent`] if `&` carries a suffix or is
    ///   followed by more simple selectors, and a parent alternative ends in
    ///   a combinator.
    /// - [`SelectorError::InvalidParent`] if a suffix lands on a simple
    ///   selector that cannot be extended, such as `*` or `[href]`.
    pub fn resolve_parent_selectors(
        &self,
        parent: Option<&Self>,
        implicit_parent: bool,
    ) -> SelectorResult<Cow<'_, Self>> {
        let Some(parent) = parent else {
            if self.contains_parent_selector() {
                return Err(SelectorError::top_level_parent(self.span.clone()));
            }
            return Ok(Cow::Borrowed(self));
        };
        tracing::trace!(child = %self, %parent, implicit_parent, "resolving parent selectors");

        let mut resolved = Vec::new();
        for complex in &self.components {
            if complex.contains_parent_selector() {
                resolved.extend(resolve_complex(complex, parent, self.span.as_ref())?);
            } else if implicit_parent {
                resolved.extend(parent.components.iter().map(|parent_complex| ComplexSelector {
                    components: [
                        parent_complex.components.as_slice(),
                        complex.components.as_slice(),
                    ]
                    .concat(),
                    line_break: complex.line_break || parent_complex.line_break,
                }));
            } else {
                resolved.push(complex.clone());
            }
        }

        for complex in resolved.iter().filter(|complex| complex.has_adjacent_combinators()) {
            warn_once(
                "selector",
                &format!("\"{complex}\" has consecutive combinators and is not valid CSS"),
            );
        }

        let mut list = Self::new(resolved)?;
        list.span.clone_from(&self.span);
        tracing::debug!(resolved = %list, "resolved parent selectors");
        Ok(Cow::Owned(list))
    }
}

/// Expand one child alternative that references `&`.
///
/// Walks the components left to right, keeping every partial selector built
/// so far. A compound that resolves to several fragments multiplies the
/// partial selectors; anything else is appended to all of them.
fn resolve_complex(
    complex: &ComplexSelector,
    parent: &SelectorList,
    span: Option<&SourceSpan>,
) -> SelectorResult<Vec<ComplexSelector>> {
    let mut partials = vec![(Vec::<ComplexComponent>::new(), false)];

    for component in &complex.components {
        let fragments = match component {
            ComplexComponent::Compound(compound) => resolve_compound(compound, parent, span)?,
            ComplexComponent::Combinator(_) => None,
        };

        match fragments {
            Some(fragments) => {
                partials = partials
                    .iter()
                    .flat_map(|(prefix, line_break)| {
                        fragments.iter().map(move |fragment| {
                            (
                                [prefix.as_slice(), fragment.components.as_slice()].concat(),
                                *line_break || fragment.line_break,
                            )
                        })
                    })
                    .collect();
            }
            None => {
                for (prefix, _) in &mut partials {
                    prefix.push(component.clone());
                }
            }
        }
    }

    partials
        .into_iter()
        .map(|(components, line_break)| ComplexSelector::new(components, line_break))
        .collect()
}

/// Resolve a single compound against `parent`.
///
/// Returns `None` when the compound neither starts with `&` nor holds a
/// pseudo whose argument references `&`; the caller keeps it unchanged.
/// Otherwise returns the fragments that replace it, in parent order.
fn resolve_compound(
    compound: &CompoundSelector,
    parent: &SelectorList,
    span: Option<&SourceSpan>,
) -> SelectorResult<Option<Vec<ComplexSelector>>> {
    let has_pseudo_parent = compound.has_pseudo_parent();
    if !has_pseudo_parent && !compound.first().is_parent() {
        return Ok(None);
    }

    let members: Cow<'_, [SimpleSelector]> = if has_pseudo_parent {
        Cow::Owned(
            compound
                .simple_selectors
                .iter()
                .map(|simple| resolve_pseudo_argument(simple, parent, span))
                .collect::<SelectorResult<_>>()?,
        )
    } else {
        Cow::Borrowed(&compound.simple_selectors)
    };

    let SimpleSelector::Parent { suffix } = compound.first() else {
        let compound = CompoundSelector::new(members.into_owned())?;
        return Ok(Some(vec![ComplexSelector::new(vec![compound.into()], false)?]));
    };

    if members.len() == 1 && suffix.is_none() {
        return Ok(Some(parent.components.clone()));
    }

    parent
        .components
        .iter()
        .map(|parent_complex| {
            let Some((ComplexComponent::Compound(last), init)) =
                parent_complex.components.split_last()
            else {
                return Err(SelectorError::incompatible_parent(
                    parent_complex.to_string(),
                    span.cloned(),
                ));
            };

            let mut simple_selectors = last.simple_selectors.clone();
            if let (Some(suffix), Some(tail)) = (suffix, simple_selectors.last_mut()) {
                *tail = tail.with_suffix(suffix).map_err(|err| err.or_span(span))?;
            }
            simple_selectors.extend(members.iter().skip(1).cloned());

            let mut components = init.to_vec();
            components.push(CompoundSelector::new(simple_selectors)?.into());
            ComplexSelector::new(components, parent_complex.line_break)
        })
        .collect::<SelectorResult<Vec<_>>>()
        .map(Some)
}

/// Resolve `&` inside a selector pseudo's argument, leaving every other
/// simple selector untouched. Arguments are never implicitly prefixed, and
/// errors without a location of their own report `span`.
fn resolve_pseudo_argument(
    simple: &SimpleSelector,
    parent: &SelectorList,
    span: Option<&SourceSpan>,
) -> SelectorResult<SimpleSelector> {
    let SimpleSelector::Pseudo(pseudo) = simple else {
        return Ok(simple.clone());
    };
    match pseudo.selector() {
        Some(nested) if nested.contains_parent_selector() => {
            let resolved = nested
                .resolve_parent_selectors(Some(parent), false)
                .map_err(|err| err.or_span(span))?;
            Ok(SimpleSelector::Pseudo(pseudo.with_selector(resolved.into_owned())))
        }
        _ => Ok(simple.clone()),
    }
}
