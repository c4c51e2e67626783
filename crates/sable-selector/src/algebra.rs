//! List-level unification and superselector checks.
//!
//! Both operations are built on two pairwise primitives supplied by a
//! [`SelectorAlgebra`]. [`DefaultAlgebra`] is used unless the caller passes
//! its own, for example the extension engine's full weaving implementation.

use crate::ast::{ComplexComponent, ComplexSelector, SelectorList};
use crate::{superselector, unify};

/// The pairwise primitives the list operations delegate to.
pub trait SelectorAlgebra {
    /// Unify two complex selectors given as component sequences.
    ///
    /// Returns the selectors matching exactly the elements both match
    /// (possibly none), or `None` if the intersection has no finite selector
    /// representation.
    fn unify_complex(
        &self,
        complex1: &[ComplexComponent],
        complex2: &[ComplexComponent],
    ) -> Option<Vec<Vec<ComplexComponent>>>;

    /// Whether every selector in `subsumed` is matched by some selector in
    /// `candidates`.
    fn list_is_superselector(
        &self,
        candidates: &[ComplexSelector],
        subsumed: &[ComplexSelector],
    ) -> bool;
}

/// The algebra shipped with this crate. See the `unify` and
/// `superselector` modules for the rules it follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAlgebra;

impl SelectorAlgebra for DefaultAlgebra {
    fn unify_complex(
        &self,
        complex1: &[ComplexComponent],
        complex2: &[ComplexComponent],
    ) -> Option<Vec<Vec<ComplexComponent>>> {
        unify::unify_complex(complex1, complex2)
    }

    fn list_is_superselector(
        &self,
        candidates: &[ComplexSelector],
        subsumed: &[ComplexSelector],
    ) -> bool {
        superselector::list_is_superselector(candidates, subsumed)
    }
}

impl SelectorList {
    /// A selector list matching exactly the elements matched by both `self`
    /// and `other`, using [`DefaultAlgebra`].
    ///
    /// Returns `None` if no such selector list can be written.
    #[must_use]
    pub fn unify(&self, other: &Self) -> Option<Self> {
        self.unify_with(other, &DefaultAlgebra)
    }

    /// [`SelectorList::unify`] with an explicit algebra.
    ///
    /// Every pair of alternatives is unified, `self`'s alternatives in the
    /// outer loop, and the results are concatenated in that order. Empty
    /// component sequences returned by the algebra are skipped.
    #[must_use]
    pub fn unify_with<A: SelectorAlgebra + ?Sized>(&self, other: &Self, algebra: &A) -> Option<Self> {
        let unified: Vec<ComplexSelector> = self
            .components
            .iter()
            .flat_map(|complex1| other.components.iter().map(move |complex2| (complex1, complex2)))
            .filter_map(|(complex1, complex2)| {
                algebra.unify_complex(&complex1.components, &complex2.components)
            })
            .flatten()
            .filter_map(|components| match ComplexSelector::new(components, false) {
                Ok(complex) => Some(complex),
                Err(err) => {
                    tracing::debug!(%err, "skipping empty unification result");
                    None
                }
            })
            .collect();

        tracing::trace!(left = %self, right = %other, results = unified.len(), "unified selector lists");
        Self::new(unified).ok()
    }

    /// Whether `self` matches every element `other` matches, using
    /// [`DefaultAlgebra`].
    #[must_use]
    pub fn is_superselector(&self, other: &Self) -> bool {
        self.is_superselector_with(other, &DefaultAlgebra)
    }

    /// [`SelectorList::is_superselector`] with an explicit algebra.
    #[must_use]
    pub fn is_superselector_with<A: SelectorAlgebra + ?Sized>(&self, other: &Self, algebra: &A) -> bool {
        algebra.list_is_superselector(&self.components, &other.components)
    }
}
