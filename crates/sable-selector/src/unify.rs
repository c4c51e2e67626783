//! Default pairwise unification.
//!
//! Unifying two selectors produces selectors that match exactly the elements
//! both match. The rightmost compounds (the subjects) are merged into one
//! compound; the ancestors written before them are woven together.

use std::iter;

use crate::ast::{ComplexComponent, CompoundSelector, PseudoSelector, SimpleSelector};

/// Unify two complex selectors given as component sequences.
///
/// Returns `None` when no finite selector matches the intersection, for
/// example `div` and `span`, or when either selector ends in a combinator.
pub(crate) fn unify_complex(
    complex1: &[ComplexComponent],
    complex2: &[ComplexComponent],
) -> Option<Vec<Vec<ComplexComponent>>> {
    let (Some((ComplexComponent::Compound(base1), prefix1)), Some((ComplexComponent::Compound(base2), prefix2))) =
        (complex1.split_last(), complex2.split_last())
    else {
        return None;
    };

    let base = unify_compound(&base1.simple_selectors, &base2.simple_selectors)?;
    let base = ComplexComponent::Compound(CompoundSelector::new(base).ok()?);

    let woven = weave_prefixes(prefix1, prefix2)?;
    Some(
        woven
            .into_iter()
            .map(|mut prefix| {
                prefix.push(base.clone());
                prefix
            })
            .collect(),
    )
}

/// Merge two compounds into one matching both, folding the members of
/// `compound2` into `compound1`.
pub(crate) fn unify_compound(
    compound1: &[SimpleSelector],
    compound2: &[SimpleSelector],
) -> Option<Vec<SimpleSelector>> {
    compound2
        .iter()
        .try_fold(compound1.to_vec(), |unified, simple| unify_simple(simple, &unified))
}

/// Add `simple` to `compound`, or `None` if they cannot both hold.
fn unify_simple(simple: &SimpleSelector, compound: &[SimpleSelector]) -> Option<Vec<SimpleSelector>> {
    match simple {
        SimpleSelector::Type(_) | SimpleSelector::Universal => unify_element(simple, compound),
        SimpleSelector::Id(id) => {
            let conflicts = compound
                .iter()
                .any(|other| matches!(other, SimpleSelector::Id(other_id) if other_id != id));
            if conflicts {
                None
            } else {
                Some(insert_before_pseudos(simple, compound))
            }
        }
        SimpleSelector::Pseudo(pseudo) => unify_pseudo(pseudo, simple, compound),
        _ => Some(insert_before_pseudos(simple, compound)),
    }
}

/// Element selectors (`div`, `*`) always lead a compound.
fn unify_element(simple: &SimpleSelector, compound: &[SimpleSelector]) -> Option<Vec<SimpleSelector>> {
    match compound.split_first() {
        Some((first, rest))
            if matches!(first, SimpleSelector::Type(_) | SimpleSelector::Universal) =>
        {
            let unified = match (simple, first) {
                (SimpleSelector::Universal, other) | (other, SimpleSelector::Universal) => other,
                (SimpleSelector::Type(name1), SimpleSelector::Type(name2)) if name1 == name2 => {
                    simple
                }
                _ => return None,
            };
            Some(iter::once(unified).chain(rest).cloned().collect())
        }
        _ if matches!(simple, SimpleSelector::Universal) && !compound.is_empty() => {
            Some(compound.to_vec())
        }
        _ => Some(iter::once(simple).chain(compound).cloned().collect()),
    }
}

/// Pseudo-classes go before any pseudo-element, and a compound may hold at
/// most one pseudo-element.
fn unify_pseudo(
    pseudo: &PseudoSelector,
    simple: &SimpleSelector,
    compound: &[SimpleSelector],
) -> Option<Vec<SimpleSelector>> {
    if let [SimpleSelector::Universal] = compound {
        return Some(vec![simple.clone()]);
    }
    if compound.contains(simple) {
        return Some(compound.to_vec());
    }

    let mut result = Vec::with_capacity(compound.len() + 1);
    let mut added = false;
    for other in compound {
        if matches!(other, SimpleSelector::Pseudo(other_pseudo) if other_pseudo.is_element()) {
            if pseudo.is_element() {
                return None;
            }
            if !added {
                result.push(simple.clone());
                added = true;
            }
        }
        result.push(other.clone());
    }
    if !added {
        result.push(simple.clone());
    }
    Some(result)
}

/// Insert `simple` ahead of the first pseudo selector, or at the end.
fn insert_before_pseudos(simple: &SimpleSelector, compound: &[SimpleSelector]) -> Vec<SimpleSelector> {
    if let [SimpleSelector::Universal] = compound {
        return vec![simple.clone()];
    }
    if compound.contains(simple) {
        return compound.to_vec();
    }

    let position = compound
        .iter()
        .position(|other| matches!(other, SimpleSelector::Pseudo(_)))
        .unwrap_or(compound.len());
    let mut result = compound.to_vec();
    result.insert(position, simple.clone());
    result
}

/// Weave the ancestor chains written before two unified subjects.
///
/// Without trailing combinators either chain may come first, so both
/// orders are returned. A single trailing combinator binds its chain to the
/// subject, so that chain goes last. When both chains end in the same
/// combinator the compounds before it must match the same element, so they
/// are merged and the rest of both chains is woven in front. Two different
/// trailing combinators cannot be expressed.
fn weave_prefixes(
    prefix1: &[ComplexComponent],
    prefix2: &[ComplexComponent],
) -> Option<Vec<Vec<ComplexComponent>>> {
    if prefix1.is_empty() || prefix1 == prefix2 {
        return Some(vec![prefix2.to_vec()]);
    }
    if prefix2.is_empty() {
        return Some(vec![prefix1.to_vec()]);
    }

    let trailing1 = prefix1.last().is_some_and(ComplexComponent::is_combinator);
    let trailing2 = prefix2.last().is_some_and(ComplexComponent::is_combinator);
    match (trailing1, trailing2) {
        (false, false) => Some(vec![
            [prefix1, prefix2].concat(),
            [prefix2, prefix1].concat(),
        ]),
        (true, false) => Some(vec![[prefix2, prefix1].concat()]),
        (false, true) => Some(vec![[prefix1, prefix2].concat()]),
        (true, true) => weave_shared_combinator(prefix1, prefix2),
    }
}

/// Weave two chains that both end in a combinator, as in `.x >` and `.y >`.
///
/// Returns `None` if the combinators differ, if either chain has no
/// compound before its combinator, or if those compounds do not unify.
fn weave_shared_combinator(
    prefix1: &[ComplexComponent],
    prefix2: &[ComplexComponent],
) -> Option<Vec<Vec<ComplexComponent>>> {
    let (
        Some((ComplexComponent::Combinator(combinator1), init1)),
        Some((ComplexComponent::Combinator(combinator2), init2)),
    ) = (prefix1.split_last(), prefix2.split_last())
    else {
        return None;
    };
    if combinator1 != combinator2 {
        return None;
    }

    let (
        Some((ComplexComponent::Compound(compound1), rest1)),
        Some((ComplexComponent::Compound(compound2), rest2)),
    ) = (init1.split_last(), init2.split_last())
    else {
        return None;
    };
    let merged = unify_compound(&compound1.simple_selectors, &compound2.simple_selectors)?;
    let merged = ComplexComponent::Compound(CompoundSelector::new(merged).ok()?);

    let woven = weave_prefixes(rest1, rest2)?;
    Some(
        woven
            .into_iter()
            .map(|mut prefix| {
                prefix.push(merged.clone());
                prefix.push(ComplexComponent::Combinator(*combinator1));
                prefix
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Combinator;

    fn class(name: &str) -> SimpleSelector {
        SimpleSelector::Class(name.to_string())
    }

    fn ty(name: &str) -> SimpleSelector {
        SimpleSelector::Type(name.to_string())
    }

    fn render(compound: &[SimpleSelector]) -> String {
        compound.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_unify_compound_appends_classes() {
        let unified = unify_compound(&[class("a")], &[class("b")]).unwrap();
        assert_eq!(render(&unified), ".a.b");
    }

    #[test]
    fn test_unify_compound_deduplicates() {
        let unified = unify_compound(&[class("a"), class("b")], &[class("b")]).unwrap();
        assert_eq!(render(&unified), ".a.b");
    }

    #[test]
    fn test_type_selector_moves_to_front() {
        let unified = unify_compound(&[class("a")], &[ty("div")]).unwrap();
        assert_eq!(render(&unified), "div.a");
    }

    #[test]
    fn test_universal_yields_to_type() {
        let unified = unify_compound(&[SimpleSelector::Universal], &[ty("p"), class("x")]).unwrap();
        assert_eq!(render(&unified), "p.x");

        let unified = unify_compound(&[SimpleSelector::Universal], &[class("x")]).unwrap();
        assert_eq!(render(&unified), ".x");
    }

    #[test]
    fn test_different_types_do_not_unify() {
        assert_eq!(unify_compound(&[ty("div")], &[ty("span")]), None);
    }

    #[test]
    fn test_different_ids_do_not_unify() {
        let id = |name: &str| SimpleSelector::Id(name.to_string());
        assert_eq!(unify_compound(&[id("a")], &[id("b")]), None);
        assert!(unify_compound(&[id("a")], &[id("a")]).is_some());
    }

    #[test]
    fn test_pseudo_classes_precede_pseudo_elements() {
        let before = SimpleSelector::Pseudo(PseudoSelector::element("before"));
        let hover = SimpleSelector::Pseudo(PseudoSelector::class("hover"));
        let unified = unify_compound(&[class("a"), before], &[hover, class("b")]).unwrap();
        assert_eq!(render(&unified), ".a.b:hover::before");
    }

    fn render_chain(components: &[ComplexComponent]) -> String {
        components
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_shared_trailing_combinator_merges_compounds() {
        let x = ComplexComponent::Compound(CompoundSelector::new(vec![class("x")]).unwrap());
        let y = ComplexComponent::Compound(CompoundSelector::new(vec![class("y")]).unwrap());
        let p = ComplexComponent::Compound(CompoundSelector::new(vec![class("p")]).unwrap());
        let child = ComplexComponent::Combinator(Combinator::Child);

        let woven = weave_prefixes(&[p, x, child.clone()], &[y, child]).unwrap();
        let rendered: Vec<_> = woven.iter().map(|prefix| render_chain(prefix)).collect();
        assert_eq!(rendered, vec![".p .x.y >"]);
    }

    #[test]
    fn test_shared_combinator_needs_unifiable_compounds() {
        let div = ComplexComponent::Compound(CompoundSelector::new(vec![ty("div")]).unwrap());
        let span = ComplexComponent::Compound(CompoundSelector::new(vec![ty("span")]).unwrap());
        let sibling = ComplexComponent::Combinator(Combinator::NextSibling);
        assert_eq!(weave_prefixes(&[div, sibling.clone()], &[span, sibling]), None);
    }

    #[test]
    fn test_two_pseudo_elements_do_not_unify() {
        let before = SimpleSelector::Pseudo(PseudoSelector::element("before"));
        let after = SimpleSelector::Pseudo(PseudoSelector::element("after"));
        assert_eq!(unify_compound(&[before], &[after]), None);
    }
}
