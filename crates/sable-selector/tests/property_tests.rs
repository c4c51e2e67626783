//! Property tests for the algebraic laws of selector lists.

use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use sable_selector::{
    Combinator, ComplexComponent, ComplexSelector, CompoundSelector, SelectorList, SimpleSelector,
};

const NAMES: [&str; 4] = ["a", "b", "c", "d"];

fn below(g: &mut Gen, bound: usize) -> usize {
    usize::arbitrary(g) % bound
}

fn arbitrary_compound(g: &mut Gen) -> CompoundSelector {
    let simples = (0..=below(g, 3))
        .map(|_| SimpleSelector::Class((*g.choose(&NAMES).unwrap()).to_string()))
        .collect();
    CompoundSelector::new(simples).unwrap()
}

fn arbitrary_complex(g: &mut Gen) -> ComplexSelector {
    let mut components = vec![ComplexComponent::Compound(arbitrary_compound(g))];
    for _ in 0..below(g, 3) {
        if bool::arbitrary(g) {
            components.push(ComplexComponent::Combinator(Combinator::Child));
        }
        components.push(ComplexComponent::Compound(arbitrary_compound(g)));
    }
    ComplexSelector::new(components, bool::arbitrary(g)).unwrap()
}

/// A list of class-only selectors with no parent references.
#[derive(Debug, Clone)]
struct Selectors(SelectorList);

impl Arbitrary for Selectors {
    fn arbitrary(g: &mut Gen) -> Self {
        let complexes = (0..=below(g, 3)).map(|_| arbitrary_complex(g)).collect();
        Self(SelectorList::new(complexes).unwrap())
    }
}

/// A single compound selector such as `.a.c`.
#[derive(Debug, Clone)]
struct Compound(SelectorList);

impl Arbitrary for Compound {
    fn arbitrary(g: &mut Gen) -> Self {
        let complex =
            ComplexSelector::new(vec![ComplexComponent::Compound(arbitrary_compound(g))], false)
                .unwrap();
        Self(SelectorList::new(vec![complex]).unwrap())
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[quickcheck]
fn prop_list_is_superselector_of_itself(list: Selectors) -> bool {
    list.0.is_superselector(&list.0)
}

#[quickcheck]
fn prop_line_breaks_do_not_change_identity(list: Selectors) -> bool {
    let flipped = SelectorList::new(
        list.0
            .components()
            .iter()
            .map(|complex| {
                ComplexSelector::new(complex.components().to_vec(), !complex.line_break()).unwrap()
            })
            .collect(),
    )
    .unwrap();
    flipped == list.0 && hash_of(&flipped) == hash_of(&list.0)
}

#[quickcheck]
fn prop_resolution_without_references_keeps_child(child: Selectors, parent: Selectors) -> bool {
    let top_level = child.0.resolve_parent_selectors(None, true).unwrap();
    let explicit_only = child.0.resolve_parent_selectors(Some(&parent.0), false).unwrap();
    matches!(top_level, Cow::Borrowed(_)) && *explicit_only == child.0
}

#[quickcheck]
fn prop_implicit_parent_multiplies_alternatives(child: Selectors, parent: Selectors) -> bool {
    let resolved = child.0.resolve_parent_selectors(Some(&parent.0), true).unwrap();
    resolved.components().len() == child.0.components().len() * parent.0.components().len()
}

#[quickcheck]
fn prop_unify_with_itself_is_identity(list: Selectors) -> bool {
    let first = SelectorList::new(vec![list.0.components()[0].clone()]).unwrap();
    first.unify(&first) == Some(first)
}

#[quickcheck]
fn prop_unified_compound_is_covered_by_both_inputs(left: Compound, right: Compound) -> bool {
    left.0
        .unify(&right.0)
        .is_some_and(|unified| left.0.is_superselector(&unified) && right.0.is_superselector(&unified))
}
