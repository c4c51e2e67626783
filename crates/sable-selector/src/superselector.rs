//! Default superselector checks.
//!
//! Selector A is a superselector of B when every element B matches is also
//! matched by A: `.a` is a superselector of `.a.b`, and `.x .y` of
//! `.x > .z .y`. The checks are conservative, so a `false` answer may be a
//! superselector the rules below do not recognize.

use std::slice;

use crate::ast::{
    Combinator, ComplexComponent, ComplexSelector, CompoundSelector, PseudoSelector,
    SelectorList, SimpleSelector,
};

/// Whether every selector in `subsumed` is matched by some selector in
/// `candidates`.
pub(crate) fn list_is_superselector(
    candidates: &[ComplexSelector],
    subsumed: &[ComplexSelector],
) -> bool {
    subsumed.iter().all(|complex| {
        candidates
            .iter()
            .any(|candidate| complex_is_superselector(&candidate.components, &complex.components))
    })
}

/// Whether `complex1` matches every element `complex2` matches.
///
/// Walks `complex1` left to right, finding for each of its compounds the
/// earliest stretch of `complex2` it covers, then checks that the
/// combinators after both are compatible.
pub(crate) fn complex_is_superselector(
    complex1: &[ComplexComponent],
    complex2: &[ComplexComponent],
) -> bool {
    // Selectors with trailing combinators are neither superselectors nor
    // subselectors.
    if !matches!(complex1.last(), Some(ComplexComponent::Compound(_)))
        || !matches!(complex2.last(), Some(ComplexComponent::Compound(_)))
    {
        return false;
    }

    let mut i1 = 0;
    let mut i2 = 0;
    loop {
        let remaining1 = complex1.len() - i1;
        let remaining2 = complex2.len() - i2;
        if remaining1 == 0 || remaining2 == 0 || remaining1 > remaining2 {
            return false;
        }

        let ComplexComponent::Compound(compound1) = &complex1[i1] else {
            return false;
        };
        if remaining1 == 1 {
            let Some(ComplexComponent::Compound(compound2)) = complex2.last() else {
                return false;
            };
            return compound_is_superselector(compound1, compound2, &complex2[i2..complex2.len() - 1]);
        }

        // Stop before consuming all of complex2: complex1 has more than one
        // component left, and they all need something to match.
        let mut after = i2 + 1;
        while after < complex2.len() {
            if let ComplexComponent::Compound(compound2) = &complex2[after - 1] {
                let parents = complex2.get(i2 + 1..after - 1).unwrap_or_default();
                if compound_is_superselector(compound1, compound2, parents) {
                    break;
                }
            }
            after += 1;
        }
        if after == complex2.len() {
            return false;
        }

        match (&complex1[i1 + 1], &complex2[after]) {
            (ComplexComponent::Combinator(combinator1), ComplexComponent::Combinator(combinator2)) => {
                // `.a ~ .b` covers `.a + .b`; otherwise the combinators must match.
                let compatible = match combinator1 {
                    Combinator::FollowingSibling => *combinator2 != Combinator::Child,
                    _ => combinator1 == combinator2,
                };
                // `.a > .c` does not cover `.a > .b > .c` even though `.c`
                // covers `.b > .c`.
                if !compatible || (remaining1 == 3 && remaining2 > 3) {
                    return false;
                }
                i1 += 2;
                i2 = after + 1;
            }
            (ComplexComponent::Combinator(_), ComplexComponent::Compound(_)) => return false,
            (ComplexComponent::Compound(_), ComplexComponent::Combinator(combinator2)) => {
                // A descendant step covers a child step, but no sibling step.
                if *combinator2 != Combinator::Child {
                    return false;
                }
                i1 += 1;
                i2 = after + 1;
            }
            (ComplexComponent::Compound(_), ComplexComponent::Compound(_)) => {
                i1 += 1;
                i2 = after;
            }
        }
    }
}

/// Whether `compound1` matches every element `compound2` matches.
///
/// `parents` are the components of `compound2`'s complex selector that sit
/// between the part already matched and `compound2`, used by `:is()` and
/// friends whose argument may span several compounds.
pub(crate) fn compound_is_superselector(
    compound1: &CompoundSelector,
    compound2: &CompoundSelector,
    parents: &[ComplexComponent],
) -> bool {
    let members_covered = compound1.simple_selectors.iter().all(|simple1| match simple1 {
        SimpleSelector::Pseudo(pseudo1) if pseudo1.selector.is_some() => {
            selector_pseudo_is_superselector(pseudo1, compound2, parents)
        }
        _ => simple_is_superselector_of_compound(simple1, compound2),
    });
    if !members_covered {
        return false;
    }

    // compound1 can't cover a pseudo-element it doesn't share.
    compound2.simple_selectors.iter().all(|simple2| match simple2 {
        SimpleSelector::Pseudo(pseudo2) if pseudo2.is_element() && pseudo2.selector.is_none() => {
            simple_is_superselector_of_compound(simple2, compound1)
        }
        _ => true,
    })
}

/// Whether some member of `compound` implies `simple`.
fn simple_is_superselector_of_compound(simple: &SimpleSelector, compound: &CompoundSelector) -> bool {
    compound.simple_selectors.iter().any(|their_simple| {
        if simple == their_simple {
            return true;
        }
        // `:is(.a.b, .a.c)` implies `.a`.
        let SimpleSelector::Pseudo(pseudo) = their_simple else {
            return false;
        };
        let Some(selector) = &pseudo.selector else {
            return false;
        };
        pseudo.is_subselector_pseudo()
            && selector.components.iter().all(|complex| {
                matches!(
                    complex.components.as_slice(),
                    [ComplexComponent::Compound(only)] if only.simple_selectors.contains(simple)
                )
            })
    })
}

/// Whether the selector pseudo `pseudo1` covers everything `compound2`
/// matches.
fn selector_pseudo_is_superselector(
    pseudo1: &PseudoSelector,
    compound2: &CompoundSelector,
    parents: &[ComplexComponent],
) -> bool {
    let Some(selector1) = &pseudo1.selector else {
        return false;
    };

    match pseudo1.normalized_name() {
        "is" | "matches" | "any" | "where" => {
            if selector_pseudo_args(compound2, &pseudo1.name, true)
                .any(|selector2| list_is_superselector(&selector1.components, &selector2.components))
            {
                return true;
            }
            let mut subject = parents.to_vec();
            subject.push(ComplexComponent::Compound(compound2.clone()));
            selector1
                .components
                .iter()
                .any(|complex1| complex_is_superselector(&complex1.components, &subject))
        }
        "has" | "host" | "host-context" => selector_pseudo_args(compound2, &pseudo1.name, true)
            .any(|selector2| list_is_superselector(&selector1.components, &selector2.components)),
        "slotted" => selector_pseudo_args(compound2, &pseudo1.name, false)
            .any(|selector2| list_is_superselector(&selector1.components, &selector2.components)),
        "not" => selector1.components.iter().all(|complex| {
            compound2
                .simple_selectors
                .iter()
                .any(|simple2| not_is_implied_by(complex, simple2, &pseudo1.name))
        }),
        "current" => selector_pseudo_args(compound2, &pseudo1.name, true)
            .any(|selector2| selector2 == selector1),
        "nth-child" | "nth-last-child" => compound2.simple_selectors.iter().any(|simple2| {
            matches!(
                simple2,
                SimpleSelector::Pseudo(pseudo2)
                    if pseudo2.name == pseudo1.name
                        && pseudo2.argument == pseudo1.argument
                        && pseudo2.selector.as_ref().is_some_and(|selector2| {
                            list_is_superselector(&selector1.components, &selector2.components)
                        })
            )
        }),
        _ => false,
    }
}

/// Whether `simple2` guarantees an element does not match `complex`, the
/// argument of a `:not()` named `not_name`.
///
/// `div` rules out `:not(span)`, `#a` rules out `:not(#b)`, and a narrower
/// `:not()` rules out a wider one.
fn not_is_implied_by(complex: &ComplexSelector, simple2: &SimpleSelector, not_name: &str) -> bool {
    match simple2 {
        SimpleSelector::Type(_) => complex.last_compound().is_some_and(|compound1| {
            compound1
                .simple_selectors
                .iter()
                .any(|simple1| matches!(simple1, SimpleSelector::Type(_)) && simple1 != simple2)
        }),
        SimpleSelector::Id(_) => complex.last_compound().is_some_and(|compound1| {
            compound1
                .simple_selectors
                .iter()
                .any(|simple1| matches!(simple1, SimpleSelector::Id(_)) && simple1 != simple2)
        }),
        SimpleSelector::Pseudo(pseudo2) if pseudo2.name == not_name => {
            pseudo2.selector.as_ref().is_some_and(|selector2| {
                list_is_superselector(&selector2.components, slice::from_ref(complex))
            })
        }
        _ => false,
    }
}

/// The nested selector lists of every pseudo named `name` in `compound`.
fn selector_pseudo_args<'a>(
    compound: &'a CompoundSelector,
    name: &'a str,
    is_class: bool,
) -> impl Iterator<Item = &'a SelectorList> + 'a {
    compound.simple_selectors.iter().filter_map(move |simple| match simple {
        SimpleSelector::Pseudo(pseudo) if pseudo.is_class == is_class && pseudo.name == name => {
            pseudo.selector.as_ref()
        }
        _ => None,
    })
}
