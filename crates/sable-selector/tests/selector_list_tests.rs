//! Integration tests for the selector tree: construction, equality, and export.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use sable_common::SourceSpan;
use sable_selector::{
    AttributeSelector, Combinator, ComplexComponent, ComplexSelector, CompoundSelector,
    ListSeparator, PseudoSelector, SelectorError, SelectorList, SimpleSelector, Value,
};
use strum::IntoEnumIterator;

fn class(name: &str) -> SimpleSelector {
    SimpleSelector::Class(name.to_string())
}

fn compound(simples: Vec<SimpleSelector>) -> ComplexComponent {
    ComplexComponent::Compound(CompoundSelector::new(simples).unwrap())
}

fn complex(components: Vec<ComplexComponent>) -> ComplexSelector {
    ComplexSelector::new(components, false).unwrap()
}

/// A single-compound complex selector made of classes, e.g. `.a.b`.
fn classes(names: &[&str]) -> ComplexSelector {
    complex(vec![compound(names.iter().map(|name| class(name)).collect())])
}

fn list(complexes: Vec<ComplexSelector>) -> SelectorList {
    SelectorList::new(complexes).unwrap()
}

fn pseudo_with(name: &str, selector: SelectorList) -> SimpleSelector {
    SimpleSelector::Pseudo(PseudoSelector::class(name).with_selector(selector))
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// Construction

#[test]
fn test_empty_list_is_rejected() {
    assert_eq!(SelectorList::new(Vec::new()), Err(SelectorError::EmptyList));
}

#[test]
fn test_empty_compound_and_complex_are_rejected() {
    assert_eq!(CompoundSelector::new(Vec::new()), Err(SelectorError::EmptyCompound));
    assert_eq!(
        ComplexSelector::new(Vec::new(), true).unwrap_err(),
        SelectorError::EmptyComplex
    );
    assert!(SelectorError::EmptyComplex.is_invariant_violation());
}

#[test]
fn test_construction_preserves_order() {
    let selectors = list(vec![classes(&["c"]), classes(&["a"]), classes(&["b"])]);
    let rendered: Vec<_> = selectors.components().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec![".c", ".a", ".b"]);
}

#[test]
fn test_display_complex_selector() {
    let selector = complex(vec![
        compound(vec![SimpleSelector::Type("div".to_string()), class("container")]),
        ComplexComponent::Combinator(Combinator::Child),
        compound(vec![SimpleSelector::Type("ul".to_string())]),
        compound(vec![
            SimpleSelector::Type("a".to_string()),
            SimpleSelector::Attribute(AttributeSelector::Exists("href".to_string())),
        ]),
    ]);
    assert_eq!(selector.to_string(), "div.container > ul a[href]");
}

#[test]
fn test_combinators_render_as_punctuation() {
    let rendered: Vec<_> = Combinator::iter().map(|combinator| combinator.to_string()).collect();
    assert_eq!(rendered, vec![">", "+", "~"]);
}

// Equality and hashing

#[test]
fn test_same_order_lists_are_equal_and_hash_equal() {
    let first = list(vec![classes(&["a"]), classes(&["b", "c"])]);
    let second = list(vec![classes(&["a"]), classes(&["b", "c"])]);
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn test_reordered_lists_are_not_equal() {
    let first = list(vec![classes(&["a"]), classes(&["b"])]);
    let second = list(vec![classes(&["b"]), classes(&["a"])]);
    assert_ne!(first, second);
}

#[test]
fn test_compound_order_is_significant() {
    assert_ne!(classes(&["a", "b"]), classes(&["b", "a"]));
}

#[test]
fn test_line_break_and_span_do_not_affect_equality() {
    let plain = list(vec![classes(&["a"])]);
    let broken = list(vec![
        ComplexSelector::new(vec![compound(vec![class("a")])], true).unwrap(),
    ])
    .with_span(SourceSpan::new(2, 5));
    assert_eq!(plain, broken);
    assert_eq!(hash_of(&plain), hash_of(&broken));
    assert_eq!(broken.span(), Some(&SourceSpan::new(2, 5)));
}

// Derived predicates

#[test]
fn test_contains_parent_selector_direct() {
    let selectors = list(vec![
        classes(&["a"]),
        complex(vec![compound(vec![SimpleSelector::Parent { suffix: None }, class("b")])]),
    ]);
    assert!(selectors.contains_parent_selector());
    assert!(!list(vec![classes(&["a"])]).contains_parent_selector());
}

#[test]
fn test_contains_parent_selector_nested_in_pseudo() {
    let inner = list(vec![complex(vec![compound(vec![SimpleSelector::Parent {
        suffix: Some("-x".to_string()),
    }])])]);
    let middle = list(vec![complex(vec![compound(vec![pseudo_with("is", inner)])])]);
    let outer = list(vec![complex(vec![compound(vec![class("a"), pseudo_with("not", middle)])])]);
    assert!(outer.contains_parent_selector());
}

#[test]
fn test_placeholder_selectors_are_invisible() {
    let placeholder = complex(vec![compound(vec![SimpleSelector::Placeholder("base".to_string())])]);
    assert!(list(vec![placeholder.clone()]).is_invisible());
    assert!(!list(vec![placeholder, classes(&["a"])]).is_invisible());
}

#[test]
fn test_not_of_placeholder_is_visible() {
    let placeholder = list(vec![complex(vec![compound(vec![SimpleSelector::Placeholder(
        "base".to_string(),
    )])])]);
    let not = list(vec![complex(vec![compound(vec![pseudo_with("not", placeholder.clone())])])]);
    let is = list(vec![complex(vec![compound(vec![pseudo_with("is", placeholder)])])]);
    assert!(!not.is_invisible());
    assert!(is.is_invisible());
}

// Export

#[test]
fn test_to_value_is_comma_list_of_space_lists() {
    let selectors = list(vec![
        complex(vec![
            compound(vec![class("a")]),
            ComplexComponent::Combinator(Combinator::Child),
            compound(vec![class("b")]),
        ]),
        classes(&["c", "d"]),
    ]);

    let value = selectors.to_value();
    let Value::List {
        separator,
        elements,
    } = &value
    else {
        panic!("expected a list, got {value:?}");
    };
    assert_eq!(*separator, ListSeparator::Comma);
    assert_eq!(elements.len(), 2);
    assert_eq!(
        elements[0],
        Value::List {
            separator: ListSeparator::Space,
            elements: vec![Value::unquoted(".a"), Value::unquoted(">"), Value::unquoted(".b")],
        }
    );
    assert_eq!(elements[1].as_list(), Some(&[Value::unquoted(".c.d")][..]));
    assert_eq!(value.to_string(), ".a > .b, .c.d");
}

#[test]
fn test_to_value_serializes_with_unquoted_leaves() {
    let value = list(vec![classes(&["a"])]).to_value();
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "list",
            "separator": "comma",
            "elements": [{
                "type": "list",
                "separator": "space",
                "elements": [{ "type": "string", "text": ".a", "quoted": false }],
            }],
        })
    );
}

#[test]
fn test_to_value_renders_nested_pseudo_arguments() {
    let nested = list(vec![classes(&["x"]), classes(&["y"])]);
    let selectors = list(vec![complex(vec![compound(vec![class("a"), pseudo_with("not", nested)])])]);
    assert_eq!(selectors.to_value().to_string(), ".a:not(.x, .y)");
}
