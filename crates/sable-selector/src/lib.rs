//! Selector algebra for the Sable preprocessor.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector tree** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Simple, compound, and complex selectors and selector lists
//!   - The preprocessor forms `&`, `&-suffix`, and `%placeholder`
//!   - Structural equality and hashing
//!
//! - **Parent resolution**
//!   - Substituting the enclosing rule's selector for `&`
//!   - Implicit parents for selectors without `&`
//!   - `&` nested in pseudo arguments such as `:not(&-active)`
//!
//! - **Unification and superselectors**
//!   - Intersecting two selector lists
//!   - Checking whether one selector list covers another
//!   - A pluggable [`SelectorAlgebra`] for the pairwise primitives
//!
//! - **Introspection**
//!   - Exporting a selector list as a script [`Value`]
//!
//! # Not Implemented
//!
//! - Parsing selector text (the parser builds these trees)
//! - Matching selectors against elements, specificity

/// The pairwise primitives and list-level unification / superselector checks.
pub mod algebra;
/// The selector tree.
pub mod ast;
/// Errors raised by the selector algebra.
pub mod error;
/// Parent selector (`&`) resolution.
pub mod resolve;
/// Default superselector rules.
mod superselector;
/// Default unification rules.
mod unify;
/// Values exported to stylesheet scripts.
pub mod value;

// Re-exports for convenience
pub use algebra::{DefaultAlgebra, SelectorAlgebra};
pub use ast::{
    AttributeSelector, Combinator, ComplexComponent, ComplexSelector, CompoundSelector,
    PseudoSelector, SelectorList, SimpleSelector,
};
pub use error::{SelectorError, SelectorResult};
pub use value::{ListSeparator, Value};
