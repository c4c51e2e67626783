//! The selector tree.
//!
//! Every type here is an immutable value: constructors validate their
//! invariants once, and every algorithm in this crate builds new values
//! rather than editing existing ones.

mod complex;
mod compound;
mod list;
mod simple;

pub use complex::{Combinator, ComplexComponent, ComplexSelector};
pub use compound::CompoundSelector;
pub use list::SelectorList;
pub use simple::{AttributeSelector, PseudoSelector, SimpleSelector};
