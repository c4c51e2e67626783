//! Common utilities for the Sable preprocessor.
//!
//! This crate provides shared infrastructure used by all compiler components:
//! - **Source spans** - locations attached to user-facing errors
//! - **Warning System** - deduplicated warnings routed through `tracing`

pub mod span;
pub mod warning;

pub use span::SourceSpan;
pub use warning::{clear_warnings, warn_once};
