//! Compiler warnings routed through `tracing`.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector algebra and later compilation stages to report
//! output that is accepted but is not valid CSS.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about questionable output (emits once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("selector", "\".a > > .b\" is not valid CSS");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        tracing::warn!("[Sable {component}] {message}");
    }
}

/// Remember a warning, returning `false` if it was already recorded.
fn record(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(format!("[{component}] {message}"))
}

/// Clear all recorded warnings (call when starting a new compilation)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
