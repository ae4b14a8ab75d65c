//! Dependency lookup port

use crate::value_objects::Value;
use std::collections::HashMap;

/// Port: read access to registered dependencies
///
/// Implementors map a plain dependency name (no sigil) to its current
/// value. Absence is a normal outcome, not an error: the resolution
/// algorithm fills unresolvable slots with `None`.
pub trait DependencyProvider: Send + Sync {
    /// Current value registered under `name`, if any
    fn resolve(&self, name: &str) -> Option<Value>;
}

/// A plain map is a provider; useful for tests and one-off resolution
impl DependencyProvider for HashMap<String, Value> {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}
