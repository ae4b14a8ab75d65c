//! Thread-safe dependency registry

use crate::binder::BoundFunction;
use dashmap::DashMap;
use mdi_domain::error::Result;
use mdi_domain::ports::DependencyProvider;
use mdi_domain::value_objects::{Signature, Value, clean_name, is_marked};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Mapping from dependency name to value, plus the bind operation
///
/// Created empty; mutated only by registration (re-registering a name
/// overwrites the previous value). There is no removal. The registry is
/// `Clone`, and clones share the same underlying map, so a bound
/// function holding a clone observes registrations made after binding.
///
/// Concurrent registration and lookup are serialized by the sharded map;
/// no ordering is guaranteed across threads beyond that.
///
/// ## Example
///
/// ```rust
/// use mdi_infrastructure::registry::DependencyRegistry;
///
/// let di = DependencyRegistry::new();
/// di.register("one", 1_i32).register("two", 2_i32);
///
/// let one = di.lookup("$one").unwrap();
/// assert_eq!(one.downcast_ref::<i32>(), Some(&1));
/// assert!(di.lookup("one").is_none());
/// ```
#[derive(Clone, Default)]
pub struct DependencyRegistry {
    /// Map of registered dependencies by plain name
    deps: Arc<DashMap<String, Value>>,
}

impl DependencyRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dependency, overwriting any prior value for the name
    ///
    /// Returns `&Self` so registrations can be chained. The name is the
    /// plain key; lookups and injected parameters refer to it with the
    /// sigil prefix.
    pub fn register<T: Any + Send + Sync>(&self, name: impl Into<String>, dep: T) -> &Self {
        self.register_value(name, Arc::new(dep))
    }

    /// Register an already-erased dependency value
    pub fn register_value(&self, name: impl Into<String>, dep: Value) -> &Self {
        let name = name.into();
        debug!(dependency = %name, "registering dependency");
        self.deps.insert(name, dep);
        self
    }

    /// Get a dependency by its marked name, e.g. `$config`
    ///
    /// The sigil is mandatory: a name without it returns `None` even if
    /// the plain key is registered. Unknown names also return `None`;
    /// absence is a normal, silent outcome.
    pub fn lookup(&self, marked_name: &str) -> Option<Value> {
        if !is_marked(marked_name) {
            trace!(name = %marked_name, "lookup without marker sigil");
            return None;
        }
        let name = clean_name(marked_name);
        let value = self.resolve(name);
        if value.is_none() {
            debug!(dependency = %name, "dependency not registered");
        }
        value
    }

    /// Typed lookup by marked name
    ///
    /// Returns `None` when the dependency is absent or registered under
    /// a different concrete type.
    pub fn lookup_as<T: Any + Send + Sync>(&self, marked_name: &str) -> Option<Arc<T>> {
        self.lookup(marked_name)
            .and_then(|value| value.downcast::<T>().ok())
    }

    /// Names of all registered dependencies
    pub fn names(&self) -> Vec<String> {
        self.deps.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered dependencies
    pub fn len(&self) -> usize {
        self.deps.len()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// Wrap a function so its arguments are resolved at every call
    ///
    /// The signature is frozen here; the registry is read live on each
    /// invocation through the clone the bound function holds.
    pub fn bind<F, R>(&self, signature: Signature, func: F) -> BoundFunction<R>
    where
        F: Fn(Vec<Option<Value>>) -> R + Send + Sync + 'static,
    {
        trace!(signature = %signature, "binding function");
        BoundFunction::new(self.clone(), signature, func)
    }

    /// Parse a declaration and bind in one step
    pub fn bind_parsed<F, R>(&self, decl: &str, func: F) -> Result<BoundFunction<R>>
    where
        F: Fn(Vec<Option<Value>>) -> R + Send + Sync + 'static,
    {
        Ok(self.bind(Signature::parse(decl)?, func))
    }
}

impl DependencyProvider for DependencyRegistry {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.deps.get(name).map(|entry| Arc::clone(entry.value()))
    }
}

impl fmt::Debug for DependencyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyRegistry")
            .field("registered", &self.len())
            .finish()
    }
}
