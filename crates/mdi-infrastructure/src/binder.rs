//! Wrapping functions with resolution behavior

use crate::registry::DependencyRegistry;
use mdi_domain::resolution::resolve_arguments;
use mdi_domain::value_objects::{Signature, Value};
use std::fmt;
use tracing::trace;

/// A wrapped function whose arguments are resolved per invocation
///
/// Holds the signature frozen at bind time and a clone of the registry,
/// which shares storage with the original: registrations made after
/// binding are visible to later calls. The wrapper has no arity of its
/// own — `call` accepts any number of inbound arguments and recomputes
/// the resolved list every time.
///
/// ## Example
///
/// ```rust
/// use mdi_domain::value_objects::{Signature, erase};
/// use mdi_infrastructure::registry::DependencyRegistry;
///
/// let di = DependencyRegistry::new();
/// di.register("two", 2_i32);
///
/// let sum = di.bind(Signature::parse("fn sum(one, $two)").unwrap(), |args| {
///     args.iter()
///         .flatten()
///         .filter_map(|value| value.downcast_ref::<i32>())
///         .sum::<i32>()
/// });
///
/// assert_eq!(sum.call([erase(1_i32)]), 3);
/// ```
pub struct BoundFunction<R> {
    registry: DependencyRegistry,
    signature: Signature,
    func: Box<dyn Fn(Vec<Option<Value>>) -> R + Send + Sync>,
}

impl<R> BoundFunction<R> {
    pub(crate) fn new<F>(registry: DependencyRegistry, signature: Signature, func: F) -> Self
    where
        F: Fn(Vec<Option<Value>>) -> R + Send + Sync + 'static,
    {
        Self {
            registry,
            signature,
            func: Box::new(func),
        }
    }

    /// Invoke the wrapped function
    ///
    /// Resolves the argument list against the live registry and the
    /// frozen signature, then calls through. Surplus arguments are
    /// dropped and missing ones arrive as `None`; supplying the wrong
    /// count is not an error.
    pub fn call<I>(&self, args: I) -> R
    where
        I: IntoIterator<Item = Value>,
    {
        let call_args: Vec<Value> = args.into_iter().collect();
        trace!(
            signature = %self.signature,
            supplied = call_args.len(),
            "invoking bound function"
        );
        let resolved = resolve_arguments(&self.registry, &self.signature, &call_args);
        (self.func)(resolved)
    }

    /// The declared parameter list frozen at bind time
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl<R> fmt::Debug for BoundFunction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundFunction")
            .field("signature", &self.signature.to_string())
            .field("registry", &self.registry)
            .finish()
    }
}
