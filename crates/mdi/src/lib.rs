//! # mdi
//!
//! Marker-based dependency injection: register named values, wrap
//! ordinary functions, and have marked parameters filled in from the
//! registry at every call.
//!
//! A parameter name carrying the `$` sigil is resolved from the
//! registry; plain names consume the caller's arguments left-to-right
//! among themselves, skipping injected slots entirely. Surplus arguments
//! are dropped and missing ones arrive as `None` — arity mismatches are
//! never errors.
//!
//! ## Example
//!
//! ```rust
//! use mdi::domain::value_objects::{Signature, erase};
//! use mdi::infrastructure::registry::DependencyRegistry;
//!
//! let di = DependencyRegistry::new();
//! di.register("two", 2_i32);
//!
//! let sum = di.bind(Signature::parse("fn sum(one, $two)").unwrap(), |args| {
//!     args.iter()
//!         .flatten()
//!         .filter_map(|value| value.downcast_ref::<i32>())
//!         .sum::<i32>()
//! });
//!
//! assert_eq!(sum.call([erase(1_i32)]), 3);
//!
//! // The registry is read live: later registrations are visible
//! di.register("two", 20_i32);
//! assert_eq!(sum.call([erase(1_i32)]), 21);
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - parameter slots, signatures, the resolution algorithm,
//!   and the provider port (pure, no I/O)
//! - `infrastructure` - the thread-safe registry, the binder, and
//!   logging setup

/// Domain layer - core types and the resolution algorithm
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use mdi_domain::*;
}

/// Infrastructure layer - registry, binder, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use mdi_infrastructure::*;
}
