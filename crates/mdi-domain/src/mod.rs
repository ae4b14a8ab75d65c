//! # Domain Layer
//!
//! Core types and business logic for marker-based dependency injection.
//! This layer is pure: no I/O, no logging, no runtime dependencies beyond
//! serialization and error derivation.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Domain constants (the reserved marker sigil) |
//! | [`error`] | Error and Result types |
//! | [`ports`] | Port traits implemented by the infrastructure layer |
//! | [`resolution`] | The argument resolution algorithm |
//! | [`value_objects`] | Parameter slots, signatures, and erased values |

pub mod constants;
pub mod error;
pub mod ports;
pub mod resolution;
pub mod value_objects;

// Re-export commonly used types
pub use constants::DEFAULT_SIGIL;
pub use error::{Error, Result};
pub use ports::DependencyProvider;
pub use resolution::resolve_arguments;
pub use value_objects::{
    ParamSlot, ParseOptions, Signature, Value, clean_name, erase, is_marked,
};
