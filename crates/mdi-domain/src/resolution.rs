//! The argument resolution algorithm
//!
//! Given a frozen signature and the arguments supplied at one call site,
//! produce the final argument list: injected slots read the provider,
//! positional slots consume call arguments strictly left-to-right among
//! themselves. This is the core of the whole container; everything else
//! is registration and wiring.
//!
//! ```text
//! signature: ($one, three, $two)      registry: one=1, two=2
//! call args: [3]
//!                  │
//!                  ▼
//! resolved:  [Some(1), Some(3), Some(2)]
//! ```

use crate::ports::DependencyProvider;
use crate::value_objects::{ParamSlot, Signature, Value};

/// Resolve the final argument list for one invocation
///
/// Iterates the signature in declaration order while a separate cursor
/// walks `call_args`. The cursor advances only when a positional slot
/// consumes an argument, so injected slots never swallow a caller's
/// value no matter where they sit. Surplus call arguments are dropped;
/// exhausted positional slots and unregistered dependencies resolve to
/// `None`.
///
/// The result always has exactly `signature.len()` entries.
pub fn resolve_arguments(
    provider: &dyn DependencyProvider,
    signature: &Signature,
    call_args: &[Value],
) -> Vec<Option<Value>> {
    let mut resolved = Vec::with_capacity(signature.len());
    let mut cursor = 0;

    for slot in signature {
        let value = match slot {
            ParamSlot::Injected(name) => provider.resolve(name),
            ParamSlot::Positional(_) => {
                let value = call_args.get(cursor).cloned();
                if value.is_some() {
                    cursor += 1;
                }
                value
            }
        };
        resolved.push(value);
    }

    resolved
}
