//! Parameter slot classification
//!
//! A declared parameter name either carries the reserved sigil (resolved
//! from the registry) or it does not (resolved positionally from call
//! arguments). Instead of re-inspecting the raw token at every call, the
//! classification happens once and the resolution algorithm operates over
//! the typed [`ParamSlot`] sequence.

use crate::constants::DEFAULT_SIGIL;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: One declared parameter slot
///
/// ## Example
///
/// ```rust
/// use mdi_domain::value_objects::ParamSlot;
///
/// assert_eq!(
///     ParamSlot::parse("$config").unwrap(),
///     ParamSlot::Injected("config".to_string())
/// );
/// assert_eq!(
///     ParamSlot::parse("name").unwrap(),
///     ParamSlot::Positional("name".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamSlot {
    /// Parameter resolved from the registry; the name is stored without
    /// the sigil, matching the key used at registration
    Injected(String),
    /// Parameter resolved positionally from call arguments
    Positional(String),
}

impl ParamSlot {
    /// Classify a single declared parameter token using the default sigil
    pub fn parse(token: &str) -> Result<Self> {
        Self::parse_with(token, DEFAULT_SIGIL)
    }

    /// Classify a single declared parameter token using a custom sigil
    ///
    /// Empty tokens and a bare sigil are rejected: a declaration that
    /// produces them cannot be bound meaningfully, so it fails loudly
    /// rather than resolving to nothing at every call.
    pub fn parse_with(token: &str, sigil: char) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::signature("empty parameter name"));
        }
        match token.strip_prefix(sigil) {
            Some("") => Err(Error::signature(format!(
                "marked parameter `{token}` is missing a dependency name"
            ))),
            Some(name) => Ok(Self::Injected(name.to_string())),
            None => Ok(Self::Positional(token.to_string())),
        }
    }

    /// The declared name, without the sigil for injected slots
    pub fn name(&self) -> &str {
        match self {
            Self::Injected(name) | Self::Positional(name) => name,
        }
    }

    /// Whether this slot is resolved from the registry
    pub fn is_injected(&self) -> bool {
        matches!(self, Self::Injected(_))
    }
}

impl fmt::Display for ParamSlot {
    /// Renders the declared form, using the default sigil for injected slots
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Injected(name) => write!(f, "{DEFAULT_SIGIL}{name}"),
            Self::Positional(name) => write!(f, "{name}"),
        }
    }
}

/// Check whether a raw parameter name carries the reserved sigil
///
/// Purely positional on the first character; an empty name is not marked.
pub fn is_marked(name: &str) -> bool {
    name.starts_with(DEFAULT_SIGIL)
}

/// Strip the leading sigil from a marked name
///
/// Removes exactly the first character. Callers are expected to gate on
/// [`is_marked`] first: on an unmarked name this still drops the first
/// character (`clean_name("four") == "our"`). The typed [`ParamSlot`]
/// API does not have this hazard.
pub fn clean_name(name: &str) -> &str {
    let mut chars = name.chars();
    chars.next();
    chars.as_str()
}
